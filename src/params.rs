//! Check request parameters.
//!
//! [`CheckParams`] collects everything a single check submission needs and
//! assembles the JSON payload the service expects. Construction fixes the
//! subject file; every other knob has a chainable setter, and setters that
//! take constrained values validate before committing anything, so a failed
//! call leaves the previous configuration untouched.

use serde_json::json;

use crate::error::CheckError;
use crate::types::{CheckType, FileId};

/// Parameters of a single document check request.
///
/// # Examples
///
/// ```rust
/// use simcheck::CheckParams;
///
/// let params = CheckParams::new(42u64)
///     .with_words_sensitivity(12)?
///     .with_exclude_references(true);
///
/// let payload = params.to_payload();
/// assert_eq!(payload["options"]["words_sensitivity"], 12);
/// assert_eq!(payload["options"]["exclude_references"], 1);
/// # Ok::<(), simcheck::CheckError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CheckParams {
    file_id: FileId,
    check_type: CheckType,
    callback_url: Option<String>,
    exclude_citations: bool,
    exclude_references: bool,
    exclude_self_plagiarism: bool,
    words_sensitivity: u32,
    sensitivity: f64,
}

impl CheckParams {
    /// Lowest accepted words sensitivity. Also the default.
    pub const WORDS_SENSITIVITY_MIN: u32 = 8;
    /// Highest accepted words sensitivity.
    pub const WORDS_SENSITIVITY_MAX: u32 = 999;

    /// Create parameters for checking the given file against the public web.
    ///
    /// Defaults match the service's own: type `web`, words sensitivity `8`,
    /// all exclusion flags off, no explicit sensitivity, no callback.
    pub fn new(file_id: impl Into<FileId>) -> Self {
        Self {
            file_id: file_id.into(),
            check_type: CheckType::default(),
            callback_url: None,
            exclude_citations: false,
            exclude_references: false,
            exclude_self_plagiarism: false,
            words_sensitivity: Self::WORDS_SENSITIVITY_MIN,
            sensitivity: 0.0,
        }
    }

    /// Set the comparison mode.
    ///
    /// Fails with [`CheckError::MissingVersusFiles`] when given
    /// [`CheckType::DocVsDocs`] without any targets. The target list is
    /// stored exactly as supplied: order preserved, duplicates kept.
    pub fn with_check_type(mut self, check_type: CheckType) -> Result<Self, CheckError> {
        if matches!(&check_type, CheckType::DocVsDocs(files) if files.is_empty()) {
            return Err(CheckError::MissingVersusFiles);
        }
        self.check_type = check_type;
        Ok(self)
    }

    /// Set the URL the service notifies once the check finishes.
    ///
    /// Stored verbatim; the service, not this crate, decides what a valid
    /// callback target is. An empty string counts as unset and is omitted
    /// from the payload.
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Exclude quoted passages from matching.
    pub const fn with_exclude_citations(mut self, exclude: bool) -> Self {
        self.exclude_citations = exclude;
        self
    }

    /// Exclude bibliography and reference sections from matching.
    pub const fn with_exclude_references(mut self, exclude: bool) -> Self {
        self.exclude_references = exclude;
        self
    }

    /// Exclude the author's own previously submitted documents from matching.
    pub const fn with_exclude_self_plagiarism(mut self, exclude: bool) -> Self {
        self.exclude_self_plagiarism = exclude;
        self
    }

    /// Set the match-strictness threshold, a float in `[0.0, 1.0]`.
    ///
    /// A stored value of exactly `0` means "use the service default" and is
    /// omitted from the payload, so `0` cannot be requested explicitly. That
    /// is the service's contract and is kept as-is.
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Result<Self, CheckError> {
        if !(0.0..=1.0).contains(&sensitivity) {
            return Err(CheckError::SensitivityOutOfRange(sensitivity));
        }
        self.sensitivity = sensitivity;
        Ok(self)
    }

    /// Set the minimum matched word-run length, an integer in `[8, 999]`.
    pub fn with_words_sensitivity(mut self, words_sensitivity: u32) -> Result<Self, CheckError> {
        let accepted = Self::WORDS_SENSITIVITY_MIN..=Self::WORDS_SENSITIVITY_MAX;
        if !accepted.contains(&words_sensitivity) {
            return Err(CheckError::WordsSensitivityOutOfRange(words_sensitivity));
        }
        self.words_sensitivity = words_sensitivity;
        Ok(self)
    }

    /// The subject file this check runs on.
    pub const fn file_id(&self) -> FileId {
        self.file_id
    }

    /// The configured comparison mode.
    pub const fn check_type(&self) -> &CheckType {
        &self.check_type
    }

    /// The configured callback URL, if any.
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    /// Whether quoted passages are excluded from matching.
    pub const fn exclude_citations(&self) -> bool {
        self.exclude_citations
    }

    /// Whether reference sections are excluded from matching.
    pub const fn exclude_references(&self) -> bool {
        self.exclude_references
    }

    /// Whether the author's own documents are excluded from matching.
    pub const fn exclude_self_plagiarism(&self) -> bool {
        self.exclude_self_plagiarism
    }

    /// The current match-strictness threshold. `0` means "service default".
    pub const fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// The current minimum matched word-run length.
    pub const fn words_sensitivity(&self) -> u32 {
        self.words_sensitivity
    }

    /// Assemble the JSON payload for the check-create endpoint.
    ///
    /// Always present: `file_id`, `type`, and an `options` object holding
    /// `words_sensitivity` plus the three exclusion flags encoded as `0`/`1`
    /// integers. `options.sensitivity` appears only when a value above `0`
    /// was set, `versus_files` only for `doc_vs_docs`, and `callback_url`
    /// only when set to a non-empty string.
    ///
    /// This is a pure read: repeated calls without intervening setters
    /// produce structurally identical values.
    pub fn to_payload(&self) -> serde_json::Value {
        let mut options = json!({
            "words_sensitivity": self.words_sensitivity,
            "exclude_citations": u8::from(self.exclude_citations),
            "exclude_references": u8::from(self.exclude_references),
            "exclude_self_plagiarism": u8::from(self.exclude_self_plagiarism),
        });
        if self.sensitivity > 0.0 {
            options["sensitivity"] = json!(self.sensitivity);
        }

        let mut payload = json!({
            "file_id": self.file_id,
            "type": self.check_type.as_str(),
            "options": options,
        });
        if let CheckType::DocVsDocs(versus_files) = &self.check_type {
            payload["versus_files"] = json!(versus_files);
        }
        if let Some(url) = &self.callback_url
            && !url.is_empty()
        {
            payload["callback_url"] = json!(url);
        }

        tracing::debug!(
            file_id = %self.file_id,
            check_type = %self.check_type,
            "assembled check payload"
        );
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let params = CheckParams::new(42u64);
        assert_eq!(params.file_id(), FileId::new(42));
        assert_eq!(*params.check_type(), CheckType::Web);
        assert_eq!(params.words_sensitivity(), 8);
        assert_eq!(params.sensitivity(), 0.0);
        assert!(params.callback_url().is_none());
        assert!(!params.exclude_citations());
        assert!(!params.exclude_references());
        assert!(!params.exclude_self_plagiarism());
    }

    #[test]
    fn sensitivity_accepts_closed_interval() {
        let params = CheckParams::new(1u64).with_sensitivity(0.0).unwrap();
        let params = params.with_sensitivity(1.0).unwrap();
        let params = params.with_sensitivity(0.5).unwrap();
        assert_eq!(params.sensitivity(), 0.5);

        let low = CheckParams::new(1u64).with_sensitivity(-0.1);
        assert!(matches!(
            low.unwrap_err(),
            CheckError::SensitivityOutOfRange(_)
        ));
        let high = CheckParams::new(1u64).with_sensitivity(1.1);
        assert!(matches!(
            high.unwrap_err(),
            CheckError::SensitivityOutOfRange(_)
        ));
    }

    #[test]
    fn words_sensitivity_accepts_closed_interval() {
        let params = CheckParams::new(1u64).with_words_sensitivity(8).unwrap();
        let params = params.with_words_sensitivity(999).unwrap();
        assert_eq!(params.words_sensitivity(), 999);

        let low = CheckParams::new(1u64).with_words_sensitivity(7);
        assert!(matches!(
            low.unwrap_err(),
            CheckError::WordsSensitivityOutOfRange(7)
        ));
        let high = CheckParams::new(1u64).with_words_sensitivity(1000);
        assert!(matches!(
            high.unwrap_err(),
            CheckError::WordsSensitivityOutOfRange(1000)
        ));
    }

    #[test]
    fn doc_vs_docs_requires_targets() {
        let empty = CheckParams::new(1u64).with_check_type(CheckType::DocVsDocs(Vec::new()));
        assert!(matches!(
            empty.unwrap_err(),
            CheckError::MissingVersusFiles
        ));

        let targets = vec![FileId::new(9), FileId::new(7), FileId::new(9)];
        let params = CheckParams::new(1u64)
            .with_check_type(CheckType::DocVsDocs(targets.clone()))
            .unwrap();
        assert_eq!(params.check_type().versus_files(), Some(&targets[..]));
    }

    #[test]
    fn failed_setter_leaves_prior_state_intact() {
        let params = CheckParams::new(1u64).with_sensitivity(0.3).unwrap();
        let before = params.to_payload();

        assert!(params.clone().with_sensitivity(2.0).is_err());
        assert!(params.clone().with_words_sensitivity(0).is_err());

        assert_eq!(params.to_payload(), before);
    }
}
