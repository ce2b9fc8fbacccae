//! Error types for check parameter validation.
//!
//! Every constraint violation surfaces synchronously at the call site that
//! supplied the value. Nothing here is retryable: an error means the input
//! was invalid and the call must be corrected.

use thiserror::Error;

use crate::types::CheckType;

/// Errors raised while building check request parameters.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The supplied file identifier is not numeric.
    #[error("invalid file id '{0}': file ids must be numeric")]
    InvalidFileId(String),

    /// The supplied comparison type is not one of the recognized wire names.
    #[error("unknown check type '{given}', allowed types are: {allowed}", allowed = CheckType::WIRE_NAMES.join(", "))]
    UnknownCheckType {
        /// The string that failed to parse.
        given: String,
    },

    /// A `doc_vs_docs` check was configured without any comparison targets.
    #[error("versus files cannot be empty for check type 'doc_vs_docs'")]
    MissingVersusFiles,

    /// Sensitivity outside the accepted `[0.0, 1.0]` interval.
    #[error("sensitivity must be a float from 0.0 to 1.0, got {0}")]
    SensitivityOutOfRange(f64),

    /// Words sensitivity outside the accepted `[8, 999]` interval.
    #[error("words sensitivity must be an integer from 8 to 999, got {0}")]
    WordsSensitivityOutOfRange(u32),
}

/// Result type alias for parameter-building operations.
pub type Result<T> = std::result::Result<T, CheckError>;
