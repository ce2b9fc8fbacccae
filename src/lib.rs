//! # Simcheck - Typed Check Request Parameters
//!
//! Simcheck builds the request parameters for submitting document similarity
//! (plagiarism) checks to a checking service. It validates every constrained
//! value at the call site and assembles the canonical JSON payload the
//! check-create endpoint expects. Sending that payload is left to whatever
//! HTTP client the application already uses.
//!
//! ## Features
//!
//! - **Validating setters**: constrained values are checked when set, and a
//!   failed call never disturbs previously accepted configuration.
//! - **Closed comparison modes**: the five modes the service recognizes are
//!   an enum, and `doc_vs_docs` carries its comparison targets directly, so
//!   a target list can never accompany the wrong mode.
//! - **Library First**: no transport, no authentication, no response
//!   parsing. One struct in, one `serde_json::Value` out.
//!
//! ## Quick Start
//!
//! ```rust
//! use simcheck::prelude::*;
//!
//! fn main() -> Result<(), CheckError> {
//!     let params = CheckParams::new(42u64)
//!         .with_check_type(CheckType::DocVsDocs(vec![FileId::new(7), FileId::new(9)]))?
//!         .with_sensitivity(0.5)?
//!         .with_exclude_citations(true);
//!
//!     let payload = params.to_payload();
//!     assert_eq!(payload["type"], "doc_vs_docs");
//!     assert_eq!(payload["versus_files"], serde_json::json!([7, 9]));
//!
//!     // Hand `payload` to your HTTP layer.
//!     Ok(())
//! }
//! ```
#![deny(unsafe_code)]

pub mod error;
pub mod params;
pub mod types;

pub use error::CheckError;
pub use params::CheckParams;
pub use types::{CheckType, FileId};

/// Convenient re-exports for the common case.
pub mod prelude {
    pub use crate::error::CheckError;
    pub use crate::params::CheckParams;
    pub use crate::types::{CheckType, FileId};
}
