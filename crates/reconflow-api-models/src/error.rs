//! Errors raised while decoding summary payloads.

use thiserror::Error;

/// Reasons a summary response body was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// Tool stats must be a JSON object.
    #[error("tool stats payload must be an object, got {found}")]
    NotAnObject {
        /// JSON kind that was received instead.
        found: &'static str,
    },
    /// Scan results must be a JSON array.
    #[error("scan results payload must be an array, got {found}")]
    NotAnArray {
        /// JSON kind that was received instead.
        found: &'static str,
    },
    /// A count field was present but not a non-negative integer.
    #[error("invalid tool counts: {detail}")]
    InvalidCounts {
        /// Decoder diagnostic.
        detail: String,
    },
    /// The object carried none of the known count fields.
    #[error("tool stats payload has no recognized counts")]
    Unrecognized,
}
