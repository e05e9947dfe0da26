use thiserror::Error;

use fingerprint::FingerprintError;

/// Errors produced by the plagiarism engine.
///
/// The engine itself is pure computation; every variant here is a rejected
/// input, caught at the API boundary before any work happens.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed [`crate::PlagiarismConfig`].
    #[error("invalid plagiarism config: {0}")]
    InvalidConfig(String),
    /// Malformed fingerprinting parameters.
    #[error("fingerprint error: {0}")]
    Fingerprint(#[from] FingerprintError),
}
