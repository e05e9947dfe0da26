use thiserror::Error;

/// Errors produced when validating fingerprinting configuration.
///
/// Fingerprinting itself is a pure function and cannot fail at runtime;
/// the only failure mode is a malformed configuration, rejected up front.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("ngram size must be at least 1, got {n}")]
    InvalidNgramSize { n: usize },
    #[error("winnowing window size must be at least 1, got {w}")]
    InvalidWindowSize { w: usize },
}
