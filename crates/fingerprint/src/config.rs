//! Configuration for the fingerprinting pipeline.
//!
//! Kept intentionally free of I/O or environment-dependent behavior so the
//! pipeline stays a pure function of `(text, config)`.

use serde::{Deserialize, Serialize};

use crate::error::FingerprintError;

/// Default n-gram size in words.
pub const DEFAULT_NGRAM_SIZE: usize = 5;

/// Default winnowing window size in hashes.
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// Tuning knobs for n-gram generation and winnowing.
///
/// Two documents fingerprinted under the same config are guaranteed to share
/// at least one fingerprint for any common word run of length
/// `window_size + ngram_size - 1` or more. Changing either knob changes
/// which hashes are selected, so fingerprints are only comparable between
/// sets produced with identical configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintConfig {
    /// Number of words per n-gram.
    #[serde(default = "FingerprintConfig::default_ngram_size")]
    pub ngram_size: usize,
    /// Winnowing window size.
    ///
    /// Larger windows keep fewer fingerprints but raise the minimum shared
    /// run length the guarantee covers.
    #[serde(default = "FingerprintConfig::default_window_size")]
    pub window_size: usize,
}

impl FingerprintConfig {
    pub(crate) fn default_ngram_size() -> usize {
        DEFAULT_NGRAM_SIZE
    }

    pub(crate) fn default_window_size() -> usize {
        DEFAULT_WINDOW_SIZE
    }

    /// Create a configuration with the default knobs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the n-gram size in words.
    pub fn with_ngram_size(mut self, n: usize) -> Self {
        self.ngram_size = n;
        self
    }

    /// Set the winnowing window size.
    pub fn with_window_size(mut self, w: usize) -> Self {
        self.window_size = w;
        self
    }

    /// Validate the configuration, failing fast on degenerate values.
    pub fn validate(&self) -> Result<(), FingerprintError> {
        if self.ngram_size < 1 {
            return Err(FingerprintError::InvalidNgramSize { n: self.ngram_size });
        }
        if self.window_size < 1 {
            return Err(FingerprintError::InvalidWindowSize { w: self.window_size });
        }
        Ok(())
    }

    /// Minimum shared word-run length for which a shared fingerprint is
    /// guaranteed (`w + k - 1`).
    pub fn guarantee_threshold(&self) -> usize {
        self.window_size + self.ngram_size - 1
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = FingerprintConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.ngram_size, 5);
        assert_eq!(cfg.window_size, 4);
        assert_eq!(cfg.guarantee_threshold(), 8);
    }

    #[test]
    fn zero_ngram_size_rejected() {
        let cfg = FingerprintConfig::new().with_ngram_size(0);
        assert!(matches!(
            cfg.validate(),
            Err(FingerprintError::InvalidNgramSize { n: 0 })
        ));
    }

    #[test]
    fn zero_window_size_rejected() {
        let cfg = FingerprintConfig::new().with_window_size(0);
        assert!(matches!(
            cfg.validate(),
            Err(FingerprintError::InvalidWindowSize { w: 0 })
        ));
    }

    #[test]
    fn serde_defaults_fill_missing_fields() {
        let cfg: FingerprintConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, FingerprintConfig::default());
    }
}
