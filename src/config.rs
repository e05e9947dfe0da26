//! Engine configuration.
//!
//! [`PlagiarismConfig`] is a pure value object: the defaults are constructed
//! fresh every time and are never mutated in place. Callers customize by
//! cloning and overriding (struct update syntax or the `with_*` builders).

use serde::{Deserialize, Serialize};

use fingerprint::FingerprintConfig;

use crate::error::EngineError;

/// N-gram size used by the quick-check path. Smaller than the full-check
/// default so short overlaps still intersect.
pub const QUICK_CHECK_NGRAM_SIZE: usize = 4;

/// A candidate is flagged by the quick check when the query shares more
/// than this many fingerprint hashes with it.
pub const QUICK_CHECK_SHARED_HASH_THRESHOLD: usize = 5;

/// Which kinds of legitimate text reuse are excluded from the score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExclusionConfig {
    /// Exclude matches fully contained in a quoted span.
    #[serde(default = "default_true")]
    pub quotes: bool,
    /// Exclude matches with a citation nearby.
    #[serde(default = "default_true")]
    pub citations: bool,
    /// Exclude matches containing common academic boilerplate.
    #[serde(default = "default_true")]
    pub common_phrases: bool,
    /// Caller-supplied phrases that are always legitimate (matched
    /// case-insensitively as substrings).
    #[serde(default)]
    pub custom_phrases: Vec<String>,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            quotes: true,
            citations: true,
            common_phrases: true,
            custom_phrases: Vec::new(),
        }
    }
}

/// Which optional checks run as part of a full check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// Compare against the supplied corpus of the author's own documents.
    #[serde(default = "default_true")]
    pub self_plagiarism: bool,
    /// Report substantive quotes that lack a nearby citation.
    #[serde(default = "default_true")]
    pub uncited_quotes: bool,
    /// Run the evasion heuristics over the raw text.
    #[serde(default = "default_true")]
    pub suspicious_patterns: bool,
    /// Carried for callers that also drive an external similarity service.
    /// This engine never acts on it; any network lookup is a collaborator
    /// concern outside the pure pipeline.
    #[serde(default)]
    pub external_api: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            self_plagiarism: true,
            uncited_quotes: true,
            suspicious_patterns: true,
            external_api: false,
        }
    }
}

/// Similarity-score boundaries between classification buckets, in percent.
///
/// Thresholds must be strictly increasing and within (0, 100]; together
/// with the half-open bucket ranges this keeps the classification monotonic
/// and exhaustive over [0, 100]. The exact values are a policy choice, not
/// an algorithmic one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClassificationScale {
    /// Scores at or above this are at least `Minor`.
    pub minor: f64,
    /// Scores at or above this are at least `Moderate`.
    pub moderate: f64,
    /// Scores at or above this are at least `Significant`.
    pub significant: f64,
    /// Scores at or above this are `Severe`.
    pub severe: f64,
}

impl Default for ClassificationScale {
    fn default() -> Self {
        Self {
            minor: 5.0,
            moderate: 15.0,
            significant: 30.0,
            severe: 50.0,
        }
    }
}

impl ClassificationScale {
    fn validate(&self) -> Result<(), EngineError> {
        let thresholds = [self.minor, self.moderate, self.significant, self.severe];
        if thresholds.iter().any(|t| !(*t > 0.0 && *t <= 100.0)) {
            return Err(EngineError::InvalidConfig(
                "classification thresholds must be within (0, 100]".into(),
            ));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(EngineError::InvalidConfig(
                "classification thresholds must be strictly increasing".into(),
            ));
        }
        Ok(())
    }
}

/// Full engine configuration for one check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlagiarismConfig {
    /// Number of words per n-gram.
    #[serde(default = "PlagiarismConfig::default_ngram_size")]
    pub ngram_size: usize,
    /// Winnowing window size.
    #[serde(default = "PlagiarismConfig::default_window_size")]
    pub window_size: usize,
    /// Minimum reported match length in words.
    #[serde(default = "PlagiarismConfig::default_min_match_length")]
    pub min_match_length: usize,
    #[serde(default)]
    pub exclusions: ExclusionConfig,
    #[serde(default)]
    pub checks: CheckConfig,
    #[serde(default)]
    pub classification: ClassificationScale,
}

impl PlagiarismConfig {
    pub(crate) fn default_ngram_size() -> usize {
        fingerprint::DEFAULT_NGRAM_SIZE
    }

    pub(crate) fn default_window_size() -> usize {
        fingerprint::DEFAULT_WINDOW_SIZE
    }

    pub(crate) fn default_min_match_length() -> usize {
        5
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

    /// Set the minimum reported match length in words.
    pub fn with_min_match_length(mut self, words: usize) -> Self {
        self.min_match_length = words;
        self
    }

    /// Validate every knob, failing fast with a descriptive error.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.fingerprint_config().validate()?;
        if self.min_match_length < 1 {
            return Err(EngineError::InvalidConfig(
                "min_match_length must be at least 1 word".into(),
            ));
        }
        self.classification.validate()
    }

    /// The fingerprinting parameters for the full check.
    pub fn fingerprint_config(&self) -> FingerprintConfig {
        FingerprintConfig::new()
            .with_ngram_size(self.ngram_size)
            .with_window_size(self.window_size)
    }

    /// The fingerprinting parameters for the quick check: same window,
    /// smaller n-grams.
    pub fn quick_fingerprint_config(&self) -> FingerprintConfig {
        FingerprintConfig::new()
            .with_ngram_size(QUICK_CHECK_NGRAM_SIZE)
            .with_window_size(self.window_size)
    }
}

impl Default for PlagiarismConfig {
    fn default() -> Self {
        Self {
            ngram_size: Self::default_ngram_size(),
            window_size: Self::default_window_size(),
            min_match_length: Self::default_min_match_length(),
            exclusions: ExclusionConfig::default(),
            checks: CheckConfig::default(),
            classification: ClassificationScale::default(),
        }
    }
}

fn default_true() -> bool {
    true
}
