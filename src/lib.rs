//! # Docsim
//!
//! Document similarity and plagiarism detection engine. The pipeline runs
//! in fixed stages:
//!
//! 1. **Canonicalize** ([`canonical`]): lowercase, strip punctuation, split
//!    into words with byte offsets into the original text.
//! 2. **Fingerprint** ([`fingerprint`]): polynomial hashes over word
//!    n-grams, thinned by winnowing so any shared run of at least
//!    `window + ngram - 1` words is guaranteed to share a fingerprint.
//! 3. **Index and match** ([`index`]): inverted hash lookup with mandatory
//!    n-gram text re-verification, then span reconstruction that widens
//!    matches to the real edges of each copied run.
//! 4. **Detect** ([`detect`]): quotes, citations, and evasion heuristics
//!    over the raw text.
//! 5. **Report** (this crate): exclusion policy, statistics, scoring, and
//!    classification into a single [`PlagiarismResult`].
//!
//! [`PlagiarismChecker`] is the single entry point:
//!
//! ```
//! use docsim::{PlagiarismChecker, SourceDocument};
//! use chrono::Utc;
//!
//! let checker = PlagiarismChecker::with_defaults();
//! let corpus = vec![SourceDocument {
//!     id: "essay-1".into(),
//!     title: "Last year's essay".into(),
//!     content: "The quick brown fox jumps over the lazy dog every single \
//!               morning without fail.".into(),
//!     created_at: Utc::now(),
//! }];
//! let result = checker
//!     .check("draft", "An original draft about something else entirely.", &corpus)
//!     .unwrap();
//! assert_eq!(result.similarity_score, 0.0);
//! ```
//!
//! Everything is pure computation over caller-supplied text: no storage,
//! no network, no global state.

mod checker;
mod config;
mod error;
mod exclusion;
mod report;
mod types;

pub use crate::checker::PlagiarismChecker;
pub use crate::config::{
    CheckConfig, ClassificationScale, ExclusionConfig, PlagiarismConfig, QUICK_CHECK_NGRAM_SIZE,
    QUICK_CHECK_SHARED_HASH_THRESHOLD,
};
pub use crate::error::EngineError;
pub use crate::exclusion::{apply_exclusions, should_exclude_match};
pub use crate::report::{classify, confidence_for, similarity_score, tally_matches};
pub use crate::types::{
    Classification, Confidence, ExclusionReason, Match, PlagiarismResult, PlagiarismStats,
    QuickCheckReport, QuickFlag, SelfPlagiarismMatch, SourceDocument, SourceRef,
};

pub use canonical::{normalize, split_words, word_positions, NormalizedWord};
pub use detect::{
    detect_citations, detect_quotes, detect_suspicious_patterns, find_uncited_quotes,
    Citation, CitationFormat, QuoteSpan, QuoteStyle, SuspiciousPattern, SuspiciousPatternKind,
    UncitedQuote,
};
pub use fingerprint::{
    fingerprint_corpus, generate_fingerprints, Fingerprint, FingerprintConfig, FingerprintError,
    FingerprintSet,
};
pub use index::{find_matching_fingerprints, CandidatePair, FingerprintIndex, MatchSpan};
