//! Rejected inputs and degenerate documents through the public API.

use chrono::Utc;
use docsim::{
    Classification, ClassificationScale, Confidence, PlagiarismChecker, PlagiarismConfig,
    SourceDocument,
};

fn source(id: &str, content: &str) -> SourceDocument {
    SourceDocument {
        id: id.into(),
        title: format!("Document {id}"),
        content: content.into(),
        created_at: Utc::now(),
    }
}

#[test]
fn empty_document_is_fully_original() {
    let checker = PlagiarismChecker::with_defaults();
    let corpus = vec![source("b", "Some prior document with plenty of ordinary words in it.")];

    let result = checker.check("a", "", &corpus).unwrap();

    assert!(result.matches.is_empty());
    assert_eq!(result.similarity_score, 0.0);
    assert_eq!(result.originality_score, 100.0);
    assert_eq!(result.classification, Classification::Original);
    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.stats.total_words, 0);
    assert_eq!(result.stats.fingerprint_count, 0);
}

#[test]
fn whitespace_only_document_behaves_like_empty() {
    let checker = PlagiarismChecker::with_defaults();
    let result = checker.check("a", "  \t\n  ", &[]).unwrap();
    assert_eq!(result.stats.total_words, 0);
    assert_eq!(result.similarity_score, 0.0);
}

#[test]
fn document_shorter_than_the_ngram_size_yields_no_matches() {
    let checker = PlagiarismChecker::with_defaults();
    let corpus = vec![source("b", "too few words")];
    let result = checker.check("a", "too few words", &corpus).unwrap();
    assert!(result.matches.is_empty());
    assert_eq!(result.stats.fingerprint_count, 0);
}

#[test]
fn zero_ngram_size_is_rejected() {
    let config = PlagiarismConfig::new().with_ngram_size(0);
    assert!(PlagiarismChecker::new(config).is_err());
}

#[test]
fn zero_window_size_is_rejected() {
    let config = PlagiarismConfig::new().with_window_size(0);
    assert!(PlagiarismChecker::new(config).is_err());
}

#[test]
fn zero_min_match_length_is_rejected() {
    let config = PlagiarismConfig::new().with_min_match_length(0);
    let err = PlagiarismChecker::new(config).unwrap_err();
    assert!(err.to_string().contains("min_match_length"));
}

#[test]
fn non_monotonic_classification_scale_is_rejected() {
    let config = PlagiarismConfig {
        classification: ClassificationScale {
            minor: 40.0,
            moderate: 20.0,
            significant: 60.0,
            severe: 80.0,
        },
        ..PlagiarismConfig::default()
    };
    let err = PlagiarismChecker::new(config).unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}

#[test]
fn overlaps_shorter_than_min_match_length_are_dropped() {
    // The shared run is 7 words; with min_match_length 8 nothing qualifies.
    let shared = "seven shared words appear exactly right here";
    let query = format!("A completely different framing device surrounds {shared} in this draft.");
    let prior = format!("{shared} but the remainder diverges into another topic altogether.");

    let config = PlagiarismConfig::new().with_min_match_length(8);
    let checker = PlagiarismChecker::new(config).unwrap();
    let result = checker.check("a", &query, &[source("b", &prior)]).unwrap();

    assert!(result.matches.is_empty());
    assert_eq!(result.stats.matched_words, 0);
}

#[test]
fn corpus_entry_with_the_query_id_never_matches() {
    let text = "The exact same document stored under the exact same identifier in the corpus \
                must never be reported as a match against itself.";
    let checker = PlagiarismChecker::with_defaults();
    let result = checker.check("a", text, &[source("a", text)]).unwrap();
    assert!(result.matches.is_empty());
    assert_eq!(result.similarity_score, 0.0);
}

#[test]
fn quick_check_on_an_empty_document_flags_nothing() {
    let checker = PlagiarismChecker::with_defaults();
    let corpus = vec![source("b", "Some prior document with plenty of ordinary words in it.")];
    let report = checker.quick_check("a", "", &corpus).unwrap();
    assert!(report.flagged.is_empty());
    assert_eq!(report.query_hashes, 0);
}
