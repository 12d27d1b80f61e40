//! Part-of-speech frequency integration tests.

use textprep::{AnalysisEngine, FrequencyCounter, PosTag, TextPrepError};

fn engine() -> AnalysisEngine {
    AnalysisEngine::new().expect("default engine construction should succeed")
}

/// The frequency table's counts sum to the analyzed token count.
#[test]
fn test_sum_invariant() -> anyhow::Result<()> {
    let engine = engine();

    let texts = [
        "The quick brown fox jumps over the lazy dog.",
        "One, two, three!",
        "Punctuation... everywhere?! Really.",
        "word",
    ];

    for text in texts {
        let counter = FrequencyCounter::new(&engine, text)?;
        let table = counter.count_frequency();
        assert_eq!(
            table.values().sum::<usize>(),
            counter.token_count(),
            "sum invariant violated for {:?}",
            text
        );
    }
    Ok(())
}

/// Repeated calls on the same counter return equal tables.
#[test]
fn test_determinism_across_calls() {
    let engine = engine();
    let counter = FrequencyCounter::new(&engine, "The fox is fast, the dog is not.").unwrap();

    let first = counter.count_frequency();
    let second = counter.count_frequency();
    assert_eq!(first, second);
}

/// Known tag counts for a small sentence.
#[test]
fn test_expected_tag_counts() {
    let engine = engine();
    let counter = FrequencyCounter::new(&engine, "The fox runs.").unwrap();

    let table = counter.count_frequency();
    assert_eq!(table[&PosTag::Determiner], 1);
    assert_eq!(table[&PosTag::Punctuation], 1);
    assert_eq!(counter.token_count(), 4);
}

/// Empty text yields an empty table.
#[test]
fn test_empty_text() {
    let engine = engine();
    let counter = FrequencyCounter::new(&engine, "").unwrap();

    assert!(counter.count_frequency().is_empty());
    assert_eq!(counter.token_count(), 0);
}

/// Construction fails up front when the engine cannot process the text.
#[test]
fn test_construction_propagates_analysis_error() {
    let engine = engine();
    let result = FrequencyCounter::new(&engine, "bad\0text");
    assert!(matches!(result.unwrap_err(), TextPrepError::Analysis { .. }));
}
