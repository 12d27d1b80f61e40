//! Part-of-speech frequency counting.

use ahash::AHashMap;

use crate::engine::{AnalysisEngine, PosTag, Token};
use crate::error::Result;

/// Tallies part-of-speech tags for a single text.
///
/// The text is analyzed once, eagerly, at construction; the counter retains
/// the resulting token sequence for its lifetime and is immutable afterwards.
///
/// # Examples
///
/// ```rust
/// use textprep::{AnalysisEngine, FrequencyCounter, PosTag};
///
/// # fn main() -> textprep::Result<()> {
/// let engine = AnalysisEngine::new()?;
/// let counter = FrequencyCounter::new(&engine, "The fox runs.")?;
///
/// let table = counter.count_frequency();
/// assert_eq!(table[&PosTag::Punctuation], 1);
/// assert_eq!(table.values().sum::<usize>(), counter.token_count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FrequencyCounter {
    tokens: Vec<Token>,
}

impl FrequencyCounter {
    /// Analyze `text` and retain its token sequence.
    ///
    /// This is the only place analysis occurs for this counter.
    ///
    /// # Errors
    ///
    /// Propagates an `Analysis` error if the engine cannot process `text`.
    pub fn new(engine: &AnalysisEngine, text: &str) -> Result<Self> {
        let analysis = engine.analyze(text)?;
        Ok(Self {
            tokens: analysis.into_tokens(),
        })
    }

    /// Count the frequency of each part-of-speech tag.
    ///
    /// Returns a fresh table on every call; repeated calls on the same
    /// counter return equal tables. The counts sum to
    /// [`token_count`](Self::token_count).
    pub fn count_frequency(&self) -> AHashMap<PosTag, usize> {
        let mut table: AHashMap<PosTag, usize> = AHashMap::new();
        for token in &self.tokens {
            *table.entry(token.tag).or_insert(0) += 1;
        }
        table
    }

    /// Total number of tokens retained from the analyzed text.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_token_count() {
        let engine = AnalysisEngine::new().unwrap();
        let counter = FrequencyCounter::new(&engine, "The quick brown fox jumps over the lazy dog.").unwrap();

        let table = counter.count_frequency();
        assert_eq!(table.values().sum::<usize>(), counter.token_count());
    }

    #[test]
    fn test_repeated_calls_are_equal() {
        let engine = AnalysisEngine::new().unwrap();
        let counter = FrequencyCounter::new(&engine, "One, two, three!").unwrap();

        assert_eq!(counter.count_frequency(), counter.count_frequency());
    }

    #[test]
    fn test_tags_are_tallied() {
        let engine = AnalysisEngine::new().unwrap();
        let counter = FrequencyCounter::new(&engine, "One, two, three!").unwrap();

        let table = counter.count_frequency();
        assert_eq!(table[&PosTag::Punctuation], 3);
    }

    #[test]
    fn test_empty_text_yields_empty_table() {
        let engine = AnalysisEngine::new().unwrap();
        let counter = FrequencyCounter::new(&engine, "").unwrap();

        assert!(counter.count_frequency().is_empty());
        assert_eq!(counter.token_count(), 0);
    }
}
