//! Embedded English stopword list.
//!
//! The list is embedded in the binary at compile time via `include_str!` so
//! lookups never touch the filesystem. Corrupted embedded data is a packaging
//! defect and panics at first access.

use ahash::AHashSet;
use once_cell::sync::Lazy;

/// English stopwords, parsed once from the embedded JSON list.
pub static EMBEDDED_STOPWORDS: Lazy<AHashSet<String>> = Lazy::new(|| {
    const JSON: &str = include_str!("../../stopwords/en_stopwords.json");
    match serde_json::from_str::<Vec<String>>(JSON) {
        Ok(words) => words.into_iter().collect(),
        Err(e) => panic!(
            "Failed to parse embedded English stopwords: {}. \
            This indicates corrupted or malformed JSON in the embedded stopwords data.",
            e
        ),
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_list_loads() {
        assert!(EMBEDDED_STOPWORDS.len() > 100);
    }

    #[test]
    fn test_common_words_present() {
        for word in ["a", "the", "is", "and", "of"] {
            assert!(EMBEDDED_STOPWORDS.contains(word), "missing stopword: {}", word);
        }
    }

    #[test]
    fn test_list_is_lowercase() {
        assert!(
            EMBEDDED_STOPWORDS
                .iter()
                .all(|w| !w.chars().any(|c| c.is_uppercase()))
        );
    }
}
