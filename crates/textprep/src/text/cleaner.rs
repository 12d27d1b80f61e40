//! Text cleaning: pattern scrubbing, punctuation and stopword removal.

use ahash::AHashSet;
use rayon::prelude::*;

use crate::engine::{AnalysisEngine, PosTag};
use crate::error::Result;
use crate::patterns;

/// Cleans text by removing contact patterns, punctuation, and stopwords.
///
/// Holds a shared reference to the analysis engine and no other state; every
/// operation is a pure function of its input string.
///
/// Punctuation and stopword removal operate on **exact surface text**: every
/// occurrence of a flagged token's surface form is removed from the string,
/// not just the span the token was found at. A short stopword that also
/// occurs inside a longer word is removed there as well.
pub struct TextCleaner<'e> {
    engine: &'e AnalysisEngine,
}

impl<'e> TextCleaner<'e> {
    pub fn new(engine: &'e AnalysisEngine) -> Self {
        Self { engine }
    }

    /// Remove emails, phone numbers, and links from `text`.
    ///
    /// Applies the fixed pattern set in order; see [`crate::patterns::scrub`].
    pub fn remove_emails_links(&self, text: &str) -> Result<String> {
        Ok(patterns::scrub(text))
    }

    /// Remove contact patterns, then strip all punctuation tokens.
    ///
    /// The text is first scrubbed of emails, phone numbers, and links; the
    /// scrubbed text is then analyzed and every occurrence of each
    /// punctuation token's surface text is removed.
    ///
    /// # Errors
    ///
    /// Propagates an `Analysis` error if the engine cannot process the
    /// scrubbed text.
    pub fn clean_text(&self, text: &str) -> Result<String> {
        let scrubbed = patterns::scrub(text);
        let analysis = self.engine.analyze(&scrubbed)?;

        let mut result = scrubbed;
        let mut seen: AHashSet<&str> = AHashSet::new();
        for token in analysis.tokens() {
            if token.tag == PosTag::Punctuation && seen.insert(&token.text) {
                result = result.replace(&token.text, "");
            }
        }
        Ok(result)
    }

    /// Remove every occurrence of each stopword token's surface text.
    ///
    /// # Errors
    ///
    /// Propagates an `Analysis` error if the engine cannot process `text`.
    pub fn remove_stopwords(&self, text: &str) -> Result<String> {
        let analysis = self.engine.analyze(text)?;

        let mut result = text.to_string();
        let mut seen: AHashSet<&str> = AHashSet::new();
        for token in analysis.tokens() {
            if token.is_stop && seen.insert(&token.text) {
                result = result.replace(&token.text, "");
            }
        }
        Ok(result)
    }

    /// [`clean_text`](Self::clean_text) over many texts in parallel.
    ///
    /// Each text is processed independently; results preserve input order.
    pub fn clean_text_batch(&self, texts: &[&str]) -> Result<Vec<String>> {
        texts.par_iter().map(|text| self.clean_text(text)).collect()
    }

    /// [`remove_stopwords`](Self::remove_stopwords) over many texts in
    /// parallel, preserving input order.
    pub fn remove_stopwords_batch(&self, texts: &[&str]) -> Result<Vec<String>> {
        texts.par_iter().map(|text| self.remove_stopwords(text)).collect()
    }
}
