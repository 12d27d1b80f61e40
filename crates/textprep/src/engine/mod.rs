//! Language-analysis engine.
//!
//! The engine is the crate's natural-language collaborator: given a text it
//! produces an ordered sequence of [`Token`]s, each carrying a surface form,
//! a coarse part-of-speech tag, and a stopword flag. It bundles a rule-based
//! tokenizer, an ordered-rule part-of-speech classifier, and an embedded
//! English stopword list.
//!
//! The engine is an explicitly-owned handle: construct it once at
//! application startup and pass it by reference into every component that
//! needs analysis. It is immutable after construction and safe for
//! concurrent read-only use.
//!
//! # Examples
//!
//! ```rust
//! use textprep::AnalysisEngine;
//!
//! # fn main() -> textprep::Result<()> {
//! let engine = AnalysisEngine::new()?;
//! let analysis = engine.analyze("The quick fox.")?;
//! assert_eq!(analysis.len(), 4);
//! # Ok(())
//! # }
//! ```

mod stopwords;
mod tagger;
mod token;

pub use token::{PosTag, Token};

use ahash::AHashSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, TextPrepError};

/// Word forms (with internal apostrophes) or single non-word characters.
static TOKEN_SCANNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:['’]\w+)*|[^\w\s]").expect("Token scanner regex pattern is valid and should compile"));

/// Configuration for [`AnalysisEngine`] construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Additional stopwords merged into the embedded English list.
    /// Entries are lowercased before insertion.
    pub custom_stopwords: Vec<String>,
}

/// The result of analyzing a text: an ordered token sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    tokens: Vec<Token>,
}

impl Analysis {
    /// The tokens, in document order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Total token count.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consume the analysis, yielding its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Handle to the language-analysis engine.
///
/// Immutable after construction; share it by reference across components and
/// threads.
#[derive(Debug)]
pub struct AnalysisEngine {
    stopwords: AHashSet<String>,
}

impl AnalysisEngine {
    /// Create an engine with the embedded English stopword list.
    pub fn new() -> Result<Self> {
        Self::with_config(&EngineConfig::default())
    }

    /// Create an engine, merging `config.custom_stopwords` into the embedded
    /// list.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if a custom stopword is empty or
    /// whitespace-only.
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        let mut stopwords = stopwords::EMBEDDED_STOPWORDS.clone();

        for word in &config.custom_stopwords {
            if word.trim().is_empty() {
                return Err(TextPrepError::validation("Custom stopword must not be empty"));
            }
            stopwords.insert(word.to_lowercase());
        }

        Ok(Self { stopwords })
    }

    /// Analyze a text into an ordered token sequence.
    ///
    /// Each token carries its surface form, a coarse part-of-speech tag, and
    /// a stopword flag. An empty input yields an empty analysis.
    ///
    /// # Errors
    ///
    /// Returns an `Analysis` error if the input cannot be processed; the
    /// tokenizer rejects text containing NUL characters.
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        if text.contains('\0') {
            return Err(TextPrepError::analysis("Input contains an unsupported NUL character"));
        }

        let tokens: Vec<Token> = TOKEN_SCANNER
            .find_iter(text)
            .map(|m| {
                let surface = m.as_str();
                let tag = tagger::tag_token(surface);
                let is_stop = self.stopwords.contains(&surface.to_lowercase());
                Token {
                    text: surface.to_string(),
                    tag,
                    is_stop,
                }
            })
            .collect();

        trace!(token_count = tokens.len(), "analyzed text");

        Ok(Analysis { tokens })
    }

    /// Whether `word` is a stopword (case-insensitive).
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }
}
