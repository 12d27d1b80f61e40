//! Textprep - Text Preprocessing Utilities
//!
//! Textprep is a small library for preparing raw text ahead of downstream
//! analysis: scrubbing contact patterns (emails, phone numbers, links),
//! stripping punctuation and stopwords, tallying part-of-speech frequencies,
//! and generating unique identifiers.
//!
//! # Quick Start
//!
//! ```rust
//! use textprep::{AnalysisEngine, TextCleaner};
//!
//! # fn main() -> textprep::Result<()> {
//! // Construct the analysis engine once at startup
//! let engine = AnalysisEngine::new()?;
//! let cleaner = TextCleaner::new(&engine);
//!
//! let cleaned = cleaner.clean_text("Write to a@b.com, please!")?;
//! assert!(!cleaned.contains("a@b.com"));
//! assert!(!cleaned.contains('!'));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Engine** (`engine`): tokenization, coarse part-of-speech tagging, and
//!   stopword classification behind one explicitly-owned handle
//! - **Patterns** (`patterns`): the fixed regex set for contact scrubbing
//! - **Text** (`text`): cleaning and frequency-counting components driven by
//!   the engine
//! - **Id** (`id`): unique identifier generation
//!
//! All operations are pure functions of their string inputs; the engine
//! handle is read-only after construction and safe to share across threads.

#![deny(unsafe_code)]

pub mod engine;
pub mod error;
pub mod id;
pub mod patterns;
pub mod text;

pub use engine::{Analysis, AnalysisEngine, EngineConfig, PosTag, Token};
pub use error::{Result, TextPrepError};
pub use id::generate_unique_id;
pub use text::{FrequencyCounter, TextCleaner};
