//! Text-processing components built on the analysis engine.

pub mod cleaner;
pub mod frequency;

pub use cleaner::TextCleaner;
pub use frequency::FrequencyCounter;
