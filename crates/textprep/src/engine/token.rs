//! Token and part-of-speech types produced by the analysis engine.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech category assigned to a token.
///
/// Categories follow the universal tag set; [`PosTag::as_str`] yields the
/// conventional tag string (`"NOUN"`, `"PUNCT"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Adjective,
    Adposition,
    Adverb,
    Auxiliary,
    Conjunction,
    Determiner,
    Interjection,
    Noun,
    Numeral,
    Particle,
    Pronoun,
    ProperNoun,
    Punctuation,
    Symbol,
    Verb,
    Other,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Adjective => "ADJ",
            PosTag::Adposition => "ADP",
            PosTag::Adverb => "ADV",
            PosTag::Auxiliary => "AUX",
            PosTag::Conjunction => "CONJ",
            PosTag::Determiner => "DET",
            PosTag::Interjection => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Pronoun => "PRON",
            PosTag::ProperNoun => "PROPN",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::Verb => "VERB",
            PosTag::Other => "X",
        }
    }
}

/// A unit of analyzed text: surface form, coarse part-of-speech tag, and a
/// stopword flag. Tokens are owned by the [`Analysis`](super::Analysis) that
/// produced them; downstream code only reads these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
    pub is_stop: bool,
}
