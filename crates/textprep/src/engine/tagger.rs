//! Rule-based coarse part-of-speech classification.
//!
//! A surface form is matched against an ordered sequence of rules; the first
//! rule that fires decides the tag. Closed-class words (determiners,
//! pronouns, adpositions, ...) come from fixed lexicons, open-class words
//! fall through to suffix heuristics, and anything unmatched is tagged as a
//! noun.

use ahash::AHashSet;
use once_cell::sync::Lazy;
use regex::Regex;

use super::token::PosTag;

static NUMERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:[.,]\d+)*$").expect("Numeral regex pattern is valid and should compile"));

/// Characters tagged as symbols rather than punctuation.
const SYMBOL_CHARS: &str = "$%+=<>^|~#&*@/\\";

static DETERMINERS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither", "some", "any",
        "no", "another", "such", "both", "all",
    ]
    .into_iter()
    .collect()
});

static PRONOUNS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "myself", "yourself",
        "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "who", "whom", "whose", "which",
        "what", "mine", "yours", "his", "hers", "ours", "theirs", "my", "your", "its", "our", "their", "anybody",
        "anyone", "anything", "everybody", "everyone", "everything", "nobody", "nothing", "somebody", "someone",
        "something",
    ]
    .into_iter()
    .collect()
});

static ADPOSITIONS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through", "during",
        "before", "after", "above", "below", "to", "from", "up", "down", "of", "off", "over", "under", "near",
        "across", "behind", "beyond", "within", "without", "along", "around", "among", "upon",
    ]
    .into_iter()
    .collect()
});

static CONJUNCTIONS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "whereas", "if",
        "unless", "until", "since", "when", "whenever", "where", "wherever", "as", "than", "whether",
    ]
    .into_iter()
    .collect()
});

static AUXILIARIES: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
        "did", "doing", "will", "would", "shall", "should", "can", "could", "may", "might", "must", "ought",
    ]
    .into_iter()
    .collect()
});

static PARTICLES: Lazy<AHashSet<&'static str>> = Lazy::new(|| ["not", "n't"].into_iter().collect());

static INTERJECTIONS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    ["oh", "wow", "hey", "ouch", "oops", "hmm", "ah", "aha", "alas", "hello", "hi", "yeah", "huh"]
        .into_iter()
        .collect()
});

static ADVERBS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "very", "too", "also", "just", "never", "always", "often", "sometimes", "here", "there", "now", "then",
        "soon", "already", "still", "again", "quite", "rather", "almost", "perhaps", "maybe", "together", "well",
        "away", "back", "even", "once",
    ]
    .into_iter()
    .collect()
});

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ish", "less", "ary", "ic"];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ing", "ed"];

/// Classify a surface form into a coarse part-of-speech tag.
///
/// Rules are tried in order; the first match wins. Unmatched word forms are
/// tagged [`PosTag::Noun`] as the catch-all.
pub(super) fn tag_token(surface: &str) -> PosTag {
    if surface.chars().all(|c| !c.is_alphanumeric()) {
        if surface.chars().all(|c| SYMBOL_CHARS.contains(c)) {
            return PosTag::Symbol;
        }
        return PosTag::Punctuation;
    }

    if NUMERAL_RE.is_match(surface) {
        return PosTag::Numeral;
    }

    let has_digit = surface.chars().any(|c| c.is_ascii_digit());
    let has_alpha = surface.chars().any(|c| c.is_alphabetic());
    if has_digit && has_alpha {
        return PosTag::Other;
    }

    let lower = surface.to_lowercase();

    if DETERMINERS.contains(lower.as_str()) {
        return PosTag::Determiner;
    }
    if PRONOUNS.contains(lower.as_str()) {
        return PosTag::Pronoun;
    }
    if AUXILIARIES.contains(lower.as_str()) {
        return PosTag::Auxiliary;
    }
    if ADPOSITIONS.contains(lower.as_str()) {
        return PosTag::Adposition;
    }
    if CONJUNCTIONS.contains(lower.as_str()) {
        return PosTag::Conjunction;
    }
    if PARTICLES.contains(lower.as_str()) {
        return PosTag::Particle;
    }
    if INTERJECTIONS.contains(lower.as_str()) {
        return PosTag::Interjection;
    }
    if ADVERBS.contains(lower.as_str()) || (lower.len() > 4 && lower.ends_with("ly")) {
        return PosTag::Adverb;
    }

    if ADJECTIVE_SUFFIXES.iter().any(|s| lower.len() > s.len() + 2 && lower.ends_with(s)) {
        return PosTag::Adjective;
    }
    if VERB_SUFFIXES.iter().any(|s| lower.len() > s.len() + 2 && lower.ends_with(s)) {
        return PosTag::Verb;
    }

    if surface.chars().next().is_some_and(|c| c.is_uppercase()) {
        return PosTag::ProperNoun;
    }

    PosTag::Noun
}
