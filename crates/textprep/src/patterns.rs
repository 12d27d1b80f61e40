//! Pattern set for scrubbing emails, phone numbers, and links from text.
//!
//! The three patterns are compiled once at first use and applied in a fixed
//! order: email, phone, link. A pattern that fails to compile is a packaging
//! defect and aborts initialization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Email addresses: local part, `@`, domain, and a 2+ letter TLD.
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("Email regex pattern is valid and should compile")
});

/// Phone numbers: optional parenthesized 3-digit area code, then 3 and 4
/// digit groups with `-`, `.`, or space separators.
pub static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("Phone regex pattern is valid and should compile")
});

/// Links: `http://`, `https://`, or `www.` followed by non-whitespace.
pub static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:https?://|www\.)\S+\b").expect("Link regex pattern is valid and should compile")
});

/// Remove all non-overlapping matches of every pattern from `text`.
///
/// Patterns are applied in order (email, phone, link), each match replaced
/// with the empty string. The input is never mutated; a new string is
/// returned. Borrows until the first pattern actually matches.
///
/// # Examples
///
/// ```rust
/// use textprep::patterns::scrub;
///
/// let cleaned = scrub("Mail a@b.com or call (555) 123-4567");
/// assert!(!cleaned.contains("a@b.com"));
/// assert!(!cleaned.contains("123-4567"));
/// ```
pub fn scrub(text: &str) -> String {
    let mut result = Cow::Borrowed(text);
    for pattern in [&*EMAIL_PATTERN, &*PHONE_PATTERN, &*LINK_PATTERN] {
        if pattern.is_match(&result) {
            result = Cow::Owned(pattern.replace_all(&result, "").into_owned());
        }
    }
    result.into_owned()
}
