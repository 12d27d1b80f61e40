//! Unique identifier generation.

use uuid::Uuid;

/// Generate a unique ID and return it as a string.
///
/// The identifier is a canonical UUID v4: 32 hexadecimal digits grouped
/// 8-4-4-4-12, 36 characters total. Generation never fails on platforms with
/// a source of randomness.
///
/// # Examples
///
/// ```rust
/// use textprep::generate_unique_id;
///
/// let id = generate_unique_id();
/// assert_eq!(id.len(), 36);
/// ```
pub fn generate_unique_id() -> String {
    Uuid::new_v4().to_string()
}
