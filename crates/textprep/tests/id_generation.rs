//! Unique-ID generation integration tests.
//!
//! Validates canonical UUID formatting and uniqueness over a large number of
//! consecutive calls.

use std::collections::HashSet;

use textprep::generate_unique_id;

/// Every generated ID is a 36-character canonical UUID.
#[test]
fn test_ids_are_canonical_uuids() {
    for _ in 0..100 {
        let id = generate_unique_id();
        assert_eq!(id.len(), 36, "unexpected length for {}", id);

        let bytes = id.as_bytes();
        for (i, &b) in bytes.iter().enumerate() {
            match i {
                8 | 13 | 18 | 23 => assert_eq!(b, b'-', "expected dash at {} in {}", i, id),
                _ => assert!(
                    b.is_ascii_hexdigit(),
                    "expected hex digit at {} in {}",
                    i,
                    id
                ),
            }
        }
    }
}

/// 10,000 consecutive calls produce no duplicate.
#[test]
fn test_ten_thousand_ids_are_unique() {
    let mut seen = HashSet::with_capacity(10_000);
    for _ in 0..10_000 {
        assert!(seen.insert(generate_unique_id()), "duplicate ID generated");
    }
}
