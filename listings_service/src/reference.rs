//! Listing reference codes: `H-{year}-{digits}`.
//!
//! The code is human-facing and only unique-ish; the database constraint is
//! the arbiter, and creation retries with a fresh code on collision.

use chrono::Datelike;
use rand::Rng;

/// Generates a reference with exactly `digit_count` random digits, leading
/// digit never zero.
pub fn generate_reference(digit_count: u32) -> String {
    let year = chrono::Utc::now().year();
    let lower = 10_i64.pow(digit_count - 1);
    let upper = 10_i64.pow(digit_count);
    let random_digits = rand::rng().random_range(lower..upper);
    format!("H-{year}-{random_digits}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_has_expected_shape() {
        for _ in 0..200 {
            let reference = generate_reference(6);
            let mut parts = reference.split('-');

            assert_eq!(parts.next(), Some("H"));

            let year = parts.next().expect("year part");
            assert_eq!(year.len(), 4);
            assert!(year.chars().all(|c| c.is_ascii_digit()));

            let digits = parts.next().expect("digits part");
            assert_eq!(digits.len(), 6);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(digits.as_bytes()[0], b'0');

            assert_eq!(parts.next(), None);
        }
    }

    #[test]
    fn digit_count_controls_width() {
        for _ in 0..50 {
            let reference = generate_reference(4);
            let digits = reference.rsplit('-').next().unwrap();
            assert_eq!(digits.len(), 4);
            assert_ne!(digits.as_bytes()[0], b'0');
        }
    }
}
