//! Primitive predicates shared by request validators.
//!
//! Each predicate is a pure function answering "is this value acceptable?".
//! They never allocate and never fail, so a rule table can evaluate all of
//! them without short-circuiting.

/// Returns true when `value` has between `min` and `max` characters (inclusive).
///
/// Length is counted in Unicode scalar values, not bytes, so a multi-byte
/// payload is measured the way a user would count it.
#[must_use]
pub fn length_in_range(value: &str, min: usize, max: usize) -> bool {
    let length = value.chars().count();
    (min..=max).contains(&length)
}

/// Returns true when `value` is a finite whole number within `[min, max]`.
#[must_use]
pub fn integer_in_range(value: f64, min: i64, max: i64) -> bool {
    if !is_integer(value) {
        return false;
    }
    #[expect(
        clippy::cast_precision_loss,
        reason = "bounds are small request limits, exactly representable as f64"
    )]
    let (min, max) = (min as f64, max as f64);
    (min..=max).contains(&value)
}

/// Returns true when `value` is a finite number without a fractional part.
#[must_use]
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Returns true when `value` is at least `min`.
#[must_use]
pub fn at_least<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

/// Returns true when `value` is at most `max`.
#[must_use]
pub fn at_most<T: PartialOrd>(value: T, max: T) -> bool {
    value <= max
}

/// Returns true when `value` exactly matches one of `allowed`.
#[must_use]
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

/// Returns true when `value` is non-empty and every byte is an ASCII digit.
#[must_use]
pub fn is_ascii_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// Returns true when `value` is non-empty and every byte is an ASCII hex digit.
#[must_use]
pub fn is_ascii_hex_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(length_in_range("é", 1, 1));
        assert!(!length_in_range("", 1, 900));
        assert!(length_in_range(&"x".repeat(900), 1, 900));
        assert!(!length_in_range(&"x".repeat(901), 1, 900));
    }

    #[test]
    fn integer_in_range_rejects_fractions_and_non_finite() {
        assert!(integer_in_range(0.0, 0, 50));
        assert!(integer_in_range(50.0, 0, 50));
        assert!(!integer_in_range(50.5, 0, 100));
        assert!(!integer_in_range(-1.0, 0, 50));
        assert!(!integer_in_range(f64::NAN, 0, 50));
        assert!(!integer_in_range(f64::INFINITY, 0, 50));
    }

    #[test]
    fn membership_is_exact() {
        let allowed = ["L", "M", "Q", "H"];
        assert!(is_one_of("Q", &allowed));
        assert!(!is_one_of("q", &allowed));
        assert!(!is_one_of("", &allowed));
    }

    #[test]
    fn digit_helpers_reject_empty_input() {
        assert!(is_ascii_digits("007"));
        assert!(!is_ascii_digits(""));
        assert!(!is_ascii_digits("1a"));
        assert!(is_ascii_hex_digits("aF09"));
        assert!(!is_ascii_hex_digits("g"));
    }

    proptest! {
        #[test]
        fn integer_in_range_matches_integer_bounds(value in -200_i64..200) {
            #[expect(clippy::cast_precision_loss, reason = "small test values")]
            let as_float = value as f64;
            prop_assert_eq!(integer_in_range(as_float, 0, 100), (0..=100).contains(&value));
        }

        #[test]
        fn length_in_range_matches_char_count(value in ".{0,20}") {
            let count = value.chars().count();
            prop_assert_eq!(length_in_range(&value, 1, 10), (1..=10).contains(&count));
        }
    }
}
