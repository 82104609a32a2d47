//! Luhn checksum validation.

use core::{fmt, str::FromStr};

use crate::{
    digits::{digit_count, luhn_sum, Multiplier},
    error::ParseError,
};

/// Maximum number supported by this crate, equal to `i64::MAX`.
pub const MAX_NUMBER: u64 = i64::MAX as u64;

/// Checks whether `number` satisfies the Luhn checksum.
///
/// The rightmost digit is treated as the check digit and is passed through as is;
/// every second digit to the left of it is doubled. The checksum is defined for all `u64`
/// values, although other parts of the crate are restricted to [`MAX_NUMBER`].
///
/// # Examples
///
/// ```
/// # use luhn_algorithms::is_valid;
/// assert!(is_valid(4_444_333_322_221_111));
/// assert!(!is_valid(4_444_333_322_221_112));
/// assert!(is_valid(0));
/// ```
pub fn is_valid(number: u64) -> bool {
    luhn_sum(number, Multiplier::Single) % 10 == 0
}

/// Parses `number` as a decimal integer and checks whether it satisfies the Luhn checksum.
///
/// # Errors
///
/// Returns an error if `number` is empty, contains chars other than ASCII decimal digits
/// (including signs and whitespace), or exceeds [`MAX_NUMBER`].
///
/// # Examples
///
/// ```
/// # use luhn_algorithms::{is_valid_str, ParseError};
/// assert_eq!(is_valid_str("4716881992809921"), Ok(true));
/// assert_eq!(is_valid_str(""), Err(ParseError::Empty));
/// assert_eq!(is_valid_str("9223372036854775808"), Err(ParseError::Overflow));
/// ```
pub fn is_valid_str(number: &str) -> Result<bool, ParseError> {
    number.parse::<Number>().map(Number::is_valid)
}

/// Non-negative number in the range supported by the crate, i.e., `0..=MAX_NUMBER`.
///
/// The main way to obtain a `Number` is parsing it from a string. Unlike `u64::from_str()`,
/// parsing does not accept a leading `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(u64);

impl Number {
    /// Largest supported number.
    pub const MAX: Self = Self(MAX_NUMBER);

    /// Creates a number, or returns `None` if `value` exceeds [`MAX_NUMBER`].
    pub const fn new(value: u64) -> Option<Self> {
        if value <= MAX_NUMBER {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the wrapped value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Checks whether this number satisfies the Luhn checksum.
    pub fn is_valid(self) -> bool {
        is_valid(self.0)
    }

    /// Returns the number of decimal digits in this number. Zero has a single digit.
    pub fn digit_count(self) -> u32 {
        digit_count(self.0)
    }

    /// Returns the trailing digit, which is the check digit for Luhn-valid numbers.
    #[allow(clippy::cast_possible_truncation)] // the value is < 10
    pub fn last_digit(self) -> u8 {
        (self.0 % 10) as u8
    }
}

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

impl From<Number> for u64 {
    fn from(number: Number) -> Self {
        number.0
    }
}

impl TryFrom<u64> for Number {
    type Error = ParseError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseError::Overflow)
    }
}

impl FromStr for Number {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some((position, ch)) = s.char_indices().find(|(_, ch)| !ch.is_ascii_digit()) {
            return Err(ParseError::InvalidDigit { position, ch });
        }

        let value = s.bytes().try_fold(0_u64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
        });
        value.and_then(Self::new).ok_or(ParseError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn validating_known_numbers() {
        const VALID: &[u64] = &[
            0,
            18,
            59,
            4_444_333_322_221_111,
            4_716_881_992_809_921,
            372_095_199_917_337,
            79_927_398_713,
        ];
        const INVALID: &[u64] = &[1, 5, 10, 4_444_333_322_221_112, 79_927_398_710];

        for &number in VALID {
            assert!(is_valid(number), "{number} should be valid");
        }
        for &number in INVALID {
            assert!(!is_valid(number), "{number} should be invalid");
        }
    }

    #[test]
    fn zero_is_the_only_valid_single_digit() {
        let valid_digits: Vec<_> = (0..10).filter(|&digit| is_valid(digit)).collect();
        assert_eq!(valid_digits, [0]);
    }

    #[test]
    fn validating_strings() {
        assert_eq!(is_valid_str("4716881992809921"), Ok(true));
        assert_eq!(is_valid_str("4444333322221112"), Ok(false));
        assert_eq!(is_valid_str("0"), Ok(true));
        // Leading zeros do not change the value.
        assert_eq!(is_valid_str("0004444333322221111"), Ok(true));
        assert_eq!(is_valid_str("9223372036854775807"), Ok(is_valid(MAX_NUMBER)));
    }

    #[test]
    fn parsing_errors() {
        assert_matches!(is_valid_str(""), Err(ParseError::Empty));
        assert_matches!(
            is_valid_str("a/+@!"),
            Err(ParseError::InvalidDigit { position: 0, ch: 'a' })
        );
        assert_matches!(
            is_valid_str("4444 3333"),
            Err(ParseError::InvalidDigit { position: 4, ch: ' ' })
        );
        assert_matches!(
            is_valid_str("+18"),
            Err(ParseError::InvalidDigit { position: 0, ch: '+' })
        );
        assert_matches!(
            is_valid_str("-18"),
            Err(ParseError::InvalidDigit { position: 0, ch: '-' })
        );
        assert_matches!(
            is_valid_str("12ё"),
            Err(ParseError::InvalidDigit { position: 2, ch: 'ё' })
        );
        assert_matches!(is_valid_str("9223372036854775808"), Err(ParseError::Overflow));
        assert_matches!(
            is_valid_str("100000000000000000000000"),
            Err(ParseError::Overflow)
        );
    }

    #[test]
    fn invalid_digit_span() {
        let err = "12ё4".parse::<Number>().unwrap_err();
        assert_eq!(err.span(), Some(2..4));
        assert_eq!(ParseError::Overflow.span(), None);
    }

    #[test]
    fn number_accessors() {
        let number: Number = "372095199917337".parse().unwrap();
        assert_eq!(number.get(), 372_095_199_917_337);
        assert_eq!(number.digit_count(), 15);
        assert_eq!(number.last_digit(), 7);
        assert!(number.is_valid());
        assert_eq!(number.to_string(), "372095199917337");

        assert_eq!(Number::new(MAX_NUMBER), Some(Number::MAX));
        assert_eq!(Number::new(MAX_NUMBER + 1), None);
        assert_matches!(Number::try_from(u64::MAX), Err(ParseError::Overflow));
    }
}
