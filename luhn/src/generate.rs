//! Generation of random Luhn-valid numbers.
//!
//! Generation never resorts to drawing random numbers until one of them passes validation.
//! Instead, a single random *body* is drawn, and a check digit is computed and appended to it
//! so that the resulting number passes the checksum by construction.
//!
//! # Length
//!
//! The requested length is the total number of digits including the check digit. Lengths
//! are normalized as follows:
//!
//! - Length 0 is rejected with [`DomainError::ZeroLength`].
//! - Length 1 always produces 0, which is the only Luhn-valid single-digit number.
//! - Lengths greater than [`MAX_LENGTH`] are clamped to `MAX_LENGTH`, so that
//!   a generated number always fits into [`MAX_NUMBER`](crate::MAX_NUMBER).
//!
//! # Ranges
//!
//! A range is specified by a pair of bounds, which are padded to the body length
//! (the total length minus one). The lower bound is padded with trailing zeros, and the upper one
//! with trailing nines; bounds that are already long enough are left intact. For example,
//! bounds 111 and 222 with length 6 produce the body range `11100..=22299`.
//! The body is drawn uniformly from the *inclusive* padded range.

use rand::Rng;
#[cfg(feature = "std")]
use rand::rngs::ThreadRng;

use crate::{
    digits::{digit_count, luhn_sum, pow10, Multiplier},
    error::DomainError,
    validate::MAX_NUMBER,
};

/// Maximum length of generated numbers. Larger lengths are clamped to this value.
pub const MAX_LENGTH: u32 = 18;

/// Maximum body for which appending any check digit does not exceed [`MAX_NUMBER`].
pub const MAX_BODY: u64 = (MAX_NUMBER - 9) / 10;

/// Computes the check digit for the specified `body`.
///
/// # Examples
///
/// ```
/// # use luhn_algorithms::check_digit;
/// assert_eq!(check_digit(7_992_739_871), 3);
/// assert_eq!(check_digit(0), 0);
/// ```
#[allow(clippy::cast_possible_truncation)] // the value is < 10
pub fn check_digit(body: u64) -> u8 {
    let sum = luhn_sum(body, Multiplier::Double);
    ((10 - sum % 10) % 10) as u8
}

/// Appends the check digit to `body`. Returns `None` if the result would exceed
/// [`MAX_NUMBER`].
///
/// # Examples
///
/// ```
/// # use luhn_algorithms::{append_check_digit, is_valid};
/// let number = append_check_digit(444_433_332_222_111).unwrap();
/// assert_eq!(number, 4_444_333_322_221_111);
/// assert!(is_valid(number));
/// ```
pub fn append_check_digit(body: u64) -> Option<u64> {
    let number = body
        .checked_mul(10)?
        .checked_add(u64::from(check_digit(body)))?;
    (number <= MAX_NUMBER).then_some(number)
}

/// Inclusive range of bodies for generated numbers, obtained by padding range bounds
/// to the body length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyRange {
    lower: u64,
    upper: u64,
}

impl BodyRange {
    /// Pads `lower` and `upper` bounds for numbers with the specified total `length`
    /// (clamped to [`MAX_LENGTH`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is zero, the bounds are inverted, padded bounds
    /// form an empty range, or the padded upper bound exceeds [`MAX_BODY`].
    pub fn new(lower: u64, upper: u64, length: u32) -> Result<Self, DomainError> {
        if length == 0 {
            return Err(DomainError::ZeroLength);
        }
        if upper < lower {
            return Err(DomainError::InvertedRange { lower, upper });
        }

        let body_length = length.min(MAX_LENGTH) - 1;
        let lower_padding = body_length.saturating_sub(digit_count(lower));
        let upper_padding = body_length.saturating_sub(digit_count(upper));
        // Bounds with padding are shorter than 18 digits, so the arithmetic below cannot overflow.
        let padded_lower = lower * pow10(lower_padding);
        let padded_upper = upper * pow10(upper_padding) + (pow10(upper_padding) - 1);

        if padded_lower > padded_upper {
            return Err(DomainError::EmptyPaddedRange {
                lower: padded_lower,
                upper: padded_upper,
            });
        }
        if padded_upper > MAX_BODY {
            return Err(DomainError::BoundTooLarge { bound: upper });
        }
        Ok(Self {
            lower: padded_lower,
            upper: padded_upper,
        })
    }

    /// Returns the padded lower bound.
    pub fn lower(&self) -> u64 {
        self.lower
    }

    /// Returns the padded upper bound (inclusive).
    pub fn upper(&self) -> u64 {
        self.upper
    }

    /// Checks whether the range contains the specified body.
    pub fn contains(&self, body: u64) -> bool {
        (self.lower..=self.upper).contains(&body)
    }

    /// Draws a body uniformly from this range.
    pub fn sample_body<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.gen_range(self.lower..=self.upper)
    }

    /// Draws a body from this range and completes it with a check digit.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let body = self.sample_body(rng);
        body * 10 + u64::from(check_digit(body))
    }
}

/// Generates a random Luhn-valid number with up to `length` digits using the provided RNG.
/// This is equivalent to [`generate_in_range()`] with bounds 0 and 9.
///
/// # Errors
///
/// Returns an error if `length` is zero.
pub fn generate_random<R: Rng + ?Sized>(rng: &mut R, length: u32) -> Result<u64, DomainError> {
    generate_in_range(rng, 0, 9, length)
}

/// Generates a random Luhn-valid number of the specified `length` with the body drawn
/// from the range specified by `lower` and `upper` bounds. See the [module docs](self)
/// for details on how bounds are padded.
///
/// # Errors
///
/// Returns an error under the conditions described in [`BodyRange::new()`]. Bounds are not
/// checked if `length` is 1.
pub fn generate_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    lower: u64,
    upper: u64,
    length: u32,
) -> Result<u64, DomainError> {
    match length {
        0 => Err(DomainError::ZeroLength),
        1 => Ok(0),
        _ => BodyRange::new(lower, upper, length).map(|range| range.sample(rng)),
    }
}

/// Generator of Luhn-valid numbers owning a random number generator.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// # use luhn_algorithms::{is_valid, Generator};
///
/// let mut generator = Generator::new(StdRng::seed_from_u64(42));
/// let number = generator.generate_random(16)?;
/// assert!(number < 10_u64.pow(16));
/// assert!(is_valid(number));
///
/// let number = generator.generate_in_range(111, 222, 6)?;
/// assert!((111_000..=222_999).contains(&number));
/// assert!(is_valid(number));
/// # Ok::<_, luhn_algorithms::DomainError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator<R> {
    rng: R,
}

impl<R: Rng> Generator<R> {
    /// Creates a generator with the specified RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a random Luhn-valid number with up to `length` digits.
    ///
    /// # Errors
    ///
    /// See [`generate_random()`](fn@generate_random).
    pub fn generate_random(&mut self, length: u32) -> Result<u64, DomainError> {
        generate_random(&mut self.rng, length)
    }

    /// Generates a random Luhn-valid number with the body from the specified range.
    ///
    /// # Errors
    ///
    /// See [`generate_in_range()`](fn@generate_in_range).
    pub fn generate_in_range(
        &mut self,
        lower: u64,
        upper: u64,
        length: u32,
    ) -> Result<u64, DomainError> {
        generate_in_range(&mut self.rng, lower, upper, length)
    }

    /// Returns a mutable reference to the wrapped RNG.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Extracts the wrapped RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl Generator<ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}
