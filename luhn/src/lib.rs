//! Validation and generation of numbers satisfying the [Luhn checksum] (aka the mod 10 algorithm),
//! which is used in identifiers such as payment card numbers.
//!
//! # Validation
//!
//! [`is_valid()`] checks an integer, and [`is_valid_str()`] parses a string of ASCII decimal
//! digits beforehand. Unlike the integer version, string validation is fallible: an empty string,
//! a string with non-digit chars, or a number exceeding [`MAX_NUMBER`] (`i64::MAX`)
//! produce a [`ParseError`] rather than `false`.
//!
//! # Generation
//!
//! [`Generator`] (or the [`generate_random()`] / [`generate_in_range()`] functions
//! taking an RNG explicitly) produces random Luhn-valid numbers of the requested length,
//! optionally with the leading digits constrained by a range. A single random draw is performed
//! per number; the check digit is computed rather than searched for. See the [`generate`] module
//! docs for details on length normalization and range padding.
//!
//! # Crate features
//!
//! - `std`. Enables support of types from `std`, such as the `Error` trait, and
//!   [`Generator::from_entropy()`]. Without this feature, the crate is `no_std`-compatible
//!   and does not require an allocator.
//!
//! [Luhn checksum]: https://en.wikipedia.org/wiki/Luhn_algorithm
//!
//! # Examples
//!
//! ```
//! use luhn_algorithms::{is_valid, is_valid_str, Generator, ParseError};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # fn main() -> Result<(), luhn_algorithms::Error> {
//! assert!(is_valid(4_444_333_322_221_111));
//! assert!(is_valid_str("4716881992809921")?);
//! assert_eq!(is_valid_str("a/+@!").unwrap_err(), ParseError::InvalidDigit {
//!     position: 0,
//!     ch: 'a',
//! });
//!
//! let mut generator = Generator::new(StdRng::seed_from_u64(123));
//! let number = generator.generate_in_range(4, 4, 16)?;
//! assert_eq!(number / 10_u64.pow(15), 4);
//! assert!(is_valid(number));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/luhn-algorithms/0.1.0")]
#![warn(missing_docs, missing_debug_implementations)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub use self::{
    error::{DomainError, Error, ParseError},
    generate::{
        append_check_digit, check_digit, generate_in_range, generate_random, BodyRange, Generator,
        MAX_BODY, MAX_LENGTH,
    },
    validate::{is_valid, is_valid_str, Number, MAX_NUMBER},
};

mod digits;
pub mod error;
pub mod generate;
mod validate;
