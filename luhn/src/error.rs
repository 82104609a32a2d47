//! Error types.

use core::fmt;

/// Error parsing a decimal number from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Input is empty.
    Empty,
    /// Input contains a char other than an ASCII decimal digit.
    InvalidDigit {
        /// Byte offset of the char in the input.
        position: usize,
        /// The offending char.
        ch: char,
    },
    /// Number exceeds [`MAX_NUMBER`](crate::MAX_NUMBER).
    Overflow,
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("Cannot parse number from empty string"),
            Self::InvalidDigit { position, ch } => write!(
                formatter,
                "Invalid char {ch:?} at position {position}; only ASCII decimal digits are allowed"
            ),
            Self::Overflow => write!(
                formatter,
                "Number is too large; the maximum supported value is {}",
                crate::MAX_NUMBER
            ),
        }
    }
}

impl ParseError {
    /// Returns the byte range in the parsed input that this error relates to, if any.
    pub fn span(&self) -> Option<core::ops::Range<usize>> {
        match self {
            Self::InvalidDigit { position, ch } => Some(*position..*position + ch.len_utf8()),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Error caused by generator arguments outside the supported domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomainError {
    /// Requested length is zero.
    ZeroLength,
    /// Upper bound of the range is less than its lower bound.
    InvertedRange {
        /// Lower bound as provided by the caller.
        lower: u64,
        /// Upper bound as provided by the caller.
        upper: u64,
    },
    /// Range bounds are ordered, but padding them to the body length produces an empty range.
    /// This happens if the lower bound is shorter than the upper one, e.g., for bounds 9 and 10
    /// padded to 3 digits (900 and 109).
    EmptyPaddedRange {
        /// Padded lower bound.
        lower: u64,
        /// Padded upper bound.
        upper: u64,
    },
    /// Range bound is so large that appending a check digit would overflow
    /// [`MAX_NUMBER`](crate::MAX_NUMBER).
    BoundTooLarge {
        /// The offending bound.
        bound: u64,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => formatter.write_str("Length of generated number must be positive"),
            Self::InvertedRange { lower, upper } => write!(
                formatter,
                "Upper bound {upper} is less than lower bound {lower}"
            ),
            Self::EmptyPaddedRange { lower, upper } => write!(
                formatter,
                "Padded range {lower}..={upper} is empty"
            ),
            Self::BoundTooLarge { bound } => write!(
                formatter,
                "Bound {bound} is too large; the maximum supported body is {}",
                crate::MAX_BODY
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainError {}

/// Union of all errors produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Error parsing a number.
    Parse(ParseError),
    /// Generator arguments are out of domain.
    Domain(DomainError),
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(formatter, "Invalid number: {err}"),
            Self::Domain(err) => write!(formatter, "Invalid generator arguments: {err}"),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<DomainError> for Error {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Domain(err) => Some(err),
        }
    }
}
