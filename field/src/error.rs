use core::fmt::{self, Display, Formatter};

/// Why a textual field element was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No digits after the optional sign or `0x` prefix.
    Empty,
    /// A character that is not a digit in the expected radix.
    InvalidDigit { index: usize, found: char },
}

/// Errors returned by fallible [`crate::Felt`] operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FeltError {
    /// Malformed hexadecimal or decimal text.
    Parse { radix: u32, kind: ParseErrorKind },
    /// A byte buffer that is not exactly `expected` bytes long.
    Length { expected: usize, actual: usize },
    /// Inversion of, or integer division by, zero.
    DivisionByZero,
    /// The canonical value does not fit in a `bits`-wide unsigned integer.
    OutOfRange { bits: u32 },
}

impl Display for FeltError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FeltError::Parse {
                radix,
                kind: ParseErrorKind::Empty,
            } => write!(f, "cannot parse a base-{radix} field element from an empty string"),
            FeltError::Parse {
                radix,
                kind: ParseErrorKind::InvalidDigit { index, found },
            } => write!(f, "invalid base-{radix} digit {found:?} at position {index}"),
            FeltError::Length { expected, actual } => {
                write!(f, "expected {expected} bytes, got {actual}")
            }
            FeltError::DivisionByZero => f.write_str("division by zero"),
            FeltError::OutOfRange { bits } => {
                write!(f, "field element does not fit in {bits} bits")
            }
        }
    }
}

impl core::error::Error for FeltError {}
