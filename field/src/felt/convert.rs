use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::{self, Debug, Display, Formatter};
use core::str::FromStr;

use super::Felt;
use crate::error::{FeltError, ParseErrorKind};
use crate::montgomery::MODULUS;
use crate::uint::U256;

/// Byte length of the canonical encoding.
pub const FELT_BYTES: usize = 32;

/// `(p - 1) / 2`: canonical values above this render as negative.
const SIGNED_FELT_MAX: U256 = U256::from_limbs([
    0x0000000000000000,
    0x0000000000000000,
    0x8000000000000000,
    0x0400000000000008,
]);

/// Evaluates `digits` in `radix` with Horner's rule inside the field, so inputs of
/// any length reduce modulo `p`. `offset` is the position of `digits` within the
/// caller's input string, for error reporting.
fn parse_digits(digits: &str, radix: u32, offset: usize) -> Result<Felt, FeltError> {
    if digits.is_empty() {
        return Err(FeltError::Parse {
            radix,
            kind: ParseErrorKind::Empty,
        });
    }
    let base = Felt::from_u64(radix as u64);
    digits.char_indices().try_fold(Felt::ZERO, |acc, (index, found)| {
        let digit = found.to_digit(radix).ok_or(FeltError::Parse {
            radix,
            kind: ParseErrorKind::InvalidDigit {
                index: offset + index,
                found,
            },
        })?;
        Ok(acc * base + Felt::from_u64(digit as u64))
    })
}

impl Felt {
    /// Parses hexadecimal text with an optional `0x`/`0X` prefix.
    pub fn from_hex(s: &str) -> Result<Self, FeltError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        parse_digits(digits, 16, s.len() - digits.len())
    }

    /// Parses decimal text. A leading `-` yields the additive inverse.
    pub fn from_dec_str(s: &str) -> Result<Self, FeltError> {
        match s.strip_prefix('-') {
            Some(digits) => parse_digits(digits, 10, 1).map(|x| -x),
            None => parse_digits(s, 10, 0),
        }
    }

    /// Reads exactly 32 little-endian bytes, reducing modulo `p`.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, FeltError> {
        Ok(Self::from_le_bytes_array(&Self::exact_bytes(bytes)?))
    }

    /// Reads exactly 32 big-endian bytes, reducing modulo `p`.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, FeltError> {
        Ok(Self::from_be_bytes_array(&Self::exact_bytes(bytes)?))
    }

    #[inline]
    pub fn from_le_bytes_array(bytes: &[u8; FELT_BYTES]) -> Self {
        Self::from_canonical(&U256::from_le_bytes(bytes))
    }

    #[inline]
    pub fn from_be_bytes_array(bytes: &[u8; FELT_BYTES]) -> Self {
        Self::from_canonical(&U256::from_be_bytes(bytes))
    }

    fn exact_bytes(bytes: &[u8]) -> Result<[u8; FELT_BYTES], FeltError> {
        bytes.try_into().map_err(|_| FeltError::Length {
            expected: FELT_BYTES,
            actual: bytes.len(),
        })
    }

    /// Canonical value as 32 little-endian bytes.
    #[inline]
    pub fn to_le_bytes(&self) -> [u8; FELT_BYTES] {
        self.to_canonical().to_le_bytes()
    }

    /// Canonical value as 32 big-endian bytes.
    #[inline]
    pub fn to_be_bytes(&self) -> [u8; FELT_BYTES] {
        self.to_canonical().to_be_bytes()
    }

    /// `0x`-prefixed lowercase hex without leading zeros.
    pub fn to_hex_string(&self) -> String {
        format!("{:#x}", self.to_canonical())
    }

    /// Decimal rendering of the canonical value.
    pub fn to_dec_string(&self) -> String {
        self.to_canonical().to_string()
    }

    /// Decimal rendering where values above `(p - 1) / 2` appear as `-(p - x)`.
    pub fn to_signed_felt(&self) -> String {
        let value = self.to_canonical();
        if value > SIGNED_FELT_MAX {
            format!("-{}", MODULUS.overflowing_sub(&value).0)
        } else {
            value.to_string()
        }
    }

    /// The largest element rendered as non-negative by [`Felt::to_signed_felt`].
    pub fn signed_felt_max() -> Self {
        Self::from_canonical(&SIGNED_FELT_MAX)
    }
}

impl FromStr for Felt {
    type Err = FeltError;

    /// Hex when prefixed with `0x`, decimal otherwise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") || s.starts_with("0X") {
            Self::from_hex(s)
        } else {
            Self::from_dec_str(s)
        }
    }
}

impl From<u64> for Felt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for Felt {
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<u8> for Felt {
    fn from(value: u8) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<u128> for Felt {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<bool> for Felt {
    fn from(value: bool) -> Self {
        if value {
            Self::ONE
        } else {
            Self::ZERO
        }
    }
}

impl TryFrom<Felt> for u64 {
    type Error = FeltError;

    /// Fails unless the canonical value is below `2^64`.
    fn try_from(value: Felt) -> Result<Self, Self::Error> {
        match value.to_canonical().limbs {
            [low, 0, 0, 0] => Ok(low),
            _ => Err(FeltError::OutOfRange { bits: u64::BITS }),
        }
    }
}

impl TryFrom<Felt> for u32 {
    type Error = FeltError;

    fn try_from(value: Felt) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(|low| u32::try_from(low).ok())
            .ok_or(FeltError::OutOfRange { bits: u32::BITS })
    }
}

impl Display for Felt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_canonical(), f)
    }
}

impl Debug for Felt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Felt({:#x})", self.to_canonical())
    }
}

impl fmt::LowerHex for Felt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_canonical(), f)
    }
}

impl fmt::UpperHex for Felt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_canonical(), f)
    }
}
