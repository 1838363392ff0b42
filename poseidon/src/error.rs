use core::fmt::{self, Display, Formatter};

/// Errors returned by the slice-based permutation entry point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PoseidonError {
    /// The state does not hold exactly `expected` field elements.
    Shape { expected: usize, actual: usize },
}

impl Display for PoseidonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PoseidonError::Shape { expected, actual } => write!(
                f,
                "permutation state must hold {expected} field elements, got {actual}"
            ),
        }
    }
}

impl core::error::Error for PoseidonError {}
