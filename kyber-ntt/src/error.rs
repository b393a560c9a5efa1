//! Error types

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Errors raised when raw integer data is brought into the typed representations.
///
/// Once a [`Polynomial`](crate::Polynomial) or [`NttPolynomial`](crate::NttPolynomial) exists,
/// no operation on it can fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A coefficient vector did not have the required length
    #[error("expected {expected} coefficients, got {got}")]
    InvalidLength {
        /// Required number of coefficients
        expected: usize,
        /// Number of coefficients supplied
        got: usize,
    },
    /// The two operands of a pointwise operation had different lengths
    #[error("length mismatch: left operand has {lhs} coefficients, right operand has {rhs}")]
    LengthMismatch {
        /// Length of the left operand
        lhs: usize,
        /// Length of the right operand
        rhs: usize,
    },
    /// A text source held the wrong number of tokens
    #[error("expected exactly {expected} numbers, read {got}")]
    TokenCount {
        /// Required number of tokens
        expected: usize,
        /// Number of tokens read
        got: usize,
    },
    /// A token could not be parsed as an integer
    #[cfg(feature = "alloc")]
    #[error("token {index} is not a valid number: '{token}'")]
    InvalidToken {
        /// 1-based position of the token
        index: usize,
        /// The offending token
        token: String,
    },
}
