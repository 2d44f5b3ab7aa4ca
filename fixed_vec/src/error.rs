use thiserror::Error;

/// Raised by every binary operation whose operands carry different lengths.
///
/// The check runs before any element is read, so a failed operation never
/// yields a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "The left hand side, and the right hand side have mis-matched sizes. {lhs} and {rhs} respectively"
)]
pub struct MismatchedSizeError {
    lhs: usize,
    rhs: usize,
}

impl MismatchedSizeError {
    pub fn new(lhs: usize, rhs: usize) -> Self {
        Self { lhs, rhs }
    }

    /// Length of the left hand operand.
    pub fn lhs(&self) -> usize {
        self.lhs
    }

    /// Length of the right hand operand.
    pub fn rhs(&self) -> usize {
        self.rhs
    }
}

pub type Result<T> = std::result::Result<T, MismatchedSizeError>;
