use thiserror::Error;

/// Errors raised by stack operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// Popped or peeked an empty stack.
    #[error("stack underflow")]
    Underflow,
    /// An operation required more elements than the stack holds.
    #[error("not enough elements on the stack: need {needed}, found {found}")]
    InsufficientOperands { needed: usize, found: usize },
    /// The divisor popped for DIV was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}
