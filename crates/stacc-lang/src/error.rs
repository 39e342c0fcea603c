use stacc_core::StackError;
use thiserror::Error;

/// Runtime error during execution.
///
/// Every error aborts the whole `execute` call; the stack is left in its
/// in-progress state for the caller to inspect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A stack operation failed (underflow, missing operands, zero divisor).
    #[error(transparent)]
    Stack(#[from] StackError),
    /// A token is neither a literal, a primitive, nor a structural keyword.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// An IF construct's token stream ended before THEN.
    #[error("missing THEN in IF construct")]
    MissingThen,
    /// A WHILE construct's token stream ended before DO.
    #[error("missing DO in WHILE construct")]
    MissingDo,
    /// A construct's token stream ended before its closing END.
    #[error("missing END in {0} construct")]
    MissingEnd(&'static str),
    /// The configured step budget was exhausted.
    #[error("step limit of {0} exceeded")]
    StepLimitExceeded(u64),
}
