//! Execution outcome exposed to callers.
//!
//! On success the caller receives the final stack contents (bottom to top)
//! and the captured prints in execution order. The serialized form matches
//! the stacc service's historical response shape: the stack as its
//! `Stack([...])` snapshot string, the prints as a JSON number array.

use serde::{Serialize, Serializer};

use stacc_core::{snapshot, Value};

use crate::engine::{Interpreter, InterpreterConfig};
use crate::error::RuntimeError;

/// Result of a successful execution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    /// Final stack contents, bottom to top.
    #[serde(rename = "final_stack", serialize_with = "serialize_snapshot")]
    pub stack: Vec<Value>,
    /// Captured prints, in execution order.
    pub prints: Vec<Value>,
}

fn serialize_snapshot<S: Serializer>(stack: &[Value], ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&snapshot(stack))
}

/// Evaluate a program on a fresh stack and return its outcome.
pub fn eval(source: &str) -> Result<Outcome, RuntimeError> {
    eval_with_config(source, InterpreterConfig::default())
}

/// Evaluate a program on a fresh stack with a custom configuration.
pub fn eval_with_config(
    source: &str,
    config: InterpreterConfig,
) -> Result<Outcome, RuntimeError> {
    let mut interpreter = Interpreter::with_config(config);
    interpreter.execute(source)?;
    let (stack, prints) = interpreter.into_stack().into_parts();
    Ok(Outcome { stack, prints })
}
