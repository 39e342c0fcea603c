//! stacc core types
//!
//! This crate provides the data model shared by the interpreter and its
//! callers:
//!
//! - [`Value`]: a numeric stack value (integer or real)
//! - [`Stack`]: the value stack with its primitive operations and the
//!   captured-print sequence
//! - [`StackError`]: failures raised by stack operations
//!
//! Control flow and token dispatch live in `stacc-lang`; this crate only
//! knows how to mutate the top of the stack.

mod error;
mod stack;
mod value;

pub use error::StackError;
pub use stack::{snapshot, Stack};
pub use value::Value;
