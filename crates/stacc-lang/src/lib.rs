//! stacc language: tokenizer and instruction engine.
//!
//! stacc is a whitespace-tokenized, stack-based language with arithmetic,
//! comparison, duplication/printing, and three structured constructs:
//! `IF <cond> THEN <body> [ELSE <body>] END`, `WHILE <cond> DO <body> END`,
//! and `FOR <body> END` (bounds taken from the stack).
//!
//! # Quick start
//!
//! ```
//! use stacc_lang::eval;
//!
//! let outcome = eval("5 3 ADD PRINT").unwrap();
//! assert!(outcome.stack.is_empty());
//! assert_eq!(outcome.prints.len(), 1);
//! ```

mod command;
mod engine;
mod error;
mod outcome;
mod tokenizer;

pub use command::Command;
pub use engine::{Interpreter, InterpreterConfig};
pub use error::RuntimeError;
pub use outcome::{eval, eval_with_config, Outcome};
pub use tokenizer::{is_structural, tokenize};

// Re-export the core data model so callers need only this crate.
pub use stacc_core::{snapshot, Stack, StackError, Value};
