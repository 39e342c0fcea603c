//! The instruction engine.
//!
//! A single left-to-right scan over the token sequence: integer literals
//! push, primitive commands dispatch onto the stack, and the three
//! structured constructs collect their condition/body sub-sequences by
//! scanning for the matching boundary keyword. Every sub-sequence is a
//! freshly-allocated owned vector re-entered through [`Interpreter::run`],
//! so nested constructs are plain recursion with no separate code path.
//!
//! Boundary matching is first-match by encounter order, not depth-balanced
//! bracket counting; that is part of the language contract.

use tracing::trace;

use stacc_core::{Stack, StackError, Value};

use crate::command::Command;
use crate::error::RuntimeError;
use crate::tokenizer::{is_structural, tokenize};

/// Interpreter configuration.
#[derive(Clone, Debug, Default)]
pub struct InterpreterConfig {
    /// Optional step budget. Each executed token counts one step; `None`
    /// preserves the language's unbounded loop semantics.
    pub max_steps: Option<u64>,
}

/// The instruction engine: owns the value stack it mutates.
#[derive(Debug, Default)]
pub struct Interpreter {
    stack: Stack,
    config: InterpreterConfig,
    steps: u64,
}

impl Interpreter {
    /// Create an interpreter with an empty stack and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter with a custom configuration.
    pub fn with_config(config: InterpreterConfig) -> Self {
        Self {
            stack: Stack::new(),
            config,
            steps: 0,
        }
    }

    /// The value stack, bottom to top.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Values printed so far, in execution order.
    pub fn prints(&self) -> &[Value] {
        self.stack.prints()
    }

    /// Consume the interpreter, returning the stack.
    pub fn into_stack(self) -> Stack {
        self.stack
    }

    /// Execute a complete program, mutating the stack and its captured
    /// prints. Fails fast: the first error aborts the call.
    pub fn execute(&mut self, source: &str) -> Result<(), RuntimeError> {
        let tokens = tokenize(source);
        self.run(&tokens)
    }

    /// Execute a token sequence. Construct evaluation recurses here, so
    /// nested programs and top-level programs share one dispatch path.
    fn run(&mut self, tokens: &[&str]) -> Result<(), RuntimeError> {
        let mut cursor = 0;
        while cursor < tokens.len() {
            let token = tokens[cursor];
            self.count_step()?;

            if let Ok(n) = token.parse::<i64>() {
                self.stack.push(Value::integer(n));
                cursor += 1;
            } else if let Some(command) = Command::from_token(token) {
                command.apply(&mut self.stack)?;
                cursor += 1;
            } else {
                match token {
                    "IF" => {
                        cursor += 1;
                        self.eval_if(tokens, &mut cursor)?;
                    }
                    "WHILE" => {
                        cursor += 1;
                        self.eval_while(tokens, &mut cursor)?;
                    }
                    "FOR" => {
                        cursor += 1;
                        self.eval_for(tokens, &mut cursor)?;
                    }
                    // Boundary keywords are only meaningful inside a
                    // construct parse; a bare one is skipped.
                    t if is_structural(t) => cursor += 1,
                    _ => return Err(RuntimeError::UnknownCommand(token.to_string())),
                }
            }
        }
        Ok(())
    }

    /// `IF <condition> THEN <true-body> [ELSE <false-body>] END`
    fn eval_if<'t>(&mut self, tokens: &[&'t str], cursor: &mut usize) -> Result<(), RuntimeError> {
        let (condition, _) =
            collect_until(tokens, cursor, &["THEN"]).ok_or(RuntimeError::MissingThen)?;
        let (true_body, boundary) = collect_until(tokens, cursor, &["ELSE", "END"])
            .ok_or(RuntimeError::MissingEnd("IF"))?;
        let false_body: Vec<&'t str> = if boundary == "ELSE" {
            collect_until(tokens, cursor, &["END"])
                .ok_or(RuntimeError::MissingEnd("IF"))?
                .0
        } else {
            Vec::new()
        };
        trace!(
            condition = condition.len(),
            true_body = true_body.len(),
            false_body = false_body.len(),
            "IF construct"
        );

        self.run(&condition)?;
        if self.stack.pop()?.is_truthy() {
            self.run(&true_body)
        } else {
            self.run(&false_body)
        }
    }

    /// `WHILE <condition> DO <body> END`
    ///
    /// The condition is re-executed before each iteration; a condition
    /// that never falsifies loops forever unless a step budget is set.
    fn eval_while(&mut self, tokens: &[&str], cursor: &mut usize) -> Result<(), RuntimeError> {
        let (condition, _) =
            collect_until(tokens, cursor, &["DO"]).ok_or(RuntimeError::MissingDo)?;
        let (body, _) =
            collect_until(tokens, cursor, &["END"]).ok_or(RuntimeError::MissingEnd("WHILE"))?;
        trace!(condition = condition.len(), body = body.len(), "WHILE construct");

        loop {
            self.run(&condition)?;
            if !self.stack.pop()?.is_truthy() {
                return Ok(());
            }
            self.run(&body)?;
        }
    }

    /// `FOR <body> END` — bounds come from the stack at construct entry:
    /// pop step, then end, then start. Each iteration pushes the current
    /// counter before running the body.
    fn eval_for(&mut self, tokens: &[&str], cursor: &mut usize) -> Result<(), RuntimeError> {
        let (body, _) =
            collect_until(tokens, cursor, &["END"]).ok_or(RuntimeError::MissingEnd("FOR"))?;

        if self.stack.len() < 3 {
            return Err(StackError::InsufficientOperands {
                needed: 3,
                found: self.stack.len(),
            }
            .into());
        }
        let step = self.stack.pop()?;
        let end = self.stack.pop()?;
        let mut current = self.stack.pop()?;
        trace!(%current, %end, %step, body = body.len(), "FOR construct");

        let step_sign = step.as_real();
        while (step_sign > 0.0 && current.as_real() <= end.as_real())
            || (step_sign < 0.0 && current.as_real() >= end.as_real())
        {
            self.stack.push(current);
            self.run(&body)?;
            current = current.add(step);
        }
        Ok(())
    }

    fn count_step(&mut self) -> Result<(), RuntimeError> {
        if let Some(limit) = self.config.max_steps {
            self.steps += 1;
            if self.steps > limit {
                return Err(RuntimeError::StepLimitExceeded(limit));
            }
        }
        Ok(())
    }
}

/// Accumulate tokens from the cursor until one of `stop` is encountered.
///
/// Returns the owned sub-sequence and the matched boundary keyword, with
/// the cursor advanced past it; `None` if the stream ends first (the
/// cursor is then at end-of-stream).
fn collect_until<'t>(
    tokens: &[&'t str],
    cursor: &mut usize,
    stop: &[&str],
) -> Option<(Vec<&'t str>, &'t str)> {
    let mut collected = Vec::new();
    while *cursor < tokens.len() {
        let token = tokens[*cursor];
        *cursor += 1;
        if stop.contains(&token) {
            return Some((collected, token));
        }
        collected.push(token);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_until_matches_first_boundary() {
        let tokens = ["1", "2", "THEN", "3", "END"];
        let mut cursor = 0;
        let (body, boundary) = collect_until(&tokens, &mut cursor, &["THEN"]).unwrap();
        assert_eq!(body, vec!["1", "2"]);
        assert_eq!(boundary, "THEN");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn collect_until_reports_which_boundary() {
        let tokens = ["1", "ELSE", "2", "END"];
        let mut cursor = 0;
        let (_, boundary) = collect_until(&tokens, &mut cursor, &["ELSE", "END"]).unwrap();
        assert_eq!(boundary, "ELSE");
    }

    #[test]
    fn collect_until_exhaustion_is_none() {
        let tokens = ["1", "2", "3"];
        let mut cursor = 0;
        assert!(collect_until(&tokens, &mut cursor, &["END"]).is_none());
        assert_eq!(cursor, 3);
    }

    #[test]
    fn literals_push_in_order() {
        let mut interp = Interpreter::new();
        interp.execute("1 2 3").unwrap();
        assert_eq!(
            interp.stack().as_slice(),
            &[Value::integer(1), Value::integer(2), Value::integer(3)]
        );
    }

    #[test]
    fn negative_literals_push() {
        let mut interp = Interpreter::new();
        interp.execute("-5 3 ADD").unwrap();
        assert_eq!(interp.stack().as_slice(), &[Value::integer(-2)]);
    }

    #[test]
    fn bare_boundary_keywords_are_skipped() {
        let mut interp = Interpreter::new();
        interp.execute("THEN 1 ELSE END DO 2").unwrap();
        assert_eq!(
            interp.stack().as_slice(),
            &[Value::integer(1), Value::integer(2)]
        );
    }

    #[test]
    fn unknown_command_names_the_token() {
        let mut interp = Interpreter::new();
        assert_eq!(
            interp.execute("1 BOGUS"),
            Err(RuntimeError::UnknownCommand("BOGUS".to_string()))
        );
        // Fail-fast leaves the in-progress stack inspectable.
        assert_eq!(interp.stack().as_slice(), &[Value::integer(1)]);
    }

    #[test]
    fn step_budget_stops_infinite_while() {
        let mut interp = Interpreter::with_config(InterpreterConfig {
            max_steps: Some(1_000),
        });
        let result = interp.execute("1 WHILE 1 DO END");
        assert_eq!(result, Err(RuntimeError::StepLimitExceeded(1_000)));
    }

    #[test]
    fn step_budget_permits_terminating_programs() {
        let mut interp = Interpreter::with_config(InterpreterConfig {
            max_steps: Some(1_000),
        });
        interp.execute("5 3 ADD").unwrap();
        assert_eq!(interp.stack().as_slice(), &[Value::integer(8)]);
    }

    #[test]
    fn for_step_zero_never_iterates() {
        let mut interp = Interpreter::new();
        interp.execute("1 10 0 FOR DUP PRINT END").unwrap();
        assert!(interp.stack().is_empty());
        assert!(interp.prints().is_empty());
    }

    #[test]
    fn for_counts_down_with_negative_step() {
        let mut interp = Interpreter::new();
        interp.execute("3 1 -1 FOR PRINT END").unwrap();
        assert_eq!(
            interp.prints(),
            &[Value::integer(3), Value::integer(2), Value::integer(1)]
        );
    }
}
