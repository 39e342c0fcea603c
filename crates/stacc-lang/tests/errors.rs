//! Error reporting tests.
//!
//! Every failure aborts the whole execution; these tests verify the error
//! kind reported for each failure mode and that the in-progress stack
//! stays inspectable.

use stacc_lang::{eval, Interpreter, RuntimeError, StackError, Value};

/// Helper: evaluate and return the error.
fn eval_err(code: &str) -> RuntimeError {
    eval(code).expect_err("program should fail")
}

#[test]
fn pop_empty_stack() {
    assert_eq!(eval_err("POP"), RuntimeError::Stack(StackError::Underflow));
    assert_eq!(eval_err("PRINT"), RuntimeError::Stack(StackError::Underflow));
    assert_eq!(eval_err("DUP"), RuntimeError::Stack(StackError::Underflow));
}

#[test]
fn binary_op_with_one_operand() {
    assert_eq!(
        eval_err("1 ADD"),
        RuntimeError::Stack(StackError::InsufficientOperands { needed: 2, found: 1 })
    );
}

#[test]
fn for_with_too_few_bounds() {
    assert_eq!(
        eval_err("1 2 FOR DUP END"),
        RuntimeError::Stack(StackError::InsufficientOperands { needed: 3, found: 2 })
    );
}

#[test]
fn division_by_zero() {
    assert_eq!(
        eval_err("1 0 DIV"),
        RuntimeError::Stack(StackError::DivisionByZero)
    );
}

#[test]
fn unknown_command() {
    assert_eq!(
        eval_err("INVALID"),
        RuntimeError::UnknownCommand("INVALID".to_string())
    );
}

#[test]
fn if_missing_then() {
    // END does not terminate the condition scan; only THEN does.
    assert_eq!(eval_err("1 IF 2 END"), RuntimeError::MissingThen);
}

#[test]
fn if_missing_end() {
    assert_eq!(eval_err("1 IF THEN 2"), RuntimeError::MissingEnd("IF"));
    assert_eq!(
        eval_err("1 IF THEN 2 ELSE 3"),
        RuntimeError::MissingEnd("IF")
    );
}

#[test]
fn while_missing_do() {
    assert_eq!(eval_err("1 WHILE DUP"), RuntimeError::MissingDo);
}

#[test]
fn while_missing_end() {
    assert_eq!(
        eval_err("1 WHILE DUP DO PRINT"),
        RuntimeError::MissingEnd("WHILE")
    );
}

#[test]
fn for_missing_end() {
    assert_eq!(eval_err("1 5 1 FOR PRINT"), RuntimeError::MissingEnd("FOR"));
}

#[test]
fn boundary_errors_reported_before_evaluation() {
    // The FOR body is scanned before the bounds are popped, so a missing
    // END wins over missing bounds.
    assert_eq!(eval_err("FOR PRINT"), RuntimeError::MissingEnd("FOR"));
}

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(eval_err("INVALID").to_string(), "unknown command: INVALID");
    assert_eq!(
        eval_err("1 IF 2 END").to_string(),
        "missing THEN in IF construct"
    );
    assert_eq!(
        eval_err("1 5 1 FOR PRINT").to_string(),
        "missing END in FOR construct"
    );
    assert_eq!(eval_err("1 0 DIV").to_string(), "division by zero");
}

#[test]
fn failed_run_leaves_in_progress_stack() {
    let mut interp = Interpreter::new();
    let result = interp.execute("1 2 3 BOGUS 4");
    assert!(result.is_err());
    assert_eq!(
        interp.stack().as_slice(),
        &[Value::integer(1), Value::integer(2), Value::integer(3)]
    );
}
