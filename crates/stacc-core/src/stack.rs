//! The stacc value stack.
//!
//! An ordered, mutable sequence of values with append/remove-from-end
//! discipline only. Every primitive command of the language is a method
//! here; the engine in `stacc-lang` dispatches onto them. The stack also
//! owns the captured-print sequence: PRINT pops the top value and appends
//! it there, in execution order.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::error::StackError;
use crate::value::Value;

/// Render a value sequence (bottom to top) in the `Stack([...])` snapshot
/// form the caller receives.
pub fn snapshot(values: &[Value]) -> String {
    let items = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Stack([{}])", items)
}

/// The value stack, created empty per execution request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stack {
    items: Vec<Value>,
    prints: Vec<Value>,
}

impl Stack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All elements, bottom to top.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Values printed so far, in execution order.
    pub fn prints(&self) -> &[Value] {
        &self.prints
    }

    /// Consume the stack, returning (elements, prints).
    pub fn into_parts(self) -> (Vec<Value>, Vec<Value>) {
        (self.items, self.prints)
    }

    /// Push a value onto the stack.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Pop the top value.
    pub fn pop(&mut self) -> Result<Value, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    /// Peek at the top value without removing it.
    pub fn peek(&self) -> Result<Value, StackError> {
        self.items.last().copied().ok_or(StackError::Underflow)
    }

    /// Duplicate the top value (DUP).
    pub fn dup(&mut self) -> Result<(), StackError> {
        let top = self.peek()?;
        self.push(top);
        Ok(())
    }

    /// Pop the top value and capture it in the print sequence (PRINT).
    ///
    /// The printed value is also emitted on the diagnostic log; the
    /// captured sequence is the contract surface.
    pub fn print_top(&mut self) -> Result<Value, StackError> {
        let value = self.pop()?;
        debug!(%value, "print");
        self.prints.push(value);
        Ok(value)
    }

    /// ADD: pop b then a, push a + b.
    pub fn add(&mut self) -> Result<(), StackError> {
        let (a, b) = self.pop_operands()?;
        self.push(a.add(b));
        Ok(())
    }

    /// SUB: pop b then a, push a - b. Top of stack is the right-hand
    /// operand, so `10 4 SUB` yields 6.
    pub fn sub(&mut self) -> Result<(), StackError> {
        let (a, b) = self.pop_operands()?;
        self.push(a.sub(b));
        Ok(())
    }

    /// MULT: pop b then a, push a * b.
    pub fn mult(&mut self) -> Result<(), StackError> {
        let (a, b) = self.pop_operands()?;
        self.push(a.mul(b));
        Ok(())
    }

    /// DIV: pop b then a, push a / b as a real.
    ///
    /// The divisor is popped and checked before the dividend, so on a
    /// zero divisor the dividend is still on the stack.
    pub fn div(&mut self) -> Result<(), StackError> {
        self.require(2)?;
        let b = self.pop()?;
        if b.is_zero() {
            return Err(StackError::DivisionByZero);
        }
        let a = self.pop()?;
        self.push(a.div(b));
        Ok(())
    }

    /// LT: pop b then a, push 1 if a < b else 0.
    pub fn lt(&mut self) -> Result<(), StackError> {
        self.compare(|ord| ord == Ordering::Less)
    }

    /// GT: pop b then a, push 1 if a > b else 0.
    pub fn gt(&mut self) -> Result<(), StackError> {
        self.compare(|ord| ord == Ordering::Greater)
    }

    /// EQ: pop b then a, push 1 if a == b else 0.
    pub fn eq(&mut self) -> Result<(), StackError> {
        self.compare(|ord| ord == Ordering::Equal)
    }

    fn compare<F>(&mut self, check: F) -> Result<(), StackError>
    where
        F: FnOnce(Ordering) -> bool,
    {
        let (a, b) = self.pop_operands()?;
        let result = if check(a.compare(b)) { 1 } else { 0 };
        self.push(Value::integer(result));
        Ok(())
    }

    /// Pop the operands for a binary op: b (top) then a (second-from-top).
    fn pop_operands(&mut self) -> Result<(Value, Value), StackError> {
        self.require(2)?;
        let b = self.pop()?;
        let a = self.pop()?;
        Ok((a, b))
    }

    fn require(&self, needed: usize) -> Result<(), StackError> {
        if self.items.len() < needed {
            return Err(StackError::InsufficientOperands {
                needed,
                found: self.items.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", snapshot(&self.items))
    }
}
