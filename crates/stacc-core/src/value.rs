//! Numeric stack values.
//!
//! stacc has exactly two value types: 64-bit integers and 64-bit reals.
//! Integer-ness is preserved through ADD/SUB/MULT when both operands are
//! integers; DIV always produces a real, even for evenly-divisible
//! operands. Callers inspect the rendered form of results, so the
//! integer/real distinction is part of the contract, not an implementation
//! detail.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A value on the stacc stack.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point.
    Real(f64),
}

impl Value {
    /// Create an integer value.
    pub fn integer(n: i64) -> Self {
        Value::Integer(n)
    }

    /// Create a real value.
    pub fn real(n: f64) -> Self {
        Value::Real(n)
    }

    /// Try to get as integer (no coercion).
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Real(_) => None,
        }
    }

    /// Get the real view of this value.
    pub fn as_real(&self) -> f64 {
        match self {
            Value::Integer(n) => *n as f64,
            Value::Real(n) => *n,
        }
    }

    /// Non-zero is true, zero is false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Integer(n) => *n != 0,
            Value::Real(n) => *n != 0.0,
        }
    }

    /// Check for exact zero (used by the DIV divisor check).
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Integer(n) => *n == 0,
            Value::Real(n) => *n == 0.0,
        }
    }

    /// Add two values, preserving integer-ness when both are integers.
    pub fn add(self, other: Value) -> Value {
        binary_numeric(self, other, |a, b| a + b, |a, b| a + b)
    }

    /// Subtract `other` from `self`, preserving integer-ness.
    pub fn sub(self, other: Value) -> Value {
        binary_numeric(self, other, |a, b| a - b, |a, b| a - b)
    }

    /// Multiply two values, preserving integer-ness.
    pub fn mul(self, other: Value) -> Value {
        binary_numeric(self, other, |a, b| a * b, |a, b| a * b)
    }

    /// Divide `self` by `other`. Always produces a real, even when the
    /// quotient is mathematically whole. The caller checks for a zero
    /// divisor before calling.
    pub fn div(self, other: Value) -> Value {
        Value::Real(self.as_real() / other.as_real())
    }

    /// Numeric ordering over the real view of both values.
    pub fn compare(self, other: Value) -> Ordering {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a.cmp(&b),
            (a, b) => a
                .as_real()
                .partial_cmp(&b.as_real())
                .unwrap_or(Ordering::Equal),
        }
    }
}

fn binary_numeric<Fi, Fr>(a: Value, b: Value, int_op: Fi, real_op: Fr) -> Value
where
    Fi: FnOnce(i64, i64) -> i64,
    Fr: FnOnce(f64, f64) -> f64,
{
    match (a, b) {
        (Value::Integer(a), Value::Integer(b)) => Value::Integer(int_op(a, b)),
        (a, b) => Value::Real(real_op(a.as_real(), b.as_real())),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b,
            (Value::Integer(a), Value::Real(b)) => (*a as f64) == *b,
            (Value::Real(a), Value::Integer(b)) => *a == (*b as f64),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Real(n) => {
                // Whole reals still render with a fractional digit so the
                // caller can tell 5.0 (a DIV result) from 5.
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Real(n)
    }
}
