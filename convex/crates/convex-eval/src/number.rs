//! Runtime numeric value.
//!
//! Results stay exact integers until the first division; from then on the
//! running value is a float and every later operation on it is too.

use std::fmt;

/// A computed value: either an exact integer or a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Exact integer result (no division involved)
    Int(i64),
    /// Result widened by a division
    Float(f64),
}

impl Number {
    /// Returns the value as an `f64`, converting integers.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns true for exact integer values.
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Adds two numbers. Returns `None` on `i64` overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a.checked_add(b).map(Self::Int),
            (a, b) => Some(Self::Float(a.as_f64() + b.as_f64())),
        }
    }

    /// Subtracts `rhs`. Returns `None` on `i64` overflow.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a.checked_sub(b).map(Self::Int),
            (a, b) => Some(Self::Float(a.as_f64() - b.as_f64())),
        }
    }

    /// Multiplies two numbers. Returns `None` on `i64` overflow.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a.checked_mul(b).map(Self::Int),
            (a, b) => Some(Self::Float(a.as_f64() * b.as_f64())),
        }
    }

    /// True division. Always yields a float; returns `None` for a zero
    /// divisor, integer or float.
    ///
    /// # Example
    ///
    /// ```
    /// use convex_eval::Number;
    ///
    /// assert_eq!(Number::Int(7).checked_div(Number::Int(2)), Some(Number::Float(3.5)));
    /// assert_eq!(Number::Int(1).checked_div(Number::Float(0.0)), None);
    /// ```
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return None;
        }
        Some(Self::Float(self.as_f64() / divisor))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            // Debug keeps the `.0` on integral floats and uses exponents for
            // very large or small magnitudes.
            Self::Float(v) => write!(f, "{:?}", v),
        }
    }
}
