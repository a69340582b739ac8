//! Runtime values.
//!
//! Scripts are dynamically typed: every argument ends up as a string, a number
//! or a boolean. Bare tokens are classified once, when they are resolved, and
//! commands coerce further as they need to.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NUMBER_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$")
        .expect("number literal pattern must compile")
});

/// A script value.
///
/// Numbers display in plain positional notation, never with an exponent:
/// `1e21` prints as `1000000000000000000000`, where JavaScript would print
/// `1e+21`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(f64),
    Bool(bool),
}

impl Value {
    /// Classify a bare token: `true`/`false` become booleans, finite decimal
    /// literals become numbers, everything else stays a string.
    pub fn from_literal(token: &str) -> Self {
        match token {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        if NUMBER_LITERAL.is_match(token) {
            if let Ok(n) = token.parse::<f64>() {
                if n.is_finite() {
                    return Value::Number(n);
                }
            }
        }
        Value::Str(token.to_string())
    }

    /// Numeric view used by arithmetic. Non-numeric strings give NaN.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Str(s) => Value::from_literal(s.trim()).number_or_nan(),
        }
    }

    fn number_or_nan(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            _ => f64::NAN,
        }
    }

    /// `false`, `0`, `NaN` and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Bool(true)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) if n.is_nan() => write!(f, "NaN"),
            Value::Number(n) if n.is_infinite() => {
                write!(f, "{}", if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // Integral values print without a fraction: 3, not 3.0.
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
