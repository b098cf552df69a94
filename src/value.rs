use std::fmt::Display;

use crate::types::TypeName;

#[derive(PartialEq, Debug, Clone)]
pub enum Value {
    String(String),
    Bool(bool),
    Uint8(u8),
    Float64(f64),
}

impl Value {
    pub fn type_name(&self) -> TypeName {
        match self {
            Value::String(_) => TypeName::String,
            Value::Bool(_) => TypeName::Bool,
            Value::Uint8(_) => TypeName::Uint8,
            Value::Float64(_) => TypeName::Float64,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Value::Uint8(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float64(n)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Unquoted, unlike Debug.
            Value::String(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Uint8(n) => write!(f, "{}", n),
            // Shortest decimal that round-trips.
            Value::Float64(n) => write!(f, "{}", n),
        }
    }
}
