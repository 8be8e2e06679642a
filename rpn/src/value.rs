use std::fmt;

use numutil::{format_number, Bases};

/// A stack value. Literals are always integers; true division is the only
/// way to produce a float.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn as_int(self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(i),
            Value::Float(_) => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(i) => i as f64,
            Value::Float(x) => x,
        }
    }

    /// Integers in the selected bases, floats as they are.
    pub fn in_bases(self, bases: Bases) -> String {
        match self {
            Value::Int(i) => format_number(i, bases, " ", None),
            Value::Float(_) => self.to_string(),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on whole floats.
            Value::Float(x) => write!(f, "{:?}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Float(4.0).to_string(), "4.0");
    }

    #[test]
    fn bases() {
        assert_eq!(Value::Int(18).in_bases(Bases::ALL), "18 0x12 0b10010");
        assert_eq!(Value::Float(0.5).in_bases(Bases::ALL), "0.5");
    }
}
