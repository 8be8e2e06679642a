use std::fmt;

use crate::errors::{EvalError, EvalResult};
use crate::value::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    And,
    Or,
    Xor,
    Tilde,
}

pub const OPERATORS: [Operator; 11] = [
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Rem,
    Operator::Shl,
    Operator::Shr,
    Operator::And,
    Operator::Or,
    Operator::Xor,
    Operator::Tilde,
];

/// What `/` does with two integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Division {
    /// Always produce a float.
    True,
    /// Floor division, staying integral.
    Floor,
}

/// What the unary `~` does.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tilde {
    Negate,
    Complement,
}

impl Operator {
    pub fn from_symbol(s: &str) -> Option<Operator> {
        OPERATORS.iter().copied().find(|op| op.symbol() == s)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Xor => "^",
            Operator::Tilde => "~",
        }
    }

    /// Number of operands popped off the stack.
    pub fn arity(self) -> usize {
        match self {
            Operator::Tilde => 1,
            _ => 2,
        }
    }

    pub fn apply_unary(self, v: Value, tilde: Tilde) -> EvalResult<Value> {
        match (tilde, v) {
            (Tilde::Negate, Value::Int(i)) => i.checked_neg().map(Value::Int).ok_or(EvalError::Overflow(self)),
            (Tilde::Negate, Value::Float(x)) => Ok(Value::Float(-x)),
            (Tilde::Complement, Value::Int(i)) => Ok(Value::Int(!i)),
            (Tilde::Complement, Value::Float(_)) => Err(EvalError::UnsupportedOperand(self)),
        }
    }

    pub fn apply_binary(self, l: Value, r: Value, division: Division) -> EvalResult<Value> {
        match self {
            Operator::Add => self.arith(l, r, i64::checked_add, |a, b| a + b),
            Operator::Sub => self.arith(l, r, i64::checked_sub, |a, b| a - b),
            Operator::Mul => self.arith(l, r, i64::checked_mul, |a, b| a * b),
            Operator::Div => self.divide(l, r, division),
            Operator::Rem => self.modulo(l, r),
            Operator::Shl | Operator::Shr => {
                let (a, b) = self.ints(l, r)?;
                self.shift(a, b).map(Value::Int)
            }
            Operator::And => self.ints(l, r).map(|(a, b)| Value::Int(a & b)),
            Operator::Or => self.ints(l, r).map(|(a, b)| Value::Int(a | b)),
            Operator::Xor => self.ints(l, r).map(|(a, b)| Value::Int(a ^ b)),
            Operator::Tilde => Err(EvalError::UnsupportedOperand(self)),
        }
    }

    fn ints(self, l: Value, r: Value) -> EvalResult<(i64, i64)> {
        match (l.as_int(), r.as_int()) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(EvalError::UnsupportedOperand(self)),
        }
    }

    fn arith<I, F>(self, l: Value, r: Value, int_op: I, float_op: F) -> EvalResult<Value>
    where
        I: Fn(i64, i64) -> Option<i64>,
        F: Fn(f64, f64) -> f64,
    {
        match (l, r) {
            (Value::Int(a), Value::Int(b)) => int_op(a, b).map(Value::Int).ok_or(EvalError::Overflow(self)),
            _ => Ok(Value::Float(float_op(l.as_f64(), r.as_f64()))),
        }
    }

    fn divide(self, l: Value, r: Value, division: Division) -> EvalResult<Value> {
        if r.as_f64() == 0.0 {
            return Err(EvalError::DivisionByZero);
        }

        match (division, l, r) {
            (Division::Floor, Value::Int(a), Value::Int(b)) => {
                let q = a.checked_div(b).ok_or(EvalError::Overflow(self))?;
                if a % b != 0 && (a < 0) != (b < 0) {
                    Ok(Value::Int(q - 1))
                } else {
                    Ok(Value::Int(q))
                }
            }
            (Division::Floor, _, _) => Ok(Value::Float((l.as_f64() / r.as_f64()).floor())),
            (Division::True, _, _) => Ok(Value::Float(l.as_f64() / r.as_f64())),
        }
    }

    /// Floored modulo: the result takes the sign of the divisor.
    fn modulo(self, l: Value, r: Value) -> EvalResult<Value> {
        if r.as_f64() == 0.0 {
            return Err(EvalError::DivisionByZero);
        }

        match (l, r) {
            (Value::Int(a), Value::Int(b)) => {
                // MIN % -1 is 0; only the quotient overflows there.
                let m = a.wrapping_rem(b);
                if m != 0 && (m < 0) != (b < 0) {
                    Ok(Value::Int(m + b))
                } else {
                    Ok(Value::Int(m))
                }
            }
            _ => {
                let b = r.as_f64();
                let m = l.as_f64() % b;
                if m != 0.0 && (m < 0.0) != (b < 0.0) {
                    Ok(Value::Float(m + b))
                } else {
                    Ok(Value::Float(m))
                }
            }
        }
    }

    fn shift(self, a: i64, b: i64) -> EvalResult<i64> {
        if b < 0 {
            return Err(EvalError::NegativeShift);
        }

        match self {
            Operator::Shl => {
                if a == 0 {
                    return Ok(0);
                }
                if b >= 64 {
                    return Err(EvalError::Overflow(self));
                }
                let v = a << b;
                if v >> b != a {
                    return Err(EvalError::Overflow(self));
                }
                Ok(v)
            }
            _ => {
                // Arithmetic shift; anything past the width leaves the sign.
                if b >= 64 {
                    Ok(if a < 0 { -1 } else { 0 })
                } else {
                    Ok(a >> b)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> Value {
        Value::Int(i)
    }

    #[test]
    fn symbols_round_trip() {
        for op in OPERATORS.iter() {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(*op));
        }
        assert_eq!(Operator::from_symbol("**"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn floored_modulo() {
        assert_eq!(Operator::Rem.apply_binary(int(-7), int(3), Division::True), Ok(int(2)));
        assert_eq!(Operator::Rem.apply_binary(int(7), int(-3), Division::True), Ok(int(-2)));
        assert_eq!(Operator::Rem.apply_binary(int(7), int(3), Division::True), Ok(int(1)));
        assert_eq!(
            Operator::Rem.apply_binary(Value::Float(-1.5), int(1), Division::True),
            Ok(Value::Float(0.5))
        );
        assert_eq!(
            Operator::Rem.apply_binary(int(1), int(0), Division::True),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(Operator::Rem.apply_binary(int(i64::min_value()), int(-1), Division::True), Ok(int(0)));
        assert_eq!(
            Operator::Rem.apply_binary(int(i64::min_value()), int(i64::max_value()), Division::True),
            Ok(int(i64::max_value() - 1))
        );
    }

    #[test]
    fn floor_division() {
        assert_eq!(Operator::Div.apply_binary(int(7), int(2), Division::Floor), Ok(int(3)));
        assert_eq!(Operator::Div.apply_binary(int(-7), int(2), Division::Floor), Ok(int(-4)));
        assert_eq!(
            Operator::Div.apply_binary(Value::Float(7.0), int(2), Division::Floor),
            Ok(Value::Float(3.0))
        );
        assert_eq!(
            Operator::Div.apply_binary(int(i64::min_value()), int(-1), Division::Floor),
            Err(EvalError::Overflow(Operator::Div))
        );
    }

    #[test]
    fn shifts() {
        assert_eq!(Operator::Shl.apply_binary(int(1), int(4), Division::True), Ok(int(16)));
        assert_eq!(Operator::Shr.apply_binary(int(-16), int(2), Division::True), Ok(int(-4)));
        assert_eq!(Operator::Shr.apply_binary(int(-1), int(100), Division::True), Ok(int(-1)));
        assert_eq!(Operator::Shl.apply_binary(int(0), int(100), Division::True), Ok(int(0)));
        assert_eq!(Operator::Shl.apply_binary(int(-1), int(63), Division::True), Ok(int(i64::min_value())));
        assert_eq!(
            Operator::Shl.apply_binary(int(1), int(63), Division::True),
            Err(EvalError::Overflow(Operator::Shl))
        );
        assert_eq!(
            Operator::Shl.apply_binary(int(-1), int(64), Division::True),
            Err(EvalError::Overflow(Operator::Shl))
        );
        assert_eq!(
            Operator::Shl.apply_binary(int(1), int(-1), Division::True),
            Err(EvalError::NegativeShift)
        );
    }

    #[test]
    fn bitwise_needs_integers() {
        assert_eq!(Operator::Xor.apply_binary(int(0b1100), int(0b1010), Division::True), Ok(int(0b0110)));
        assert_eq!(
            Operator::And.apply_binary(Value::Float(1.0), int(1), Division::True),
            Err(EvalError::UnsupportedOperand(Operator::And))
        );
    }

    #[test]
    fn tilde_modes() {
        assert_eq!(Operator::Tilde.apply_unary(int(5), Tilde::Negate), Ok(int(-5)));
        assert_eq!(Operator::Tilde.apply_unary(int(5), Tilde::Complement), Ok(int(-6)));
        assert_eq!(
            Operator::Tilde.apply_unary(int(i64::min_value()), Tilde::Negate),
            Err(EvalError::Overflow(Operator::Tilde))
        );
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(
            Operator::Mul.apply_binary(int(i64::max_value()), int(2), Division::True),
            Err(EvalError::Overflow(Operator::Mul))
        );
        assert_eq!(
            Operator::Add.apply_binary(int(1), Value::Float(0.5), Division::True),
            Ok(Value::Float(1.5))
        );
    }
}
