use std::error;
use std::fmt;
use std::io;

use numutil::LiteralError;

use crate::ops::Operator;

pub type EvalResult<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// More than one value was left on the stack.
    InvalidEquation,
    /// Nothing was left on the stack at all.
    EmptyEquation,
    StackUnderflow(Operator),
    InvalidLiteral(LiteralError),
    DivisionByZero,
    Overflow(Operator),
    NegativeShift,
    UnsupportedOperand(Operator),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::InvalidEquation => write!(f, "Invalid equation"),
            EvalError::EmptyEquation => write!(f, "Invalid equation: nothing to evaluate"),
            EvalError::StackUnderflow(op) => write!(f, "not enough operands for '{}'", op),
            EvalError::InvalidLiteral(e) => write!(f, "{}", e),
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::Overflow(op) => write!(f, "integer overflow in '{}'", op),
            EvalError::NegativeShift => write!(f, "negative shift count"),
            EvalError::UnsupportedOperand(op) => write!(f, "'{}' needs integer operands", op),
        }
    }
}

impl error::Error for EvalError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EvalError::InvalidLiteral(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LiteralError> for EvalError {
    fn from(e: LiteralError) -> Self {
        EvalError::InvalidLiteral(e)
    }
}

/// Everything the command line tool can fail with.
#[derive(Debug)]
pub enum Error {
    Eval(EvalError),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Eval(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Eval(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Error::Eval(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
