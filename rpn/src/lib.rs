//! Reverse Polish notation evaluator.
//!
//! Tokens are evaluated left to right against a single operand stack. Every
//! operator application is recorded as a [`Step`] so callers can show how
//! the result was reached.

pub mod errors;
pub mod eval;
pub mod ops;
pub mod value;

pub use crate::errors::{Error, EvalError, EvalResult};
pub use crate::eval::{evaluate, rpn, tokenize, EvalOptions, Evaluation, Evaluator, Step};
pub use crate::ops::{Division, Operator, Tilde};
pub use crate::value::Value;
