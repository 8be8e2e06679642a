use std::fmt;

use log::{debug, trace};
use numutil::{classify, parse_as};

use crate::errors::{EvalError, EvalResult};
use crate::ops::{Division, Operator, Tilde};
use crate::value::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EvalOptions {
    pub division: Division,
    pub tilde: Tilde,
}

impl Default for EvalOptions {
    fn default() -> EvalOptions {
        EvalOptions {
            division: Division::True,
            tilde: Tilde::Negate,
        }
    }
}

/// One operator application. Unary operators record `0` as the right
/// operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub left: Value,
    pub op: Operator,
    pub right: Value,
    pub result: Value,
}

impl Step {
    pub fn new<L, R, X>(left: L, op: Operator, right: R, result: X) -> Step
    where
        L: Into<Value>,
        R: Into<Value>,
        X: Into<Value>,
    {
        Step {
            left: left.into(),
            op,
            right: right.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, '{}', {}, {})", self.left, self.op, self.right, self.result)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub value: Value,
    pub trace: Vec<Step>,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, [", self.value)?;
        for (i, step) in self.trace.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", step)?;
        }
        write!(f, "])")
    }
}

pub struct Evaluator {
    options: EvalOptions,
    stack: Vec<Value>,
    trace: Vec<Step>,
}

impl Evaluator {
    pub fn new(options: EvalOptions) -> Evaluator {
        Evaluator {
            options,
            stack: Vec::new(),
            trace: Vec::new(),
        }
    }

    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    pub fn trace(&self) -> &[Step] {
        &self.trace
    }

    /// Feed one token. Literals are pushed, operators are applied, and
    /// anything else is dropped.
    pub fn push_token(&mut self, token: &str) -> EvalResult<()> {
        if let Some(radix) = classify(token) {
            let v = parse_as(token, radix)?;
            trace!("push {}", v);
            self.stack.push(Value::Int(v));
        } else if let Some(op) = Operator::from_symbol(token) {
            self.apply(op)?;
        } else if !token.is_empty() {
            debug!("dropping unrecognized token '{}'", token);
        }

        Ok(())
    }

    fn pop(&mut self, op: Operator) -> EvalResult<Value> {
        self.stack.pop().ok_or(EvalError::StackUnderflow(op))
    }

    fn apply(&mut self, op: Operator) -> EvalResult<()> {
        if self.stack.len() < op.arity() {
            return Err(EvalError::StackUnderflow(op));
        }

        let step = if op.arity() == 1 {
            let v = self.pop(op)?;
            Step::new(v, op, 0, op.apply_unary(v, self.options.tilde)?)
        } else {
            let right = self.pop(op)?;
            let left = self.pop(op)?;
            Step::new(left, op, right, op.apply_binary(left, right, self.options.division)?)
        };

        debug!("{}", step);
        self.stack.push(step.result);
        self.trace.push(step);

        Ok(())
    }

    /// The stack has to reduce to exactly one value.
    pub fn finish(self) -> EvalResult<Evaluation> {
        match self.stack.len() {
            0 => Err(EvalError::EmptyEquation),
            1 => Ok(Evaluation {
                value: self.stack[0],
                trace: self.trace,
            }),
            n => {
                debug!("{} values left on the stack", n);
                Err(EvalError::InvalidEquation)
            }
        }
    }
}

pub fn evaluate<I, S>(tokens: I, options: EvalOptions) -> EvalResult<Evaluation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut evaluator = Evaluator::new(options);

    for token in tokens {
        evaluator.push_token(token.as_ref())?;
    }

    evaluator.finish()
}

/// Evaluate with the default options: true division and `~` as negation.
pub fn rpn<I, S>(tokens: I) -> EvalResult<Evaluation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    evaluate(tokens, EvalOptions::default())
}

/// Split an input line on single spaces, the way a typed equation is read.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.trim_end_matches(|c| c == '\n' || c == '\r').split(' ').collect()
}
