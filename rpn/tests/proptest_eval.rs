//! Property-based tests for the evaluator.
//!
//! Any postfix sequence with n literals and n-1 binary operators, placed so
//! that every operator has two operands, must reduce to a single value.

use proptest::prelude::*;
use rpn::{rpn, EvalError};

const BINARY_OPS: [&str; 10] = ["+", "-", "*", "/", "%", "<<", ">>", "&", "|", "^"];

/// A literal in one of the three accepted spellings.
fn literal() -> impl Strategy<Value = String> {
    (0u32..100_000, 0u8..3).prop_map(|(v, radix)| match radix {
        0 => v.to_string(),
        1 => format!("0x{:x}", v),
        _ => format!("0b{:b}", v),
    })
}

/// n literals, n-1 operators, and push/apply choices for the interleaving.
fn parts() -> impl Strategy<Value = (Vec<String>, Vec<&'static str>, Vec<bool>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(literal(), n),
            prop::collection::vec(prop::sample::select(BINARY_OPS.to_vec()), n - 1),
            prop::collection::vec(any::<bool>(), 0..24),
        )
    })
}

/// Lay the parts out in valid postfix order. An operator is only placed
/// when at least two values are on the stack.
fn postfix(literals: &[String], ops: &[&str], choices: &[bool]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut choice = choices.iter().cycle();
    let (mut li, mut oi, mut depth) = (0, 0, 0);

    while li < literals.len() || oi < ops.len() {
        let can_push = li < literals.len();
        let can_apply = oi < ops.len() && depth >= 2;
        let push = can_push && (!can_apply || *choice.next().unwrap_or(&true));

        if push {
            tokens.push(literals[li].clone());
            li += 1;
            depth += 1;
        } else {
            tokens.push(ops[oi].to_string());
            oi += 1;
            depth -= 1;
        }
    }

    tokens
}

proptest! {
    /// Property: well-formed sequences never leave extra values or run dry
    #[test]
    fn well_formed_sequences_reduce_to_one_value((literals, ops, choices) in parts()) {
        let tokens = postfix(&literals, &ops, &choices);

        match rpn(&tokens) {
            Ok(e) => prop_assert_eq!(e.trace.len(), ops.len(), "tokens {:?}", tokens),
            Err(EvalError::DivisionByZero)
            | Err(EvalError::Overflow(_))
            | Err(EvalError::NegativeShift)
            | Err(EvalError::UnsupportedOperand(_)) => {}
            Err(e) => prop_assert!(false, "tokens {:?} failed with {:?}", tokens, e),
        }
    }

    /// Property: literals chained with `+` sum like plain integers
    #[test]
    fn sums_match_integer_addition(values in prop::collection::vec(0i64..1_000_000, 1..10)) {
        let mut tokens: Vec<String> = values.iter().map(|v| format!("0x{:x}", v)).collect();
        tokens.extend(std::iter::repeat("+".to_string()).take(values.len() - 1));

        let e = rpn(&tokens).unwrap();
        prop_assert_eq!(e.value, rpn::Value::Int(values.iter().sum()));
    }
}
