//! Stack evaluation of postfix sequences, and the full pipeline entry point.

use std::collections::{HashMap, HashSet};

use crate::rpn::to_postfix;
use crate::tokenizer::tokenize;
use crate::types::{ExprError, Op, Token};

/// Evaluate a postfix token sequence against variable bindings.
///
/// Operands push onto a value stack; each operator pops `b` then `a` and
/// pushes `a op b`. The sequence is valid only if it reduces to exactly
/// one value. Any non-finite intermediate (division by zero, overflow,
/// NaN from `powf`) aborts the evaluation.
pub fn eval_postfix(postfix: &[Token], bindings: &HashMap<String, f64>) -> Result<f64, ExprError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(v) => stack.push(*v),

            Token::Ident(name) => {
                let value = bindings
                    .get(name)
                    .copied()
                    .ok_or_else(|| ExprError::InvalidVariableValue(name.clone()))?;
                if !value.is_finite() {
                    return Err(ExprError::InvalidVariableValue(name.clone()));
                }
                stack.push(value);
            }

            Token::Op(op) => {
                let b = stack.pop().ok_or(ExprError::InvalidExpression)?;
                let a = stack.pop().ok_or(ExprError::InvalidExpression)?;
                let result = match op {
                    Op::Add => a + b,
                    Op::Sub => a - b,
                    Op::Mul => a * b,
                    Op::Div => a / b,
                    Op::Pow => a.powf(b),
                };
                if !result.is_finite() {
                    return Err(ExprError::NonFiniteResult);
                }
                stack.push(result);
            }

            // The converter never emits parentheses; a hand-built sequence
            // containing one is malformed.
            Token::LParen | Token::RParen => return Err(ExprError::InvalidExpression),
        }
    }

    if stack.len() != 1 {
        return Err(ExprError::InvalidExpression);
    }
    Ok(stack[0])
}

/// Evaluate a formula string end to end: tokenize, convert to postfix,
/// reduce on the value stack.
///
/// Pure and stateless; each call owns its buffers, so repeated evaluation
/// of the same inputs always yields the same result or the same error.
pub fn evaluate(
    formula: &str,
    allowed: &HashSet<String>,
    bindings: &HashMap<String, f64>,
) -> Result<f64, ExprError> {
    let tokens = tokenize(formula, allowed)?;
    let postfix = to_postfix(&tokens)?;
    eval_postfix(&postfix, bindings)
}
