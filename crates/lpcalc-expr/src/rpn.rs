//! Infix to postfix conversion via the shunting-yard algorithm.

use crate::types::{ExprError, Op, Token};

/// Convert an infix token sequence to postfix (RPN).
///
/// Unary `+`/`-` are rewritten to binary form by pushing a synthetic
/// `Number(0)` into the output first, so the precedence loop needs no
/// special case. An operator token is unary when it is the first token or
/// follows another operator or an opening parenthesis.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ExprError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut prev: Option<&Token> = None;

    for token in tokens {
        match token {
            Token::Number(_) | Token::Ident(_) => output.push(token.clone()),

            Token::Op(op) => {
                let is_unary = matches!(op, Op::Add | Op::Sub)
                    && matches!(prev, None | Some(Token::Op(_)) | Some(Token::LParen));
                if is_unary {
                    output.push(Token::Number(0.0));
                }

                while let Some(Token::Op(top)) = stack.last() {
                    let should_pop = if op.is_right_associative() {
                        op.precedence() < top.precedence()
                    } else {
                        op.precedence() <= top.precedence()
                    };
                    if !should_pop {
                        break;
                    }
                    if let Some(popped) = stack.pop() {
                        output.push(popped);
                    }
                }
                stack.push(token.clone());
            }

            Token::LParen => stack.push(Token::LParen),

            Token::RParen => {
                let mut found = false;
                while let Some(top) = stack.pop() {
                    if top == Token::LParen {
                        found = true;
                        break;
                    }
                    output.push(top);
                }
                if !found {
                    return Err(ExprError::MismatchedParens);
                }
            }
        }
        prev = Some(token);
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::LParen | Token::RParen) {
            return Err(ExprError::MismatchedParens);
        }
        output.push(top);
    }

    Ok(output)
}
