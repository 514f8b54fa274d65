//! Scan a formula string into tokens.
//!
//! The grammar is deliberately tiny: decimal numbers, identifiers drawn
//! from a caller-supplied allow-list, the five operators, parentheses,
//! and whitespace. Anything else fails immediately.

use std::collections::HashSet;

use crate::types::{ExprError, Op, Token, MAX_FORMULA_LENGTH};

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_part(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Tokenize `formula`, validating identifiers against `allowed`.
///
/// Fails fast on the first lexical error: over-long input, an invalid
/// character, a malformed number, or an identifier outside the allow-list.
/// There is no implicit multiplication; `2x` lexes as two adjacent tokens
/// and is rejected later by the evaluator's stack discipline.
pub fn tokenize(formula: &str, allowed: &HashSet<String>) -> Result<Vec<Token>, ExprError> {
    if formula.len() > MAX_FORMULA_LENGTH {
        return Err(ExprError::FormulaTooLong(formula.len()));
    }

    let bytes = formula.as_bytes();
    let len = bytes.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < len {
        let b = bytes[i];

        if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
            i += 1;
            continue;
        }

        if b == b'(' {
            tokens.push(Token::LParen);
            i += 1;
            continue;
        }
        if b == b')' {
            tokens.push(Token::RParen);
            i += 1;
            continue;
        }

        if let Some(op) = Op::from_char(b as char) {
            tokens.push(Token::Op(op));
            i += 1;
            continue;
        }

        // Number: 12, 12.34, or .5 -- at most one dot.
        if b.is_ascii_digit() || b == b'.' {
            let start = i;
            let mut saw_dot = b == b'.';
            i += 1;
            while i < len {
                let c = bytes[i];
                if c.is_ascii_digit() {
                    i += 1;
                } else if c == b'.' && !saw_dot {
                    saw_dot = true;
                    i += 1;
                } else {
                    break;
                }
            }
            let raw = &formula[start..i];
            if raw == "." {
                return Err(ExprError::InvalidNumber(raw.to_string()));
            }
            let value: f64 = raw
                .parse()
                .map_err(|_| ExprError::InvalidNumber(raw.to_string()))?;
            // A bounded literal cannot normally overflow, but keep the check.
            if !value.is_finite() {
                return Err(ExprError::InvalidNumber(raw.to_string()));
            }
            tokens.push(Token::Number(value));
            continue;
        }

        if is_ident_start(b) {
            let start = i;
            i += 1;
            while i < len && is_ident_part(bytes[i]) {
                i += 1;
            }
            let name = &formula[start..i];
            if !allowed.contains(name) {
                return Err(ExprError::UnknownVariable(name.to_string()));
            }
            tokens.push(Token::Ident(name.to_string()));
            continue;
        }

        let ch = formula[i..].chars().next().unwrap_or(b as char);
        return Err(ExprError::InvalidCharacter { ch, pos: i });
    }

    Ok(tokens)
}
