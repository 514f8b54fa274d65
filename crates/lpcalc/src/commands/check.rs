//! `lpcalc check` -- show the postfix form of a formula.

use std::collections::HashSet;

use anyhow::Result;

use lpcalc_expr::{to_postfix, tokenize, Token};

use crate::cli::CheckArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `lpcalc check` command.
///
/// Runs the first two pipeline stages only, so a formula can be checked
/// without binding values to its variables.
pub fn run(ctx: &RuntimeContext, args: &CheckArgs) -> Result<()> {
    let allowed: HashSet<String> = args.allow.iter().cloned().collect();

    let tokens = tokenize(&args.formula, &allowed)?;
    let postfix = to_postfix(&tokens)?;

    let rendered: Vec<String> = postfix.iter().map(render_token).collect();

    if ctx.json {
        output_json(&serde_json::json!({
            "formula": args.formula,
            "postfix": rendered,
        }));
    } else {
        println!("{}", rendered.join(" "));
    }

    Ok(())
}

fn render_token(token: &Token) -> String {
    match token {
        Token::Number(v) => {
            if v.fract() == 0.0 && v.abs() < 1e15 {
                format!("{}", *v as i64)
            } else {
                format!("{}", v)
            }
        }
        Token::Ident(name) => name.clone(),
        Token::Op(op) => op.symbol().to_string(),
        // Unreachable for converter output; kept total for hand-built input.
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use lpcalc_expr::Op;

    #[test]
    fn render_whole_numbers_without_decimals() {
        assert_eq!(render_token(&Token::Number(4.0)), "4");
        assert_eq!(render_token(&Token::Number(2.5)), "2.5");
        assert_eq!(render_token(&Token::Op(Op::Pow)), "^");
    }
}
