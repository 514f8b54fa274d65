//! Sandboxed arithmetic expression evaluation for the lpcalc widget.
//!
//! Formula strings arrive from untrusted or generated page content, so they
//! are never handed to a general-purpose interpreter. Instead, every
//! evaluation runs a fixed three-stage pipeline: tokenize, convert to
//! postfix (shunting-yard), evaluate on a value stack. Each call is a pure
//! function of (formula, allowed names, bindings) with no shared state.

pub mod eval;
pub mod rpn;
pub mod tokenizer;
pub mod types;

pub use eval::{eval_postfix, evaluate};
pub use rpn::to_postfix;
pub use tokenizer::tokenize;
pub use types::{ExprError, Op, Token, MAX_FORMULA_LENGTH};
