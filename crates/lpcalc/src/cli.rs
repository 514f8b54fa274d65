//! Clap CLI definitions for the `lpcalc` command.

use clap::{Args, Parser, Subcommand};

/// lpcalc -- Sandboxed arithmetic formula evaluator.
///
/// Evaluates the restricted formula grammar used by embedded calculator
/// widgets: numbers, named variables, `+ - * / ^`, and parentheses.
#[derive(Parser, Debug)]
#[command(
    name = "lpcalc",
    about = "Sandboxed arithmetic formula evaluator",
    long_about = "Evaluates the restricted formula grammar used by embedded \
                  calculator widgets: numbers, named variables, + - * / ^, and parentheses.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a formula with the given variable bindings.
    #[command(alias = "e")]
    Eval(EvalArgs),

    /// Tokenize and convert a formula, printing its postfix form.
    Check(CheckArgs),

    /// Load a widget config file and render its inputs and result.
    Render(RenderArgs),

    /// Print version and platform information.
    Version,
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// The formula to evaluate, e.g. "spend * months".
    #[arg(allow_hyphen_values = true)]
    pub formula: String,

    /// Variable binding as NAME=VALUE (repeatable). Bound names form the
    /// allowed-variable set.
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The formula to check.
    #[arg(allow_hyphen_values = true)]
    pub formula: String,

    /// Allow a variable name without binding a value (repeatable).
    #[arg(long = "allow", value_name = "NAME")]
    pub allow: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to a widget config file (.json or .toml).
    pub config: String,

    /// Override an input value as NAME=VALUE (repeatable). The value is
    /// applied through the widget's text-edit path, so unparseable text
    /// falls back to 0.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
}

/// Split a `NAME=VALUE` argument into its parts.
pub fn split_key_value(raw: &str) -> Option<(&str, &str)> {
    let (name, value) = raw.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, value.trim()))
}
