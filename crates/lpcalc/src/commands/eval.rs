//! `lpcalc eval` -- evaluate a formula with variable bindings.

use std::collections::{HashMap, HashSet};

use anyhow::{bail, Result};

use crate::cli::{split_key_value, EvalArgs};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `lpcalc eval` command.
pub fn run(ctx: &RuntimeContext, args: &EvalArgs) -> Result<()> {
    let mut bindings: HashMap<String, f64> = HashMap::new();
    for raw in &args.vars {
        let Some((name, value)) = split_key_value(raw) else {
            bail!("invalid --var '{}': expected NAME=VALUE", raw);
        };
        let value: f64 = value
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid --var '{}': '{}' is not a number", name, value))?;
        bindings.insert(name.to_string(), value);
    }
    let allowed: HashSet<String> = bindings.keys().cloned().collect();

    let result = lpcalc_expr::evaluate(&args.formula, &allowed, &bindings)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "formula": args.formula,
            "result": result,
        }));
    } else {
        println!("{}", result);
    }

    Ok(())
}
