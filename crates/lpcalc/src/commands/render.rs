//! `lpcalc render` -- load a widget config and print its state.

use std::path::Path;

use anyhow::{bail, Context, Result};

use lpcalc_widget::{load_config, CalculatorWidget};

use crate::cli::{split_key_value, RenderArgs};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

/// Execute the `lpcalc render` command.
///
/// Loads and validates the config, mounts a widget (inputs at their
/// defaults), applies any `--set` overrides through the text-edit path,
/// and prints the inputs plus the result panel. An unevaluable formula
/// renders the placeholder rather than failing, matching the widget's
/// display policy.
pub fn run(ctx: &RuntimeContext, args: &RenderArgs) -> Result<()> {
    let path = Path::new(&args.config);
    let config = load_config(path)
        .with_context(|| format!("failed to load widget config: {}", path.display()))?;

    let mut widget = CalculatorWidget::new(config);

    for raw in &args.set {
        let Some((name, value)) = split_key_value(raw) else {
            bail!("invalid --set '{}': expected NAME=VALUE", raw);
        };
        if !widget.set_input(name, value) {
            bail!("no input named '{}' in this widget", name);
        }
    }

    if ctx.json {
        let inputs: Vec<serde_json::Value> = widget
            .config()
            .inputs
            .iter()
            .map(|input| {
                serde_json::json!({
                    "label": input.label,
                    "varName": input.var_name,
                    "value": widget.value(&input.var_name),
                })
            })
            .collect();
        output_json(&serde_json::json!({
            "inputs": inputs,
            "resultLabel": widget.config().result_label,
            "result": widget.recompute(),
            "display": widget.display(),
        }));
        return Ok(());
    }

    let headers = &["INPUT", "VAR", "VALUE"];
    let rows: Vec<Vec<String>> = widget
        .config()
        .inputs
        .iter()
        .map(|input| {
            vec![
                input.label.clone(),
                input.var_name.clone(),
                widget
                    .value(&input.var_name)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect();
    output_table(headers, &rows);

    println!();
    println!("{}: {}", widget.config().result_label, widget.display());

    Ok(())
}
