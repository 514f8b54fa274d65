//! Stateful widget model: current input values and recompute-on-change.

use std::collections::{HashMap, HashSet};

use lpcalc_expr::evaluate;

use crate::config::CalculatorConfig;

/// A mounted calculator widget: the configuration plus the current value
/// of each declared input.
///
/// The evaluation pipeline itself is pure; all mutable state lives here,
/// in the host's ephemeral UI layer. Errors from a recompute are logged
/// for developers and swallowed -- the display falls back to a neutral
/// placeholder instead of surfacing a message to the page visitor.
#[derive(Debug, Clone)]
pub struct CalculatorWidget {
    config: CalculatorConfig,
    values: HashMap<String, f64>,
}

/// Placeholder shown when no result is available.
const PLACEHOLDER: &str = "-";

impl CalculatorWidget {
    /// Mount a widget: every declared input starts at its default value.
    pub fn new(config: CalculatorConfig) -> Self {
        let values = config
            .inputs
            .iter()
            .map(|input| (input.var_name.clone(), input.default_value))
            .collect();
        Self { config, values }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The declared variable names, used as the tokenizer allow-list.
    pub fn allowed_names(&self) -> HashSet<String> {
        self.config
            .inputs
            .iter()
            .map(|input| input.var_name.clone())
            .collect()
    }

    /// Current value of an input, if the name is declared.
    pub fn value(&self, var_name: &str) -> Option<f64> {
        self.values.get(var_name).copied()
    }

    /// Apply a raw text edit to an input. Text that does not parse as a
    /// finite number falls back to `0`. Returns `false` for undeclared
    /// names, leaving state untouched.
    pub fn set_input(&mut self, var_name: &str, raw: &str) -> bool {
        let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        self.set_value(var_name, value.unwrap_or(0.0))
    }

    /// Set an input to a numeric value directly. Returns `false` for
    /// undeclared names.
    pub fn set_value(&mut self, var_name: &str, value: f64) -> bool {
        match self.values.get_mut(var_name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Re-run the pipeline with the current input values.
    ///
    /// On success the result is rounded to 2 decimal places. On any
    /// evaluation error a diagnostic is logged and `None` is returned;
    /// the error is deliberately not surfaced to the page visitor.
    pub fn recompute(&self) -> Option<f64> {
        match evaluate(&self.config.formula, &self.allowed_names(), &self.values) {
            Ok(result) => Some((result * 100.0).round() / 100.0),
            Err(err) => {
                tracing::warn!(formula = %self.config.formula, error = %err, "calculation failed");
                None
            }
        }
    }

    /// The display string for the result area: the rounded value, or the
    /// placeholder when the formula cannot be evaluated.
    pub fn display(&self) -> String {
        match self.recompute() {
            Some(result) => format_result(result),
            None => PLACEHOLDER.to_string(),
        }
    }
}

/// Format a rounded result, trimming a trailing `.00` / `.50`-style zero
/// tail so `14.00` renders as `14` and `2.50` as `2.5`.
fn format_result(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::{CalculatorConfig, CalculatorInput};

    fn roi_widget() -> CalculatorWidget {
        CalculatorWidget::new(CalculatorConfig {
            inputs: vec![
                CalculatorInput {
                    label: "Monthly spend".to_string(),
                    var_name: "spend".to_string(),
                    default_value: 1000.0,
                },
                CalculatorInput {
                    label: "Months".to_string(),
                    var_name: "months".to_string(),
                    default_value: 12.0,
                },
            ],
            formula: "spend * months".to_string(),
            result_label: "Yearly total".to_string(),
        })
    }

    #[test]
    fn mounts_with_defaults() {
        let widget = roi_widget();
        assert_eq!(widget.value("spend"), Some(1000.0));
        assert_eq!(widget.value("months"), Some(12.0));
        assert_eq!(widget.recompute(), Some(12000.0));
    }

    #[test]
    fn edit_triggers_new_result() {
        let mut widget = roi_widget();
        assert!(widget.set_input("months", "6"));
        assert_eq!(widget.recompute(), Some(6000.0));
    }

    #[test]
    fn unparseable_edit_falls_back_to_zero() {
        let mut widget = roi_widget();
        assert!(widget.set_input("months", "abc"));
        assert_eq!(widget.value("months"), Some(0.0));
        assert_eq!(widget.recompute(), Some(0.0));
    }

    #[test]
    fn undeclared_input_rejected() {
        let mut widget = roi_widget();
        assert!(!widget.set_input("rate", "5"));
        assert!(!widget.set_value("rate", 5.0));
        assert_eq!(widget.value("rate"), None);
    }

    #[test]
    fn result_rounded_to_two_decimals() {
        let mut widget = roi_widget();
        widget.set_value("spend", 10.0);
        widget.set_value("months", 1.0 / 3.0);
        assert_eq!(widget.recompute(), Some(3.33));
    }

    #[test]
    fn error_swallowed_into_placeholder() {
        let widget = CalculatorWidget::new(CalculatorConfig {
            inputs: vec![CalculatorInput {
                label: "X".to_string(),
                var_name: "x".to_string(),
                default_value: 0.0,
            }],
            formula: "1 / x".to_string(),
            result_label: "Inverse".to_string(),
        });
        // Division by zero: no message, no panic, just the placeholder.
        assert_eq!(widget.recompute(), None);
        assert_eq!(widget.display(), "-");
    }

    #[test]
    fn bad_formula_swallowed_too() {
        let widget = CalculatorWidget::new(CalculatorConfig {
            inputs: vec![CalculatorInput {
                label: "X".to_string(),
                var_name: "x".to_string(),
                default_value: 1.0,
            }],
            formula: "x + unknown_var".to_string(),
            result_label: "Result".to_string(),
        });
        assert_eq!(widget.recompute(), None);
        assert_eq!(widget.display(), "-");
    }

    #[test]
    fn display_trims_zero_tail() {
        let widget = roi_widget();
        assert_eq!(widget.display(), "12000");

        let mut widget = roi_widget();
        widget.set_value("spend", 0.25);
        widget.set_value("months", 10.0);
        assert_eq!(widget.display(), "2.5");
    }
}
