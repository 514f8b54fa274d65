//! Parse and validate calculator widget configurations (JSON and TOML).
//!
//! Field names are camelCase on the wire because the upstream content
//! generator emits `varName` / `defaultValue` / `resultLabel` JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use lpcalc_expr::MAX_FORMULA_LENGTH;

/// One declared input field of the widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInput {
    /// Display label shown next to the input.
    pub label: String,

    /// Variable name the formula refers to.
    pub var_name: String,

    /// Value the input starts at on mount.
    #[serde(default)]
    pub default_value: f64,
}

/// Full widget configuration: declared inputs, the formula, and the
/// caption for the computed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorConfig {
    pub inputs: Vec<CalculatorInput>,
    pub formula: String,
    pub result_label: String,
}

/// Errors from loading or validating a widget configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("formula is required")]
    FormulaRequired,

    #[error("formula must be {MAX_FORMULA_LENGTH} characters or less (got {0})")]
    FormulaTooLong(usize),

    #[error("at least one input is required")]
    NoInputs,

    #[error("invalid variable name: {0}")]
    InvalidVarName(String),

    #[error("duplicate variable name: {0}")]
    DuplicateVarName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a configuration from a JSON string.
pub fn parse_json(content: &str) -> Result<CalculatorConfig, ConfigError> {
    serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Parse a configuration from a TOML string.
pub fn parse_toml(content: &str) -> Result<CalculatorConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Load a configuration from a file path (auto-detect TOML vs JSON by
/// extension, falling back to trying JSON then TOML).
pub fn load_config(path: &Path) -> Result<CalculatorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => parse_toml(&content)?,
        Some("json") => parse_json(&content)?,
        _ => parse_json(&content).or_else(|_| parse_toml(&content))?,
    };
    validate(&config)?;
    Ok(config)
}

/// Validate a configuration before a widget is built from it.
///
/// The formula must be non-empty and within the length ceiling, and the
/// declared variable names must be well-formed identifiers with no
/// duplicates. The formula's syntax itself is checked lazily on the
/// first recompute.
pub fn validate(config: &CalculatorConfig) -> Result<(), ConfigError> {
    if config.formula.trim().is_empty() {
        return Err(ConfigError::FormulaRequired);
    }
    if config.formula.len() > MAX_FORMULA_LENGTH {
        return Err(ConfigError::FormulaTooLong(config.formula.len()));
    }
    if config.inputs.is_empty() {
        return Err(ConfigError::NoInputs);
    }

    let mut seen = std::collections::HashSet::new();
    for input in &config.inputs {
        if !is_valid_var_name(&input.var_name) {
            return Err(ConfigError::InvalidVarName(input.var_name.clone()));
        }
        if !seen.insert(input.var_name.as_str()) {
            return Err(ConfigError::DuplicateVarName(input.var_name.clone()));
        }
    }
    Ok(())
}

/// A variable name must match the formula grammar's identifier shape:
/// `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> CalculatorConfig {
        CalculatorConfig {
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
        }
    }

    #[test]
    fn parse_json_camel_case() {
        let json = r#"{
            "inputs": [
                {"label": "Monthly spend", "varName": "spend", "defaultValue": 1000},
                {"label": "Months", "varName": "months", "defaultValue": 12}
            ],
            "formula": "spend * months",
            "resultLabel": "Yearly total"
        }"#;
        let config = parse_json(json).unwrap();
        assert_eq!(config.inputs.len(), 2);
        assert_eq!(config.inputs[0].var_name, "spend");
        assert_eq!(config.inputs[0].default_value, 1000.0);
        assert_eq!(config.result_label, "Yearly total");
    }

    #[test]
    fn parse_json_default_value_optional() {
        let json = r#"{
            "inputs": [{"label": "X", "varName": "x"}],
            "formula": "x",
            "resultLabel": "Result"
        }"#;
        let config = parse_json(json).unwrap();
        assert_eq!(config.inputs[0].default_value, 0.0);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
formula = "price * qty"
resultLabel = "Total"

[[inputs]]
label = "Unit price"
varName = "price"
defaultValue = 9.99

[[inputs]]
label = "Quantity"
varName = "qty"
defaultValue = 3
"#;
        let config = parse_toml(toml_str).unwrap();
        assert_eq!(config.formula, "price * qty");
        assert_eq!(config.inputs[1].var_name, "qty");
        assert_eq!(config.inputs[1].default_value, 3.0);
    }

    #[test]
    fn load_config_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roi.json");
        let json = serde_json::to_string(&sample()).unwrap();
        std::fs::write(&path, json).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.formula, "spend * months");
    }

    #[test]
    fn load_config_unknown_extension_tries_json_then_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roi.widget");
        std::fs::write(&path, "formula = \"x\"\nresultLabel = \"R\"\n\n[[inputs]]\nlabel = \"X\"\nvarName = \"x\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.formula, "x");
    }

    #[test]
    fn validate_accepts_sample() {
        assert!(validate(&sample()).is_ok());
    }

    #[test]
    fn validate_rejects_empty_formula() {
        let mut config = sample();
        config.formula = "  ".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::FormulaRequired)
        ));
    }

    #[test]
    fn validate_rejects_over_long_formula() {
        let mut config = sample();
        config.formula = "1+".repeat(MAX_FORMULA_LENGTH);
        assert!(matches!(
            validate(&config),
            Err(ConfigError::FormulaTooLong(_))
        ));
    }

    #[test]
    fn validate_rejects_no_inputs() {
        let mut config = sample();
        config.inputs.clear();
        assert!(matches!(validate(&config), Err(ConfigError::NoInputs)));
    }

    #[test]
    fn validate_rejects_bad_var_name() {
        let mut config = sample();
        config.inputs[0].var_name = "2fast".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidVarName(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_var_name() {
        let mut config = sample();
        config.inputs[1].var_name = "spend".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::DuplicateVarName(_))
        ));
    }
}
