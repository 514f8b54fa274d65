//! Calculator widget integration layer.
//!
//! The evaluator itself lives in `lpcalc-expr`; this crate supplies what
//! a hosting page needs around it: the serde configuration model emitted
//! by the content generator, validation of that configuration, and the
//! stateful widget model (default values, input edits, recompute-on-change
//! with the documented silent-failure display policy).

pub mod config;
pub mod widget;

pub use config::{
    load_config, parse_json, parse_toml, CalculatorConfig, CalculatorInput, ConfigError,
};
pub use widget::CalculatorWidget;
