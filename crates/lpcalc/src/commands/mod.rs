//! Command handlers for the `lpcalc` CLI.

pub mod check;
pub mod eval;
pub mod render;
pub mod version;
