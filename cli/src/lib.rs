//! NutriPlan command-line runner
//!
//! Reads a completed questionnaire from a JSON or TOML file, runs the
//! shared calculation engine and prints the result as JSON or as a
//! plain-text summary.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod render;

pub use app::{run, Args};
pub use config::{AppConfig, OutputFormat};
pub use error::CliError;
