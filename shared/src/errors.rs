//! Error types for the NutriPlan engine
//!
//! The calculation itself never fails. These errors cover the string/JSON
//! boundary (WASM and CLI callers) and the optional caller-side validation.

use std::fmt;
use thiserror::Error;

use crate::validation::get_field_display_label;

/// Errors raised while decoding input or encoding results
#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown {field} option: {value}")]
    UnknownOption { field: &'static str, value: String },
}

impl ComputeError {
    pub fn unknown_option(field: &'static str, value: &str) -> Self {
        Self::UnknownOption {
            field,
            value: value.to_string(),
        }
    }
}

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

/// Input rejected by caller-side validation
#[derive(Error, Debug)]
#[error("Dados inválidos: {}", join_messages(.0))]
pub struct InputError(pub Vec<ValidationError>);

impl InputError {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::user_message)
        .collect::<Vec<_>>()
        .join("; ")
}
