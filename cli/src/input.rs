//! Questionnaire file loading
//!
//! Files use the same field names as the browser form, in JSON or TOML.

use nutriplan_shared::UserInput;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::CliError;

/// Supported questionnaire encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(InputFormat::Json),
            "toml" => Ok(InputFormat::Toml),
            _ => Err(CliError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Decode a questionnaire from text
pub fn parse_input(contents: &str, format: InputFormat) -> Result<UserInput, CliError> {
    let input = match format {
        InputFormat::Json => serde_json::from_str(contents)?,
        InputFormat::Toml => toml::from_str(contents)?,
    };
    Ok(input)
}

/// Read and decode a questionnaire file
pub fn load_input(path: &Path) -> Result<UserInput, CliError> {
    let format = InputFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), ?format, "Loaded questionnaire");
    parse_input(&contents, format)
}
