//! Command-line arguments and the calculation pipeline

use chrono::NaiveDate;
use clap::Parser;
use nutriplan_shared::{calculate, validation::validate_input};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{AppConfig, OutputFormat};
use crate::error::CliError;
use crate::input::load_input;
use crate::render::render_text;

/// NutriPlan - macro targets, meal plans and a behavioral profile from a questionnaire
#[derive(Parser, Debug)]
#[command(name = "nutriplan")]
#[command(version)]
#[command(about = "Calculate a nutrition plan from a questionnaire file", long_about = None)]
pub struct Args {
    /// Questionnaire file (.json or .toml)
    pub input: PathBuf,

    /// Output format (overrides output.format from config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip range checks and pass the questionnaire straight to the engine
    #[arg(long)]
    pub no_validate: bool,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Format after applying the command-line override
    pub fn output_format(&self, config: &AppConfig) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }

    /// Whether validation runs for this invocation
    pub fn validation_enabled(&self, config: &AppConfig) -> bool {
        config.validation.enabled && !self.no_validate
    }
}

/// Load, check, calculate and render one questionnaire
pub fn run(args: &Args, config: &AppConfig, today: NaiveDate) -> Result<String, CliError> {
    let input = load_input(&args.input)?;

    if args.validation_enabled(config) {
        validate_input(&input)?;
    } else {
        debug!("Validation disabled");
    }

    let result = calculate(&input);
    info!(
        calories = result.macros.calories,
        formula = %result.macros.formula_used,
        profile = ?result.profile.kind,
        "Plan calculated"
    );

    let rendered = match args.output_format(config) {
        OutputFormat::Json if config.output.pretty => serde_json::to_string_pretty(&result)?,
        OutputFormat::Json => serde_json::to_string(&result)?,
        OutputFormat::Text => render_text(&input, &result, today),
    };
    Ok(rendered)
}
