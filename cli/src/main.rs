//! NutriPlan CLI
//!
//! Calculates a nutrition plan from a questionnaire file. Logs go to
//! stderr so stdout carries only the result.

use anyhow::Result;
use clap::Parser;
use nutriplan_cli::{config::AppConfig, run, Args, CliError};
use std::fs;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        input = %args.input.display(),
        "Starting NutriPlan"
    );

    let today = chrono::Local::now().date_naive();
    let output = run(&args, &config, today)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "Result written");
        }
        None => println!("{output}"),
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "nutriplan_cli=info,nutriplan_shared=info".into()
        } else {
            "nutriplan_cli=debug,nutriplan_shared=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
