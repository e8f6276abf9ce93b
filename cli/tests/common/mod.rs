//! Common test utilities for integration tests
//!
//! Questionnaire files are written to a temporary directory that lives
//! as long as the returned [`TestRun`].

#![allow(dead_code)]

use chrono::NaiveDate;
use clap::Parser;
use nutriplan_cli::{config::AppConfig, run, Args, CliError};
use std::path::PathBuf;
use tempfile::TempDir;

/// A questionnaire on disk plus the config used to run it
pub struct TestRun {
    pub dir: TempDir,
    pub path: PathBuf,
    pub config: AppConfig,
}

impl TestRun {
    /// Write `contents` to `questionnaire.<extension>`
    pub fn new(extension: &str, contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(format!("questionnaire.{extension}"));
        std::fs::write(&path, contents).expect("Failed to write questionnaire");

        Self {
            dir,
            path,
            config: AppConfig::default(),
        }
    }

    pub fn json(contents: &str) -> Self {
        Self::new("json", contents)
    }

    pub fn toml(contents: &str) -> Self {
        Self::new("toml", contents)
    }

    /// Run with extra flags placed before the input path
    pub fn run_with(&self, flags: &[&str]) -> Result<String, CliError> {
        let path = self.path.to_string_lossy().into_owned();
        let mut argv = vec!["nutriplan"];
        argv.extend_from_slice(flags);
        argv.push(&path);

        let args = Args::try_parse_from(argv).expect("Failed to parse arguments");
        run(&args, &self.config, test_date())
    }

    pub fn run(&self) -> Result<String, CliError> {
        self.run_with(&[])
    }
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).expect("valid date")
}

/// Questionnaire matching the reference scenario, as JSON
pub fn reference_json(name: &str) -> String {
    format!(
        r#"{{
            "name": "{name}",
            "gender": "male",
            "age": 30,
            "height": 175,
            "weight": 80,
            "targetWeight": 70,
            "weeklyRate": 0.5,
            "activityLevel": "moderately_active",
            "goal": "lose_weight",
            "trainingTime": "45_60",
            "discipline": "medium",
            "dietHistory": "3_5"
        }}"#
    )
}
