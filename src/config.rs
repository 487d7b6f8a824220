use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::error::{AppError, AppResult};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shape of the plan file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// `terraform plan -json`: one event per line.
    #[default]
    Stream,
    /// `terraform show -json <planfile>`: a single document.
    Show,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub plan_file: PathBuf,
    pub plan_format: PlanFormat,
    pub comments_url: String,
    pub github_token: String,
    pub var_file_label: Option<String>,
    pub timeout: Duration,
    pub output_file: Option<PathBuf>,
    pub dry_run: bool,
}

impl AppConfig {
    pub fn new(
        plan_file: PathBuf,
        comments_url: String,
        github_token: String,
        var_file_label: Option<String>,
        timeout_secs: u64,
        output_file: Option<PathBuf>,
        dry_run: bool,
    ) -> AppResult<Self> {
        let github_token = github_token.trim().to_string();
        if github_token.is_empty() && !dry_run {
            return Err(AppError::Configuration(
                "GitHub token must not be empty".to_string(),
            ));
        }
        if timeout_secs == 0 {
            return Err(AppError::Configuration(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            plan_file,
            plan_format: PlanFormat::default(),
            comments_url: comments_url.trim().to_string(),
            github_token,
            var_file_label: var_file_label.filter(|label| !label.is_empty()),
            timeout: Duration::from_secs(timeout_secs),
            output_file,
            dry_run,
        })
    }

    pub fn with_plan_format(mut self, plan_format: PlanFormat) -> Self {
        self.plan_format = plan_format;
        self
    }
}
