use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::config::{AppConfig, DEFAULT_TIMEOUT_SECS, PlanFormat};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::summary::{SummaryWorkflowOutcome, publish_plan_summary};

#[derive(Args, Debug, Clone)]
pub struct CommentArgs {
    /// File holding the output of `terraform plan -json` (or
    /// `terraform show -json` with `--format show`).
    pub plan_file: PathBuf,
    /// Pull request comments URL (`github.event.pull_request.comments_url`).
    pub comments_url: String,
    /// Token used to authenticate against the GitHub API.
    #[arg(env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
    /// Appended to the summary header, e.g. the var file the plan ran with.
    pub var_file_label: Option<String>,
    /// Shape of the plan file.
    #[arg(long, value_enum, default_value_t = PlanFormat::Stream)]
    pub format: PlanFormat,
    /// Seconds to wait for GitHub before giving up.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
    /// Also write the rendered summary to this file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Print the summary without posting it.
    #[arg(long)]
    pub dry_run: bool,
}

impl CommentArgs {
    pub fn into_config(self) -> AppResult<AppConfig> {
        AppConfig::new(
            self.plan_file,
            self.comments_url,
            self.github_token.unwrap_or_default(),
            self.var_file_label,
            self.timeout,
            self.output,
            self.dry_run,
        )
        .map(|config| config.with_plan_format(self.format))
    }
}

pub async fn run(ctx: &AppContext) -> AppResult<SummaryWorkflowOutcome> {
    publish_plan_summary(ctx, &mut io::stdout()).await
}
