mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;
use log::warn;

use crate::cmd::comment::{self, CommentArgs};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::github::GitHubCommentClient;

#[derive(Parser)]
#[command(
    name = "plan-comment",
    author,
    version,
    about = "Summarize `terraform plan -json` output and post it to a pull request"
)]
struct Cli {
    #[command(flatten)]
    args: CommentArgs,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.args.into_config()?;

    let publisher = Arc::new(GitHubCommentClient::new(
        config.comments_url.clone(),
        config.github_token.clone(),
        config.timeout,
    )?);
    let context = AppContext::new(config, publisher);

    let outcome = comment::run(&context).await?;

    if let Some(receipt) = &outcome.receipt {
        println!("{receipt}");
        if !receipt.is_success() {
            warn!("Summary was not posted; GitHub answered {}", receipt.status);
        }
    }

    Ok(())
}
