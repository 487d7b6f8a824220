use std::fs;
use std::io::Write;
use std::path::Path;

use log::{info, warn};

use crate::config::PlanFormat;
use crate::context::AppContext;
use crate::domain::comment::PublishReceipt;
use crate::domain::summary::PlanSummary;
use crate::error::AppResult;
use crate::infra::plan_file::{PlanStreamReader, read_show_document};

#[derive(Debug)]
pub struct SummaryWorkflowOutcome {
    /// `None` when publishing was skipped.
    pub receipt: Option<PublishReceipt>,
}

/// Builds the summary of a plan file. Stream files are folded event by event
/// and stop at the first unreadable line.
pub fn summarize_plan(
    plan_file: &Path,
    format: PlanFormat,
    label: Option<String>,
) -> AppResult<PlanSummary> {
    info!("Parsing: {}", plan_file.display());
    let summary = match format {
        PlanFormat::Stream => {
            let summary = PlanStreamReader::open(plan_file)?
                .try_fold(PlanSummary::new(label), |summary, event| {
                    AppResult::Ok(summary.apply(event?))
                })?;
            if summary.header().is_none() {
                warn!("No change_summary event in {}", plan_file.display());
            }
            summary
        }
        PlanFormat::Show => {
            let document = read_show_document(plan_file)?;
            PlanSummary::from_resource_changes(label, document.resource_changes)
        }
    };

    if summary.buckets().is_empty() {
        info!("Plan contains no resource changes");
    }
    Ok(summary)
}

/// Renders the plan summary, echoes it to `out`, then posts it.
///
/// The summary is fully built before anything is sent, so a bad plan file
/// never results in a comment.
pub async fn publish_plan_summary(
    ctx: &AppContext,
    out: &mut impl Write,
) -> AppResult<SummaryWorkflowOutcome> {
    let config = &ctx.config;
    let summary = summarize_plan(
        &config.plan_file,
        config.plan_format,
        config.var_file_label.clone(),
    )?
    .render();

    writeln!(out, "Summary: \n{summary}")?;
    out.flush()?;

    if let Some(path) = &config.output_file {
        info!("Writing summary to file: {}", path.display());
        fs::write(path, &summary)?;
    }

    if config.dry_run {
        info!("Dry run; not posting the summary");
        return Ok(SummaryWorkflowOutcome { receipt: None });
    }

    let receipt = ctx.publisher.publish(&summary).await?;

    Ok(SummaryWorkflowOutcome {
        receipt: Some(receipt),
    })
}
