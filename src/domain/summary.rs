use log::{debug, trace};

use crate::domain::plan::{ChangeAction, PlanEvent};
use crate::domain::show::ResourceChange;

/// Resource addresses grouped by change action, in the order they were seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeBuckets {
    pub create: Vec<String>,
    pub update: Vec<String>,
    pub replace: Vec<String>,
    pub delete: Vec<String>,
}

impl ChangeBuckets {
    pub fn get(&self, action: ChangeAction) -> &[String] {
        match action {
            ChangeAction::Create => &self.create,
            ChangeAction::Update => &self.update,
            ChangeAction::Replace => &self.replace,
            ChangeAction::Delete => &self.delete,
        }
    }

    pub fn push(mut self, action: ChangeAction, addr: String) -> Self {
        match action {
            ChangeAction::Create => self.create.push(addr),
            ChangeAction::Update => self.update.push(addr),
            ChangeAction::Replace => self.replace.push(addr),
            ChangeAction::Delete => self.delete.push(addr),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        ChangeAction::ALL
            .iter()
            .all(|action| self.get(*action).is_empty())
    }
}

/// Accumulated view of a plan: the summary header and the changes.
///
/// Built by folding stream events through [`PlanSummary::apply`] (or a show
/// document through [`PlanSummary::from_resource_changes`]), then turned into
/// comment text with [`PlanSummary::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSummary {
    label: Option<String>,
    header: Option<String>,
    buckets: ChangeBuckets,
}

impl PlanSummary {
    /// Empty summary. A non-empty `label` (usually the var file the plan was
    /// run with) is appended to the header line.
    pub fn new(label: Option<String>) -> Self {
        Self {
            label: label.filter(|label| !label.is_empty()),
            ..Self::default()
        }
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn buckets(&self) -> &ChangeBuckets {
        &self.buckets
    }

    pub fn apply(self, event: PlanEvent) -> Self {
        if event.is_drift() {
            return self;
        }

        let mut next = self;
        if event.is_change_summary() {
            next.header = Some(next.header_line(event.message()));
        }
        if let Some(action) = event.action() {
            let addr = event.resource_addr().to_string();
            trace!("{} {addr}", action.as_str());
            next.buckets = next.buckets.push(action, addr);
        }
        next
    }

    /// Summary of a `terraform show -json` document. The document carries no
    /// summary message, so the header counts the changes instead.
    pub fn from_resource_changes(label: Option<String>, changes: Vec<ResourceChange>) -> Self {
        let mut summary = changes
            .into_iter()
            .fold(Self::new(label), Self::apply_resource_change);

        let buckets = &summary.buckets;
        let counts = format!(
            "{} to create, {} to update, {} to replace, {} to destroy",
            buckets.create.len(),
            buckets.update.len(),
            buckets.replace.len(),
            buckets.delete.len()
        );
        summary.header = Some(summary.header_line(&counts));
        summary
    }

    pub fn apply_resource_change(self, change: ResourceChange) -> Self {
        let Some(action) = change.action() else {
            return self;
        };
        trace!("{} {}", action.as_str(), change.address);

        let mut next = self;
        next.buckets = next.buckets.push(action, change.address);
        next
    }

    fn header_line(&self, message: &str) -> String {
        match &self.label {
            Some(label) => format!("👉 {message} ({label})\n"),
            None => format!("👉 {message}\n"),
        }
    }

    pub fn render(&self) -> String {
        let mut output = self.header.clone().unwrap_or_default();

        for action in ChangeAction::ALL {
            let items = self.buckets.get(action);
            if items.is_empty() {
                debug!("No items for '{}' to append to summary", action.label());
                continue;
            }

            debug!(
                "Appending {} items for '{}' to summary",
                items.len(),
                action.label()
            );
            output.push_str(&format!("\n**{}**:\n", action.label()));
            for item in items {
                output.push_str(item);
                output.push('\n');
            }
        }

        output
    }
}
