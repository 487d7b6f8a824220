use serde::Deserialize;

pub const CHANGE_SUMMARY: &str = "change_summary";
pub const RESOURCE_DRIFT: &str = "resource_drift";

/// One line of `terraform plan -json` output.
///
/// The stream mixes several event shapes, so every field is optional and
/// anything not listed here is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanEvent {
    #[serde(rename = "@message")]
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub change: Option<PlannedChange>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlannedChange {
    pub action: Option<String>,
    pub resource: Option<ResourceRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceRef {
    pub addr: Option<String>,
}

impl PlanEvent {
    pub fn from_slice(line: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(line)
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    pub fn is_drift(&self) -> bool {
        self.kind() == RESOURCE_DRIFT
    }

    pub fn is_change_summary(&self) -> bool {
        self.kind() == CHANGE_SUMMARY
    }

    /// The tracked action of this event, if it carries one.
    pub fn action(&self) -> Option<ChangeAction> {
        self.change
            .as_ref()
            .and_then(|change| change.action.as_deref())
            .and_then(ChangeAction::from_str)
    }

    pub fn resource_addr(&self) -> &str {
        self.change
            .as_ref()
            .and_then(|change| change.resource.as_ref())
            .and_then(|resource| resource.addr.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Create,
    Update,
    Replace,
    Delete,
}

impl ChangeAction {
    /// Report order.
    pub const ALL: [ChangeAction; 4] = [
        ChangeAction::Create,
        ChangeAction::Update,
        ChangeAction::Replace,
        ChangeAction::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Create => "create",
            ChangeAction::Update => "update",
            ChangeAction::Replace => "replace",
            ChangeAction::Delete => "delete",
        }
    }

    /// Matches the planner's action names exactly; `no-op`, `read` and
    /// friends are not tracked.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "create" => Some(ChangeAction::Create),
            "update" => Some(ChangeAction::Update),
            "replace" => Some(ChangeAction::Replace),
            "delete" => Some(ChangeAction::Delete),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeAction::Create => "🛠️ Created",
            ChangeAction::Update => "🔀 Updated",
            ChangeAction::Replace => "♻️ Replaced",
            ChangeAction::Delete => "❌ Deleted",
        }
    }
}
