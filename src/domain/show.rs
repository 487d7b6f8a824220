use serde::Deserialize;

use crate::domain::plan::ChangeAction;

/// Document written by `terraform show -json <planfile>`. Only the resource
/// changes are read.
#[derive(Debug, Default, Deserialize)]
pub struct ShowDocument {
    #[serde(default)]
    pub resource_changes: Vec<ResourceChange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceChange {
    pub address: String,
    pub change: ResourceChangeDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceChangeDetail {
    pub actions: Vec<String>,
}

impl ShowDocument {
    pub fn from_slice(document: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(document)
    }
}

impl ResourceChange {
    pub fn action(&self) -> Option<ChangeAction> {
        ChangeAction::from_actions(&self.change.actions)
    }
}

impl ChangeAction {
    /// Classifies an `actions` list. A replacement shows up as a delete and a
    /// create in either order; `["no-op"]`, `["read"]` and the rest are not
    /// tracked.
    pub fn from_actions(actions: &[String]) -> Option<Self> {
        let actions = actions.iter().map(String::as_str).collect::<Vec<_>>();
        match actions.as_slice() {
            ["create"] => Some(ChangeAction::Create),
            ["update"] => Some(ChangeAction::Update),
            ["delete"] => Some(ChangeAction::Delete),
            ["delete", "create"] | ["create", "delete"] => Some(ChangeAction::Replace),
            _ => None,
        }
    }
}
