use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Pending,
    Completed,
    Failed,
}

impl ResponseStatus {
    pub fn label(self) -> &'static str {
        match self {
            ResponseStatus::Pending => "pending",
            ResponseStatus::Completed => "completed",
            ResponseStatus::Failed => "failed",
        }
    }
}

/// One automated or analyst-triggered containment step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseAction {
    pub action: String,
    pub target: String,
    /// Wall-clock time of day, `HH:MM:SS`.
    pub timestamp: String,
    pub status: ResponseStatus,
    pub description: String,
}

/// Containment actions offered on the incident detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    IsolateHost,
    BlockAddress,
    DisableAccount,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 3] = [
        ResponseKind::IsolateHost,
        ResponseKind::BlockAddress,
        ResponseKind::DisableAccount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResponseKind::IsolateHost => "Isolate Host",
            ResponseKind::BlockAddress => "Block IP Address",
            ResponseKind::DisableAccount => "Disable User Account",
        }
    }

    pub fn action(self, target: &str, timestamp: String) -> ResponseAction {
        let (action, description) = match self {
            ResponseKind::IsolateHost => ("Host Isolated", "Host isolated from network"),
            ResponseKind::BlockAddress => ("IP Address Blocked", "Address blocked at perimeter"),
            ResponseKind::DisableAccount => {
                ("User Account Disabled", "Account temporarily disabled")
            }
        };
        ResponseAction {
            action: action.into(),
            target: target.to_string(),
            timestamp,
            status: ResponseStatus::Pending,
            description: description.into(),
        }
    }
}
