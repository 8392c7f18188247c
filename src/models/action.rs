use super::serde_helpers::{message_text, truthy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four mutating actions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionKind {
    StartDay,
    StartBreak,
    EndBreak,
    EndDay,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::StartDay,
        ActionKind::StartBreak,
        ActionKind::EndBreak,
        ActionKind::EndDay,
    ];

    /// Endpoint receiving the no-body POST.
    pub fn path(&self) -> &'static str {
        match self {
            ActionKind::StartDay => "/time/start",
            ActionKind::StartBreak => "/time/break/start",
            ActionKind::EndBreak => "/time/break/end",
            ActionKind::EndDay => "/time/end",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::StartDay => "Start Day",
            ActionKind::StartBreak => "Start Break",
            ActionKind::EndBreak => "End Break",
            ActionKind::EndDay => "End Day",
        }
    }

    /// Helper: convert a typed command into an action
    pub fn from_command(cmd: &str) -> Option<Self> {
        match cmd.to_lowercase().as_str() {
            "start" | "start-day" => Some(ActionKind::StartDay),
            "break" | "break-start" | "pause" => Some(ActionKind::StartBreak),
            "resume" | "break-end" => Some(ActionKind::EndBreak),
            "end" | "end-day" | "stop" => Some(ActionKind::EndDay),
            _ => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of an action response. `error` is an application-level flag,
/// independent from the HTTP status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub error: bool,
    #[serde(default, deserialize_with = "message_text")]
    pub message: Option<String>,
}
