//! Start/end day and break actions.
//!
//! An action is a no-body POST followed by a full reload of the current
//! page; the screen only ever shows what the server reports. Each action
//! has an in-flight flag that keeps its button disabled until the reload
//! after the request has resolved.

use crate::api::ApiOutcome;
use crate::core::dashboard::{Dashboard, Flow};
use crate::models::action::{ActionKind, ActionResponse};
use tracing::{debug, info};

pub const ACTION_SUCCESS: &str = "Action Success";
pub const ACTION_FAILED: &str = "Action failed";

/// Why a dispatch was refused before any request was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The button is disabled for today's status.
    Unavailable,
    /// The same action is still waiting for its response or reload.
    InFlight,
}

/// Proof that an action was accepted and marked in flight.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct ActionTicket {
    kind: ActionKind,
}

impl ActionTicket {
    pub fn kind(&self) -> ActionKind {
        self.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Rejected(Rejection),
    Completed(Flow),
}

impl Dispatch {
    pub fn flow(self) -> Flow {
        match self {
            Dispatch::Completed(flow) => flow,
            Dispatch::Rejected(_) => Flow::Continue,
        }
    }
}

impl<'a> Dashboard<'a> {
    /// Accept an action if its button is enabled and mark it in flight.
    pub fn begin_action(&mut self, kind: ActionKind) -> Result<ActionTicket, Rejection> {
        if self.in_flight.contains(&kind) {
            debug!(action = %kind, "already in flight");
            return Err(Rejection::InFlight);
        }
        if !self.status().is_available(kind) {
            debug!(action = %kind, "not available for today's status");
            return Err(Rejection::Unavailable);
        }
        self.in_flight.insert(kind);
        Ok(ActionTicket { kind })
    }

    /// Send the request for an accepted action.
    pub fn send_action(&self, ticket: &ActionTicket) -> ApiOutcome<ActionResponse> {
        self.api.action(ticket.kind)
    }

    /// Report the outcome, reload, then release the in-flight flag.
    pub fn finish_action(&mut self, ticket: ActionTicket, outcome: ApiOutcome<ActionResponse>) -> Flow {
        let now = self.clock.now();
        let kind = ticket.kind;

        match outcome {
            ApiOutcome::Success(resp) if resp.error => {
                let message = resp.message.unwrap_or_else(|| ACTION_FAILED.to_string());
                info!(action = %kind, %message, "action refused by server");
                self.notifications.error(message, now);
            }
            ApiOutcome::Success(_) => {
                info!(action = %kind, "action succeeded");
                self.notifications.success(ACTION_SUCCESS, now);
            }
            ApiOutcome::Failed(f) => {
                // Non-2xx bodies may still carry a message; prefer it.
                let message = f.server_message().unwrap_or_else(|| ACTION_FAILED.to_string());
                info!(action = %kind, reason = %f.reason, "action failed");
                self.notifications.error(message, now);
            }
            ApiOutcome::Unauthorized => {
                self.in_flight.remove(&kind);
                return Flow::RedirectToLogin;
            }
        }

        let flow = self.reload();
        self.in_flight.remove(&kind);
        flow
    }

    /// begin + send + finish in one step.
    #[tracing::instrument(skip(self))]
    pub fn dispatch(&mut self, kind: ActionKind) -> Dispatch {
        let ticket = match self.begin_action(kind) {
            Ok(t) => t,
            Err(r) => return Dispatch::Rejected(r),
        };
        let outcome = self.send_action(&ticket);
        Dispatch::Completed(self.finish_action(ticket, outcome))
    }

    pub fn is_in_flight(&self, kind: ActionKind) -> bool {
        self.in_flight.contains(&kind)
    }
}
