//! Current-status derivation from today's workday.

use crate::models::action::ActionKind;
use crate::models::workday::Workday;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodayStatus {
    pub working: bool,
    pub on_break: bool,
}

/// One of the four status buttons, as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub kind: ActionKind,
    pub label: &'static str,
    pub enabled: bool,
    pub in_flight: bool,
}

impl TodayStatus {
    /// No workday for today means "not started".
    pub fn from_workday(today: Option<&Workday>) -> Self {
        match today {
            Some(wd) => Self {
                working: wd.is_working(),
                on_break: wd.is_on_break(),
            },
            None => Self::default(),
        }
    }

    pub fn describe(&self) -> &'static str {
        if self.on_break {
            "on break"
        } else if self.working {
            "working"
        } else {
            "not working"
        }
    }

    pub fn is_available(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::StartDay => !self.working,
            ActionKind::StartBreak => self.working && !self.on_break,
            ActionKind::EndBreak => self.on_break,
            ActionKind::EndDay => self.working,
        }
    }

    pub fn label(&self, kind: ActionKind) -> &'static str {
        match kind {
            ActionKind::StartDay if self.working => "Day Started",
            ActionKind::StartBreak if self.on_break => "On Break",
            other => other.label(),
        }
    }

    /// Buttons in display order. An action with a request outstanding is
    /// disabled regardless of the snapshot.
    pub fn buttons(&self, in_flight: &HashSet<ActionKind>) -> Vec<ButtonState> {
        ActionKind::ALL
            .iter()
            .map(|&kind| {
                let busy = in_flight.contains(&kind);
                ButtonState {
                    kind,
                    label: self.label(kind),
                    enabled: self.is_available(kind) && !busy,
                    in_flight: busy,
                }
            })
            .collect()
    }
}
