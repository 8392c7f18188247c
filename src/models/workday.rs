use super::serde_helpers::{calendar_day, millis_or_zero, null_as_empty, string_or_number};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A break inside a workday. `end` is absent while the break is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl Break {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// Server record of one calendar day of work for the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workday {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "calendar_day")]
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Milliseconds
    #[serde(default, deserialize_with = "millis_or_zero")]
    pub total_work_time: i64,
    /// Milliseconds
    #[serde(default, deserialize_with = "millis_or_zero")]
    pub total_break_time: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub breaks: Vec<Break>,
}

impl Workday {
    /// The day has been started and not yet ended.
    pub fn is_working(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_none()
    }

    /// Some break of the day is still open.
    pub fn is_on_break(&self) -> bool {
        self.breaks.iter().any(Break::is_open)
    }
}

/// One page of the workday history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdayPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Workday>,
    #[serde(default)]
    pub total: u64,
}
