use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of the current time, so that "today" and notification expiry can
/// be pinned in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar day used to pick today's workday. This is the UTC date, which
    /// is how the server keys workday records.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Wall clock shown to the user.
    fn local_now(&self) -> DateTime<Local> {
        self.now().with_timezone(&Local)
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
