#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use rtimetracker::api::{ApiRequest, RawResponse, Transport, TransportError};
use rtimetracker::storage::TokenStore;
use rtimetracker::utils::clock::Clock;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimetracker")
}

/// Binary with its configuration directory redirected to `home`.
pub fn rti_in(home: &Path) -> Command {
    let mut cmd = rti();
    cmd.env("RTIMETRACKER_HOME", home)
        .env_remove("RTIMETRACKER_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<RawResponse, TransportError>>,
    requests: Vec<ApiRequest>,
}

/// Transport answering from a script and recording every request.
/// Clones share the same script.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Rc<RefCell<Script>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn respond_json(&self, status: u16, body: Value) -> &Self {
        self.respond(status, body.to_string())
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Err(TransportError::Send(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }

    /// `METHOD target` of every request sent so far.
    pub fn calls(&self) -> Vec<String> {
        self.inner
            .borrow()
            .requests
            .iter()
            .map(|r| format!("{} {}", r.method, r.target()))
            .collect()
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().responses.len()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let mut script = self.inner.borrow_mut();
        script.requests.push(request.clone());
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Send("no scripted response".into())))
    }
}

#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 2025-03-10 09:00 UTC, a Monday.
pub fn monday_morning() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap())
}

/// Token store in a fresh temp dir. Keep the dir alive for the test.
pub fn temp_store() -> (TempDir, TokenStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = TokenStore::new(dir.path().join("storage.json"));
    (dir, store)
}

pub fn logged_in_store() -> (TempDir, TokenStore) {
    let (dir, store) = temp_store();
    store.set_token("tok-123").expect("store token");
    (dir, store)
}

pub fn user_json() -> Value {
    json!({ "_id": "u1", "name": "Ada Lovelace", "email": "ada@example.com" })
}

pub fn workday_json(
    date: &str,
    start: Option<&str>,
    end: Option<&str>,
    breaks: Value,
) -> Value {
    json!({
        "_id": format!("wd-{date}"),
        "date": date,
        "startTime": start,
        "endTime": end,
        "totalWorkTime": 3_661_000,
        "totalBreakTime": 0,
        "breaks": breaks,
    })
}

pub fn page_json(items: Vec<Value>, total: u64) -> Value {
    json!({ "items": items, "total": total })
}

pub fn empty_page() -> Value {
    page_json(Vec::new(), 0)
}

/// Today's record with the day started at 08:00 and no break.
pub fn today_started() -> Value {
    workday_json("2025-03-10", Some("2025-03-10T08:00:00Z"), None, json!([]))
}

/// Today's record with an open break.
pub fn today_on_break() -> Value {
    workday_json(
        "2025-03-10",
        Some("2025-03-10T08:00:00Z"),
        None,
        json!([{ "start": "2025-03-10T08:45:00Z" }]),
    )
}
