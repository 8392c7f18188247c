use rtimetracker::api::ApiOutcome;
use rtimetracker::core::actions::{ACTION_FAILED, ACTION_SUCCESS, Dispatch, Rejection};
use rtimetracker::core::dashboard::{Dashboard, Flow, LoadState};
use rtimetracker::core::notifications::NotificationKind;
use rtimetracker::core::pagination::PageSize;
use rtimetracker::core::query::WorkdayQuery;
use rtimetracker::models::action::{ActionKind, ActionResponse};
use rtimetracker::ui::dashboard_view;
use serde_json::json;

mod common;
use common::{
    FakeTransport, empty_page, logged_in_store, monday_morning, page_json, temp_store,
    today_on_break, today_started, user_json, workday_json,
};

fn messages(dash: &Dashboard) -> Vec<(NotificationKind, String)> {
    dash.notifications
        .visible()
        .iter()
        .map(|n| (n.kind, n.message.clone()))
        .collect()
}

#[test]
fn test_mount_without_token_sends_nothing() {
    let fake = FakeTransport::new();
    let (_dir, store) = temp_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());

    assert_eq!(dash.mount(), Flow::RedirectToLogin);
    assert!(fake.requests().is_empty());
}

#[test]
fn test_mount_loads_profile_then_first_page() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, page_json(vec![today_started()], 25));
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());

    assert_eq!(dash.mount(), Flow::Continue);
    assert_eq!(
        fake.calls(),
        ["GET /auth/me", "GET /time/me?page=1&limit=10"]
    );
    assert_eq!(dash.user().map(|u| u.display_name()), Some("Ada Lovelace"));
    assert!(dash.status().working);
    assert!(!dash.status().on_break);

    let p = dash.pagination();
    assert_eq!(p.total_pages(), 3);
    assert!(p.has_next());
    assert!(!p.has_previous());
}

#[test]
fn test_profile_failure_is_not_fatal() {
    let fake = FakeTransport::new();
    fake.respond(500, "");
    fake.respond_json(200, empty_page());
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());

    assert_eq!(dash.mount(), Flow::Continue);
    assert!(dash.user().is_none());
    assert!(dash.loaded().is_some());
}

#[test]
fn test_unauthorized_page_load_redirects() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond(401, "");
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());

    assert_eq!(dash.mount(), Flow::RedirectToLogin);
}

#[test]
fn test_failed_page_load_shows_error_state() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(500, json!({ "message": "database unavailable" }));
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());

    assert_eq!(dash.mount(), Flow::Continue);
    assert_eq!(
        dash.load_state(),
        &LoadState::Failed("database unavailable".to_string())
    );
    // no snapshot: everything derives from "not started"
    assert!(!dash.status().working);
}

#[test]
fn test_start_day_then_reload() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, empty_page());
    fake.respond_json(201, json!({ "message": "Workday started" }));
    fake.respond_json(200, page_json(vec![today_started()], 1));
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());

    assert_eq!(dash.mount(), Flow::Continue);
    assert!(!dash.status().working);

    let result = dash.dispatch(ActionKind::StartDay);
    assert_eq!(result, Dispatch::Completed(Flow::Continue));
    assert_eq!(
        fake.calls(),
        [
            "GET /auth/me",
            "GET /time/me?page=1&limit=10",
            "POST /time/start",
            "GET /time/me?page=1&limit=10"
        ]
    );
    assert!(dash.status().working);
    assert!(!dash.is_in_flight(ActionKind::StartDay));
    assert_eq!(
        messages(&dash),
        [(NotificationKind::Success, ACTION_SUCCESS.to_string())]
    );

    let buttons = dash.buttons();
    assert!(!buttons[0].enabled);
    assert_eq!(buttons[0].label, "Day Started");
    assert!(buttons[1].enabled, "Start Break available while working");
}

#[test]
fn test_disabled_action_is_not_sent() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, empty_page());
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());
    assert_eq!(dash.mount(), Flow::Continue);

    assert_eq!(
        dash.dispatch(ActionKind::EndDay),
        Dispatch::Rejected(Rejection::Unavailable)
    );
    assert_eq!(fake.requests().len(), 2);
}

#[test]
fn test_in_flight_action_cannot_be_resubmitted() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, page_json(vec![today_started()], 1));
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());
    assert_eq!(dash.mount(), Flow::Continue);

    let ticket = dash.begin_action(ActionKind::StartBreak).unwrap();
    assert_eq!(
        dash.begin_action(ActionKind::StartBreak),
        Err(Rejection::InFlight)
    );
    assert_eq!(
        dash.dispatch(ActionKind::StartBreak),
        Dispatch::Rejected(Rejection::InFlight)
    );
    let button = dash.buttons()[1];
    assert!(button.in_flight);
    assert!(!button.enabled);
    assert_eq!(fake.requests().len(), 2, "nothing sent while in flight");

    fake.respond_json(200, page_json(vec![today_on_break()], 1));
    let flow = dash.finish_action(ticket, ApiOutcome::Success(ActionResponse::default()));
    assert_eq!(flow, Flow::Continue);
    assert!(!dash.is_in_flight(ActionKind::StartBreak));
    assert!(dash.status().on_break);
}

#[test]
fn test_error_flag_in_success_response() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, empty_page());
    fake.respond_json(200, json!({ "error": true, "message": "Day already started" }));
    fake.respond_json(200, empty_page());
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());
    assert_eq!(dash.mount(), Flow::Continue);

    assert_eq!(dash.dispatch(ActionKind::StartDay).flow(), Flow::Continue);
    assert_eq!(
        messages(&dash),
        [(NotificationKind::Error, "Day already started".to_string())]
    );
    assert_eq!(fake.pending(), 0, "a reload follows even a refused action");
}

#[test]
fn test_failed_action_prefers_server_message() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, page_json(vec![today_started()], 1));
    fake.respond_json(400, json!({ "message": "No open break" }));
    fake.respond_json(200, page_json(vec![today_started()], 1));
    fake.respond(500, "");
    fake.respond_json(200, page_json(vec![today_started()], 1));
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());
    assert_eq!(dash.mount(), Flow::Continue);

    assert_eq!(dash.dispatch(ActionKind::EndDay).flow(), Flow::Continue);
    assert_eq!(dash.dispatch(ActionKind::StartBreak).flow(), Flow::Continue);
    assert_eq!(
        messages(&dash),
        [
            (NotificationKind::Error, "No open break".to_string()),
            (NotificationKind::Error, ACTION_FAILED.to_string())
        ]
    );
}

#[test]
fn test_unauthorized_action_redirects_without_reload() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, empty_page());
    fake.respond(401, "");
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());
    assert_eq!(dash.mount(), Flow::Continue);

    assert_eq!(
        dash.dispatch(ActionKind::StartDay),
        Dispatch::Completed(Flow::RedirectToLogin)
    );
    assert_eq!(fake.requests().len(), 3);
    assert!(!dash.is_in_flight(ActionKind::StartDay));
}

#[test]
fn test_paging_and_limit_reload() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, page_json(vec![today_started()], 25));
    fake.respond_json(200, page_json(Vec::new(), 25));
    fake.respond_json(200, page_json(vec![today_started()], 25));
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());
    assert_eq!(dash.mount(), Flow::Continue);

    // Previous is disabled on page 1
    assert_eq!(dash.previous_page(), Flow::Continue);
    assert_eq!(fake.requests().len(), 2);

    assert_eq!(dash.next_page(), Flow::Continue);
    assert_eq!(dash.query().page, 2);
    // today's record is on page 1: status falls back to not started
    assert!(!dash.status().working);
    assert!(dash.today_possibly_hidden());

    assert_eq!(dash.set_limit(PageSize::try_from(20).unwrap()), Flow::Continue);
    assert_eq!(dash.query().page, 1);
    assert_eq!(
        fake.calls().last().map(String::as_str),
        Some("GET /time/me?page=1&limit=20")
    );
    assert!(!dash.today_possibly_hidden());
}

#[test]
fn test_unchanged_filter_does_not_reload() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, empty_page());
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());
    assert_eq!(dash.mount(), Flow::Continue);

    assert_eq!(dash.set_from(None), Flow::Continue);
    assert_eq!(dash.set_page(1).unwrap(), Flow::Continue);
    assert_eq!(fake.requests().len(), 2);
}

#[test]
fn test_duplicate_dates_first_record_wins() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(
        200,
        page_json(
            vec![
                workday_json("2025-03-10", Some("2025-03-10T08:00:00Z"), None, json!([])),
                workday_json(
                    "2025-03-10",
                    Some("2025-03-10T07:00:00Z"),
                    Some("2025-03-10T08:00:00Z"),
                    json!([]),
                ),
            ],
            2,
        ),
    );
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());
    assert_eq!(dash.mount(), Flow::Continue);

    assert!(dash.status().working);
}

#[test]
fn test_render_shows_history_and_notifications() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, page_json(vec![today_started()], 25));
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());
    assert_eq!(dash.mount(), Flow::Continue);
    dash.notifications.success(ACTION_SUCCESS, clock.0);

    let screen = dashboard_view::render(&dash, clock.0.into());
    assert!(screen.contains("Welcome, Ada Lovelace"));
    assert!(screen.contains("Current Status"));
    assert!(screen.contains("2025-03-10"));
    assert!(screen.contains("1h 1m"));
    assert!(screen.contains("Page 1 of 3 (25 total)"));
    assert!(screen.contains(ACTION_SUCCESS));
}

#[test]
fn test_render_empty_history() {
    let fake = FakeTransport::new();
    fake.respond_json(200, user_json());
    fake.respond_json(200, empty_page());
    let (_dir, store) = logged_in_store();
    let clock = monday_morning();
    let mut dash = Dashboard::new(&fake, &store, &clock, WorkdayQuery::default());
    assert_eq!(dash.mount(), Flow::Continue);

    let screen = dashboard_view::render(&dash, clock.0.into());
    assert!(screen.contains("No workdays for this selection.\x1b[0m\n"));
    assert!(screen.contains("Page 1 of 1 (0 total)"));
}
