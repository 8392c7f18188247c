use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
use rtimetracker::core::notifications::{NOTIFICATION_TTL, NotificationKind, Notifications};
use rtimetracker::core::pagination::{PageSize, Pagination};
use rtimetracker::core::query::WorkdayQuery;
use rtimetracker::core::status::TodayStatus;
use rtimetracker::models::action::ActionKind;
use rtimetracker::utils::date::parse_optional_date;
use rtimetracker::utils::colors::{RED, paint};
use rtimetracker::utils::format_duration;
use rtimetracker::utils::table::{strip_ansi, visible_width};
use std::collections::HashSet;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "-");
    assert_eq!(format_duration(-5), "-");
    assert_eq!(format_duration(59_000), "0h 0m");
    assert_eq!(format_duration(3_661_000), "1h 1m");
    assert_eq!(format_duration(8 * 3_600_000 + 59 * 60_000 + 59_999), "8h 59m");
}

#[test]
fn test_pagination_bounds() {
    let first = Pagination::new(1, 10, 25);
    assert_eq!(first.total_pages(), 3);
    assert!(first.has_next());
    assert!(!first.has_previous());
    assert_eq!(first.summary(), "Page 1 of 3 (25 total)");

    let last = Pagination::new(3, 10, 25);
    assert!(!last.has_next());
    assert!(last.has_previous());

    let exact = Pagination::new(2, 10, 20);
    assert_eq!(exact.total_pages(), 2);
    assert!(!exact.has_next());
}

#[test]
fn test_pagination_empty_history() {
    let p = Pagination::new(1, 10, 0);
    assert_eq!(p.total_pages(), 0);
    assert_eq!(p.display_pages(), 1);
    assert!(!p.has_next());
    assert!(!p.has_previous());
    assert_eq!(p.summary(), "Page 1 of 1 (0 total)");
}

#[test]
fn test_page_size_choices() {
    for n in [10, 20, 50] {
        assert_eq!(PageSize::try_from(n).unwrap().get(), n);
    }
    assert!(PageSize::try_from(15).is_err());
    assert!(PageSize::try_from(0).is_err());
    assert_eq!(PageSize::default().get(), 10);
}

#[test]
fn test_query_pairs_omit_unset_dates() {
    let q = WorkdayQuery::default();
    assert_eq!(
        q.to_pairs(),
        vec![
            ("page".to_string(), "1".to_string()),
            ("limit".to_string(), "10".to_string())
        ]
    );

    let mut q = WorkdayQuery::new(PageSize::try_from(20).unwrap());
    q.set_from(Some(day(2025, 3, 1)));
    q.set_to(Some(day(2025, 3, 31)));
    let keys: Vec<String> = q.to_pairs().into_iter().map(|(k, v)| format!("{k}={v}")).collect();
    assert_eq!(keys, ["from=2025-03-01", "to=2025-03-31", "page=1", "limit=20"]);
}

#[test]
fn test_query_setters_report_changes() {
    let mut q = WorkdayQuery::default();
    assert!(q.set_page(3).unwrap());
    assert!(!q.set_page(3).unwrap());
    assert!(q.set_page(0).is_err());
    assert_eq!(q.page, 3);

    // a new page size goes back to page 1
    assert!(q.set_limit(PageSize::try_from(50).unwrap()));
    assert_eq!(q.page, 1);
    assert_eq!(q.limit.get(), 50);

    assert!(q.set_from(Some(day(2025, 1, 1))));
    assert!(!q.set_from(Some(day(2025, 1, 1))));
    assert!(q.set_from(None));
}

#[test]
fn test_query_covers_open_bounds() {
    let mut q = WorkdayQuery::default();
    assert!(q.covers(day(2025, 3, 10)));
    assert!(!q.has_date_filter());

    q.set_to(Some(day(2025, 3, 9)));
    assert!(!q.covers(day(2025, 3, 10)));
    assert!(q.covers(day(2025, 3, 9)));

    q.set_to(None);
    q.set_from(Some(day(2025, 3, 11)));
    assert!(!q.covers(day(2025, 3, 10)));
}

#[test]
fn test_optional_date_parsing() {
    assert_eq!(parse_optional_date("-").unwrap(), None);
    assert_eq!(parse_optional_date("  ").unwrap(), None);
    assert_eq!(
        parse_optional_date("2025-03-10").unwrap(),
        Some(day(2025, 3, 10))
    );
    assert!(parse_optional_date("10/03/2025").is_err());
}

#[test]
fn test_status_not_started() {
    let s = TodayStatus::from_workday(None);
    assert_eq!(s.describe(), "not working");
    assert!(s.is_available(ActionKind::StartDay));
    assert!(!s.is_available(ActionKind::StartBreak));
    assert!(!s.is_available(ActionKind::EndBreak));
    assert!(!s.is_available(ActionKind::EndDay));
}

#[test]
fn test_status_working_and_on_break() {
    let working = TodayStatus {
        working: true,
        on_break: false,
    };
    assert!(!working.is_available(ActionKind::StartDay));
    assert!(working.is_available(ActionKind::StartBreak));
    assert!(!working.is_available(ActionKind::EndBreak));
    assert!(working.is_available(ActionKind::EndDay));
    assert_eq!(working.label(ActionKind::StartDay), "Day Started");

    let on_break = TodayStatus {
        working: true,
        on_break: true,
    };
    assert!(!on_break.is_available(ActionKind::StartBreak));
    assert!(on_break.is_available(ActionKind::EndBreak));
    assert!(on_break.is_available(ActionKind::EndDay));
    assert_eq!(on_break.label(ActionKind::StartBreak), "On Break");
    assert_eq!(on_break.describe(), "on break");
}

#[test]
fn test_buttons_disable_in_flight_action() {
    let s = TodayStatus::default();
    let mut busy = HashSet::new();
    busy.insert(ActionKind::StartDay);

    let buttons = s.buttons(&busy);
    assert_eq!(buttons.len(), 4);
    assert_eq!(buttons[0].kind, ActionKind::StartDay);
    assert!(buttons[0].in_flight);
    assert!(!buttons[0].enabled);
    assert!(buttons.iter().all(|b| !b.enabled));
}

#[test]
fn test_notifications_expire_independently() {
    let t0 = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
    let mut n = Notifications::default();

    let a = n.success("Action Success", t0);
    let b = n.error("Action failed", t0 + TimeDelta::seconds(2));
    assert_ne!(a, b);
    assert_eq!(n.visible().len(), 2);
    assert_eq!(n.visible()[0].kind, NotificationKind::Success);

    assert!(!n.expire(t0 + TimeDelta::seconds(1)));
    assert!(n.expire(t0 + NOTIFICATION_TTL));
    assert_eq!(n.visible().len(), 1);
    assert_eq!(n.visible()[0].message, "Action failed");

    assert!(n.expire(t0 + TimeDelta::seconds(5)));
    assert!(n.is_empty());
}

#[test]
fn test_strip_ansi_only_drops_colour_sequences() {
    assert_eq!(strip_ansi("\x1b[31mred\x1b[0m"), "red");
    assert_eq!(strip_ansi("\x1b[1;32mok\x1b[K"), "ok");
    assert_eq!(strip_ansi("\x1b7abc Def"), "\x1b7abc Def");
    assert_eq!(strip_ansi("plain"), "plain");

    assert_eq!(visible_width(&paint("09:00", RED)), 5);
}
