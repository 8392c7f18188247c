pub mod dashboard_view;
pub mod input;
pub mod login_view;
pub mod messages;
