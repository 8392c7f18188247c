pub mod actions;
pub mod auth;
pub mod dashboard;
pub mod notifications;
pub mod pagination;
pub mod query;
pub mod status;
