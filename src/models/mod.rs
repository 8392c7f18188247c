pub mod action;
pub mod user;
pub mod workday;

pub(crate) mod serde_helpers;
