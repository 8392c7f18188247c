use super::serde_helpers::string_or_number;
use serde::{Deserialize, Serialize};

/// Profile of the authenticated user, as returned by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

impl User {
    /// Name shown in the dashboard header: the user name, or the email when
    /// the profile carries no (or a blank) name.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => &self.email,
        }
    }
}
