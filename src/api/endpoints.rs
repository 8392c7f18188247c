use crate::api::session::{ApiOutcome, Session, classify};
use crate::api::transport::{ApiRequest, Transport};
use crate::core::query::WorkdayQuery;
use crate::models::action::{ActionKind, ActionResponse};
use crate::models::user::User;
use crate::models::workday::WorkdayPage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const LOGIN: &str = "/auth/login";
pub const CHANGE_PASSWORD: &str = "/auth/change-password";
pub const ME: &str = "/auth/me";
pub const WORKDAYS: &str = "/time/me";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

/// Exchange credentials for a token. Sent without a bearer header and
/// not subject to the unauthorized redirect: a 401 here only means the
/// credentials were wrong.
#[tracing::instrument(skip(transport, password))]
pub fn login(transport: &dyn Transport, email: &str, password: &str) -> ApiOutcome<LoginResponse> {
    let body = serde_json::to_value(LoginRequest { email, password }).unwrap_or(Value::Null);
    classify(transport.send(&ApiRequest::post(LOGIN).with_json(body)))
}

/// Typed wrappers over the authenticated endpoints.
pub struct TimeApi<'a> {
    session: Session<'a>,
}

impl<'a> TimeApi<'a> {
    pub fn new(session: Session<'a>) -> Self {
        Self { session }
    }

    #[tracing::instrument(skip_all)]
    pub fn change_password(&self, current: &str, new: &str) -> ApiOutcome<Value> {
        let body = serde_json::to_value(ChangePasswordRequest {
            current_password: current,
            new_password: new,
        })
        .unwrap_or(Value::Null);
        self.session.post(CHANGE_PASSWORD, Some(body))
    }

    #[tracing::instrument(skip(self))]
    pub fn me(&self) -> ApiOutcome<User> {
        self.session.get(ME, Vec::new())
    }

    #[tracing::instrument(skip(self))]
    pub fn workdays(&self, query: &WorkdayQuery) -> ApiOutcome<WorkdayPage> {
        self.session.get(WORKDAYS, query.to_pairs())
    }

    #[tracing::instrument(skip(self))]
    pub fn action(&self, kind: ActionKind) -> ApiOutcome<ActionResponse> {
        // An empty 2xx body counts as a plain success.
        self.session
            .post::<Option<ActionResponse>>(kind.path(), None)
            .map(Option::unwrap_or_default)
    }
}
