//! Session-aware request helper.
//!
//! Every authenticated call goes through [`Session`], which attaches the
//! bearer token read fresh from storage and classifies the response into an
//! [`ApiOutcome`]. A 401 becomes [`ApiOutcome::Unauthorized`] and its body is
//! never looked at. Deciding what to do about it (going back to the login
//! screen) is up to the caller's top-level composition.

use crate::api::transport::{ApiRequest, RawResponse, Transport, TransportError};
use crate::models::serde_helpers::extract_message;
use crate::storage::TokenStore;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Result of one API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Unauthorized,
    Failed(ApiFailure),
}

impl<T> ApiOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(v) => ApiOutcome::Success(f(v)),
            ApiOutcome::Unauthorized => ApiOutcome::Unauthorized,
            ApiOutcome::Failed(e) => ApiOutcome::Failed(e),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiOutcome::Unauthorized)
    }

    pub fn success(self) -> Option<T> {
        match self {
            ApiOutcome::Success(v) => Some(v),
            _ => None,
        }
    }
}

/// Anything that is neither a success nor a 401.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    /// `None` when no response was received at all.
    pub status: Option<u16>,
    /// Decoded body, when the server answered with JSON.
    pub body: Option<Value>,
    pub reason: String,
}

impl ApiFailure {
    fn transport(err: TransportError) -> Self {
        Self {
            status: None,
            body: None,
            reason: err.to_string(),
        }
    }

    /// Message embedded by the server in the body, if any.
    pub fn server_message(&self) -> Option<String> {
        self.body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(extract_message)
    }
}

/// Turn a transport result into an outcome, decoding 2xx bodies as `R`.
pub fn classify<R: DeserializeOwned>(
    result: Result<RawResponse, TransportError>,
) -> ApiOutcome<R> {
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "transport failure");
            return ApiOutcome::Failed(ApiFailure::transport(e));
        }
    };

    if response.is_unauthorized() {
        debug!("unauthorized response");
        return ApiOutcome::Unauthorized;
    }

    if !response.is_success() {
        warn!(status = response.status, "request rejected by server");
        return ApiOutcome::Failed(ApiFailure {
            status: Some(response.status),
            body: serde_json::from_str(&response.body).ok(),
            reason: format!("HTTP {}", response.status),
        });
    }

    // A 2xx with an empty body decodes as JSON `null`.
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };

    match serde_json::from_str::<R>(body) {
        Ok(v) => ApiOutcome::Success(v),
        Err(e) => {
            warn!(error = %e, "undecodable response body");
            ApiOutcome::Failed(ApiFailure {
                status: Some(response.status),
                body: serde_json::from_str(body).ok(),
                reason: format!("invalid response: {e}"),
            })
        }
    }
}

/// Authenticated access to the API.
pub struct Session<'a> {
    transport: &'a dyn Transport,
    store: &'a TokenStore,
}

impl<'a> Session<'a> {
    pub fn new(transport: &'a dyn Transport, store: &'a TokenStore) -> Self {
        Self { transport, store }
    }

    pub fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> ApiOutcome<R> {
        self.execute(ApiRequest::get(path).with_query(query))
    }

    pub fn post<R: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> ApiOutcome<R> {
        let request = ApiRequest::post(path);
        let request = match body {
            Some(b) => request.with_json(b),
            None => request,
        };
        self.execute(request)
    }

    fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiOutcome<R> {
        let token = self.store.token().unwrap_or_else(|e| {
            warn!(error = %e, "could not read session token");
            None
        });
        let request = request.with_bearer(token);
        debug!(method = %request.method, target = %request.target(), "api call");
        classify(self.transport.send(&request))
    }
}
