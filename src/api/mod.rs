//! Client side of the time-tracking HTTP API.

pub mod endpoints;
pub mod session;
pub mod transport;

pub use endpoints::TimeApi;
pub use session::{ApiFailure, ApiOutcome, Session};
pub use transport::{ApiRequest, HttpTransport, Method, RawResponse, Transport, TransportError};
