//! HTTP client for the FilmBox backend.
//!
//! The client is transport-agnostic: the browser front end plugs in a fetch
//! transport, the command-line client a `reqwest` one, and tests the
//! recording [`mock::MockTransport`].

mod client;
mod config;
mod error;
mod transport;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::ApiClient;
pub use config::{ClientConfig, LOCAL_API_URL, PRODUCTION_API_URL};
pub use error::ApiError;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
