//! HTTP exchange types for the host-does-IO pattern.
//!
//! # Design
//! `UrbanClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. A `Transport` (or any other host code)
//! executes the round-trip in between. Every endpoint of the dictionary API is
//! a GET whose parameters travel in the query string, so a request is fully
//! described by its URL and headers.

/// An HTTP GET request described as plain data.
///
/// `url` is absolute and already carries the encoded query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Non-2xx statuses are carried here as ordinary values; interpreting them is
/// the job of `UrbanClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Convenience constructor for a response without headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
