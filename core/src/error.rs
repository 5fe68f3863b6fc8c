//! Error types for the dictionary client.
//!
//! # Design
//! Two layers. `TransportError` covers everything that goes wrong before the
//! API has given a readable answer: the connection, a non-2xx status, or a
//! body that does not decode. `Error` adds the outcomes the API itself
//! reports (no results, a rejected vote) plus argument validation. Callers can
//! therefore tell "the API told us no" apart from "we could not reach the API"
//! by matching on `Error::Transport`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures below the dictionary API's own semantics.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, TLS, timeout, reset).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("deserialization failed: {0}")]
    Decode(String),
}

/// Errors returned by `UrbanClient` and `DictionaryClient`.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument was rejected before any request was built.
    #[error("invalid argument `{name}`: {value} (must be greater than zero)")]
    InvalidArgument { name: &'static str, value: i64 },

    /// The API answered, but had no definitions for the query.
    #[error("no definitions found for {query}")]
    NotFound { query: String },

    /// The API rejected a vote. The response carries no detail, so the id is
    /// only the most likely culprit.
    #[error("vote on definition {defid} failed; the definition id is probably wrong")]
    Vote { defid: i64 },

    /// An endpoint that should always return records returned none.
    #[error("the `{resource}` endpoint returned no entries")]
    EmptyResponse { resource: &'static str },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// True when the failure happened below the API's semantics.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
