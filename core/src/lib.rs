//! Client library for the Urban Dictionary HTTP API.
//!
//! # Overview
//! `UrbanClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `DictionaryClient`
//! pairs it with a `Transport` to offer async operations: lookup by term or
//! id, random entries, autocomplete, words of the day, and voting.
//!
//! # Design
//! - `UrbanClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (validates input, produces the
//!   request) and `parse_*` (decodes the response, checks its discriminant).
//! - The transport is injected. `ReqwestTransport` is the default; tests use
//!   their own implementations.
//! - API outcomes (`NotFound`, `Vote`, `EmptyResponse`) and transport
//!   failures (`Error::Transport`) are distinct error categories.
//!
//! ```no_run
//! # async fn run() -> urbandict_core::Result<()> {
//! use urbandict_core::DictionaryClient;
//!
//! let client = DictionaryClient::new()?;
//! let result = client.lookup_by_term("YOLO").await?;
//! println!("{}", result.list[0].definition);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::UrbanClient;
pub use config::ClientConfig;
pub use dictionary::DictionaryClient;
pub use error::{Error, Result, TransportError};
pub use http::{HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    Definition, DefinitionQuery, DefinitionResult, ResultType, Suggestion, VoteDirection,
    VoteResult, VoteStatus,
};
