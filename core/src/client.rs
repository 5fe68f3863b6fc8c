//! Stateless HTTP request builder and response parser for the dictionary API.
//!
//! # Design
//! `UrbanClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Argument validation lives in `build_*`, so an invalid id is rejected
//! synchronously before any request exists. Discriminant checks live in
//! `parse_*`, right after the body is decoded.

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::error::{Error, Result, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{
    Definition, DefinitionList, DefinitionQuery, DefinitionResult, ResultType, Suggestion,
    SuggestionList, VoteDirection, VoteResult,
};

/// Synchronous, stateless client for the dictionary API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `DictionaryClient` pairs it with a `Transport`.
#[derive(Debug, Clone)]
pub struct UrbanClient {
    base_url: String,
}

impl UrbanClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_lookup_by_term(&self, term: &str) -> HttpRequest {
        self.request("define", &[("term", term)])
    }

    /// Fails with `InvalidArgument` unless `id > 0`.
    pub fn build_lookup_by_id(&self, id: i64) -> Result<HttpRequest> {
        let id = positive("defid", id)?;
        Ok(self.request_raw("define", format!("defid={id}")))
    }

    pub fn build_lookup(&self, query: &DefinitionQuery) -> Result<HttpRequest> {
        match query {
            DefinitionQuery::Term(term) => Ok(self.build_lookup_by_term(term)),
            DefinitionQuery::Id(id) => self.build_lookup_by_id(*id),
        }
    }

    pub fn build_random(&self) -> HttpRequest {
        self.request("random", &[])
    }

    pub fn build_autocomplete(&self, term: &str) -> HttpRequest {
        self.request("autocomplete", &[("term", term)])
    }

    pub fn build_autocomplete_extra(&self, term: &str) -> HttpRequest {
        self.request("autocomplete-extra", &[("term", term)])
    }

    pub fn build_words_of_the_day(&self) -> HttpRequest {
        self.request("words_of_the_day", &[])
    }

    /// Fails with `InvalidArgument` unless `id > 0`.
    pub fn build_vote(&self, id: i64, direction: VoteDirection) -> Result<HttpRequest> {
        let id = positive("defid", id)?;
        Ok(self.request_raw("vote", format!("defid={id}&direction={direction}")))
    }

    /// Parse a `define` response. An empty definition list becomes `NotFound`
    /// carrying `query`.
    pub fn parse_lookup(
        &self,
        query: &DefinitionQuery,
        response: HttpResponse,
    ) -> Result<DefinitionResult> {
        let result: DefinitionResult = decode(response)?;
        match result.result_type() {
            ResultType::NoResults => {
                tracing::debug!(%query, "lookup returned no definitions");
                Err(Error::NotFound {
                    query: query.to_string(),
                })
            }
            ResultType::HasResults => Ok(result),
        }
    }

    /// Parse a `random` response and return its first record.
    pub fn parse_random_entry(&self, response: HttpResponse) -> Result<Definition> {
        self.parse_random_entries(response)?
            .into_iter()
            .next()
            .ok_or(Error::EmptyResponse { resource: "random" })
    }

    pub fn parse_random_entries(&self, response: HttpResponse) -> Result<Vec<Definition>> {
        let wrapper: DefinitionList = decode(response)?;
        Ok(wrapper.list)
    }

    pub fn parse_autocomplete(&self, response: HttpResponse) -> Result<Vec<String>> {
        Ok(decode(response)?)
    }

    pub fn parse_autocomplete_extra(&self, response: HttpResponse) -> Result<Vec<Suggestion>> {
        let wrapper: SuggestionList = decode(response)?;
        Ok(wrapper.results)
    }

    pub fn parse_words_of_the_day(&self, response: HttpResponse) -> Result<Vec<Definition>> {
        let wrapper: DefinitionList = decode(response)?;
        Ok(wrapper.list)
    }

    /// Parse a `vote` response. The `error` status becomes `Vote` naming
    /// `id`; any other status is returned as-is.
    pub fn parse_vote(&self, id: i64, response: HttpResponse) -> Result<VoteResult> {
        let result: VoteResult = decode(response)?;
        if result.status.is_error() {
            tracing::debug!(defid = id, "vote rejected");
            return Err(Error::Vote { defid: id });
        }
        Ok(result)
    }

    fn request(&self, resource: &str, params: &[(&str, &str)]) -> HttpRequest {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        self.request_raw(resource, query)
    }

    fn request_raw(&self, resource: &str, query: String) -> HttpRequest {
        let url = if query.is_empty() {
            format!("{}/{resource}", self.base_url)
        } else {
            format!("{}/{resource}?{query}", self.base_url)
        };
        HttpRequest {
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

fn positive(name: &'static str, value: i64) -> Result<i64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(Error::InvalidArgument { name, value })
    }
}

/// Reject non-2xx statuses, then deserialize the body.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> std::result::Result<T, TransportError> {
    if !response.is_success() {
        return Err(TransportError::Status {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| TransportError::Decode(e.to_string()))
}
