//! Async client that pairs `UrbanClient` with a `Transport`.
//!
//! # Design
//! Every operation is one linear sequence: build (validating arguments), a
//! single `Transport::execute`, then parse (checking the discriminant).
//! Operations that take an id validate it synchronously and hand back the
//! request as a future only once the id is accepted, so an argument error
//! never depends on the caller awaiting anything. No state survives
//! between calls, so a `DictionaryClient` can be shared across tasks by
//! reference.

use std::future::Future;

use crate::client::UrbanClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{
    Definition, DefinitionQuery, DefinitionResult, Suggestion, VoteDirection, VoteResult,
};

#[derive(Debug, Clone)]
pub struct DictionaryClient<T: Transport = ReqwestTransport> {
    client: UrbanClient,
    transport: T,
}

impl DictionaryClient<ReqwestTransport> {
    /// Client for the public API with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(&config.base_url, transport))
    }
}

impl<T: Transport> DictionaryClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: UrbanClient::new(base_url),
            transport,
        }
    }

    /// The request builder/parser used by this client.
    pub fn urban_client(&self) -> &UrbanClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Look up definitions of a free-text term.
    pub async fn lookup_by_term(&self, term: &str) -> Result<DefinitionResult> {
        let query = DefinitionQuery::Term(term.to_string());
        let request = self.client.build_lookup_by_term(term);
        self.dispatch_lookup(query, request).await
    }

    /// Look up a definition by its numeric id.
    ///
    /// The id is checked when this is called, not when the returned future is
    /// polled: `id <= 0` yields `InvalidArgument` immediately and no request
    /// is ever issued.
    pub fn lookup_by_id(
        &self,
        id: i64,
    ) -> Result<impl Future<Output = Result<DefinitionResult>> + Send + '_> {
        self.lookup(&DefinitionQuery::Id(id))
    }

    /// Validates `query` eagerly, like `lookup_by_id`.
    pub fn lookup(
        &self,
        query: &DefinitionQuery,
    ) -> Result<impl Future<Output = Result<DefinitionResult>> + Send + '_> {
        let request = self.client.build_lookup(query)?;
        Ok(self.dispatch_lookup(query.clone(), request))
    }

    async fn dispatch_lookup(
        &self,
        query: DefinitionQuery,
        request: HttpRequest,
    ) -> Result<DefinitionResult> {
        let response = self.send(request).await?;
        self.client.parse_lookup(&query, response)
    }

    /// First record of the `random` endpoint.
    pub async fn random_entry(&self) -> Result<Definition> {
        let response = self.send(self.client.build_random()).await?;
        self.client.parse_random_entry(response)
    }

    pub async fn random_entries(&self) -> Result<Vec<Definition>> {
        let response = self.send(self.client.build_random()).await?;
        self.client.parse_random_entries(response)
    }

    pub async fn autocomplete(&self, term: &str) -> Result<Vec<String>> {
        let response = self.send(self.client.build_autocomplete(term)).await?;
        self.client.parse_autocomplete(response)
    }

    pub async fn autocomplete_extra(&self, term: &str) -> Result<Vec<Suggestion>> {
        let response = self.send(self.client.build_autocomplete_extra(term)).await?;
        self.client.parse_autocomplete_extra(response)
    }

    pub async fn words_of_the_day(&self) -> Result<Vec<Definition>> {
        let response = self.send(self.client.build_words_of_the_day()).await?;
        self.client.parse_words_of_the_day(response)
    }

    /// Vote a definition up or down.
    ///
    /// `id <= 0` yields `InvalidArgument` from this call itself, before any
    /// future exists. The future fails with `Vote` when the API answers with
    /// its error status.
    pub fn vote_on_definition(
        &self,
        id: i64,
        direction: VoteDirection,
    ) -> Result<impl Future<Output = Result<VoteResult>> + Send + '_> {
        let request = self.client.build_vote(id, direction)?;
        Ok(async move {
            let response = self.send(request).await?;
            self.client.parse_vote(id, response)
        })
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        tracing::debug!(url = %request.url, "dispatching request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }
}
