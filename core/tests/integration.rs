//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every
//! `DictionaryClient` operation through `ReqwestTransport` over real HTTP.
//! Validates that request building, the transport, and response parsing agree
//! with the server's schema.

use std::time::Duration;

use tokio::net::TcpListener;
use urbandict_core::{
    ClientConfig, DictionaryClient, Error, ReqwestTransport, TransportError, VoteDirection,
    VoteStatus,
};

async fn start(entries: Option<Vec<mock_server::Definition>>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        match entries {
            Some(entries) => mock_server::run_with(listener, entries).await,
            None => mock_server::run(listener).await,
        }
    });
    format!("http://{addr}")
}

async fn client() -> DictionaryClient<ReqwestTransport> {
    let base_url = start(None).await;
    DictionaryClient::with_config(
        ClientConfig::default()
            .with_base_url(base_url)
            .with_timeout(Duration::from_secs(10)),
    )
    .unwrap()
}

#[tokio::test]
async fn lookup_by_term_yolo() {
    let client = client().await;

    let result = client.lookup_by_term("YOLO").await.unwrap();
    assert_eq!(result.list.len(), 2);
    assert_eq!(result.list[0].word, "YOLO");
    assert_eq!(result.list[0].defid, 1001);
}

#[tokio::test]
async fn lookup_by_term_with_space() {
    let client = client().await;

    let result = client.lookup_by_term("yolo swag").await.unwrap();
    assert_eq!(result.list[0].defid, 2001);
}

#[tokio::test]
async fn lookup_by_term_is_idempotent() {
    let client = client().await;

    let first = client.lookup_by_term("doge").await.unwrap();
    let second = client.lookup_by_term("doge").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn lookup_unknown_term_is_not_found() {
    let client = client().await;

    let err = client.lookup_by_term("qwxzv").await.unwrap_err();
    assert!(matches!(&err, Error::NotFound { query } if query.contains("qwxzv")));
}

#[tokio::test]
async fn lookup_by_id() {
    let client = client().await;

    let result = client.lookup_by_id(3001).unwrap().await.unwrap();
    assert_eq!(result.list[0].word, "yeet");

    let err = client.lookup_by_id(999).unwrap().await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.to_string().contains("999"));

    let err = client.lookup_by_id(-5).err().unwrap();
    assert!(matches!(err, Error::InvalidArgument { value: -5, .. }));
}

#[tokio::test]
async fn random_entry_and_entries() {
    let client = client().await;

    let entries = client.random_entries().await.unwrap();
    assert_eq!(entries.len(), 5);
    let first = client.random_entry().await.unwrap();
    assert_eq!(first, entries[0]);
}

#[tokio::test]
async fn random_entry_on_empty_server() {
    let base_url = start(Some(Vec::new())).await;
    let client = DictionaryClient::with_config(ClientConfig::default().with_base_url(base_url)).unwrap();

    assert!(client.random_entries().await.unwrap().is_empty());
    let err = client.random_entry().await.unwrap_err();
    assert!(matches!(err, Error::EmptyResponse { resource: "random" }));
}

#[tokio::test]
async fn autocomplete_round_trip() {
    let client = client().await;

    let words = client.autocomplete("yolo ").await.unwrap();
    assert_eq!(words, vec!["yolo swag"]);

    let suggestions = client.autocomplete_extra("ye").await.unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].term, "yeet");
}

#[tokio::test]
async fn words_of_the_day() {
    let client = client().await;

    let words = client.words_of_the_day().await.unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].date.as_deref(), Some("October 17, 2026"));
}

#[tokio::test]
async fn vote_lifecycle() {
    let client = client().await;

    let result = client.vote_on_definition(1001, VoteDirection::Up).unwrap().await.unwrap();
    assert_eq!(result.status, VoteStatus::Saved);
    assert_eq!(result.up, Some(1));

    let result = client.vote_on_definition(1001, VoteDirection::Down).unwrap().await.unwrap();
    assert_eq!(result.down, Some(1));

    let updated = client.lookup_by_id(1001).unwrap().await.unwrap();
    assert_eq!(updated.list[0].thumbs_up, 1);
    assert_eq!(updated.list[0].thumbs_down, 1);

    let err = client
        .vote_on_definition(123456789, VoteDirection::Up)
        .unwrap()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Vote { defid: 123456789 }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        DictionaryClient::with_config(ClientConfig::default().with_base_url(format!("http://{addr}")))
            .unwrap();
    let err = client.lookup_by_term("YOLO").await.unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, Error::Transport(TransportError::Request(_))));
}

#[tokio::test]
async fn unknown_route_is_a_status_error() {
    let base_url = start(None).await;
    let client =
        DictionaryClient::with_config(ClientConfig::default().with_base_url(format!("{base_url}/v9")))
            .unwrap();

    let err = client.random_entries().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Transport(TransportError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn prebuilt_reqwest_client_as_transport() {
    let base_url = start(None).await;
    let http = reqwest::Client::builder()
        .user_agent("dictionary-tests")
        .build()
        .unwrap();
    let client = DictionaryClient::with_transport(&base_url, ReqwestTransport::from_client(http));

    let result = client.lookup_by_term("doge").await.unwrap();
    assert_eq!(result.list[0].defid, 4001);
}
