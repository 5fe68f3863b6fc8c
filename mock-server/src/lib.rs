use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Definition {
    pub defid: u64,
    pub word: String,
    pub definition: String,
    pub example: String,
    pub author: String,
    pub permalink: String,
    pub thumbs_up: u64,
    pub thumbs_down: u64,
    pub written_on: String,
    pub current_vote: String,
    pub sound_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DefinitionList {
    pub list: Vec<Definition>,
}

#[derive(Serialize, Deserialize)]
pub struct Suggestion {
    pub term: String,
    pub preview: String,
}

#[derive(Serialize, Deserialize)]
pub struct SuggestionList {
    pub results: Vec<Suggestion>,
}

#[derive(Serialize, Deserialize)]
pub struct VoteResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<u64>,
}

#[derive(Deserialize)]
pub struct DefineParams {
    pub term: Option<String>,
    pub defid: Option<u64>,
}

#[derive(Deserialize)]
pub struct TermParams {
    #[serde(default)]
    pub term: String,
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Deserialize)]
pub struct VoteParams {
    pub defid: u64,
    pub direction: Direction,
}

/// Entries returned by `random` are capped the way the public API caps them.
pub const RANDOM_PAGE_SIZE: usize = 10;

const PREVIEW_LEN: usize = 50;

pub type Db = Arc<RwLock<Vec<Definition>>>;

/// Router over the built-in sample entries.
pub fn app() -> Router {
    app_with(sample_entries())
}

/// Router over caller-supplied entries. Store order is response order.
pub fn app_with(entries: Vec<Definition>) -> Router {
    let db: Db = Arc::new(RwLock::new(entries));
    Router::new()
        .route("/define", get(define))
        .route("/random", get(random))
        .route("/autocomplete", get(autocomplete))
        .route("/autocomplete-extra", get(autocomplete_extra))
        .route("/words_of_the_day", get(words_of_the_day))
        .route("/vote", get(vote))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, entries: Vec<Definition>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(entries)).await
}

async fn define(
    State(db): State<Db>,
    Query(params): Query<DefineParams>,
) -> Result<Json<DefinitionList>, StatusCode> {
    let entries = db.read().await;
    let list = match (params.defid, params.term) {
        (Some(defid), _) => entries.iter().filter(|d| d.defid == defid).cloned().collect(),
        (None, Some(term)) => entries
            .iter()
            .filter(|d| d.word.eq_ignore_ascii_case(&term))
            .cloned()
            .collect(),
        (None, None) => return Err(StatusCode::BAD_REQUEST),
    };
    Ok(Json(DefinitionList { list }))
}

async fn random(State(db): State<Db>) -> Json<DefinitionList> {
    let entries = db.read().await;
    Json(DefinitionList {
        list: entries.iter().take(RANDOM_PAGE_SIZE).cloned().collect(),
    })
}

fn matching_words(entries: &[Definition], prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    let mut words: Vec<String> = Vec::new();
    for entry in entries {
        if entry.word.to_lowercase().starts_with(&prefix) && !words.contains(&entry.word) {
            words.push(entry.word.clone());
        }
    }
    words
}

async fn autocomplete(State(db): State<Db>, Query(params): Query<TermParams>) -> Json<Vec<String>> {
    let entries = db.read().await;
    Json(matching_words(&entries, &params.term))
}

async fn autocomplete_extra(
    State(db): State<Db>,
    Query(params): Query<TermParams>,
) -> Json<SuggestionList> {
    let entries = db.read().await;
    let results = matching_words(&entries, &params.term)
        .into_iter()
        .map(|term| {
            let preview = entries
                .iter()
                .find(|d| d.word == term)
                .map(|d| d.definition.chars().take(PREVIEW_LEN).collect())
                .unwrap_or_default();
            Suggestion { term, preview }
        })
        .collect();
    Json(SuggestionList { results })
}

async fn words_of_the_day(State(db): State<Db>) -> Json<DefinitionList> {
    let entries = db.read().await;
    Json(DefinitionList {
        list: entries.iter().filter(|d| d.date.is_some()).cloned().collect(),
    })
}

/// Unknown ids get the API's bare `error` status, not a 404.
async fn vote(State(db): State<Db>, Query(params): Query<VoteParams>) -> Json<VoteResponse> {
    let mut entries = db.write().await;
    let Some(entry) = entries.iter_mut().find(|d| d.defid == params.defid) else {
        return Json(VoteResponse {
            status: "error".to_string(),
            up: None,
            down: None,
        });
    };
    match params.direction {
        Direction::Up => entry.thumbs_up += 1,
        Direction::Down => entry.thumbs_down += 1,
    }
    Json(VoteResponse {
        status: "saved".to_string(),
        up: Some(entry.thumbs_up),
        down: Some(entry.thumbs_down),
    })
}

fn entry(defid: u64, word: &str, definition: &str, example: &str, author: &str) -> Definition {
    Definition {
        defid,
        word: word.to_string(),
        definition: definition.to_string(),
        example: example.to_string(),
        author: author.to_string(),
        permalink: format!("http://{}.urbanup.com/{defid}", word.to_lowercase().replace(' ', "-")),
        thumbs_up: 0,
        thumbs_down: 0,
        written_on: "2012-04-01T00:00:00.000Z".to_string(),
        current_vote: String::new(),
        sound_urls: Vec::new(),
        date: None,
    }
}

/// Fixed sample data served by `app()`.
pub fn sample_entries() -> Vec<Definition> {
    let mut yeet = entry(
        3001,
        "yeet",
        "To throw something with force and without regard.",
        "He yeeted the can across the room.",
        "thrower",
    );
    yeet.date = Some("October 17, 2026".to_string());

    vec![
        entry(
            1001,
            "YOLO",
            "You Only Live Once. Said before doing something reckless.",
            "Jumping off the pier? YOLO.",
            "drake",
        ),
        entry(
            1002,
            "YOLO",
            "An excuse for poor decisions.",
            "He spent his rent on sneakers. YOLO.",
            "sceptic",
        ),
        entry(
            2001,
            "yolo swag",
            "Two overused words used together.",
            "yolo swag, bro.",
            "teen",
        ),
        yeet,
        entry(
            4001,
            "doge",
            "A shiba inu meme with broken English captions.",
            "such wow, much doge.",
            "kabosu",
        ),
    ]
}
