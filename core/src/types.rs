//! Domain DTOs for the dictionary API.
//!
//! # Design
//! These types mirror the JSON the API returns but are defined independently
//! of the mock-server crate; the integration tests catch schema drift between
//! the two. Record fields are passed through untouched. The only values the
//! client inspects are the discriminants: emptiness of a definition list and
//! the status token of a vote.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One dictionary entry.
///
/// Fields the API omits fall back to their defaults, and unknown fields are
/// ignored, so older and newer payload revisions decode to the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
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
    /// Only present on words-of-the-day entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Whether a lookup produced any definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    HasResults,
    NoResults,
}

/// Decoded `define` response. This is the single shape used for both term and
/// id lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefinitionResult {
    #[serde(default)]
    pub list: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl DefinitionResult {
    pub fn result_type(&self) -> ResultType {
        if self.list.is_empty() {
            ResultType::NoResults
        } else {
            ResultType::HasResults
        }
    }
}

/// Wrapper for the list-shaped `random` and `words_of_the_day` responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct DefinitionList {
    #[serde(default)]
    pub list: Vec<Definition>,
}

/// What to look up: a free-text term or a numeric definition id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionQuery {
    Term(String),
    Id(i64),
}

impl fmt::Display for DefinitionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionQuery::Term(term) => write!(f, "term \"{term}\""),
            DefinitionQuery::Id(id) => write!(f, "id {id}"),
        }
    }
}

impl From<&str> for DefinitionQuery {
    fn from(term: &str) -> Self {
        DefinitionQuery::Term(term.to_string())
    }
}

impl From<String> for DefinitionQuery {
    fn from(term: String) -> Self {
        DefinitionQuery::Term(term)
    }
}

impl From<i64> for DefinitionQuery {
    fn from(id: i64) -> Self {
        DefinitionQuery::Id(id)
    }
}

/// Direction of a vote on a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            VoteDirection::Up => "up",
            VoteDirection::Down => "down",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status token of a vote response. Tokens other than `saved` and `error`
/// are kept verbatim in `Other` and count as success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VoteStatus {
    Saved,
    Error,
    Other(String),
}

impl VoteStatus {
    pub fn as_str(&self) -> &str {
        match self {
            VoteStatus::Saved => "saved",
            VoteStatus::Error => "error",
            VoteStatus::Other(token) => token,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, VoteStatus::Error)
    }
}

impl From<String> for VoteStatus {
    fn from(token: String) -> Self {
        match token.as_str() {
            "saved" => VoteStatus::Saved,
            "error" => VoteStatus::Error,
            _ => VoteStatus::Other(token),
        }
    }
}

impl From<VoteStatus> for String {
    fn from(status: VoteStatus) -> Self {
        match status {
            VoteStatus::Other(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for VoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded `vote` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteResult {
    pub status: VoteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<u64>,
}

/// One entry of an `autocomplete-extra` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub term: String,
    #[serde(default)]
    pub preview: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct SuggestionList {
    #[serde(default)]
    pub results: Vec<Suggestion>,
}
