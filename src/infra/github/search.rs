//! Issue-search query and response types.

use clap::ValueEnum;
use serde::{Deserialize, Serialize, Serializer};

use super::error::SearchError;

/// The only repository this tool searches.
pub const REPOSITORY: &str = "ruanyf/weekly";

pub const DEFAULT_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Search parameters for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub limit: u32,
    pub state: Option<IssueState>,
}

impl SearchQuery {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            limit: DEFAULT_LIMIT,
            state: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn state(mut self, state: Option<IssueState>) -> Self {
        self.state = state;
        self
    }

    /// The `q` parameter: repository scope, keyword, then the optional state term.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("repo:{REPOSITORY}"), self.keyword.clone()];
        if let Some(state) = self.state {
            parts.push(format!("state:{}", state.as_str()));
        }
        parts.join(" ")
    }

    /// Query parameters for `GET /search/issues`, most-reacted first.
    pub fn params(&self) -> [(&'static str, String); 4] {
        [
            ("q", self.to_query_string()),
            ("per_page", self.limit.to_string()),
            ("sort", "reactions".to_string()),
            ("order", "desc".to_string()),
        ]
    }
}

/// Outcome of one search request.
///
/// `Found` holds the server's JSON body untouched. `Failed` carries the
/// transport error message and serializes as `{"error": ..., "items": []}`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Found(serde_json::Value),
    Failed { error: String },
}

#[derive(Serialize)]
struct FailedPayload<'a> {
    error: &'a str,
    items: &'a [IssueRecord],
}

impl Serialize for SearchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Found(payload) => payload.serialize(serializer),
            Self::Failed { error } => FailedPayload { error, items: &[] }.serialize(serializer),
        }
    }
}

/// Typed view of a successful search payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<IssueRecord>,
}

impl SearchResponse {
    pub fn from_payload(payload: serde_json::Value) -> Result<Self, SearchError> {
        Ok(serde_json::from_value(payload)?)
    }
}

/// A single issue from the search results. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub title: Option<String>,
    pub html_url: Option<String>,
    pub body: Option<String>,
    pub state: Option<String>,
    pub reactions: Option<Reactions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    #[serde(rename = "+1", default)]
    pub thumbs_up: u64,
}

impl IssueRecord {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("No title")
    }

    pub fn url(&self) -> &str {
        self.html_url.as_deref().unwrap_or("")
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or("unknown")
    }

    pub fn thumbs_up(&self) -> u64 {
        self.reactions.as_ref().map(|r| r.thumbs_up).unwrap_or(0)
    }
}
