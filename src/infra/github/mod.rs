//! GitHub issue-search client built on reqwest.

mod client;
pub(crate) mod error;
#[cfg(test)]
pub(crate) mod mock;
mod search;

pub use client::SearchClient;
pub use error::SearchError;
pub use search::{
    DEFAULT_LIMIT, IssueRecord, IssueState, Reactions, SearchQuery, SearchResponse, SearchResult,
};
