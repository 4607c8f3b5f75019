//! HTTP client for the GitHub issue-search endpoint.

use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, info, warn};

use super::error::SearchError;
use super::search::{SearchQuery, SearchResult};
use crate::shared::config::SearchConfig;

const SEARCH_ISSUES_PATH: &str = "/search/issues";
const USER_AGENT_VALUE: &str = "ruanyifeng-weekly-skill";
const ACCEPT_VALUE: &str = "application/vnd.github.v3+json";

pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        if config.accept_invalid_certs {
            warn!("TLS certificate and hostname verification is disabled (--insecure)");
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(SearchError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run one search request.
    ///
    /// Transport failures (non-2xx status, connect, DNS, timeout) come back as
    /// `Ok(SearchResult::Failed)`. A 2xx body that is not valid JSON is an `Err`.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        match self.fetch(query).await {
            Ok(payload) => Ok(SearchResult::Found(payload)),
            Err(err) if err.is_transport() => {
                debug!(error = %err, "issue search failed");
                Ok(SearchResult::Failed {
                    error: err.to_string(),
                })
            }
            Err(err) => Err(err),
        }
    }

    async fn fetch(&self, query: &SearchQuery) -> Result<serde_json::Value, SearchError> {
        let url = format!("{}{SEARCH_ISSUES_PATH}", self.base_url);
        debug!(
            %url,
            q = %query.to_query_string(),
            per_page = query.limit,
            "sending issue search request"
        );

        let response = self
            .client
            .get(&url)
            .query(&query.params())
            .header(ACCEPT, ACCEPT_VALUE)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(SearchError::Transport)?;
        let payload: serde_json::Value = serde_json::from_slice(&body)?;
        info!(bytes = body.len(), "received issue search response");
        Ok(payload)
    }
}
