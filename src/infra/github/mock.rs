//! wiremock-based GitHub mock server for testing.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//!
//! mock.search().item(mock_issue(1, "Title", "Body")).respond().await;
//! mock.search().expect_query("repo:ruanyf/weekly docker").respond().await;
//! mock.search().respond_status(404).await;
//! mock.search().respond_raw("not json").await;
//! ```

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

use super::client::SearchClient;
use crate::shared::config::SearchConfig;

/// Create a mock issue JSON object as returned by `GET /search/issues`.
pub fn mock_issue(number: u64, title: &str, body: &str) -> serde_json::Value {
    json!({
        "id": number,
        "number": number,
        "title": title,
        "html_url": format!("https://github.com/ruanyf/weekly/issues/{}", number),
        "state": "open",
        "body": body,
        "reactions": {
            "total_count": 3,
            "+1": 3,
            "-1": 0
        }
    })
}

pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Default client settings pointed at this mock server.
    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            api_base_url: self.server.uri(),
            ..SearchConfig::default()
        }
    }

    /// Get a SearchClient configured to use this mock server.
    pub fn client(&self) -> SearchClient {
        SearchClient::new(&self.config()).unwrap()
    }

    /// Create a mock builder for `GET /search/issues`.
    pub fn search(&self) -> MockSearchBuilder<'_> {
        MockSearchBuilder {
            server: &self.server,
            items: vec![],
            total_count: None,
            payload: None,
            query: None,
            per_page: None,
            delay: None,
        }
    }
}

/// Builder for search endpoint mocks.
pub struct MockSearchBuilder<'a> {
    server: &'a MockServer,
    items: Vec<serde_json::Value>,
    total_count: Option<u64>,
    payload: Option<serde_json::Value>,
    query: Option<String>,
    per_page: Option<u32>,
    delay: Option<Duration>,
}

impl MockSearchBuilder<'_> {
    /// Append an item to the response's `items` array.
    pub fn item(mut self, item: serde_json::Value) -> Self {
        self.items.push(item);
        self
    }

    /// Override `total_count` (defaults to the number of items).
    pub fn total_count(mut self, total_count: u64) -> Self {
        self.total_count = Some(total_count);
        self
    }

    /// Respond with this exact body instead of one built from items.
    pub fn payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Only match requests whose `q` parameter equals `query`.
    pub fn expect_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    /// Only match requests whose `per_page` parameter equals `per_page`.
    pub fn expect_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Delay the response.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn matcher(&self) -> MockBuilder {
        let mut builder = Mock::given(method("GET"))
            .and(path("/search/issues"))
            .and(query_param("sort", "reactions"))
            .and(query_param("order", "desc"))
            .and(header("accept", "application/vnd.github.v3+json"))
            .and(header("user-agent", "ruanyifeng-weekly-skill"));
        if let Some(query) = &self.query {
            builder = builder.and(query_param("q", query.as_str()));
        }
        if let Some(per_page) = self.per_page {
            builder = builder.and(query_param("per_page", per_page.to_string()));
        }
        builder
    }

    fn template(&self, status: u16) -> ResponseTemplate {
        let template = ResponseTemplate::new(status);
        match self.delay {
            Some(delay) => template.set_delay(delay),
            None => template,
        }
    }

    /// Mount a 200 response with the configured items or payload.
    pub async fn respond(self) {
        let body = self.payload.clone().unwrap_or_else(|| {
            json!({
                "total_count": self.total_count.unwrap_or(self.items.len() as u64),
                "incomplete_results": false,
                "items": self.items.clone()
            })
        });
        self.matcher()
            .respond_with(self.template(200).set_body_json(body))
            .expect(1)
            .mount(self.server)
            .await;
    }

    /// Mount an error response with a GitHub-style message body.
    pub async fn respond_status(self, status: u16) {
        self.matcher()
            .respond_with(self.template(status).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(self.server)
            .await;
    }

    /// Mount a 200 response with a raw (possibly non-JSON) body.
    pub async fn respond_raw(self, body: &str) {
        self.matcher()
            .respond_with(self.template(200).set_body_string(body))
            .mount(self.server)
            .await;
    }
}
