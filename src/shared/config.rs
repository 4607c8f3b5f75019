use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport settings for the issue-search client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// GitHub REST API root (default: "https://api.github.com").
    pub api_base_url: String,

    /// Whole-request timeout (default: 30 seconds).
    pub timeout: Duration,

    /// Skip TLS certificate and hostname verification.
    /// Never enabled unless explicitly requested with `--insecure`.
    pub accept_invalid_certs: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

impl SearchConfig {
    /// Default settings with the TLS bypass toggled as requested.
    pub fn with_insecure(accept_invalid_certs: bool) -> Self {
        Self {
            accept_invalid_certs,
            ..Self::default()
        }
    }
}
