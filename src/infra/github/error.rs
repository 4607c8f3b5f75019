//! Issue-search error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP Error {code}: {reason}")]
    Status { code: u16, reason: String },

    #[error("URL Error: {}", error_chain(.0))]
    Transport(reqwest::Error),

    #[error("Malformed search response")]
    InvalidResponse(#[from] serde_json::Error),
}

impl SearchError {
    /// Failures that happened on the wire rather than while decoding.
    ///
    /// These are folded into an error-carrying `SearchResult`; everything
    /// else propagates to the caller.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Transport(_))
    }
}

/// Render an error followed by its source chain, e.g.
/// "error sending request: client error (Connect): Connection refused".
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        // hyper and reqwest sometimes repeat the inner message verbatim
        if !msg.ends_with(&cause_msg) {
            msg.push_str(": ");
            msg.push_str(&cause_msg);
        }
        source = cause.source();
    }
    msg
}
