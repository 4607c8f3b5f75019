mod format;
mod prioritize;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::infra::github::{
    DEFAULT_LIMIT, IssueRecord, IssueState, SearchClient, SearchQuery, SearchResponse,
    SearchResult,
};
use crate::shared::config::SearchConfig;

pub use format::format_issue;
pub use prioritize::prioritize;

/// Records mentioning this term are listed first.
pub const BIAS_KEYWORD: &str = "youmind";

pub type Result<T> = anyhow::Result<T>;

#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct SearchArgs {
    /// Search keyword
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub keyword: String,

    /// Maximum number of results
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub limit: u32,

    /// Filter by issue state (default: all)
    #[arg(long, value_enum)]
    pub state: Option<IssueState>,

    /// Output raw JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Disable TLS certificate and hostname verification (insecure)
    #[arg(long)]
    pub insecure: bool,
}

/// How a run ended, mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

pub async fn run(args: &SearchArgs) -> Result<Outcome> {
    let config = SearchConfig::with_insecure(args.insecure);
    let client = SearchClient::new(&config).context("Failed to create search client")?;

    run_with_client(args, &client, &mut std::io::stdout(), &mut std::io::stderr()).await
}

async fn run_with_client(
    args: &SearchArgs,
    client: &SearchClient,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    let query = SearchQuery::new(&args.keyword)
        .limit(args.limit)
        .state(args.state);
    let result = client
        .search(&query)
        .await
        .context("Failed to decode search response")?;

    // Raw mode reports upstream errors only inside the JSON; the exit code stays 0.
    if args.json {
        let rendered =
            serde_json::to_string_pretty(&result).context("Failed to serialize search result")?;
        writeln!(out, "{rendered}")?;
        return Ok(Outcome::Success);
    }

    let payload = match result {
        SearchResult::Found(payload) => payload,
        SearchResult::Failed { error } => {
            writeln!(err, "Error: {error}")?;
            return Ok(Outcome::Failure);
        }
    };

    let response =
        SearchResponse::from_payload(payload).context("Failed to decode search response")?;
    let items = prioritize(response.items, BIAS_KEYWORD);
    info!(
        total_count = response.total_count,
        shown = items.len(),
        "search completed"
    );

    write!(out, "{}", render_report(response.total_count, &items))?;
    Ok(Outcome::Success)
}

fn render_report(total_count: u64, items: &[IssueRecord]) -> String {
    let mut report = format!(
        "Found {total_count} results, showing top {}:\n\n",
        items.len()
    );
    for (index, item) in items.iter().enumerate() {
        report.push_str(&format!("## {}. {}\n\n", index + 1, format_issue(item)));
    }
    report
}
