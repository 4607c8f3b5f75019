use crate::infra::github::IssueRecord;

const PREVIEW_CHARS: usize = 200;

/// Render one issue as a markdown-ish block. Title and body are not escaped.
pub fn format_issue(item: &IssueRecord) -> String {
    let mut lines = vec![
        format!("**{}**", item.title()),
        format!("- URL: {}", item.url()),
        format!("- Status: {} | +1: {}", item.state(), item.thumbs_up()),
    ];

    let preview = body_preview(item.body());
    if !preview.is_empty() {
        lines.push(format!("- Preview: {preview}"));
    }

    lines.join("\n")
}

/// First `PREVIEW_CHARS` characters on a single line, with "..." when cut.
fn body_preview(body: &str) -> String {
    let head: String = body.chars().take(PREVIEW_CHARS).collect();
    let mut preview = head.replace('\n', " ").trim().to_string();
    if body.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}
