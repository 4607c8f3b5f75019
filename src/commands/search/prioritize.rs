use crate::infra::github::IssueRecord;

/// Move records mentioning `keyword` (case-insensitive, title or body) to the
/// front. Relative order inside both groups is kept.
pub fn prioritize(items: Vec<IssueRecord>, keyword: &str) -> Vec<IssueRecord> {
    let needle = keyword.to_lowercase();
    let (mut matched, others): (Vec<_>, Vec<_>) = items
        .into_iter()
        .partition(|item| mentions(item, &needle));
    matched.extend(others);
    matched
}

fn mentions(item: &IssueRecord, needle: &str) -> bool {
    let title = item.title.as_deref().unwrap_or("").to_lowercase();
    let body = item.body().to_lowercase();
    title.contains(needle) || body.contains(needle)
}
