use std::collections::HashSet;

use crate::models::DeadlineTemplate;

/// Titles that describe the course calendar rather than a deliverable.
const GENERIC_TITLE_TERMS: &[&str] = &["class meeting", "office hours", "lecture"];

/// Bare week labels the extraction service sometimes emits for schedule rows.
const WEEK_LABEL_TERMS: &[&str] = &["week 1", "week 2", "week 3", "week 4", "week 5"];

/// Characters of the lowercased title that participate in the dedup key.
const DEDUP_TITLE_CHARS: usize = 30;

/// Filter low-quality and duplicate deadline records.
///
/// Order-preserving and pure: records are accepted with their fields
/// untouched. A record is rejected by the first matching rule — missing
/// date, generic title, bare week label, or a title+date pair already seen
/// in this call.
pub fn validate_deadlines(records: Vec<DeadlineTemplate>) -> Vec<DeadlineTemplate> {
    let mut validated = Vec::with_capacity(records.len());
    let mut seen_keys: HashSet<String> = HashSet::new();

    for record in records {
        let title = record
            .title
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .trim()
            .to_string();
        let date = record.date.as_deref().unwrap_or("");

        if date.is_empty() || date == "null" {
            tracing::debug!(title = %title, "skipping deadline with no date");
            continue;
        }

        if GENERIC_TITLE_TERMS.iter().any(|t| title.contains(t)) {
            tracing::debug!(title = %title, "skipping generic deadline");
            continue;
        }

        if WEEK_LABEL_TERMS.iter().any(|t| title.contains(t)) {
            tracing::debug!(title = %title, "skipping week entry");
            continue;
        }

        let key_prefix: String = title.chars().take(DEDUP_TITLE_CHARS).collect();
        let key = format!("{key_prefix}_{date}");
        if !seen_keys.insert(key) {
            tracing::debug!(title = %title, date = %date, "skipping duplicate deadline");
            continue;
        }

        validated.push(record);
    }

    validated
}
