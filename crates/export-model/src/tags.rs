//! File tag normalization.

/// Tag that marks every file shared through the exporter.
pub const SENTINEL_TAG: &str = "Grasshopper";

/// Normalize the raw tag input of an export.
///
/// - no tags: one tag per whitespace-separated word of `file_name`
/// - a single string: split on `,`, else `;`, else newlines
/// - several strings: taken as-is
///
/// Every tag is trimmed and empty tags are dropped. The result contains
/// [`SENTINEL_TAG`] exactly once (compared case-insensitively); it is
/// appended when missing.
pub fn normalize_tags(raw_tags: &[String], file_name: &str) -> Vec<String> {
    let split: Vec<String> = match raw_tags {
        [] => file_name.split_whitespace().map(str::to_string).collect(),
        [single] => split_single(single),
        many => many.to_vec(),
    };

    let mut seen_sentinel = false;
    let mut tags: Vec<String> = split
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| {
            if is_sentinel(tag) {
                let first = !seen_sentinel;
                seen_sentinel = true;
                first
            } else {
                true
            }
        })
        .map(str::to_string)
        .collect();

    if !seen_sentinel {
        tags.push(SENTINEL_TAG.to_string());
    }
    tags
}

/// Whether `tag` is the sentinel tag, ignoring case.
pub fn is_sentinel(tag: &str) -> bool {
    tag.trim().eq_ignore_ascii_case(SENTINEL_TAG)
}

fn split_single(raw: &str) -> Vec<String> {
    let separator = if raw.contains(',') {
        ','
    } else if raw.contains(';') {
        ';'
    } else {
        '\n'
    };
    raw.split(separator).map(str::to_string).collect()
}
