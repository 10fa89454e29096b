pub const ELLIPSIS: &str = "...";

#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let Some((clip_idx, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let mut out = text[..clip_idx].to_string();
    out.push_str(ELLIPSIS);
    out
}

/// Clips `text` so the result, ellipsis included, stays within `limit`
/// characters. Text already within `limit` is returned untouched.
#[must_use]
pub fn clip_to_limit(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    truncate_text(text, limit.saturating_sub(ELLIPSIS.len()))
}

#[must_use]
pub fn normalize_search_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}
