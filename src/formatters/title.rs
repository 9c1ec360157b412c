//! Title truncation for the book table.

/// Titles longer than this (in characters) are cut.
pub const TITLE_MAX_CHARS: usize = 30;

/// Marker appended to a cut title.
pub const ELLIPSIS: &str = "...";

/// Keep the table narrow: first `TITLE_MAX_CHARS` characters plus "...".
///
/// Counts chars, not bytes or display columns, so a wide CJK title still
/// takes more room on screen than a Latin one.
pub fn truncate_title(title: &str) -> String {
    match title.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &title[..cut], ELLIPSIS),
        None => title.to_string(),
    }
}
