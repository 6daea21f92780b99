use lazy_static::*;
use regex::Regex;
use std::path::Path;

pub const ELLIPSIS: &str = "...";

lazy_static! {
    static ref UNSAFE_FILENAME_CHARACTERS: Regex =
        Regex::new(r"[^a-zA-Z0-9._-]").expect("Regex compilation error");
}

/// Shortens `text` to at most `max_length` characters. Truncated text ends
/// with [`ELLIPSIS`] and is exactly `max_length` characters long.
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_owned();
    }
    let kept = max_length.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(kept).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Replaces anything outside of `[a-zA-Z0-9._-]` with an underscore.
pub fn normalized_filename(filename: &str) -> String {
    UNSAFE_FILENAME_CHARACTERS
        .replace_all(filename, "_")
        .into_owned()
}

pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
