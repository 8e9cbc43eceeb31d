//! Free-text sanitization for names, descriptions and usernames.

/// Default cap applied by [`sanitize_text`] callers that have no better limit.
pub const DEFAULT_MAX_TEXT_LEN: usize = 1000;

/// Trims, removes C0/C1 control characters and truncates to `max_len` chars.
pub fn sanitize_text(text: &str, max_len: usize) -> String {
    text.trim()
        .chars()
        .filter(|c| !matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}'))
        .take(max_len)
        .collect()
}

/// Usernames are 3-20 ASCII letters, digits or underscores.
pub fn is_valid_username(username: &str) -> bool {
    (3..=20).contains(&username.len())
        && username
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
