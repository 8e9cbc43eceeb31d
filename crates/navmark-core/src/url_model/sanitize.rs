//! Raw-input cleanup ahead of URL parsing.

/// Schemes accepted as-is; anything else carrying `://` is refused.
const ALLOWED_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Zero-width characters used to obfuscate hosts (ZWSP, ZWNJ, ZWJ, BOM).
fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

/// C0 (U+0000..U+001F) and C1 (U+007F..U+009F) control characters.
fn is_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}')
}

/// Removes zero-width and control characters anywhere in `raw`, then trims
/// surrounding whitespace.
pub fn strip_invisible(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if is_zero_width(c) || is_control(c) {
            continue;
        }
        out.push(c);
    }
    out.trim().to_string()
}

/// Ensures `candidate` carries an `http://` or `https://` prefix.
///
/// - already `http(s)://` (any case): returned unchanged
/// - some other `scheme://`: `None`
/// - no scheme at all: `https://` is prepended
pub fn complete_scheme(candidate: &str) -> Option<String> {
    if has_allowed_prefix(candidate) {
        return Some(candidate.to_string());
    }
    if candidate.contains("://") {
        return None;
    }
    Some(format!("https://{candidate}"))
}

fn has_allowed_prefix(s: &str) -> bool {
    ALLOWED_PREFIXES.iter().any(|prefix| {
        s.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
