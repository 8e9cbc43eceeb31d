//! URL normalization for stored bookmarks.
//!
//! Turns arbitrary user-supplied input into a canonical `http`/`https` URL or
//! rejects it. Rejection is signalled by an empty string so callers can treat
//! "no usable URL" uniformly; nothing in this module panics or returns errors.

mod path;
mod sanitize;
mod tracking;

pub use path::canonical_path;
pub use sanitize::{complete_scheme, strip_invisible};
pub use tracking::{is_tracking_param, TRACKING_PARAMS};

use url::Url;

/// Normalizes a raw bookmark URL.
///
/// Returns the canonical form, or `""` when the input cannot be made into a
/// safe `http`/`https` URL. The result is a fixed point: normalizing it again
/// yields the same string.
///
/// # Examples
///
/// - `normalize_url("example.com")` → `"https://example.com/"`
/// - `normalize_url("https://EXAMPLE.COM/Path/?utm_source=x")` → `"https://example.com/Path"`
/// - `normalize_url("javascript:alert(1)")` → `""`
pub fn normalize_url(input: &str) -> String {
    canonicalize(input).unwrap_or_default()
}

/// [`normalize_url`] for optional input; `None` normalizes to `""`.
pub fn normalize_url_opt(input: Option<&str>) -> String {
    input.map(normalize_url).unwrap_or_default()
}

fn canonicalize(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    let cleaned = strip_invisible(input);
    let candidate = complete_scheme(&cleaned)?;
    let mut url = Url::parse(&candidate).ok()?;

    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    canonical_host(&mut url)?;

    let path = canonical_path(url.path());
    if path != url.path() {
        url.set_path(&path);
    }

    tracking::strip_tracking_params(&mut url);

    if url.fragment() == Some("") {
        url.set_fragment(None);
    }

    // Strip every trailing `#`/`?`, not just one of each: a single pass would
    // leave `#a??` as `#a?`, which the next pass shortens again.
    let serialized = url.to_string();
    Some(serialized.trim_end_matches(&['#', '?'][..]).to_string())
}

/// Lower-cases the host and strips one trailing dot. Hosts containing an
/// empty label (`..`) are refused.
fn canonical_host(url: &mut Url) -> Option<()> {
    let host = url.host_str()?.to_lowercase();
    if host.contains("..") {
        return None;
    }

    let canonical = host.strip_suffix('.').unwrap_or(&host);
    if canonical.is_empty() {
        return None;
    }
    if url.host_str() != Some(canonical) {
        url.set_host(Some(canonical)).ok()?;
    }
    Some(())
}
