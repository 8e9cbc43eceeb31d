//! Path canonicalization for bookmark URLs.

/// Canonicalizes a serialized URL path.
///
/// - Repeated `/` collapse into one
/// - A path made only of `.` and `/` becomes `/`
/// - One trailing `/` is dropped unless the path is the root
pub fn canonical_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push('/');
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }

    if !out.is_empty() && out.chars().all(|c| c == '.' || c == '/') {
        return "/".to_string();
    }

    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_repeated_slashes() {
        assert_eq!(canonical_path("//a///b//c"), "/a/b/c");
    }

    #[test]
    fn dots_and_slashes_become_root() {
        assert_eq!(canonical_path("/..."), "/");
        assert_eq!(canonical_path("/./.././/"), "/");
    }

    #[test]
    fn trailing_slash() {
        assert_eq!(canonical_path("/path/"), "/path");
        assert_eq!(canonical_path("/path//"), "/path");
        assert_eq!(canonical_path("/"), "/");
        assert_eq!(canonical_path("/Mixed/Case"), "/Mixed/Case");
    }
}
