//! Tracking-parameter deny-list.

use url::Url;

/// Query keys removed from every bookmark URL. Matching is exact and
/// case-sensitive.
pub const TRACKING_PARAMS: &[&str] = &[
    // Google / general marketing
    "utm_source", "utm_medium", "utm_campaign", "utm_term", "utm_content",
    "gclid", "gclsrc", "dclid", "gra",
    // Facebook / Instagram
    "fbclid", "igsh",
    // Alibaba
    "spm", "scm", "ali_trackid",
    // Bilibili
    "spm_id_from", "vd_source", "share_source", "share_medium", "share_plat",
    "share_tag", "bbid", "ts",
    // WeChat
    "from", "isappinstalled", "wechat_redirect",
    // Douyin / TikTok
    "iid", "aid",
    // Zhihu
    "utm_id", "context_token",
    // Misc
    "ref", "source", "feature", "trk", "si", "yclid", "_openstat",
];

pub fn is_tracking_param(name: &str) -> bool {
    TRACKING_PARAMS.contains(&name)
}

/// Drops every deny-listed pair from the query and re-serializes the rest as
/// `application/x-www-form-urlencoded`. An empty result clears the query.
pub(super) fn strip_tracking_params(url: &mut Url) {
    if url.query().is_none() {
        return;
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !is_tracking_param(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(raw: &str) -> String {
        let mut url = Url::parse(raw).unwrap();
        strip_tracking_params(&mut url);
        url.to_string()
    }

    #[test]
    fn removes_all_listed_keys_in_any_order() {
        assert_eq!(
            strip("https://a.com/p?fbclid=x&q=rust&utm_medium=m&spm=1.2&page=2&gclid=z"),
            "https://a.com/p?q=rust&page=2"
        );
    }

    #[test]
    fn removes_repeated_keys() {
        assert_eq!(strip("https://a.com/?ref=a&ref=b&id=1"), "https://a.com/?id=1");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            strip("https://a.com/?UTM_SOURCE=x&Ref=y"),
            "https://a.com/?UTM_SOURCE=x&Ref=y"
        );
    }

    #[test]
    fn all_tracking_clears_query() {
        assert_eq!(strip("https://a.com/p?utm_source=a&utm_campaign=b"), "https://a.com/p");
    }

    #[test]
    fn deny_list_lookup() {
        assert!(is_tracking_param("utm_source"));
        assert!(is_tracking_param("_openstat"));
        assert!(!is_tracking_param("id"));
        assert!(!is_tracking_param("utm_SOURCE"));
    }
}
