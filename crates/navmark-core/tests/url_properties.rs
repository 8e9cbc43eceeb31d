//! Property tests for the URL normalizer and the visibility filter.

use navmark_core::dataset::{filter_visible, normalize_data};
use navmark_core::{normalize_url, Level};
use proptest::prelude::*;
use serde_json::json;

fn url_like() -> impl Strategy<Value = String> {
    "(https?://)?[a-zA-Z0-9-]{1,12}(\\.[a-zA-Z]{2,6}){0,2}\\.?(/[a-zA-Z0-9._~-]{0,8}){0,4}/?(\\?[a-z_]{1,8}=[a-z0-9]{0,5}(&[a-z_]{1,8}=[a-z0-9 ]{0,5}){0,3})?(#[a-z]{0,5})?"
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in url_like()) {
        let once = normalize_url(&raw);
        prop_assert_eq!(normalize_url(&once), once);
    }

    #[test]
    fn normalization_never_panics_and_is_deterministic(raw in any::<String>()) {
        let a = normalize_url(&raw);
        let b = normalize_url(&raw);
        prop_assert_eq!(&a, &b);
        prop_assert!(a.is_empty() || a.starts_with("http://") || a.starts_with("https://"));
    }

    #[test]
    fn normalized_urls_carry_no_tracking_keys(raw in url_like()) {
        let out = normalize_url(&raw);
        if let Ok(url) = url::Url::parse(&out) {
            for (key, _) in url.query_pairs() {
                prop_assert!(!navmark_core::url_model::is_tracking_param(&key));
            }
        }
    }

    #[test]
    fn filter_never_leaks_gated_items(
        cat_levels in prop::collection::vec(0i64..4, 1..6),
        items in prop::collection::vec((0i64..8, 0i64..4), 0..20),
        visitor in 0i64..4,
    ) {
        let categories: Vec<_> = cat_levels
            .iter()
            .enumerate()
            .map(|(i, level)| json!({ "id": i as i64, "name": "c", "level": level }))
            .collect();
        let items: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(i, (cat, level))| json!({
                "id": i as i64, "url": "example.com", "categoryId": cat, "level": level
            }))
            .collect();
        let data = normalize_data(json!({ "categories": categories, "items": items }));
        let visitor = Level::from_number(visitor);
        let view = filter_visible(&data, visitor);

        for item in &view.items {
            prop_assert!(item.level <= visitor);
            let cat = view.categories.iter().find(|c| c.id == item.category_id);
            prop_assert!(cat.is_some());
        }
        let expected = data
            .items
            .iter()
            .filter(|i| {
                i.level <= visitor
                    && data.categories.iter().any(|c| c.id == i.category_id && c.level <= visitor)
            })
            .count();
        prop_assert_eq!(view.items.len(), expected);
    }
}
