//! Shared fixtures: a legacy-shaped document and a service over a temp dir.

use chrono::{TimeZone, Utc};
use navmark_core::bookmarks::BookmarkService;
use navmark_core::clock::FixedClock;
use navmark_core::store::JsonFileStore;
use serde_json::{json, Value};
use std::path::Path;

pub type TestService = BookmarkService<JsonFileStore, FixedClock>;

pub fn service(dir: &Path) -> TestService {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap());
    BookmarkService::with_clock(JsonFileStore::new(dir), "admin", clock)
}

/// A document as older versions stored it: string ids, `private` flags,
/// unnormalized and hostile URLs.
pub fn legacy_document() -> Value {
    json!({
        "categories": [
            { "id": "1", "name": "Public", "icon": "globe" },
            { "id": "2", "name": "Members", "private": true },
            { "id": 3, "name": "Staff", "level": 3 }
        ],
        "items": [
            { "id": "1", "name": "Home", "url": " Example.COM ", "categoryId": "1" },
            { "id": "2", "name": "XSS", "url": "javascript:alert(document.cookie)", "categoryId": "1" },
            { "id": "3", "name": "Forum", "url": "forum.example.com/t/1/?utm_campaign=x&page=2",
              "categoryId": "2", "clickCount": 4 },
            { "id": "4", "name": "Secret", "url": "https://intra.example.com//admin/", "categoryId": 3,
              "private": true },
            { "id": "5", "name": "Hidden item", "url": "https://example.com/h", "categoryId": "1",
              "level": 2 },
            { "id": "6", "name": "FTP", "url": "ftp://files.example.com", "categoryId": "1" }
        ]
    })
}
