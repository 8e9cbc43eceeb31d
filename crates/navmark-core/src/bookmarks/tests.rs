use super::*;
use crate::clock::FixedClock;
use crate::store::JsonFileStore;
use chrono::{TimeZone, Utc};
use std::path::Path;
use tempfile::tempdir;

type Svc = BookmarkService<JsonFileStore, FixedClock>;

fn service_at(dir: &Path, hour: u32) -> Svc {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap());
    BookmarkService::with_clock(JsonFileStore::new(dir), "admin", clock)
}

fn seed(svc: &Svc, user: &str) {
    svc.save_data(
        user,
        SavePayload::from_request(json!({
            "content": {
                "categories": [
                    { "id": 1, "name": "Dev", "level": 0 },
                    { "id": 2, "name": "Secret", "private": true }
                ],
                "items": [
                    { "id": 1, "name": "Rust", "url": "rust-lang.org/learn/", "categoryId": 1,
                      "description": "The book", "tags": ["lang"] },
                    { "id": 2, "name": "Evil", "url": "javascript:alert(1)", "categoryId": 1 },
                    { "id": 3, "name": "Vault", "url": "https://vault.example.com/?utm_source=mail",
                      "categoryId": "2" },
                    { "id": 4, "name": "Crates", "url": "https://crates.io", "categoryId": 1,
                      "level": 2, "tags": ["registry", "LANG-adjacent"] }
                ]
            }
        })),
    )
    .unwrap();
}

#[test]
fn save_normalizes_before_persisting() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    seed(&svc, "admin");

    let stored = svc.store().read(Path::new("data.json"), json!(null));
    let urls: Vec<&str> = stored["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["url"].as_str().unwrap())
        .collect();
    assert_eq!(
        urls,
        vec![
            "https://rust-lang.org/learn",
            "https://vault.example.com/",
            "https://crates.io/"
        ]
    );
    assert_eq!(stored["categories"][1]["level"], json!(1));
    assert!(stored["categories"][1].get("private").is_none());
    assert_eq!(stored["items"][1]["categoryId"], json!(2));
}

#[test]
fn get_data_filters_by_level() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    seed(&svc, "admin");

    let guest = svc.get_data("admin", Level::Guest).unwrap();
    assert_eq!(guest.categories.len(), 1);
    let guest_ids: Vec<i64> = guest.items.iter().map(|i| i.id).collect();
    assert_eq!(guest_ids, vec![1]);

    let vip = svc.get_data("admin", Level::Vip).unwrap();
    let vip_ids: Vec<i64> = vip.items.iter().map(|i| i.id).collect();
    assert_eq!(vip_ids, vec![1, 3, 4]);
}

#[test]
fn get_data_renormalizes_legacy_documents() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("data.json"),
        serde_json::to_vec(&json!({
            "categories": [{ "id": "1", "name": "Old", "private": true }],
            "items": [
                { "id": "7", "url": "OLD.example.com//x/", "categoryId": "1" },
                { "id": "8", "url": "vbscript:msgbox", "categoryId": "1" }
            ]
        }))
        .unwrap(),
    )
    .unwrap();
    let svc = service_at(dir.path(), 8);

    assert!(svc.get_data("admin", Level::Guest).unwrap().categories.is_empty());
    let user_view = svc.get_data("admin", Level::User).unwrap();
    assert_eq!(user_view.items.len(), 1);
    assert_eq!(user_view.items[0].id, 7);
    assert_eq!(user_view.items[0].url, "https://old.example.com/x");
}

#[test]
fn unknown_user_reads_empty_dataset() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    let data = svc.get_data("nobody", Level::Admin).unwrap();
    assert!(data.categories.is_empty() && data.items.is_empty());
}

#[test]
fn invalid_username_is_rejected() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    assert!(matches!(
        svc.get_data("../admin", Level::Guest),
        Err(NavError::InvalidUsername(_))
    ));
}

#[test]
fn track_click_updates_counters() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 9);
    seed(&svc, "alice");

    let item = svc.track_click("alice", 1).unwrap();
    assert_eq!(item.click_count(), 1);
    assert_eq!(item.last_visited(), Some("2024-06-01T09:00:00.000Z"));

    let again = svc.track_click("alice", 1).unwrap();
    assert_eq!(again.click_count(), 2);

    assert!(matches!(
        svc.track_click("alice", 99),
        Err(NavError::ItemNotFound(99))
    ));
}

#[test]
fn add_item_assigns_next_id_and_defaults() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    seed(&svc, "admin");

    let item = svc
        .add_item(
            "admin",
            NewItem {
                name: Some("  ".into()),
                url: "Docs.RS/?fbclid=abc".into(),
                category_id: 1,
                tags: vec!["docs".into()],
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(item.id, 5);
    assert_eq!(item.name, "Untitled");
    assert_eq!(item.url, "https://docs.rs/");
    assert_eq!(item.click_count(), 0);
    assert_eq!(item.tags(), vec!["docs"]);
    assert!(!item.pinned());
    assert_eq!(svc.load("admin").unwrap().items.len(), 4);
}

#[test]
fn add_item_rejects_unsafe_url() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    let err = svc
        .add_item(
            "admin",
            NewItem {
                url: "javascript:alert(document.cookie)".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, NavError::InvalidUrl(_)));
    assert!(svc.load("admin").unwrap().items.is_empty());
}

#[test]
fn add_category_validates_name() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    seed(&svc, "admin");

    assert!(matches!(
        svc.add_category("admin", NewCategory { name: " \t ".into(), ..Default::default() }),
        Err(NavError::InvalidName)
    ));

    let cat = svc
        .add_category(
            "admin",
            NewCategory {
                name: "  Tools ".into(),
                icon: Some("wrench".into()),
                level: Level::User,
            },
        )
        .unwrap();
    assert_eq!(cat.id, 3);
    assert_eq!(cat.name, "Tools");
    assert_eq!(cat.icon(), Some("wrench"));
}

#[test]
fn check_url_matches_normalized_form() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    seed(&svc, "admin");

    let hit = svc.check_url("admin", "RUST-LANG.org/learn/?utm_medium=x").unwrap();
    assert_eq!(hit.map(|i| i.id), Some(1));
    assert!(svc.check_url("admin", "https://unknown.example").unwrap().is_none());
    assert!(svc.check_url("admin", "not a url at all ::").unwrap().is_none());
}

#[test]
fn search_matches_fields_case_insensitively() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    seed(&svc, "admin");

    let by_tag: Vec<i64> = svc.search("admin", "Lang", 10).unwrap().iter().map(|h| h.id).collect();
    assert_eq!(by_tag, vec![1, 4]);

    let by_desc = svc.search("admin", "BOOK", 10).unwrap();
    assert_eq!(by_desc.len(), 1);
    assert_eq!(by_desc[0].category_name, "Dev");
    assert_eq!(by_desc[0].description.as_deref(), Some("The book"));

    assert_eq!(svc.search("admin", "crates.io", 10).unwrap().len(), 1);
    assert_eq!(svc.search("admin", "lang", 1).unwrap().len(), 1);
}

#[test]
fn empty_search_lists_recent_visits_first() {
    let dir = tempdir().unwrap();
    seed(&service_at(dir.path(), 8), "admin");

    service_at(dir.path(), 8).track_click("admin", 4).unwrap();
    service_at(dir.path(), 10).track_click("admin", 3).unwrap();

    let ids: Vec<i64> = service_at(dir.path(), 11)
        .search("admin", "", 10)
        .unwrap()
        .iter()
        .map(|h| h.id)
        .collect();
    assert_eq!(ids, vec![3, 4, 1]);
}

#[test]
fn search_labels_orphans() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    svc.save_data(
        "admin",
        SavePayload::from_request(json!({
            "items": [{ "id": 1, "name": "Lost", "url": "lost.example", "categoryId": 42 }]
        })),
    )
    .unwrap();
    let hits = svc.search("admin", "lost", 10).unwrap();
    assert_eq!(hits[0].category_name, search::UNCATEGORIZED);
}

#[test]
fn categories_lists_id_and_name() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    seed(&svc, "admin");
    let cats = svc.categories("admin").unwrap();
    assert_eq!(
        cats,
        vec![
            CategorySummary { id: 1, name: "Dev".into() },
            CategorySummary { id: 2, name: "Secret".into() },
        ]
    );
}

#[test]
fn repair_ids_renumbers_duplicates() {
    let dir = tempdir().unwrap();
    let svc = service_at(dir.path(), 8);
    svc.save_data(
        "admin",
        SavePayload::from_request(json!({
            "categories": [{ "id": 1, "name": "A" }],
            "items": [
                { "id": 1, "url": "a.com", "categoryId": 1 },
                { "id": "1", "url": "b.com", "categoryId": 1 },
                { "id": 3, "url": "c.com", "categoryId": 1 },
                { "id": "x", "url": "d.com", "categoryId": 1 },
                { "id": 0, "url": "e.com", "categoryId": 1 }
            ]
        })),
    )
    .unwrap();

    assert_eq!(svc.repair_ids("admin").unwrap(), 2);
    let ids: Vec<i64> = svc.load("admin").unwrap().items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 4, 3, 0, 5]);
    assert_eq!(svc.repair_ids("admin").unwrap(), 0);
}
