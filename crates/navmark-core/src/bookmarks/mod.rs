//! Bookmark service: the read/write paths around the normalizer and filter.
//!
//! Every read normalizes the stored document before use (stored data may
//! predate the current schema); every write normalizes before persisting.

mod payload;
mod search;

pub use payload::{NewCategory, NewItem, SavePayload};
pub use search::{CategorySummary, SearchHit};

use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::clock::{Clock, SystemClock};
use crate::dataset::{normalize_data, Category, Dataset, Item};
use crate::error::{NavError, NavResult};
use crate::level::Level;
use crate::store::{user_document, DocumentStore};
use crate::text::{sanitize_text, DEFAULT_MAX_TEXT_LEN};
use crate::url_model::normalize_url;

const UNTITLED_ITEM: &str = "Untitled";

/// Per-user bookmark operations over a [`DocumentStore`].
pub struct BookmarkService<S, C = SystemClock> {
    pub(crate) store: S,
    pub(crate) clock: C,
    admin_username: String,
    max_text_len: usize,
}

impl<S: DocumentStore> BookmarkService<S, SystemClock> {
    pub fn new(store: S, admin_username: impl Into<String>) -> Self {
        Self::with_clock(store, admin_username, SystemClock)
    }
}

impl<S: DocumentStore, C: Clock> BookmarkService<S, C> {
    pub fn with_clock(store: S, admin_username: impl Into<String>, clock: C) -> Self {
        Self {
            store,
            clock,
            admin_username: admin_username.into(),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }

    /// Caps names and descriptions submitted through `add_item` / `add_category`.
    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn document(&self, username: &str) -> NavResult<PathBuf> {
        user_document(username, &self.admin_username)
    }

    /// Reads and normalizes a user's full dataset (no visibility filter).
    pub fn load(&self, username: &str) -> NavResult<Dataset> {
        let doc = self.document(username)?;
        let raw = self
            .store
            .read(&doc, json!({ "categories": [], "items": [] }));
        Ok(normalize_data(raw))
    }

    pub(crate) fn persist(&self, username: &str, dataset: &Dataset) -> NavResult<()> {
        let doc = self.document(username)?;
        self.store.write(&doc, &dataset.to_value()?)
    }

    /// What a visitor at `visitor` may see of `username`'s bookmarks.
    pub fn get_data(&self, username: &str, visitor: Level) -> NavResult<Dataset> {
        Ok(self.load(username)?.visible_to(visitor))
    }

    /// Replaces `username`'s dataset with the normalized payload.
    pub fn save_data(&self, username: &str, payload: SavePayload) -> NavResult<Dataset> {
        let action = payload.action.clone();
        let dataset = normalize_data(payload.into_raw());
        self.persist(username, &dataset)?;
        tracing::info!(
            user = username,
            action = action.as_deref().unwrap_or("save"),
            categories = dataset.categories.len(),
            items = dataset.items.len(),
            "data saved"
        );
        Ok(dataset)
    }

    /// Bumps `clickCount` and stamps `lastVisited` on one item.
    pub fn track_click(&self, username: &str, item_id: i64) -> NavResult<Item> {
        let mut dataset = self.load(username)?;
        let item = dataset
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(NavError::ItemNotFound(item_id))?;
        item.record_visit(self.clock.now());
        let updated = item.clone();
        self.persist(username, &dataset)?;
        Ok(updated)
    }

    /// Appends a new bookmark with the next free id.
    pub fn add_item(&self, username: &str, new: NewItem) -> NavResult<Item> {
        let url = normalize_url(&new.url);
        if url.is_empty() {
            return Err(NavError::InvalidUrl(new.url));
        }

        let mut dataset = self.load(username)?;
        let name = new
            .name
            .as_deref()
            .map(|n| sanitize_text(n, self.max_text_len))
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNTITLED_ITEM.to_string());
        let description = new
            .description
            .as_deref()
            .map(|d| sanitize_text(d, self.max_text_len))
            .unwrap_or_default();

        let mut extra = Map::new();
        extra.insert("description".into(), Value::String(description));
        extra.insert("pinned".into(), Value::Bool(false));
        extra.insert("clickCount".into(), Value::from(0u64));
        extra.insert("lastVisited".into(), Value::Null);
        extra.insert("tags".into(), json!(new.tags));

        let item = Item {
            id: dataset.next_item_id(),
            name,
            url,
            category_id: new.category_id,
            level: new.level,
            extra,
        };
        dataset.items.push(item.clone());
        self.persist(username, &dataset)?;
        tracing::info!(user = username, id = item.id, url = %item.url, "bookmark added");
        Ok(item)
    }

    /// Appends a new category with the next free id.
    pub fn add_category(&self, username: &str, new: NewCategory) -> NavResult<Category> {
        let name = sanitize_text(&new.name, self.max_text_len);
        if name.is_empty() {
            return Err(NavError::InvalidName);
        }

        let mut dataset = self.load(username)?;
        let mut extra = Map::new();
        extra.insert(
            "icon".into(),
            Value::String(new.icon.unwrap_or_default()),
        );
        let category = Category {
            id: dataset.next_category_id(),
            name,
            level: new.level,
            extra,
        };
        dataset.categories.push(category.clone());
        self.persist(username, &dataset)?;
        tracing::info!(user = username, id = category.id, name = %category.name, "category added");
        Ok(category)
    }

    /// Looks up an existing bookmark for `url` (case-insensitive).
    ///
    /// The query is normalized first so `EXAMPLE.com/a/` matches a stored
    /// `https://example.com/a`; input that does not normalize is compared as
    /// typed.
    pub fn check_url(&self, username: &str, url: &str) -> NavResult<Option<Item>> {
        let normalized = normalize_url(url);
        let target = if normalized.is_empty() {
            url.trim().to_lowercase()
        } else {
            normalized.to_lowercase()
        };
        let dataset = self.load(username)?;
        Ok(dataset
            .items
            .into_iter()
            .find(|item| item.url.trim().to_lowercase() == target))
    }

    /// Moves an item to the recycle bin, then removes it from the dataset.
    ///
    /// The bin is written first: if the dataset write then fails the item is
    /// in both places, never in neither.
    pub fn delete_item(&self, username: &str, item_id: i64) -> NavResult<Item> {
        let mut dataset = self.load(username)?;
        let index = dataset
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(NavError::ItemNotFound(item_id))?;
        let item = dataset.items.remove(index);
        self.move_to_trash(username, &item)?;
        self.persist(username, &dataset)?;
        Ok(item)
    }

    /// Gives duplicate item ids fresh ones (first occurrence keeps its id).
    /// Returns how many items were re-numbered; nothing is written when none
    /// were.
    pub fn repair_ids(&self, username: &str) -> NavResult<usize> {
        let mut dataset = self.load(username)?;
        let mut next_id = dataset.next_item_id();
        let mut seen = HashSet::new();
        let mut repaired = 0;
        for item in &mut dataset.items {
            if !seen.insert(item.id) {
                tracing::debug!(old = item.id, new = next_id, "re-numbering duplicate item id");
                item.id = next_id;
                seen.insert(next_id);
                next_id += 1;
                repaired += 1;
            }
        }

        let mut category_ids = HashSet::new();
        for category in &dataset.categories {
            if !category_ids.insert(category.id) {
                tracing::warn!(id = category.id, "duplicate category id left as-is");
            }
        }

        if repaired > 0 {
            self.persist(username, &dataset)?;
            tracing::info!(user = username, repaired, "repaired duplicate item ids");
        }
        Ok(repaired)
    }
}

#[cfg(test)]
mod tests;
