//! Recycle bin (soft delete) shared by all users.
//!
//! Entries are deleted items stamped with `deletedAt` / `deletedBy`, stored in
//! [`TRASH_DOCUMENT`]. Restoring puts an item back into a user's dataset,
//! re-numbering it when its id is already taken there.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::bookmarks::BookmarkService;
use crate::clock::{format_timestamp, Clock};
use crate::dataset::{normalize_item, Item};
use crate::error::{NavError, NavResult};
use crate::store::{DocumentStore, TRASH_DOCUMENT};

const DELETED_AT: &str = "deletedAt";
const DELETED_BY: &str = "deletedBy";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrashEntry {
    #[serde(flatten)]
    pub item: Item,
    #[serde(rename = "deletedAt")]
    pub deleted_at: String,
    #[serde(rename = "deletedBy")]
    pub deleted_by: String,
}

impl TrashEntry {
    /// Parses one stored entry; entries whose item does not normalize are
    /// skipped.
    fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut record) = value else {
            return None;
        };
        let mut take = |key: &str| match record.remove(key) {
            Some(Value::String(s)) => s,
            _ => String::new(),
        };
        let deleted_at = take(DELETED_AT);
        let deleted_by = take(DELETED_BY);
        let item = normalize_item(Value::Object(record))?;
        Some(Self {
            item,
            deleted_at,
            deleted_by,
        })
    }
}

impl<S: DocumentStore, C: Clock> BookmarkService<S, C> {
    fn read_trash(&self) -> Vec<TrashEntry> {
        match self.store.read(Path::new(TRASH_DOCUMENT), Value::Array(Vec::new())) {
            Value::Array(entries) => entries.into_iter().filter_map(TrashEntry::from_value).collect(),
            _ => {
                tracing::warn!("trash document is not an array; treating as empty");
                Vec::new()
            }
        }
    }

    fn write_trash(&self, entries: &[TrashEntry]) -> NavResult<()> {
        let value = serde_json::to_value(entries)?;
        self.store.write(Path::new(TRASH_DOCUMENT), &value)
    }

    /// Stamps `item` and appends it to the bin.
    pub fn move_to_trash(&self, username: &str, item: &Item) -> NavResult<()> {
        let mut entries = self.read_trash();
        entries.push(TrashEntry {
            item: item.clone(),
            deleted_at: format_timestamp(self.clock.now()),
            deleted_by: username.to_string(),
        });
        self.write_trash(&entries)?;
        tracing::info!(user = username, id = item.id, name = %item.name, "moved to trash");
        Ok(())
    }

    pub fn list_trash(&self) -> Vec<TrashEntry> {
        self.read_trash()
    }

    /// Moves the first bin entry with `item_id` back into `username`'s
    /// dataset and returns the restored item (with its possibly new id).
    pub fn restore(&self, item_id: i64, username: &str) -> NavResult<Item> {
        let mut entries = self.read_trash();
        let index = entries
            .iter()
            .position(|e| e.item.id == item_id)
            .ok_or(NavError::TrashEntryNotFound(item_id))?;
        let mut item = entries.remove(index).item;

        let mut dataset = self.load(username)?;
        if dataset.item(item.id).is_some() {
            item.id = dataset.next_item_id();
        }
        dataset.items.push(item.clone());
        self.persist(username, &dataset)?;
        self.write_trash(&entries)?;

        tracing::info!(user = username, id = item.id, name = %item.name, "restored from trash");
        Ok(item)
    }

    pub fn permanent_delete(&self, item_id: i64) -> NavResult<()> {
        let mut entries = self.read_trash();
        let index = entries
            .iter()
            .position(|e| e.item.id == item_id)
            .ok_or(NavError::TrashEntryNotFound(item_id))?;
        entries.remove(index);
        self.write_trash(&entries)?;
        tracing::info!(id = item_id, "permanently deleted");
        Ok(())
    }

    /// Clears the bin; returns how many entries were discarded.
    pub fn empty_trash(&self) -> NavResult<usize> {
        let count = self.read_trash().len();
        self.write_trash(&[])?;
        tracing::info!(count, "trash emptied");
        Ok(count)
    }
}
