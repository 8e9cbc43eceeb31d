//! Typed bookmark dataset: categories, items and passthrough fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clock::format_timestamp;
use crate::level::Level;

/// Untyped JSON object; used for passthrough fields and generic records.
pub type Record = serde_json::Map<String, Value>;

/// A bookmark category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: Level,
    /// Fields the core does not interpret (e.g. `icon`), kept verbatim.
    #[serde(flatten)]
    pub extra: Record,
}

impl Category {
    pub fn icon(&self) -> Option<&str> {
        self.extra.get("icon").and_then(Value::as_str)
    }
}

/// A bookmark. `url` is always in canonical form once normalized.
///
/// Auxiliary fields (`description`, `tags`, `clickCount`, `lastVisited`,
/// `pinned`, and anything unknown) live in `extra` untouched; the accessors
/// below read them leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub url: String,
    #[serde(rename = "categoryId", default)]
    pub category_id: i64,
    #[serde(default)]
    pub level: Level,
    #[serde(flatten)]
    pub extra: Record,
}

impl Item {
    pub fn description(&self) -> Option<&str> {
        self.extra.get("description").and_then(Value::as_str)
    }

    /// String tags; non-string entries are ignored.
    pub fn tags(&self) -> Vec<&str> {
        self.extra
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn click_count(&self) -> u64 {
        match self.extra.get("clickCount") {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Raw `lastVisited` value when it is a non-empty string.
    pub fn last_visited(&self) -> Option<&str> {
        self.extra
            .get("lastVisited")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// `lastVisited` parsed as an RFC 3339 timestamp.
    pub fn last_visited_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_visited()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }

    pub fn pinned(&self) -> bool {
        self.extra
            .get("pinned")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Records one visit at `now`.
    pub fn record_visit(&mut self, now: DateTime<Utc>) {
        let count = self.click_count().saturating_add(1);
        self.extra.insert("clickCount".into(), Value::from(count));
        self.extra
            .insert("lastVisited".into(), Value::String(format_timestamp(now)));
    }
}

/// One user's bookmark document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub items: Vec<Item>,
    /// Top-level fields other than `categories` / `items`.
    #[serde(flatten)]
    pub extra: Record,
}

impl Dataset {
    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn item(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn next_category_id(&self) -> i64 {
        self.categories.iter().map(|c| c.id).fold(0, i64::max) + 1
    }

    pub fn next_item_id(&self) -> i64 {
        self.items.iter().map(|i| i.id).fold(0, i64::max) + 1
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
