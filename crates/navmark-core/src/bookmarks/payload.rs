//! Request shapes accepted by the bookmark service.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::level::Level;

/// Body of a whole-dataset save.
///
/// Accepts both `{ "content": { "categories": [...], "items": [...] } }` and
/// the extension's bare `{ "categories": [...], "items": [...] }`. Missing
/// arrays are treated as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavePayload {
    pub categories: Value,
    pub items: Value,
    /// Free-form description of what the client did; only logged.
    pub action: Option<String>,
}

impl SavePayload {
    pub fn from_request(body: Value) -> Self {
        let Value::Object(mut body) = body else {
            return Self::default();
        };
        let mut payload = match body.remove("content") {
            Some(Value::Object(content)) => content,
            _ => body,
        };
        Self {
            categories: payload.remove("categories").unwrap_or(Value::Null),
            items: payload.remove("items").unwrap_or(Value::Null),
            action: payload
                .get("action")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// The raw dataset to normalize; only `categories` and `items` are kept.
    pub fn into_raw(self) -> Value {
        let or_empty = |v: Value| if v.is_null() { json!([]) } else { v };
        json!({
            "categories": or_empty(self.categories),
            "items": or_empty(self.items),
        })
    }
}

/// A bookmark submitted by the browser extension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "minLevel")]
    pub level: Level,
}

/// A category submitted by the browser extension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, alias = "minLevel")]
    pub level: Level,
}
