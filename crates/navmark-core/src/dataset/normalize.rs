//! Data normalization: ID coercion, URL sanitization and the `private` → `level`
//! migration, applied on every read and every write.
//!
//! Each entity kind has its own entry point returning `Option`; `None` means
//! the entity is unsalvageable (its URL failed normalization) and must be
//! dropped by the enclosing collection.

use serde_json::Value;

use super::types::{Category, Dataset, Item, Record};
use crate::level::Level;
use crate::url_model::normalize_url;

/// Coerces an id-like JSON value into an integer, the way JavaScript's
/// `Number()` would, with anything non-numeric mapped to `0`.
///
/// Fractional values are truncated toward zero.
pub fn normalize_id(value: &Value) -> i64 {
    let n = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => return i,
            None => n.as_f64().unwrap_or(f64::NAN),
        },
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    };
    if n.is_finite() {
        n.trunc() as i64
    } else {
        0
    }
}

/// Normalizes an arbitrary JSON value (generic record variant).
///
/// Scalars pass through; arrays drop elements whose normalization yields
/// `None`; objects go through [`normalize_record`].
pub fn normalize_value(value: Value) -> Option<Value> {
    match value {
        Value::Array(elements) => Some(Value::Array(normalize_array(elements))),
        Value::Object(record) => normalize_record(record).map(Value::Object),
        scalar => Some(scalar),
    }
}

fn normalize_array(elements: Vec<Value>) -> Vec<Value> {
    elements.into_iter().filter_map(normalize_value).collect()
}

/// Normalizes one JSON object. Returns `None` when it carries a string `url`
/// that does not survive [`normalize_url`].
///
/// The URL check runs before recursing into children so a rejected object is
/// discarded whole. A child object dropped in a non-array position becomes
/// `null`.
pub fn normalize_record(mut record: Record) -> Option<Record> {
    for key in ["id", "categoryId"] {
        if let Some(value) = record.get_mut(key) {
            *value = Value::from(normalize_id(value));
        }
    }

    if let Some(Value::String(raw)) = record.get("url") {
        let cleaned = normalize_url(raw);
        if cleaned.is_empty() {
            tracing::debug!(url = %raw, "dropping record with unsafe url");
            return None;
        }
        record.insert("url".into(), Value::String(cleaned));
    }

    migrate_private(&mut record);

    for child in record.values_mut() {
        if child.is_object() || child.is_array() {
            *child = normalize_value(child.take()).unwrap_or(Value::Null);
        }
    }
    Some(record)
}

/// One-way migration of the legacy `private` flag: `private: true` with no
/// (or zero) `level` becomes `level: 1`. `private` never survives.
fn migrate_private(record: &mut Record) {
    let was_private = record.remove("private") == Some(Value::Bool(true));
    if !was_private {
        return;
    }
    let unset = match record.get("level") {
        None => true,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    };
    if unset {
        record.insert("level".into(), Value::from(Level::User.as_u8()));
    }
}

/// Coerces a `level` value, erring toward less visibility.
///
/// Missing, `null`, `false` and `""` mean [`Level::Guest`]. Numbers (and
/// numeric strings) round up before clamping, so `1.5` needs a VIP visitor.
/// Anything else is unreadable and becomes [`Level::Admin`].
pub fn normalize_level(value: &Value) -> Level {
    let n = match value {
        Value::Null | Value::Bool(false) => return Level::Guest,
        Value::Bool(true) => return Level::User,
        Value::Number(n) => match n.as_i64() {
            Some(i) => return Level::from_number(i),
            None => n.as_f64().unwrap_or(f64::NAN),
        },
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Level::Guest;
            }
            s.parse::<f64>().unwrap_or(f64::NAN)
        }
        Value::Array(_) | Value::Object(_) => return Level::Admin,
    };
    if n.is_nan() {
        return Level::Admin;
    }
    let n = n.ceil();
    if n >= f64::from(Level::Admin.as_u8()) {
        Level::Admin
    } else {
        Level::from_number(n as i64)
    }
}

fn take_level(record: &mut Record) -> Level {
    record
        .remove("level")
        .map(|v| normalize_level(&v))
        .unwrap_or_default()
}

fn take_name(record: &mut Record) -> String {
    match record.remove("name") {
        Some(Value::String(s)) => s,
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

fn take_id(record: &mut Record, key: &str) -> i64 {
    record.remove(key).map(|v| normalize_id(&v)).unwrap_or(0)
}

/// Normalizes a raw category. Non-objects and categories with an unsafe
/// `url` field yield `None`.
pub fn normalize_category(raw: Value) -> Option<Category> {
    let Value::Object(record) = raw else {
        tracing::debug!("dropping non-object category entry");
        return None;
    };
    let mut record = normalize_record(record)?;
    Some(Category {
        id: take_id(&mut record, "id"),
        name: take_name(&mut record),
        level: take_level(&mut record),
        extra: record,
    })
}

/// Normalizes a raw item. Items without a string `url` that normalizes are
/// dropped.
pub fn normalize_item(raw: Value) -> Option<Item> {
    let Value::Object(record) = raw else {
        tracing::debug!("dropping non-object item entry");
        return None;
    };
    let mut record = normalize_record(record)?;
    let url = match record.remove("url") {
        Some(Value::String(url)) => url,
        _ => {
            tracing::debug!("dropping item without url");
            return None;
        }
    };
    Some(Item {
        id: take_id(&mut record, "id"),
        name: take_name(&mut record),
        url,
        category_id: take_id(&mut record, "categoryId"),
        level: take_level(&mut record),
        extra: record,
    })
}

fn collect_entities<T>(value: Option<Value>, normalize: fn(Value) -> Option<T>) -> Vec<T> {
    match value {
        Some(Value::Array(entries)) => entries.into_iter().filter_map(normalize).collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(_) => {
            tracing::warn!("expected an array of entities; ignoring");
            Vec::new()
        }
    }
}

/// Normalizes a whole stored or submitted dataset.
///
/// Anything that is not a JSON object yields an empty dataset. Top-level
/// fields other than `categories` and `items` are normalized as generic
/// values and kept.
pub fn normalize_data(raw: Value) -> Dataset {
    let mut record = match raw {
        Value::Object(record) => record,
        Value::Null => return Dataset::default(),
        _ => {
            tracing::warn!("dataset is not a JSON object; treating as empty");
            return Dataset::default();
        }
    };

    let categories = collect_entities(record.remove("categories"), normalize_category);
    let items = collect_entities(record.remove("items"), normalize_item);

    let mut extra = Record::new();
    for (key, value) in record {
        extra.insert(key, normalize_value(value).unwrap_or(Value::Null));
    }

    Dataset {
        categories,
        items,
        extra,
    }
}
