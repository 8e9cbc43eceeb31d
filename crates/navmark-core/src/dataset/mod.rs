//! Bookmark datasets: typed model, normalization and visibility filtering.
//!
//! Raw JSON (from storage or a client) always goes through [`normalize_data`]
//! before anything else looks at it; read paths then apply
//! [`filter_visible`] for the visitor's level.

mod filter;
mod normalize;
mod types;

pub use filter::filter_visible;
pub use normalize::{
    normalize_category, normalize_data, normalize_id, normalize_item, normalize_level,
    normalize_record, normalize_value,
};
pub use types::{Category, Dataset, Item, Record};
