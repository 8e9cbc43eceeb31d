//! Level-based visibility filtering.

use std::collections::HashSet;

use super::types::{Dataset, Record};
use crate::level::Level;

/// Returns the part of `dataset` a visitor at `visitor` may see.
///
/// Categories need `level <= visitor`. Items need the same and must belong to
/// a surviving category; an item in a hidden category stays hidden whatever
/// its own level. Input order is preserved. Top-level passthrough fields are
/// not part of the view.
pub fn filter_visible(dataset: &Dataset, visitor: Level) -> Dataset {
    let categories: Vec<_> = dataset
        .categories
        .iter()
        .filter(|c| c.level <= visitor)
        .cloned()
        .collect();

    let visible_ids: HashSet<i64> = categories.iter().map(|c| c.id).collect();

    let items = dataset
        .items
        .iter()
        .filter(|i| visible_ids.contains(&i.category_id) && i.level <= visitor)
        .cloned()
        .collect();

    Dataset {
        categories,
        items,
        extra: Record::new(),
    }
}

impl Dataset {
    /// Method form of [`filter_visible`].
    pub fn visible_to(&self, visitor: Level) -> Dataset {
        filter_visible(self, visitor)
    }
}
