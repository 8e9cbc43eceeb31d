//! Keyword search and lightweight listings for the browser extension.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::BookmarkService;
use crate::clock::Clock;
use crate::dataset::Item;
use crate::error::NavResult;
use crate::store::DocumentStore;

/// Label used when an item's category no longer exists.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One search result, denormalized with its category name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: i64,
    pub category_name: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
}

fn matches_keyword(item: &Item, keyword: &str) -> bool {
    item.name.to_lowercase().contains(keyword)
        || item.url.to_lowercase().contains(keyword)
        || item
            .description()
            .is_some_and(|d| d.to_lowercase().contains(keyword))
        || item
            .tags()
            .iter()
            .any(|t| t.to_lowercase().contains(keyword))
}

/// Most recently visited first; never-visited (or unparseable) entries last.
fn by_recent_visit(a: &Item, b: &Item) -> Ordering {
    match (a.last_visited_at(), b.last_visited_at()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl<S: DocumentStore, C: Clock> BookmarkService<S, C> {
    /// Searches name, URL, description and tags case-insensitively.
    ///
    /// An empty keyword lists the most recently visited bookmarks instead.
    pub fn search(&self, username: &str, keyword: &str, limit: usize) -> NavResult<Vec<SearchHit>> {
        let dataset = self.load(username)?;
        let category_names: HashMap<i64, &str> = dataset
            .categories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        let keyword = keyword.trim().to_lowercase();
        let mut candidates: Vec<&Item> = if keyword.is_empty() {
            dataset.items.iter().collect()
        } else {
            dataset
                .items
                .iter()
                .filter(|item| matches_keyword(item, &keyword))
                .collect()
        };
        if keyword.is_empty() {
            candidates.sort_by(|a, b| by_recent_visit(a, b));
        }

        Ok(candidates
            .into_iter()
            .take(limit)
            .map(|item| SearchHit {
                id: item.id,
                name: item.name.clone(),
                url: item.url.clone(),
                description: item.description().map(str::to_string),
                category_id: item.category_id,
                category_name: category_names
                    .get(&item.category_id)
                    .copied()
                    .unwrap_or(UNCATEGORIZED)
                    .to_string(),
                tags: item.tags().into_iter().map(str::to_string).collect(),
            })
            .collect())
    }

    /// `{id, name}` for every category, in stored order.
    pub fn categories(&self, username: &str) -> NavResult<Vec<CategorySummary>> {
        Ok(self
            .load(username)?
            .categories
            .into_iter()
            .map(|c| CategorySummary {
                id: c.id,
                name: c.name,
            })
            .collect())
    }
}
