//! navmark core: bookmark URL normalization, dataset sanitization and
//! level-based visibility filtering, plus the JSON document store and the
//! bookmark service built on top of them.

pub mod config;
pub mod logging;

pub mod bookmarks;
pub mod clock;
pub mod dataset;
pub mod error;
pub mod level;
pub mod recycle;
pub mod store;
pub mod text;
pub mod url_model;

pub use dataset::{filter_visible, normalize_data, Category, Dataset, Item};
pub use error::{NavError, NavResult};
pub use level::Level;
pub use url_model::normalize_url;
