//! CLI command handlers. Each command is in its own file.

mod add;
mod add_category;
mod categories;
mod check;
mod click;
mod delete;
mod normalize;
mod normalize_url;
mod repair;
mod save;
mod search;
mod show;
mod trash;

pub use add::run_add;
pub use add_category::run_add_category;
pub use categories::run_categories;
pub use check::run_check;
pub use click::run_click;
pub use delete::run_delete;
pub use normalize::run_normalize;
pub use normalize_url::run_normalize_url;
pub use repair::run_repair;
pub use save::run_save;
pub use search::run_search;
pub use show::run_show;
pub use trash::run_trash;

use anyhow::{Context as _, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Reads a JSON document from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_json_input(path: &Path) -> Result<Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("parse JSON from {}", path.display()))
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
