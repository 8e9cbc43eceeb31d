//! `navmark normalize` – normalize a dataset document without storing it.

use anyhow::Result;
use navmark_core::normalize_data;
use std::path::Path;

use super::{print_json, read_json_input};

pub fn run_normalize(path: &Path) -> Result<()> {
    let raw = read_json_input(path)?;
    let dataset = normalize_data(raw);
    print_json(&dataset)
}
