//! `navmark normalize-url` – print the canonical form of each URL.
//!
//! Rejected URLs print as an empty line so output lines up with input.

use anyhow::Result;
use navmark_core::normalize_url;

pub fn run_normalize_url(urls: &[String]) -> Result<()> {
    for raw in urls {
        let normalized = normalize_url(raw);
        if normalized.is_empty() {
            tracing::debug!(url = %raw, "rejected");
        }
        println!("{normalized}");
    }
    Ok(())
}
