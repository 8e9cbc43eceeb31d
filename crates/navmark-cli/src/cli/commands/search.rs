//! `navmark search` – keyword search, or recent visits when no keyword is given.

use anyhow::Result;

use crate::cli::Context;

pub fn run_search(ctx: &Context, query: &str, limit: usize) -> Result<()> {
    let hits = ctx.service.search(&ctx.user, query, limit)?;
    if hits.is_empty() {
        println!("No matching bookmarks.");
        return Ok(());
    }
    println!("{:<6} {:<20} {:<30} {}", "ID", "CATEGORY", "NAME", "URL");
    for hit in hits {
        println!(
            "{:<6} {:<20} {:<30} {}",
            hit.id, hit.category_name, hit.name, hit.url
        );
    }
    Ok(())
}
