//! `navmark categories` – list category ids and names.

use anyhow::Result;

use crate::cli::Context;

pub fn run_categories(ctx: &Context) -> Result<()> {
    let categories = ctx.service.categories(&ctx.user)?;
    if categories.is_empty() {
        println!("No categories.");
    } else {
        println!("{:<6} {}", "ID", "NAME");
        for c in categories {
            println!("{:<6} {}", c.id, c.name);
        }
    }
    Ok(())
}
