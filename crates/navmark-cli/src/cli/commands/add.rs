//! `navmark add` – add a bookmark.

use anyhow::Result;
use navmark_core::bookmarks::NewItem;

use crate::cli::Context;

pub fn run_add(ctx: &Context, new: NewItem) -> Result<()> {
    let item = ctx.service.add_item(&ctx.user, new)?;
    println!("Added bookmark {} ({}): {}", item.id, item.name, item.url);
    Ok(())
}
