//! `navmark add-category` – add a category.

use anyhow::Result;
use navmark_core::bookmarks::NewCategory;

use crate::cli::Context;

pub fn run_add_category(ctx: &Context, new: NewCategory) -> Result<()> {
    let category = ctx.service.add_category(&ctx.user, new)?;
    println!(
        "Added category {} ({}, level {})",
        category.id, category.name, category.level
    );
    Ok(())
}
