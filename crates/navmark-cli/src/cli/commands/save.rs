//! `navmark save` – replace a user's dataset with a normalized document.

use anyhow::Result;
use navmark_core::bookmarks::SavePayload;
use std::path::Path;

use super::read_json_input;
use crate::cli::Context;

pub fn run_save(ctx: &Context, path: &Path) -> Result<()> {
    let body = read_json_input(path)?;
    let saved = ctx.service.save_data(&ctx.user, SavePayload::from_request(body))?;
    println!(
        "Saved {} categories and {} items for {}.",
        saved.categories.len(),
        saved.items.len(),
        ctx.user
    );
    Ok(())
}
