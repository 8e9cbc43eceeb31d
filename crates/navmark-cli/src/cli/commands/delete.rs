//! `navmark delete` – move a bookmark to the recycle bin.

use anyhow::Result;

use crate::cli::Context;

pub fn run_delete(ctx: &Context, id: i64) -> Result<()> {
    let item = ctx.service.delete_item(&ctx.user, id)?;
    println!("Moved {} ({}) to trash.", item.id, item.name);
    Ok(())
}
