//! `navmark repair` – re-number bookmarks with duplicate ids.

use anyhow::Result;

use crate::cli::Context;

pub fn run_repair(ctx: &Context) -> Result<()> {
    let fixed = ctx.service.repair_ids(&ctx.user)?;
    if fixed == 0 {
        println!("No duplicate ids.");
    } else {
        println!("Re-numbered {fixed} bookmark(s).");
    }
    Ok(())
}
