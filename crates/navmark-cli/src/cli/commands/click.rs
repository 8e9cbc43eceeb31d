//! `navmark click` – record a visit.

use anyhow::Result;

use crate::cli::Context;

pub fn run_click(ctx: &Context, id: i64) -> Result<()> {
    let item = ctx.service.track_click(&ctx.user, id)?;
    println!("{} visited {} time(s)", item.name, item.click_count());
    Ok(())
}
