//! `navmark check` – is this URL already bookmarked?

use anyhow::Result;

use crate::cli::Context;

pub fn run_check(ctx: &Context, url: &str) -> Result<()> {
    match ctx.service.check_url(&ctx.user, url)? {
        Some(item) => println!("Bookmarked as {} ({}): {}", item.id, item.name, item.url),
        None => println!("Not bookmarked."),
    }
    Ok(())
}
