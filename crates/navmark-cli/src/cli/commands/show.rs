//! `navmark show` – print the dataset a visitor at a given level would see.

use anyhow::Result;
use navmark_core::Level;

use super::print_json;
use crate::cli::Context;

pub fn run_show(ctx: &Context, level: Level) -> Result<()> {
    let data = ctx.service.get_data(&ctx.user, level)?;
    print_json(&data)
}
