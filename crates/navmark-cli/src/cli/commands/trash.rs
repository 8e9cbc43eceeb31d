//! `navmark trash` – list, restore and purge recycle-bin entries.

use anyhow::Result;

use crate::cli::{Context, TrashAction};

pub fn run_trash(ctx: &Context, action: TrashAction) -> Result<()> {
    match action {
        TrashAction::List => {
            let entries = ctx.service.list_trash();
            if entries.is_empty() {
                println!("Trash is empty.");
                return Ok(());
            }
            println!("{:<6} {:<26} {:<12} {}", "ID", "DELETED AT", "BY", "URL");
            for e in entries {
                println!(
                    "{:<6} {:<26} {:<12} {}",
                    e.item.id, e.deleted_at, e.deleted_by, e.item.url
                );
            }
        }
        TrashAction::Restore { id } => {
            let item = ctx.service.restore(id, &ctx.user)?;
            println!("Restored {} as id {}.", item.name, item.id);
        }
        TrashAction::Purge { id } => {
            ctx.service.permanent_delete(id)?;
            println!("Permanently deleted {id}.");
        }
        TrashAction::Empty => {
            let count = ctx.service.empty_trash()?;
            println!("Discarded {count} entr{}.", if count == 1 { "y" } else { "ies" });
        }
    }
    Ok(())
}
