use anyhow::Result;
use evman_core::session::{Capability, Session};
use owo_colors::OwoColorize;

use super::Store;

pub fn run(store: &mut Store, session: &Session, name: &str) -> Result<()> {
    session.require(Capability::Delete)?;

    if store.is_empty() {
        println!("{}", "No events to delete.".dimmed());
        return Ok(());
    }

    let removed = store.delete(name)?;

    println!("{}", format!("  Deleted: {removed}").red());
    Ok(())
}
