use anyhow::Result;
use evman_core::event::EventPatch;
use evman_core::session::{Capability, Session};
use owo_colors::OwoColorize;

use super::Store;

pub fn run(store: &mut Store, session: &Session, name: &str, patch: &EventPatch) -> Result<()> {
    session.require(Capability::Edit)?;

    let edited = store.edit(name, patch)?;

    println!("{}", format!("  Updated: {edited}").yellow());
    Ok(())
}
