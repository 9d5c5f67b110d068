use anyhow::Result;
use evman_core::session::{Capability, Session};
use owo_colors::OwoColorize;

use super::Store;
use crate::render::render_events;

pub fn run(store: &Store, session: &Session) -> Result<()> {
    session.require(Capability::View)?;

    if store.is_empty() {
        println!("{}", "No events scheduled.".dimmed());
        return Ok(());
    }

    println!("{}", render_events(store.events()));
    Ok(())
}
