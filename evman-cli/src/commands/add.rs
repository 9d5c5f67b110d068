use anyhow::Result;
use evman_core::event::Event;
use evman_core::session::{Capability, Session};
use owo_colors::OwoColorize;

use super::Store;

pub fn run(store: &mut Store, session: &Session, event: Event) -> Result<()> {
    session.require(Capability::Add)?;

    let summary = event.to_string();
    store.add(event)?;

    println!("{}", format!("  Added: {summary}").green());
    Ok(())
}
