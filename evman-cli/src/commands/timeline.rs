use anyhow::Result;
use evman_core::session::{Capability, Session};
use owo_colors::OwoColorize;

use super::Store;
use crate::render::Render;

/// Today's date in the events file's DD-MM-YYYY form.
pub fn today() -> String {
    chrono::Local::now().format("%d-%m-%Y").to_string()
}

pub fn run(store: &Store, session: &Session, date: &str) -> Result<()> {
    session.require(Capability::Timeline)?;

    let Some(slots) = store.timeline(date) else {
        println!("{}", format!("No events on {date}.").dimmed());
        return Ok(());
    };

    println!("{}", format!("Timeline for {date}").bold());
    for slot in &slots {
        println!("{}", slot.render());
    }

    Ok(())
}
