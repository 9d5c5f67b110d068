use anyhow::Result;
use evman_core::session::{Capability, Session};
use owo_colors::OwoColorize;

use super::Store;
use crate::render::{pluralize, render_events};

pub fn run(store: &Store, session: &Session, keyword: &str) -> Result<()> {
    session.require(Capability::Search)?;

    let found = store.search(keyword);

    if found.is_empty() {
        println!("{}", "No matching events found.".dimmed());
        return Ok(());
    }

    println!(
        "{}\n",
        format!("{} matching {}", found.len(), pluralize("event", found.len())).dimmed()
    );
    println!("{}", render_events(found));
    Ok(())
}
