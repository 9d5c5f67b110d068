//! Interactive menu: admin or read-only user, then a command loop until
//! logout.

use anyhow::Result;
use dialoguer::{Confirm, Select};
use evman_core::config::EvmanConfig;
use evman_core::event::{Event, EventPatch};
use evman_core::session::{Role, Session};
use owo_colors::OwoColorize;

use super::{Store, add, delete, edit, list, search, timeline};
use crate::render::Render;
use crate::utils::prompt::{admin_login, prompt_optional, prompt_text, prompt_with_default};

#[derive(Clone, Copy)]
enum Action {
    Add,
    View,
    Delete,
    Search,
    Edit,
    Timeline,
    Quit,
}

impl Action {
    fn for_role(role: Role) -> &'static [Action] {
        match role {
            Role::Admin => &[
                Action::Add,
                Action::View,
                Action::Delete,
                Action::Search,
                Action::Edit,
                Action::Timeline,
                Action::Quit,
            ],
            Role::User => &[Action::View, Action::Search, Action::Timeline, Action::Quit],
        }
    }

    fn label(self, role: Role) -> &'static str {
        match self {
            Action::Add => "Add event",
            Action::View => "View events",
            Action::Delete => "Delete event",
            Action::Search => "Search events",
            Action::Edit => "Edit event",
            Action::Timeline => "Timeline",
            Action::Quit => match role {
                Role::Admin => "Logout",
                Role::User => "Exit",
            },
        }
    }
}

pub fn run(store: &mut Store, config: &EvmanConfig) -> Result<()> {
    println!("{}", "Welcome to evman".bold());

    let is_admin = Confirm::new()
        .with_prompt("Are you admin?")
        .default(false)
        .interact()?;

    let session = if is_admin {
        match admin_login(config) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
                println!("Access denied. Exiting...");
                return Ok(());
            }
        }
    } else {
        Session::user()
    };

    menu_loop(store, &session)?;

    println!("Goodbye!");
    Ok(())
}

fn menu_loop(store: &mut Store, session: &Session) -> Result<()> {
    let role = session.role();
    let actions = Action::for_role(role);
    let labels: Vec<&str> = actions.iter().map(|a| a.label(role)).collect();
    let title = match role {
        Role::Admin => "Admin menu",
        Role::User => "User menu",
    };

    loop {
        println!();
        let choice = Select::new()
            .with_prompt(title)
            .items(&labels)
            .default(0)
            .interact()?;

        let action = actions[choice];
        if matches!(action, Action::Quit) {
            return Ok(());
        }

        // Recoverable failures (conflicts, unknown names, ...) keep the menu open
        if let Err(e) = dispatch(store, session, action) {
            eprintln!("  {}", e.to_string().red());
        }
    }
}

fn dispatch(store: &mut Store, session: &Session, action: Action) -> Result<()> {
    match action {
        Action::Add => {
            let event = Event::new(
                prompt_text("Name")?,
                prompt_text("Date (DD-MM-YYYY)")?,
                prompt_text("Time (HH:MM)")?,
                prompt_text("Type")?,
                prompt_optional("Location (optional)")?,
            );
            add::run(store, session, event)
        }
        Action::View => list::run(store, session),
        Action::Delete => {
            if store.is_empty() {
                println!("{}", "No events to delete.".dimmed());
                return Ok(());
            }
            let name = prompt_text("Name of the event to delete")?;
            delete::run(store, session, &name)
        }
        Action::Search => {
            let keyword = prompt_optional("Keyword (name or type)")?;
            search::run(store, session, &keyword)
        }
        Action::Edit => {
            let name = prompt_text("Name of the event to edit")?;
            match store.find(&name) {
                Some(current) => println!("{}\n", current.render()),
                None => anyhow::bail!("Event '{}' not found", name),
            }

            println!("{}", "  Leave a field empty to keep its current value".dimmed());
            let patch = EventPatch::from_inputs(
                Some(prompt_optional("New name")?),
                Some(prompt_optional("New date (DD-MM-YYYY)")?),
                Some(prompt_optional("New time (HH:MM)")?),
                Some(prompt_optional("New type")?),
                Some(prompt_optional("New location")?),
            );
            edit::run(store, session, &name, &patch)
        }
        Action::Timeline => {
            let date = prompt_with_default("Date (DD-MM-YYYY)", timeline::today())?;
            timeline::run(store, session, &date)
        }
        Action::Quit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_menu_has_no_mutations() {
        let labels: Vec<&str> = Action::for_role(Role::User)
            .iter()
            .map(|a| a.label(Role::User))
            .collect();

        assert_eq!(labels, vec!["View events", "Search events", "Timeline", "Exit"]);
    }

    #[test]
    fn test_admin_menu_ends_with_logout() {
        let actions = Action::for_role(Role::Admin);

        assert_eq!(actions.len(), 7);
        assert!(matches!(actions.last(), Some(Action::Quit)));
        assert_eq!(Action::Quit.label(Role::Admin), "Logout");
    }
}
