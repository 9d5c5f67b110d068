use anyhow::{Context, Result};
use dialoguer::Input;
use evman_core::config::EvmanConfig;
use evman_core::session::{Credentials, Session};

/// Prompt for a required value.
pub fn prompt_text(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(format!("  {label}"))
        .interact_text()
        .context("Failed to read input")
}

/// Prompt for a value that may be left empty.
pub fn prompt_optional(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(format!("  {label}"))
        .default(String::new())
        .show_default(false)
        .interact_text()
        .context("Failed to read input")
}

/// Prompt with a pre-filled default the user can accept with enter.
pub fn prompt_with_default(label: &str, default: String) -> Result<String> {
    Input::<String>::new()
        .with_prompt(format!("  {label}"))
        .default(default)
        .interact_text()
        .context("Failed to read input")
}

/// Prompt the user for password input (hidden).
pub fn prompt_password(label: &str) -> Result<String> {
    let prompt = format!("  {}: ", label);
    rpassword::prompt_password(&prompt).context("Failed to read password")
}

/// Ask for admin credentials and start an admin session.
pub fn admin_login(config: &EvmanConfig) -> Result<Session> {
    println!("Admin login");
    let credentials = Credentials {
        username: prompt_text("Username")?,
        password: prompt_password("Password")?,
    };

    Ok(Session::login(&credentials, config.admin.as_ref())?)
}
