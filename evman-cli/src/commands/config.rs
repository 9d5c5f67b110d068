use anyhow::Result;
use evman_core::config::EvmanConfig;
use owo_colors::OwoColorize;

pub fn run(config: &EvmanConfig) -> Result<()> {
    let config_path = EvmanConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Events:     {}", config.events_path().display());
    println!();

    let mut shown = config.clone();
    if let Some(admin) = shown.admin.as_mut() {
        admin.password = "********".to_string();
    }

    println!("{}", "Effective config".bold());
    for line in shown.to_toml()?.lines() {
        println!("  {}", line.dimmed());
    }

    Ok(())
}
