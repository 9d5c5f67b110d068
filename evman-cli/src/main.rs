mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evman_core::config::EvmanConfig;
use evman_core::event::{Event, EventPatch};
use evman_core::session::Session;
use evman_core::storage::FileStorage;
use evman_core::store::EventStore;
use log::debug;

use commands::Store;
use render::render_load_warning;
use utils::prompt::admin_login;

#[derive(Parser)]
#[command(name = "evman")]
#[command(about = "Keep track of your events: add, search and view a day's timeline")]
struct Cli {
    /// Events file (overrides events_file from config.toml)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive admin/user menu (default)
    Menu,
    /// List all events
    List,
    /// Find events whose name or type contains a keyword
    Search { keyword: String },
    /// Show the 08:00-20:00 hourly view of a day
    Timeline {
        /// Day to show (DD-MM-YYYY, defaults to today)
        date: Option<String>,
    },
    /// Add an event (admin)
    Add {
        name: String,

        /// Date (DD-MM-YYYY)
        #[arg(short, long)]
        date: String,

        /// Time (HH:MM)
        #[arg(short, long)]
        time: String,

        /// Event type, e.g. "Meeting"
        #[arg(short = 'k', long = "type")]
        kind: String,

        #[arg(short, long, default_value = "")]
        location: String,
    },
    /// Delete the first event with this name (admin)
    Delete { name: String },
    /// Edit the first event with this name; omitted fields are kept (admin)
    Edit {
        name: String,

        /// New name
        #[arg(long)]
        rename: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        time: Option<String>,

        #[arg(short = 'k', long = "type")]
        kind: Option<String>,

        #[arg(short, long)]
        location: Option<String>,
    },
    /// Show config paths and settings
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = EvmanConfig::load()?;
    if let Some(file) = cli.file {
        config.events_file = file;
    }

    let command = cli.command.unwrap_or(Commands::Menu);
    if let Commands::Config = command {
        return commands::config::run(&config);
    }

    let mut store = open_store(&config)?;

    match command {
        Commands::Menu => commands::menu::run(&mut store, &config),
        Commands::List => commands::list::run(&store, &Session::user()),
        Commands::Search { keyword } => commands::search::run(&store, &Session::user(), &keyword),
        Commands::Timeline { date } => {
            let date = date.unwrap_or_else(commands::timeline::today);
            commands::timeline::run(&store, &Session::user(), &date)
        }
        Commands::Add {
            name,
            date,
            time,
            kind,
            location,
        } => {
            let session = admin_login(&config)?;
            let event = Event::new(name, date, time, kind, location);
            commands::add::run(&mut store, &session, event)
        }
        Commands::Delete { name } => {
            let session = admin_login(&config)?;
            commands::delete::run(&mut store, &session, &name)
        }
        Commands::Edit {
            name,
            rename,
            date,
            time,
            kind,
            location,
        } => {
            let session = admin_login(&config)?;
            let patch = EventPatch::from_inputs(rename, date, time, kind, location);
            commands::edit::run(&mut store, &session, &name, &patch)
        }
        Commands::Config => commands::config::run(&config),
    }
}

fn open_store(config: &EvmanConfig) -> Result<Store> {
    let path = config.events_path();
    debug!("opening events file {}", path.display());

    let (store, report) = EventStore::open(FileStorage::new(&path), config.codec())
        .with_context(|| format!("Could not read events file {}", path.display()))?;

    if let Some(warning) = render_load_warning(&report) {
        eprintln!("{warning}");
    }

    Ok(store)
}
