pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod menu;
pub mod search;
pub mod timeline;

use evman_core::storage::FileStorage;
use evman_core::store::EventStore;

/// The store as used by the CLI: backed by the events file.
pub type Store = EventStore<FileStorage>;
