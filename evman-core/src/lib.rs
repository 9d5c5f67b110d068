//! Core of the evman event manager.
//!
//! - `event`: the `Event` record and edit patches
//! - `codec`: single-line persisted form
//! - `storage`: where the events file lives
//! - `store`: conflict-aware add/delete/edit, search and listing
//! - `timeline`: hourly view of one day
//! - `session`: admin and read-only roles

pub mod codec;
pub mod config;
pub mod error;
pub mod event;
pub mod session;
pub mod storage;
pub mod store;
pub mod timeline;

pub use event::{Event, EventPatch};
