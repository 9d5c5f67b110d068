//! The event store.
//!
//! Holds every event in insertion order and owns all mutations. Each
//! successful add, delete or edit rewrites the whole backing storage. A
//! mutation is applied to a copy first and only committed to memory once it
//! has been written, so a failed write leaves both sides untouched.

use log::{debug, warn};

use crate::codec::Codec;
use crate::error::{EvmanError, EvmanResult};
use crate::event::{Event, EventPatch};
use crate::storage::Storage;
use crate::timeline::{self, Slot};

/// Outcome of loading the events file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of events loaded, placeholders included.
    pub loaded: usize,
    /// 1-based line numbers that had fewer than five fields.
    pub degenerate_lines: Vec<usize>,
}

pub struct EventStore<S: Storage> {
    events: Vec<Event>,
    codec: Codec,
    storage: S,
}

impl<S: Storage> EventStore<S> {
    /// Create a store over `storage` and load its current content.
    pub fn open(storage: S, codec: Codec) -> EvmanResult<(Self, LoadReport)> {
        let mut store = EventStore {
            events: Vec::new(),
            codec,
            storage,
        };
        let report = store.load()?;
        Ok((store, report))
    }

    /// Replace the in-memory events with the storage content.
    ///
    /// Lines with fewer than five fields are kept as empty placeholder
    /// events. Missing storage loads as an empty store.
    pub fn load(&mut self) -> EvmanResult<LoadReport> {
        let content = self.storage.read()?.unwrap_or_default();

        let mut report = LoadReport::default();
        let mut events = Vec::new();

        for (line_no, decoded) in self.codec.deserialize_all(&content) {
            if decoded.is_degenerate() {
                warn!("line {line_no}: fewer than 5 fields, loaded as an empty event");
                report.degenerate_lines.push(line_no);
            }
            events.push(decoded.into_event());
        }

        report.loaded = events.len();
        debug!("loaded {} events", report.loaded);
        self.events = events;
        Ok(report)
    }

    /// Write every event to storage, replacing its previous content.
    pub fn persist(&mut self) -> EvmanResult<()> {
        let content = self.codec.serialize_all(&self.events);
        self.storage.write(&content)?;
        debug!("persisted {} events", self.events.len());
        Ok(())
    }

    /// All events, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn codec(&self) -> Codec {
        self.codec
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether some event already occupies `date` at `time`.
    pub fn has_conflict(&self, date: &str, time: &str) -> bool {
        self.events.iter().any(|e| e.occupies(date, time))
    }

    pub fn find(&self, name: &str) -> Option<&Event> {
        self.position(name).map(|i| &self.events[i])
    }

    /// Append `event` unless its slot is taken or an identical
    /// name/date/time already exists.
    pub fn add(&mut self, event: Event) -> EvmanResult<()> {
        self.codec.validate(&event)?;

        // An identical triple also occupies the slot; report it as the
        // more specific duplicate.
        if self.events.iter().any(|e| e.same_triple(&event)) {
            return Err(EvmanError::Duplicate {
                name: event.name,
                date: event.date,
                time: event.time,
            });
        }

        if self.has_conflict(&event.date, &event.time) {
            return Err(EvmanError::Conflict {
                date: event.date,
                time: event.time,
            });
        }

        let mut next = self.events.clone();
        next.push(event);
        self.commit(next)
    }

    /// Remove the first event named `name`.
    pub fn delete(&mut self, name: &str) -> EvmanResult<Event> {
        let index = self
            .position(name)
            .ok_or_else(|| EvmanError::NotFound(name.to_string()))?;

        let mut next = self.events.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    /// Events whose name or type contains `keyword`, ignoring ASCII case.
    pub fn search(&self, keyword: &str) -> Vec<&Event> {
        let keyword = keyword.to_ascii_lowercase();
        self.events
            .iter()
            .filter(|e| e.matches_keyword(&keyword))
            .collect()
    }

    /// Edit the first event named `name` in place.
    ///
    /// The conflict check skips the edited event itself, so leaving its date
    /// and time unchanged never conflicts.
    pub fn edit(&mut self, name: &str, patch: &EventPatch) -> EvmanResult<Event> {
        let index = self
            .position(name)
            .ok_or_else(|| EvmanError::NotFound(name.to_string()))?;

        let edited = patch.apply(&self.events[index]);
        self.codec.validate(&edited)?;

        let taken = self
            .events
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.occupies(&edited.date, &edited.time));
        if taken {
            return Err(EvmanError::Conflict {
                date: edited.date,
                time: edited.time,
            });
        }

        let mut next = self.events.clone();
        next[index] = edited.clone();
        self.commit(next)?;
        Ok(edited)
    }

    /// Hourly slots for `date`, or `None` when nothing is scheduled that day.
    pub fn timeline(&self, date: &str) -> Option<Vec<Slot>> {
        timeline::project(&self.events, date)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.events.iter().position(|e| e.name == name)
    }

    fn commit(&mut self, next: Vec<Event>) -> EvmanResult<()> {
        let content = self.codec.serialize_all(&next);
        self.storage.write(&content)?;
        self.events = next;
        debug!("persisted {} events", self.events.len());
        Ok(())
    }
}
