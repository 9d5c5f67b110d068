//! Hourly timeline for a single day.
//!
//! A day is shown as 13 one-hour slots from 08:00 to 20:00. Each slot shows
//! at most one event: the first one (in store order) whose time starts with
//! the slot's hour digits. Other events in the same hour are not shown.

use std::fmt;

use crate::event::Event;

pub const FIRST_HOUR: u32 = 8;
pub const LAST_HOUR: u32 = 20;

/// One hour of the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub hour: u32,
    /// Name of the event shown in this slot, if any.
    pub event: Option<String>,
}

impl Slot {
    /// "08:00", "13:00", ...
    pub fn label(&self) -> String {
        format!("{:02}:00", self.hour)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.event.as_deref().unwrap_or(""))
    }
}

/// Compare hour digits only: "09:45" falls in the 09:00 slot.
fn in_hour(time: &str, hour: u32) -> bool {
    time.get(..2) == Some(format!("{hour:02}").as_str())
}

/// Project `events` onto the hourly slots of `date`.
///
/// Returns `None` when no event falls on `date`.
pub fn project(events: &[Event], date: &str) -> Option<Vec<Slot>> {
    let day: Vec<&Event> = events.iter().filter(|e| e.date == date).collect();

    if day.is_empty() {
        return None;
    }

    let slots = (FIRST_HOUR..=LAST_HOUR)
        .map(|hour| Slot {
            hour,
            event: day
                .iter()
                .find(|e| in_hour(&e.time, hour))
                .map(|e| e.name.clone()),
        })
        .collect();

    Some(slots)
}
