//! Event record types.
//!
//! Dates and times are kept as the text the user typed (`DD-MM-YYYY` and
//! `HH:MM`). They are only ever compared for exact equality, except for the
//! timeline which looks at the first two characters of the time.

use std::fmt;

/// A scheduled event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    /// DD-MM-YYYY
    pub date: String,
    /// HH:MM
    pub time: String,
    /// Free-text category ("Meeting", "Birthday", ...)
    pub kind: String,
    pub location: String,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        kind: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Event {
            name: name.into(),
            date: date.into(),
            time: time.into(),
            kind: kind.into(),
            location: location.into(),
        }
    }

    /// Whether this event occupies the given date and time slot.
    pub fn occupies(&self, date: &str, time: &str) -> bool {
        self.date == date && self.time == time
    }

    /// Whether this event has the same name, date and time as `other`.
    pub fn same_triple(&self, other: &Event) -> bool {
        self.name == other.name && self.occupies(&other.date, &other.time)
    }

    /// Case-insensitive (ASCII only) substring match on name or kind.
    pub fn matches_keyword(&self, keyword_lower: &str) -> bool {
        self.name.to_ascii_lowercase().contains(keyword_lower)
            || self.kind.to_ascii_lowercase().contains(keyword_lower)
    }

    /// Field names paired with their values, in persisted order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("date", self.date.as_str()),
            ("time", self.time.as_str()),
            ("type", self.kind.as_str()),
            ("location", self.location.as_str()),
        ]
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.date, self.time)
    }
}

/// Replacement values for an edit. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub kind: Option<String>,
    pub location: Option<String>,
}

impl EventPatch {
    /// Build a patch from raw user input, where an empty string means
    /// "keep the current value".
    pub fn from_inputs(
        name: Option<String>,
        date: Option<String>,
        time: Option<String>,
        kind: Option<String>,
        location: Option<String>,
    ) -> Self {
        EventPatch {
            name: non_empty(name),
            date: non_empty(date),
            time: non_empty(time),
            kind: non_empty(kind),
            location: non_empty(location),
        }
    }

    /// Apply the patch on top of `current`, returning the edited event.
    pub fn apply(&self, current: &Event) -> Event {
        let pick = |new: &Option<String>, old: &String| match new.as_deref() {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => old.clone(),
        };

        Event {
            name: pick(&self.name, &current.name),
            date: pick(&self.date, &current.date),
            time: pick(&self.time, &current.time),
            kind: pick(&self.kind, &current.kind),
            location: pick(&self.location, &current.location),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standup() -> Event {
        Event::new("Standup", "01-03-2024", "09:00", "Meeting", "Room1")
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let patch = EventPatch {
            location: Some("Room2".to_string()),
            ..Default::default()
        };

        let edited = patch.apply(&standup());

        assert_eq!(edited.location, "Room2");
        assert_eq!(edited.name, "Standup");
        assert_eq!(edited.date, "01-03-2024");
        assert_eq!(edited.time, "09:00");
        assert_eq!(edited.kind, "Meeting");
    }

    #[test]
    fn test_patch_from_inputs_treats_empty_as_keep() {
        let patch = EventPatch::from_inputs(
            Some(String::new()),
            None,
            Some("10:30".to_string()),
            Some(String::new()),
            None,
        );

        assert_eq!(patch.name, None);
        assert_eq!(patch.kind, None);
        assert_eq!(patch.time.as_deref(), Some("10:30"));
        assert_eq!(patch.apply(&standup()).time, "10:30");
    }

    #[test]
    fn test_keyword_match_is_ascii_case_insensitive() {
        let event = standup();

        assert!(event.matches_keyword("meet"));
        assert!(event.matches_keyword("stand"));
        assert!(!event.matches_keyword("room"));
    }
}
