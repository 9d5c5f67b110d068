//! Line codec for the events file.
//!
//! One event per line, the five fields joined by a single delimiter
//! character, no quoting. Fields that contain the delimiter or a line break
//! cannot be represented and are rejected before they reach the file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EvmanError, EvmanResult};
use crate::event::Event;

const FIELD_COUNT: usize = 5;

/// Field separator used in the events file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Pipe,
    Comma,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Pipe => '|',
            Delimiter::Comma => ',',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Result of decoding one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Record(Event),
    /// Fewer than five fields. Loaded as an all-empty placeholder event.
    Degenerate,
}

impl Decoded {
    pub fn into_event(self) -> Event {
        match self {
            Decoded::Record(event) => event,
            Decoded::Degenerate => Event::default(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, Decoded::Degenerate)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    delimiter: Delimiter,
}

impl Codec {
    pub fn new(delimiter: Delimiter) -> Self {
        Codec { delimiter }
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Reject events whose fields could not survive a round-trip.
    pub fn validate(&self, event: &Event) -> EvmanResult<()> {
        let sep = self.delimiter.as_char();

        for (field, value) in event.fields() {
            if let Some(character) = value.chars().find(|c| *c == sep || *c == '\n' || *c == '\r')
            {
                return Err(EvmanError::ReservedCharacter { field, character });
            }
        }

        Ok(())
    }

    /// Encode an event as a single line, without the trailing newline.
    /// Rejects fields that would not survive a round-trip.
    pub fn serialize(&self, event: &Event) -> EvmanResult<String> {
        self.validate(event)?;
        Ok(self.encode(event))
    }

    /// Encode without checking fields. Records loaded from the file are
    /// written back as they were read.
    pub fn encode(&self, event: &Event) -> String {
        let sep = self.delimiter.to_string();
        event
            .fields()
            .iter()
            .map(|(_, value)| *value)
            .collect::<Vec<_>>()
            .join(&sep)
    }

    pub fn deserialize(&self, line: &str) -> Decoded {
        let parts: Vec<&str> = line.split(self.delimiter.as_char()).collect();

        if parts.len() < FIELD_COUNT {
            return Decoded::Degenerate;
        }

        Decoded::Record(Event::new(parts[0], parts[1], parts[2], parts[3], parts[4]))
    }

    /// Encode a whole store, one line per event, each newline-terminated.
    pub fn serialize_all(&self, events: &[Event]) -> String {
        let mut out = String::new();
        for event in events {
            out.push_str(&self.encode(event));
            out.push('\n');
        }
        out
    }

    /// Decode every non-empty line, paired with its 1-based line number.
    pub fn deserialize_all(&self, content: &str) -> Vec<(usize, Decoded)> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| (i + 1, self.deserialize(line)))
            .collect()
    }
}
