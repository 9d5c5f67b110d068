//! TUI rendering traits for evman types.

use evman_core::event::Event;
use evman_core::store::LoadReport;
use evman_core::timeline::Slot;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let location = if self.location.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            self.location.clone()
        };

        [
            format!("{}", self.name.bold()),
            format!("  {}     {}", "Date:".dimmed(), self.date),
            format!("  {}     {}", "Time:".dimmed(), self.time),
            format!("  {}     {}", "Type:".dimmed(), self.kind),
            format!("  {} {}", "Location:".dimmed(), location),
        ]
        .join("\n")
    }
}

impl Render for Slot {
    fn render(&self) -> String {
        match &self.event {
            Some(name) => format!("  {}  {}", self.label(), name.green()),
            None => format!("  {}  {}", self.label(), "-".dimmed()),
        }
    }
}

/// Render a list of events separated by blank lines.
pub fn render_events<'a>(events: impl IntoIterator<Item = &'a Event>) -> String {
    events
        .into_iter()
        .map(Render::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Warning for lines that could not be read, if any.
pub fn render_load_warning(report: &LoadReport) -> Option<String> {
    if report.degenerate_lines.is_empty() {
        return None;
    }

    let lines: Vec<String> = report
        .degenerate_lines
        .iter()
        .map(|n| n.to_string())
        .collect();

    Some(
        format!(
            "Warning: {} malformed {} loaded as empty events (line {})",
            lines.len(),
            pluralize("line", lines.len()),
            lines.join(", ")
        )
        .yellow()
        .to_string(),
    )
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_render_shows_all_fields() {
        let event = Event::new("Standup", "01-03-2024", "09:00", "Meeting", "Room1");
        let out = event.render();

        for value in ["Standup", "01-03-2024", "09:00", "Meeting", "Room1"] {
            assert!(out.contains(value), "missing {value}");
        }
    }

    #[test]
    fn test_empty_location_rendered_as_none() {
        let event = Event::new("Standup", "01-03-2024", "09:00", "Meeting", "");
        assert!(event.render().contains("(none)"));
    }

    #[test]
    fn test_slot_render() {
        let filled = Slot {
            hour: 9,
            event: Some("Standup".to_string()),
        };
        let empty = Slot {
            hour: 14,
            event: None,
        };

        assert!(filled.render().contains("09:00"));
        assert!(filled.render().contains("Standup"));
        assert!(empty.render().contains("14:00"));
    }

    #[test]
    fn test_load_warning_only_for_degenerate_lines() {
        assert_eq!(render_load_warning(&LoadReport::default()), None);

        let report = LoadReport {
            loaded: 4,
            degenerate_lines: vec![2, 7],
        };
        let warning = render_load_warning(&report).unwrap();
        assert!(warning.contains("2 malformed lines"));
        assert!(warning.contains("line 2, 7"));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 0), "events");
        assert_eq!(pluralize("line", 3), "lines");
    }
}
