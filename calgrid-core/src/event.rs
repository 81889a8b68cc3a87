//! Events attached to calendar days.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use crate::config::TimeFormat;

/// Stable identifier assigned by the store when an event is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub(crate) u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A titled event on a calendar day.
///
/// `PartialEq` compares ids too. Use [`Event::same_content`] for the
/// structural comparison of title, date and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Event {
    pub(crate) fn new(id: EventId, title: String, date: NaiveDate, time: NaiveTime) -> Self {
        Event {
            id,
            title,
            date,
            time,
        }
    }

    /// True when title, date and time all match, whatever the ids.
    pub fn same_content(&self, other: &Event) -> bool {
        self.matches(&other.title, other.date, other.time)
    }

    pub fn matches(&self, title: &str, date: NaiveDate, time: NaiveTime) -> bool {
        self.title == title && self.date == date && self.time == time
    }

    /// Medium date style, e.g. "Mar 20, 2024"
    pub fn render_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    /// Short time style, e.g. "15:00" or "3:00 PM"
    pub fn render_time(&self, format: TimeFormat) -> String {
        match format {
            TimeFormat::H24 => self.time.format("%H:%M").to_string(),
            TimeFormat::H12 => self.time.format("%-I:%M %p").to_string(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.title,
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M")
        )
    }
}
