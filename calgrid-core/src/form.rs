//! The new-event form the add action reads from.

use chrono::NaiveTime;

use crate::event::EventId;
use crate::store::CalendarStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEventForm {
    pub title: String,
    pub time: NaiveTime,
}

impl NewEventForm {
    /// Blank form with the time preset to `now`.
    pub fn new(now: NaiveTime) -> Self {
        NewEventForm {
            title: String::new(),
            time: now,
        }
    }

    /// Add the form's event to the selected day, then clear the form.
    ///
    /// Without a selected day nothing is added, but the form is still
    /// cleared.
    pub fn submit(&mut self, store: &mut CalendarStore, now: NaiveTime) -> Option<EventId> {
        let title = std::mem::take(&mut self.title);
        let added = store
            .selected_date()
            .map(|date| store.add_event(date, title, self.time));
        self.reset(now);
        added
    }

    pub fn reset(&mut self, now: NaiveTime) {
        self.title.clear();
        self.time = now;
    }
}
