//! The calendar store: events per day plus the month/day/event cursors.
//!
//! Events live in one flat, insertion-ordered list. Each entry remembers the
//! day it is filed under, and the per-day list is a query over that list.
//! Edits locate events by [`EventId`] within the day they are filed under;
//! a miss is a silent no-op reported as `None`.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::event::{Event, EventId};
use crate::month::{Direction, YearMonth};

/// What happens to an event's filing when its date is edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Regrouping {
    /// The event moves to the end of its new day's list.
    #[default]
    FollowDate,
    /// The event stays listed under the day it was created on, even though
    /// its own date now says otherwise.
    Pinned,
}

#[derive(Debug, Clone)]
struct Filed {
    day: NaiveDate,
    event: Event,
}

#[derive(Debug, Clone)]
pub struct CalendarStore {
    entries: Vec<Filed>,
    next_id: u64,
    regrouping: Regrouping,
    displayed_month: YearMonth,
    selected_date: Option<NaiveDate>,
    selected_event: Option<EventId>,
}

impl CalendarStore {
    /// Empty store showing the month of `today`, nothing selected.
    pub fn new(today: NaiveDate) -> Self {
        CalendarStore {
            entries: Vec::new(),
            next_id: 1,
            regrouping: Regrouping::default(),
            displayed_month: YearMonth::of(today),
            selected_date: None,
            selected_event: None,
        }
    }

    pub fn with_regrouping(mut self, regrouping: Regrouping) -> Self {
        self.regrouping = regrouping;
        self
    }

    /// Initial selection when the calendar first becomes visible.
    pub fn activate(&mut self, today: NaiveDate) {
        self.selected_date = Some(today);
    }

    pub fn regrouping(&self) -> Regrouping {
        self.regrouping
    }

    pub fn displayed_month(&self) -> YearMonth {
        self.displayed_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_event(&self) -> Option<EventId> {
        self.selected_event
    }

    // --- Month ---

    /// Every day of `month`, ascending from day 1.
    pub fn generate_month_dates(month: YearMonth) -> Vec<NaiveDate> {
        month.dates()
    }

    pub fn displayed_dates(&self) -> Vec<NaiveDate> {
        Self::generate_month_dates(self.displayed_month)
    }

    pub fn format_month_label(month: YearMonth) -> String {
        month.label()
    }

    /// Step the displayed month and clear the selected day.
    pub fn navigate_month(&mut self, direction: Direction) {
        match self.displayed_month.step(direction) {
            Some(month) => self.displayed_month = month,
            None => warn!(
                month = %self.displayed_month,
                ?direction,
                "month out of supported range, staying put"
            ),
        }
        self.selected_date = None;
        debug!(month = %self.displayed_month, "navigated");
    }

    /// Display `month` with no day selected.
    pub fn show_month(&mut self, month: YearMonth) {
        self.displayed_month = month;
        self.selected_date = None;
    }

    /// Display the month containing `date` and select it.
    pub fn jump_to(&mut self, date: NaiveDate) {
        self.displayed_month = YearMonth::of(date);
        self.selected_date = Some(date);
    }

    /// Select a day. The event selection is left alone.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    // --- Events ---

    /// Append a new event to the list for `date`.
    pub fn add_event(
        &mut self,
        date: NaiveDate,
        title: impl Into<String>,
        time: NaiveTime,
    ) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;

        let event = Event::new(id, title.into(), date, time);
        debug!(%id, %date, title = %event.title, "added event");
        self.entries.push(Filed { day: date, event });
        id
    }

    pub fn set_event_title(
        &mut self,
        date: NaiveDate,
        id: EventId,
        title: impl Into<String>,
    ) -> Option<&Event> {
        let idx = self.position_on(date, id)?;
        let event = &mut self.entries[idx].event;
        event.title = title.into();
        debug!(%id, title = %event.title, "retitled event");
        Some(event)
    }

    pub fn set_event_time(
        &mut self,
        date: NaiveDate,
        id: EventId,
        time: NaiveTime,
    ) -> Option<&Event> {
        let idx = self.position_on(date, id)?;
        let event = &mut self.entries[idx].event;
        event.time = time;
        debug!(%id, time = %event.time, "retimed event");
        Some(event)
    }

    /// Change an event's date. Under [`Regrouping::FollowDate`] the event is
    /// re-filed at the end of `new_date`'s list; under [`Regrouping::Pinned`]
    /// it stays where it was.
    pub fn set_event_date(
        &mut self,
        date: NaiveDate,
        id: EventId,
        new_date: NaiveDate,
    ) -> Option<&Event> {
        let idx = self.position_on(date, id)?;
        self.entries[idx].event.date = new_date;

        let idx = match self.regrouping {
            Regrouping::FollowDate if self.entries[idx].day != new_date => {
                let mut filed = self.entries.remove(idx);
                filed.day = new_date;
                self.entries.push(filed);
                self.entries.len() - 1
            }
            _ => idx,
        };

        debug!(
            %id,
            from = %date,
            to = %new_date,
            regrouping = ?self.regrouping,
            "redated event"
        );
        Some(&self.entries[idx].event)
    }

    /// Mark an event as being edited, or clear the mark with `None`.
    pub fn select_event_for_edit(&mut self, id: Option<EventId>) {
        self.selected_event = id;
    }

    // --- Queries ---

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.entries.iter().map(|f| &f.event).find(|e| e.id == id)
    }

    /// Events filed under `date`, in the order they were added.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.entries
            .iter()
            .filter(|f| f.day == date)
            .map(|f| &f.event)
            .collect()
    }

    pub fn has_events_on(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|f| f.day == date)
    }

    /// Days of `month` that have at least one event filed under them.
    pub fn dates_with_events(&self, month: YearMonth) -> BTreeSet<NaiveDate> {
        self.entries
            .iter()
            .map(|f| f.day)
            .filter(|day| month.contains(*day))
            .collect()
    }

    /// The event marked for editing, if it is listed under the selected day.
    pub fn editing_event(&self) -> Option<&Event> {
        let date = self.selected_date?;
        let id = self.selected_event?;
        self.position_on(date, id).map(|idx| &self.entries[idx].event)
    }

    /// First event on `date` whose content matches. With duplicates, only
    /// the earliest is returned.
    pub fn find_same_content(
        &self,
        date: NaiveDate,
        title: &str,
        time: NaiveTime,
    ) -> Option<&Event> {
        self.entries
            .iter()
            .filter(|f| f.day == date)
            .map(|f| &f.event)
            .find(|e| e.matches(title, date, time))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position_on(&self, date: NaiveDate, id: EventId) -> Option<usize> {
        self.entries
            .iter()
            .position(|f| f.day == date && f.event.id == id)
    }
}
