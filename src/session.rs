//! The interactive calendar session.
//!
//! Draws the screen, reads a command line, applies it to the store and
//! redraws. All state lives here for the lifetime of the process.

use std::io::Write;

use anyhow::Result;
use calgrid_core::{CalendarStore, CalgridConfig, EventId, NewEventForm};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use clap::error::ErrorKind;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::commands::{self, Flow, Line};
use crate::render::{Render, Screen};
use crate::utils::tui::ReadLine;

const PROMPT: &str = "calgrid";

pub struct Session {
    pub store: CalendarStore,
    pub form: NewEventForm,
    pub config: CalgridConfig,
    clock: Box<dyn Fn() -> NaiveDateTime>,
}

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

impl Session {
    pub fn new(store: CalendarStore, config: CalgridConfig) -> Self {
        Session {
            store,
            form: NewEventForm::new(local_now().time()),
            config,
            clock: Box::new(local_now),
        }
    }

    /// Replace the wall clock, e.g. to pin "now" in tests.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'static) -> Self {
        self.form = NewEventForm::new(clock().time());
        self.clock = Box::new(clock);
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    pub fn selected_date(&self) -> Result<NaiveDate> {
        self.store
            .selected_date()
            .ok_or_else(|| anyhow::anyhow!("Select a date first"))
    }

    /// The event at 1-based `row` of the selected day's list, with the day
    /// it is filed under.
    pub fn event_at_row(&self, row: usize) -> Result<(NaiveDate, EventId)> {
        let date = self.selected_date()?;
        let events = self.store.events_on(date);

        row.checked_sub(1)
            .and_then(|i| events.get(i))
            .map(|event| (date, event.id))
            .ok_or_else(|| anyhow::anyhow!("No event at row {}", row))
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self, input: &mut impl ReadLine, out: &mut impl Write) -> Result<()> {
        self.draw(out)?;

        while let Some(line) = input.read_line(PROMPT)? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.execute(line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Redraw) => self.draw(out)?,
                Ok(Flow::Stay) => {}
                Err(e) => writeln!(out, "  {}", e.to_string().red())?,
            }
        }

        Ok(())
    }

    fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        debug!(line, "command");

        let parsed = match Line::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Stay);
            }
            Err(e) => anyhow::bail!("{}", e.render().to_string().trim_end()),
        };

        let flow = commands::run(self, parsed.command.keep_spacing(line))?;
        self.close_hidden_edit();
        Ok(flow)
    }

    /// An edit row that is no longer on screen stops being edited.
    fn close_hidden_edit(&mut self) {
        if self.store.selected_event().is_some() && self.store.editing_event().is_none() {
            debug!("edited event left the screen");
            self.store.select_event_for_edit(None);
        }
    }

    fn draw(&self, out: &mut impl Write) -> Result<()> {
        let screen = Screen::new(&self.store, &self.config, self.today());
        writeln!(out, "{}", screen.render())?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::tui::Lines;
    use std::io::Cursor;

    pub(crate) fn at_noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    /// Session showing the month of `now`, with today selected.
    pub(crate) fn session_on(now: NaiveDateTime) -> Session {
        let mut store = CalendarStore::new(now.date());
        store.activate(now.date());
        Session::new(store, CalgridConfig::default()).with_clock(move || now)
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut input = Lines::new(Cursor::new(script.to_string()));
        let mut out = Vec::new();
        session.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn script_adds_and_edits_events() {
        let mut session = session_on(at_noon(2024, 3, 20));
        run_script(
            &mut session,
            "select 5\nadd --at 12:00 Lunch with Sam\nadd --at 19:00 Dinner\nedit 1\ntitle Brunch\ndone\ntime 2 20:30\n",
        );

        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let events = session.store.events_on(day);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Brunch");
        assert_eq!(events[1].title, "Dinner");
        assert_eq!(events[1].time.format("%H:%M").to_string(), "20:30");
        assert_eq!(session.store.selected_event(), None);
    }

    #[test]
    fn titles_keep_typed_spacing() {
        let mut session = session_on(at_noon(2024, 3, 20));
        run_script(&mut session, "add --at 12:00 Lunch  with   Sam\nadd --at 13:00 x\nedit 2\ntitle Coffee   break\n");

        let day = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let events = session.store.events_on(day);
        assert_eq!(events[0].title, "Lunch  with   Sam");
        assert_eq!(events[1].title, "Coffee   break");
    }

    #[test]
    fn quit_stops_reading() {
        let mut session = session_on(at_noon(2024, 3, 20));
        run_script(&mut session, "next\nquit\nnext\n");
        assert_eq!(session.store.displayed_month().to_string(), "2024-04");
    }

    #[test]
    fn errors_are_reported_and_session_continues() {
        let mut session = session_on(at_noon(2024, 3, 20));
        let output = run_script(&mut session, "select 40\nfrobnicate\nnext\n");

        assert!(output.contains("March 2024 has no day 40"));
        assert!(output.contains("frobnicate"));
        assert_eq!(session.store.displayed_month().to_string(), "2024-04");
    }

    #[test]
    fn help_lists_commands() {
        let mut session = session_on(at_noon(2024, 3, 20));
        let output = run_script(&mut session, "help\n");
        assert!(output.contains("select"));
        assert!(output.contains("Add an event to the selected day"));
    }

    #[test]
    fn selecting_another_day_closes_edit() {
        let mut session = session_on(at_noon(2024, 3, 20));
        run_script(&mut session, "add --at 12:00 Lunch\nedit 1\n");
        assert!(session.store.selected_event().is_some());

        run_script(&mut session, "select 21\n");
        assert_eq!(session.store.selected_event(), None);
    }

    #[test]
    fn navigation_output_shows_new_month() {
        let mut session = session_on(at_noon(2024, 12, 20));
        let output = run_script(&mut session, "next\n");
        assert!(output.contains("December 2024"));
        assert!(output.contains("January 2025"));
        assert!(output.contains("Select a date to view events"));
    }
}
