//! Terminal rendering for the calendar screen.
//!
//! Colors come from owo_colors; layout is plain fixed-width text so the grid
//! lines up whatever the styling.

use calgrid_core::{CalendarStore, CalgridConfig, Event, TimeFormat, WeekStart, YearMonth};
use chrono::{Datelike, NaiveDate, Weekday};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Everything on screen: month title, day grid, selected day's events.
pub struct Screen<'a> {
    store: &'a CalendarStore,
    config: &'a CalgridConfig,
    today: NaiveDate,
}

impl<'a> Screen<'a> {
    pub fn new(store: &'a CalendarStore, config: &'a CalgridConfig, today: NaiveDate) -> Self {
        Screen {
            store,
            config,
            today,
        }
    }
}

impl Render for Screen<'_> {
    fn render(&self) -> String {
        let mut lines = vec![String::new(), render_title(self.store.displayed_month())];
        lines.extend(render_grid(self.store, self.config.week_start, self.today));
        lines.push(String::new());
        lines.extend(render_events(self.store, self.config.time_format));
        lines.join("\n")
    }
}

fn render_title(month: YearMonth) -> String {
    format!(
        "  {}   {}",
        CalendarStore::format_month_label(month).bold(),
        "prev / next".dimmed()
    )
}

/// Weekday header plus one line per week.
fn render_grid(store: &CalendarStore, week_start: WeekStart, today: NaiveDate) -> Vec<String> {
    let month = store.displayed_month();
    let with_events = store.dates_with_events(month);
    let selected = store.selected_date();

    let header = week_start
        .weekdays()
        .iter()
        .map(|w| format!("{:>3}", weekday_abbrev(*w)))
        .collect::<Vec<_>>()
        .join(" ");

    let mut cells = vec!["   ".to_string(); month.leading_blanks(week_start)];
    for date in store.displayed_dates() {
        cells.push(render_day(
            date,
            selected == Some(date),
            with_events.contains(&date),
            date == today,
        ));
    }

    let mut lines = vec![header.dimmed().to_string()];
    lines.extend(cells.chunks(7).map(|week| week.join(" ")));
    lines
}

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// A three-column day cell, with a dot when the day has events.
fn render_day(date: NaiveDate, selected: bool, has_events: bool, today: bool) -> String {
    let marker = if has_events { "•" } else { " " };
    let cell = format!("{:>2}{}", date.day(), marker);

    if selected {
        cell.black().on_blue().to_string()
    } else if today {
        cell.underline().to_string()
    } else if has_events {
        cell.bold().to_string()
    } else {
        cell
    }
}

fn render_events(store: &CalendarStore, time_format: TimeFormat) -> Vec<String> {
    let Some(date) = store.selected_date() else {
        return vec![format!("  {}", "Select a date to view events".dimmed())];
    };

    let events = store.events_on(date);
    if events.is_empty() {
        return vec![format!("  {}", "No events for this date".dimmed())];
    }

    let editing = store.editing_event().map(|e| e.id);
    let mut lines = vec![format!("  {}", date.format("%A, %B %-d").bold())];
    lines.extend(
        events
            .iter()
            .enumerate()
            .map(|(i, event)| {
                render_event_row(i + 1, event, editing == Some(event.id), time_format)
            }),
    );
    lines
}

fn render_event_row(row: usize, event: &Event, editing: bool, time_format: TimeFormat) -> String {
    let marker = if editing { ">".yellow().to_string() } else { " ".to_string() };

    let title = if editing {
        format!("{}_", event.title).yellow().to_string()
    } else if event.title.is_empty() {
        "(untitled)".dimmed().to_string()
    } else {
        event.title.clone()
    };

    format!(
        "{} {:>2}. {}  {:>8}  {}",
        marker,
        row,
        event.render_date().dimmed(),
        event.render_time(time_format),
        title
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn plain_grid(store: &CalendarStore, week_start: WeekStart) -> Vec<String> {
        render_grid(store, week_start, d(2000, 1, 1))
            .iter()
            .map(|l| strip_ansi(l))
            .collect()
    }

    #[test]
    fn grid_starts_on_configured_weekday() {
        let store = CalendarStore::new(d(2024, 3, 10));

        let monday = plain_grid(&store, WeekStart::Monday);
        assert_eq!(monday[0], " Mo  Tu  We  Th  Fr  Sa  Su");
        assert_eq!(
            monday[1].split_whitespace().collect::<Vec<_>>(),
            vec!["1", "2", "3"]
        );
        assert_eq!(monday.len(), 1 + 5);

        let sunday = plain_grid(&store, WeekStart::Sunday);
        assert_eq!(sunday[0], " Su  Mo  Tu  We  Th  Fr  Sa");
        assert_eq!(sunday[1].split_whitespace().collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(sunday.len(), 1 + 6);
    }

    #[test]
    fn grid_columns_line_up() {
        let store = CalendarStore::new(d(2024, 3, 10));
        let grid = plain_grid(&store, WeekStart::Monday);
        // Every full week is seven 3-wide cells joined by single spaces
        assert_eq!(grid[2].chars().count(), 7 * 3 + 6);
        assert_eq!(
            grid[2].split_whitespace().collect::<Vec<_>>(),
            vec!["4", "5", "6", "7", "8", "9", "10"]
        );
    }

    #[test]
    fn days_with_events_are_marked() {
        let mut store = CalendarStore::new(d(2024, 3, 10));
        store.add_event(d(2024, 3, 20), "Lunch", t(12, 0));

        let grid = plain_grid(&store, WeekStart::Monday).join("\n");
        assert!(grid.contains("20•"));
        assert!(!grid.contains("21•"));
    }

    #[test]
    fn selected_day_is_highlighted() {
        let plain = render_day(d(2024, 3, 20), false, false, false);
        let selected = render_day(d(2024, 3, 20), true, false, false);
        assert_eq!(plain, "20 ");
        assert_ne!(selected, plain);
        assert_eq!(strip_ansi(&selected), plain);
    }

    #[test]
    fn events_list_placeholders() {
        let mut store = CalendarStore::new(d(2024, 3, 10));
        let lines = render_events(&store, TimeFormat::H24);
        assert_eq!(strip_ansi(&lines[0]), "  Select a date to view events");

        store.select_date(d(2024, 3, 20));
        let lines = render_events(&store, TimeFormat::H24);
        assert_eq!(strip_ansi(&lines[0]), "  No events for this date");
    }

    #[test]
    fn events_list_rows() {
        let mut store = CalendarStore::new(d(2024, 3, 10));
        let day = d(2024, 3, 20);
        store.select_date(day);
        store.add_event(day, "Lunch", t(12, 0));
        let dinner = store.add_event(day, "", t(19, 0));
        store.select_event_for_edit(Some(dinner));

        let lines: Vec<String> = render_events(&store, TimeFormat::H12)
            .iter()
            .map(|l| strip_ansi(l))
            .collect();

        assert_eq!(lines[0], "  Wednesday, March 20");
        assert_eq!(lines[1], "   1. Mar 20, 2024  12:00 PM  Lunch");
        assert_eq!(lines[2], ">  2. Mar 20, 2024   7:00 PM  _");
    }

    #[test]
    fn screen_has_title_grid_and_list() {
        let mut store = CalendarStore::new(d(2024, 3, 10));
        store.activate(d(2024, 3, 10));
        let config = CalgridConfig::default();

        let screen = strip_ansi(&Screen::new(&store, &config, d(2024, 3, 10)).render());
        assert!(screen.contains("March 2024"));
        assert!(screen.contains(" Mo  Tu"));
        assert!(screen.contains("No events for this date"));
    }
}
