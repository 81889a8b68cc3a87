pub mod edit;
pub mod navigate;

use anyhow::Result;
use calgrid_core::Direction;
use clap::{Parser, Subcommand};

use crate::session::Session;

/// One line typed at the calgrid prompt.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the next month
    Next,
    /// Show the previous month
    #[command(alias = "previous")]
    Prev,
    /// Show this month and select today
    Today,
    /// Select a day of the displayed month
    Select {
        /// Day of the month (1-31)
        day: u32,
    },
    /// Add an event to the selected day
    Add {
        /// Event time (HH:MM), defaults to now
        #[arg(long)]
        at: Option<String>,

        /// Event title
        #[arg(num_args = 1.., trailing_var_arg = true)]
        title: Vec<String>,
    },
    /// Edit the title of the event in this row
    Edit {
        /// Row in the selected day's list (starting at 1)
        row: usize,
    },
    /// Stop editing
    Done,
    /// Set the title of the event being edited
    Title {
        #[arg(num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Move the event in this row to another date (YYYY-MM-DD)
    Date { row: usize, date: String },
    /// Change the time of the event in this row (HH:MM)
    Time { row: usize, time: String },
    /// Redraw the calendar
    Show,
    /// Leave calgrid
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Give `add` and `title` the text exactly as typed on `line`; clap only
    /// sees whitespace-separated words.
    pub fn keep_spacing(mut self, line: &str) -> Self {
        let words = line.split_whitespace().count();
        match &mut self {
            Command::Add { title: text, .. } | Command::Title { text } if !text.is_empty() => {
                let raw = rest_after(line, words - text.len()).to_string();
                *text = vec![raw];
            }
            _ => {}
        }
        self
    }
}

/// `line` without its first `skip` words.
fn rest_after(line: &str, skip: usize) -> &str {
    let mut rest = line.trim_start();
    for _ in 0..skip {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = rest[end..].trim_start();
    }
    rest.trim_end()
}

/// What the session does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    Stay,
    Quit,
}

pub fn run(session: &mut Session, command: Command) -> Result<Flow> {
    match command {
        Command::Next => navigate::step(session, Direction::Next),
        Command::Prev => navigate::step(session, Direction::Previous),
        Command::Today => navigate::today(session),
        Command::Select { day } => navigate::select(session, day),
        Command::Add { at, title } => edit::add(session, at.as_deref(), &title.join(" ")),
        Command::Edit { row } => edit::begin(session, row),
        Command::Done => edit::done(session),
        Command::Title { text } => edit::title(session, &text.join(" ")),
        Command::Date { row, date } => edit::date(session, row, &date),
        Command::Time { row, time } => edit::time(session, row, &time),
        Command::Show => Ok(Flow::Redraw),
        Command::Quit => Ok(Flow::Quit),
    }
}
