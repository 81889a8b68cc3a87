use anyhow::{Context, Result};
use calgrid_core::parse::{parse_date, parse_time};
use tracing::info;

use super::Flow;
use crate::session::Session;

/// Fill the new-event form and submit it to the selected day.
pub fn add(session: &mut Session, at: Option<&str>, title: &str) -> Result<Flow> {
    let now = session.now().time();

    session.form.time = match at {
        Some(at) => parse_time(at)?,
        None => now,
    };
    session.form.title = title.to_string();

    let id = session
        .form
        .submit(&mut session.store, now)
        .context("Select a date before adding events")?;

    info!(%id, title, "event added");
    Ok(Flow::Redraw)
}

/// Open the title of the event in `row` for editing.
pub fn begin(session: &mut Session, row: usize) -> Result<Flow> {
    let (_, id) = session.event_at_row(row)?;
    session.store.select_event_for_edit(Some(id));
    Ok(Flow::Redraw)
}

pub fn done(session: &mut Session) -> Result<Flow> {
    session.store.select_event_for_edit(None);
    Ok(Flow::Redraw)
}

/// Retitle the event currently being edited.
pub fn title(session: &mut Session, text: &str) -> Result<Flow> {
    let date = session.selected_date()?;
    let id = session
        .store
        .editing_event()
        .map(|e| e.id)
        .context("Pick an event with `edit <row>` first")?;

    session.store.set_event_title(date, id, text);
    Ok(Flow::Redraw)
}

pub fn date(session: &mut Session, row: usize, date: &str) -> Result<Flow> {
    let new_date = parse_date(date)?;
    let (filed_under, id) = session.event_at_row(row)?;
    session.store.set_event_date(filed_under, id, new_date);
    Ok(Flow::Redraw)
}

pub fn time(session: &mut Session, row: usize, time: &str) -> Result<Flow> {
    let new_time = parse_time(time)?;
    let (filed_under, id) = session.event_at_row(row)?;
    session.store.set_event_time(filed_under, id, new_time);
    Ok(Flow::Redraw)
}
