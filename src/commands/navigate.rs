use anyhow::Result;
use calgrid_core::Direction;

use super::Flow;
use crate::session::Session;

pub fn step(session: &mut Session, direction: Direction) -> Result<Flow> {
    session.store.navigate_month(direction);
    Ok(Flow::Redraw)
}

pub fn today(session: &mut Session) -> Result<Flow> {
    let today = session.today();
    session.store.jump_to(today);
    Ok(Flow::Redraw)
}

/// Select a day of the displayed month.
pub fn select(session: &mut Session, day: u32) -> Result<Flow> {
    let month = session.store.displayed_month();
    let date = month
        .day(day)
        .ok_or_else(|| anyhow::anyhow!("{} has no day {}", month.label(), day))?;

    session.store.select_date(date);
    Ok(Flow::Redraw)
}
