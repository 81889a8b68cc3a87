//! Core types for calgrid.
//!
//! This crate holds everything the calendar screen needs apart from drawing:
//! - `month`: year+month values and the day list behind the grid
//! - `store`: `CalendarStore`, the events per day and the selection cursors
//! - `form`: the new-event form the add action submits
//! - `config`: user preferences loaded from TOML

pub mod config;
pub mod error;
pub mod event;
pub mod form;
pub mod month;
pub mod parse;
pub mod store;

pub use config::{CalgridConfig, TimeFormat};
pub use error::{CalGridError, CalGridResult};
pub use event::{Event, EventId};
pub use form::NewEventForm;
pub use month::{Direction, WeekStart, YearMonth};
pub use store::{CalendarStore, Regrouping};
