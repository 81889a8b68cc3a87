//! Year+month values and the date arithmetic behind the month grid.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::Deserialize;

use crate::error::{CalGridError, CalGridResult};

/// A calendar month of a specific year.
///
/// Stored as the first day of the month, so every value is a real month
/// that chrono can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

/// Direction for stepping the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// First column of the month grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Weekdays in grid column order.
    pub fn weekdays(self) -> [Weekday; 7] {
        let first = match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        };
        let mut days = [first; 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }

    /// Column index of `weekday` in the grid.
    pub fn column(self, weekday: Weekday) -> usize {
        let offset = match self {
            WeekStart::Monday => weekday.num_days_from_monday(),
            WeekStart::Sunday => weekday.num_days_from_sunday(),
        };
        offset as usize
    }
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> CalGridResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalGridError::InvalidMonth { month });
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| YearMonth { first })
            .ok_or(CalGridError::YearOutOfRange(year))
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Every day of the month in ascending order, day 1 through the last day.
    pub fn dates(&self) -> Vec<NaiveDate> {
        (1..=31).map_while(|day| self.first.with_day(day)).collect()
    }

    pub fn last_day(&self) -> NaiveDate {
        (29..=31)
            .map_while(|day| self.first.with_day(day))
            .last()
            .unwrap_or_else(|| self.first + Days::new(27))
    }

    /// Number of days in the month (28 to 31).
    pub fn num_days(&self) -> u32 {
        self.last_day().day()
    }

    /// Day `day` of this month, if the month has that many days.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    pub fn succ(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| YearMonth { first })
    }

    pub fn pred(&self) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| YearMonth { first })
    }

    /// The neighbouring month, or None past the ends of the supported range.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Previous => self.pred(),
            Direction::Next => self.succ(),
        }
    }

    /// Human-readable label, e.g. "March 2024".
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Empty grid cells before day 1.
    pub fn leading_blanks(&self, week_start: WeekStart) -> usize {
        week_start.column(self.first.weekday())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = CalGridError;

    /// Parse YYYY-MM
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|_| CalGridError::MonthParse(s.to_string()))?;
        Ok(YearMonth { first })
    }
}
