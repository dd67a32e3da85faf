//! Month grids of the events calendar.

use std::fmt;

use thiserror::Error;

use crate::entities::{Date, Event, Month};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMonth {
    #[error("Month index {0} is out of range 0..=11")]
    Index(u8),
    #[error("Year {0} is not supported")]
    Year(i32),
}

fn month_of(month0: u8) -> Result<Month, InvalidMonth> {
    if month0 > 11 {
        return Err(InvalidMonth::Index(month0));
    }
    Month::try_from(month0 + 1).map_err(|_| InvalidMonth::Index(month0))
}

fn first_day(year: i32, month0: u8) -> Result<Date, InvalidMonth> {
    let month = month_of(month0)?;
    Date::from_calendar_date(year, month, 1).map_err(|_| InvalidMonth::Year(year))
}

/// The cells of a month grid with weeks starting on Sunday.
///
/// The first `n` cells are blank where `n` is the weekday index of the
/// first day (Sunday = 0), followed by the days `1..=days_in_month`.
pub fn month_cells(year: i32, month0: u8) -> Result<Vec<Option<u8>>, InvalidMonth> {
    let first = first_day(year, month0)?;
    let leading_blanks = usize::from(first.weekday().number_days_from_sunday());
    let days = first.month().length(year);
    let mut cells = vec![None; leading_blanks];
    cells.extend((1..=days).map(Some));
    Ok(cells)
}

/// A month shown by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    year: i32,
    month0: u8,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u8) -> Result<Self, InvalidMonth> {
        first_day(year, month0)?;
        Ok(Self { year, month0 })
    }

    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month0: u8::from(date.month()) - 1,
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Zero based month index, January = 0.
    pub const fn month0(&self) -> u8 {
        self.month0
    }

    pub fn month(&self) -> Month {
        self.first_day().month()
    }

    /// `None` at the edge of the supported date range.
    pub fn previous(&self) -> Option<Self> {
        if self.month0 == 0 {
            Self::new(self.year.checked_sub(1)?, 11).ok()
        } else {
            Some(Self {
                year: self.year,
                month0: self.month0 - 1,
            })
        }
    }

    /// `None` at the edge of the supported date range.
    pub fn next(&self) -> Option<Self> {
        if self.month0 == 11 {
            Self::new(self.year.checked_add(1)?, 0).ok()
        } else {
            Some(Self {
                year: self.year,
                month0: self.month0 + 1,
            })
        }
    }

    pub fn first_day(&self) -> Date {
        // Validated on construction
        first_day(self.year, self.month0).unwrap_or(Date::MIN)
    }

    pub fn days(&self) -> u8 {
        self.month().length(self.year)
    }

    pub fn cells(&self) -> Vec<Option<u8>> {
        month_cells(self.year, self.month0).unwrap_or_default()
    }

    fn date_of(&self, day: u8) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month(), day).ok()
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.month(), self.year)
    }
}

/// A month grid together with the events taking place in it.
#[derive(Debug, Clone)]
pub struct CalendarMonth<'a> {
    pub cursor: MonthCursor,
    cells: Vec<Option<u8>>,
    events: Vec<&'a Event>,
}

impl<'a> CalendarMonth<'a> {
    /// Keeps the events dated within the month; undated events are ignored.
    pub fn new(cursor: MonthCursor, events: &'a [Event]) -> Self {
        let events = events
            .iter()
            .filter(|e| {
                e.date
                    .is_some_and(|d| d.year() == cursor.year && d.month() == cursor.month())
            })
            .collect();
        Self {
            cursor,
            cells: cursor.cells(),
            events,
        }
    }

    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    pub fn has_event(&self, day: u8) -> bool {
        self.cursor
            .date_of(day)
            .is_some_and(|date| self.events.iter().any(|e| e.is_on(date)))
    }

    pub fn events_on(&self, day: u8) -> Vec<&'a Event> {
        let Some(date) = self.cursor.date_of(day) else {
            return vec![];
        };
        self.events
            .iter()
            .copied()
            .filter(|e| e.is_on(date))
            .collect()
    }

    /// Days with at least one event, ascending.
    pub fn event_days(&self) -> Vec<u8> {
        self.cells
            .iter()
            .flatten()
            .copied()
            .filter(|day| self.has_event(*day))
            .collect()
    }

    /// One line per event in date order, with the free seats of
    /// limited events.
    pub fn agenda(&self) -> Vec<String> {
        self.event_days()
            .into_iter()
            .flat_map(|day| {
                self.events_on(day).into_iter().map(move |event| {
                    let time = event.time.as_deref().unwrap_or_default();
                    let location = event.location.as_deref().unwrap_or("N/A");
                    let mut line = format!("{day:>3} {time:<8} {} @ {location}", event.title);
                    if let Some(seats) = event.free_seats() {
                        line.push_str(&format!(" ({seats} seats left)"));
                    }
                    line
                })
            })
            .collect()
    }
}

impl fmt::Display for CalendarMonth<'_> {
    /// Renders a week grid; days with events are marked with `*`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.cursor)?;
        writeln!(f, " Su  Mo  Tu  We  Th  Fr  Sa")?;
        for week in self.cells.chunks(7) {
            let line = week
                .iter()
                .map(|cell| match cell {
                    Some(day) if self.has_event(*day) => format!("{day:>3}*"),
                    Some(day) => format!("{day:>3} "),
                    None => "    ".to_owned(),
                })
                .collect::<String>();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
