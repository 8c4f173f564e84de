//! Month grid construction.
//!
//! A grid is rebuilt from scratch for every (month, events, selection)
//! combination. Building is pure; the same inputs always give the same grid.

use chrono::NaiveDate;

use crate::detail::DetailRow;
use crate::event::{DAY_KEY_FORMAT, LaunchEvent};
use crate::month::YearMonth;

pub const DAYS_PER_WEEK: usize = 7;

/// A single cell of a week row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the 1st of the month.
    Empty,
    Day {
        date: NaiveDate,
        /// Events launching on this date, in source order.
        events: Vec<LaunchEvent>,
    },
}

impl DayCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Empty => None,
            DayCell::Day { date, .. } => Some(*date),
        }
    }

    pub fn key(&self) -> Option<String> {
        self.date().map(|d| d.format(DAY_KEY_FORMAT).to_string())
    }

    pub fn events(&self) -> &[LaunchEvent] {
        match self {
            DayCell::Empty => &[],
            DayCell::Day { events, .. } => events,
        }
    }

    pub fn has_event(&self) -> bool {
        !self.events().is_empty()
    }

    /// The event a click on this cell targets.
    pub fn first_event(&self) -> Option<&LaunchEvent> {
        self.events().first()
    }

    /// Thumbnail of the first event, used as the cell background.
    pub fn thumbnail(&self) -> Option<&str> {
        self.first_event().map(|e| e.image_filename_thumb.as_str())
    }
}

/// Up to seven cells, Sunday first. Only the last week of a month may be short.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeekRow {
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridRow {
    Week(WeekRow),
    Detail(DetailRow),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub month: YearMonth,
    pub rows: Vec<GridRow>,
}

impl Grid {
    pub fn weeks(&self) -> impl Iterator<Item = &WeekRow> {
        self.rows.iter().filter_map(|row| match row {
            GridRow::Week(week) => Some(week),
            GridRow::Detail(_) => None,
        })
    }

    pub fn week_count(&self) -> usize {
        self.weeks().count()
    }

    /// Index of the detail row within `rows`, if present.
    pub fn detail_index(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| matches!(row, GridRow::Detail(_)))
    }

    pub fn detail(&self) -> Option<&DetailRow> {
        self.rows.iter().find_map(|row| match row {
            GridRow::Detail(detail) => Some(detail),
            GridRow::Week(_) => None,
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks().flat_map(|week| week.cells.iter())
    }

    /// The cell for `date`, if it falls in this month.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date() == Some(date))
    }
}

/// Build the grid for `month`, overlaying `events` and splicing `selection`
/// in as a detail row at `floor(weeks / 2)`.
pub fn build(month: YearMonth, events: &[LaunchEvent], selection: Option<&DetailRow>) -> Grid {
    let mut weeks: Vec<GridRow> = Vec::new();
    let mut week: Vec<DayCell> = Vec::with_capacity(DAYS_PER_WEEK);

    for _ in 0..month.first_weekday_index() {
        week.push(DayCell::Empty);
    }

    for date in month.days() {
        let matches = events
            .iter()
            .filter(|event| event.launch_date.date() == date)
            .cloned()
            .collect();
        week.push(DayCell::Day {
            date,
            events: matches,
        });

        if week.len() == DAYS_PER_WEEK {
            weeks.push(GridRow::Week(WeekRow {
                cells: std::mem::take(&mut week),
            }));
        }
    }

    if !week.is_empty() {
        weeks.push(GridRow::Week(WeekRow { cells: week }));
    }

    if let Some(detail) = selection {
        let mid = weeks.len() / 2;
        weeks.insert(mid, GridRow::Detail(detail.clone()));
    }

    Grid { month, rows: weeks }
}
