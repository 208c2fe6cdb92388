mod weekday;

pub use weekday::{leading_offset_of, weekday_labels};

use chrono::Weekday;
use std::collections::BTreeSet;
use std::iter::FromIterator;

use crate::error::{Error, ErrorKind, Result};

pub const COLUMNS: usize = 7;

/// Shape of a month sheet: how many days it has and how many empty cells
/// precede day 1 (Monday-first week).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLayout {
    days_in_month: u8,
    leading_offset: u8,
}

impl MonthLayout {
    pub const MAX_DAYS: u8 = 31;
    pub const MAX_OFFSET: u8 = COLUMNS as u8 - 1;

    pub fn new(days_in_month: u8, leading_offset: u8) -> Result<Self> {
        if days_in_month == 0 || days_in_month > Self::MAX_DAYS {
            return Err(Error::new(
                ErrorKind::InvalidLayout,
                &format!(
                    "days in month {} out of range 1..={}",
                    days_in_month,
                    Self::MAX_DAYS
                ),
            ));
        }

        if leading_offset > Self::MAX_OFFSET {
            return Err(Error::new(
                ErrorKind::InvalidLayout,
                &format!(
                    "leading offset {} out of range 0..={}",
                    leading_offset,
                    Self::MAX_OFFSET
                ),
            ));
        }

        Ok(MonthLayout {
            days_in_month,
            leading_offset,
        })
    }

    /// Layout for a month whose first day falls on `first_day`.
    pub fn starting_on(days_in_month: u8, first_day: Weekday) -> Result<Self> {
        Self::new(days_in_month, leading_offset_of(first_day))
    }

    pub fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    pub fn leading_offset(&self) -> u8 {
        self.leading_offset
    }

    /// Total number of cells including placeholders.
    pub fn len(&self) -> usize {
        self.leading_offset as usize + self.days_in_month as usize
    }

    pub fn contains(&self, day_num: u8) -> bool {
        (1..=self.days_in_month).contains(&day_num)
    }

    pub fn cells<'m>(&self, today: TodayMarker, marked: &'m MarkedDays) -> Cells<'m> {
        Cells {
            layout: *self,
            today,
            marked,
            pos: 0,
        }
    }

    /// Cells chunked into rows of seven. The last row is not padded.
    pub fn weeks(&self, today: TodayMarker, marked: &MarkedDays) -> Vec<Vec<GridCell>> {
        self.cells(today, marked)
            .collect::<Vec<GridCell>>()
            .chunks(COLUMNS)
            .map(|row| row.to_vec())
            .collect()
    }
}

/// Day number highlighted as today. Any integer is accepted, one outside
/// the month simply matches no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodayMarker(i64);

impl TodayMarker {
    pub fn new<T: Into<i64>>(day_num: T) -> Self {
        TodayMarker(day_num.into())
    }

    pub fn day_num(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedDays(BTreeSet<u8>);

impl MarkedDays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day_num: u8) -> bool {
        self.0.insert(day_num)
    }

    pub fn contains(&self, day_num: u8) -> bool {
        self.0.contains(&day_num)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u8> for MarkedDays {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        MarkedDays(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    day_num: u8,
    is_today: bool,
    is_marked: bool,
    is_past: bool,
}

impl DayCell {
    pub fn new(day_num: u8, today: TodayMarker, marked: &MarkedDays) -> Self {
        DayCell {
            day_num,
            is_today: i64::from(day_num) == today.day_num(),
            is_marked: marked.contains(day_num),
            is_past: i64::from(day_num) < today.day_num(),
        }
    }

    pub fn day_num(&self) -> u8 {
        self.day_num
    }

    pub fn is_today(&self) -> bool {
        self.is_today
    }

    pub fn is_marked(&self) -> bool {
        self.is_marked
    }

    pub fn is_past(&self) -> bool {
        self.is_past
    }

    // Today styling overrides both the marked and the past treatment.

    pub fn shows_today(&self) -> bool {
        self.is_today
    }

    pub fn shows_marked(&self) -> bool {
        self.is_marked && !self.is_today
    }

    pub fn shows_past(&self) -> bool {
        self.is_past && !self.is_today
    }

    pub fn shows_upcoming(&self) -> bool {
        !self.is_past && !self.is_today
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Placeholder,
    Day(DayCell),
}

impl GridCell {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, GridCell::Placeholder)
    }

    pub fn day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Day(cell) => Some(cell),
            GridCell::Placeholder => None,
        }
    }
}

/// Lazy cell sequence of a [`MonthLayout`]: placeholders first, then days
/// in ascending order.
#[derive(Debug, Clone)]
pub struct Cells<'m> {
    layout: MonthLayout,
    today: TodayMarker,
    marked: &'m MarkedDays,
    pos: usize,
}

impl Iterator for Cells<'_> {
    type Item = GridCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.layout.len() {
            return None;
        }

        let offset = self.layout.leading_offset as usize;
        let cell = if self.pos < offset {
            GridCell::Placeholder
        } else {
            let day_num = (self.pos - offset + 1) as u8;
            GridCell::Day(DayCell::new(day_num, self.today, self.marked))
        };

        self.pos += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.layout.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}
