use chrono::{Datelike, Month, NaiveDate};

/// Number of candidate birthdays.
pub const DATE_COUNT: usize = 366;

/// Highest valid index into the sequence.
pub const LAST_INDEX: usize = DATE_COUNT - 1;

const REFERENCE_YEAR: i32 = 2024;

/// Every calendar day from January 1 to December 31 of the reference year,
/// in chronological order. February 29 sits at index 59.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSequence {
    dates: Vec<NaiveDate>,
}

impl DateSequence {
    pub fn new() -> Self {
        let start = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, 1)
            .expect("January 1 of the reference year is a valid date");

        Self {
            dates: start.iter_days().take(DATE_COUNT).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.dates.get(index).copied()
    }

    /// Renders the date at `index` as spoken in questions, e.g. "July 01".
    pub fn format(&self, index: usize) -> Option<String> {
        self.get(index).map(format_date)
    }

    /// Index of the first date falling on `day` of `month`.
    pub fn position(&self, month: Month, day: u32) -> Option<usize> {
        let month_number = month.number_from_month();
        self.dates
            .iter()
            .position(|d| d.month() == month_number && d.day() == day)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

impl Default for DateSequence {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %d").to_string()
}
