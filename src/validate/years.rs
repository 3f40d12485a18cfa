use chrono::{Datelike, Local};

/// Earliest graduation year the dataset accepts.
pub const FIRST_YEAR: i32 = 1990;

/// Inclusive range of accepted graduation years.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
}

impl YearRange {
    pub fn new(first: i32, last: i32) -> Self {
        Self { first, last }
    }

    /// `[1990, this year]`, read from the local wall clock.
    pub fn until_now() -> Self {
        Self::until(Local::now().year())
    }

    pub fn until(last: i32) -> Self {
        Self::new(FIRST_YEAR, last)
    }

    pub fn contains(&self, year: i64) -> bool {
        (self.first as i64..=self.last as i64).contains(&year)
    }
}
