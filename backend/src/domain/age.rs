//! Age calculations for member cards and detail views.
//!
//! Two calculations exist. `calendar_year_age` subtracts birth year from the
//! current year and ignores month and day, so it runs one year ahead between
//! New Year and the birthday. `precise_age` only counts completed years.
//! Rendering uses whichever one [`AgePolicy`] selects, for cards and detail
//! views alike.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgePolicy {
    /// `current year - birth year`
    #[default]
    CalendarYear,
    /// Completed years as of today
    Precise,
}

impl AgePolicy {
    pub fn age(self, date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
        match self {
            AgePolicy::CalendarYear => calendar_year_age(date_of_birth, today),
            AgePolicy::Precise => precise_age(date_of_birth, today),
        }
    }
}

pub fn calendar_year_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - date_of_birth.year()
}

pub fn precise_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = calendar_year_age(date_of_birth, today);
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// "Age N", or `None` when there is no positive age to show
pub fn age_label(age: i32) -> Option<String> {
    (age > 0).then(|| format!("Age {}", age))
}
