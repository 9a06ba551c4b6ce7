//! Calendar month model.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A calendar month.
///
/// Serialized as the lowercase English name. Parsing also accepts the Danish
/// names shown on payslips, case-insensitively.
///
/// # Example
///
/// ```
/// use salary_engine::models::Month;
///
/// let month: Month = "Marts".parse().unwrap();
/// assert_eq!(month, Month::March);
/// assert_eq!(month.danish_name(), "Marts");
/// assert_eq!(month.number(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    /// January.
    January,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December.
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the month number, 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Returns the month for a number in `1..=12`.
    pub fn from_number(number: u32) -> Option<Month> {
        number
            .checked_sub(1)
            .and_then(|index| Month::ALL.get(index as usize).copied())
    }

    /// Returns the zero-based position in the year.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase English name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    /// Returns the Danish display name.
    pub fn danish_name(self) -> &'static str {
        match self {
            Month::January => "Januar",
            Month::February => "Februar",
            Month::March => "Marts",
            Month::April => "April",
            Month::May => "Maj",
            Month::June => "Juni",
            Month::July => "Juli",
            Month::August => "August",
            Month::September => "September",
            Month::October => "Oktober",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Returns the number of days in this month of `year`.
    ///
    /// `None` when `year` is outside the range chrono supports.
    pub fn days_in(self, year: i32) -> Option<u32> {
        NaiveDate::from_ymd_opt(year, self.number(), 1)
            .map(|first| u32::from(first.num_days_in_month()))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|month| {
                month.name() == wanted || month.danish_name().to_lowercase() == wanted
            })
            .ok_or_else(|| EngineError::UnknownMonth { name: s.to_string() })
    }
}
