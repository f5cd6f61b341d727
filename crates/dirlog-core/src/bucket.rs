//! Calendar-month buckets and their folder names.
//!
//! A bucket renders as `<FullMonthName>_<YYYY>` (for example `December_2024`)
//! and parses back from exactly that shape. Retention compares buckets by
//! month distance, so a bucket ages one unit each time a calendar month
//! boundary passes, independent of the day of month.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month};

use crate::error::BucketParseError;

/// Separator between the month name and the year in a folder name.
pub const BUCKET_SEPARATOR: char = '_';

/// Years that render as exactly four digits and so parse back.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// One calendar month of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthBucket {
    year: i32,
    month: u32,
}

impl MonthBucket {
    /// Rejects months outside `1..=12` and years outside [`YEAR_RANGE`].
    pub fn new(year: i32, month: u32) -> Result<Self, BucketParseError> {
        if !(1..=12).contains(&month) {
            return Err(BucketParseError::MonthOutOfRange(month));
        }
        if !YEAR_RANGE.contains(&year) {
            return Err(BucketParseError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Bucket containing `now`.
    ///
    /// Not range-checked: a clock outside years 0..=9999 yields a bucket
    /// whose name does not parse back, so its folder can never expire.
    pub fn current(now: &impl Datelike) -> Self {
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Full English month name, e.g. `"March"`.
    pub fn month_name(&self) -> &'static str {
        month_of(self.month).name()
    }

    /// Canonical folder name, e.g. `"December_2024"`.
    pub fn to_name(&self) -> String {
        format!("{}{}{:04}", self.month_name(), BUCKET_SEPARATOR, self.year)
    }

    /// Parse a folder name produced by [`MonthBucket::to_name`].
    ///
    /// Strict: exactly one `_`, a full month name (ASCII case-insensitive)
    /// and a year of exactly four ASCII digits. Anything else is an error.
    pub fn parse(name: &str) -> Result<Self, BucketParseError> {
        let (month_part, year_part) = name
            .split_once(BUCKET_SEPARATOR)
            .ok_or_else(|| BucketParseError::MissingSeparator(name.to_string()))?;
        if year_part.contains(BUCKET_SEPARATOR) {
            return Err(BucketParseError::ExtraSeparator(name.to_string()));
        }

        let month = month_from_name(month_part).ok_or_else(|| BucketParseError::UnknownMonth {
            name: name.to_string(),
            month: month_part.to_string(),
        })?;

        if year_part.len() != 4 || !year_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BucketParseError::InvalidYear {
                name: name.to_string(),
                year: year_part.to_string(),
            });
        }
        let year = year_part
            .parse::<i32>()
            .map_err(|_| BucketParseError::InvalidYear {
                name: name.to_string(),
                year: year_part.to_string(),
            })?;

        Ok(Self { year, month })
    }
}

/// Calendar-month boundaries crossed going from `from` to `to`.
///
/// Negative when `to` is earlier than `from`.
pub fn distance(from: MonthBucket, to: MonthBucket) -> i64 {
    (i64::from(to.year) - i64::from(from.year)) * 12 + (i64::from(to.month) - i64::from(from.month))
}

fn month_of(number: u32) -> Month {
    // `number` is validated to 1..=12 at construction.
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .unwrap_or(Month::January)
}

fn month_from_name(candidate: &str) -> Option<u32> {
    (1..=12u32).find(|&n| month_of(n).name().eq_ignore_ascii_case(candidate))
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_name())
    }
}

impl FromStr for MonthBucket {
    type Err = BucketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
