//! Type definitions and constants for calendar formatting.

use std::fmt;

use crate::error::ArgError;

/// Year and optional month selected on the command line.
///
/// Construction range-checks both values, so a `ResolvedTarget` always
/// names a renderable calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget {
    year: i32,
    month: Option<u32>,
}

impl ResolvedTarget {
    /// Validate year (1..9999) first, then month (1..12) when present.
    ///
    /// `year` is `None` when no argument supplied one (e.g. four tokens
    /// without `-y`); that is reported as an empty out-of-range year.
    pub fn new(year: Option<Numeral>, month: Option<Numeral>) -> Result<Self, ArgError> {
        let year = match year.as_ref().and_then(Numeral::value) {
            Some(y) if (MIN_YEAR..=MAX_YEAR).contains(&y) => y as i32,
            _ => {
                return Err(ArgError::YearOutOfRange(
                    year.map(|y| y.to_string()).unwrap_or_default(),
                ));
            }
        };

        let month = match month {
            None => None,
            Some(m) => match m.value() {
                Some(v) if (1..=12).contains(&v) => Some(v as u32),
                _ => return Err(ArgError::MonthOutOfRange(m.to_string())),
            },
        };

        Ok(ResolvedTarget { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `None` means the whole year is shown.
    pub fn month(&self) -> Option<u32> {
        self.month
    }
}

/// Integer read from a command-line value, kept as canonical decimal text
/// (no leading zeros, `-` only for non-zero values) so that numbers of any
/// length are reported exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral(String);

impl Numeral {
    pub fn from_digits(negative: bool, digits: &str) -> Self {
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            Numeral("0".to_string())
        } else if negative {
            Numeral(format!("-{}", digits))
        } else {
            Numeral(digits.to_string())
        }
    }

    /// `None` when the number does not fit in an `i64`.
    pub fn value(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl From<i64> for Numeral {
    fn from(n: i64) -> Self {
        Numeral(n.to_string())
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar data for a single month: 6 weeks of Sunday-first cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    pub year: i32,
    pub month: u32,
    /// `None` is a blank cell.
    pub days: Vec<Option<u32>>,
}

pub const MIN_YEAR: i64 = 1;
pub const MAX_YEAR: i64 = 9999;

// Constants for calendar formatting
pub const CELLS_PER_MONTH: usize = 42; // 6 weeks × 7 days
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKDAY_HEADER: &str = " 日 月 火 水 木 金 土";
pub const MONTH_SUFFIX: &str = "月";
pub const BLANK_CELL: &str = "  ";
