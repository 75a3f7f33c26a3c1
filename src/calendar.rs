//! Calendar calculation logic on the proleptic Gregorian calendar.

use chrono::Weekday;

use crate::types::{CELLS_PER_MONTH, DAYS_PER_WEEK, WeekGrid};

/// Divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Calculate weekday of the 1st using Zeller's congruence algorithm.
pub fn first_day_of_month(year: i32, month: u32) -> Weekday {
    let m = if month < 3 { month + 12 } else { month };
    let q: i32 = 1;
    let year_i = if month < 3 { year - 1 } else { year };
    let k: i32 = year_i % 100;
    let j: i32 = year_i / 100;

    let h = (q + (13 * (m as i32 + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        _ => Weekday::Fri,
    }
}

impl WeekGrid {
    /// Lay out a month on 42 Sunday-first cells.
    ///
    /// Cells before the weekday of the 1st and after the last day stay
    /// blank; days never wrap into the adjacent months.
    pub fn new(year: i32, month: u32) -> Self {
        let first_weekday = first_day_of_month(year, month).num_days_from_sunday() as usize;
        let last_day = days_in_month(year, month) as usize;

        let days = (0..CELLS_PER_MONTH)
            .map(|i| {
                if i < first_weekday || i > last_day + first_weekday - 1 {
                    None
                } else {
                    Some((i - first_weekday + 1) as u32)
                }
            })
            .collect();

        WeekGrid { year, month, days }
    }

    /// Rows of seven cells, first row starting on Sunday.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.days.chunks(DAYS_PER_WEEK)
    }
}
