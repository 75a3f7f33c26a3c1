//! Calendar text assembly. Everything here returns strings; printing is
//! left to the caller.

use crate::types::{BLANK_CELL, MONTH_SUFFIX, ResolvedTarget, WEEKDAY_HEADER, WeekGrid};

/// Zero-padded day number, or two spaces for a blank cell.
pub fn format_day(day: Option<u32>) -> String {
    match day {
        Some(d) => format!("{:02}", d),
        None => BLANK_CELL.to_string(),
    }
}

/// Weekday header followed by six week rows, one line each.
///
/// Each row starts with a space and separates cells with a space, lining
/// the numbers up under the weekday names. No trailing newline.
pub fn format_month_grid(grid: &WeekGrid) -> String {
    let rows: Vec<String> = grid
        .weeks()
        .map(|week| {
            let cells: Vec<String> = week.iter().map(|&day| format_day(day)).collect();
            format!(" {}", cells.join(" "))
        })
        .collect();

    format!("{}\n{}", WEEKDAY_HEADER, rows.join("\n"))
}

/// Header for a single month, e.g. ` 3月 2024 `.
pub fn format_month_header(year: i32, month: u32) -> String {
    format!(" {}{} {} ", month, MONTH_SUFFIX, year)
}

/// Header for a month inside the year view, e.g. ` 3月 `.
pub fn format_year_month_header(month: u32) -> String {
    format!(" {}{} ", month, MONTH_SUFFIX)
}

pub fn format_month(year: i32, month: u32) -> String {
    let grid = WeekGrid::new(year, month);
    format!(
        "{}\n{}\n",
        format_month_header(year, month),
        format_month_grid(&grid)
    )
}

/// Year header followed by the twelve months, separated by blank lines.
pub fn format_year(year: i32) -> String {
    let mut out = format!(" {} \n", year);

    for month in 1..=12 {
        let grid = WeekGrid::new(year, month);
        out.push_str(&format_year_month_header(month));
        out.push('\n');
        out.push_str(&format_month_grid(&grid));
        out.push_str(if month < 12 { "\n\n" } else { "\n" });
    }

    out
}

/// Full output for a resolved target, ending with a newline.
pub fn render(target: &ResolvedTarget) -> String {
    match target.month() {
        Some(month) => format_month(target.year(), month),
        None => format_year(target.year()),
    }
}
