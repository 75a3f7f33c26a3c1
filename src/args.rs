//! Command-line argument interpretation.
//!
//! Arguments follow the convention `[-y] [[month] year]` or
//! `[[-y year] [-m month]]`. clap only collects the raw tokens; their
//! meaning depends on position and count, so interpretation happens in
//! [`interpret`].

use std::ffi::OsString;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use clap::Parser;
use regex::Regex;

use crate::error::ArgError;
use crate::types::{Numeral, ResolvedTarget};

pub const MAX_TOKENS: usize = 4;

const YEAR_FLAG: &str = "-y";
const MONTH_FLAG: &str = "-m";

/// A dash followed by two or more characters, or by anything but `y`/`m`.
static ILLEGAL_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\S{2,}|-[^my]").expect("valid regex"));
static TAGGED_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-[my]").expect("valid regex"));
static BARE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^-0-9]").expect("valid regex"));

#[derive(Parser, Debug)]
#[command(name = "cal")]
#[command(about = "Displays calendar for specified month or year", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Options and values, e.g. `-y 2024`, `-m 3 2024`, `3 2024`.
    #[arg(
        value_name = "args",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub tokens: Vec<String>,
}

/// Put an end-of-options marker in front of the user's arguments.
///
/// clap then hands every token to the interpreter verbatim, including a
/// literal `--`, which the validation rules reject as an illegal option.
pub fn escape_tokens<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::<OsString>::into);
    let bin = argv.next().unwrap_or_else(|| OsString::from("cal"));
    std::iter::once(bin)
        .chain(std::iter::once(OsString::from("--")))
        .chain(argv)
        .collect()
}

/// A validated command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentToken<'a> {
    YearFlag,
    MonthFlag,
    Value(&'a str),
}

impl<'a> ArgumentToken<'a> {
    pub fn classify(raw: &'a str) -> Self {
        match raw {
            YEAR_FLAG => ArgumentToken::YearFlag,
            MONTH_FLAG => ArgumentToken::MonthFlag,
            other => ArgumentToken::Value(other),
        }
    }

    /// Integer read from the token; a flag in value position reads as 0.
    pub fn number(&self) -> Numeral {
        match self {
            ArgumentToken::Value(raw) => leading_integer(raw),
            ArgumentToken::YearFlag | ArgumentToken::MonthFlag => Numeral::from(0),
        }
    }
}

/// Parse the integer prefix of `s` (optional sign, then digits).
/// Text without one reads as 0.
pub fn leading_integer(s: &str) -> Numeral {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    Numeral::from_digits(negative, &rest[..len])
}

/// Get today's date, respecting CAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("CAL_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Check token shapes before any value is read. First failing rule wins.
pub fn validate(tokens: &[String]) -> Result<(), ArgError> {
    if let Some(token) = tokens.iter().find(|t| ILLEGAL_OPTION.is_match(t)) {
        let option = token.split_once('-').map_or("", |(_, rest)| rest);
        return Err(ArgError::IllegalOption(option.to_string()));
    }

    if let Some(token) = tokens
        .iter()
        .filter(|t| tokens.iter().filter(|other| other == t).count() > 1)
        .find(|t| TAGGED_OPTION.is_match(t))
    {
        return Err(ArgError::DoubleOption(token.clone()));
    }

    if tokens.len() > MAX_TOKENS {
        return Err(ArgError::TooManyArguments);
    }

    // Four tokens only make sense as `-y year -m month` in some order
    if tokens.len() == MAX_TOKENS && !tokens.iter().any(|t| t == YEAR_FLAG || t == MONTH_FLAG) {
        return Err(ArgError::Usage);
    }

    if let Some(token) = tokens.iter().find(|t| BARE_WORD.is_match(t)) {
        return Err(ArgError::NotValid(token.clone()));
    }

    Ok(())
}

/// Map validated tokens to a year and optional month.
///
/// Argument patterns:
/// - 0 args: current month
/// - 1 arg: `-y` (current year) or year
/// - 2 args: `-y year`, `-m month` or `month year`
/// - 3 args: `-m month year`
/// - 4 args: `-y year` and `-m month` in either order
pub fn resolve(tokens: &[String], today: NaiveDate) -> Result<ResolvedTarget, ArgError> {
    let current_year = Numeral::from(i64::from(today.year()));
    let tokens: Vec<ArgumentToken<'_>> =
        tokens.iter().map(|t| ArgumentToken::classify(t)).collect();

    let (year, month) = match tokens.as_slice() {
        [] => (
            Some(current_year),
            Some(Numeral::from(i64::from(today.month()))),
        ),

        [ArgumentToken::YearFlag] => (Some(current_year), None),
        [ArgumentToken::MonthFlag] => return Err(ArgError::MissingMonthValue),
        [year] => (Some(year.number()), None),

        [ArgumentToken::YearFlag, year] => (Some(year.number()), None),
        [ArgumentToken::MonthFlag, month] => (Some(current_year), Some(month.number())),
        [month, year] => (Some(year.number()), Some(month.number())),

        [ArgumentToken::YearFlag, _, _] => return Err(ArgError::YearWithMonth),
        [ArgumentToken::MonthFlag, month, year] => (Some(year.number()), Some(month.number())),
        [_, _, _] => return Err(ArgError::Usage),

        tagged => scan_tagged(tagged),
    };

    ResolvedTarget::new(year, month)
}

/// Read the value after each of `-y` and `-m`. A flag in last position
/// reads as 0.
fn scan_tagged(tokens: &[ArgumentToken<'_>]) -> (Option<Numeral>, Option<Numeral>) {
    let mut year = None;
    let mut month = None;

    for (i, token) in tokens.iter().enumerate() {
        let value = || {
            tokens
                .get(i + 1)
                .map_or_else(|| Numeral::from(0), ArgumentToken::number)
        };
        match token {
            ArgumentToken::YearFlag => year = Some(value()),
            ArgumentToken::MonthFlag => month = Some(value()),
            ArgumentToken::Value(_) => {}
        }
    }

    (year, month)
}

/// Validate and resolve the raw command-line tokens.
pub fn interpret(tokens: &[String], today: NaiveDate) -> Result<ResolvedTarget, ArgError> {
    validate(tokens)?;
    resolve(tokens, today)
}
