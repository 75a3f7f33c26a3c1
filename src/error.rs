//! Error types for argument interpretation.

use thiserror::Error;

/// Usage text printed after most diagnostics.
pub fn usage() -> String {
    format!(
        "Usage: cal [general options] [[-y year] [-m month]]\n{:>48}\n{:>46}",
        "cal [general options] [-y] [[month] year]", "cal [general options] [-m month] [year]"
    )
}

/// Rejected command line. `Display` gives the diagnostic without the
/// `cal: ` prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("illegal option -- {0}")]
    IllegalOption(String),

    #[error("Double {0} specified.")]
    DoubleOption(String),

    #[error("Too many arguments.")]
    TooManyArguments,

    /// Argument shape matches no invocation form; only usage is printed.
    #[error("")]
    Usage,

    #[error("not a valid {0}")]
    NotValid(String),

    #[error("option requires an argument -- m")]
    MissingMonthValue,

    #[error("-y together a given month is not supported.")]
    YearWithMonth,

    /// Holds the year as displayed; empty when no year was given.
    #[error("year '{0}' not in range 1..9999")]
    YearOutOfRange(String),

    #[error("{0} is neither a month number (1..12)")]
    MonthOutOfRange(String),
}

impl ArgError {
    pub fn shows_usage(&self) -> bool {
        !matches!(self, ArgError::NotValid(_))
    }

    /// Full text for standard output, without a trailing newline.
    pub fn report(&self) -> String {
        match self {
            ArgError::Usage => usage(),
            _ if self.shows_usage() => format!("cal: {}\n{}", self, usage()),
            _ => format!("cal: {}", self),
        }
    }
}
