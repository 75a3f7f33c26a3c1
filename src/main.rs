//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! cal              // Current month
//! cal 2026         // Year 2026
//! cal 2 2026       // February 2026
//! cal -y           // Whole current year
//! cal -m 2 2026    // February 2026
//! cal -y 2026 -m 2 // February 2026
//! ```

use cal::args::{Args, escape_tokens, get_today_date, interpret};
use cal::error::ArgError;
use cal::formatter::render;
use clap::Parser;

fn main() {
    let args = Args::parse_from(escape_tokens(std::env::args_os()));

    if let Err(e) = run(&args) {
        // Diagnostics go to stdout, like the rest of the output
        println!("{}", e.report());
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ArgError> {
    let target = interpret(&args.tokens, get_today_date())?;
    print!("{}", render(&target));
    Ok(())
}
