//! Command-line arguments
//!
//! Every argument can also be set through an environment variable.

use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Vehicle Rental Platform - rent out cars and keep track of rentals", long_about = None)]
pub struct Args {
    /// Log level, used when RUST_LOG is not set
    #[arg(
        long,
        env = "RENTAL_LOG_LEVEL",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Today's date (YYYY-MM-DD); relative dates (+N) and the demo count from it
    #[arg(long, env = "RENTAL_TODAY")]
    pub today: Option<NaiveDate>,

    /// Load the demo data and rentals before starting the prompt
    #[arg(long)]
    pub demo: bool,
}
