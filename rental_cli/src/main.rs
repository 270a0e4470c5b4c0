//! The "Vehicle Rental CLI" app's entry point.

use chrono::Local;
use clap::Parser;
use rental_cli::args::Args;
use rental_cli::demo::run_demo;
use rental_cli::logic::{main_loop, Session};
use std::env;

/// The "Vehicle Rental CLI" app's entry point.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filters = env::var("RUST_LOG").unwrap_or_else(|_| format!("rental={}", args.log_level));
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    log::debug!("Using {} as today's date", today);

    let mut session = Session::new(today);
    if args.demo {
        run_demo(&mut session)?;
    }

    main_loop(&mut session);

    Ok(())
}
