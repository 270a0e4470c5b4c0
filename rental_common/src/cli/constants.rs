/// CLI Commands

pub const HELP: &str = "help";
pub const VEHICLE: &str = "vehicle";
pub const CAR: &str = "car";
pub const CUSTOMER: &str = "customer";
pub const TARIFF: &str = "tariff";
pub const INSURANCE: &str = "insurance";
pub const CATALOG: &str = "catalog";
pub const RENT: &str = "rent";
pub const COMPLETE: &str = "complete";
pub const ACTIVE: &str = "active";
pub const ALL: &str = "all";
pub const JSON: &str = "json";
pub const DEMO: &str = "demo";
pub const QUIT: &str = "quit";

/// Various CLI constants

pub const PROMPT: &str = "> ";
pub const SEPARATOR: &str = "--";
/// Prefix of a date relative to today, as in `+2`
pub const RELATIVE_DATE_PREFIX: char = '+';
/// Largest rate, multiplier or cost accepted from the prompt; keeps rental totals in range
pub const MAX_AMOUNT: u64 = 1_000_000_000;
/// Accepted range of a vehicle's model year
pub const MIN_YEAR: i32 = 1886;
pub const MAX_YEAR: i32 = 9999;
