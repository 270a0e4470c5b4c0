//! Helper functions that are common to CLI apps

use crate::cli::constants::*;
use crate::errors::NAME_NOT_VALID_MSG;
use crate::validation;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use std::io::{stdin, stdout, Write};

/// **Contains full variants of all existing commands.**
///
/// Wrapped by `help()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_full() -> String {
    let msg = format!(
        "{HELP} {VEHICLE} {CAR} {CUSTOMER} {TARIFF} {INSURANCE} {CATALOG} \
         {RENT} {COMPLETE} {ACTIVE} {ALL} {JSON} {DEMO} {QUIT}"
    );
    msg
}

/// **Contains short variants of all existing commands.**
///
/// Wrapped by `help()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_short() -> String {
    "h v car cu t i c r co a l j d q".to_string()
}

/// **Prints all existing commands in their full and short variants.**
pub fn help() {
    println!("{}", help_contents_full());
    println!("{}", help_contents_short());
}

/// **What a single read from standard input produced**
#[derive(Debug, PartialEq)]
pub enum Input {
    Line(String),
    /// A blank line, or a line that couldn't be read
    Empty,
    /// Standard input is closed
    Eof,
}

/// **Reads standard input into a line.**
///
/// Signals an empty line so we can ignore it (in the main loop),
/// and the end of input so the main loop can stop.
///
/// # Panics
/// Panics in case it can't write `label` to `stdout`,
/// or if it can't flush the `stdout` buffer.
pub fn read_from_stdin(label: &str) -> Input {
    let mut lock = stdout().lock();
    write!(lock, "\n{label}").expect("Failed to write the label to stdout.");
    drop(lock);
    stdout()
        .flush()
        .expect("Failed to flush the stdout buffer.");

    let mut line = String::new();
    match stdin().read_line(&mut line) {
        Ok(0) => Input::Eof,
        Ok(_) => {
            if line.trim().is_empty() {
                Input::Empty
            } else {
                Input::Line(line)
            }
        }
        Err(err) => {
            eprintln!("[ERROR] Failed to read line: {}", err);
            Input::Empty
        }
    }
}

/// **Basic input validation for a name**
///
/// Checks for:
/// - An empty string.
pub fn is_valid_name(name: &str) -> bool {
    match validation::is_valid_name(name) {
        Some(msg) => {
            eprintln!("[ERROR] {}: \"{}\". {}", NAME_NOT_VALID_MSG, name, msg);
            false
        }
        None => true,
    }
}

/// **Joins the words into a name**
///
/// A name can consist of multiple words.
/// We can wrap it in single or double quotes,
/// but we don't have to use any quotes at all.
pub fn join_name(words: &[&str]) -> String {
    words
        .join(" ")
        .trim_matches(|c| c == '\'' || c == '\"')
        .trim()
        .to_string()
}

/// **Parses a non-negative decimal amount, such as a rate, a multiplier or a cost**
///
/// Amounts above [`MAX_AMOUNT`] are refused, so that any rental priced from them fits in a `Decimal`.
///
/// Prints an error message and returns `None` if that is not possible.
pub fn parse_amount(word: &str) -> Option<Decimal> {
    match word.parse::<Decimal>() {
        Ok(amount) if amount > Decimal::from(MAX_AMOUNT) => {
            eprintln!(
                "[ERROR] Amounts can't be larger than {}; you provided '{}'.",
                MAX_AMOUNT, word
            );
            None
        }
        Ok(amount) if !amount.is_sign_negative() => Some(amount),
        _ => {
            cannot_parse_number(word);
            None
        }
    }
}

/// **Parses a vehicle's model year**
///
/// It has to be a whole number from [`MIN_YEAR`] to [`MAX_YEAR`].
///
/// Prints an error message and returns `None` if that is not possible.
pub fn parse_year(word: &str) -> Option<i32> {
    match word.parse::<i32>() {
        Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Some(year),
        _ => {
            eprintln!(
                "[ERROR] A year is a whole number from {} to {}; you provided '{}'.",
                MIN_YEAR, MAX_YEAR, word
            );
            None
        }
    }
}

/// **Parses a date**
///
/// Either an ISO date, `YYYY-MM-DD`, or a number of days after `today`, `+N`.
///
/// Prints an error message and returns `None` if that is not possible.
pub fn parse_date(word: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parsed = match word.strip_prefix(RELATIVE_DATE_PREFIX) {
        Some(days) => days
            .parse::<i64>()
            .ok()
            .and_then(|days| today.checked_add_signed(Duration::try_days(days)?)),
        None => NaiveDate::parse_from_str(word, "%Y-%m-%d").ok(),
    };

    if parsed.is_none() {
        eprintln!(
            "[ERROR] Dates are written as YYYY-MM-DD or as +N days from today; you provided '{}'.",
            word
        );
    }

    parsed
}

/// Prints an error message about not being able to parse
/// a string into a number, so that our users can get a
/// more informative message than the provided generic message
/// that comes from the parser.
///
/// This function can be converted into a macro.
pub fn cannot_parse_number(word: &str) {
    eprintln!(
        "[ERROR] Only non-negative numbers are allowed here; you provided '{}'.",
        word
    );
}
