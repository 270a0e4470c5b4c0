use crate::catalog::Catalog;
use crate::demo::run_demo;
use chrono::NaiveDate;
use rental_common::cli::constants::*;
use rental_common::cli::helpers::*;
use rental_common::rental::Rental;
use rental_common::types::{Customer, Insurance, RentalId, Tariff};
use rental_common::vehicle::{Category, Vehicle};
use rental_common::RentalManager;
use rust_decimal::Decimal;
use std::rc::Rc;

/// Everything one run of the CLI works with
#[derive(Debug)]
pub struct Session {
    pub manager: RentalManager,
    pub catalog: Catalog,
    /// The date that relative dates, `+N`, count from
    pub today: NaiveDate,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            manager: RentalManager::new(),
            catalog: Catalog::new(),
            today,
        }
    }
}

pub fn main_loop(session: &mut Session) {
    loop {
        match read_from_stdin(PROMPT) {
            Input::Line(line) => {
                if !execute(&line, session) {
                    break;
                }
            }
            Input::Empty => continue,
            Input::Eof => break,
        }
    }
}

/// **Runs a single command line.**
///
/// Returns `false` when the user asked to quit.
pub fn execute(line: &str, session: &mut Session) -> bool {
    let words = line.split_whitespace().collect::<Vec<_>>();
    let cmd = match words.first() {
        Some(cmd) => cmd.to_lowercase(),
        None => return true,
    };

    match cmd.as_str() {
        HELP | "h" => help(),
        VEHICLE | "v" => {
            register_vehicle(&words, &mut session.catalog);
        }
        CAR => {
            register_car(&words, &mut session.catalog);
        }
        CUSTOMER | "cu" => {
            register_customer(&words, &mut session.catalog);
        }
        TARIFF | "t" => {
            register_tariff(&words, &mut session.catalog);
        }
        INSURANCE | "i" => {
            register_insurance(&words, &mut session.catalog);
        }
        CATALOG | "c" => print!("{}", session.catalog.listing()),
        RENT | "r" => {
            rent(&words, session);
        }
        COMPLETE | "co" => complete(&words, &mut session.manager),
        ACTIVE | "a" => print_rentals(session.manager.active_rentals()),
        ALL | "l" => print_rentals(session.manager.all_rentals()),
        JSON | "j" => print_json(&session.manager),
        DEMO | "d" => {
            if let Err(err) = run_demo(session) {
                eprintln!("[ERROR] {}", err);
            }
        }
        QUIT | "q" => return false,
        _ => println!("Unrecognized command; try `help`."),
    }

    true
}

/// Parses a catalog number, `#` in front of it being optional.
fn parse_number(word: &str) -> Option<usize> {
    match word.trim_start_matches('#').parse::<usize>() {
        Ok(number) => Some(number),
        Err(_err) => {
            cannot_parse_number(word);
            None
        }
    }
}

/// **Registers a standard vehicle**
///
/// The model's name can consist of multiple words.
///
/// Returns the vehicle's catalog number.
fn register_vehicle(words: &[&str], catalog: &mut Catalog) -> Option<usize> {
    let words_len = words.len();

    if words_len < 4 {
        println!("The vehicle command: {VEHICLE} 'model name' <year> <daily rate>");
        return None;
    }

    let model = join_name(&words[1..(words_len - 2)]);
    let year = parse_year(words[words_len - 2])?;
    let rate = parse_amount(words[words_len - 1])?;

    if !is_valid_name(&model) {
        return None;
    }

    let vehicle = Vehicle::new(model, year, rate);
    println!("{vehicle}");
    Some(catalog.add_vehicle(Rc::new(vehicle)))
}

/// **Registers a car**
///
/// The model's name can consist of multiple words.
///
/// The category is optional, and is the last word if that isn't a number.
/// It defaults to Economy. Unknown categories are accepted and priced like Economy.
///
/// Both the year and the rate are required. A model name ending in a number
/// could otherwise be mistaken for the year, so the year has to be in range.
///
/// Returns the car's catalog number.
fn register_car(words: &[&str], catalog: &mut Catalog) -> Option<usize> {
    let words_len = words.len();
    let usage = || {
        println!("The car command: {CAR} 'model name' <year> <daily rate> [category]");
        println!("Both the year and the daily rate are required.");
    };

    if words_len < 4 {
        usage();
        return None;
    }

    let last = words[words_len - 1];
    let (category, numbers_end) = if last.parse::<Decimal>().is_ok() {
        (Category::default(), words_len)
    } else {
        if words_len < 5 {
            usage();
            return None;
        }
        (Category::from(last), words_len - 1)
    };

    let model = join_name(&words[1..(numbers_end - 2)]);
    let year = parse_year(words[numbers_end - 2])?;
    let rate = parse_amount(words[numbers_end - 1])?;

    if !is_valid_name(&model) {
        return None;
    }

    let car = Vehicle::car(model, year, rate, category);
    println!("{car}");
    Some(catalog.add_vehicle(Rc::new(car)))
}

/// **Registers a customer**
///
/// The customer's name can consist of multiple words.
fn register_customer(words: &[&str], catalog: &mut Catalog) -> Option<usize> {
    if words.len() < 2 {
        println!("The customer command: {CUSTOMER} 'full name'");
        return None;
    }

    let name = join_name(&words[1..]);
    if !is_valid_name(&name) {
        return None;
    }

    let customer = Customer::new(name);
    println!("{customer}");
    Some(catalog.add_customer(Rc::new(customer)))
}

/// **Registers a tariff**
fn register_tariff(words: &[&str], catalog: &mut Catalog) -> Option<usize> {
    let words_len = words.len();

    if words_len < 3 {
        println!("The tariff command: {TARIFF} 'name' <multiplier>");
        return None;
    }

    let name = join_name(&words[1..(words_len - 1)]);
    let multiplier = parse_amount(words[words_len - 1])?;

    if !is_valid_name(&name) {
        return None;
    }

    Some(catalog.add_tariff(Tariff::new(name, multiplier)))
}

/// **Registers an insurance option**
fn register_insurance(words: &[&str], catalog: &mut Catalog) -> Option<usize> {
    let words_len = words.len();

    if words_len < 3 {
        println!("The insurance command: {INSURANCE} 'name' <daily cost>");
        return None;
    }

    let name = join_name(&words[1..(words_len - 1)]);
    let daily_cost = parse_amount(words[words_len - 1])?;

    if !is_valid_name(&name) {
        return None;
    }

    Some(catalog.add_insurance(Insurance::new(name, daily_cost)))
}

/// **Rents out a vehicle**
///
/// Everything is addressed by its catalog number, see `catalog`.
/// Dates are YYYY-MM-DD, or +N days from today, and both are inclusive.
///
/// Prints the new rental, or an error message if the vehicle is already rented out.
fn rent(words: &[&str], session: &mut Session) -> Option<RentalId> {
    if words.len() != 7 {
        println!(
            "The rent command: {RENT} <vehicle #> <customer #> <tariff #> <insurance #> <start> <end>"
        );
        return None;
    }

    let vehicle_number = parse_number(words[1])?;
    let customer_number = parse_number(words[2])?;
    let tariff_number = parse_number(words[3])?;
    let insurance_number = parse_number(words[4])?;
    let start = parse_date(words[5], session.today)?;
    let end = parse_date(words[6], session.today)?;

    let catalog = &session.catalog;
    let vehicle = lookup("vehicle", vehicle_number, catalog.vehicle(vehicle_number))?;
    let customer = lookup("customer", customer_number, catalog.customer(customer_number))?;
    let tariff = lookup("tariff", tariff_number, catalog.tariff(tariff_number))?;
    let insurance = lookup("insurance", insurance_number, catalog.insurance(insurance_number))?;

    match session.manager.create_rental(
        Rc::clone(customer),
        Rc::clone(vehicle),
        start,
        end,
        tariff.clone(),
        insurance.clone(),
    ) {
        Ok(rental) => {
            println!("{rental}");
            Some(rental.id())
        }
        Err(err) => {
            eprintln!("[ERROR] {}", err);
            None
        }
    }
}

fn lookup<T>(what: &str, number: usize, item: Option<T>) -> Option<T> {
    if item.is_none() {
        eprintln!("[ERROR] There is no {what} #{number}; see `{CATALOG}`.");
    }
    item
}

/// **Completes a rental**
///
/// Completing an unknown rental does nothing, but we let the user know.
fn complete(words: &[&str], manager: &mut RentalManager) {
    if words.len() != 2 {
        println!("The complete command: {COMPLETE} <rental id>");
        return;
    }

    let id = match words[1].parse::<RentalId>() {
        Ok(id) => id,
        Err(err) => {
            eprintln!("[ERROR] '{}' is not a rental id: {}", words[1], err);
            return;
        }
    };

    manager.complete_rental(id);

    match manager.rental(id) {
        Some(rental) => println!("{rental}"),
        None => println!("There is no rental {id}."),
    }
}

/// **Prints rentals, one per line**
pub fn print_rentals<'a>(rentals: impl IntoIterator<Item = &'a Rental>) {
    let mut empty = true;
    for rental in rentals {
        println!("{rental}");
        empty = false;
    }
    if empty {
        println!("No rentals.");
    }
}

/// **Prints all rentals as JSON**
fn print_json(manager: &RentalManager) {
    match serde_json::to_string_pretty(&manager.records()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("[ERROR] Failed to serialize rentals: {}", err),
    }
}
