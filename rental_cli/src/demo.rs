//! A short, scripted tour of the platform
//!
//! Two cars are rented out, one of the rentals is completed,
//! and the registry is printed before and after that.

use crate::logic::{print_rentals, Session};
use chrono::Duration;
use rental_common::errors::RentalError;
use rental_common::types::{Customer, Insurance, RentalId, Tariff};
use rental_common::vehicle::Vehicle;
use rust_decimal_macros::dec;
use std::rc::Rc;

/// Registers the demo data in the session's catalog, creates two rentals starting today,
/// prints the active rentals, completes the first one, and prints all rentals.
///
/// Returns the ids of the two rentals, in creation order.
///
/// # Errors
/// - Propagates `RentalError::VehicleUnavailable` and `RentalError::PriceOutOfRange`;
///   neither can happen with fresh vehicles at these rates.
pub fn run_demo(session: &mut Session) -> Result<(RentalId, RentalId), RentalError> {
    let camry = Rc::new(Vehicle::car("Toyota Camry", 2020, dec!(50), "Economy"));
    let x5 = Rc::new(Vehicle::car("BMW X5", 2022, dec!(120), "SUV"));

    let axi = Rc::new(Customer::new("Axi"));
    let bektas = Rc::new(Customer::new("Bektas"));

    let standard = Tariff::new("Standard", dec!(1.0));
    let weekend = Tariff::new("Weekend", dec!(0.9));

    let basic = Insurance::new("Basic", dec!(5));
    let full = Insurance::new("Full", dec!(15));

    let catalog = &mut session.catalog;
    catalog.add_vehicle(Rc::clone(&camry));
    catalog.add_vehicle(Rc::clone(&x5));
    catalog.add_customer(Rc::clone(&axi));
    catalog.add_customer(Rc::clone(&bektas));
    catalog.add_tariff(standard.clone());
    catalog.add_tariff(weekend.clone());
    catalog.add_insurance(basic.clone());
    catalog.add_insurance(full.clone());

    let today = session.today;
    let manager = &mut session.manager;

    let first = manager
        .create_rental(axi, camry, today, today + Duration::days(2), standard, basic)?
        .id();
    let second = manager
        .create_rental(bektas, x5, today, today + Duration::days(4), weekend, full)?
        .id();

    print_rentals(manager.active_rentals());

    manager.complete_rental(first);

    println!("\nAfter completion:\n");
    print_rentals(manager.all_rentals());

    Ok((first, second))
}
