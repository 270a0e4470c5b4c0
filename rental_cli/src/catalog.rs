//! The things that can be put together into a rental
//!
//! Everything registered here is addressed by its number in the listing, starting from 1.

use rental_common::types::{Customer, Insurance, Tariff};
use rental_common::vehicle::Vehicle;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Catalog {
    vehicles: Vec<Rc<Vehicle>>,
    customers: Vec<Rc<Customer>>,
    tariffs: Vec<Tariff>,
    insurances: Vec<Insurance>,
}

/// Fetches the item with the 1-based `number`.
fn nth<T>(items: &[T], number: usize) -> Option<&T> {
    number.checked_sub(1).and_then(|index| items.get(index))
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the vehicle and returns its number.
    pub fn add_vehicle(&mut self, vehicle: Rc<Vehicle>) -> usize {
        self.vehicles.push(vehicle);
        self.vehicles.len()
    }

    /// Registers the customer and returns their number.
    pub fn add_customer(&mut self, customer: Rc<Customer>) -> usize {
        self.customers.push(customer);
        self.customers.len()
    }

    /// Registers the tariff and returns its number.
    pub fn add_tariff(&mut self, tariff: Tariff) -> usize {
        self.tariffs.push(tariff);
        self.tariffs.len()
    }

    /// Registers the insurance option and returns its number.
    pub fn add_insurance(&mut self, insurance: Insurance) -> usize {
        self.insurances.push(insurance);
        self.insurances.len()
    }

    pub fn vehicle(&self, number: usize) -> Option<&Rc<Vehicle>> {
        nth(&self.vehicles, number)
    }

    pub fn customer(&self, number: usize) -> Option<&Rc<Customer>> {
        nth(&self.customers, number)
    }

    pub fn tariff(&self, number: usize) -> Option<&Tariff> {
        nth(&self.tariffs, number)
    }

    pub fn insurance(&self, number: usize) -> Option<&Insurance> {
        nth(&self.insurances, number)
    }

    /// **Renders the whole catalog as numbered lists**
    pub fn listing(&self) -> String {
        let mut out = String::new();

        out.push_str("Vehicles:\n");
        for (i, vehicle) in self.vehicles.iter().enumerate() {
            out.push_str(&format!("  #{} {}\n", i + 1, vehicle));
        }

        out.push_str("Customers:\n");
        for (i, customer) in self.customers.iter().enumerate() {
            out.push_str(&format!("  #{} {}\n", i + 1, customer));
        }

        out.push_str("Tariffs:\n");
        for (i, tariff) in self.tariffs.iter().enumerate() {
            out.push_str(&format!(
                "  #{} {} x{}\n",
                i + 1,
                tariff.name,
                tariff.multiplier.normalize()
            ));
        }

        out.push_str("Insurances:\n");
        for (i, insurance) in self.insurances.iter().enumerate() {
            out.push_str(&format!(
                "  #{} {} +{}/day\n",
                i + 1,
                insurance.name,
                insurance.daily_cost.normalize()
            ));
        }

        out
    }
}
