use crate::core::types::{Customer, CustomerId, Insurance, RentalId, Tariff, VehicleId};
use crate::core::vehicle::Vehicle;
use crate::errors::RentalError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// A rental of one vehicle by one customer over an inclusive range of dates
///
/// The customer and the vehicle are shared with the caller and with other rentals.
///
/// A rental starts out active and holds its vehicle; [`Rental::complete`] releases it.
/// There is no way back from completed to active.
///
/// The price is computed once, at creation, and never changes afterwards.
#[derive(Debug)]
pub struct Rental {
    id: RentalId,
    customer: Rc<Customer>,
    vehicle: Rc<Vehicle>,
    start: NaiveDate,
    end: NaiveDate,
    tariff: Tariff,
    insurance: Insurance,
    active: bool,
    price: Decimal,
}

/// Number of billed days from `start` to `end`; both days count.
///
/// It is zero or negative when `end` comes before `start`.
fn billed_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// `(vehicle daily price * tariff multiplier + insurance daily cost) * days`
///
/// `None` if any step leaves the `Decimal` range.
fn quote(
    vehicle: &Vehicle,
    start: NaiveDate,
    end: NaiveDate,
    tariff: &Tariff,
    insurance: &Insurance,
) -> Option<Decimal> {
    let days = Decimal::from(billed_days(start, end));
    let daily_price = vehicle
        .calculate_daily_price()?
        .checked_mul(tariff.multiplier)?;

    daily_price
        .checked_mul(days)?
        .checked_add(insurance.daily_cost.checked_mul(days)?)
}

impl Rental {
    /// Starts a rental: fixes the price and marks the vehicle as unavailable.
    ///
    /// The vehicle's availability is not checked here; that's the job of
    /// [`RentalManager::create_rental`](crate::RentalManager::create_rental).
    ///
    /// # Errors
    /// - The total doesn't fit in a `Decimal`, `RentalError::PriceOutOfRange`;
    ///   the vehicle is left as it was.
    pub(crate) fn new(
        customer: Rc<Customer>,
        vehicle: Rc<Vehicle>,
        start: NaiveDate,
        end: NaiveDate,
        tariff: Tariff,
        insurance: Insurance,
    ) -> Result<Self, RentalError> {
        let price = quote(&vehicle, start, end, &tariff, &insurance).ok_or_else(|| {
            RentalError::PriceOutOfRange {
                vehicle_id: vehicle.id(),
                model: vehicle.model.clone(),
            }
        })?;

        vehicle.set_available(false);

        Ok(Self {
            id: RentalId::new(),
            customer,
            vehicle,
            start,
            end,
            tariff,
            insurance,
            active: true,
            price,
        })
    }

    /// Number of billed days; both the start and the end day count.
    ///
    /// It is zero or negative when `end` comes before `start`.
    pub fn days(&self) -> i64 {
        billed_days(self.start, self.end)
    }

    /// `(vehicle daily price * tariff multiplier + insurance daily cost) * days`
    ///
    /// `None` if the total doesn't fit in a `Decimal`; a created rental always has a price.
    pub fn calculate_price(&self) -> Option<Decimal> {
        quote(
            &self.vehicle,
            self.start,
            self.end,
            &self.tariff,
            &self.insurance,
        )
    }

    /// Ends the rental and makes the vehicle available again.
    ///
    /// Completing an already completed rental changes nothing.
    pub fn complete(&mut self) {
        self.active = false;
        self.vehicle.set_available(true);
    }

    pub fn id(&self) -> RentalId {
        self.id
    }

    pub fn customer(&self) -> &Rc<Customer> {
        &self.customer
    }

    pub fn vehicle(&self) -> &Rc<Vehicle> {
        &self.vehicle
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn insurance(&self) -> &Insurance {
        &self.insurance
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The total price, as computed when the rental was created
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// An owned, serializable view of this rental.
    pub fn record(&self) -> RentalRecord {
        RentalRecord {
            id: self.id,
            customer_id: self.customer.id(),
            customer_name: self.customer.name().to_string(),
            vehicle_id: self.vehicle.id(),
            vehicle_model: self.vehicle.model.clone(),
            start: self.start,
            end: self.end,
            tariff: self.tariff.name.clone(),
            insurance: self.insurance.name.clone(),
            price: self.price.normalize(),
            active: self.active,
        }
    }
}

impl fmt::Display for Rental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rental {}: {} -> {} | Price: {} | Active: {}",
            self.id,
            self.customer.name(),
            self.vehicle.model,
            self.price.normalize(),
            self.active
        )
    }
}

/// A snapshot of a [`Rental`], detached from the shared customer and vehicle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub id: RentalId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub vehicle_id: VehicleId,
    pub vehicle_model: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub tariff: String,
    pub insurance: String,
    pub price: Decimal,
    pub active: bool,
}
