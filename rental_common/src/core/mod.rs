//! Domain types of the rental platform: vehicles, customers, pricing modifiers and rentals.

pub mod rental;
pub mod types;
pub mod vehicle;

pub use rental::{Rental, RentalRecord};
pub use types::{Customer, CustomerId, Insurance, RentalId, Tariff, VehicleId};
pub use vehicle::{Category, Vehicle, VehicleKind};
