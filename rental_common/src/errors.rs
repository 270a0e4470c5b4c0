use crate::core::types::VehicleId;
use thiserror::Error;

/// **An application-specific error type**
#[derive(Debug, Error, PartialEq)]
pub enum RentalError {
    /// The vehicle is held by an active rental.
    #[error("Vehicle is not available: {model} ({vehicle_id})")]
    VehicleUnavailable { vehicle_id: VehicleId, model: String },
    /// The rental's total doesn't fit in a `Decimal`.
    #[error("Price out of range for {model} ({vehicle_id})")]
    PriceOutOfRange { vehicle_id: VehicleId, model: String },
}

pub const NAME_NOT_VALID_MSG: &str = "Name is not valid";
pub const EMPTY_NAME: &str = "Name cannot be empty.";
