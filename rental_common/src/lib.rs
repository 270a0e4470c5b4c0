pub mod cli;
pub mod core;
pub mod errors;
pub mod rental_manager;
pub mod validation;

pub use crate::core::{rental, types, vehicle};
pub use crate::rental_manager::RentalManager;
