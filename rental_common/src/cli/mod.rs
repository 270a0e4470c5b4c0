//! Constants and helper functions shared by CLI apps

pub mod constants;
pub mod helpers;
