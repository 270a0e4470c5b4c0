//! Basic input validation used at the CLI boundary
//!
//! The domain types themselves accept any input; these checks only guard
//! what a user types in.

use crate::errors::EMPTY_NAME;

/// **Basic input validation for a name (of a customer, a vehicle model, a tariff...)**
///
/// Checks for:
/// - An empty string.
///
/// Returns a message describing the problem, or `None` if the name is fine.
pub fn is_valid_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some(EMPTY_NAME)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_name_is_valid() {
        assert_eq!(None, is_valid_name("Axi"));
        assert_eq!(None, is_valid_name("  Toyota Camry "));
    }

    #[test]
    fn blank_name_is_not_valid() {
        assert_eq!(Some(EMPTY_NAME), is_valid_name(""));
        assert_eq!(Some(EMPTY_NAME), is_valid_name(" \t "));
    }
}
