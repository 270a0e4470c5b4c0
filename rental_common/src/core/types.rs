use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random (v4) identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier of a [`Vehicle`](crate::vehicle::Vehicle)
    VehicleId
);
uuid_id!(
    /// Unique identifier of a [`Customer`]
    CustomerId
);
uuid_id!(
    /// Unique identifier of a [`Rental`](crate::rental::Rental)
    RentalId
);

/// A person renting vehicles
///
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A pricing plan; its `multiplier` scales the vehicle's daily price.
///
/// The multiplier isn't validated, so a negative or zero one is accepted as is.
#[derive(Clone, Debug, PartialEq)]
pub struct Tariff {
    pub name: String,
    pub multiplier: Decimal,
}

impl Tariff {
    pub fn new(name: impl Into<String>, multiplier: Decimal) -> Self {
        Self {
            name: name.into(),
            multiplier,
        }
    }
}

/// An insurance option, charged as a flat amount per rental day
#[derive(Clone, Debug, PartialEq)]
pub struct Insurance {
    pub name: String,
    pub daily_cost: Decimal,
}

impl Insurance {
    pub fn new(name: impl Into<String>, daily_cost: Decimal) -> Self {
        Self {
            name: name.into(),
            daily_cost,
        }
    }
}
