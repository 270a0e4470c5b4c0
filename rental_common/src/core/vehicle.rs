use crate::core::types::VehicleId;
use rust_decimal::Decimal;
use std::cell::Cell;
use std::fmt;

/// Category of a car, which determines its price multiplier
///
/// Labels are matched exactly: "Economy", "SUV" and "Premium".
/// Anything else, case variants included, is kept verbatim in `Other`
/// and priced like Economy.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Category {
    #[default]
    Economy,
    Suv,
    Premium,
    Other(String),
}

impl Category {
    /// The factor applied to the base daily rate of a car in this category.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Category::Economy => Decimal::ONE,
            Category::Suv => Decimal::new(13, 1),
            Category::Premium => Decimal::new(15, 1),
            Category::Other(_) => Decimal::ONE,
        }
    }

    /// The label the category was created from.
    pub fn label(&self) -> &str {
        match self {
            Category::Economy => "Economy",
            Category::Suv => "SUV",
            Category::Premium => "Premium",
            Category::Other(label) => label,
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label {
            "Economy" => Category::Economy,
            "SUV" => Category::Suv,
            "Premium" => Category::Premium,
            other => Category::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What kind of vehicle this is; selects the daily pricing rule
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VehicleKind {
    /// Priced at the plain base daily rate
    Standard,
    /// Priced at the base daily rate times the category multiplier
    Car { category: Category },
}

/// A rentable vehicle
///
/// The availability flag is shared state: rentals hold the vehicle through an `Rc`
/// and flip the flag when they start and when they complete,
/// so it lives in a `Cell` and everyone holding the vehicle sees the same value.
#[derive(Debug)]
pub struct Vehicle {
    id: VehicleId,
    pub model: String,
    pub year: i32,
    pub base_daily_rate: Decimal,
    pub kind: VehicleKind,
    is_available: Cell<bool>,
}

impl Vehicle {
    /// Creates a standard vehicle, available for rent.
    pub fn new(model: impl Into<String>, year: i32, base_daily_rate: Decimal) -> Self {
        Self::with_kind(model, year, base_daily_rate, VehicleKind::Standard)
    }

    /// Creates a car of the given category, available for rent.
    pub fn car(
        model: impl Into<String>,
        year: i32,
        base_daily_rate: Decimal,
        category: impl Into<Category>,
    ) -> Self {
        let category = category.into();
        Self::with_kind(model, year, base_daily_rate, VehicleKind::Car { category })
    }

    fn with_kind(
        model: impl Into<String>,
        year: i32,
        base_daily_rate: Decimal,
        kind: VehicleKind,
    ) -> Self {
        Self {
            id: VehicleId::new(),
            model: model.into(),
            year,
            base_daily_rate,
            kind,
            is_available: Cell::new(true),
        }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// The car category, or `None` for a standard vehicle.
    pub fn category(&self) -> Option<&Category> {
        match &self.kind {
            VehicleKind::Standard => None,
            VehicleKind::Car { category } => Some(category),
        }
    }

    pub fn is_available(&self) -> bool {
        self.is_available.get()
    }

    pub(crate) fn set_available(&self, available: bool) {
        self.is_available.set(available);
    }

    /// Price of one rental day, before the tariff and insurance are applied.
    ///
    /// `None` if the category multiplier pushes the rate out of the `Decimal` range.
    pub fn calculate_daily_price(&self) -> Option<Decimal> {
        match &self.kind {
            VehicleKind::Standard => Some(self.base_daily_rate),
            VehicleKind::Car { category } => {
                self.base_daily_rate.checked_mul(category.multiplier())
            }
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) | Rate: {} | Available: {}",
            self.model,
            self.year,
            self.base_daily_rate.normalize(),
            self.is_available()
        )?;
        if let Some(category) = self.category() {
            write!(f, " | Category: {}", category)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn standard_vehicle_is_priced_at_base_rate() {
        let vehicle = Vehicle::new("Ford Transit", 2018, dec!(70));
        assert_eq!(Some(dec!(70)), vehicle.calculate_daily_price());
        assert!(vehicle.category().is_none());
    }

    #[test]
    fn new_vehicle_is_available() {
        assert!(Vehicle::new("Ford Transit", 2018, dec!(70)).is_available());
        assert!(Vehicle::car("Toyota Camry", 2020, dec!(50), "Economy").is_available());
    }

    #[test]
    fn car_multipliers_by_category() {
        let economy = Vehicle::car("Toyota Camry", 2020, dec!(50), "Economy");
        let suv = Vehicle::car("BMW X5", 2022, dec!(120), "SUV");
        let premium = Vehicle::car("Audi A8", 2023, dec!(200), "Premium");

        assert_eq!(Some(dec!(50)), economy.calculate_daily_price());
        assert_eq!(Some(dec!(156)), suv.calculate_daily_price());
        assert_eq!(Some(dec!(300)), premium.calculate_daily_price());
    }

    #[test]
    fn unknown_category_falls_back_to_economy_pricing() {
        let lower_case = Vehicle::car("BMW X5", 2022, dec!(120), "suv");
        let made_up = Vehicle::car("Lada Niva", 1995, dec!(20), "Vintage");

        assert_eq!(Some(dec!(120)), lower_case.calculate_daily_price());
        assert_eq!(Some(dec!(20)), made_up.calculate_daily_price());
        assert_eq!(Some(&Category::Other("suv".to_string())), lower_case.category());
    }

    #[test]
    fn daily_price_out_of_range() {
        let premium = Vehicle::car("Golden Carriage", 2024, Decimal::MAX, "Premium");
        assert_eq!(None, premium.calculate_daily_price());

        let plain = Vehicle::new("Golden Carriage", 2024, Decimal::MAX);
        assert_eq!(Some(Decimal::MAX), plain.calculate_daily_price());
    }

    #[test]
    fn default_category_is_economy() {
        let car = Vehicle::car("Toyota Yaris", 2021, dec!(40), Category::default());
        assert_eq!(Some(&Category::Economy), car.category());
    }

    #[test]
    fn availability_can_be_toggled() {
        let vehicle = Vehicle::new("Ford Transit", 2018, dec!(70));
        vehicle.set_available(false);
        assert!(!vehicle.is_available());
        vehicle.set_available(true);
        assert!(vehicle.is_available());
    }

    #[test]
    fn vehicle_display() {
        let vehicle = Vehicle::new("Ford Transit", 2018, dec!(70));
        assert_eq!(
            "Ford Transit (2018) | Rate: 70 | Available: true",
            vehicle.to_string()
        );
    }

    #[test]
    fn car_display_appends_category_label() {
        let car = Vehicle::car("BMW X5", 2022, dec!(120), "SUV");
        car.set_available(false);
        assert_eq!(
            "BMW X5 (2022) | Rate: 120 | Available: false | Category: SUV",
            car.to_string()
        );

        let odd = Vehicle::car("Lada Niva", 1995, dec!(20.50), "Vintage");
        assert_eq!(
            "Lada Niva (1995) | Rate: 20.5 | Available: true | Category: Vintage",
            odd.to_string()
        );
    }
}
