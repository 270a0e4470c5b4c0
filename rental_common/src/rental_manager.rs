use crate::core::rental::{Rental, RentalRecord};
use crate::core::types::{Customer, Insurance, RentalId, Tariff};
use crate::core::vehicle::Vehicle;
use crate::errors::RentalError;
use chrono::NaiveDate;
use std::rc::Rc;

/// Keeps the registry of all rentals, and gates their creation and completion.
///
/// The registry is kept in creation order, and rentals are never removed from it.
///
/// There is no global instance: create one and pass it to whoever needs it.
#[derive(Debug, Default)]
pub struct RentalManager {
    rentals: Vec<Rental>,
}

impl RentalManager {
    /// Creates a new instance without any data.
    pub fn new() -> Self {
        RentalManager { rentals: vec![] }
    }

    /// Rents out the `vehicle` to the `customer` from `start` to `end`, both inclusive.
    ///
    /// On success the vehicle becomes unavailable, the rental is priced
    /// and appended to the registry, and a reference to it is returned.
    ///
    /// This is the only place where a vehicle is checked for availability,
    /// so it's what keeps a vehicle from being in two active rentals at once.
    ///
    /// # Errors
    /// - The vehicle is held by an active rental, `RentalError::VehicleUnavailable`;
    /// - The total doesn't fit in a `Decimal`, `RentalError::PriceOutOfRange`.
    ///
    /// The registry and the vehicle are left untouched in both cases.
    pub fn create_rental(
        &mut self,
        customer: Rc<Customer>,
        vehicle: Rc<Vehicle>,
        start: NaiveDate,
        end: NaiveDate,
        tariff: Tariff,
        insurance: Insurance,
    ) -> Result<&Rental, RentalError> {
        if !vehicle.is_available() {
            log::warn!(
                "Refused to rent out {} ({}): it is not available",
                vehicle.model,
                vehicle.id()
            );
            return Err(RentalError::VehicleUnavailable {
                vehicle_id: vehicle.id(),
                model: vehicle.model.clone(),
            });
        }

        let rental = Rental::new(customer, vehicle, start, end, tariff, insurance)
            .map_err(|err| {
                log::warn!("Refused to create a rental: {}", err);
                err
            })?;
        log::info!(
            "Created rental {} for {} on {} from {} to {}, price {}",
            rental.id(),
            rental.customer().name(),
            rental.vehicle().model,
            start,
            end,
            rental.price().normalize()
        );
        self.rentals.push(rental);

        Ok(&self.rentals[self.rentals.len() - 1])
    }

    /// Fetches the active rentals, in creation order
    pub fn active_rentals(&self) -> Vec<&Rental> {
        self.rentals.iter().filter(|r| r.is_active()).collect()
    }

    /// Fetches all rentals, active and completed, in creation order
    pub fn all_rentals(&self) -> &[Rental] {
        &self.rentals
    }

    /// Looks up a rental by its id.
    pub fn rental(&self, id: RentalId) -> Option<&Rental> {
        self.rentals.iter().find(|r| r.id() == id)
    }

    /// Completes the rental with the given `id`, releasing its vehicle.
    ///
    /// An unknown `id` is silently ignored.
    pub fn complete_rental(&mut self, id: RentalId) {
        match self.rentals.iter_mut().find(|r| r.id() == id) {
            Some(rental) => {
                rental.complete();
                log::info!(
                    "Completed rental {}; {} is available again",
                    id,
                    rental.vehicle().model
                );
            }
            None => log::debug!("No rental with id {}; nothing to complete", id),
        }
    }

    /// Serializable snapshots of all rentals, in creation order
    pub fn records(&self) -> Vec<RentalRecord> {
        self.rentals.iter().map(Rental::record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn standard() -> Tariff {
        Tariff::new("Standard", dec!(1.0))
    }

    fn weekend() -> Tariff {
        Tariff::new("Weekend", dec!(0.9))
    }

    fn basic() -> Insurance {
        Insurance::new("Basic", dec!(5))
    }

    fn full() -> Insurance {
        Insurance::new("Full", dec!(15))
    }

    struct Fixture {
        camry: Rc<Vehicle>,
        x5: Rc<Vehicle>,
        axi: Rc<Customer>,
        bektas: Rc<Customer>,
    }

    fn fixture() -> Fixture {
        Fixture {
            camry: Rc::new(Vehicle::car("Toyota Camry", 2020, dec!(50), "Economy")),
            x5: Rc::new(Vehicle::car("BMW X5", 2022, dec!(120), "SUV")),
            axi: Rc::new(Customer::new("Axi")),
            bektas: Rc::new(Customer::new("Bektas")),
        }
    }

    #[test]
    fn create_rental_works() {
        let mut manager = RentalManager::new();
        let f = fixture();

        let rental = manager
            .create_rental(
                Rc::clone(&f.axi),
                Rc::clone(&f.camry),
                today(),
                today() + Duration::days(2),
                standard(),
                basic(),
            )
            .unwrap();

        assert!(rental.is_active());
        assert_eq!(dec!(165), rental.price());
        assert!(!f.camry.is_available());
        assert_eq!(1, manager.all_rentals().len());
    }

    #[test]
    fn create_rental_err_vehicle_unavailable() {
        let mut manager = RentalManager::new();
        let f = fixture();

        manager
            .create_rental(
                Rc::clone(&f.axi),
                Rc::clone(&f.camry),
                today(),
                today() + Duration::days(2),
                standard(),
                basic(),
            )
            .unwrap();

        let result = manager.create_rental(
            Rc::clone(&f.bektas),
            Rc::clone(&f.camry),
            today(),
            today(),
            weekend(),
            full(),
        );

        assert_eq!(
            Some(RentalError::VehicleUnavailable {
                vehicle_id: f.camry.id(),
                model: "Toyota Camry".to_string(),
            }),
            result.err()
        );
        assert_eq!(1, manager.all_rentals().len());
        assert_eq!("Axi", manager.all_rentals()[0].customer().name());
    }

    #[test]
    fn create_rental_err_price_out_of_range() {
        let mut manager = RentalManager::new();
        let f = fixture();
        let carriage = Rc::new(Vehicle::car("Golden Carriage", 2024, Decimal::MAX, "Premium"));

        let result = manager.create_rental(
            Rc::clone(&f.axi),
            Rc::clone(&carriage),
            today(),
            today(),
            standard(),
            basic(),
        );

        assert_eq!(
            Some(RentalError::PriceOutOfRange {
                vehicle_id: carriage.id(),
                model: "Golden Carriage".to_string(),
            }),
            result.err()
        );
        assert!(carriage.is_available());
        assert!(manager.all_rentals().is_empty());
    }

    #[test]
    fn vehicle_can_be_rented_again_after_completion() {
        let mut manager = RentalManager::new();
        let f = fixture();

        let first = manager
            .create_rental(
                Rc::clone(&f.axi),
                Rc::clone(&f.camry),
                today(),
                today(),
                standard(),
                basic(),
            )
            .unwrap()
            .id();
        manager.complete_rental(first);

        let second = manager
            .create_rental(
                Rc::clone(&f.bektas),
                Rc::clone(&f.camry),
                today() + Duration::days(1),
                today() + Duration::days(1),
                standard(),
                basic(),
            )
            .unwrap()
            .id();

        assert_ne!(first, second);
        assert!(!f.camry.is_available());
        assert_eq!(
            vec![second],
            manager.active_rentals().iter().map(|r| r.id()).collect::<Vec<_>>()
        );
        assert_eq!(2, manager.all_rentals().len());
    }

    #[test]
    fn active_and_all_rentals_keep_creation_order() {
        let mut manager = RentalManager::new();
        let f = fixture();
        let van = Rc::new(Vehicle::new("Ford Transit", 2018, dec!(70)));

        let ids = [
            (Rc::clone(&f.axi), Rc::clone(&f.camry)),
            (Rc::clone(&f.bektas), Rc::clone(&f.x5)),
            (Rc::clone(&f.axi), Rc::clone(&van)),
        ]
        .into_iter()
        .map(|(customer, vehicle)| {
            manager
                .create_rental(customer, vehicle, today(), today(), standard(), basic())
                .unwrap()
                .id()
        })
        .collect::<Vec<_>>();

        manager.complete_rental(ids[1]);

        assert_eq!(
            vec![ids[0], ids[2]],
            manager.active_rentals().iter().map(|r| r.id()).collect::<Vec<_>>()
        );
        assert_eq!(
            ids.to_vec(),
            manager.all_rentals().iter().map(|r| r.id()).collect::<Vec<_>>()
        );
        assert!(!manager.all_rentals()[1].is_active());
        assert!(f.x5.is_available());
    }

    #[test]
    fn complete_rental_unknown_id_is_a_no_op() {
        let mut manager = RentalManager::new();
        let f = fixture();

        manager
            .create_rental(
                Rc::clone(&f.axi),
                Rc::clone(&f.camry),
                today(),
                today(),
                standard(),
                basic(),
            )
            .unwrap();
        let before = manager.records();

        manager.complete_rental(RentalId::new());

        assert_eq!(before, manager.records());
        assert!(!f.camry.is_available());
        assert_eq!(1, manager.active_rentals().len());
    }

    #[test]
    fn complete_rental_twice_changes_nothing_more() {
        let mut manager = RentalManager::new();
        let f = fixture();

        let id = manager
            .create_rental(
                Rc::clone(&f.axi),
                Rc::clone(&f.camry),
                today(),
                today() + Duration::days(2),
                standard(),
                basic(),
            )
            .unwrap()
            .id();

        manager.complete_rental(id);
        let after_first = manager.records();
        manager.complete_rental(id);

        assert_eq!(after_first, manager.records());
        assert!(f.camry.is_available());
        assert!(manager.active_rentals().is_empty());
    }

    #[test]
    fn rental_lookup() {
        let mut manager = RentalManager::new();
        let f = fixture();

        let id = manager
            .create_rental(
                Rc::clone(&f.bektas),
                Rc::clone(&f.x5),
                today(),
                today() + Duration::days(4),
                weekend(),
                full(),
            )
            .unwrap()
            .id();

        assert_eq!(Some(dec!(777)), manager.rental(id).map(Rental::price));
        assert!(manager.rental(RentalId::new()).is_none());
    }

    #[test]
    fn empty_manager() {
        let manager = RentalManager::default();
        assert!(manager.active_rentals().is_empty());
        assert!(manager.all_rentals().is_empty());
        assert!(manager.records().is_empty());
    }
}
