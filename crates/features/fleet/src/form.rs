//! Truck create and edit forms.

use chrono::{Datelike, NaiveDate};
use depot_domain::models::{Truck, TruckInput, TruckUpdate};
use depot_kernel::format::amount_to_cents;
use depot_kernel::prelude::*;
use depot_kernel::validation::{self, PLATE_MAX, messages, max_chars, required};

/// New-truck form. An empty year means the current one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TruckDraft {
    pub license_plate: Field<Plate>,
    pub model: Field<Text>,
    pub year: Field<Year>,
    pub capacity: Field<Cents>,
}

impl TruckDraft {
    /// Checks run in the order the form reports them: both required fields
    /// first, then their lengths, then year and capacity.
    pub fn validate_at(&self, today: NaiveDate) -> Validation<TruckInput> {
        let plate = self.license_plate.value();
        let model = self.model.value();

        required("licensePlate", plate, messages::PLATE_EMPTY)?;
        required("model", model, messages::MODEL_EMPTY)?;
        max_chars("licensePlate", plate, PLATE_MAX, messages::PLATE_TOO_LONG)?;
        validation::model(model)?;

        let year = self.year.value().unwrap_or_else(|| today.year());
        validation::vehicle_year_at(year, today)?;

        let capacity_kg = Cents::amount(*self.capacity.value());
        validation::capacity(capacity_kg)?;

        Ok(TruckInput { license_plate: plate.clone(), model: model.trim().to_owned(), year, capacity_kg })
    }
}

/// Edit form; the plate is shown but never sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TruckEditDraft {
    pub model: Field<Text>,
    pub year: Field<Year>,
    pub capacity: Field<Cents>,
}

impl TruckEditDraft {
    #[must_use]
    pub fn from_record(truck: &Truck) -> Self {
        Self {
            model: Field::new(truck.model.clone()),
            year: Field::new(Some(truck.year)),
            capacity: Field::new(Some(amount_to_cents(truck.capacity_kg))),
        }
    }

    pub fn validate_at(&self, today: NaiveDate) -> Validation<TruckUpdate> {
        let model = self.model.value();
        validation::model(model)?;

        let year = self.year.value().unwrap_or_else(|| today.year());
        validation::vehicle_year_at(year, today)?;

        let capacity_kg = Cents::amount(*self.capacity.value());
        validation::capacity(capacity_kg)?;

        Ok(TruckUpdate { model: model.trim().to_owned(), year, capacity_kg })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn draft() -> TruckDraft {
        TruckDraft {
            license_plate: Field::from_input("abc-1d23"),
            model: Field::from_input(" Atego 2426 "),
            year: Field::from_input("2020"),
            capacity: Field::from_input("1200050"),
        }
    }

    #[test]
    fn valid_draft_builds_input() {
        let input = draft().validate_at(today()).unwrap();
        assert_eq!(input.license_plate, "ABC1D23");
        assert_eq!(input.model, "Atego 2426");
        assert_eq!(input.year, 2020);
        assert!((input.capacity_kg - 12000.5).abs() < 1e-9);
    }

    #[test]
    fn required_fields_come_before_lengths() {
        let mut d = draft();
        d.license_plate.clear();
        d.model.input(&"x".repeat(101));
        assert_eq!(d.validate_at(today()).unwrap_err().message, messages::PLATE_EMPTY);

        d.license_plate.input("ABC1D23");
        assert_eq!(d.validate_at(today()).unwrap_err().message, messages::MODEL_TOO_LONG);
    }

    #[test]
    fn empty_year_defaults_to_current() {
        let mut d = draft();
        d.year.clear();
        assert_eq!(d.validate_at(today()).unwrap().year, 2026);

        d.year.input("2027");
        assert_eq!(d.validate_at(today()).unwrap_err().message, messages::YEAR_INVALID);
        d.year.input("1900");
        assert_eq!(d.validate_at(today()).unwrap_err().message, messages::YEAR_INVALID);
    }

    #[test]
    fn capacity_must_be_positive() {
        let mut d = draft();
        d.capacity.input("0,00");
        assert_eq!(d.validate_at(today()).unwrap_err().message, messages::CAPACITY_NOT_POSITIVE);
        d.capacity.clear();
        assert_eq!(d.validate_at(today()).unwrap_err().field, "capacityKg");
    }

    #[test]
    fn edit_draft_round_trips_a_record() {
        let truck = Truck {
            id: "t-1".to_owned(),
            license_plate: "ABC1D23".to_owned(),
            model: "Atego".to_owned(),
            year: 2019,
            capacity_kg: 8000.25,
            available: true,
            created_at: Utc::now(),
            updated_at: None,
        };
        let draft = TruckEditDraft::from_record(&truck);
        assert_eq!(draft.capacity.display(), "8.000,25");

        let update = draft.validate_at(today()).unwrap();
        assert_eq!(update, TruckUpdate { model: "Atego".to_owned(), year: 2019, capacity_kg: 8000.25 });
    }
}
