//! Driver create and edit forms.

use depot_domain::models::{Driver, DriverInput, DriverUpdate};
use depot_kernel::prelude::*;
use depot_kernel::validation;

/// New-driver form. Phone and CNH hold digits only; the masks are display-side.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverDraft {
    pub name: Field<Text>,
    pub phone: Field<Phone>,
    pub cnh: Field<Cnh>,
    pub categories: LicenseCategories,
}

impl Default for DriverDraft {
    fn default() -> Self {
        Self {
            name: Field::default(),
            phone: Field::default(),
            cnh: Field::default(),
            categories: LicenseCategories::empty(),
        }
    }
}

impl DriverDraft {
    /// Replaces the category with the one whose bit is `value`. `0` or any
    /// other value clears it.
    pub fn select_category(&mut self, value: u32) {
        self.categories =
            LicenseCategory::from_bit(value).map_or_else(LicenseCategories::empty, LicenseCategory::flag);
    }

    /// Label shown in the category select, `"Nenhuma"` while empty.
    #[must_use]
    pub fn category_label(&self) -> String {
        self.categories.label()
    }

    pub fn validate(&self) -> Validation<DriverInput> {
        let name = self.name.value();
        validation::name(name)?;
        validation::phone(self.phone.value())?;
        validation::cnh(self.cnh.value())?;
        validation::license_category(self.categories)?;

        Ok(DriverInput {
            name: name.trim().to_owned(),
            phone: self.phone.value().clone(),
            cnh: self.cnh.value().clone(),
            cnh_category: self.categories,
        })
    }
}

/// Edit form. CNH and category are fixed after registration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverEditDraft {
    pub name: Field<Text>,
    pub phone: Field<Phone>,
}

impl DriverEditDraft {
    #[must_use]
    pub fn from_record(driver: &Driver) -> Self {
        Self { name: Field::new(driver.name.clone()), phone: Field::from_input(&driver.phone) }
    }

    pub fn validate(&self) -> Validation<DriverUpdate> {
        let name = self.name.value();
        validation::name(name)?;
        validation::phone(self.phone.value())?;
        Ok(DriverUpdate { name: name.trim().to_owned(), phone: self.phone.value().clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_kernel::validation::messages;

    fn draft() -> DriverDraft {
        let mut draft = DriverDraft {
            name: Field::from_input(" Maria Souza "),
            phone: Field::from_input("(11) 98765-4321"),
            cnh: Field::from_input("123.456.789-01"),
            ..DriverDraft::default()
        };
        draft.select_category(LicenseCategory::C.flag().bits());
        draft
    }

    #[test]
    fn valid_draft_sends_canonical_values() {
        let input = draft().validate().unwrap();
        assert_eq!(input.name, "Maria Souza");
        assert_eq!(input.phone, "11987654321");
        assert_eq!(input.cnh, "12345678901");
        assert_eq!(input.cnh_category.bits(), 4);
    }

    #[test]
    fn picking_a_category_replaces_the_previous_one() {
        let mut d = draft();
        d.select_category(1);
        assert_eq!(d.category_label(), "A");
        d.select_category(4);
        assert_eq!(d.category_label(), "C");
        assert_eq!(d.validate().unwrap().cnh_category.bits(), 4);
    }

    #[test]
    fn none_or_combined_values_clear_the_category() {
        let mut d = draft();
        d.select_category(0);
        assert_eq!(d.category_label(), "Nenhuma");
        assert_eq!(d.validate().unwrap_err().message, messages::CATEGORY_INVALID);

        d.select_category(16);
        d.select_category(5);
        assert!(d.categories.is_empty());
        assert_eq!(d.validate().unwrap_err().message, messages::CATEGORY_INVALID);
    }

    #[test]
    fn rules_run_in_form_order() {
        let mut d = draft();
        d.name.input("A");
        d.phone.clear();
        assert_eq!(d.validate().unwrap_err().message, messages::NAME_LENGTH);

        d.name.input("Ana");
        assert_eq!(d.validate().unwrap_err().message, messages::PHONE_EMPTY);

        d.phone.input("11987654321");
        d.cnh.clear();
        assert_eq!(d.validate().unwrap_err().message, messages::CNH_EMPTY);
    }

    #[test]
    fn edit_draft_keeps_only_name_and_phone() {
        let edit = DriverEditDraft {
            name: Field::from_input("Jo"),
            phone: Field::from_input("1133334444"),
        };
        assert_eq!(edit.phone.display(), "(11) 3333-4444");
        let update = edit.validate().unwrap();
        assert_eq!(update, DriverUpdate { name: "Jo".to_owned(), phone: "1133334444".to_owned() });
    }
}
