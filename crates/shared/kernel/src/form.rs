//! Masked form fields.
//!
//! A [`Field`] stores only the canonical value. The text shown in the input is
//! projected from it on demand, so the displayed string and the value sent to
//! the API can never drift apart.
//!
//! ```rust
//! use depot_kernel::form::{Cents, Field, Phone};
//!
//! let mut phone = Field::<Phone>::default();
//! phone.input("11987654321");
//! assert_eq!(phone.value(), "11987654321");
//! assert_eq!(phone.display(), "(11) 98765-4321");
//!
//! let price = Field::<Cents>::from_input("150");
//! assert_eq!(price.display(), "1,50");
//! assert_eq!(price.value(), &Some(150));
//! ```

use crate::format::{
    cents_to_amount, digits_only, format_cnh, format_license_plate, format_phone,
    format_price_input, format_year, unformat_phone,
};
use std::fmt::Debug;
use std::num::ParseIntError;

/// Converts between keystrokes and a canonical value.
pub trait Mask {
    type Value: Clone + Debug + Default + PartialEq;

    /// Canonical value for whatever is currently typed in the input.
    fn parse(raw: &str) -> Self::Value;

    /// Text the input shows for `value`.
    fn display(value: &Self::Value) -> String;

    /// Value after a keystroke turned the input into `raw`. Masks that can
    /// reject a keystroke return `current` unchanged.
    fn update(_current: &Self::Value, raw: &str) -> Self::Value {
        Self::parse(raw)
    }
}

/// A form input holding its canonical value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field<M: Mask> {
    value: M::Value,
}

impl<M: Mask> Field<M> {
    #[must_use]
    pub const fn new(value: M::Value) -> Self {
        Self { value }
    }

    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        Self { value: M::parse(raw) }
    }

    /// Replaces the value with whatever the input now contains.
    pub fn input(&mut self, raw: &str) {
        self.value = M::update(&self.value, raw);
    }

    pub fn set(&mut self, value: M::Value) {
        self.value = value;
    }

    #[must_use]
    pub const fn value(&self) -> &M::Value {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> M::Value {
        self.value
    }

    #[must_use]
    pub fn display(&self) -> String {
        M::display(&self.value)
    }

    pub fn clear(&mut self) {
        self.value = M::Value::default();
    }
}

/// Digits of a phone number, capped where the displayed mask stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Phone;

impl Mask for Phone {
    type Value = String;

    fn parse(raw: &str) -> String {
        unformat_phone(&format_phone(raw))
    }

    fn display(value: &String) -> String {
        format_phone(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cnh;

impl Mask for Cnh {
    type Value = String;

    fn parse(raw: &str) -> String {
        format_cnh(raw)
    }

    fn display(value: &String) -> String {
        value.clone()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plate;

impl Mask for Plate {
    type Value = String;

    fn parse(raw: &str) -> String {
        format_license_plate(raw)
    }

    fn display(value: &String) -> String {
        value.clone()
    }
}

/// Up to four digits; `None` while empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Year;

impl Mask for Year {
    type Value = Option<i32>;

    fn parse(raw: &str) -> Option<i32> {
        format_year(raw).parse().ok()
    }

    fn display(value: &Option<i32>) -> String {
        value.map(|year| year.to_string()).unwrap_or_default()
    }
}

/// Bank-style money entry stored as whole cents; `None` while empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cents;

impl Cents {
    /// Decimal amount of a cents field, `0.0` when empty.
    #[must_use]
    pub fn amount(value: Option<u64>) -> f64 {
        value.map_or(0.0, cents_to_amount)
    }
}

impl Cents {
    /// Fails only when the digits do not fit in `u64` cents.
    fn read(raw: &str) -> Result<Option<u64>, ParseIntError> {
        let digits = digits_only(raw);
        if digits.is_empty() {
            return Ok(None);
        }
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(Some(0));
        }
        significant.parse().map(Some)
    }
}

impl Mask for Cents {
    type Value = Option<u64>;

    /// Digits that overflow yield an empty field.
    fn parse(raw: &str) -> Option<u64> {
        Self::read(raw).unwrap_or_default()
    }

    fn update(current: &Option<u64>, raw: &str) -> Option<u64> {
        Self::read(raw).unwrap_or(*current)
    }

    fn display(value: &Option<u64>) -> String {
        value.map(|cents| format_price_input(&cents.to_string())).unwrap_or_default()
    }
}

/// Non-negative whole units; `None` while empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quantity;

impl Mask for Quantity {
    type Value = Option<i64>;

    fn parse(raw: &str) -> Option<i64> {
        digits_only(raw).parse().ok()
    }

    fn update(current: &Option<i64>, raw: &str) -> Option<i64> {
        let digits = digits_only(raw);
        if digits.is_empty() {
            return None;
        }
        digits.parse().map_or(*current, Some)
    }

    fn display(value: &Option<i64>) -> String {
        value.map(|quantity| quantity.to_string()).unwrap_or_default()
    }
}

/// Free text, kept as typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Text;

impl Mask for Text {
    type Value = String;

    fn parse(raw: &str) -> String {
        raw.to_owned()
    }

    fn display(value: &String) -> String {
        value.clone()
    }
}
