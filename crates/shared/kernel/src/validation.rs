//! Field validation rules.
//!
//! Each rule checks one already-canonical value and fails with the first
//! broken constraint. Forms chain rules with `?` so only one message ever
//! reaches the user.

use chrono::{Datelike, NaiveDate, TimeDelta};
use depot_domain::LicenseCategories;
use std::borrow::Cow;

/// A rejected field and the message shown for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: Cow<'static, str>,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self { field, message: message.into() }
    }
}

pub type Validation<T = ()> = Result<T, ValidationError>;

pub mod messages {
    pub const NAME_EMPTY: &str = "Nome não pode ser vazio";
    pub const NAME_LENGTH: &str = "Nome deve ter entre 2 e 200 caracteres";
    pub const PHONE_EMPTY: &str = "Telefone não pode ser vazio";
    pub const PHONE_TOO_LONG: &str = "Telefone não pode ter mais que 20 caracteres";
    pub const CNH_EMPTY: &str = "CNH não pode ser vazia";
    pub const CNH_TOO_LONG: &str = "CNH não pode ter mais que 20 caracteres";
    pub const CATEGORY_INVALID: &str = "Categoria de CNH inválida";
    pub const PRODUCT_CODE_EMPTY: &str = "ProductCode não pode ser vazio";
    pub const PRODUCT_CODE_TOO_LONG: &str = "ProductCode não pode ter mais que 50 caracteres";
    pub const DESCRIPTION_EMPTY: &str = "Descrição não pode ser vazia";
    pub const DESCRIPTION_TOO_LONG: &str = "Descrição não pode ter mais que 200 caracteres";
    pub const STOCK_NEGATIVE: &str = "Quantidade deve ser >= 0";
    pub const QUANTITY_NOT_POSITIVE: &str = "Quantidade deve ser maior que zero";
    pub const PRICE_NEGATIVE: &str = "Preço deve ser >= 0";
    pub const CAPACITY_NOT_POSITIVE: &str = "Capacidade deve ser maior que 0";
    pub const PLATE_EMPTY: &str = "Placa não pode ser vazia";
    pub const PLATE_TOO_LONG: &str = "Placa não pode ter mais que 20 caracteres";
    pub const MODEL_EMPTY: &str = "Modelo não pode ser vazio";
    pub const MODEL_TOO_LONG: &str = "Modelo não pode ter mais que 100 caracteres";
    pub const YEAR_INVALID: &str = "Ano inválido";
    pub const OBSERVATION_TOO_LONG: &str = "Observação não pode ter mais que 500 caracteres";
    pub const FORECAST_MISSING: &str = "Informe a previsão de entrega";
    pub const FORECAST_PAST: &str = "Previsão de entrega não pode ser no passado";
    pub const RANGE_INVERTED: &str = "A data inicial não pode ser maior que a data final";
    pub const RANGE_TOO_WIDE: &str = "A diferença máxima entre as datas deve ser de 3 meses";
}

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 200;
pub const PHONE_MAX: usize = 20;
pub const CNH_MAX: usize = 20;
pub const PRODUCT_CODE_MAX: usize = 50;
pub const DESCRIPTION_MAX: usize = 200;
pub const PLATE_MAX: usize = 20;
pub const MODEL_MAX: usize = 100;
pub const OBSERVATION_MAX: usize = 500;
pub const MIN_VEHICLE_YEAR_EXCLUSIVE: i32 = 1900;

// --- building blocks ---

/// Fails when `value` is empty after trimming.
pub fn required(field: &'static str, value: &str, message: &'static str) -> Validation {
    if value.trim().is_empty() { Err(ValidationError::new(field, message)) } else { Ok(()) }
}

/// Fails when `value` has more than `max` characters.
pub fn max_chars(
    field: &'static str,
    value: &str,
    max: usize,
    message: &'static str,
) -> Validation {
    if value.chars().count() > max { Err(ValidationError::new(field, message)) } else { Ok(()) }
}

/// Fails when nothing was picked in a select control.
pub fn selected<'a>(
    field: &'static str,
    value: Option<&'a str>,
    message: &'static str,
) -> Validation<&'a str> {
    value.filter(|id| !id.trim().is_empty()).ok_or_else(|| ValidationError::new(field, message))
}

// --- field rules ---

/// Person name: required, 2 to 200 characters once trimmed.
pub fn name(value: &str) -> Validation {
    required("name", value, messages::NAME_EMPTY)?;
    let len = value.trim().chars().count();
    if (NAME_MIN..=NAME_MAX).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::new("name", messages::NAME_LENGTH))
    }
}

/// Canonical (digits-only) phone.
pub fn phone(digits: &str) -> Validation {
    required("phone", digits, messages::PHONE_EMPTY)?;
    max_chars("phone", digits, PHONE_MAX, messages::PHONE_TOO_LONG)
}

/// Canonical (digits-only) CNH.
pub fn cnh(digits: &str) -> Validation {
    required("cnh", digits, messages::CNH_EMPTY)?;
    max_chars("cnh", digits, CNH_MAX, messages::CNH_TOO_LONG)
}

/// At least one known category must be chosen.
pub fn license_category(categories: LicenseCategories) -> Validation {
    if categories.is_none() {
        Err(ValidationError::new("cnhCategory", messages::CATEGORY_INVALID))
    } else {
        Ok(())
    }
}

pub fn product_code(value: &str) -> Validation {
    required("productCode", value, messages::PRODUCT_CODE_EMPTY)?;
    max_chars("productCode", value, PRODUCT_CODE_MAX, messages::PRODUCT_CODE_TOO_LONG)
}

pub fn description(value: &str) -> Validation {
    required("description", value, messages::DESCRIPTION_EMPTY)?;
    max_chars("description", value, DESCRIPTION_MAX, messages::DESCRIPTION_TOO_LONG)
}

/// Stock on hand may be zero.
pub fn stock_quantity(quantity: i64) -> Validation {
    if quantity < 0 {
        Err(ValidationError::new("quantity", messages::STOCK_NEGATIVE))
    } else {
        Ok(())
    }
}

/// Order lines, inbound receipts and stock adjustments move at least one unit.
pub fn positive_quantity(quantity: i64) -> Validation {
    if quantity > 0 {
        Ok(())
    } else {
        Err(ValidationError::new("quantity", messages::QUANTITY_NOT_POSITIVE))
    }
}

pub fn price(amount: f64) -> Validation {
    if amount >= 0.0 { Ok(()) } else { Err(ValidationError::new("price", messages::PRICE_NEGATIVE)) }
}

pub fn capacity(kg: f64) -> Validation {
    if kg > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("capacityKg", messages::CAPACITY_NOT_POSITIVE))
    }
}

pub fn license_plate(value: &str) -> Validation {
    required("licensePlate", value, messages::PLATE_EMPTY)?;
    max_chars("licensePlate", value, PLATE_MAX, messages::PLATE_TOO_LONG)
}

pub fn model(value: &str) -> Validation {
    required("model", value, messages::MODEL_EMPTY)?;
    max_chars("model", value, MODEL_MAX, messages::MODEL_TOO_LONG)
}

/// Later than 1900 and not after `current_year`.
pub fn vehicle_year(year: i32, current_year: i32) -> Validation {
    if year > MIN_VEHICLE_YEAR_EXCLUSIVE && year <= current_year {
        Ok(())
    } else {
        Err(ValidationError::new("year", messages::YEAR_INVALID))
    }
}

/// [`vehicle_year`] against the year of `today`.
pub fn vehicle_year_at(year: i32, today: NaiveDate) -> Validation {
    vehicle_year(year, today.year())
}

pub fn observation(value: &str) -> Validation {
    max_chars("observation", value, OBSERVATION_MAX, messages::OBSERVATION_TOO_LONG)
}

/// Forecast must be set, not before `today`, and at most `horizon_days` after it.
pub fn delivery_forecast(
    forecast: Option<NaiveDate>,
    today: NaiveDate,
    horizon_days: u32,
) -> Validation<NaiveDate> {
    let forecast =
        forecast.ok_or_else(|| ValidationError::new("deliveryForecast", messages::FORECAST_MISSING))?;

    if forecast < today {
        return Err(ValidationError::new("deliveryForecast", messages::FORECAST_PAST));
    }
    if (forecast - today) > TimeDelta::days(i64::from(horizon_days)) {
        return Err(ValidationError::new(
            "deliveryForecast",
            format!("Previsão de entrega muito distante (máximo {horizon_days} dias)"),
        ));
    }
    Ok(forecast)
}

/// At most `max_span_days` between the dates in either direction, then `start <= end`.
pub fn date_range(start: NaiveDate, end: NaiveDate, max_span_days: u32) -> Validation {
    if (end - start).abs() > TimeDelta::days(i64::from(max_span_days)) {
        return Err(ValidationError::new("endDate", messages::RANGE_TOO_WIDE));
    }
    if start > end {
        return Err(ValidationError::new("startDate", messages::RANGE_INVERTED));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn name_bounds() {
        assert_eq!(name("").unwrap_err().message, messages::NAME_EMPTY);
        assert_eq!(name("   ").unwrap_err().message, messages::NAME_EMPTY);
        assert_eq!(name("A").unwrap_err().message, messages::NAME_LENGTH);
        assert_eq!(name(&"a".repeat(201)).unwrap_err().message, messages::NAME_LENGTH);
        assert!(name("Jo").is_ok());
        assert!(name(&"a".repeat(200)).is_ok());
        assert!(name(" Jo ").is_ok());
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        assert!(name(&"ç".repeat(200)).is_ok());
    }

    #[test]
    fn phone_and_cnh_limits() {
        assert_eq!(phone("").unwrap_err().field, "phone");
        assert_eq!(phone(&"9".repeat(21)).unwrap_err().message, messages::PHONE_TOO_LONG);
        assert!(phone(&"9".repeat(20)).is_ok());
        assert_eq!(cnh("").unwrap_err().message, messages::CNH_EMPTY);
        assert_eq!(cnh(&"1".repeat(21)).unwrap_err().message, messages::CNH_TOO_LONG);
    }

    #[test]
    fn category_must_not_be_none() {
        assert!(license_category(LicenseCategories::empty()).is_err());
        assert!(license_category(LicenseCategories::from_mask(64)).is_err());
        assert!(license_category(LicenseCategories::B).is_ok());
    }

    #[test]
    fn inventory_limits() {
        assert_eq!(product_code(&"x".repeat(51)).unwrap_err().message, messages::PRODUCT_CODE_TOO_LONG);
        assert!(product_code(&"x".repeat(50)).is_ok());
        assert_eq!(description("").unwrap_err().message, messages::DESCRIPTION_EMPTY);
        assert!(stock_quantity(0).is_ok());
        assert!(stock_quantity(-1).is_err());
        assert!(positive_quantity(0).is_err());
        assert!(positive_quantity(1).is_ok());
        assert!(price(0.0).is_ok());
        assert!(price(-0.01).is_err());
    }

    #[test]
    fn truck_limits() {
        assert!(capacity(0.0).is_err());
        assert!(capacity(0.01).is_ok());
        assert_eq!(license_plate("").unwrap_err().message, messages::PLATE_EMPTY);
        assert_eq!(model(&"m".repeat(101)).unwrap_err().message, messages::MODEL_TOO_LONG);
        assert!(vehicle_year(1900, 2026).is_err());
        assert!(vehicle_year(1901, 2026).is_ok());
        assert!(vehicle_year(2026, 2026).is_ok());
        assert!(vehicle_year(2027, 2026).is_err());
        assert!(vehicle_year_at(2026, day(2026, 10, 15)).is_ok());
    }

    #[test]
    fn observation_limit() {
        assert!(observation("").is_ok());
        assert!(observation(&"o".repeat(500)).is_ok());
        assert_eq!(observation(&"o".repeat(501)).unwrap_err().message, messages::OBSERVATION_TOO_LONG);
    }

    #[test]
    fn forecast_window() {
        let today = day(2026, 10, 15);
        let yesterday = today - Days::new(1);

        assert_eq!(delivery_forecast(None, today, 30).unwrap_err().message, messages::FORECAST_MISSING);
        assert_eq!(
            delivery_forecast(Some(yesterday), today, 30).unwrap_err().message,
            messages::FORECAST_PAST
        );
        assert_eq!(delivery_forecast(Some(today), today, 30), Ok(today));
        assert!(delivery_forecast(Some(today + Days::new(30)), today, 30).is_ok());

        let too_far = delivery_forecast(Some(today + Days::new(31)), today, 30).unwrap_err();
        assert_eq!(too_far.message, "Previsão de entrega muito distante (máximo 30 dias)");
    }

    #[test]
    fn range_span_and_order() {
        let start = day(2026, 1, 1);
        assert!(date_range(start, start, 90).is_ok());
        assert!(date_range(start, start + Days::new(90), 90).is_ok());
        assert_eq!(
            date_range(start, start + Days::new(91), 90).unwrap_err().message,
            messages::RANGE_TOO_WIDE
        );
        assert_eq!(
            date_range(start + Days::new(1), start, 90).unwrap_err().message,
            messages::RANGE_INVERTED
        );
    }

    #[test]
    fn wide_inverted_range_reports_the_span() {
        let end = day(2026, 1, 1);
        assert_eq!(
            date_range(end + Days::new(151), end, 90).unwrap_err().message,
            messages::RANGE_TOO_WIDE
        );
        assert_eq!(
            date_range(end + Days::new(90), end, 90).unwrap_err().message,
            messages::RANGE_INVERTED
        );
    }

    #[test]
    fn selected_requires_a_value() {
        assert_eq!(selected("orderId", Some("o-1"), "Selecione um pedido"), Ok("o-1"));
        assert!(selected("orderId", Some(""), "Selecione um pedido").is_err());
        assert_eq!(selected("orderId", None, "Selecione um pedido").unwrap_err().message, "Selecione um pedido");
    }
}
