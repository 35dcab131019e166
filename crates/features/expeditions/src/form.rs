//! Expedition create and edit forms.
//!
//! The forecast is picked as a calendar date and sent as UTC midnight of that date.

use chrono::{DateTime, NaiveDate, Utc};
use depot_domain::models::{Expedition, ExpeditionInput, ExpeditionUpdate};
use depot_kernel::editing::LOCKED_TOOLTIP;
use depot_kernel::prelude::*;
use depot_kernel::validation::{self, selected};

pub const SELECT_ORDER: &str = "Selecione um pedido";
pub const SELECT_DRIVER: &str = "Selecione um motorista";
pub const SELECT_TRUCK: &str = "Selecione um caminhão";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpeditionDraft {
    pub order_id: Option<String>,
    pub driver_id: Option<String>,
    pub truck_id: Option<String>,
    pub forecast: Option<NaiveDate>,
    pub observation: Field<Text>,
}

impl ExpeditionDraft {
    /// All three selects and the forecast are filled; enables the submit button.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.order_id, &self.driver_id, &self.truck_id]
            .iter()
            .all(|id| id.as_deref().is_some_and(|id| !id.is_empty()))
            && self.forecast.is_some()
    }

    pub fn validate_at(&self, today: NaiveDate, horizon_days: u32) -> Validation<ExpeditionInput> {
        let order_id = selected("orderId", self.order_id.as_deref(), SELECT_ORDER)?;
        let (driver_id, truck_id) = assignment(self.driver_id.as_deref(), self.truck_id.as_deref())?;
        let forecast = validation::delivery_forecast(self.forecast, today, horizon_days)?;
        validation::observation(self.observation.value())?;

        Ok(ExpeditionInput {
            order_id: order_id.to_owned(),
            driver_id,
            truck_id,
            delivery_forecast: utc_midnight(forecast),
            observation: self.observation.value().clone(),
        })
    }
}

/// Edit form. `new_status` starts at the current status; `None` leaves the
/// status out of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpeditionEditDraft {
    pub status: Option<OrderStatus>,
    pub new_status: Option<OrderStatus>,
    pub driver_id: Option<String>,
    pub truck_id: Option<String>,
    pub forecast: Option<NaiveDate>,
    pub observation: Field<Text>,
}

impl ExpeditionEditDraft {
    #[must_use]
    pub fn from_record(expedition: &Expedition) -> Self {
        Self {
            status: expedition.order_status,
            new_status: expedition.order_status,
            driver_id: Some(expedition.driver_id.clone()),
            truck_id: Some(expedition.truck_id.clone()),
            forecast: Some(expedition.delivery_forecast.date_naive()),
            observation: Field::new(expedition.observation.clone()),
        }
    }

    #[must_use]
    pub const fn gate(&self) -> EditGate {
        EditGate::for_status(self.status)
    }

    /// The update body and the status to send alongside it.
    pub fn validate_at(
        &self,
        today: NaiveDate,
        horizon_days: u32,
    ) -> Validation<(ExpeditionUpdate, Option<OrderStatus>)> {
        if !is_editable(self.status) {
            return Err(ValidationError::new("orderStatus", LOCKED_TOOLTIP));
        }
        let (driver_id, truck_id) = assignment(self.driver_id.as_deref(), self.truck_id.as_deref())?;
        let forecast = validation::delivery_forecast(self.forecast, today, horizon_days)?;
        validation::observation(self.observation.value())?;

        let update = ExpeditionUpdate {
            delivery_forecast: utc_midnight(forecast),
            observation: self.observation.value().clone(),
            driver_id,
            truck_id,
        };
        Ok((update, self.new_status))
    }
}

fn assignment(driver_id: Option<&str>, truck_id: Option<&str>) -> Validation<(String, String)> {
    let driver_id = selected("driverId", driver_id, SELECT_DRIVER)?;
    let truck_id = selected("truckId", truck_id, SELECT_TRUCK)?;
    Ok((driver_id.to_owned(), truck_id.to_owned()))
}

fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
