//! Inventory, stock adjustment and inbound entry forms.

use depot_domain::models::{
    InboundEntry, InboundEntryInput, InboundEntryUpdate, InventoryInput, InventoryItem,
    InventoryUpdate,
};
use depot_kernel::format::amount_to_cents;
use depot_kernel::prelude::*;
use depot_kernel::validation::{self, required};

pub const REFERENCE_EMPTY: &str = "Referência é obrigatória";
pub const SUPPLIER_EMPTY: &str = "Nome do fornecedor é obrigatório";

/// New inventory item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryDraft {
    pub product_code: Field<Text>,
    pub description: Field<Text>,
    pub quantity: Field<Quantity>,
    pub price: Field<Cents>,
}

impl InventoryDraft {
    /// Stock may start at zero.
    pub fn validate(&self) -> Validation<InventoryInput> {
        let input = self.to_input();
        validation::product_code(&input.product_code)?;
        validation::description(&input.description)?;
        validation::stock_quantity(input.quantity)?;
        validation::price(input.price)?;
        Ok(input)
    }

    /// Same fields, but a receipt must bring at least one unit.
    fn validate_receipt(&self) -> Validation<InventoryInput> {
        let input = self.to_input();
        validation::product_code(&input.product_code)?;
        validation::description(&input.description)?;
        validation::positive_quantity(input.quantity)?;
        validation::price(input.price)?;
        Ok(input)
    }

    fn to_input(&self) -> InventoryInput {
        InventoryInput {
            product_code: self.product_code.value().trim().to_owned(),
            description: self.description.value().trim().to_owned(),
            quantity: self.quantity.value().unwrap_or_default(),
            price: Cents::amount(*self.price.value()),
        }
    }
}

/// Edit form. Stock changes go through [`StockAdjustment`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryEditDraft {
    pub description: Field<Text>,
    pub price: Field<Cents>,
}

impl InventoryEditDraft {
    #[must_use]
    pub fn from_record(item: &InventoryItem) -> Self {
        Self {
            description: Field::new(item.description.clone()),
            price: Field::new(Some(amount_to_cents(item.price))),
        }
    }

    pub fn validate(&self) -> Validation<InventoryUpdate> {
        let description = self.description.value().trim();
        validation::description(description)?;
        let price = Cents::amount(*self.price.value());
        validation::price(price)?;
        Ok(InventoryUpdate { description: description.to_owned(), price })
    }
}

/// Direction of a [`StockAdjustment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Increase,
    Decrease,
}

/// Units to add to or remove from one item.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAdjustment {
    pub direction: Adjustment,
    pub amount: Field<Quantity>,
}

impl StockAdjustment {
    #[must_use]
    pub fn new(direction: Adjustment) -> Self {
        Self { direction, amount: Field::default() }
    }

    pub fn validate(&self) -> Validation<i64> {
        let amount = self.amount.value().unwrap_or_default();
        validation::positive_quantity(amount)?;
        Ok(amount)
    }
}

/// New inbound entry: the received item plus where it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundDraft {
    pub item: InventoryDraft,
    pub reference: Field<Text>,
    pub supplier_name: Field<Text>,
    pub observation: Field<Text>,
}

impl InboundDraft {
    pub fn validate(&self) -> Validation<InboundEntryInput> {
        let inventory_input = self.item.validate_receipt()?;
        let (reference, supplier_name, observation) =
            source_fields(&self.reference, &self.supplier_name, &self.observation)?;
        Ok(InboundEntryInput { inventory_input, reference, supplier_name, observation })
    }
}

/// Edit form. The received item itself cannot change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundEditDraft {
    pub reference: Field<Text>,
    pub supplier_name: Field<Text>,
    pub observation: Field<Text>,
}

impl InboundEditDraft {
    #[must_use]
    pub fn from_record(entry: &InboundEntry) -> Self {
        Self {
            reference: Field::new(entry.reference.clone()),
            supplier_name: Field::new(entry.supplier_name.clone()),
            observation: Field::new(entry.observation.clone().unwrap_or_default()),
        }
    }

    pub fn validate(&self) -> Validation<InboundEntryUpdate> {
        let (reference, supplier_name, observation) =
            source_fields(&self.reference, &self.supplier_name, &self.observation)?;
        Ok(InboundEntryUpdate { reference, supplier_name, observation })
    }
}

/// Reference, supplier and an optional observation; blank observations are omitted.
fn source_fields(
    reference: &Field<Text>,
    supplier_name: &Field<Text>,
    observation: &Field<Text>,
) -> Validation<(String, String, Option<String>)> {
    required("reference", reference.value(), REFERENCE_EMPTY)?;
    required("supplierName", supplier_name.value(), SUPPLIER_EMPTY)?;
    validation::observation(observation.value())?;

    let observation = observation.value().trim();
    Ok((
        reference.value().trim().to_owned(),
        supplier_name.value().trim().to_owned(),
        (!observation.is_empty()).then(|| observation.to_owned()),
    ))
}
