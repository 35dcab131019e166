//! Order forms and the order-line picker.
//!
//! Lines reference inventory items by id. The picker never offers an item
//! that another line already uses, and `validate` rejects duplicates anyway
//! since ids can still be set directly.

use depot_domain::models::{InventoryItem, Order, OrderInput, OrderLineInput, OrderUpdate};
use depot_kernel::prelude::*;
use depot_kernel::validation::{self, required};
use std::collections::HashSet;

pub const ORDER_NUMBER_EMPTY: &str = "Número do pedido é obrigatório";
pub const CUSTOMER_EMPTY: &str = "Nome do cliente é obrigatório";
pub const NO_LINES: &str = "Adicione pelo menos um item ao pedido";
pub const DUPLICATE_ITEM: &str = "Não é possível adicionar o mesmo item mais de uma vez";
pub const NO_INVENTORY: &str = "Nenhum item disponível no inventário";
pub const ALL_ITEMS_ADDED: &str = "Todos os itens já foram adicionados";
pub const ORDER_LOCKED: &str =
    "Apenas pedidos com status Pendente, Em Separação ou Em Trânsito podem ser editados";

/// One line being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDraft {
    pub inventory_id: String,
    pub quantity: Field<Quantity>,
}

impl LineDraft {
    fn to_input(&self) -> OrderLineInput {
        OrderLineInput {
            inventory_id: self.inventory_id.clone(),
            quantity: self.quantity.value().unwrap_or_default(),
        }
    }
}

/// The editable list of lines shared by the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lines(Vec<LineDraft>);

impl Lines {
    #[must_use]
    pub fn as_slice(&self) -> &[LineDraft] {
        &self.0
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut LineDraft> {
        self.0.get_mut(index)
    }

    /// Appends a line for the first item of `available` not used yet, with one unit.
    pub fn add(&mut self, available: &[InventoryItem]) -> Validation<usize> {
        if available.is_empty() {
            return Err(ValidationError::new("items", NO_INVENTORY));
        }
        let item = available
            .iter()
            .find(|item| !self.uses(&item.id, None))
            .ok_or_else(|| ValidationError::new("items", ALL_ITEMS_ADDED))?;

        self.0.push(LineDraft { inventory_id: item.id.clone(), quantity: Field::new(Some(1)) });
        Ok(self.0.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Option<LineDraft> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Items the select of line `index` may offer: its own plus those no other line uses.
    #[must_use]
    pub fn choices<'a>(&self, index: usize, available: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        available.iter().filter(|item| !self.uses(&item.id, Some(index))).collect()
    }

    /// Sum of `quantity * price` using the prices in `available`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total(&self, available: &[InventoryItem]) -> f64 {
        self.0
            .iter()
            .filter_map(|line| {
                let item = available.iter().find(|item| item.id == line.inventory_id)?;
                Some(line.quantity.value().unwrap_or_default() as f64 * item.price)
            })
            .sum()
    }

    fn uses(&self, inventory_id: &str, except: Option<usize>) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(i, line)| Some(i) != except && line.inventory_id == inventory_id)
    }

    fn validate(&self) -> Validation<Vec<OrderLineInput>> {
        if self.0.is_empty() {
            return Err(ValidationError::new("items", NO_LINES));
        }
        let items: Vec<OrderLineInput> = self.0.iter().map(LineDraft::to_input).collect();
        for line in &items {
            validation::positive_quantity(line.quantity)?;
        }
        let mut seen = HashSet::with_capacity(items.len());
        if !items.iter().all(|line| seen.insert(line.inventory_id.as_str())) {
            return Err(ValidationError::new("items", DUPLICATE_ITEM));
        }
        Ok(items)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub order_number: Field<Text>,
    pub customer_name: Field<Text>,
    pub lines: Lines,
}

impl OrderDraft {
    pub fn validate(&self) -> Validation<OrderInput> {
        required("orderNumber", self.order_number.value(), ORDER_NUMBER_EMPTY)?;
        required("customerName", self.customer_name.value(), CUSTOMER_EMPTY)?;
        let items = self.lines.validate()?;
        Ok(OrderInput {
            order_number: self.order_number.value().trim().to_owned(),
            customer_name: self.customer_name.value().trim().to_owned(),
            items,
        })
    }
}

/// Edit form, only submittable while the order is still moving.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEditDraft {
    pub status: Option<OrderStatus>,
    pub customer_name: Field<Text>,
    pub lines: Lines,
}

impl OrderEditDraft {
    #[must_use]
    pub fn from_record(order: &Order) -> Self {
        let lines = order
            .items
            .iter()
            .map(|line| LineDraft {
                inventory_id: line.inventory_id.clone(),
                quantity: Field::new(Some(line.quantity)),
            })
            .collect();
        Self {
            status: Some(order.status),
            customer_name: Field::new(order.customer_name.clone()),
            lines: Lines(lines),
        }
    }

    #[must_use]
    pub const fn gate(&self) -> EditGate {
        EditGate::for_status(self.status)
    }

    pub fn validate(&self) -> Validation<OrderUpdate> {
        if !is_editable(self.status) {
            return Err(ValidationError::new("status", ORDER_LOCKED));
        }
        required("customerName", self.customer_name.value(), CUSTOMER_EMPTY)?;
        let items = self.lines.validate()?;
        Ok(OrderUpdate { customer_name: self.customer_name.value().trim().to_owned(), items })
    }
}
