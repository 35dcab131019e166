//! Which records may still be edited.

use depot_domain::OrderStatus;

pub const EDIT_TOOLTIP: &str = "Editar expedição";
pub const LOCKED_TOOLTIP: &str =
    "Apenas expedições com status Pendente, Em Separação ou Em Trânsito podem ser editadas";

/// True while the order is still moving: pending, in separation or in transit.
/// A missing or unrecognised status is never editable.
#[must_use]
pub const fn is_editable(status: Option<OrderStatus>) -> bool {
    matches!(
        status,
        Some(OrderStatus::Pending | OrderStatus::InSeparation | OrderStatus::InTransit)
    )
}

/// State of an edit button, recomputed from the latest fetched status on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditGate {
    pub enabled: bool,
    pub tooltip: &'static str,
}

impl EditGate {
    #[must_use]
    pub const fn for_status(status: Option<OrderStatus>) -> Self {
        if is_editable(status) {
            Self { enabled: true, tooltip: EDIT_TOOLTIP }
        } else {
            Self { enabled: false, tooltip: LOCKED_TOOLTIP }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_open_statuses_are_editable() {
        assert!(is_editable(Some(OrderStatus::Pending)));
        assert!(is_editable(Some(OrderStatus::InSeparation)));
        assert!(is_editable(Some(OrderStatus::InTransit)));
        assert!(!is_editable(Some(OrderStatus::Delivered)));
        assert!(!is_editable(Some(OrderStatus::Canceled)));
        assert!(!is_editable(None));
    }

    #[test]
    fn editable_is_the_complement_of_terminal() {
        for status in OrderStatus::iter() {
            assert_eq!(is_editable(Some(status)), !status.is_terminal());
        }
    }

    #[test]
    fn gate_tooltips() {
        assert_eq!(EditGate::for_status(Some(OrderStatus::InTransit)).tooltip, EDIT_TOOLTIP);
        let locked = EditGate::for_status(Some(OrderStatus::Delivered));
        assert!(!locked.enabled);
        assert_eq!(locked.tooltip, LOCKED_TOOLTIP);
    }
}
