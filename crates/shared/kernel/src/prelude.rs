pub use crate::editing::{EditGate, is_editable};
pub use crate::form::{Cents, Cnh, Field, Mask, Phone, Plate, Quantity, Text, Year};
pub use crate::page::{Busy, ListState};
pub use crate::range::DateRange;
pub use crate::ui::{Modal, UiState};
pub use crate::validation::{Validation, ValidationError};
pub use depot_domain::{LicenseCategories, LicenseCategory, OrderStatus};
