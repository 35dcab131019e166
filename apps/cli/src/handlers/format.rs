use crate::args::FormatKind;
use depot::kernel::format::{
    format_cnh, format_license_plate, format_phone, format_price_input, format_year,
};

#[must_use]
pub fn format_value(kind: FormatKind, value: &str) -> String {
    match kind {
        FormatKind::Phone => format_phone(value),
        FormatKind::Cnh => format_cnh(value),
        FormatKind::Plate => format_license_plate(value),
        FormatKind::Year => format_year(value),
        FormatKind::Price => format_price_input(value),
    }
}
