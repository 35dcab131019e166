//! Input masks and display formatting.
//!
//! Every function here is total: any string goes in, a string (or number) comes
//! out, and nothing panics on partial or malformed input. Masks run on each
//! keystroke, so a half-typed value simply yields a partial pattern.

use chrono::NaiveDate;

const PHONE_SHORT_MAX: usize = 14;
const PHONE_LONG_MAX: usize = 15;
const CNH_MAX: usize = 11;
const PLATE_MAX: usize = 7;
const YEAR_MAX: usize = 4;

/// ASCII digits of `raw`, in order.
#[must_use]
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Masks a Brazilian phone number as `(DD) DDDD-DDDD`, or `(DD) DDDDD-DDDD` once
/// more than ten digits are typed.
///
/// Fewer than three digits are returned bare. The hyphen appears only once a digit
/// follows the first block of the local number.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    let (block, max_len) =
        if digits.len() <= 10 { (4, PHONE_SHORT_MAX) } else { (5, PHONE_LONG_MAX) };

    if digits.len() < 3 {
        return digits;
    }

    let (area, local) = digits.split_at(2);
    let mut out = String::with_capacity(max_len + 1);
    out.push('(');
    out.push_str(area);
    out.push_str(") ");
    if local.len() > block {
        let (head, tail) = local.split_at(block);
        out.push_str(head);
        out.push('-');
        out.push_str(tail);
    } else {
        out.push_str(local);
    }

    out.truncate(max_len);
    out
}

/// Canonical phone: digits only. Length limits belong to validation.
#[must_use]
pub fn unformat_phone(display: &str) -> String {
    digits_only(display)
}

/// CNH (driver's license number): up to 11 digits.
#[must_use]
pub fn format_cnh(raw: &str) -> String {
    let mut digits = digits_only(raw);
    digits.truncate(CNH_MAX);
    digits
}

/// Uppercase `[A-Z0-9]`, at most 7 characters. Idempotent.
#[must_use]
pub fn format_license_plate(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_alphanumeric)
        .take(PLATE_MAX)
        .collect()
}

/// Up to four digits. Range checks live in [`crate::validation::vehicle_year`].
#[must_use]
pub fn format_year(raw: &str) -> String {
    let mut digits = digits_only(raw);
    digits.truncate(YEAR_MAX);
    digits
}

/// Bank-style money entry: typed digits fill the cents first.
///
/// `"1"` becomes `"0,01"`, `"123"` becomes `"1,23"`, `"123456"` becomes `"1.234,56"`.
/// Empty (or digit-free) input yields an empty string so the field can be cleared.
#[must_use]
pub fn format_price_input(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return String::new();
    }
    render_cents(digits.trim_start_matches('0'))
}

/// Inverse of [`format_price_input`]: the digits read as cents. Empty input is `0.0`.
#[must_use]
pub fn unformat_price_input(display: &str) -> f64 {
    let digits = digits_only(display);
    if digits.is_empty() {
        return 0.0;
    }
    digits.parse::<f64>().map_or(0.0, |cents| cents / 100.0)
}

/// Whole cents nearest to `amount`. Negative and non-finite amounts clamp to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn amount_to_cents(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 { (amount * 100.0).round() as u64 } else { 0 }
}

/// `cents / 100` as a decimal amount.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cents_to_amount(cents: u64) -> f64 {
    cents as f64 / 100.0
}

/// pt-BR fixed two-decimal rendering: `1234.5` becomes `"1.234,50"`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_decimal(amount: f64) -> String {
    if !amount.is_finite() {
        return render_cents("");
    }
    let cents = (amount * 100.0).round() as i128;
    let rendered = render_cents(&cents.unsigned_abs().to_string());
    if cents < 0 { format!("-{rendered}") } else { rendered }
}

/// Currency display: `R$ 1.234,56`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("R$ {}", format_decimal(amount))
}

/// `dd/MM/yyyy`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Renders a digit string of cents (no leading zeros required) as `1.234,56`.
fn render_cents(cents: &str) -> String {
    let padded = format!("{cents:0>3}");
    let (int_part, frac_part) = padded.split_at(padded.len() - 2);
    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };

    let mut out = String::with_capacity(padded.len() + padded.len() / 3 + 1);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(digit);
    }
    out.push(',');
    out.push_str(frac_part);
    out
}
