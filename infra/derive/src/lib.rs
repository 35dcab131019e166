#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate in the workspace:
//!
//! * [`macro@depot_error`] turns an enum into a `thiserror` error with a `.context()` extension trait.
//! * [`macro@api_model`] turns a struct into a REST data transfer object with the backend's
//!   camelCase naming policy.
//!
//! Consumers need `thiserror` (for `depot_error`) and `serde` (for `api_model`) in their own
//! dependency list; the expansions refer to them by absolute path.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Defines a REST data transfer object.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `Serialize` and `Deserialize` are added when missing.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * unknown fields are accepted by default, since list endpoints tend to grow
///       columns before the dashboard reads them (`deny_unknown_fields = true` opts in).
///
/// # Example
///
/// ```rust,ignore
/// use depot_derive::api_model;
///
/// #[api_model]
/// pub struct TruckUpdate {
///     pub model: String,
///     pub year: i32,
///     pub capacity_kg: f64,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Defines a subsystem error enum.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?` on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant with a `message` field is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** whose variants all use named fields.
/// 2. Variants that wrap a source error must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[depot_derive::depot_error]
/// pub enum ClientError {
///     #[error("Transport failure{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal client error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn fetch() -> Result<(), ClientError> {
///     send().context("GET /truck")?;
///     Err("unreachable branch".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn depot_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
