use super::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME: &str = "camelCase";

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

/// Serde settings already present on the struct.
#[derive(Default)]
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands `#[api_model]`: common derives plus the backend's serde naming policy.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match build(args, &input) {
        Ok(attrs) => quote! {
            #attrs
            #input
        },
        Err(err) => err.to_compile_error(),
    }
}

fn build(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_args(args)?;
    let existing = existing_serde(&input.attrs)?;

    let derives = derive_attr(&input.attrs);
    let rename = rename_attr(args.rename_all, existing.rename_all.as_ref())?;
    let deny = deny_attr(args.deny_unknown_fields, existing.deny_unknown_fields, input)?;

    Ok(quote! {
        #derives
        #rename
        #deny
    })
}

fn parse_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(pair) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if pair.path.is_ident("rename_all") {
            if parsed.rename_all.is_some() {
                return Err(syn::Error::new_spanned(&pair, "duplicate argument"));
            }
            parsed.rename_all = Some(string_literal(&pair)?);
        } else if pair.path.is_ident("deny_unknown_fields") {
            if parsed.deny_unknown_fields.is_some() {
                return Err(syn::Error::new_spanned(&pair, "duplicate argument"));
            }
            parsed.deny_unknown_fields = Some(bool_literal(&pair)?);
        } else {
            return Err(syn::Error::new_spanned(
                &pair.path,
                "unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(pair: &MetaNameValue) -> Option<&Lit> {
    match &pair.value {
        Expr::Lit(expr) => Some(&expr.lit),
        _ => None,
    }
}

fn string_literal(pair: &MetaNameValue) -> syn::Result<LitStr> {
    match literal(pair) {
        Some(Lit::Str(lit)) => Ok(lit.clone()),
        _ => Err(syn::Error::new_spanned(&pair.value, "expected a string literal")),
    }
}

fn bool_literal(pair: &MetaNameValue) -> syn::Result<bool> {
    match literal(pair) {
        Some(Lit::Bool(lit)) => Ok(lit.value),
        _ => Err(syn::Error::new_spanned(&pair.value, "expected a boolean literal")),
    }
}

fn existing_serde(attrs: &[Attribute]) -> syn::Result<ExistingSerde> {
    let mut existing = ExistingSerde::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                existing.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                existing.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Skip values of attributes this macro does not manage (e.g. `default = "..."`).
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(existing)
}

fn derive_attr(attrs: &[Attribute]) -> TokenStream {
    let existing = derived_trait_names(attrs);
    let wanted: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !existing.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();

    if wanted.is_empty() { quote! {} } else { quote! { #[derive(#(#wanted),*)] } }
}

fn rename_attr(requested: Option<LitStr>, existing: Option<&LitStr>) -> syn::Result<TokenStream> {
    let requested = requested.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));

    match existing {
        Some(current) if current.value() != requested.value() => Err(syn::Error::new_spanned(
            current,
            "conflicting serde rename_all; remove it or pass the same value to api_model",
        )),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #requested)] }),
    }
}

fn deny_attr(
    requested: Option<bool>,
    already_set: bool,
    input: &ItemStruct,
) -> syn::Result<TokenStream> {
    match (requested, already_set) {
        (Some(false), true) => Err(syn::Error::new_spanned(
            &input.ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        )),
        (Some(true), false) => Ok(quote! { #[serde(deny_unknown_fields)] }),
        _ => Ok(quote! {}),
    }
}
