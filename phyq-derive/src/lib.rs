//! Derive macro implementation used by `phyq-core`.
//!
//! `phyq-derive` is an implementation detail of this workspace. The `Ratio` derive expands in terms of
//! `crate::Ratio`, so it is intended to be used by `phyq-core` (or by crates that expose an identical crate-root
//! API).
//!
//! Most users should depend on `phyq` instead and use the predefined ratios.
//!
//! # Generated impls
//!
//! For a ratio marker type `MyRatio`, the derive implements `crate::Ratio for MyRatio` with the fraction reduced to
//! lowest terms.
//!
//! # Attributes
//!
//! The derive reads a required `#[ratio(...)]` attribute:
//!
//! - `num = 1`: numerator, a positive integer literal
//! - `den = 1000`: denominator, a positive integer literal
//! - `symbol = "milli"`: name shown by `Display`

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitInt, LitStr, Token,
};

/// Derive `crate::Ratio` for a zero-sized marker type.
///
/// The derive must be paired with a `#[ratio(...)]` attribute providing `num`, `den`, and `symbol`.
///
/// This macro is intended for use by `phyq-core`.
#[proc_macro_derive(Ratio, attributes(ratio))]
pub fn derive_ratio(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_ratio_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_ratio_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let ratio_attr = parse_ratio_attribute(&input.attrs)?;

    let num = positive(&ratio_attr.num)?;
    let den = positive(&ratio_attr.den)?;
    let divisor = gcd(num, den);
    let num = (num / divisor) as i64;
    let den = (den / divisor) as i64;
    let symbol = &ratio_attr.symbol;

    let expanded = quote! {
        impl crate::Ratio for #name {
            const NUM: i64 = #num;
            const DEN: i64 = #den;
            const SYMBOL: &'static str = #symbol;
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[ratio(...)]` attribute.
struct RatioAttribute {
    num: LitInt,
    den: LitInt,
    symbol: LitStr,
}

impl Parse for RatioAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut num: Option<LitInt> = None;
        let mut den: Option<LitInt> = None;
        let mut symbol: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "num" => {
                    num = Some(input.parse()?);
                }
                "den" => {
                    den = Some(input.parse()?);
                }
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let num =
            num.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `num`"))?;
        let den =
            den.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `den`"))?;
        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        Ok(RatioAttribute { num, den, symbol })
    }
}

fn parse_ratio_attribute(attrs: &[Attribute]) -> syn::Result<RatioAttribute> {
    for attr in attrs {
        if attr.path().is_ident("ratio") {
            return attr.parse_args::<RatioAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[ratio(...)] attribute",
    ))
}

/// Parses a ratio term, which must fit an `i64` and be strictly positive.
fn positive(lit: &LitInt) -> syn::Result<u64> {
    let value: u64 = lit.base10_parse()?;
    if value == 0 || value > i64::MAX as u64 {
        return Err(syn::Error::new(
            lit.span(),
            "ratio terms must be positive and fit in an i64",
        ));
    }
    Ok(value)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
