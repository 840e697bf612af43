use std::fmt::Display;

use proc_macro2::Span;
use quote::format_ident;
use syn::{spanned::Spanned, Error, Ident, LitStr, Meta};

use crate::compat::NestedMeta;

/// Options common to our macros, such as `crate`
#[derive(Debug)]
pub struct CommonOpts {
    /// `efi_guid` crate name
    ///
    /// `GUID("...", crate("name"))`
    krate: Option<Ident>,
}

impl CommonOpts {
    pub const fn new() -> Self {
        Self { krate: None }
    }

    /// Ident for our crate
    pub fn krate(&self) -> Ident {
        self.krate.clone().unwrap_or(format_ident!("efi_guid"))
    }
}

/// Error stack during parsing macro input
pub struct Errors {
    data: Vec<Error>,
}

impl Errors {
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Push error onto stack with the provided span
    pub fn push<D: Display>(&mut self, span: Span, msg: D) {
        self.data.push(Error::new(span, msg));
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Combine all errors into a single one using [`Error::combine`]
    pub fn combine(self) -> Option<Error> {
        self.data.into_iter().reduce(|mut acc, e| {
            acc.combine(e);
            acc
        })
    }
}

/// Attempt to parse the `crate("name")` attribute argument,
/// returning whether it was one.
pub fn krate_(meta: &NestedMeta, errors: &mut Errors, opts: &mut CommonOpts) -> bool {
    let NestedMeta::Meta(Meta::List(l)) = meta else {
        return false;
    };
    if !l.path.is_ident("crate") {
        return false;
    }
    match l.parse_args::<LitStr>() {
        Ok(lit) => {
            if opts.krate.is_some() {
                errors.push(l.span(), "Duplicate attribute `crate`");
            } else {
                match syn::parse_str::<Ident>(&lit.value()) {
                    Ok(i) => opts.krate = Some(i),
                    Err(_) => errors.push(lit.span(), "Expected crate name"),
                }
            }
        }
        Err(_) => errors.push(l.tokens.span(), "Expected string literal"),
    }
    true
}
