//! Syn 2.x removed `AttributeArgs` and `NestedMeta`,
//! so re-implement the subset our attributes use.

use proc_macro2::Span;
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident,
    Lit,
    LitBool,
    Meta,
    Token,
};

#[derive(Debug, Clone)]
pub enum NestedMeta {
    Meta(Meta),
    Lit(Lit),
}

impl Parse for NestedMeta {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Lit) && !(input.peek(LitBool) && input.peek2(Token![=])) {
            input.parse().map(NestedMeta::Lit)
        } else if input.peek(Ident::peek_any)
            || input.peek(Token![::]) && input.peek3(Ident::peek_any)
        {
            input.parse().map(NestedMeta::Meta)
        } else {
            Err(input.error("expected identifier or literal"))
        }
    }
}

/// Comma separated attribute arguments, `#[attr(a, "b", c("d"))]`
#[derive(Debug, Clone)]
pub struct AttributeArgs {
    pub attributes: Vec<NestedMeta>,
    pub span: Span,
}

impl Parse for AttributeArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let span = input.span();
        let args = Punctuated::<NestedMeta, Token![,]>::parse_terminated(input)?;
        Ok(Self {
            attributes: args.into_iter().collect(),
            span,
        })
    }
}
