use nuuid::Uuid;
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{quote, ToTokens};
use syn::{ext::IdentExt, parse_macro_input, spanned::Spanned, Ident, ItemStruct, Lit};

use crate::{
    compat::{AttributeArgs, NestedMeta},
    imp::{krate_, CommonOpts, Errors},
};

/// Options our macro accepts
#[derive(Debug)]
pub(crate) struct GuidOpts {
    /// Common macro arguments
    pub common: CommonOpts,

    /// GUID macro argument, as big-endian RFC 4122 bytes
    ///
    /// `GUID("9042A9DE-23DC-4A38-96FB-7ADED080516A")`
    pub guid: Option<[u8; 16]>,

    pub guid_span: Span,
}

impl GuidOpts {
    pub fn new() -> Self {
        Self {
            common: CommonOpts::new(),
            guid: None,
            guid_span: Span::call_site(),
        }
    }
}

/// Parse the text form of a GUID into big-endian RFC 4122 bytes
pub(crate) fn parse_guid_str(s: &str) -> Result<[u8; 16], String> {
    if s.is_empty() {
        return Err("GUID cannot be empty".into());
    }
    match Uuid::parse(s) {
        Ok(uuid) => Ok(uuid.to_bytes()),
        Err(e) => Err(format!("invalid GUID: {e}")),
    }
}

/// Parse a GUID
///
/// true if `meta` was a GUID literal, false otherwise.
fn guid_(meta: &NestedMeta, errors: &mut Errors, opts: &mut GuidOpts) -> bool {
    let NestedMeta::Lit(Lit::Str(lit)) = meta else {
        return false;
    };
    let span = lit.span();
    if opts.guid.is_some() {
        errors.push(span, "duplicate GUID attribute");
        return true;
    }
    match parse_guid_str(&lit.value()) {
        Ok(bytes) => {
            opts.guid = Some(bytes);
            opts.guid_span = span;
        }
        Err(e) => errors.push(span, e),
    }
    true
}

#[allow(clippy::if_same_then_else)]
pub(crate) fn parse_args(args: &AttributeArgs, errors: &mut Errors, opts: &mut GuidOpts) {
    if args.attributes.is_empty() {
        errors.push(args.span, "missing GUID");
    }

    for arg in &args.attributes {
        if krate_(arg, errors, &mut opts.common) {
            // continue;
        } else if guid_(arg, errors, opts) {
            // continue;
        } else {
            errors.push(arg_span(arg), "unknown attribute");
        }
    }

    if opts.guid.is_none() && !args.attributes.is_empty() && errors.is_empty() {
        errors.push(args.span, "missing GUID");
    }
}

fn arg_span(arg: &NestedMeta) -> Span {
    match arg {
        NestedMeta::Meta(m) => m.span(),
        NestedMeta::Lit(l) => l.span(),
    }
}

/// Generate the GUID constant
///
/// Returns code like the below,
/// without imports and with the input GUID bytes filled in.
///
/// ```rust,no_run
/// use efi_guid::base::Guid;
///
/// const GUID: Guid = Guid::from_uuid_bytes([
///     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
///     0x00,
/// ]);
/// ```
///
/// On error the zero GUID is used, so only the real error is reported.
pub(crate) fn guid_const(guid: &Option<[u8; 16]>, krate: &Ident) -> impl ToTokens {
    let bytes = guid.unwrap_or([0; 16]);
    let bytes = bytes.iter();
    quote! {
        const GUID: #krate::base::Guid = #krate::base::Guid::from_uuid_bytes([#(#bytes),*]);
    }
}

pub fn guid(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as AttributeArgs);
    let input = parse_macro_input!(input as ItemStruct);
    let mut errors = Errors::new();
    let mut opts = GuidOpts::new();

    parse_args(&args, &mut errors, &mut opts);

    let krate = opts.common.krate();

    let guid = guid_const(&opts.guid, &krate);

    let imp_struct = &input.ident;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let name = imp_struct.unraw().to_string();

    let guid_imp = quote! {
        impl #impl_generics #imp_struct #ty_generics #where_clause {
            /// GUID of the entity
            pub #guid
        }

        unsafe impl #impl_generics #krate::extra::Entity for #imp_struct #ty_generics #where_clause {
            #guid

            const NAME: &'static str = #name;
        }
    };

    let e = errors
        .combine()
        .map(|e| e.into_compile_error())
        .unwrap_or_default();

    TokenStream::from(quote! {
        #e

        #input

        #guid_imp
    })
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn text_to_bytes() {
        let bytes = parse_guid_str("9042A9DE-23DC-4A38-96FB-7ADED080516A").unwrap();
        assert_eq!(
            bytes,
            [
                0x90, 0x42, 0xA9, 0xDE, 0x23, 0xDC, 0x4A, 0x38, 0x96, 0xFB, 0x7A, 0xDE, 0xD0, 0x80,
                0x51, 0x6A
            ]
        );
        let lower = parse_guid_str("9042a9de-23dc-4a38-96fb-7aded080516a").unwrap();
        assert_eq!(bytes, lower);
    }

    #[test]
    fn invalid() {
        assert!(parse_guid_str("").is_err());
        // Random UUID from `uuidgen` with 69420 added to it
        assert!(parse_guid_str("c986ec27-69420-af54-4b55-80aa-91697fcdf8eb").is_err());
        assert!(parse_guid_str("c986ec27-af54-4b55-80aa").is_err());
    }

    #[test]
    fn args() {
        let args: AttributeArgs =
            parse_quote!("c986ec27-af54-4b55-80aa-91697fcdf8eb", crate("my_guid"));
        let mut errors = Errors::new();
        let mut opts = GuidOpts::new();
        parse_args(&args, &mut errors, &mut opts);
        assert!(errors.is_empty());
        assert!(opts.guid.is_some());
        assert_eq!(opts.common.krate(), "my_guid");
    }

    #[test]
    fn bad_args() {
        let cases: [AttributeArgs; 4] = [
            parse_quote!(),
            parse_quote!("c986ec27-af54-4b55-80aa-91697fcdf8eb", test),
            parse_quote!(
                "c986ec27-af54-4b55-80aa-91697fcdf8eb",
                "c986ec27-af54-4b55-80aa-91697fcdf8eb"
            ),
            parse_quote!(crate("my_guid")),
        ];
        for args in cases {
            let mut errors = Errors::new();
            let mut opts = GuidOpts::new();
            parse_args(&args, &mut errors, &mut opts);
            assert!(!errors.is_empty(), "{args:?}");
        }
    }
}
