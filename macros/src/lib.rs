//! Procedural macros for `efi_guid`
//!
//! You probably want the re-exports from `efi_guid` instead of this crate.
use proc_macro::TokenStream;

mod compat;
mod guid;
mod imp;

/// Attach a UEFI GUID to a struct
///
/// This implements the `efi_guid::extra::Entity` trait,
/// and adds an inherent `GUID` constant.
///
/// The GUID is written in its canonical text form,
/// `#[GUID("9042A9DE-23DC-4A38-96FB-7ADED080516A")]`,
/// and is checked at compile time.
///
/// # Arguments
///
/// - `crate("name")`, path to the `efi_guid` crate if it was renamed
#[proc_macro_attribute]
#[allow(non_snake_case)]
pub fn GUID(args: TokenStream, input: TokenStream) -> TokenStream {
    guid::guid(args, input)
}
