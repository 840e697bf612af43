//! GUIDs for locating UEFI firmware interfaces while booting
//!
//! Provides the UEFI [`Guid`][base::Guid] type and the well known GUIDs a
//! boot loader needs to find its loaded image, file system, and display.
//!
//! # Organization
//!
//! - [`base`], the FFI compatible [`Guid`][base::Guid] type
//! - [`known`], the GUID constants, and lookup by name
//! - [`proto`], the same GUIDs attached to Rust types
//! - [`extra`], the [`Entity`][extra::Entity] trait tying a type to a GUID
//!
//! # Example
//!
//! ```rust
//! use efi_guid::{extra::Entity, known, proto::GraphicsOutput};
//!
//! // A GUID handed back by firmware
//! let found = known::GRAPHICS_OUTPUT_PROTOCOL;
//!
//! assert!(GraphicsOutput::is(&found));
//! assert_eq!(
//!     known::name_of(&found),
//!     Some("EFI_GRAPHICS_OUTPUT_PROTOCOL_GUID")
//! );
//! ```
//!
//! # References
//!
//! - [UEFI Specification 2.10][spec]
//!
//! [spec]: <https://uefi.org/specs/UEFI/2.10/index.html>
#![no_std]

extern crate self as efi_guid;

pub mod error;

pub mod base;
pub mod extra;
pub mod known;
pub mod proto;

pub use base::Guid;

/// Declare a type as a UEFI [`Entity`][extra::Entity] identified by a GUID
///
/// ```rust
/// use efi_guid::{extra::Entity, GUID};
///
/// #[GUID("9042A9DE-23DC-4A38-96FB-7ADED080516A")]
/// struct Gop;
///
/// assert_eq!(Gop::GUID, efi_guid::known::GRAPHICS_OUTPUT_PROTOCOL);
/// assert_eq!(<Gop as Entity>::NAME, "Gop");
/// ```
pub use efi_guid_macros::GUID;
