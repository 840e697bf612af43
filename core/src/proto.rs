//! Type level identities for the known UEFI Protocols
//!
//! UEFI Protocols are interface pointers identified by a GUID.
//! The types here carry no interface themselves, they only tie the
//! GUID to a Rust type so code can be generic over it,
//! such as `locate_protocol::<GraphicsOutput>()`.
//!
//! GUIDs here are written in text form, independently from
//! the field form in [`crate::known`]. The two must always agree.
use crate::GUID;

/// `EFI_LOADED_IMAGE_PROTOCOL`
#[GUID("5B1B31A1-9562-11D2-8E3F-00A0C969723B")]
#[derive(Debug, Clone, Copy)]
pub struct LoadedImage;

/// `EFI_SIMPLE_FILE_SYSTEM_PROTOCOL`
#[GUID("964E5B22-6459-11D2-8E39-00A0C969723B")]
#[derive(Debug, Clone, Copy)]
pub struct SimpleFileSystem;

/// `EFI_EDID_DISCOVERED_PROTOCOL`
#[GUID("1C0C34F6-D380-41FA-A049-8AD06C1A66AA")]
#[derive(Debug, Clone, Copy)]
pub struct DiscoveredEdid;

/// `EFI_GRAPHICS_OUTPUT_PROTOCOL`
#[GUID("9042A9DE-23DC-4A38-96FB-7ADED080516A")]
#[derive(Debug, Clone, Copy)]
pub struct GraphicsOutput;

/// `EFI_FILE_INFO`
#[GUID("09576E92-6D3F-11D2-8E39-00A0C969723B")]
#[derive(Debug, Clone, Copy)]
pub struct FileInfo;
