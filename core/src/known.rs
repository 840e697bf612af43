//! Well known GUIDs used while booting
//!
//! Values are transcribed field by field from the UEFI Specification.
//!
//! # References
//!
//! - [EFI Loaded Image Protocol][li]
//! - [Simple File System Protocol][sfs]
//! - [EFI_FILE_INFO][fi]
//! - [EDID Discovered Protocol][edid]
//! - [Graphics Output Protocol][gop]
//!
//! [li]: <https://uefi.org/specs/UEFI/2.10/09_Protocols_EFI_Loaded_Image.html>
//! [sfs]: <https://uefi.org/specs/UEFI/2.10/13_Protocols_Media_Access.html#simple-file-system-protocol>
//! [fi]: <https://uefi.org/specs/UEFI/2.10/13_Protocols_Media_Access.html#efi-file-info>
//! [edid]: <https://uefi.org/specs/UEFI/2.10/12_Protocols_Console_Support.html#edid-discovered-protocol>
//! [gop]: <https://uefi.org/specs/UEFI/2.10/12_Protocols_Console_Support.html#graphics-output-protocol>
use log::trace;

use crate::base::Guid;

/// `EFI_LOADED_IMAGE_PROTOCOL_GUID`
pub const LOADED_IMAGE_PROTOCOL: Guid = Guid::from_fields(
    0x5B1B31A1,
    0x9562,
    0x11D2,
    [0x8E, 0x3F, 0x00, 0xA0, 0xC9, 0x69, 0x72, 0x3B],
);

/// `EFI_SIMPLE_FILE_SYSTEM_PROTOCOL_GUID`
pub const SIMPLE_FILE_SYSTEM_PROTOCOL: Guid = Guid::from_fields(
    0x964E5B22,
    0x6459,
    0x11D2,
    [0x8E, 0x39, 0x00, 0xA0, 0xC9, 0x69, 0x72, 0x3B],
);

/// `EFI_EDID_DISCOVERED_PROTOCOL_GUID`
pub const EDID_DISCOVERED_PROTOCOL: Guid = Guid::from_fields(
    0x1C0C34F6,
    0xD380,
    0x41FA,
    [0xA0, 0x49, 0x8A, 0xD0, 0x6C, 0x1A, 0x66, 0xAA],
);

/// `EFI_GRAPHICS_OUTPUT_PROTOCOL_GUID`
pub const GRAPHICS_OUTPUT_PROTOCOL: Guid = Guid::from_fields(
    0x9042A9DE,
    0x23DC,
    0x4A38,
    [0x96, 0xFB, 0x7A, 0xDE, 0xD0, 0x80, 0x51, 0x6A],
);

/// `EFI_FILE_INFO_ID`
///
/// Not a protocol, identifies the `EFI_FILE_INFO` structure
/// returned by `EFI_FILE_PROTOCOL.GetInfo()`.
pub const FILE_INFO_ID: Guid = Guid::from_fields(
    0x09576E92,
    0x6D3F,
    0x11D2,
    [0x8E, 0x39, 0x00, 0xA0, 0xC9, 0x69, 0x72, 0x3B],
);

/// Every known GUID, paired with its UEFI Specification name
pub static KNOWN: [(&str, Guid); 5] = [
    ("EFI_LOADED_IMAGE_PROTOCOL_GUID", LOADED_IMAGE_PROTOCOL),
    ("EFI_SIMPLE_FILE_SYSTEM_PROTOCOL_GUID", SIMPLE_FILE_SYSTEM_PROTOCOL),
    ("EFI_EDID_DISCOVERED_PROTOCOL_GUID", EDID_DISCOVERED_PROTOCOL),
    ("EFI_GRAPHICS_OUTPUT_PROTOCOL_GUID", GRAPHICS_OUTPUT_PROTOCOL),
    ("EFI_FILE_INFO_ID", FILE_INFO_ID),
];

/// UEFI Specification name of `guid`, or [`None`] if it isn't one we know
pub fn name_of(guid: &Guid) -> Option<&'static str> {
    let name = KNOWN.iter().find(|(_, g)| g == guid).map(|(n, _)| *n);
    if name.is_none() {
        trace!("Unknown GUID {guid}");
    }
    name
}

/// Known GUID for the UEFI Specification `name`
///
/// `name` must match exactly, such as `EFI_FILE_INFO_ID`.
pub fn lookup(name: &str) -> Option<Guid> {
    KNOWN.iter().find(|(n, _)| *n == name).map(|(_, g)| *g)
}
