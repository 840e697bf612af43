//! UEFI Base types
//!
//! # GUID Layout
//!
//! UEFI defines `EFI_GUID` as a C struct of four fields,
//! `UINT32 Data1`, `UINT16 Data2`, `UINT16 Data3`, and `UINT8 Data4[8]`.
//!
//! In memory this means the first three fields are stored little-endian,
//! while the canonical text form, `9042A9DE-23DC-4A38-96FB-7ADED080516A`,
//! writes them big-endian. `Data4` is never swapped.
//!
//! [`Guid`] always stores the in-memory, or "wire", layout.
//!
//! # References
//!
//! - [Appendix A. GUID and Time Formats][aa]
//!
//! [aa]: <https://uefi.org/specs/UEFI/2.10/Apx_A_GUID_and_Time_Formats.html>
use core::{fmt, str::FromStr};

use nuuid::Uuid;

use crate::error::GuidError;

/// UEFI Globally Unique Identifier, or GUID.
///
/// This is FFI compatible with and ABI Identical to a 128-bit buffer thats
/// 64-bit aligned, aka a suitably aligned `[u8; 16]`, or a `u128`.
///
/// A GUID is a Microsoft Format [RFC 4122 UUID][rfc4122],
/// with these caveats from [Appendix A. GUID and Time Formats][aa].
///
/// It is important to read that document to understand the layout of
/// this buffer, if using it directly. UEFI relies extensively on GUIDs.
///
/// [rfc4122]: <https://www.rfc-editor.org/rfc/rfc4122>
/// [aa]: <https://uefi.org/specs/UEFI/2.10/Apx_A_GUID_and_Time_Formats.html>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C, align(8))]
pub struct Guid([u8; 16]);

impl Guid {
    /// The all zero GUID
    pub const ZERO: Self = Self([0; 16]);

    /// Create a new [`Guid`] directly from `bytes`
    ///
    /// `bytes` must already be in the UEFI in-memory layout.
    #[inline]
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Create a new [`Guid`] from the four fields of `EFI_GUID`,
    /// exactly as they are written in the UEFI Specification.
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        let d1 = data1.to_le_bytes();
        let d2 = data2.to_le_bytes();
        let d3 = data3.to_le_bytes();
        Self([
            d1[0], d1[1], d1[2], d1[3], //
            d2[0], d2[1], //
            d3[0], d3[1], //
            data4[0], data4[1], data4[2], data4[3], data4[4], data4[5], data4[6], data4[7],
        ])
    }

    /// Create a new [`Guid`] from big-endian RFC 4122 bytes,
    /// which is the order the text form is written in.
    #[inline]
    pub const fn from_uuid_bytes(bytes: [u8; 16]) -> Self {
        Self(swap_fields(bytes))
    }

    /// Raw, *unaligned*, GUID bytes
    #[inline]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Big-endian RFC 4122 bytes
    ///
    /// Inverse of [`Guid::from_uuid_bytes`]
    #[inline]
    pub const fn to_uuid_bytes(self) -> [u8; 16] {
        swap_fields(self.0)
    }

    #[inline]
    pub const fn data1(self) -> u32 {
        let b = self.0;
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }

    #[inline]
    pub const fn data2(self) -> u16 {
        let b = self.0;
        u16::from_le_bytes([b[4], b[5]])
    }

    #[inline]
    pub const fn data3(self) -> u16 {
        let b = self.0;
        u16::from_le_bytes([b[6], b[7]])
    }

    #[inline]
    pub const fn data4(self) -> [u8; 8] {
        let b = self.0;
        [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]]
    }

    #[inline]
    fn to_uuid(self) -> Uuid {
        Uuid::from_bytes(self.to_uuid_bytes())
    }
}

/// Byte swap the first three fields, converting between
/// the UEFI and RFC 4122 layouts. This is its own inverse.
const fn swap_fields(b: [u8; 16]) -> [u8; 16] {
    [
        b[3], b[2], b[1], b[0], //
        b[5], b[4], //
        b[7], b[6], //
        b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15],
    ]
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guid") //.
            .field(&self.0)
            .field(&format_args!("[Guid] {}", self.to_uuid()))
            .finish()
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_uuid(), f)
    }
}

impl FromStr for Guid {
    type Err = GuidError;

    /// Parse the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse(s)?;
        Ok(Self::from_uuid_bytes(uuid.to_bytes()))
    }
}

impl From<Guid> for [u8; 16] {
    #[inline]
    fn from(value: Guid) -> Self {
        value.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::*;

    const TEXT: &str = "9042A9DE-23DC-4A38-96FB-7ADED080516A";

    const WIRE: [u8; 16] = [
        0xDE, 0xA9, 0x42, 0x90, 0xDC, 0x23, 0x38, 0x4A, 0x96, 0xFB, 0x7A, 0xDE, 0xD0, 0x80, 0x51,
        0x6A,
    ];

    #[test]
    fn fields() {
        let guid = Guid::from_fields(
            0x9042A9DE,
            0x23DC,
            0x4A38,
            [0x96, 0xFB, 0x7A, 0xDE, 0xD0, 0x80, 0x51, 0x6A],
        );
        assert_eq!(guid.to_bytes(), WIRE);
        assert_eq!(guid, Guid::new(WIRE));
        assert_eq!(guid.data1(), 0x9042A9DE);
        assert_eq!(guid.data2(), 0x23DC);
        assert_eq!(guid.data3(), 0x4A38);
        assert_eq!(guid.data4(), [0x96, 0xFB, 0x7A, 0xDE, 0xD0, 0x80, 0x51, 0x6A]);
    }

    #[test]
    fn uuid_bytes() {
        let rfc = [
            0x90, 0x42, 0xA9, 0xDE, 0x23, 0xDC, 0x4A, 0x38, 0x96, 0xFB, 0x7A, 0xDE, 0xD0, 0x80,
            0x51, 0x6A,
        ];
        let guid = Guid::from_uuid_bytes(rfc);
        assert_eq!(guid.to_bytes(), WIRE);
        assert_eq!(guid.to_uuid_bytes(), rfc);
    }

    #[test]
    fn text() {
        let guid: Guid = TEXT.parse().unwrap();
        assert_eq!(guid.to_bytes(), WIRE);

        let s = guid.to_string();
        assert!(s.eq_ignore_ascii_case(TEXT), "{s}");
        assert_eq!(s.parse::<Guid>().unwrap(), guid);

        let lower: Guid = TEXT.to_ascii_lowercase().parse().unwrap();
        assert_eq!(lower, guid);
    }

    #[test]
    fn invalid_text() {
        assert!("".parse::<Guid>().is_err());
        assert!("9042A9DE-23DC-4A38-96FB".parse::<Guid>().is_err());
        assert!("9042A9DE-23DC-4A38-96FB-7ADED080516G".parse::<Guid>().is_err());
    }

    #[test]
    fn layout() {
        assert_eq!(core::mem::size_of::<Guid>(), 16);
        assert_eq!(core::mem::align_of::<Guid>(), 8);
        assert_eq!(Guid::ZERO.to_bytes(), [0; 16]);
    }
}
