//! Extra things that make working with UEFI GUIDs nice,
//! but are not part of UEFI

use crate::base::Guid;

/// A type identified within UEFI by a [`Guid`], such as a Protocol
/// interface or an information type like `EFI_FILE_INFO`.
///
/// See the [`GUID`][gm] macro for how to implement this.
///
/// # Safety
///
/// Firmware hands out untyped pointers keyed only by GUID.
/// If [`Entity::GUID`] is wrong for `Self`, code relying on it
/// will reinterpret one firmware structure as another.
///
/// [gm]: crate::GUID
pub unsafe trait Entity {
    /// Entity GUID
    const GUID: Guid;

    /// Rust name of the entity type
    const NAME: &'static str;

    #[inline]
    fn name() -> &'static str {
        Self::NAME
    }

    #[inline]
    fn guid() -> Guid {
        Self::GUID
    }

    /// Whether `guid`, usually read back from firmware, identifies this
    /// entity
    #[inline]
    fn is(guid: &Guid) -> bool {
        *guid == Self::GUID
    }
}
