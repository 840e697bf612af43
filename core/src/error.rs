//! Errors produced while working with [`Guid`][g]s
//!
//! Constant GUIDs can't fail, only text parsing can.
//!
//! [g]: crate::base::Guid
use core::fmt;

use nuuid::ParseUuidError;

/// GUID Friendly Rust Result
pub type Result<T> = core::result::Result<T, GuidError>;

/// Failed to parse a [`Guid`][g] from text
///
/// [g]: crate::base::Guid
pub struct GuidError {
    inner: ParseUuidError,
}

impl GuidError {
    /// The underlying [`nuuid`] error
    #[inline]
    pub fn inner(&self) -> &ParseUuidError {
        &self.inner
    }
}

impl From<ParseUuidError> for GuidError {
    #[inline]
    fn from(inner: ParseUuidError) -> Self {
        Self { inner }
    }
}

impl fmt::Display for GuidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GUID: {}", self.inner)
    }
}

impl fmt::Debug for GuidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuidError")
            .field("inner", &self.inner)
            .field("[Display]", &format_args!("{self}"))
            .finish()
    }
}
