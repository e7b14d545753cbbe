/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// Handle to a server-side resource (RID), an opaque 64-bit id.
///
/// The engine allocates these; `0` is the invalid handle. RIDs are plain values with no
/// lifecycle of their own.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Rid(u64);

impl Rid {
    /// The invalid handle, as returned by engine APIs on failure.
    pub const INVALID: Self = Self(0);

    /// Wraps a raw id previously obtained from the engine.
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    pub const fn to_u64(self) -> u64 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for Rid {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Rid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RID({})", self.0)
    }
}

gdcall_sys::ffi_self_repr!(Rid);
gdcall_sys::static_assert_eq_size!(Rid, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(!Rid::INVALID.is_valid());
        assert!(!Rid::default().is_valid());
        assert!(Rid::from_u64(17).is_valid());
        assert_eq!(Rid::from_u64(17).to_u64(), 17);
    }
}
