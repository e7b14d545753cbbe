/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::num::NonZeroU64;

use crate::builtin::{FromVariant, ToVariant, Variant};
use crate::meta::ConvertError;

/// Unique identifier of an engine object, valid for the object's lifetime.
///
/// Unlike a raw pointer, an instance id can safely outlive its object and be checked or resolved
/// later. The id `0` means "no object" and cannot be represented; use `Option<InstanceId>` where
/// absence is possible.
///
/// The engine encodes whether the object is reference-counted in bit 63.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId {
    value: NonZeroU64,
}

impl InstanceId {
    /// Constructs from a raw id, mapping `0` to `None`.
    pub fn try_from_u64(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(|value| Self { value })
    }

    /// Constructs from the signed representation used in GDScript and the variant `int` type.
    pub fn try_from_i64(id: i64) -> Option<Self> {
        Self::try_from_u64(id as u64)
    }

    pub fn to_u64(self) -> u64 {
        self.value.get()
    }

    /// Signed reinterpretation, as the id appears in GDScript.
    pub fn to_i64(self) -> i64 {
        self.value.get() as i64
    }

    /// Whether the identified object is reference-counted (bit 63 of the id).
    pub fn is_ref_counted(self) -> bool {
        self.value.get() & (1u64 << 63) != 0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i64())
    }
}

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceId({})", self.to_i64())
    }
}

impl ToVariant for InstanceId {
    fn to_variant(&self) -> Variant {
        self.to_i64().to_variant()
    }
}

impl FromVariant for InstanceId {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        let id = i64::try_from_variant(variant)?;
        Self::try_from_i64(id).ok_or_else(|| ConvertError::out_of_range(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_unrepresentable() {
        assert!(InstanceId::try_from_u64(0).is_none());
        assert!(InstanceId::try_from_i64(0).is_none());
    }

    #[test]
    fn ref_counted_bit() {
        let manual = InstanceId::try_from_u64(12345).unwrap();
        assert!(!manual.is_ref_counted());

        let refc = InstanceId::try_from_u64(12345 | (1 << 63)).unwrap();
        assert!(refc.is_ref_counted());
    }

    #[test]
    fn signed_round_trip() {
        let high = u64::MAX - 7;
        let id = InstanceId::try_from_u64(high).unwrap();
        assert_eq!(InstanceId::try_from_i64(id.to_i64()), Some(id));
        assert_eq!(id.to_u64(), high);
    }
}
