/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// @generated by gdcall-codegen from extension_api.json; do not edit.

//! Generated against Godot 4.2; build configuration `float_64`, or `double_64` with the
//! `double-precision` feature.

use gdcall_sys as sys;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Opaque storage sizes

#[cfg(not(feature = "double-precision"))]
pub(crate) type OpaqueVariant = sys::Opaque<24>;
#[cfg(not(feature = "double-precision"))]
pub(crate) type OpaqueString = sys::Opaque<8>;
#[cfg(not(feature = "double-precision"))]
pub(crate) type OpaqueStringName = sys::Opaque<8>;

#[cfg(feature = "double-precision")]
pub(crate) type OpaqueVariant = sys::Opaque<40>;
#[cfg(feature = "double-precision")]
pub(crate) type OpaqueString = sys::Opaque<8>;
#[cfg(feature = "double-precision")]
pub(crate) type OpaqueStringName = sys::Opaque<8>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// VariantType

/// Discriminant of a [`Variant`][crate::builtin::Variant]'s dynamic type.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariantType {
    Nil = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Vector2 = 5,
    Vector2i = 6,
    Rect2 = 7,
    Rect2i = 8,
    Vector3 = 9,
    Vector3i = 10,
    Transform2D = 11,
    Vector4 = 12,
    Vector4i = 13,
    Plane = 14,
    Quaternion = 15,
    Aabb = 16,
    Basis = 17,
    Transform3D = 18,
    Projection = 19,
    Color = 20,
    StringName = 21,
    NodePath = 22,
    Rid = 23,
    Object = 24,
    Callable = 25,
    Signal = 26,
    Dictionary = 27,
    Array = 28,
    PackedByteArray = 29,
    PackedInt32Array = 30,
    PackedInt64Array = 31,
    PackedFloat32Array = 32,
    PackedFloat64Array = 33,
    PackedStringArray = 34,
    PackedVector2Array = 35,
    PackedVector3Array = 36,
    PackedColorArray = 37,
    PackedVector4Array = 38,
}

impl VariantType {
    #[doc(hidden)]
    pub fn from_sys(enumerator: sys::GDExtensionVariantType) -> Self {
        match enumerator {
            0 => Self::Nil,
            1 => Self::Bool,
            2 => Self::Int,
            3 => Self::Float,
            4 => Self::String,
            5 => Self::Vector2,
            6 => Self::Vector2i,
            7 => Self::Rect2,
            8 => Self::Rect2i,
            9 => Self::Vector3,
            10 => Self::Vector3i,
            11 => Self::Transform2D,
            12 => Self::Vector4,
            13 => Self::Vector4i,
            14 => Self::Plane,
            15 => Self::Quaternion,
            16 => Self::Aabb,
            17 => Self::Basis,
            18 => Self::Transform3D,
            19 => Self::Projection,
            20 => Self::Color,
            21 => Self::StringName,
            22 => Self::NodePath,
            23 => Self::Rid,
            24 => Self::Object,
            25 => Self::Callable,
            26 => Self::Signal,
            27 => Self::Dictionary,
            28 => Self::Array,
            29 => Self::PackedByteArray,
            30 => Self::PackedInt32Array,
            31 => Self::PackedInt64Array,
            32 => Self::PackedFloat32Array,
            33 => Self::PackedFloat64Array,
            34 => Self::PackedStringArray,
            35 => Self::PackedVector2Array,
            36 => Self::PackedVector3Array,
            37 => Self::PackedColorArray,
            38 => Self::PackedVector4Array,
            _ => panic!("invalid variant type {enumerator}"),
        }
    }

    #[doc(hidden)]
    pub fn to_sys(self) -> sys::GDExtensionVariantType {
        self as sys::GDExtensionVariantType
    }
}
