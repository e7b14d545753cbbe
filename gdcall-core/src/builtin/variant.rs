/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use gdcall_sys as sys;
use sys::interface_fn;

use crate::builtin::{GString, OpaqueVariant, StringName, VariantType};
use crate::meta::ConvertError;

/// The engine's dynamically typed value.
///
/// A `Variant` can hold any builtin value or an object reference. It is the currency of
/// reflection-style calls; pointer calls bypass it. Conversions go through [`ToVariant`] and
/// [`FromVariant`], which delegate to engine-registered conversion functions rather than
/// reimplementing the encoding.
pub struct Variant {
    opaque: OpaqueVariant,
}

impl Variant {
    /// Creates a `NIL` variant.
    pub fn nil() -> Self {
        unsafe {
            Self::from_var_init(|var_ptr| {
                interface_fn!(variant_new_nil)(var_ptr);
            })
        }
    }

    pub fn is_nil(&self) -> bool {
        self.get_type() == VariantType::Nil
    }

    /// The dynamic type currently stored.
    pub fn get_type(&self) -> VariantType {
        let sys_type = unsafe { interface_fn!(variant_get_type)(self.var_sys()) };
        VariantType::from_sys(sys_type)
    }

    /// Engine-defined truthiness of the stored value.
    pub fn booleanize(&self) -> bool {
        unsafe { interface_fn!(variant_booleanize)(self.var_sys()) != 0 }
    }

    /// Converts to the engine's string representation, as `str(...)` would in GDScript.
    pub fn stringify(&self) -> GString {
        unsafe {
            GString::from_string_init(|string_ptr| {
                interface_fn!(variant_stringify)(self.var_sys(), string_ptr);
            })
        }
    }

    /// Wraps `value` by invoking the engine's registered `Variant` constructor for `vtype`.
    #[doc(hidden)]
    pub fn from_type_sys<T: sys::FfiType>(vtype: VariantType, value: &T) -> Self {
        unsafe {
            let converter = interface_fn!(get_variant_from_type_constructor)(vtype.to_sys())
                .unwrap_or_else(|| unreachable!("no variant constructor for {vtype:?}"));

            Self::from_var_init(|var_ptr| converter(var_ptr, value.sys()))
        }
    }

    /// Extracts a `T` by invoking the engine's registered extractor, after checking the
    /// dynamic type.
    #[doc(hidden)]
    pub fn to_type_sys<T: sys::FfiType>(&self, vtype: VariantType) -> Result<T, ConvertError> {
        let actual = self.get_type();
        if actual != vtype {
            return Err(ConvertError::bad_type(vtype, actual));
        }

        unsafe {
            let converter = interface_fn!(get_variant_to_type_constructor)(vtype.to_sys())
                .unwrap_or_else(|| unreachable!("no variant extractor for {vtype:?}"));

            // Source pointer is semantically const; the ABI signature just isn't.
            Ok(T::new_with_init(|type_ptr| {
                converter(type_ptr, self.var_sys() as sys::GDExtensionVariantPtr)
            }))
        }
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Raw pointer plumbing

    fn from_opaque(opaque: OpaqueVariant) -> Self {
        Self { opaque }
    }

    /// # Safety
    /// `init` must write a fully constructed variant through the pointer.
    pub(crate) unsafe fn from_var_init(
        init: impl FnOnce(sys::GDExtensionUninitializedVariantPtr),
    ) -> Self {
        Self::from_opaque(OpaqueVariant::with_init(|ptr| init(ptr)))
    }

    pub(crate) fn var_sys(&self) -> sys::GDExtensionConstVariantPtr {
        self.opaque.to_sys()
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::nil()
    }
}

impl Clone for Variant {
    fn clone(&self) -> Self {
        unsafe {
            Self::from_var_init(|var_ptr| {
                interface_fn!(variant_new_copy)(var_ptr, self.var_sys());
            })
        }
    }
}

impl Drop for Variant {
    fn drop(&mut self) {
        unsafe {
            interface_fn!(variant_destroy)(self.opaque.to_sys_mut());
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stringify())
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variant({}: {})", self, self.get_type().as_str())
    }
}

// SAFETY: a variant travels through pointer calls as the address of its opaque payload, and
// the payload is relocatable.
unsafe impl sys::FfiType for Variant {
    unsafe fn from_sys(ptr: sys::GDExtensionTypePtr) -> Self {
        // Takes ownership of the bytes; the source must not be destroyed afterwards.
        Self::from_opaque(std::ptr::read(ptr as *mut OpaqueVariant))
    }

    unsafe fn new_with_init(init: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
        Self::from_var_init(init)
    }

    fn sys(&self) -> sys::GDExtensionTypePtr {
        self.opaque.to_sys() as sys::GDExtensionTypePtr
    }

    unsafe fn move_return_ptr(self, dst: sys::GDExtensionTypePtr) {
        // `dst` is uninitialized storage, so no destructor runs for previous contents.
        std::ptr::write(dst as *mut Self, self);
    }
}

impl VariantType {
    /// Name of the enumerator, matching the engine's type names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "String",
            Self::Vector2 => "Vector2",
            Self::Vector2i => "Vector2i",
            Self::Rect2 => "Rect2",
            Self::Rect2i => "Rect2i",
            Self::Vector3 => "Vector3",
            Self::Vector3i => "Vector3i",
            Self::Transform2D => "Transform2D",
            Self::Vector4 => "Vector4",
            Self::Vector4i => "Vector4i",
            Self::Plane => "Plane",
            Self::Quaternion => "Quaternion",
            Self::Aabb => "AABB",
            Self::Basis => "Basis",
            Self::Transform3D => "Transform3D",
            Self::Projection => "Projection",
            Self::Color => "Color",
            Self::StringName => "StringName",
            Self::NodePath => "NodePath",
            Self::Rid => "RID",
            Self::Object => "Object",
            Self::Callable => "Callable",
            Self::Signal => "Signal",
            Self::Dictionary => "Dictionary",
            Self::Array => "Array",
            Self::PackedByteArray => "PackedByteArray",
            Self::PackedInt32Array => "PackedInt32Array",
            Self::PackedInt64Array => "PackedInt64Array",
            Self::PackedFloat32Array => "PackedFloat32Array",
            Self::PackedFloat64Array => "PackedFloat64Array",
            Self::PackedStringArray => "PackedStringArray",
            Self::PackedVector2Array => "PackedVector2Array",
            Self::PackedVector3Array => "PackedVector3Array",
            Self::PackedColorArray => "PackedColorArray",
            Self::PackedVector4Array => "PackedVector4Array",
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversion traits

/// Conversion of a Rust value into a [`Variant`].
pub trait ToVariant {
    fn to_variant(&self) -> Variant;
}

/// Conversion of a [`Variant`] back into a typed Rust value.
pub trait FromVariant: Sized {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError>;

    /// Infallible variant of [`try_from_variant`][Self::try_from_variant]; panics on mismatch.
    fn from_variant(variant: &Variant) -> Self {
        Self::try_from_variant(variant)
            .unwrap_or_else(|err| panic!("variant conversion failed: {err}"))
    }
}

impl ToVariant for Variant {
    fn to_variant(&self) -> Variant {
        self.clone()
    }
}

impl FromVariant for Variant {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        Ok(variant.clone())
    }
}

/// Implements both conversion traits through the engine's registered converters.
macro_rules! impl_ffi_variant {
    ($T:ty, $vtype:ident) => {
        impl ToVariant for $T {
            fn to_variant(&self) -> Variant {
                Variant::from_type_sys(VariantType::$vtype, self)
            }
        }

        impl FromVariant for $T {
            fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
                variant.to_type_sys(VariantType::$vtype)
            }
        }
    };
}

impl_ffi_variant!(bool, Bool);
impl_ffi_variant!(i64, Int);
impl_ffi_variant!(f64, Float);
impl_ffi_variant!(GString, String);
impl_ffi_variant!(StringName, StringName);
impl_ffi_variant!(crate::builtin::Vector2, Vector2);
impl_ffi_variant!(crate::builtin::Vector3, Vector3);
impl_ffi_variant!(crate::builtin::Vector4, Vector4);
impl_ffi_variant!(crate::builtin::Color, Color);
impl_ffi_variant!(crate::builtin::Rid, Rid);

/// Smaller integers widen to the variant's 64-bit `int`; extraction checks the range.
macro_rules! impl_int_variant {
    ($T:ty) => {
        impl ToVariant for $T {
            fn to_variant(&self) -> Variant {
                i64::from(*self).to_variant()
            }
        }

        impl FromVariant for $T {
            fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
                let wide = i64::try_from_variant(variant)?;
                <$T>::try_from(wide).map_err(|_| ConvertError::out_of_range(wide))
            }
        }
    };
}

impl_int_variant!(i8);
impl_int_variant!(i16);
impl_int_variant!(i32);
impl_int_variant!(u8);
impl_int_variant!(u16);
impl_int_variant!(u32);

impl ToVariant for f32 {
    fn to_variant(&self) -> Variant {
        f64::from(*self).to_variant()
    }
}

impl FromVariant for f32 {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        f64::try_from_variant(variant).map(|wide| wide as f32)
    }
}

impl ToVariant for &str {
    fn to_variant(&self) -> Variant {
        GString::from(*self).to_variant()
    }
}

impl ToVariant for String {
    fn to_variant(&self) -> Variant {
        GString::from(self.as_str()).to_variant()
    }
}

impl FromVariant for String {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        GString::try_from_variant(variant).map(|s| s.to_string())
    }
}
