/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use gdcall_sys as sys;
use sys::interface_fn;

use crate::builtin::lifecycle::builtin_lifecycle;
use crate::builtin::{GString, OpaqueStringName};

/// An interned engine string, optimized for identity comparison.
///
/// Class names, method names and other identifiers use this type on the engine side. Construction
/// from a Rust string hits the engine's intern table, so callers that look up the same name
/// repeatedly should construct once and reuse.
pub struct StringName {
    opaque: OpaqueStringName,
}

impl StringName {
    fn from_opaque(opaque: OpaqueStringName) -> Self {
        Self { opaque }
    }

    /// # Safety
    /// `init` must write a fully constructed engine string name through the pointer.
    pub(crate) unsafe fn from_string_name_init(
        init: impl FnOnce(sys::GDExtensionUninitializedStringNamePtr),
    ) -> Self {
        Self::from_opaque(OpaqueStringName::with_init(|ptr| init(ptr)))
    }

    #[doc(hidden)]
    pub fn string_sys(&self) -> sys::GDExtensionConstStringNamePtr {
        self.opaque.to_sys()
    }
}

impl From<&str> for StringName {
    fn from(s: &str) -> Self {
        unsafe {
            Self::from_string_name_init(|string_ptr| {
                interface_fn!(string_name_new_with_utf8_chars_and_len)(
                    string_ptr,
                    s.as_ptr() as *const std::ffi::c_char,
                    s.len() as sys::GDExtensionInt,
                );
            })
        }
    }
}

impl From<&GString> for StringName {
    fn from(s: &GString) -> Self {
        // Through the engine's own StringName(String) constructor, keeping interning exact.
        unsafe {
            let ctor = builtin_lifecycle().string_name_from_string;
            let args = [s.string_sys() as sys::GDExtensionConstTypePtr];
            Self::from_string_name_init(|string_ptr| ctor(string_ptr, args.as_ptr()))
        }
    }
}

impl Clone for StringName {
    fn clone(&self) -> Self {
        unsafe {
            let ctor = builtin_lifecycle().string_name_construct_copy;
            let args = [self.string_sys() as sys::GDExtensionConstTypePtr];
            Self::from_string_name_init(|string_ptr| ctor(string_ptr, args.as_ptr()))
        }
    }
}

impl Drop for StringName {
    fn drop(&mut self) {
        unsafe {
            (builtin_lifecycle().string_name_destroy)(self.opaque.to_sys_mut());
        }
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::builtin::ToVariant;

        write!(f, "{}", self.to_variant().stringify())
    }
}

impl fmt::Debug for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&\"{self}\"")
    }
}

// SAFETY: string names travel through pointer calls as the address of their opaque payload,
// and the payload is relocatable.
unsafe impl sys::FfiType for StringName {
    unsafe fn from_sys(ptr: sys::GDExtensionTypePtr) -> Self {
        Self::from_opaque(std::ptr::read(ptr as *mut OpaqueStringName))
    }

    unsafe fn new_with_init(init: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
        Self::from_string_name_init(init)
    }

    fn sys(&self) -> sys::GDExtensionTypePtr {
        self.opaque.to_sys() as sys::GDExtensionTypePtr
    }

    unsafe fn move_return_ptr(self, dst: sys::GDExtensionTypePtr) {
        std::ptr::write(dst as *mut Self, self);
    }
}
