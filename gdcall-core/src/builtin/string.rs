/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use gdcall_sys as sys;
use sys::interface_fn;

use crate::builtin::lifecycle::builtin_lifecycle;
use crate::builtin::OpaqueString;

/// The engine's reference-counted, copy-on-write UTF-32 string.
///
/// Named `GString` to avoid clashing with Rust's `String`. Conversion from and to Rust strings
/// re-encodes through UTF-8, so prefer keeping values on one side of the boundary when possible.
pub struct GString {
    opaque: OpaqueString,
}

impl GString {
    pub fn new() -> Self {
        Self::from("")
    }

    /// Number of bytes in the UTF-8 encoding, excluding the terminator.
    fn utf8_len(&self) -> usize {
        let len =
            unsafe { interface_fn!(string_to_utf8_chars)(self.string_sys(), std::ptr::null_mut(), 0) };
        len as usize
    }

    fn from_opaque(opaque: OpaqueString) -> Self {
        Self { opaque }
    }

    /// # Safety
    /// `init` must write a fully constructed engine string through the pointer.
    pub(crate) unsafe fn from_string_init(
        init: impl FnOnce(sys::GDExtensionUninitializedStringPtr),
    ) -> Self {
        Self::from_opaque(OpaqueString::with_init(|ptr| init(ptr)))
    }

    pub(crate) fn string_sys(&self) -> sys::GDExtensionConstStringPtr {
        self.opaque.to_sys()
    }
}

impl From<&str> for GString {
    fn from(s: &str) -> Self {
        unsafe {
            Self::from_string_init(|string_ptr| {
                interface_fn!(string_new_with_utf8_chars_and_len)(
                    string_ptr,
                    s.as_ptr() as *const std::ffi::c_char,
                    s.len() as sys::GDExtensionInt,
                );
            })
        }
    }
}

impl From<&String> for GString {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl Default for GString {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for GString {
    fn clone(&self) -> Self {
        unsafe {
            let ctor = builtin_lifecycle().string_construct_copy;
            let args = [self.string_sys()];
            Self::from_string_init(|string_ptr| ctor(string_ptr, args.as_ptr()))
        }
    }
}

impl Drop for GString {
    fn drop(&mut self) {
        unsafe {
            (builtin_lifecycle().string_destroy)(self.opaque.to_sys_mut());
        }
    }
}

impl fmt::Display for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.utf8_len();
        let mut buf = vec![0u8; len];

        if len > 0 {
            unsafe {
                interface_fn!(string_to_utf8_chars)(
                    self.string_sys(),
                    buf.as_mut_ptr() as *mut std::ffi::c_char,
                    len as sys::GDExtensionInt,
                );
            }
        }

        // Engine strings are valid Unicode; lossy is for the truncated-in-buffer edge.
        write!(f, "{}", String::from_utf8_lossy(&buf))
    }
}

impl fmt::Debug for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

// SAFETY: engine strings travel through pointer calls as the address of their opaque payload,
// and the payload is relocatable.
unsafe impl sys::FfiType for GString {
    unsafe fn from_sys(ptr: sys::GDExtensionTypePtr) -> Self {
        Self::from_opaque(std::ptr::read(ptr as *mut OpaqueString))
    }

    unsafe fn new_with_init(init: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
        Self::from_string_init(init)
    }

    fn sys(&self) -> sys::GDExtensionTypePtr {
        self.opaque.to_sys() as sys::GDExtensionTypePtr
    }

    unsafe fn move_return_ptr(self, dst: sys::GDExtensionTypePtr) {
        std::ptr::write(dst as *mut Self, self);
    }
}
