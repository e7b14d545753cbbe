/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;

/// Types that can directly and fully represent some Godot type across the ABI.
///
/// Adds methods to convert from and to engine "type pointers", the currency of pointer calls.
/// Implemented for scalars here, and for opaque builtins and object pointers in `gdcall-core`.
///
/// # Safety
/// Implementors guarantee that the engine's encoding of the type matches what
/// [`from_sys`](FfiType::from_sys) reads and [`move_return_ptr`](FfiType::move_return_ptr) writes.
pub unsafe trait FfiType: Sized {
    /// Construct from an engine type pointer.
    ///
    /// # Safety
    /// `ptr` must be a valid type pointer encoding `Self` per the engine's convention, and must
    /// not require extra bookkeeping on read (such as a refcount increment).
    unsafe fn from_sys(ptr: sys::GDExtensionTypePtr) -> Self;

    /// Construct uninitialized storage, then let `init` fill it in.
    ///
    /// Used for engine calls that write their result through an output pointer.
    ///
    /// # Safety
    /// `init` must fully initialize the value behind the pointer it receives.
    unsafe fn new_with_init(init: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self;

    /// Engine type pointer for an immutable operation.
    ///
    /// Returns `*mut` despite `&self`, because the engine API is not const-correct.
    fn sys(&self) -> sys::GDExtensionTypePtr;

    fn sys_const(&self) -> sys::GDExtensionConstTypePtr {
        self.sys()
    }

    /// Move `self` into `dst`, transferring ownership of engine-side resources.
    ///
    /// # Safety
    /// `dst` must be a valid type pointer able to accept a value of `Self`.
    unsafe fn move_return_ptr(self, dst: sys::GDExtensionTypePtr);
}

/// Implements [`FfiType`] for types the engine represents exactly as their Rust layout
/// (the `*mut Self` pattern: the address of the value is the type pointer).
#[macro_export]
macro_rules! ffi_self_repr {
    ($T:ty) => {
        // SAFETY: the engine represents this type as `Self`, so `*mut Self` is sound.
        unsafe impl $crate::FfiType for $T {
            unsafe fn from_sys(ptr: $crate::GDExtensionTypePtr) -> Self {
                *(ptr as *mut Self)
            }

            unsafe fn new_with_init(
                init: impl FnOnce($crate::GDExtensionUninitializedTypePtr),
            ) -> Self {
                let mut raw = std::mem::MaybeUninit::<Self>::uninit();
                init(raw.as_mut_ptr() as $crate::GDExtensionUninitializedTypePtr);
                raw.assume_init()
            }

            fn sys(&self) -> $crate::GDExtensionTypePtr {
                self as *const Self as $crate::GDExtensionTypePtr
            }

            unsafe fn move_return_ptr(self, dst: $crate::GDExtensionTypePtr) {
                *(dst as *mut Self) = self;
            }
        }
    };
}

ffi_self_repr!(bool);
ffi_self_repr!(i64);
ffi_self_repr!(f64);

// Object arguments and returns travel as a pointer-to-object-pointer; the object pointer itself
// is the payload in the type-ptr slot.
ffi_self_repr!(*mut std::ffi::c_void);

// Unit return: a ZST standing in for "no value"; nothing is read or written.
unsafe impl FfiType for () {
    unsafe fn from_sys(_ptr: sys::GDExtensionTypePtr) -> Self {}

    unsafe fn new_with_init(_init: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {}

    fn sys(&self) -> sys::GDExtensionTypePtr {
        // ZST dummy pointer
        self as *const _ as sys::GDExtensionTypePtr
    }

    unsafe fn move_return_ptr(self, _dst: sys::GDExtensionTypePtr) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_repr_round_trip() {
        let value: i64 = -4096;
        let sys_ptr = value.sys();

        let back = unsafe { i64::from_sys(sys_ptr) };
        assert_eq!(back, -4096);

        let mut dst: i64 = 0;
        unsafe { 7i64.move_return_ptr(&mut dst as *mut i64 as _) };
        assert_eq!(dst, 7);
    }

    #[test]
    fn new_with_init_writes_through_pointer() {
        let value = unsafe {
            f64::new_with_init(|ptr| {
                (ptr as *mut f64).write(0.5);
            })
        };
        assert_eq!(value, 0.5);
    }
}
