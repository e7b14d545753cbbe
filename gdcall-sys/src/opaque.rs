/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Stores an opaque engine value of a certain size, with very restricted operations.
///
/// Due to `align(4)` / `align(8)` and not `packed` repr, this type may be bigger than `N` bytes
/// (which is OK since the engine only reads/writes those `N` bytes through the pointer we hand it).
///
/// The `PhantomData` marker disables `Send`/`Sync`: engine values must stay on the thread that
/// initialized the binding.
#[cfg_attr(target_pointer_width = "32", repr(C, align(4)))]
#[cfg_attr(target_pointer_width = "64", repr(C, align(8)))]
#[derive(Copy, Clone)]
pub struct Opaque<const N: usize> {
    storage: [u8; N],
    marker: std::marker::PhantomData<*const u8>,
}

impl<const N: usize> Opaque<N> {
    /// Constructs opaque storage by letting `init` write through the raw pointer.
    ///
    /// # Safety
    /// `init` must fully initialize the `N` bytes at the given pointer.
    pub unsafe fn with_init(init: impl FnOnce(*mut std::ffi::c_void)) -> Self {
        let mut raw = std::mem::MaybeUninit::<Self>::uninit();
        init(raw.as_mut_ptr() as *mut std::ffi::c_void);
        raw.assume_init()
    }

    pub fn to_sys(&self) -> *const std::ffi::c_void {
        self.storage.as_ptr() as *const std::ffi::c_void
    }

    pub fn to_sys_mut(&mut self) -> *mut std::ffi::c_void {
        self.storage.as_mut_ptr() as *mut std::ffi::c_void
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_holds_advertised_bytes() {
        assert!(std::mem::size_of::<Opaque<24>>() >= 24);

        let opaque = unsafe {
            Opaque::<8>::with_init(|ptr| {
                (ptr as *mut u64).write(0x1122_3344_5566_7788);
            })
        };

        let read = unsafe { (opaque.to_sys() as *const u64).read() };
        assert_eq!(read, 0x1122_3344_5566_7788);
    }
}
