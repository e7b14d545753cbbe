/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Argument frames for pointer calls.
//!
//! Every generated method body follows the same mechanical sequence: build a frame, push the
//! arguments, invoke the method bind, take the return slot. Frames live on the stack and only
//! borrow their arguments, so freeing is implicit at end of scope.

use std::marker::PhantomData;
use std::mem::MaybeUninit;

use crate::ffi::FfiType;
use crate::{GDExtensionConstTypePtr, GDExtensionTypePtr};

/// Fixed-capacity array of argument pointers for a single pointer call.
///
/// The generator sizes `N` to the exact number of arguments of the method; pushing more panics.
/// Arguments are borrowed, which ties the frame's lifetime to the call site and prevents the
/// pointers from dangling while the engine reads them.
pub struct CallFrame<'a, const N: usize> {
    ptrs: [GDExtensionConstTypePtr; N],
    len: usize,
    _args: PhantomData<&'a ()>,
}

impl<'a, const N: usize> CallFrame<'a, N> {
    pub fn new() -> Self {
        Self {
            ptrs: [std::ptr::null(); N],
            len: 0,
            _args: PhantomData,
        }
    }

    /// Appends the next argument, in declaration order.
    pub fn arg<T: FfiType>(&mut self, value: &'a T) {
        assert!(
            self.len < N,
            "call frame overflow: capacity {N} exceeded"
        );

        self.ptrs[self.len] = value.sys_const();
        self.len += 1;
    }

    /// Pointer array handed to `object_method_bind_ptrcall`.
    pub fn args_ptr(&self) -> *const GDExtensionConstTypePtr {
        self.ptrs.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a, const N: usize> Default for CallFrame<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Return slot for pointer calls: uninitialized storage the engine writes the result into.
pub struct RetSlot<T: FfiType> {
    storage: MaybeUninit<T>,
}

impl<T: FfiType> RetSlot<T> {
    pub fn new() -> Self {
        Self {
            storage: MaybeUninit::uninit(),
        }
    }

    /// Zero-initialized slot. Required for object returns: the engine assigns into the slot as
    /// if it held a live reference, so the previous pointer value must be null.
    ///
    /// Only use with types for which all-zero bytes are a valid value.
    pub fn zeroed() -> Self {
        Self {
            storage: MaybeUninit::zeroed(),
        }
    }

    /// Destination pointer for the engine call.
    pub fn type_ptr(&mut self) -> GDExtensionTypePtr {
        self.storage.as_mut_ptr() as GDExtensionTypePtr
    }

    /// Moves the written value out of the slot.
    ///
    /// # Safety
    /// The engine call receiving [`type_ptr`](Self::type_ptr) must have completed and written a
    /// valid `T`. Calling this on an unwritten slot reads uninitialized memory.
    pub unsafe fn take(self) -> T {
        self.storage.assume_init()
    }
}

impl<T: FfiType> Default for RetSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Return slot for `void` methods; the engine expects a null return pointer.
pub struct NilRet;

impl NilRet {
    pub fn type_ptr(&mut self) -> GDExtensionTypePtr {
        std::ptr::null_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_records_argument_pointers_in_order() {
        let a: i64 = 11;
        let b: f64 = 2.5;
        let c = true;

        let mut frame = CallFrame::<3>::new();
        frame.arg(&a);
        frame.arg(&b);
        frame.arg(&c);

        assert_eq!(frame.len(), 3);

        // The engine dereferences each slot as a pointer to the argument's type.
        unsafe {
            let ptrs = std::slice::from_raw_parts(frame.args_ptr(), 3);
            assert_eq!(*(ptrs[0] as *const i64), 11);
            assert_eq!(*(ptrs[1] as *const f64), 2.5);
            assert!(*(ptrs[2] as *const bool));
        }
    }

    #[test]
    #[should_panic(expected = "call frame overflow")]
    fn frame_overflow_panics() {
        let a: i64 = 1;
        let mut frame = CallFrame::<1>::new();
        frame.arg(&a);
        frame.arg(&a);
    }

    #[test]
    fn ret_slot_round_trip() {
        let mut ret = RetSlot::<i64>::new();
        let ptr = ret.type_ptr();

        // Stand-in for the engine writing the result.
        unsafe { (ptr as *mut i64).write(99) };

        let value = unsafe { ret.take() };
        assert_eq!(value, 99);
    }

    #[test]
    fn nil_ret_is_null() {
        let mut nil = NilRet;
        assert!(nil.type_ptr().is_null());
    }
}
