/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Cached constructor/destructor pointers for engine-managed builtins.
//!
//! `Clone` and `Drop` of `GString` and `StringName` run on every copy and every scope exit, so
//! the `variant_get_ptr_constructor`/`variant_get_ptr_destructor` lookups are resolved once and
//! reused instead of asking the engine each time.

use gdcall_sys as sys;
use sys::interface_fn;

use crate::builtin::VariantType;
use crate::classes::ClassMethodTable;

type PtrConstructor = unsafe extern "C" fn(
    sys::GDExtensionUninitializedTypePtr,
    *const sys::GDExtensionConstTypePtr,
);
type PtrDestructor = unsafe extern "C" fn(sys::GDExtensionTypePtr);

/// Lifecycle functions of the builtins with non-trivial copy and drop.
pub(crate) struct BuiltinLifecycleTable {
    pub string_construct_copy: PtrConstructor,
    pub string_destroy: PtrDestructor,
    pub string_name_construct_copy: PtrConstructor,
    pub string_name_from_string: PtrConstructor,
    pub string_name_destroy: PtrDestructor,
}

impl BuiltinLifecycleTable {
    fn load() -> Self {
        // Constructor indices follow the engine's registration order: 1 is the copy
        // constructor, 2 is StringName(String).
        unsafe {
            Self {
                string_construct_copy: constructor(VariantType::String, 1),
                string_destroy: destructor(VariantType::String),
                string_name_construct_copy: constructor(VariantType::StringName, 1),
                string_name_from_string: constructor(VariantType::StringName, 2),
                string_name_destroy: destructor(VariantType::StringName),
            }
        }
    }
}

static TABLE: ClassMethodTable<BuiltinLifecycleTable> = ClassMethodTable::new();

pub(crate) fn builtin_lifecycle() -> &'static BuiltinLifecycleTable {
    TABLE.get_or_init(BuiltinLifecycleTable::load)
}

unsafe fn constructor(ty: VariantType, index: i32) -> PtrConstructor {
    interface_fn!(variant_get_ptr_constructor)(ty.to_sys(), index)
        .unwrap_or_else(|| unreachable!("{ty:?} constructor {index} not registered"))
}

unsafe fn destructor(ty: VariantType) -> PtrDestructor {
    interface_fn!(variant_get_ptr_destructor)(ty.to_sys())
        .unwrap_or_else(|| unreachable!("{ty:?} destructor not registered"))
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "C" fn noop_construct(
        _dst: sys::GDExtensionUninitializedTypePtr,
        _args: *const sys::GDExtensionConstTypePtr,
    ) {
    }
    unsafe extern "C" fn noop_destroy(_ptr: sys::GDExtensionTypePtr) {}

    #[test]
    fn table_resolves_only_once() {
        let table: ClassMethodTable<BuiltinLifecycleTable> = ClassMethodTable::new();
        let mut loads = 0;

        for _ in 0..3 {
            table.get_or_init(|| {
                loads += 1;
                BuiltinLifecycleTable {
                    string_construct_copy: noop_construct,
                    string_destroy: noop_destroy,
                    string_name_construct_copy: noop_construct,
                    string_name_from_string: noop_construct,
                    string_name_destroy: noop_destroy,
                }
            });
        }

        assert_eq!(loads, 1);
    }
}
