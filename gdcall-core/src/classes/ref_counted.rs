/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// @generated by gdcall-codegen from extension_api.json; do not edit.

use gdcall_sys as sys;
use sys::{interface_fn, CallFrame, RetSlot};

use crate::classes::{load_method_bind, ClassMethodTable, Object};
use crate::meta::ClassName;
use crate::obj::{mem, EngineClass, Gd, GodotClass, Inherits};

/// Engine class `RefCounted`.
///
/// Reference-counted; the last [`Gd`][crate::obj::Gd] to drop destroys the object.
#[repr(transparent)]
pub struct RefCounted {
    object_ptr: sys::GDExtensionObjectPtr,
}

struct Methods {
    init_ref: sys::GDExtensionMethodBindPtr,
    reference: sys::GDExtensionMethodBindPtr,
    unreference: sys::GDExtensionMethodBindPtr,
    get_reference_count: sys::GDExtensionMethodBindPtr,
}

static METHODS: ClassMethodTable<Methods> = ClassMethodTable::new();

fn methods() -> &'static Methods {
    METHODS.get_or_init(|| Methods {
        init_ref: load_method_bind(RefCounted::CLASS, "init_ref", 2240911060),
        reference: load_method_bind(RefCounted::CLASS, "reference", 2240911060),
        unreference: load_method_bind(RefCounted::CLASS, "unreference", 2240911060),
        get_reference_count: load_method_bind(RefCounted::CLASS, "get_reference_count", 3905245786),
    })
}

impl RefCounted {
    pub(crate) const CLASS: ClassName = ClassName::from_static("RefCounted");

    pub fn new_gd() -> Gd<Self> {
        crate::classes::construct_object::<RefCounted>()
    }

    pub fn init_ref(&mut self) -> bool {
        unsafe { raw_init_ref(self.object_ptr) }
    }

    pub fn reference(&mut self) -> bool {
        unsafe { raw_reference(self.object_ptr) }
    }

    pub fn unreference(&mut self) -> bool {
        unsafe { raw_unreference(self.object_ptr) }
    }

    pub fn get_reference_count(&self) -> i64 {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<i64>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_reference_count,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }
}

/// # Safety
/// `object_ptr` must be a live `RefCounted` object.
pub(crate) unsafe fn raw_init_ref(object_ptr: sys::GDExtensionObjectPtr) -> bool {
    ref_bool_call(methods().init_ref, object_ptr)
}

/// # Safety
/// `object_ptr` must be a live `RefCounted` object.
pub(crate) unsafe fn raw_reference(object_ptr: sys::GDExtensionObjectPtr) -> bool {
    ref_bool_call(methods().reference, object_ptr)
}

/// Returns `true` if the last reference was released.
///
/// # Safety
/// `object_ptr` must be a live `RefCounted` object.
pub(crate) unsafe fn raw_unreference(object_ptr: sys::GDExtensionObjectPtr) -> bool {
    ref_bool_call(methods().unreference, object_ptr)
}

unsafe fn ref_bool_call(
    method_bind: sys::GDExtensionMethodBindPtr,
    object_ptr: sys::GDExtensionObjectPtr,
) -> bool {
    let frame = CallFrame::<0>::new();
    let mut ret = RetSlot::<bool>::new();
    interface_fn!(object_method_bind_ptrcall)(
        method_bind,
        object_ptr,
        frame.args_ptr(),
        ret.type_ptr(),
    );
    ret.take()
}

impl GodotClass for RefCounted {
    type Base = Object;
    type Mem = mem::StaticRefCount;

    fn class_name() -> ClassName {
        Self::CLASS
    }
}

impl EngineClass for RefCounted {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
        self.object_ptr
    }

    fn as_type_ptr(&self) -> sys::GDExtensionTypePtr {
        &self.object_ptr as *const sys::GDExtensionObjectPtr as sys::GDExtensionTypePtr
    }
}

impl Inherits<Object> for RefCounted {}
