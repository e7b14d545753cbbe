/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// @generated by gdcall-codegen from extension_api.json; do not edit.

use gdcall_sys as sys;
use sys::{interface_fn, CallFrame, NilRet, RetSlot};

use crate::classes::{load_method_bind, ClassMethodTable, Object};
use crate::meta::ClassName;
use crate::obj::{mem, EngineClass, Gd, GodotClass, Inherits};

/// Engine class `Engine`.
///
/// Singleton; access through [`singleton()`][Self::singleton].
#[repr(transparent)]
pub struct Engine {
    object_ptr: sys::GDExtensionObjectPtr,
}

struct Methods {
    get_frames_per_second: sys::GDExtensionMethodBindPtr,
    set_time_scale: sys::GDExtensionMethodBindPtr,
    get_time_scale: sys::GDExtensionMethodBindPtr,
    is_editor_hint: sys::GDExtensionMethodBindPtr,
}

static METHODS: ClassMethodTable<Methods> = ClassMethodTable::new();

fn methods() -> &'static Methods {
    METHODS.get_or_init(|| Methods {
        get_frames_per_second: load_method_bind(Engine::CLASS, "get_frames_per_second", 1740695150),
        set_time_scale: load_method_bind(Engine::CLASS, "set_time_scale", 373806689),
        get_time_scale: load_method_bind(Engine::CLASS, "get_time_scale", 1740695150),
        is_editor_hint: load_method_bind(Engine::CLASS, "is_editor_hint", 36873697),
    })
}

impl Engine {
    pub(crate) const CLASS: ClassName = ClassName::from_static("Engine");

    pub fn singleton() -> Gd<Self> {
        let name = Self::CLASS.to_string_name();
        let object_ptr = unsafe { interface_fn!(global_get_singleton)(name.string_sys()) };
        assert!(!object_ptr.is_null(), "singleton Engine not registered");

        // Singletons are engine-owned and manually managed; Gd never frees them.
        unsafe { Gd::from_obj_sys(object_ptr) }
    }

    pub fn get_frames_per_second(&self) -> f64 {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<f64>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_frames_per_second,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn set_time_scale(&mut self, time_scale: f64) {
        let mut frame = CallFrame::<1>::new();
        frame.arg(&time_scale);
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().set_time_scale,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }

    pub fn get_time_scale(&self) -> f64 {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<f64>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_time_scale,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn is_editor_hint(&self) -> bool {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<bool>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().is_editor_hint,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }
}

impl GodotClass for Engine {
    type Base = Object;
    type Mem = mem::ManualMemory;

    fn class_name() -> ClassName {
        Self::CLASS
    }
}

impl EngineClass for Engine {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
        self.object_ptr
    }

    fn as_type_ptr(&self) -> sys::GDExtensionTypePtr {
        &self.object_ptr as *const sys::GDExtensionObjectPtr as sys::GDExtensionTypePtr
    }
}

impl Inherits<Object> for Engine {}
