/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// @generated by gdcall-codegen from extension_api.json; do not edit.

use gdcall_sys as sys;
use sys::{interface_fn, CallFrame, RetSlot};

use crate::builtin::{GString, StringName, ToVariant, Variant};
use crate::classes::{load_method_bind, ClassMethodTable};
use crate::meta::{CallError, ClassName};
use crate::obj::{mem, EngineClass, Gd, GodotClass};

/// Engine class `Object`.
///
/// Manually managed; see [`Gd::free()`][crate::obj::Gd::free].
#[repr(transparent)]
pub struct Object {
    object_ptr: sys::GDExtensionObjectPtr,
}

struct Methods {
    get_class: sys::GDExtensionMethodBindPtr,
    get_instance_id: sys::GDExtensionMethodBindPtr,
    is_class: sys::GDExtensionMethodBindPtr,
    call: sys::GDExtensionMethodBindPtr,
}

static METHODS: ClassMethodTable<Methods> = ClassMethodTable::new();

fn methods() -> &'static Methods {
    METHODS.get_or_init(|| Methods {
        get_class: load_method_bind(Object::CLASS, "get_class", 201670096),
        get_instance_id: load_method_bind(Object::CLASS, "get_instance_id", 3905245786),
        is_class: load_method_bind(Object::CLASS, "is_class", 3927539163),
        call: load_method_bind(Object::CLASS, "call", 3400424181),
    })
}

impl Object {
    pub(crate) const CLASS: ClassName = ClassName::from_static("Object");

    pub fn new_alloc() -> Gd<Self> {
        crate::classes::construct_object::<Object>()
    }

    pub fn get_class(&self) -> GString {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<GString>::zeroed();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_class,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn get_instance_id(&self) -> i64 {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<i64>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_instance_id,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn is_class(&self, class: &GString) -> bool {
        let mut frame = CallFrame::<1>::new();
        frame.arg(class);
        let mut ret = RetSlot::<bool>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().is_class,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn call(&mut self, method: &StringName, varargs: &[Variant]) -> Variant {
        self.try_call(method, varargs)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_call(&mut self, method: &StringName, varargs: &[Variant]) -> Result<Variant, CallError> {
        let method_variant = method.to_variant();
        let mut arg_ptrs = Vec::with_capacity(1 + varargs.len());
        arg_ptrs.push(method_variant.var_sys());
        arg_ptrs.extend(varargs.iter().map(Variant::var_sys));

        let mut err = sys::default_call_error();
        let ret = unsafe {
            Variant::from_var_init(|ret_ptr| {
                interface_fn!(object_method_bind_call)(
                    methods().call,
                    self.object_ptr,
                    arg_ptrs.as_ptr(),
                    arg_ptrs.len() as sys::GDExtensionInt,
                    ret_ptr,
                    &mut err,
                );
            })
        };

        if err.error == sys::GDEXTENSION_CALL_OK {
            Ok(ret)
        } else {
            Err(CallError::from_sys(&err, "Object", "call", arg_ptrs.len()))
        }
    }
}

impl GodotClass for Object {
    type Base = ();
    type Mem = mem::ManualMemory;

    fn class_name() -> ClassName {
        Self::CLASS
    }
}

impl EngineClass for Object {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
        self.object_ptr
    }

    fn as_type_ptr(&self) -> sys::GDExtensionTypePtr {
        &self.object_ptr as *const sys::GDExtensionObjectPtr as sys::GDExtensionTypePtr
    }
}
