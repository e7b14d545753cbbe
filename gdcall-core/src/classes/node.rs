/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// @generated by gdcall-codegen from extension_api.json; do not edit.

use gdcall_sys as sys;
use sys::{interface_fn, CallFrame, NilRet, RetSlot};

use crate::builtin::{GString, StringName};
use crate::classes::{load_method_bind, ClassMethodTable, Object};
use crate::meta::ClassName;
use crate::obj::{mem, EngineClass, Gd, GodotClass, Inherits};

/// Engine class `Node`.
///
/// Manually managed; see [`Gd::free()`][crate::obj::Gd::free].
#[repr(transparent)]
pub struct Node {
    object_ptr: sys::GDExtensionObjectPtr,
}

struct Methods {
    get_name: sys::GDExtensionMethodBindPtr,
    set_name: sys::GDExtensionMethodBindPtr,
    add_child: sys::GDExtensionMethodBindPtr,
    get_child_count: sys::GDExtensionMethodBindPtr,
    get_parent: sys::GDExtensionMethodBindPtr,
    is_inside_tree: sys::GDExtensionMethodBindPtr,
    queue_free: sys::GDExtensionMethodBindPtr,
}

static METHODS: ClassMethodTable<Methods> = ClassMethodTable::new();

fn methods() -> &'static Methods {
    METHODS.get_or_init(|| Methods {
        get_name: load_method_bind(Node::CLASS, "get_name", 2002593661),
        set_name: load_method_bind(Node::CLASS, "set_name", 83702148),
        add_child: load_method_bind(Node::CLASS, "add_child", 3863233950),
        get_child_count: load_method_bind(Node::CLASS, "get_child_count", 894402480),
        get_parent: load_method_bind(Node::CLASS, "get_parent", 3160264692),
        is_inside_tree: load_method_bind(Node::CLASS, "is_inside_tree", 36873697),
        queue_free: load_method_bind(Node::CLASS, "queue_free", 3218959716),
    })
}

impl Node {
    pub(crate) const CLASS: ClassName = ClassName::from_static("Node");

    pub fn new_alloc() -> Gd<Self> {
        crate::classes::construct_object::<Node>()
    }

    pub fn get_name(&self) -> StringName {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<StringName>::zeroed();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_name,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn set_name(&mut self, name: &GString) {
        let mut frame = CallFrame::<1>::new();
        frame.arg(name);
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().set_name,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }

    pub fn add_child(&mut self, node: &Gd<Node>, force_readable_name: bool, internal: i64) {
        let mut frame = CallFrame::<3>::new();
        frame.arg(node);
        frame.arg(&force_readable_name);
        frame.arg(&internal);
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().add_child,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }

    pub fn get_child_count(&self, include_internal: bool) -> i64 {
        let mut frame = CallFrame::<1>::new();
        frame.arg(&include_internal);
        let mut ret = RetSlot::<i64>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_child_count,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn get_parent(&self) -> Option<Gd<Node>> {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<*mut std::ffi::c_void>::zeroed();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_parent,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            Gd::try_from_obj_sys(ret.take())
        }
    }

    pub fn is_inside_tree(&self) -> bool {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<bool>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().is_inside_tree,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn queue_free(&mut self) {
        let frame = CallFrame::<0>::new();
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().queue_free,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }
}

impl GodotClass for Node {
    type Base = Object;
    type Mem = mem::ManualMemory;

    fn class_name() -> ClassName {
        Self::CLASS
    }
}

impl EngineClass for Node {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
        self.object_ptr
    }

    fn as_type_ptr(&self) -> sys::GDExtensionTypePtr {
        &self.object_ptr as *const sys::GDExtensionObjectPtr as sys::GDExtensionTypePtr
    }
}

impl Inherits<Object> for Node {}
