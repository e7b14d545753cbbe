/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// @generated by gdcall-codegen from extension_api.json; do not edit.

use gdcall_sys as sys;
use sys::{interface_fn, CallFrame, NilRet, RetSlot};

use crate::builtin::Vector2;
use crate::classes::{load_method_bind, CanvasItem, ClassMethodTable, Node, Object};
use crate::meta::ClassName;
use crate::obj::{mem, EngineClass, Gd, GodotClass, Inherits};

/// Engine class `Node2D`.
///
/// Manually managed; see [`Gd::free()`][crate::obj::Gd::free].
#[repr(transparent)]
pub struct Node2D {
    object_ptr: sys::GDExtensionObjectPtr,
}

struct Methods {
    set_position: sys::GDExtensionMethodBindPtr,
    get_position: sys::GDExtensionMethodBindPtr,
    set_rotation: sys::GDExtensionMethodBindPtr,
    get_rotation: sys::GDExtensionMethodBindPtr,
    set_scale: sys::GDExtensionMethodBindPtr,
    get_scale: sys::GDExtensionMethodBindPtr,
    rotate: sys::GDExtensionMethodBindPtr,
    translate: sys::GDExtensionMethodBindPtr,
}

static METHODS: ClassMethodTable<Methods> = ClassMethodTable::new();

fn methods() -> &'static Methods {
    METHODS.get_or_init(|| Methods {
        set_position: load_method_bind(Node2D::CLASS, "set_position", 743155724),
        get_position: load_method_bind(Node2D::CLASS, "get_position", 3341600327),
        set_rotation: load_method_bind(Node2D::CLASS, "set_rotation", 373806689),
        get_rotation: load_method_bind(Node2D::CLASS, "get_rotation", 1740695150),
        set_scale: load_method_bind(Node2D::CLASS, "set_scale", 743155724),
        get_scale: load_method_bind(Node2D::CLASS, "get_scale", 3341600327),
        rotate: load_method_bind(Node2D::CLASS, "rotate", 373806689),
        translate: load_method_bind(Node2D::CLASS, "translate", 743155724),
    })
}

impl Node2D {
    pub(crate) const CLASS: ClassName = ClassName::from_static("Node2D");

    pub fn new_alloc() -> Gd<Self> {
        crate::classes::construct_object::<Node2D>()
    }

    pub fn set_position(&mut self, position: Vector2) {
        let mut frame = CallFrame::<1>::new();
        frame.arg(&position);
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().set_position,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }

    pub fn get_position(&self) -> Vector2 {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<Vector2>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_position,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn set_rotation(&mut self, radians: f64) {
        let mut frame = CallFrame::<1>::new();
        frame.arg(&radians);
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().set_rotation,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }

    pub fn get_rotation(&self) -> f64 {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<f64>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_rotation,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn set_scale(&mut self, scale: Vector2) {
        let mut frame = CallFrame::<1>::new();
        frame.arg(&scale);
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().set_scale,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }

    pub fn get_scale(&self) -> Vector2 {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<Vector2>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_scale,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn rotate(&mut self, radians: f64) {
        let mut frame = CallFrame::<1>::new();
        frame.arg(&radians);
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().rotate,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }

    pub fn translate(&mut self, offset: Vector2) {
        let mut frame = CallFrame::<1>::new();
        frame.arg(&offset);
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().translate,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }
}

impl GodotClass for Node2D {
    type Base = CanvasItem;
    type Mem = mem::ManualMemory;

    fn class_name() -> ClassName {
        Self::CLASS
    }
}

impl EngineClass for Node2D {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
        self.object_ptr
    }

    fn as_type_ptr(&self) -> sys::GDExtensionTypePtr {
        &self.object_ptr as *const sys::GDExtensionObjectPtr as sys::GDExtensionTypePtr
    }
}

impl Inherits<CanvasItem> for Node2D {}
impl Inherits<Node> for Node2D {}
impl Inherits<Object> for Node2D {}
