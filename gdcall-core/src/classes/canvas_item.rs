/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// @generated by gdcall-codegen from extension_api.json; do not edit.

use gdcall_sys as sys;
use sys::{interface_fn, CallFrame, NilRet, RetSlot};

use crate::builtin::Color;
use crate::classes::{load_method_bind, ClassMethodTable, Node, Object};
use crate::meta::ClassName;
use crate::obj::{mem, EngineClass, GodotClass, Inherits};

/// Engine class `CanvasItem`.
///
/// Manually managed; see [`Gd::free()`][crate::obj::Gd::free].
#[repr(transparent)]
pub struct CanvasItem {
    object_ptr: sys::GDExtensionObjectPtr,
}

struct Methods {
    show: sys::GDExtensionMethodBindPtr,
    hide: sys::GDExtensionMethodBindPtr,
    is_visible: sys::GDExtensionMethodBindPtr,
    set_modulate: sys::GDExtensionMethodBindPtr,
    get_modulate: sys::GDExtensionMethodBindPtr,
}

static METHODS: ClassMethodTable<Methods> = ClassMethodTable::new();

fn methods() -> &'static Methods {
    METHODS.get_or_init(|| Methods {
        show: load_method_bind(CanvasItem::CLASS, "show", 3218959716),
        hide: load_method_bind(CanvasItem::CLASS, "hide", 3218959716),
        is_visible: load_method_bind(CanvasItem::CLASS, "is_visible", 36873697),
        set_modulate: load_method_bind(CanvasItem::CLASS, "set_modulate", 2920490490),
        get_modulate: load_method_bind(CanvasItem::CLASS, "get_modulate", 3444240500),
    })
}

impl CanvasItem {
    pub(crate) const CLASS: ClassName = ClassName::from_static("CanvasItem");

    pub fn show(&mut self) {
        let frame = CallFrame::<0>::new();
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().show,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }

    pub fn hide(&mut self) {
        let frame = CallFrame::<0>::new();
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().hide,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }

    pub fn is_visible(&self) -> bool {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<bool>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().is_visible,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }

    pub fn set_modulate(&mut self, modulate: Color) {
        let mut frame = CallFrame::<1>::new();
        frame.arg(&modulate);
        let mut ret = NilRet;
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().set_modulate,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
        }
    }

    pub fn get_modulate(&self) -> Color {
        let frame = CallFrame::<0>::new();
        let mut ret = RetSlot::<Color>::new();
        unsafe {
            interface_fn!(object_method_bind_ptrcall)(
                methods().get_modulate,
                self.object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }
}

impl GodotClass for CanvasItem {
    type Base = Node;
    type Mem = mem::ManualMemory;

    fn class_name() -> ClassName {
        Self::CLASS
    }
}

impl EngineClass for CanvasItem {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
        self.object_ptr
    }

    fn as_type_ptr(&self) -> sys::GDExtensionTypePtr {
        &self.object_ptr as *const sys::GDExtensionObjectPtr as sys::GDExtensionTypePtr
    }
}

impl Inherits<Node> for CanvasItem {}
impl Inherits<Object> for CanvasItem {}
