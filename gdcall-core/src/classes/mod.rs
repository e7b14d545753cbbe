/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine class APIs.
//!
//! The per-class modules in this directory are produced by `gdcall-codegen` from the engine's
//! `extension_api.json` and committed; see that crate for how to regenerate. This module holds
//! the hand-written support the generated code leans on: lazy method tables and object
//! construction.

mod canvas_item;
mod engine;
mod node;
mod node2d;
mod object;
pub(crate) mod ref_counted;

pub use canvas_item::CanvasItem;
pub use engine::Engine;
pub use node::Node;
pub use node2d::Node2D;
pub use object::Object;
pub use ref_counted::RefCounted;

use std::cell::OnceCell;

use gdcall_sys as sys;
use sys::interface_fn;

use crate::meta::ClassName;
use crate::obj::mem::Memory;
use crate::obj::{Gd, GodotClass};

/// Lazily initialized table of engine function pointers.
///
/// Entries are resolved on first use, not at startup; a class that is never touched costs
/// nothing. Stored in a `static` per generated class module, and reused for the builtin
/// lifecycle table.
pub struct ClassMethodTable<T: 'static> {
    cell: OnceCell<T>,
}

// SAFETY: the binding is single-threaded (enforced by BindingStorage); the table is only
// ever touched from the thread the engine initialized us on.
unsafe impl<T> Sync for ClassMethodTable<T> {}

impl<T> ClassMethodTable<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(init)
    }
}

/// Resolves one method bind from the ClassDB, pinned to the API hash it was generated against.
///
/// Panics if the engine does not know the method under this hash, which indicates an engine
/// older or newer than the bundled `extension_api.json`.
pub fn load_method_bind(
    class_name: ClassName,
    method_name: &'static str,
    hash: i64,
) -> sys::GDExtensionMethodBindPtr {
    let class = class_name.to_string_name();
    let method = crate::builtin::StringName::from(method_name);

    let bind = unsafe {
        interface_fn!(classdb_get_method_bind)(class.string_sys(), method.string_sys(), hash)
    };

    assert!(
        !bind.is_null(),
        "failed to load method bind {class_name}::{method_name} (hash {hash}); engine/API version mismatch?"
    );
    bind
}

/// Constructs a fresh instance of an engine class through the ClassDB.
pub(crate) fn construct_object<T: GodotClass>() -> Gd<T> {
    let class = T::class_name().to_string_name();
    let object_ptr = unsafe { interface_fn!(classdb_construct_object)(class.string_sys()) };
    assert!(
        !object_ptr.is_null(),
        "failed to construct object of class {}",
        T::class_name()
    );

    unsafe {
        // Fresh ref-counted objects start at refcount 0; claim the first reference.
        T::Mem::maybe_init_ref(object_ptr);
        Gd::from_obj_sys(object_ptr)
    }
}
