/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdcall_sys as sys;

use crate::meta::ClassName;

/// Makes `T` eligible to be managed by the engine and stored in [`Gd<T>`][crate::obj::Gd]
/// pointers.
pub trait GodotClass: 'static {
    /// The immediate superclass. `()` for `Object`, the hierarchy root.
    type Base: GodotClass;

    /// How the engine manages instances of this class, see [`mem`].
    type Mem: mem::Memory;

    fn class_name() -> ClassName;
}

/// The hierarchy root has no base.
impl GodotClass for () {
    type Base = ();
    type Mem = mem::ManualMemory;

    fn class_name() -> ClassName {
        ClassName::from_static("(no base)")
    }
}

/// Implemented for all classes shipped with the engine (as opposed to user-declared ones).
pub trait EngineClass: GodotClass {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr;
    fn as_type_ptr(&self) -> sys::GDExtensionTypePtr;
}

/// Marks `Self` as a transitive subclass of `Base` in the engine hierarchy.
///
/// Enables upcasts via [`Gd::upcast()`][crate::obj::Gd::upcast]. Reflexive: every class
/// inherits itself. Implementations are emitted alongside each generated class.
pub trait Inherits<Base: GodotClass>: GodotClass {}

impl<T: GodotClass> Inherits<T> for T {}

/// Memory management policies, encoded as types.
pub mod mem {
    use gdcall_sys as sys;

    /// Specifies how the lifetime of instances is managed.
    ///
    /// Implementations bridge to the engine's `RefCounted` protocol (or deliberately don't,
    /// for manually managed classes).
    pub trait Memory {
        /// Initializes the refcount of a freshly constructed object, if applicable.
        ///
        /// # Safety
        /// `obj` must be a live object of a class with this policy.
        #[doc(hidden)]
        unsafe fn maybe_init_ref(obj: sys::GDExtensionObjectPtr);

        /// Increments the refcount, if applicable.
        ///
        /// # Safety
        /// `obj` must be a live object of a class with this policy.
        #[doc(hidden)]
        unsafe fn maybe_inc_ref(obj: sys::GDExtensionObjectPtr);

        /// Decrements the refcount, if applicable. Returns `true` if the caller held the last
        /// reference and must destroy the object.
        ///
        /// # Safety
        /// `obj` must be a live object of a class with this policy.
        #[doc(hidden)]
        unsafe fn maybe_dec_ref(obj: sys::GDExtensionObjectPtr) -> bool;

        fn is_ref_counted() -> bool;
    }

    /// Policy for `RefCounted` classes: shared ownership through the engine's refcount.
    pub struct StaticRefCount;

    impl Memory for StaticRefCount {
        unsafe fn maybe_init_ref(obj: sys::GDExtensionObjectPtr) {
            crate::classes::ref_counted::raw_init_ref(obj);
        }

        unsafe fn maybe_inc_ref(obj: sys::GDExtensionObjectPtr) {
            crate::classes::ref_counted::raw_reference(obj);
        }

        unsafe fn maybe_dec_ref(obj: sys::GDExtensionObjectPtr) -> bool {
            crate::classes::ref_counted::raw_unreference(obj)
        }

        fn is_ref_counted() -> bool {
            true
        }
    }

    /// Policy for manually managed classes (`Object`, nodes): no refcount, explicit
    /// [`free()`][crate::obj::Gd::free].
    pub struct ManualMemory;

    impl Memory for ManualMemory {
        unsafe fn maybe_init_ref(_obj: sys::GDExtensionObjectPtr) {}
        unsafe fn maybe_inc_ref(_obj: sys::GDExtensionObjectPtr) {}

        unsafe fn maybe_dec_ref(_obj: sys::GDExtensionObjectPtr) -> bool {
            false
        }

        fn is_ref_counted() -> bool {
            false
        }
    }
}
