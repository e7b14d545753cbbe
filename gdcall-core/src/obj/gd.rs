/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use gdcall_sys as sys;
use sys::interface_fn;

use crate::obj::mem::Memory;
use crate::obj::{EngineClass, GodotClass, Inherits, InstanceId};

/// Smart pointer to an engine-managed object of class `T`.
///
/// Ownership follows the class's memory policy: for `RefCounted` classes, `Gd` behaves like a
/// shared pointer (clone increments, drop decrements, last drop destroys); for manually managed
/// classes it is a plain handle and the object lives until [`free()`][Self::free] or until the
/// engine destroys it (e.g. `queue_free()` on nodes).
///
/// `Deref` exposes the engine class API, so methods are called directly:
/// `node.set_position(...)`. Upcasts are free via [`upcast()`][Self::upcast]; downcasts are
/// checked at runtime via [`try_cast()`][Self::try_cast].
#[repr(C)]
pub struct Gd<T: GodotClass> {
    // First field; layout-compatible with the engine class structs for Deref.
    object_ptr: sys::GDExtensionObjectPtr,
    _marker: PhantomData<*const T>,
}

impl<T: GodotClass> Gd<T> {
    /// Looks up an object by instance id, checking both liveness and class.
    ///
    /// Returns `None` if no object with this id is alive, or if it is not a `T`.
    pub fn try_from_instance_id(instance_id: InstanceId) -> Option<Self> {
        let object_ptr = unsafe { interface_fn!(object_get_instance_from_id)(instance_id.to_u64()) };
        if object_ptr.is_null() {
            return None;
        }

        // The lookup hands out a borrowed pointer; take our own reference before anything
        // else can drop the object.
        unsafe { T::Mem::maybe_inc_ref(object_ptr) };
        let gd = unsafe { Self::from_obj_sys(object_ptr) };
        gd.checked_cast::<T>().ok()
    }

    /// Like [`try_from_instance_id`][Self::try_from_instance_id], but panics on failure.
    pub fn from_instance_id(instance_id: InstanceId) -> Self {
        Self::try_from_instance_id(instance_id).unwrap_or_else(|| {
            panic!(
                "instance id {instance_id} does not refer to a live object of class {}",
                T::class_name()
            )
        })
    }

    /// The object's unique id. Panics if the object has been destroyed.
    pub fn instance_id(&self) -> InstanceId {
        let id = unsafe { interface_fn!(object_get_instance_id)(self.object_ptr) };
        InstanceId::try_from_u64(id)
            .unwrap_or_else(|| panic!("queried instance id of dead object ({})", T::class_name()))
    }

    /// **Upcast:** convert into a base class pointer, without runtime checks.
    ///
    /// Consumes this pointer; ownership moves to the result. Use
    /// [`try_cast()`][Self::try_cast] for the checked downward direction.
    pub fn upcast<Base>(self) -> Gd<Base>
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        // Same object, same ref. The marker trait guarantees the class relationship.
        let object_ptr = self.object_ptr;
        std::mem::forget(self);
        unsafe { Gd::from_obj_sys(object_ptr) }
    }

    /// **Downcast:** try to convert into a derived class pointer.
    ///
    /// Checked against the engine's class hierarchy at runtime. On failure, returns the
    /// original pointer unchanged in `Err`.
    pub fn try_cast<Derived>(self) -> Result<Gd<Derived>, Self>
    where
        Derived: Inherits<T>,
    {
        self.checked_cast::<Derived>()
    }

    /// Like [`try_cast()`][Self::try_cast], but panics on failure.
    pub fn cast<Derived>(self) -> Gd<Derived>
    where
        Derived: Inherits<T>,
    {
        self.try_cast().unwrap_or_else(|from| {
            panic!(
                "cannot cast object of class {} (id {}) to {}",
                T::class_name(),
                from.instance_id(),
                Derived::class_name()
            )
        })
    }

    /// Destroys a manually managed object.
    ///
    /// Panics when called on a reference-counted class; those are destroyed by dropping the
    /// last `Gd`.
    pub fn free(self) {
        assert!(
            !T::Mem::is_ref_counted(),
            "free() is reserved for manually managed classes; {} is ref-counted",
            T::class_name()
        );

        unsafe { interface_fn!(object_destroy)(self.object_ptr) };
        std::mem::forget(self);
    }

    fn checked_cast<U: GodotClass>(self) -> Result<Gd<U>, Self> {
        let tag = unsafe {
            interface_fn!(classdb_get_class_tag)(U::class_name().to_string_name().string_sys())
        };
        assert!(
            !tag.is_null(),
            "cannot resolve class tag for {}",
            U::class_name()
        );

        let cast_ptr = unsafe { interface_fn!(object_cast_to)(self.object_ptr, tag) };
        if cast_ptr.is_null() {
            return Err(self);
        }

        // Ownership (including the current refcount) carries over to the new pointer.
        std::mem::forget(self);
        Ok(unsafe { Gd::from_obj_sys(cast_ptr) })
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Raw pointer plumbing

    /// Wraps a raw object pointer, taking over the reference the caller holds.
    ///
    /// # Safety
    /// `object_ptr` must point to a live object of class `T` (or a subclass), and for
    /// ref-counted classes the caller must own one refcount which this `Gd` assumes.
    #[doc(hidden)]
    pub unsafe fn from_obj_sys(object_ptr: sys::GDExtensionObjectPtr) -> Self {
        debug_assert!(!object_ptr.is_null(), "null object pointer");
        Self {
            object_ptr,
            _marker: PhantomData,
        }
    }

    /// Null-checked variant of [`from_obj_sys`][Self::from_obj_sys], for engine returns of
    /// nullable objects.
    ///
    /// # Safety
    /// Same contract as `from_obj_sys` for non-null pointers.
    #[doc(hidden)]
    pub unsafe fn try_from_obj_sys(object_ptr: sys::GDExtensionObjectPtr) -> Option<Self> {
        (!object_ptr.is_null()).then(|| Self::from_obj_sys(object_ptr))
    }

    #[doc(hidden)]
    pub fn obj_sys(&self) -> sys::GDExtensionObjectPtr {
        self.object_ptr
    }
}

impl<T: GodotClass> Clone for Gd<T> {
    fn clone(&self) -> Self {
        unsafe {
            T::Mem::maybe_inc_ref(self.object_ptr);
            Self::from_obj_sys(self.object_ptr)
        }
    }
}

impl<T: GodotClass> Drop for Gd<T> {
    fn drop(&mut self) {
        // Ref-counted classes destroy on last drop; manual classes outlive their pointers.
        let is_last = unsafe { T::Mem::maybe_dec_ref(self.object_ptr) };
        if is_last {
            unsafe { interface_fn!(object_destroy)(self.object_ptr) };
        }
    }
}

impl<T: GodotClass + EngineClass> Deref for Gd<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: engine class structs are #[repr(transparent)] wrappers around the object
        // pointer, so a reference to the pointer field is a valid reference to T.
        unsafe { std::mem::transmute::<&sys::GDExtensionObjectPtr, &T>(&self.object_ptr) }
    }
}

impl<T: GodotClass + EngineClass> DerefMut for Gd<T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: see Deref.
        unsafe { std::mem::transmute::<&mut sys::GDExtensionObjectPtr, &mut T>(&mut self.object_ptr) }
    }
}

impl<T: GodotClass> PartialEq for Gd<T> {
    /// Identity comparison: two pointers are equal iff they refer to the same object.
    fn eq(&self, other: &Self) -> bool {
        self.object_ptr == other.object_ptr
    }
}

impl<T: GodotClass> Eq for Gd<T> {}

impl<T: GodotClass> fmt::Debug for Gd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gd<{}> {{ id: {} }}", T::class_name(), self.instance_id())
    }
}

// SAFETY: object arguments travel as the address of the object pointer; the object pointer
// itself is the payload in the slot.
unsafe impl<T: GodotClass> sys::FfiType for Gd<T> {
    unsafe fn from_sys(ptr: sys::GDExtensionTypePtr) -> Self {
        Self::from_obj_sys(*(ptr as *mut sys::GDExtensionObjectPtr))
    }

    unsafe fn new_with_init(init: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
        let mut object_ptr: sys::GDExtensionObjectPtr = std::ptr::null_mut();
        init(&mut object_ptr as *mut sys::GDExtensionObjectPtr as sys::GDExtensionUninitializedTypePtr);
        Self::from_obj_sys(object_ptr)
    }

    fn sys(&self) -> sys::GDExtensionTypePtr {
        &self.object_ptr as *const sys::GDExtensionObjectPtr as sys::GDExtensionTypePtr
    }

    unsafe fn move_return_ptr(self, dst: sys::GDExtensionTypePtr) {
        *(dst as *mut sys::GDExtensionObjectPtr) = self.object_ptr;
        std::mem::forget(self);
    }
}
