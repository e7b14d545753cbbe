/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Non-thread-safe, late-init storage for the loaded engine binding.
//!
//! If used from a thread other than the one that initialized it, there will be runtime errors in
//! debug mode and UB in release mode.

use std::cell::OnceCell;
use std::sync::OnceLock;
use std::thread::ThreadId;

use crate::{GDExtensionClassLibraryPtr, GDExtensionInterface};

pub struct GodotBinding {
    interface: GDExtensionInterface,
    library: GDExtensionClassLibraryPtr,
    runtime_metadata: RuntimeMetadata,
}

impl GodotBinding {
    pub fn new(
        interface: GDExtensionInterface,
        library: GDExtensionClassLibraryPtr,
        runtime_metadata: RuntimeMetadata,
    ) -> Self {
        Self {
            interface,
            library,
            runtime_metadata,
        }
    }
}

/// Version info of the engine that loaded this library, captured at init.
pub struct RuntimeMetadata {
    pub version_major: u32,
    pub version_minor: u32,
    pub version_patch: u32,
    pub version_string: String,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

struct BindingStorage {
    // Used to check that we're accessed from the right thread, so must be thread-safe itself.
    main_thread: OnceLock<ThreadId>,
    binding: OnceCell<GodotBinding>,
}

impl BindingStorage {
    /// # Safety
    /// `binding` must not be accessed from a thread different than the one
    /// [`initialize`](BindingStorage::initialize) was first called from.
    #[inline(always)]
    unsafe fn storage() -> &'static Self {
        static BINDING: BindingStorage = BindingStorage {
            main_thread: OnceLock::new(),
            binding: OnceCell::new(),
        };

        &BINDING
    }

    fn initialize(binding: GodotBinding) {
        // SAFETY: either this is the first call (same thread as ourselves), or a later call which
        // only observes that the storage is already set.
        let storage = unsafe { Self::storage() };

        storage
            .main_thread
            .set(std::thread::current().id())
            .expect("engine binding already initialized");
        storage
            .binding
            .set(binding)
            .ok()
            .expect("`main_thread` was unset, so `binding` should also be unset");
    }

    fn deinitialize() {
        // Nothing stored outside the statics; the engine unloads the library afterwards, so
        // leaving the cells set is harmless. Kept as an explicit hook for symmetry with init.
    }

    /// # Safety
    /// Must be called from the main thread, after initialization.
    #[inline(always)]
    unsafe fn get_binding_unchecked() -> &'static GodotBinding {
        let storage = Self::storage();

        if cfg!(debug_assertions) {
            let main_thread = storage.main_thread.get().expect(
                "Godot engine not available; make sure you are not calling it from unit tests",
            );
            assert_eq!(
                main_thread,
                &std::thread::current().id(),
                "attempted to access binding from a thread other than the main thread; this is UB"
            );
            storage.binding.get().unwrap()
        } else {
            storage.binding.get().unwrap_unchecked()
        }
    }

    fn is_initialized() -> bool {
        // SAFETY: we do not access `binding`.
        let storage = unsafe { Self::storage() };
        storage.main_thread.get().is_some()
    }
}

// SAFETY: `binding` is only ever accessed from the thread that initialized it.
unsafe impl Sync for BindingStorage {}
// SAFETY: see `Sync` impl.
unsafe impl Send for BindingStorage {}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Public API

/// Initializes the engine binding. Called once from the extension entry point.
///
/// # Safety
/// Must not be called concurrently with any other function in this module.
pub unsafe fn initialize_binding(binding: GodotBinding) {
    BindingStorage::initialize(binding);
}

/// # Safety
/// See [`initialize_binding`].
pub unsafe fn deinitialize_binding() {
    BindingStorage::deinitialize();
}

/// # Safety
/// The binding must have been initialized, and this must run on the thread that initialized it.
#[inline(always)]
pub unsafe fn get_interface() -> &'static GDExtensionInterface {
    &BindingStorage::get_binding_unchecked().interface
}

/// # Safety
/// See [`get_interface`].
#[inline(always)]
pub unsafe fn get_library() -> GDExtensionClassLibraryPtr {
    BindingStorage::get_binding_unchecked().library
}

/// # Safety
/// See [`get_interface`].
#[inline(always)]
pub unsafe fn runtime_metadata() -> &'static RuntimeMetadata {
    &BindingStorage::get_binding_unchecked().runtime_metadata
}

#[inline]
pub fn is_initialized() -> bool {
    BindingStorage::is_initialized()
}
