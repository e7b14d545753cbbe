/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Extension entry point and initialization-level callbacks.

use gdcall_sys as sys;
use sys::out;

pub use sys::InitLevel;

/// Defines the entry point of the dynamic library the engine loads.
///
/// The library's `.gdextension` file must name the same symbol under `entry_symbol`.
///
/// ```no_run
/// use gdcall_core::init::{ExtensionLibrary, InitLevel};
///
/// struct MyExtension;
///
/// impl ExtensionLibrary for MyExtension {
///     fn on_level_init(level: InitLevel) {
///         if level == InitLevel::Scene {
///             // set up game state
///         }
///     }
/// }
///
/// gdcall_core::extension_entry!(my_extension_init, MyExtension);
/// ```
pub trait ExtensionLibrary {
    /// First level at which [`on_level_init`][Self::on_level_init] is invoked.
    fn min_level() -> InitLevel {
        InitLevel::Scene
    }

    fn on_level_init(_level: InitLevel) {}

    fn on_level_deinit(_level: InitLevel) {}
}

/// Declares the `#[no_mangle]` entry function the engine resolves by name.
#[macro_export]
macro_rules! extension_entry {
    ($entry_point:ident, $Library:ty) => {
        #[no_mangle]
        unsafe extern "C" fn $entry_point(
            get_proc_address: $crate::sys::GDExtensionInterfaceGetProcAddress,
            library: $crate::sys::GDExtensionClassLibraryPtr,
            init: *mut $crate::sys::GDExtensionInitialization,
        ) -> $crate::sys::GDExtensionBool {
            $crate::init::load_extension::<$Library>(get_proc_address, library, init)
        }
    };
}

/// Guts of the entry point; kept out of the macro so errors point at real code.
///
/// # Safety
/// Must only be called by the engine, through the symbol declared via
/// [`extension_entry!`][crate::extension_entry].
#[doc(hidden)]
pub unsafe fn load_extension<E: ExtensionLibrary>(
    get_proc_address: sys::GDExtensionInterfaceGetProcAddress,
    library: sys::GDExtensionClassLibraryPtr,
    init: *mut sys::GDExtensionInitialization,
) -> sys::GDExtensionBool {
    // A panic crossing the C boundary would abort without diagnostics; report failure instead.
    let result = std::panic::catch_unwind(|| {
        sys::ensure_static_runtime_compatibility(get_proc_address);

        let interface = sys::load_interface(get_proc_address);
        let version = sys::runtime_version(get_proc_address);
        let metadata = sys::RuntimeMetadata {
            version_major: version.major,
            version_minor: version.minor,
            version_patch: version.patch,
            version_string: sys::read_version_string(&version),
        };
        out!("load extension (engine: {})", metadata.version_string);

        sys::initialize_binding(sys::GodotBinding::new(interface, library, metadata));

        *init = sys::GDExtensionInitialization {
            minimum_initialization_level: E::min_level().to_sys(),
            userdata: std::ptr::null_mut(),
            initialize: Some(level_init::<E>),
            deinitialize: Some(level_deinit::<E>),
        };
    });

    match result {
        Ok(()) => 1,
        Err(payload) => {
            eprintln!("extension initialization failed: {}", panic_message(&payload));
            0
        }
    }
}

unsafe extern "C" fn level_init<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    level: sys::GDExtensionInitializationLevel,
) {
    let level = InitLevel::from_sys(level);
    out!("init level {level:?}");

    E::on_level_init(level);
}

unsafe extern "C" fn level_deinit<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    level: sys::GDExtensionInitializationLevel,
) {
    let level = InitLevel::from_sys(level);
    out!("deinit level {level:?}");

    E::on_level_deinit(level);

    if level == InitLevel::Core {
        sys::deinitialize_binding();
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "(unknown panic payload)"
    }
}
