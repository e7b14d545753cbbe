/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Low-level bindings to the GDExtension ABI.
//!
//! This crate holds everything that speaks the host engine's calling convention directly:
//! the loaded interface function table, late-init binding storage, call frames for pointer
//! calls, and the [`FfiType`] exchange trait. Higher-level value and object types live in
//! `gdcall-core`.

#![cfg_attr(test, allow(unused))]

mod binding;
mod callframe;
mod ffi;
mod init_level;
mod interface;
mod opaque;
mod toolbox;

pub use binding::{
    deinitialize_binding, get_interface, get_library, initialize_binding, is_initialized,
    runtime_metadata, GodotBinding, RuntimeMetadata,
};
pub use callframe::{CallFrame, NilRet, RetSlot};
pub use ffi::FfiType;
pub use init_level::InitLevel;
pub use interface::*;
pub use opaque::Opaque;
pub use toolbox::{c_str, c_str_from_str, read_version_string};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface initialization

/// Load the full interface function table through `get_proc_address`.
///
/// # Safety
/// `get_proc_address` must be the pointer handed to the extension entry point by the engine.
pub unsafe fn load_interface(
    get_proc_address: GDExtensionInterfaceGetProcAddress,
) -> GDExtensionInterface {
    GDExtensionInterface::load(get_proc_address)
}

/// Query the engine's runtime version.
///
/// # Safety
/// `get_proc_address` must be the pointer handed to the extension entry point by the engine.
pub unsafe fn runtime_version(
    get_proc_address: GDExtensionInterfaceGetProcAddress,
) -> GDExtensionGodotVersion {
    let get_proc_address = get_proc_address.expect("get_proc_address unexpectedly null");

    // SAFETY: "get_godot_version" is defined for every engine version the entry point accepts.
    let get_godot_version = unsafe { get_proc_address(c_str(b"get_godot_version\0")) };
    let get_godot_version = unsafe {
        std::mem::transmute::<GDExtensionInterfaceFunctionPtr, GDExtensionInterfaceGetGodotVersion>(
            get_godot_version,
        )
    }
    .expect("get_godot_version unexpectedly null");

    let mut version = std::mem::MaybeUninit::<GDExtensionGodotVersion>::zeroed();
    get_godot_version(version.as_mut_ptr());
    version.assume_init()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros

/// Access a function pointer of the loaded interface, unchecked.
#[macro_export]
#[doc(hidden)]
macro_rules! interface_fn {
    ($name:ident) => {{
        unsafe { $crate::get_interface().$name.unwrap_unchecked() }
    }};
}

/// Verifies a condition at compile time.
#[macro_export]
macro_rules! static_assert {
    ($cond:expr) => {
        const _: () = assert!($cond);
    };
    ($cond:expr, $msg:literal) => {
        const _: () = assert!($cond, $msg);
    };
}

/// Verifies at compile time that two types `T` and `U` have the same size.
#[macro_export]
macro_rules! static_assert_eq_size {
    ($T:ty, $U:ty) => {
        $crate::static_assert!(std::mem::size_of::<$T>() == std::mem::size_of::<$U>());
    };
    ($T:ty, $U:ty, $msg:literal) => {
        $crate::static_assert!(std::mem::size_of::<$T>() == std::mem::size_of::<$U>(), $msg);
    };
}

/// Conditional debug output, active with the `debug-log` feature.
#[macro_export]
#[doc(hidden)]
macro_rules! out {
    ($($args:tt)*) => {
        #[cfg(feature = "debug-log")]
        {
            eprintln!($($args)*);
        }
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Call errors

#[doc(hidden)]
#[inline]
pub fn default_call_error() -> GDExtensionCallError {
    GDExtensionCallError {
        error: GDEXTENSION_CALL_OK,
        argument: -1,
        expected: -1,
    }
}

/// Formats the reason of a failed varcall, based on the engine's error struct.
#[doc(hidden)]
pub fn call_error_reason(err: &GDExtensionCallError, arg_count: usize) -> String {
    debug_assert_ne!(err.error, GDEXTENSION_CALL_OK); // already checked outside

    let GDExtensionCallError {
        error,
        argument,
        expected,
    } = *err;

    match error {
        GDEXTENSION_CALL_ERROR_INVALID_METHOD => "method not found".to_string(),
        GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT => {
            let i = argument + 1;
            format!("cannot convert argument #{i} to expected variant type {expected}")
        }
        GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS => {
            format!("too many arguments; expected {argument}, but called with {arg_count}")
        }
        GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS => {
            format!("too few arguments; expected {argument}, but called with {arg_count}")
        }
        GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL => "instance is null".to_string(),
        GDEXTENSION_CALL_ERROR_METHOD_NOT_CONST => "method is not const".to_string(),
        _ => format!("unknown reason (error code {error})"),
    }
}

#[doc(hidden)]
#[inline]
#[track_caller] // panic message points to call site
pub fn panic_call_error(err: &GDExtensionCallError, function_name: &str, arg_count: usize) -> ! {
    let reason = call_error_reason(err, arg_count);
    panic!("function call failed: {function_name} -- {reason}.");
}
