/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Hand-maintained subset of the GDExtension interface.
//!
//! The engine hands the extension entry point a single `get_proc_address` function; every other
//! ABI function is fetched from it by symbol name (4.2+ mechanism). Only the symbols this binding
//! actually calls are declared here; regenerating a full header translation is not needed.

use std::ffi::{c_char, c_void};

use crate::toolbox::c_str;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Opaque pointer types
//
// Distinct aliases per GDExtension convention. All point into engine-owned memory; which bytes
// they address depends on the type (e.g. a "type ptr" for Object is an Object** in C++ terms).

pub type GDExtensionVariantPtr = *mut c_void;
pub type GDExtensionConstVariantPtr = *const c_void;
pub type GDExtensionUninitializedVariantPtr = *mut c_void;
pub type GDExtensionStringPtr = *mut c_void;
pub type GDExtensionConstStringPtr = *const c_void;
pub type GDExtensionUninitializedStringPtr = *mut c_void;
pub type GDExtensionStringNamePtr = *mut c_void;
pub type GDExtensionConstStringNamePtr = *const c_void;
pub type GDExtensionUninitializedStringNamePtr = *mut c_void;
pub type GDExtensionTypePtr = *mut c_void;
pub type GDExtensionConstTypePtr = *const c_void;
pub type GDExtensionUninitializedTypePtr = *mut c_void;
pub type GDExtensionObjectPtr = *mut c_void;
pub type GDExtensionConstObjectPtr = *const c_void;
pub type GDExtensionRefPtr = *mut c_void;
pub type GDExtensionConstRefPtr = *const c_void;
pub type GDExtensionMethodBindPtr = *const c_void;
pub type GDExtensionClassLibraryPtr = *mut c_void;
pub type GDExtensionClassTagPtr = *mut c_void;

pub type GDExtensionBool = u8;
pub type GDExtensionInt = i64;
pub type GDExtensionVariantType = i32;
pub type GDExtensionCallErrorType = i32;
pub type GDExtensionInitializationLevel = i32;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Constants

pub const GDEXTENSION_CALL_OK: GDExtensionCallErrorType = 0;
pub const GDEXTENSION_CALL_ERROR_INVALID_METHOD: GDExtensionCallErrorType = 1;
pub const GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT: GDExtensionCallErrorType = 2;
pub const GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS: GDExtensionCallErrorType = 3;
pub const GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS: GDExtensionCallErrorType = 4;
pub const GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL: GDExtensionCallErrorType = 5;
pub const GDEXTENSION_CALL_ERROR_METHOD_NOT_CONST: GDExtensionCallErrorType = 6;

pub const GDEXTENSION_INITIALIZATION_CORE: GDExtensionInitializationLevel = 0;
pub const GDEXTENSION_INITIALIZATION_SERVERS: GDExtensionInitializationLevel = 1;
pub const GDEXTENSION_INITIALIZATION_SCENE: GDExtensionInitializationLevel = 2;
pub const GDEXTENSION_INITIALIZATION_EDITOR: GDExtensionInitializationLevel = 3;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// ABI structs

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GDExtensionCallError {
    pub error: GDExtensionCallErrorType,
    pub argument: i32,
    pub expected: i32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct GDExtensionGodotVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub string: *const c_char,
}

/// Filled out by the extension entry point; the engine then drives the level callbacks.
#[repr(C)]
pub struct GDExtensionInitialization {
    pub minimum_initialization_level: GDExtensionInitializationLevel,
    pub userdata: *mut c_void,
    pub initialize: Option<unsafe extern "C" fn(*mut c_void, GDExtensionInitializationLevel)>,
    pub deinitialize: Option<unsafe extern "C" fn(*mut c_void, GDExtensionInitializationLevel)>,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Function pointer types

pub type GDExtensionInterfaceFunctionPtr = Option<unsafe extern "C" fn()>;
pub type GDExtensionInterfaceGetProcAddress =
    Option<unsafe extern "C" fn(*const c_char) -> GDExtensionInterfaceFunctionPtr>;
pub type GDExtensionInterfaceGetGodotVersion =
    Option<unsafe extern "C" fn(*mut GDExtensionGodotVersion)>;

/// Engine-provided constructor writing a `Variant` from a value of a fixed type.
pub type GDExtensionVariantFromTypeConstructorFunc =
    Option<unsafe extern "C" fn(GDExtensionUninitializedVariantPtr, GDExtensionTypePtr)>;
/// Engine-provided extractor writing a value of a fixed type from a `Variant`.
pub type GDExtensionTypeFromVariantConstructorFunc =
    Option<unsafe extern "C" fn(GDExtensionUninitializedTypePtr, GDExtensionVariantPtr)>;
/// Engine-provided constructor for a builtin type; args follow the picked overload.
pub type GDExtensionPtrConstructor =
    Option<unsafe extern "C" fn(GDExtensionUninitializedTypePtr, *const GDExtensionConstTypePtr)>;
/// Engine-provided destructor for a builtin type with non-trivial drop.
pub type GDExtensionPtrDestructor = Option<unsafe extern "C" fn(GDExtensionTypePtr)>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface table

/// Expands to the interface struct and its `load()` body in one go, so field list and symbol
/// list cannot drift apart.
macro_rules! interface_table {
    (
        $( $(#[$attr:meta])* $name:ident : fn( $($param:ty),* $(,)? ) $(-> $ret:ty)? ; )*
    ) => {
        /// Loaded GDExtension interface: one nullable function pointer per engine symbol.
        ///
        /// Access through [`interface_fn!`][crate::interface_fn] once the binding is initialized.
        #[allow(non_snake_case)]
        pub struct GDExtensionInterface {
            $(
                $(#[$attr])*
                pub $name: Option<unsafe extern "C" fn( $($param),* ) $(-> $ret)?>,
            )*
        }

        impl GDExtensionInterface {
            /// Fetches every declared symbol through `get_proc_address`.
            ///
            /// # Safety
            /// `get_proc_address` must be the pointer handed to the extension entry point.
            pub unsafe fn load(get_proc_address: GDExtensionInterfaceGetProcAddress) -> Self {
                let get_proc_address =
                    get_proc_address.expect("get_proc_address unexpectedly null");

                Self {
                    $(
                        $name: std::mem::transmute::<
                            GDExtensionInterfaceFunctionPtr,
                            Option<unsafe extern "C" fn( $($param),* ) $(-> $ret)?>,
                        >(get_proc_address(c_str(
                            concat!(stringify!($name), "\0").as_bytes(),
                        ))),
                    )*
                }
            }
        }
    };
}

interface_table! {
    // Godot core
    get_godot_version: fn(*mut GDExtensionGodotVersion);
    mem_alloc: fn(usize) -> *mut c_void;
    mem_realloc: fn(*mut c_void, usize) -> *mut c_void;
    mem_free: fn(*mut c_void);

    // Diagnostics; (description, function, file, line, notify_editor) with optional message.
    print_error: fn(*const c_char, *const c_char, *const c_char, i32, GDExtensionBool);
    print_error_with_message:
        fn(*const c_char, *const c_char, *const c_char, *const c_char, i32, GDExtensionBool);
    print_warning: fn(*const c_char, *const c_char, *const c_char, i32, GDExtensionBool);
    print_warning_with_message:
        fn(*const c_char, *const c_char, *const c_char, *const c_char, i32, GDExtensionBool);

    // Variant lifecycle
    variant_new_copy: fn(GDExtensionUninitializedVariantPtr, GDExtensionConstVariantPtr);
    variant_new_nil: fn(GDExtensionUninitializedVariantPtr);
    variant_destroy: fn(GDExtensionVariantPtr);
    variant_get_type: fn(GDExtensionConstVariantPtr) -> GDExtensionVariantType;
    variant_stringify: fn(GDExtensionConstVariantPtr, GDExtensionUninitializedStringPtr);
    variant_booleanize: fn(GDExtensionConstVariantPtr) -> GDExtensionBool;
    get_variant_from_type_constructor:
        fn(GDExtensionVariantType) -> GDExtensionVariantFromTypeConstructorFunc;
    get_variant_to_type_constructor:
        fn(GDExtensionVariantType) -> GDExtensionTypeFromVariantConstructorFunc;
    variant_get_ptr_constructor:
        fn(GDExtensionVariantType, i32) -> GDExtensionPtrConstructor;
    variant_get_ptr_destructor: fn(GDExtensionVariantType) -> GDExtensionPtrDestructor;

    // Strings
    string_new_with_utf8_chars_and_len:
        fn(GDExtensionUninitializedStringPtr, *const c_char, GDExtensionInt);
    string_to_utf8_chars:
        fn(GDExtensionConstStringPtr, *mut c_char, GDExtensionInt) -> GDExtensionInt;
    string_name_new_with_utf8_chars_and_len:
        fn(GDExtensionUninitializedStringNamePtr, *const c_char, GDExtensionInt);

    // Objects
    object_method_bind_ptrcall: fn(
        GDExtensionMethodBindPtr,
        GDExtensionObjectPtr,
        *const GDExtensionConstTypePtr,
        GDExtensionTypePtr,
    );
    object_method_bind_call: fn(
        GDExtensionMethodBindPtr,
        GDExtensionObjectPtr,
        *const GDExtensionConstVariantPtr,
        GDExtensionInt,
        GDExtensionUninitializedVariantPtr,
        *mut GDExtensionCallError,
    );
    object_destroy: fn(GDExtensionObjectPtr);
    object_get_instance_id: fn(GDExtensionConstObjectPtr) -> u64;
    object_get_instance_from_id: fn(u64) -> GDExtensionObjectPtr;
    object_cast_to: fn(GDExtensionConstObjectPtr, GDExtensionClassTagPtr) -> GDExtensionObjectPtr;
    global_get_singleton: fn(GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr;
    ref_get_object: fn(GDExtensionConstRefPtr) -> GDExtensionObjectPtr;
    ref_set_object: fn(GDExtensionRefPtr, GDExtensionObjectPtr);

    // ClassDB
    classdb_construct_object: fn(GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr;
    classdb_get_method_bind: fn(
        GDExtensionConstStringNamePtr,
        GDExtensionConstStringNamePtr,
        GDExtensionInt,
    ) -> GDExtensionMethodBindPtr;
    classdb_get_class_tag: fn(GDExtensionConstStringNamePtr) -> GDExtensionClassTagPtr;
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Version compatibility

/// Minimum engine version this binding speaks (the `get_proc_address` protocol appeared in 4.2).
pub const COMPAT_MINIMUM: (u32, u32) = (4, 2);

/// Verifies that the loading engine is new enough for this binding, or panics with a readable
/// message. Must run before anything else touches the interface.
pub fn ensure_static_runtime_compatibility(
    get_proc_address: GDExtensionInterfaceGetProcAddress,
) {
    // SAFETY: entry point contract; the version query only needs get_proc_address itself.
    let version = unsafe { crate::runtime_version(get_proc_address) };

    if (version.major, version.minor) < COMPAT_MINIMUM {
        let runtime = crate::read_version_string(&version);
        let (major, minor) = COMPAT_MINIMUM;
        panic!(
            "gdcall requires Godot {major}.{minor}+, but was loaded by: {runtime}\n\
             Update your Godot engine version.\n"
        );
    }
}
