/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::CString;

use gdcall_sys as sys;
use sys::interface_fn;

/// Routes an error to the engine's error reporting (editor "Errors" tab, stderr).
///
/// Falls back to plain stderr when the binding is not initialized, so the macros stay usable
/// in unit tests.
pub fn print_engine_error(description: &str, function: &str, file: &str, line: u32) {
    if !sys::is_initialized() {
        eprintln!("ERROR: {description}\n   at: {function} ({file}:{line})");
        return;
    }

    let (description, function, file) = c_strings(description, function, file);
    unsafe {
        interface_fn!(print_error)(
            description.as_ptr(),
            function.as_ptr(),
            file.as_ptr(),
            line as i32,
            /* notify_editor */ 1,
        );
    }
}

/// Routes a warning to the engine's error reporting. See [`print_engine_error`].
pub fn print_engine_warning(description: &str, function: &str, file: &str, line: u32) {
    if !sys::is_initialized() {
        eprintln!("WARNING: {description}\n   at: {function} ({file}:{line})");
        return;
    }

    let (description, function, file) = c_strings(description, function, file);
    unsafe {
        interface_fn!(print_warning)(
            description.as_ptr(),
            function.as_ptr(),
            file.as_ptr(),
            line as i32,
            /* notify_editor */ 1,
        );
    }
}

fn c_strings(description: &str, function: &str, file: &str) -> (CString, CString, CString) {
    // Interior NUL cannot occur in text from format!; replace instead of panicking if it does.
    let sanitize =
        |s: &str| CString::new(s).unwrap_or_else(|_| CString::new(s.replace('\0', "?")).unwrap_or_default());

    (sanitize(description), sanitize(function), sanitize(file))
}

/// Prints to the engine's output console (stdout, which the editor captures).
#[macro_export]
macro_rules! godot_print {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        println!($fmt $(, $args)*)
    };
}

/// Reports a warning through the engine.
#[macro_export]
macro_rules! godot_warn {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::global::print_engine_warning(
            &format!($fmt $(, $args)*),
            "",
            file!(),
            line!(),
        )
    };
}

/// Reports an error through the engine.
#[macro_export]
macro_rules! godot_error {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::global::print_engine_error(
            &format!($fmt $(, $args)*),
            "",
            file!(),
            line!(),
        )
    };
}
