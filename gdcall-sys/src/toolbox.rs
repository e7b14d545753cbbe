/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Small utility functions shared across the sys layer.

use std::ffi::{c_char, CStr};

use crate::GDExtensionGodotVersion;

/// Returns a C pointer to a null-terminated byte slice.
pub fn c_str(s: &[u8]) -> *const c_char {
    // Ensure null-terminated
    debug_assert!(!s.is_empty() && s[s.len() - 1] == 0);

    s.as_ptr() as *const c_char
}

/// Returns a C pointer to a `&str` literal that already carries a trailing `\0`.
pub fn c_str_from_str(s: &str) -> *const c_char {
    c_str(s.as_bytes())
}

/// Renders the engine's version struct as `"major.minor.patch"`, falling back to the numeric
/// fields if the embedded string pointer is null or not valid UTF-8.
pub fn read_version_string(version: &GDExtensionGodotVersion) -> String {
    let version_string = if version.string.is_null() {
        None
    } else {
        // SAFETY: non-null `string` points to a null-terminated C string owned by the engine.
        let cstr = unsafe { CStr::from_ptr(version.string) };
        cstr.to_str().ok().map(String::from)
    };

    version_string.unwrap_or_else(|| {
        format!("{}.{}.{}", version.major, version.minor, version.patch)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_fallback_without_engine_string() {
        let version = GDExtensionGodotVersion {
            major: 4,
            minor: 3,
            patch: 1,
            string: std::ptr::null(),
        };

        assert_eq!(read_version_string(&version), "4.3.1");
    }

    #[test]
    fn version_string_prefers_engine_string() {
        let engine_str = b"Godot Engine v4.3.stable.official\0";
        let version = GDExtensionGodotVersion {
            major: 4,
            minor: 3,
            patch: 0,
            string: engine_str.as_ptr() as *const _,
        };

        assert_eq!(
            read_version_string(&version),
            "Godot Engine v4.3.stable.official"
        );
    }
}
