/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Floating-point type matching the engine's `real_t` build setting.
//!
//! Engines compiled with `precision=double` store vector components as `f64`; the default build
//! uses `f32`. Enable the `double-precision` feature to match a double build, otherwise the
//! component layout disagrees with the engine and pointer calls corrupt memory.

#[cfg(not(feature = "double-precision"))]
mod real_impl {
    /// Floating point type used for vector components, matching the engine build.
    #[allow(non_camel_case_types)]
    pub type real = f32;

    /// Constants for [`real`], re-exported from the matching `std` module.
    pub mod real_consts {
        pub use std::f32::consts::*;
    }

    pub(crate) type RVec2 = glam::Vec2;
    pub(crate) type RVec3 = glam::Vec3;
    pub(crate) type RVec4 = glam::Vec4;
}

#[cfg(feature = "double-precision")]
mod real_impl {
    /// Floating point type used for vector components, matching the engine build.
    #[allow(non_camel_case_types)]
    pub type real = f64;

    /// Constants for [`real`], re-exported from the matching `std` module.
    pub mod real_consts {
        pub use std::f64::consts::*;
    }

    pub(crate) type RVec2 = glam::DVec2;
    pub(crate) type RVec3 = glam::DVec3;
    pub(crate) type RVec4 = glam::DVec4;
}

pub use real_impl::*;

/// Literal-ish conversion into [`real`], for code that must compile under both precisions.
#[macro_export]
macro_rules! real {
    ($f:expr) => {{
        let f: $crate::builtin::real = $f as _;
        f
    }};
}
