/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Value types, object smart pointers and engine class APIs built on top of `gdcall-sys`.

pub mod builtin;
pub mod classes;
pub mod global;
pub mod init;
pub mod meta;
pub mod obj;

#[doc(hidden)]
pub mod private {
    // Re-exported for code produced by gdcall-codegen and for the entry-point macro; not API.
    pub use gdcall_sys as sys;

    pub use crate::classes::{load_method_bind, ClassMethodTable};
}

pub use gdcall_sys as sys;
