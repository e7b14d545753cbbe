/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Rust bindings for GDExtension, the extension API of the Godot game engine.
//!
//! The library loads as a dynamic library into the engine, resolves the engine's C interface at
//! runtime and exposes it through safe, typed wrappers:
//!
//! - [`builtin`]: value types such as [`Variant`][builtin::Variant], strings, vectors and colors.
//! - [`classes`]: generated engine class APIs, called through method-bind pointer calls.
//! - [`obj`]: the [`Gd`][obj::Gd] smart pointer tying object lifetimes to the engine's
//!   memory management.
//! - [`init`]: the [`extension_entry!`] macro declaring the library's entry point.
//!
//! # Example
//!
//! ```no_run
//! use gdcall::prelude::*;
//!
//! struct MyExtension;
//!
//! impl ExtensionLibrary for MyExtension {
//!     fn on_level_init(level: InitLevel) {
//!         if level == InitLevel::Scene {
//!             let mut node = Node2D::new_alloc();
//!             node.set_position(Vector2::new(100.0, 50.0));
//!             godot_print!("spawned {:?}", node);
//!             node.free();
//!         }
//!     }
//! }
//!
//! extension_entry!(my_extension_init, MyExtension);
//! ```

pub use gdcall_core::{builtin, classes, global, init, meta, obj};

#[doc(hidden)]
pub use gdcall_core::private;

/// Low-level FFI layer; stability not guaranteed.
#[doc(hidden)]
pub use gdcall_core::sys;

pub use gdcall_core::{extension_entry, godot_error, godot_print, godot_warn, real};

pub mod prelude;
