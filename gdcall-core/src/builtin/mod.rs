/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Built-in types native to the engine: variants, strings, vectors and friends.
//!
//! These mirror the engine's own value semantics. Copy-on-write types (`GString`, `StringName`)
//! route their clone/drop through engine-provided constructors and destructors; plain-old-data
//! types (vectors, `Color`, `Rid`) are laid out exactly like their engine counterparts and cross
//! the FFI boundary by address.

mod central;
mod color;
mod lifecycle;
mod rid;
mod string;
mod string_name;
mod variant;
mod vector2;
mod vector3;
mod vector4;

pub mod real_mod;

pub use central::*;
pub use color::Color;
pub use real_mod::{real, real_consts};
pub use rid::Rid;
pub use string::GString;
pub use string_name::StringName;
pub use variant::{FromVariant, ToVariant, Variant};
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
