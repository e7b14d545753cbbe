/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The commonly needed imports, in one `use`.

pub use crate::builtin::{
    real, Color, FromVariant, GString, Rid, StringName, ToVariant, Variant, VariantType, Vector2,
    Vector3, Vector4,
};
pub use crate::classes::{CanvasItem, Engine, Node, Node2D, Object, RefCounted};
pub use crate::init::{ExtensionLibrary, InitLevel};
pub use crate::meta::{CallError, ClassName, ConvertError};
pub use crate::obj::{Gd, GodotClass, Inherits, InstanceId};
pub use crate::{extension_entry, godot_error, godot_print, godot_warn};
