/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Types and traits around engine objects: smart pointer, class hierarchy, memory policy.

mod gd;
mod instance_id;
mod traits;

pub use gd::Gd;
pub use instance_id::InstanceId;
pub use traits::{mem, EngineClass, GodotClass, Inherits};
