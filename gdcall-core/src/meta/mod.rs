/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Reflection metadata: class names and call/conversion errors.

mod class_name;
mod error;

pub use class_name::ClassName;
pub use error::{CallError, ConvertError};
