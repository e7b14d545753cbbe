/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Global engine utilities: printing and error reporting.

mod print;

pub use print::{print_engine_error, print_engine_warning};
