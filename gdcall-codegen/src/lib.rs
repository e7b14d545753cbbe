/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Generator for the engine class bindings in `gdcall-core`.
//!
//! Consumes the engine's `extension_api.json` (dump it with `godot --dump-extension-api`) and
//! emits `builtin/central.rs` plus one module per selected class under `classes/`. The output
//! is committed; regeneration is only needed when the engine API or the selection in
//! [`special_cases`] changes:
//!
//! ```bash
//! cargo run -p gdcall-codegen --bin generate -- extension_api.json gdcall-core/src
//! ```

pub mod api_parser;
pub mod central_generator;
pub mod class_generator;
pub mod context;
pub mod conv;
pub mod special_cases;
pub mod util;

use std::path::{Path, PathBuf};

use api_parser::parse_extension_api;
use context::Context;

/// Generates all output files under `core_src` (the `gdcall-core/src` directory).
///
/// Returns the written paths. Panics on malformed input; this runs as a dev tool, not in
/// production.
pub fn generate_all(api_json: &str, core_src: &Path) -> std::io::Result<Vec<PathBuf>> {
    let api = parse_extension_api(api_json);
    let ctx = Context::build(&api);

    let mut written = Vec::new();

    let central_path = core_src.join("builtin").join("central.rs");
    util::write_file(&central_path, central_generator::make_central_module(&api))?;
    written.push(central_path);

    for class_name in special_cases::SELECTED_CLASSES {
        let class = api
            .classes
            .iter()
            .find(|c| c.name == *class_name)
            .unwrap_or_else(|| panic!("selected class {class_name} not in extension_api.json"));

        let path = core_src
            .join("classes")
            .join(format!("{}.rs", class_generator::module_name(class_name)));
        util::write_file(&path, class_generator::make_class_module(class, &ctx))?;
        written.push(path);
    }

    Ok(written)
}
