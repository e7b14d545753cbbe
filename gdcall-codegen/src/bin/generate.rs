/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! CLI wrapper around [`gdcall_codegen::generate_all`].

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(api_path), Some(out_dir)) = (args.next(), args.next()) else {
        eprintln!("usage: generate <extension_api.json> <gdcall-core/src>");
        return ExitCode::FAILURE;
    };

    let api_json = match std::fs::read_to_string(&api_path) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("cannot read {api_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match gdcall_codegen::generate_all(&api_json, &PathBuf::from(out_dir)) {
        Ok(written) => {
            for path in &written {
                println!("generated {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("generation failed: {err}");
            ExitCode::FAILURE
        }
    }
}
