/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use proc_macro2::{Ident, Span, TokenStream};

pub fn ident(s: &str) -> Ident {
    Ident::new(s, Span::call_site())
}

/// License header plus the generated-file marker every output file starts with.
pub fn file_header() -> String {
    "/*\n\
     \x20* This Source Code Form is subject to the terms of the Mozilla Public\n\
     \x20* License, v. 2.0. If a copy of the MPL was not distributed with this\n\
     \x20* file, You can obtain one at https://mozilla.org/MPL/2.0/.\n\
     \x20*/\n\n\
     // @generated by gdcall-codegen from extension_api.json; do not edit.\n\n"
        .to_string()
}

/// Writes a token stream to disk, then best-effort formats it with rustfmt.
///
/// Token streams print as one long line; without rustfmt the output compiles but is unreadable.
/// A missing rustfmt is not an error.
pub fn write_file(path: &Path, code: TokenStream) -> std::io::Result<()> {
    let content = format!("{}{}\n", file_header(), code);
    std::fs::write(path, content)?;

    let _ = std::process::Command::new("rustfmt")
        .arg("--edition=2021")
        .arg(path)
        .status();

    Ok(())
}
