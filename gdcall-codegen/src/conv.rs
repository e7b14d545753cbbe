/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Mapping of engine type and identifier names to Rust.

use heck::ToSnakeCase;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::context::Context;
use crate::util::ident;

/// A Rust-side type as it appears in a generated signature.
pub enum RustTy {
    /// Plain-old-data builtin, passed by value (`bool`, `i64`, `Vector2`, ...).
    BuiltinCopy(Ident),

    /// Engine-managed builtin with a destructor, passed by reference (`GString`, `StringName`).
    BuiltinByRef(Ident),

    /// Engine object, passed as `&Gd<T>` and returned as `Option<Gd<T>>`.
    EngineClass(Ident),
}

impl RustTy {
    pub fn param_tokens(&self) -> TokenStream {
        match self {
            Self::BuiltinCopy(ident) => quote! { #ident },
            Self::BuiltinByRef(ident) => quote! { &#ident },
            Self::EngineClass(ident) => quote! { &Gd<#ident> },
        }
    }

    pub fn return_tokens(&self) -> TokenStream {
        match self {
            Self::BuiltinCopy(ident) | Self::BuiltinByRef(ident) => quote! { #ident },
            Self::EngineClass(ident) => quote! { Option<Gd<#ident>> },
        }
    }
}

/// Maps a JSON type name to Rust, or `None` if the generator does not support the type
/// (the containing method is then skipped).
pub fn to_rust_type(json_ty: &str, ctx: &Context) -> Option<RustTy> {
    let mapped = match json_ty {
        "bool" => RustTy::BuiltinCopy(ident("bool")),
        "int" => RustTy::BuiltinCopy(ident("i64")),
        "float" => RustTy::BuiltinCopy(ident("f64")),
        "Vector2" | "Vector3" | "Vector4" | "Color" => RustTy::BuiltinCopy(ident(json_ty)),
        "RID" => RustTy::BuiltinCopy(ident("Rid")),
        "String" => RustTy::BuiltinByRef(ident("GString")),
        "StringName" => RustTy::BuiltinByRef(ident("StringName")),
        class if ctx.is_selected_class(class) => RustTy::EngineClass(class_ident(class)),
        _ => return None,
    };
    Some(mapped)
}

/// `Node2D` stays `Node2D`; identifiers are already valid Rust.
pub fn class_ident(class_name: &str) -> Ident {
    ident(class_name)
}

/// Method and parameter names: engine snake_case, escaping Rust keywords.
pub fn safe_snake_ident(name: &str) -> Ident {
    let snake = name.to_snake_case();
    if is_keyword(&snake) {
        format_ident!("{}_", snake)
    } else {
        ident(&snake)
    }
}

/// `TYPE_STRING_NAME` -> `StringName`, `TYPE_TRANSFORM2D` -> `Transform2D`,
/// `TYPE_VECTOR2I` -> `Vector2i`.
pub fn enum_variant_ident(constant_name: &str, enum_prefix: &str) -> Ident {
    let stripped = constant_name
        .strip_prefix(enum_prefix)
        .unwrap_or(constant_name);

    // Capitalize each underscore segment; digits keep following letters lowercase
    // (`VECTOR2I` -> `Vector2i`), which matches the engine's own Rust-facing spelling.
    let mut pascal = String::with_capacity(stripped.len());
    for segment in stripped.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            pascal.extend(first.to_uppercase());
            pascal.extend(chars.flat_map(|c| c.to_lowercase()));
        }
    }

    // Dimension suffixes keep their capital letter.
    for (from, to) in [("2d", "2D"), ("3d", "3D")] {
        if pascal.ends_with(from) {
            pascal.truncate(pascal.len() - from.len());
            pascal.push_str(to);
        }
    }

    ident(&pascal)
}

fn is_keyword(s: &str) -> bool {
    // Only keywords that actually occur as engine identifiers.
    matches!(
        s,
        "as" | "box" | "break" | "const" | "continue" | "else" | "enum" | "fn" | "for" | "if"
            | "impl" | "in" | "let" | "loop" | "match" | "mod" | "move" | "mut" | "override"
            | "ref" | "return" | "self" | "static" | "struct" | "trait" | "type" | "use"
            | "where" | "while" | "yield"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;

    fn empty_ctx() -> Context<'static> {
        Context::for_tests(&["Node", "Object"])
    }

    #[test]
    fn scalar_mapping() {
        let ctx = empty_ctx();

        assert!(matches!(
            to_rust_type("int", &ctx),
            Some(RustTy::BuiltinCopy(id)) if id == "i64"
        ));
        assert!(matches!(
            to_rust_type("float", &ctx),
            Some(RustTy::BuiltinCopy(id)) if id == "f64"
        ));
        assert!(matches!(
            to_rust_type("RID", &ctx),
            Some(RustTy::BuiltinCopy(id)) if id == "Rid"
        ));
        assert!(matches!(
            to_rust_type("String", &ctx),
            Some(RustTy::BuiltinByRef(id)) if id == "GString"
        ));
    }

    #[test]
    fn class_mapping_respects_selection() {
        let ctx = empty_ctx();

        assert!(matches!(
            to_rust_type("Node", &ctx),
            Some(RustTy::EngineClass(id)) if id == "Node"
        ));
        // Unselected classes make the method unsupported rather than half-generated.
        assert!(to_rust_type("Camera2D", &ctx).is_none());
        assert!(to_rust_type("NodePath", &ctx).is_none());
    }

    #[test]
    fn keyword_escaping() {
        assert_eq!(safe_snake_ident("type").to_string(), "type_");
        assert_eq!(safe_snake_ident("position").to_string(), "position");
    }

    #[test]
    fn variant_type_names() {
        assert_eq!(enum_variant_ident("TYPE_NIL", "TYPE_").to_string(), "Nil");
        assert_eq!(
            enum_variant_ident("TYPE_STRING_NAME", "TYPE_").to_string(),
            "StringName"
        );
        assert_eq!(
            enum_variant_ident("TYPE_TRANSFORM2D", "TYPE_").to_string(),
            "Transform2D"
        );
        assert_eq!(
            enum_variant_ident("TYPE_PACKED_BYTE_ARRAY", "TYPE_").to_string(),
            "PackedByteArray"
        );
        assert_eq!(enum_variant_ident("TYPE_AABB", "TYPE_").to_string(), "Aabb");
        assert_eq!(
            enum_variant_ident("TYPE_VECTOR2I", "TYPE_").to_string(),
            "Vector2i"
        );
    }
}
