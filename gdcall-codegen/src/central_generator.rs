/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Generates `central.rs`: the `VariantType` enum and opaque storage sizes.

use proc_macro2::{Ident, Literal, TokenStream};
use quote::quote;

use crate::api_parser::{EnumConstant, ExtensionApi};
use crate::conv::enum_variant_ident;

/// Build configurations the binding is generated for; must match the loading engine.
/// The `double-precision` feature selects the second at compile time.
pub const BUILD_CONFIGS: [&str; 2] = ["float_64", "double_64"];

pub fn make_central_module(api: &ExtensionApi) -> TokenStream {
    let version = format!(
        "{}.{}",
        api.header.version_major, api.header.version_minor
    );

    let opaque_sizes = make_opaque_sizes(api);
    let variant_type = make_variant_type(api);

    let config_note = format!(
        " Generated against Godot {version}; build configuration `float_64`, or `double_64` with the `double-precision` feature."
    );

    quote! {
        #![doc = #config_note]

        use gdcall_sys as sys;

        #opaque_sizes

        #variant_type
    }
}

fn make_opaque_sizes(api: &ExtensionApi) -> TokenStream {
    let per_config = BUILD_CONFIGS.iter().map(|config| {
        let sizes = api
            .builtin_class_sizes
            .iter()
            .find(|entry| entry.build_configuration == *config)
            .unwrap_or_else(|| panic!("no builtin sizes for build configuration {config}"));

        let size_of = |builtin: &str| -> Literal {
            let size = sizes
                .sizes
                .iter()
                .find(|s| s.name == builtin)
                .unwrap_or_else(|| panic!("no size for builtin {builtin}"))
                .size;
            Literal::usize_unsuffixed(size)
        };

        let variant = size_of("Variant");
        let string = size_of("String");
        let string_name = size_of("StringName");

        let cfg = if *config == "double_64" {
            quote! { #[cfg(feature = "double-precision")] }
        } else {
            quote! { #[cfg(not(feature = "double-precision"))] }
        };

        quote! {
            #cfg
            pub(crate) type OpaqueVariant = sys::Opaque<#variant>;
            #cfg
            pub(crate) type OpaqueString = sys::Opaque<#string>;
            #cfg
            pub(crate) type OpaqueStringName = sys::Opaque<#string_name>;
        }
    });

    quote! { #( #per_config )* }
}

fn make_variant_type(api: &ExtensionApi) -> TokenStream {
    let constants = variant_type_constants(api);

    let variants = constants.iter().map(|(ident, value)| {
        quote! { #ident = #value, }
    });

    let from_sys_arms = constants.iter().map(|(ident, value)| {
        quote! { #value => Self::#ident, }
    });

    quote! {
        #[doc = " Discriminant of a [`Variant`][crate::builtin::Variant]'s dynamic type."]
        #[repr(i32)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum VariantType {
            #( #variants )*
        }

        impl VariantType {
            #[doc(hidden)]
            pub fn from_sys(enumerator: sys::GDExtensionVariantType) -> Self {
                match enumerator {
                    #( #from_sys_arms )*
                    _ => panic!("invalid variant type {enumerator}"),
                }
            }

            #[doc(hidden)]
            pub fn to_sys(self) -> sys::GDExtensionVariantType {
                self as sys::GDExtensionVariantType
            }
        }
    }
}

fn variant_type_constants(api: &ExtensionApi) -> Vec<(Ident, Literal)> {
    let enum_ = api
        .global_enums
        .iter()
        .find(|e| e.name == "Variant.Type")
        .expect("global enum Variant.Type missing");

    enum_
        .values
        .iter()
        .filter(|constant| constant.name != "TYPE_MAX")
        .map(|constant: &EnumConstant| {
            let ident = enum_variant_ident(&constant.name, "TYPE_");
            let value = Literal::i32_unsuffixed(
                constant
                    .value
                    .try_into()
                    .expect("variant type ordinal out of i32 range"),
            );
            (ident, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_parser::parse_extension_api;

    const MINI_API: &str = r#"{
        "header": {
            "version_major": 4, "version_minor": 2, "version_patch": 0,
            "version_status": "stable",
            "version_full_name": "Godot Engine v4.2.stable.official"
        },
        "builtin_class_sizes": [
            {
                "build_configuration": "float_32",
                "sizes": [
                    { "name": "Variant", "size": 20 },
                    { "name": "String", "size": 4 },
                    { "name": "StringName", "size": 4 }
                ]
            },
            {
                "build_configuration": "float_64",
                "sizes": [
                    { "name": "Variant", "size": 24 },
                    { "name": "String", "size": 8 },
                    { "name": "StringName", "size": 8 }
                ]
            },
            {
                "build_configuration": "double_64",
                "sizes": [
                    { "name": "Variant", "size": 40 },
                    { "name": "String", "size": 8 },
                    { "name": "StringName", "size": 8 }
                ]
            }
        ],
        "classes": [],
        "global_enums": [
            {
                "name": "Variant.Type",
                "is_bitfield": false,
                "values": [
                    { "name": "TYPE_NIL", "value": 0 },
                    { "name": "TYPE_BOOL", "value": 1 },
                    { "name": "TYPE_STRING_NAME", "value": 21 },
                    { "name": "TYPE_MAX", "value": 39 }
                ]
            }
        ],
        "singletons": []
    }"#;

    #[test]
    fn emits_sizes_for_both_build_configs() {
        let api = parse_extension_api(MINI_API);
        let code = make_central_module(&api).to_string();

        assert!(code.contains("OpaqueVariant = sys :: Opaque < 24 >"));
        assert!(code.contains("OpaqueVariant = sys :: Opaque < 40 >"));
        assert!(code.contains("OpaqueString = sys :: Opaque < 8 >"));
        // Size 20 belongs to float_32, which no supported target uses.
        assert!(!code.contains("Opaque < 20 >"));
        assert!(code.contains("# [cfg (not (feature = \"double-precision\"))]"));
        assert!(code.contains("# [cfg (feature = \"double-precision\")]"));
    }

    #[test]
    fn variant_type_skips_max_sentinel() {
        let api = parse_extension_api(MINI_API);
        let code = make_central_module(&api).to_string();

        assert!(code.contains("Nil = 0"));
        assert!(code.contains("StringName = 21"));
        assert!(!code.contains("Max"));
        assert!(!code.contains("39"));
    }
}
