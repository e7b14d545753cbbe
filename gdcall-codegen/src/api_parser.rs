/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// In #[derive(DeJson)]: "this block may be rewritten with the `?` operator"
#![allow(clippy::question_mark)]

//! Deserialization model for the engine's `extension_api.json`.
//!
//! Only the parts the generator consumes are declared; unknown JSON fields are ignored by
//! nanoserde. Fields kept but unused still act as a conformance check on the input.

use nanoserde::DeJson;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// JSON models

#[derive(DeJson)]
pub struct ExtensionApi {
    pub header: Header,
    pub builtin_class_sizes: Vec<BuiltinSizes>,
    pub classes: Vec<Class>,
    pub global_enums: Vec<Enum>,
    pub singletons: Vec<Singleton>,
}

#[derive(DeJson, Clone, Debug)]
pub struct Header {
    pub version_major: u8,
    pub version_minor: u8,
    pub version_patch: u8,
    #[allow(dead_code)]
    pub version_status: String,
    pub version_full_name: String,
}

#[derive(DeJson)]
pub struct BuiltinSizes {
    pub build_configuration: String,
    pub sizes: Vec<BuiltinSizeForConfig>,
}

#[derive(DeJson)]
pub struct BuiltinSizeForConfig {
    pub name: String,
    pub size: usize,
}

#[derive(DeJson)]
pub struct Class {
    pub name: String,
    pub is_refcounted: bool,
    pub is_instantiable: bool,
    pub inherits: Option<String>,
    #[allow(dead_code)]
    pub api_type: String,
    pub methods: Option<Vec<ClassMethod>>,
}

#[derive(DeJson)]
pub struct Singleton {
    pub name: String,
}

#[derive(DeJson)]
pub struct Enum {
    pub name: String,
    #[allow(dead_code)]
    pub is_bitfield: bool,
    pub values: Vec<EnumConstant>,
}

#[derive(DeJson, Clone)]
pub struct EnumConstant {
    pub name: String,
    pub value: i64,
}

#[derive(DeJson)]
pub struct ClassMethod {
    pub name: String,
    pub is_const: bool,
    pub is_vararg: bool,
    pub is_static: bool,
    pub is_virtual: bool,
    pub hash: Option<i64>,
    pub return_value: Option<MethodReturn>,
    pub arguments: Option<Vec<MethodArg>>,
}

#[derive(DeJson)]
pub struct MethodArg {
    pub name: String,
    #[nserde(rename = "type")]
    pub type_: String,
}

#[derive(DeJson)]
pub struct MethodReturn {
    #[nserde(rename = "type")]
    pub type_: String,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Parsing

pub fn parse_extension_api(json: &str) -> ExtensionApi {
    ExtensionApi::deserialize_json(json).expect("failed to deserialize extension_api.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_representative_subset() {
        let json = r#"{
            "header": {
                "version_major": 4, "version_minor": 2, "version_patch": 0,
                "version_status": "stable",
                "version_full_name": "Godot Engine v4.2.stable.official"
            },
            "builtin_class_sizes": [
                {
                    "build_configuration": "float_64",
                    "sizes": [
                        { "name": "Variant", "size": 24 },
                        { "name": "String", "size": 8 }
                    ]
                }
            ],
            "classes": [
                {
                    "name": "Node",
                    "is_refcounted": false,
                    "is_instantiable": true,
                    "inherits": "Object",
                    "api_type": "core",
                    "methods": [
                        {
                            "name": "get_name",
                            "is_const": true,
                            "is_vararg": false,
                            "is_static": false,
                            "is_virtual": false,
                            "hash": 2002593661,
                            "return_value": { "type": "StringName" }
                        },
                        {
                            "name": "add_child",
                            "is_const": false,
                            "is_vararg": false,
                            "is_static": false,
                            "is_virtual": false,
                            "hash": 3863233950,
                            "arguments": [
                                { "name": "node", "type": "Node" },
                                { "name": "force_readable_name", "type": "bool" },
                                { "name": "internal", "type": "int" }
                            ]
                        }
                    ]
                }
            ],
            "global_enums": [
                {
                    "name": "Variant.Type",
                    "is_bitfield": false,
                    "values": [
                        { "name": "TYPE_NIL", "value": 0 },
                        { "name": "TYPE_BOOL", "value": 1 }
                    ]
                }
            ],
            "singletons": [
                { "name": "Engine" }
            ]
        }"#;

        let api = parse_extension_api(json);

        assert_eq!(api.header.version_major, 4);
        assert_eq!(api.header.version_minor, 2);

        let node = &api.classes[0];
        assert_eq!(node.name, "Node");
        assert_eq!(node.inherits.as_deref(), Some("Object"));
        assert!(!node.is_refcounted);

        let methods = node.methods.as_ref().unwrap();
        assert_eq!(methods[0].name, "get_name");
        assert!(methods[0].is_const);
        assert_eq!(methods[0].return_value.as_ref().unwrap().type_, "StringName");
        assert_eq!(methods[0].hash, Some(2002593661));

        let args = methods[1].arguments.as_ref().unwrap();
        assert_eq!(args[0].type_, "Node");
        assert_eq!(args[2].type_, "int");

        assert_eq!(api.global_enums[0].name, "Variant.Type");
        assert_eq!(api.singletons[0].name, "Engine");
    }
}
