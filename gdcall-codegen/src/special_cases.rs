/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Curation of what gets generated.
//!
//! The committed binding is intentionally small: a class and method allow-list instead of the
//! full ClassDB. Widening the binding means adding entries here and re-running the generator;
//! everything else (type mapping, method body shape) picks the new entries up unchanged.

/// Classes to generate, in dependency order (bases before subclasses).
pub const SELECTED_CLASSES: &[&str] = &[
    "Object",
    "RefCounted",
    "Node",
    "CanvasItem",
    "Node2D",
    "Engine",
];

/// Methods to generate per class.
const SELECTED_METHODS: &[(&str, &[&str])] = &[
    ("Object", &["get_class", "get_instance_id", "is_class", "call"]),
    (
        "RefCounted",
        &["init_ref", "reference", "unreference", "get_reference_count"],
    ),
    (
        "Node",
        &[
            "get_name",
            "set_name",
            "add_child",
            "get_child_count",
            "get_parent",
            "is_inside_tree",
            "queue_free",
        ],
    ),
    (
        "CanvasItem",
        &["show", "hide", "is_visible", "set_modulate", "get_modulate"],
    ),
    (
        "Node2D",
        &[
            "set_position",
            "get_position",
            "set_rotation",
            "get_rotation",
            "set_scale",
            "get_scale",
            "rotate",
            "translate",
        ],
    ),
    (
        "Engine",
        &[
            "get_frames_per_second",
            "set_time_scale",
            "get_time_scale",
            "is_editor_hint",
        ],
    ),
];

pub fn is_class_selected(class_name: &str) -> bool {
    SELECTED_CLASSES.contains(&class_name)
}

pub fn is_method_selected(class_name: &str, method_name: &str) -> bool {
    SELECTED_METHODS
        .iter()
        .find(|(class, _)| *class == class_name)
        .is_some_and(|(_, methods)| methods.contains(&method_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_consistent() {
        // Every class with a method list must also be in the class list.
        for (class, methods) in SELECTED_METHODS {
            assert!(is_class_selected(class), "{class} has methods but is not selected");
            assert!(!methods.is_empty());
        }

        assert!(is_method_selected("Node", "add_child"));
        assert!(!is_method_selected("Node", "rpc"));
        assert!(!is_method_selected("Camera2D", "make_current"));
    }
}
