/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

use gdcall_sys as sys;

use crate::builtin::VariantType;

/// Error from a reflection-style (variant) method call, carrying the engine's diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallError {
    class_name: &'static str,
    method_name: &'static str,
    reason: String,
}

impl CallError {
    #[doc(hidden)]
    pub fn from_sys(
        err: &sys::GDExtensionCallError,
        class_name: &'static str,
        method_name: &'static str,
        arg_count: usize,
    ) -> Self {
        Self {
            class_name,
            method_name,
            reason: sys::call_error_reason(err, arg_count),
        }
    }

    pub fn method(&self) -> String {
        format!("{}::{}", self.class_name, self.method_name)
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "call to {}::{} failed: {}",
            self.class_name, self.method_name, self.reason
        )
    }
}

impl Error for CallError {}

/// Error from converting a [`Variant`][crate::builtin::Variant] into a typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Dynamic type does not match the requested one.
    BadType {
        expected: VariantType,
        actual: VariantType,
    },
    /// Type matched, but the value does not fit the target (e.g. integer out of range).
    BadValue { detail: String },
}

impl ConvertError {
    pub(crate) fn bad_type(expected: VariantType, actual: VariantType) -> Self {
        Self::BadType { expected, actual }
    }

    pub(crate) fn out_of_range(value: i64) -> Self {
        Self::BadValue {
            detail: format!("integer {value} out of range for target type"),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadType { expected, actual } => {
                write!(
                    f,
                    "expected variant of type {}, got {}",
                    expected.as_str(),
                    actual.as_str()
                )
            }
            Self::BadValue { detail } => f.write_str(detail),
        }
    }
}

impl Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_error_formats_engine_reason() {
        let sys_err = sys::GDExtensionCallError {
            error: sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS,
            argument: 2,
            expected: -1,
        };
        let err = CallError::from_sys(&sys_err, "Node", "add_child", 1);

        assert_eq!(err.method(), "Node::add_child");
        let msg = err.to_string();
        assert!(msg.contains("Node::add_child"), "got: {msg}");
        assert!(msg.contains("too few arguments"), "got: {msg}");
    }

    #[test]
    fn convert_error_reports_both_types() {
        let err = ConvertError::bad_type(VariantType::Int, VariantType::String);
        let msg = err.to_string();
        assert!(msg.contains("int") && msg.contains("String"), "got: {msg}");
    }
}
