/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::StringName;

/// Name of an engine class, known at compile time.
///
/// Stores the `'static` ASCII name; the interned [`StringName`] the engine wants is built on
/// demand. Class method tables cache the result, so the repeated interning cost stays off hot
/// call paths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassName {
    name: &'static str,
}

impl ClassName {
    #[doc(hidden)]
    pub const fn from_static(name: &'static str) -> Self {
        Self { name }
    }

    pub const fn as_str(&self) -> &'static str {
        self.name
    }

    /// Interns the name with the engine. Requires an initialized binding.
    pub fn to_string_name(&self) -> StringName {
        StringName::from(self.name)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_a_thin_static_wrapper() {
        const NAME: ClassName = ClassName::from_static("Node2D");
        assert_eq!(NAME.as_str(), "Node2D");
        assert_eq!(NAME.to_string(), "Node2D");
        assert_eq!(NAME, ClassName::from_static("Node2D"));
    }
}
