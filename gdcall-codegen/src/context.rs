/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::{HashMap, HashSet};

use crate::api_parser::{Class, ExtensionApi};
use crate::special_cases;

/// Cross-class lookups needed while generating a single class.
pub struct Context<'a> {
    classes: HashMap<&'a str, &'a Class>,
    selected: HashSet<&'a str>,
    singletons: HashSet<&'a str>,
}

impl<'a> Context<'a> {
    pub fn build(api: &'a ExtensionApi) -> Self {
        let classes: HashMap<_, _> = api
            .classes
            .iter()
            .map(|class| (class.name.as_str(), class))
            .collect();

        let selected = special_cases::SELECTED_CLASSES
            .iter()
            .copied()
            .filter(|name| classes.contains_key(name))
            .collect();

        let singletons = api
            .singletons
            .iter()
            .map(|singleton| singleton.name.as_str())
            .collect();

        Self {
            classes,
            selected,
            singletons,
        }
    }

    pub fn is_selected_class(&self, class_name: &str) -> bool {
        self.selected.contains(class_name)
    }

    pub fn is_singleton(&self, class_name: &str) -> bool {
        self.singletons.contains(class_name)
    }

    /// Chain of selected ancestors, nearest first, not including the class itself.
    ///
    /// Classes in the engine hierarchy that are not selected are skipped; the next selected
    /// ancestor becomes the direct base.
    pub fn base_chain(&self, class_name: &str) -> Vec<&'a str> {
        let mut chain = Vec::new();
        let mut current = self.classes.get(class_name).and_then(|c| c.inherits.as_deref());

        while let Some(base) = current {
            if self.is_selected_class(base) {
                // Borrow with the map's lifetime, not the lookup key's.
                let (key, class) = self.classes.get_key_value(base).expect("known class");
                chain.push(*key);
                current = class.inherits.as_deref();
            } else {
                current = self.classes.get(base).and_then(|c| c.inherits.as_deref());
            }
        }
        chain
    }

    #[cfg(test)]
    pub fn for_tests(selected: &'static [&'static str]) -> Context<'static> {
        Context {
            classes: HashMap::new(),
            selected: selected.iter().copied().collect(),
            singletons: HashSet::new(),
        }
    }
}
