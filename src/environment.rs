/*
 * ==========================================================================
 * TALLY - Every Count Counts!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@tally-lang.com
 * Github:   https://github.com/samwilcox/tally
 *
 * License:
 * This file is part of the Tally language project.
 *
 * Tally is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// The variable environment for one program parse.
///
/// Tally has a single flat scope: every assignment writes here, every
/// identifier in an expression reads from here. Reporting order is
/// first-assignment order, so the map is paired with an insertion-order
/// index; reassignment overwrites the value in place without moving the
/// name's position.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: HashMap<String, i64>,
    order: Vec<String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    pub fn define(&mut self, name: String, value: i64) {
        if !self.values.contains_key(&name) {
            self.order.push(name.clone());
        }

        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates bindings in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.values[name]))
    }
}

impl Serialize for Environment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;

        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }

        map.end()
    }
}
