// Dweve benchdoc - Benchmark Report Generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Phase column resolution.
//!
//! Older harness builds timed the three top-level phases as `Placement`,
//! `Routing` and `Post-Process`. Newer builds prefix them with their nesting
//! level (`L1-Placement`, ...). A single resolution uses one scheme only:
//! if any prefixed name is present, legacy names are ignored.

use std::collections::BTreeMap;

/// Canonical phase names, in report order.
pub const PHASE_NAMES: [&str; 3] = ["Placement", "Routing", "Post-Process"];

/// Prefix used by the level-tagged naming scheme.
pub const PHASE_PREFIX: &str = "L1-";

/// Phase columns found in a table, with their display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseColumns {
    /// Columns to read, in canonical phase order.
    pub selected: Vec<String>,
    /// Column name -> canonical (unprefixed) display name.
    pub display_names: BTreeMap<String, String>,
}

impl PhaseColumns {
    /// Returns `true` when no phase column was found.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns `true` if `column` was selected as a phase column.
    pub fn contains(&self, column: &str) -> bool {
        self.selected.iter().any(|c| c == column)
    }

    /// Display name for `column`, or the column name itself.
    pub fn display_name<'a>(&'a self, column: &'a str) -> &'a str {
        self.display_names
            .get(column)
            .map(String::as_str)
            .unwrap_or(column)
    }
}

/// Decides which columns hold the three canonical phases.
///
/// Returns the prefixed columns that exist (mapped to unprefixed names) when
/// at least one prefixed column exists, otherwise the legacy columns that
/// exist (mapped to themselves). Missing phases are simply left out.
pub fn resolve_phase_columns<I, S>(table_columns: I) -> PhaseColumns
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let available: Vec<String> = table_columns
        .into_iter()
        .map(|c| c.as_ref().to_string())
        .collect();
    let has = |name: &str| available.iter().any(|c| c == name);

    let prefixed: Vec<(String, &str)> = PHASE_NAMES
        .iter()
        .map(|name| (format!("{}{}", PHASE_PREFIX, name), *name))
        .filter(|(column, _)| has(column.as_str()))
        .collect();

    let pairs: Vec<(String, &str)> = if prefixed.is_empty() {
        PHASE_NAMES
            .iter()
            .filter(|name| has(**name))
            .map(|name| (name.to_string(), *name))
            .collect()
    } else {
        prefixed
    };

    let mut resolved = PhaseColumns::default();
    for (column, display) in pairs {
        resolved
            .display_names
            .insert(column.clone(), display.to_string());
        resolved.selected.push(column);
    }
    resolved
}
