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

//! Flattened view of all benchmark records.
//!
//! Every key that appears in any record's `details` becomes a module column.
//! Records that never reported a module hold `None` in that column.

use crate::record::BenchmarkRecord;

/// Columns every record carries regardless of strategy.
pub const BASIC_COLUMNS: [&str; 4] = ["scenario", "seed", "strategy", "totalTime"];

/// All records plus the union of their module columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatTable {
    records: Vec<BenchmarkRecord>,
    module_columns: Vec<String>,
}

impl FlatTable {
    /// Builds a table from records, collecting module columns in
    /// first-appearance order.
    pub fn from_records(records: Vec<BenchmarkRecord>) -> Self {
        let mut module_columns: Vec<String> = Vec::new();
        for record in &records {
            for (key, _) in &record.details {
                if BASIC_COLUMNS.contains(&key.as_str()) {
                    continue;
                }
                if !module_columns.iter().any(|c| c == key) {
                    module_columns.push(key.clone());
                }
            }
        }
        Self {
            records,
            module_columns,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The underlying records.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Module (non-basic) columns in first-appearance order.
    pub fn module_columns(&self) -> &[String] {
        &self.module_columns
    }

    /// Values of a module column, one per record.
    pub fn column(&self, name: &str) -> impl Iterator<Item = Option<f64>> + '_ {
        let name = name.to_string();
        self.records.iter().map(move |r| r.detail(&name))
    }

    /// Returns `true` if at least one record has a value for `name`.
    pub fn is_measured(&self, name: &str) -> bool {
        self.column(name).any(|v| v.is_some())
    }

    /// Module columns with at least one value in this table.
    pub fn measured_columns(&self) -> Vec<String> {
        self.module_columns
            .iter()
            .filter(|c| self.is_measured(c))
            .cloned()
            .collect()
    }

    /// Sub-table of records whose scenario equals `scenario`.
    ///
    /// The column set is kept intact, mirroring a row filter.
    pub fn filter_scenario(&self, scenario: &str) -> FlatTable {
        self.filter(|r| r.scenario.as_deref() == Some(scenario))
    }

    /// Sub-table of records whose strategy equals `strategy`.
    pub fn filter_strategy(&self, strategy: &str) -> FlatTable {
        self.filter(|r| r.strategy.as_deref() == Some(strategy))
    }

    fn filter(&self, predicate: impl Fn(&BenchmarkRecord) -> bool) -> FlatTable {
        FlatTable {
            records: self
                .records
                .iter()
                .filter(|r| predicate(r))
                .cloned()
                .collect(),
            module_columns: self.module_columns.clone(),
        }
    }

    /// Distinct scenario names, sorted lexicographically.
    pub fn scenarios(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().filter_map(|r| r.scenario.clone()))
    }

    /// Distinct strategy names, sorted lexicographically.
    pub fn strategies(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().filter_map(|r| r.strategy.clone()))
    }
}

fn distinct_sorted(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = names.collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(scenario: &str, strategy: &str, details: &[(&str, Option<f64>)]) -> BenchmarkRecord {
        BenchmarkRecord {
            scenario: Some(scenario.to_string()),
            seed: Some(1),
            strategy: Some(strategy.to_string()),
            total_time: Some(1.0),
            details: details.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    #[test]
    fn test_columns_are_union_in_first_appearance_order() {
        let table = FlatTable::from_records(vec![
            record("Small", "A-Star", &[("Placement", Some(1.0)), ("A* Search", Some(2.0))]),
            record("Small", "Bus-Channel", &[("Placement", Some(1.0)), ("Channel Build", Some(3.0))]),
        ]);
        assert_eq!(
            table.module_columns(),
            &["Placement", "A* Search", "Channel Build"]
        );
    }

    #[test]
    fn test_missing_key_is_not_measured() {
        let table = FlatTable::from_records(vec![
            record("Small", "A-Star", &[("A* Search", Some(2.0))]),
            record("Small", "Bus-Channel", &[("Channel Build", Some(3.0))]),
        ]);
        let values: Vec<Option<f64>> = table.column("A* Search").collect();
        assert_eq!(values, vec![Some(2.0), None]);

        let bus = table.filter_strategy("Bus-Channel");
        assert!(!bus.is_measured("A* Search"));
        assert_eq!(bus.measured_columns(), vec!["Channel Build".to_string()]);
        assert_eq!(bus.module_columns().len(), 2);
    }

    #[test]
    fn test_strategies_sorted_and_distinct() {
        let table = FlatTable::from_records(vec![
            record("Small", "Vertices-Network", &[]),
            record("Small", "A-Star", &[]),
            record("Medium", "Bus-Channel", &[]),
            record("Small", "A-Star", &[]),
        ]);
        assert_eq!(
            table.strategies(),
            vec!["A-Star", "Bus-Channel", "Vertices-Network"]
        );
        assert_eq!(table.scenarios(), vec!["Medium", "Small"]);
        assert_eq!(table.filter_scenario("Small").len(), 3);
        assert!(table.filter_scenario("Large (Standard)").is_empty());
    }

    #[test]
    fn test_basic_keys_in_details_are_not_modules() {
        let table = FlatTable::from_records(vec![record(
            "Small",
            "A-Star",
            &[("totalTime", Some(5.0)), ("Routing", Some(4.0))],
        )]);
        assert_eq!(table.module_columns(), &["Routing"]);
    }
}
