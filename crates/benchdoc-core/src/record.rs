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

//! A single measured benchmark run.

use serde::Serialize;
use serde_json::Value;

/// One run of one strategy on one scenario/seed.
///
/// Field access is permissive: a record missing `scenario` (or carrying a
/// value of the wrong JSON type) has `scenario == None` rather than failing
/// the whole load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    /// Scenario name, e.g. `Large (Standard)`.
    pub scenario: Option<String>,
    /// Graph generator seed.
    pub seed: Option<i64>,
    /// Strategy name, e.g. `A-Star`.
    pub strategy: Option<String>,
    /// End-to-end wall time in milliseconds.
    #[serde(rename = "totalTime")]
    pub total_time: Option<f64>,
    /// Per-module durations in milliseconds, in the order the harness wrote them.
    pub details: Vec<(String, Option<f64>)>,
}

impl BenchmarkRecord {
    /// Builds a record from one element of the raw results array.
    pub fn from_json(value: &Value) -> Self {
        let details = value
            .get("details")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(key, v)| (key.clone(), v.as_f64()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            scenario: value
                .get("scenario")
                .and_then(Value::as_str)
                .map(str::to_string),
            seed: value.get("seed").and_then(Value::as_i64),
            strategy: value
                .get("strategy")
                .and_then(Value::as_str)
                .map(str::to_string),
            total_time: value.get("totalTime").and_then(Value::as_f64),
            details,
        }
    }

    /// Returns the measured duration of `module`, if any.
    pub fn detail(&self, module: &str) -> Option<f64> {
        self.details
            .iter()
            .find(|(name, _)| name == module)
            .and_then(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_full_record() {
        let value = json!({
            "scenario": "Small",
            "seed": 42,
            "strategy": "A-Star",
            "totalTime": 12.5,
            "details": {"Placement": 1.0, "Routing": 10.0, "Post-Process": 1.5}
        });
        let record = BenchmarkRecord::from_json(&value);

        assert_eq!(record.scenario.as_deref(), Some("Small"));
        assert_eq!(record.seed, Some(42));
        assert_eq!(record.strategy.as_deref(), Some("A-Star"));
        assert_eq!(record.total_time, Some(12.5));
        assert_eq!(record.detail("Routing"), Some(10.0));
        let keys: Vec<&str> = record.details.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Placement", "Routing", "Post-Process"]);
    }

    #[test]
    fn test_missing_fields_read_as_none() {
        let record = BenchmarkRecord::from_json(&json!({"strategy": "Bus-Channel"}));
        assert_eq!(record.scenario, None);
        assert_eq!(record.seed, None);
        assert_eq!(record.total_time, None);
        assert!(record.details.is_empty());
    }

    #[test]
    fn test_null_detail_is_not_measured() {
        let record = BenchmarkRecord::from_json(&json!({
            "details": {"Placement": null, "Routing": 0}
        }));
        assert_eq!(record.detail("Placement"), None);
        assert_eq!(record.detail("Routing"), Some(0.0));
        assert_eq!(record.detail("Unknown"), None);
    }

    #[test]
    fn test_wrong_types_are_tolerated() {
        let record = BenchmarkRecord::from_json(&json!({
            "scenario": 7,
            "seed": "forty-two",
            "details": [1, 2, 3]
        }));
        assert_eq!(record.scenario, None);
        assert_eq!(record.seed, None);
        assert!(record.details.is_empty());
    }
}
