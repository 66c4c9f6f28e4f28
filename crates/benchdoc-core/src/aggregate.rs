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

//! Grouped statistics over the flat table.
//!
//! Two reductions are needed by the report:
//!
//! - `totalTime` per (scenario, strategy): mean, sample standard deviation,
//!   min and max, rounded to two decimals.
//! - Per-module means for one strategy, restricted to measured modules.

use crate::frame::FlatTable;
use crate::table::{Column, DataTable};
use serde::Serialize;
use std::collections::BTreeMap;

/// Row label header of the overall summary table.
pub const SUMMARY_INDEX_NAME: &str = "Scenario / Strategy";

/// Descriptive statistics of one group's `totalTime`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeStats {
    /// Number of measured samples.
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1); `None` with fewer than two samples.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl TimeStats {
    /// Computes statistics over the measured values, rounded to two decimals.
    pub fn from_samples(samples: &[f64]) -> Self {
        let count = samples.len();
        if count == 0 {
            return Self {
                count,
                mean: None,
                std: None,
                min: None,
                max: None,
            };
        }

        let mean = samples.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance =
                samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            Some(round2(variance.sqrt()))
        } else {
            None
        };
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            count,
            mean: Some(round2(mean)),
            std,
            min: Some(round2(min)),
            max: Some(round2(max)),
        }
    }
}

/// `totalTime` statistics for one (scenario, strategy) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub scenario: String,
    pub strategy: String,
    #[serde(flatten)]
    pub stats: TimeStats,
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Groups records by (scenario, strategy) and summarizes `totalTime`.
///
/// Records without a scenario or strategy are not grouped. Rows come out
/// sorted by scenario, then strategy.
pub fn summarize_total_time(table: &FlatTable) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<(String, String), Vec<f64>> = BTreeMap::new();

    for record in table.records() {
        let (Some(scenario), Some(strategy)) = (&record.scenario, &record.strategy) else {
            continue;
        };
        let samples = groups
            .entry((scenario.clone(), strategy.clone()))
            .or_default();
        if let Some(time) = record.total_time {
            samples.push(time);
        }
    }

    groups
        .into_iter()
        .map(|((scenario, strategy), samples)| SummaryRow {
            scenario,
            strategy,
            stats: TimeStats::from_samples(&samples),
        })
        .collect()
}

/// Lays summary rows out as a table with `mean`, `std`, `min`, `max` columns.
pub fn summary_table(rows: &[SummaryRow]) -> DataTable {
    let index = rows
        .iter()
        .map(|r| format!("{} / {}", r.scenario, r.strategy))
        .collect();
    let column = |name: &str, pick: fn(&TimeStats) -> Option<f64>| {
        Column::numeric(name, rows.iter().map(|r| pick(&r.stats)).collect())
    };

    DataTable {
        index_name: Some(SUMMARY_INDEX_NAME.to_string()),
        index,
        columns: vec![
            column("mean", |s| s.mean),
            column("std", |s| s.std),
            column("min", |s| s.min),
            column("max", |s| s.max),
        ],
    }
}

/// Mean of each listed column over `table`, rounded to two decimals.
///
/// Columns with no measured value are dropped, never reported as zero.
/// Output keeps the order of `columns`.
pub fn module_means(table: &FlatTable, columns: &[String]) -> Vec<(String, f64)> {
    columns
        .iter()
        .filter_map(|name| {
            let samples: Vec<f64> = table.column(name).flatten().collect();
            if samples.is_empty() {
                None
            } else {
                let mean = samples.iter().sum::<f64>() / samples.len() as f64;
                Some((name.clone(), round2(mean)))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BenchmarkRecord;

    fn record(
        scenario: Option<&str>,
        strategy: &str,
        total: Option<f64>,
        details: &[(&str, f64)],
    ) -> BenchmarkRecord {
        BenchmarkRecord {
            scenario: scenario.map(str::to_string),
            seed: None,
            strategy: Some(strategy.to_string()),
            total_time: total,
            details: details
                .iter()
                .map(|(k, v)| (k.to_string(), Some(*v)))
                .collect(),
        }
    }

    #[test]
    fn test_time_stats() {
        let stats = TimeStats::from_samples(&[10.0, 20.0, 30.0]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, Some(20.0));
        assert_eq!(stats.std, Some(10.0));
        assert_eq!(stats.min, Some(10.0));
        assert_eq!(stats.max, Some(30.0));
    }

    #[test]
    fn test_time_stats_single_sample_has_no_std() {
        let stats = TimeStats::from_samples(&[4.0]);
        assert_eq!(stats.mean, Some(4.0));
        assert_eq!(stats.std, None);
    }

    #[test]
    fn test_time_stats_empty() {
        let stats = TimeStats::from_samples(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, None);
    }

    #[test]
    fn test_summarize_groups_sorted() {
        let table = FlatTable::from_records(vec![
            record(Some("Small"), "Bus-Channel", Some(2.0), &[]),
            record(Some("Small"), "A-Star", Some(1.0), &[]),
            record(Some("Large (Standard)"), "A-Star", Some(10.0), &[]),
            record(Some("Small"), "A-Star", Some(3.0), &[]),
            record(None, "A-Star", Some(99.0), &[]),
        ]);
        let rows = summarize_total_time(&table);
        let keys: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.scenario.as_str(), r.strategy.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Large (Standard)", "A-Star"),
                ("Small", "A-Star"),
                ("Small", "Bus-Channel")
            ]
        );
        assert_eq!(rows[1].stats.mean, Some(2.0));
        assert_eq!(rows[1].stats.count, 2);
    }

    #[test]
    fn test_summary_table_layout() {
        let rows = vec![SummaryRow {
            scenario: "Small".to_string(),
            strategy: "A-Star".to_string(),
            stats: TimeStats::from_samples(&[1.0, 3.0]),
        }];
        let table = summary_table(&rows);
        assert_eq!(table.index, vec!["Small / A-Star"]);
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["mean", "std", "min", "max"]);
        assert_eq!(table.value("Small / A-Star", "mean"), Some(2.0));
        assert_eq!(table.value("Small / A-Star", "std"), Some(1.41));
    }

    #[test]
    fn test_module_means_drop_unmeasured() {
        let table = FlatTable::from_records(vec![
            record(Some("L"), "Greedy", None, &[("Placement", 10.0), ("Routing", 20.0)]),
            record(Some("L"), "Greedy", None, &[("Placement", 30.0), ("Routing", 40.0)]),
        ]);
        let columns = vec![
            "Placement".to_string(),
            "Routing".to_string(),
            "Post-Process".to_string(),
        ];
        let means = module_means(&table, &columns);
        assert_eq!(
            means,
            vec![("Placement".to_string(), 20.0), ("Routing".to_string(), 30.0)]
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(1.004), 1.0);
    }
}
