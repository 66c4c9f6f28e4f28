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

//! Analyze command - JSON export of the aggregates

use super::{load_run, scenario_breakdown};
use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use benchdoc_core::aggregate::summarize_total_time;
use benchdoc_core::FlatTable;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;
use tracing::info;

/// Builds `{"overall_summary": ..., "scenario_breakdown": ...}`.
///
/// `overall_summary` is keyed by `"scenario / strategy"`;
/// `scenario_breakdown` maps each strategy of `scenario` to its module
/// averages. Key order follows the report order.
pub fn analysis_json(table: &FlatTable, scenario: &str) -> Result<Value> {
    let mut overall = Map::new();
    for row in summarize_total_time(table) {
        overall.insert(
            format!("{} / {}", row.scenario, row.strategy),
            serde_json::to_value(row.stats)?,
        );
    }

    let mut breakdown = Map::new();
    for (strategy, means) in scenario_breakdown(table, scenario) {
        let modules: Map<String, Value> = means
            .into_iter()
            .map(|(module, mean)| (module, json!(mean)))
            .collect();
        breakdown.insert(strategy, Value::Object(modules));
    }

    Ok(json!({
        "overall_summary": overall,
        "scenario_breakdown": breakdown,
    }))
}

/// Writes the analysis JSON to `output`, or stdout.
pub fn analyze(args: &InputArgs, output: Option<&Path>, pretty: bool) -> Result<()> {
    let run = load_run(args)?;
    let value = analysis_json(&run.table, &run.config.target_scenario)?;

    let mut text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    text.push('\n');

    match output {
        Some(path) => {
            fs::write(path, text).map_err(|e| CliError::io_error(path, e))?;
            info!(path = %path.display(), "analysis written");
        }
        None => print!("{}", text),
    }
    Ok(())
}
