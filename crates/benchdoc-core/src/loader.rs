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

//! Reading and flattening the raw results file.

use crate::error::{CoreError, Result};
use crate::frame::FlatTable;
use crate::record::BenchmarkRecord;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads a file into a string, rejecting files larger than `max_size`
/// before any allocation happens.
pub fn read_input(path: &Path, max_size: u64) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| CoreError::io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(CoreError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max: max_size,
        });
    }

    fs::read_to_string(path).map_err(|e| CoreError::io_error(path, e))
}

/// Parses raw results JSON into a [`FlatTable`].
///
/// Malformed JSON, a non-array document and an empty array are all reported
/// as [`CoreError::NoData`]; individual records are read permissively.
pub fn parse_results(content: &str, source: &Path) -> Result<FlatTable> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| CoreError::no_data(source, format!("invalid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(CoreError::no_data(
                source,
                format!("expected an array of records, found {}", json_kind(&other)),
            ))
        }
    };

    if items.is_empty() {
        return Err(CoreError::no_data(source, "results array is empty"));
    }

    let records = items.iter().map(BenchmarkRecord::from_json).collect();
    Ok(FlatTable::from_records(records))
}

/// Reads and parses a results file.
pub fn load_results(path: &Path, max_size: u64) -> Result<FlatTable> {
    info!(path = %path.display(), "loading benchmark results");
    let content = read_input(path, max_size)?;
    let table = parse_results(&content, path)?;
    info!(
        records = table.len(),
        modules = table.module_columns().len(),
        "benchmark results loaded"
    );
    Ok(table)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
