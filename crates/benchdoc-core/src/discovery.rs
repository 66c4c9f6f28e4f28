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

//! Locating benchmark runs on disk.
//!
//! The harness writes one directory per run, named
//! `YYYY-MM-DD_HH-MM-SS`, so a descending lexicographic sort puts the newest
//! run first.

use crate::config::{ReportConfig, FALLBACK_RESULTS_FILE};
use crate::error::{CoreError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lists run directories under `root`, newest first.
pub fn list_runs(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(CoreError::ResultsDirNotFound {
            path: root.to_path_buf(),
        });
    }

    let entries = fs::read_dir(root).map_err(|e| CoreError::io_error(root, e))?;
    let mut runs: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();

    runs.sort_by(|a, b| b.cmp(a));
    Ok(runs)
}

/// Picks the newest run, or the newest run whose name starts with `prefix`.
pub fn select_run(root: &Path, prefix: Option<&str>) -> Result<PathBuf> {
    let runs = list_runs(root)?;

    let selected = match prefix {
        Some(p) => runs.into_iter().find(|run| run.starts_with(p)),
        None => runs.into_iter().next(),
    };

    match selected {
        Some(run) => {
            debug!(run = %run, "selected benchmark run");
            Ok(root.join(run))
        }
        None => Err(CoreError::RunNotFound {
            root: root.to_path_buf(),
            prefix: prefix.map(str::to_string),
        }),
    }
}

/// Resolves the results file inside a run directory.
///
/// Falls back to the harness's `benchmark-results.json` name when the
/// configured file is absent.
pub fn results_file_in(run_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = run_dir.join(file_name);
    if path.is_file() {
        return Ok(path);
    }

    let fallback = run_dir.join(FALLBACK_RESULTS_FILE);
    if file_name != FALLBACK_RESULTS_FILE && fallback.is_file() {
        debug!(path = %fallback.display(), "using fallback results file name");
        return Ok(fallback);
    }

    Err(CoreError::ResultsFileNotFound {
        run_dir: run_dir.to_path_buf(),
        file_name: file_name.to_string(),
    })
}

/// Finds the results file for the run selected by `config`.
pub fn find_results_file(config: &ReportConfig) -> Result<PathBuf> {
    let run_dir = select_run(&config.results_dir, config.run_prefix.as_deref())?;
    results_file_in(&run_dir, &config.results_file)
}
