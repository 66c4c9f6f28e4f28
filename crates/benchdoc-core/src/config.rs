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

//! Report configuration.
//!
//! Defaults match the layout produced by the benchmark harness:
//! `analysis/results/<YYYY-MM-DD_HH-MM-SS>/raw_results.json`, with the report
//! written next to the results file and charts under `charts/`.
//!
//! # Example
//!
//! ```no_run
//! use benchdoc_core::config::ReportConfig;
//!
//! let config = ReportConfig::from_env()
//!     .with_target_scenario("Medium")
//!     .with_run_prefix("2025-06-01");
//! ```

use crate::error::{CoreError, Result};
use std::path::PathBuf;

/// Default results root, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "analysis/results";

/// Results file read from each run directory.
pub const DEFAULT_RESULTS_FILE: &str = "raw_results.json";

/// Alternate results file name accepted when the default is absent.
pub const FALLBACK_RESULTS_FILE: &str = "benchmark-results.json";

/// Report file written into the run directory.
pub const DEFAULT_REPORT_FILE: &str = "report.md";

/// Chart subdirectory inside the run directory.
pub const DEFAULT_CHARTS_DIR: &str = "charts";

/// Scenario the module breakdown is generated for.
pub const DEFAULT_TARGET_SCENARIO: &str = "Large (Standard)";

/// Default maximum input size (1 GB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding the results root.
pub const ENV_RESULTS_DIR: &str = "BENCHDOC_RESULTS_DIR";

/// Environment variable overriding the maximum input size (bytes).
pub const ENV_MAX_FILE_SIZE: &str = "BENCHDOC_MAX_FILE_SIZE";

/// Configuration for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory holding one subdirectory per benchmark run.
    pub results_dir: PathBuf,
    /// Results file name inside a run directory.
    pub results_file: String,
    /// Report file name inside a run directory.
    pub report_file: String,
    /// Chart directory name inside a run directory.
    pub charts_dir: String,
    /// Scenario used for the per-strategy breakdown.
    pub target_scenario: String,
    /// Select the newest run whose name starts with this prefix.
    pub run_prefix: Option<String>,
    /// Inputs larger than this are rejected before reading.
    pub max_file_size: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            results_file: DEFAULT_RESULTS_FILE.to_string(),
            report_file: DEFAULT_REPORT_FILE.to_string(),
            charts_dir: DEFAULT_CHARTS_DIR.to_string(),
            target_scenario: DEFAULT_TARGET_SCENARIO.to_string(),
            run_prefix: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl ReportConfig {
    /// Defaults, overridden by `BENCHDOC_RESULTS_DIR` and
    /// `BENCHDOC_MAX_FILE_SIZE` when set. Unparseable sizes are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(ENV_RESULTS_DIR) {
            if !dir.is_empty() {
                config.results_dir = PathBuf::from(dir);
            }
        }
        if let Some(size) = std::env::var(ENV_MAX_FILE_SIZE)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.max_file_size = size;
        }
        config
    }

    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }

    pub fn with_results_file(mut self, name: impl Into<String>) -> Self {
        self.results_file = name.into();
        self
    }

    pub fn with_target_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.target_scenario = scenario.into();
        self
    }

    pub fn with_run_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.run_prefix = Some(prefix.into());
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Checks values that would otherwise fail later with a confusing error.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("results_file", &self.results_file),
            ("report_file", &self.report_file),
            ("charts_dir", &self.charts_dir),
        ] {
            if value.is_empty() || value.contains('/') || value.contains('\\') {
                return Err(CoreError::InvalidConfig {
                    parameter: parameter.to_string(),
                    reason: format!("'{}' must be a plain file name", value),
                });
            }
        }
        if self.target_scenario.is_empty() {
            return Err(CoreError::InvalidConfig {
                parameter: "target_scenario".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.max_file_size == 0 {
            return Err(CoreError::InvalidConfig {
                parameter: "max_file_size".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
