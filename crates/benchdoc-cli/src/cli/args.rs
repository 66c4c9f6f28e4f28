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

//! Arguments shared by every command.

use crate::error::Result;
use benchdoc_core::ReportConfig;
use clap::Args;
use std::path::PathBuf;

/// Where to read benchmark results from.
///
/// Without `--input`, the newest run under the results directory is used.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Results root holding one directory per run [env: BENCHDOC_RESULTS_DIR]
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Use the newest run whose name starts with PREFIX (e.g. 2025-06-01)
    #[arg(long, value_name = "PREFIX")]
    pub run: Option<String>,

    /// Read this results file directly, skipping run discovery
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["results_dir", "run"])]
    pub input: Option<PathBuf>,

    /// Scenario broken down per strategy
    #[arg(short, long, value_name = "NAME")]
    pub scenario: Option<String>,

    /// Reject inputs larger than BYTES [env: BENCHDOC_MAX_FILE_SIZE]
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,
}

impl InputArgs {
    /// Environment defaults overridden by explicit flags.
    pub fn config(&self) -> Result<ReportConfig> {
        let mut config = ReportConfig::from_env();
        if let Some(dir) = &self.results_dir {
            config = config.with_results_dir(dir);
        }
        if let Some(prefix) = &self.run {
            config = config.with_run_prefix(prefix);
        }
        if let Some(scenario) = &self.scenario {
            config = config.with_target_scenario(scenario);
        }
        if let Some(bytes) = self.max_file_size {
            config = config.with_max_file_size(bytes);
        }
        config.validate()?;
        Ok(config)
    }
}
