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

//! Writing the report to disk.

use crate::assembler::{assemble, AssembleOptions};
use crate::charts::ChartDir;
use crate::context::ReportContext;
use crate::error::{ReportError, Result};
use crate::template::render;
use benchdoc_core::{aggregate, FlatTable, ReportConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Renders `context` and writes it to `path`, replacing any existing file.
pub fn export_markdown(context: &ReportContext, path: &Path) -> Result<()> {
    let document = render(context)?;
    fs::write(path, document).map_err(|e| ReportError::io_error(path, e))
}

/// Generates `report.md` for one run directory.
///
/// Charts are probed under `run_dir/<charts_dir>`. `date` defaults to the
/// run directory name. Returns the path of the written report.
pub fn generate_report(
    table: &FlatTable,
    config: &ReportConfig,
    run_dir: &Path,
    date: Option<String>,
) -> Result<PathBuf> {
    let date = date.unwrap_or_else(|| run_name(run_dir));
    let summary = aggregate::summarize_total_time(table);
    let probe = ChartDir::new(run_dir.join(&config.charts_dir));
    let options = AssembleOptions::from_config(config, date);

    let context = assemble(table, &summary, &probe, &options);

    let path = run_dir.join(&config.report_file);
    export_markdown(&context, &path)?;
    info!(path = %path.display(), "report written");
    Ok(path)
}

fn run_name(run_dir: &Path) -> String {
    run_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
