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

//! Error types for report generation.

use benchdoc_core::CoreError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while assembling, rendering or writing a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A numbering level outside 2..=4 was requested.
    #[error("invalid section level {0}; expected 2 (scenario), 3 (strategy) or 4 (subsection)")]
    InvalidLevel(u8),

    /// The report template failed to compile or render.
    #[error("template error: {0}")]
    Template(String),

    /// Writing the report failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path being written
        path: PathBuf,
        /// The underlying error message
        message: String,
    },

    /// Loading or discovery failed upstream.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ReportError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<minijinja::Error> for ReportError {
    fn from(err: minijinja::Error) -> Self {
        ReportError::Template(err.to_string())
    }
}
