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

//! Structured error types for the benchdoc CLI.
//!
//! Library errors convert into [`CliError`] with `?`; `main` prints the
//! message and, for missing inputs, a hint on how to produce them.

use benchdoc_core::CoreError;
use benchdoc_report::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors raised while executing a command.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Locating or loading benchmark results failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Building or writing the report failed.
    #[error(transparent)]
    Report(ReportError),

    /// Writing command output failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Follow-up advice for the operator, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Core(err) if err.is_not_found() => {
                Some("Run the benchmark first to generate results.")
            }
            CliError::Report(ReportError::Core(err)) if err.is_not_found() => {
                Some("Run the benchmark first to generate results.")
            }
            CliError::Core(CoreError::FileTooLarge { .. }) => {
                Some("Raise the limit with --max-file-size or BENCHDOC_MAX_FILE_SIZE.")
            }
            _ => None,
        }
    }
}

// Flatten wrapped core errors so callers match a single variant.
impl From<ReportError> for CliError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Core(core) => CliError::Core(core),
            other => CliError::Report(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        CliError::JsonFormat {
            message: source.to_string(),
        }
    }
}
