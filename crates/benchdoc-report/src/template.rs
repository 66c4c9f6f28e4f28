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

//! Report template rendering.
//!
//! The template is fixed and compiled into the binary. It prints numbering
//! and caption strings exactly as the assembler produced them.

use crate::context::ReportContext;
use crate::error::Result;
use minijinja::{AutoEscape, Environment};
use tracing::debug;

const TEMPLATE_NAME: &str = "report.md";
const REPORT_TEMPLATE: &str = include_str!("../templates/report.md.j2");

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    // Tables and captions are Markdown; nothing may be HTML-escaped.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template(TEMPLATE_NAME, REPORT_TEMPLATE)?;
    Ok(env)
}

/// Renders `context` into the Markdown document.
pub fn render(context: &ReportContext) -> Result<String> {
    let env = environment()?;
    let template = env.get_template(TEMPLATE_NAME)?;
    let output = template.render(context)?;
    debug!(bytes = output.len(), "report rendered");
    Ok(output)
}
