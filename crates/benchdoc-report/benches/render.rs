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

//! Report assembly and rendering benchmarks.
//!
//! Measures the in-memory path from a flattened table to the final Markdown
//! document for growing numbers of strategies.

use benchdoc_core::{aggregate, BenchmarkRecord, FlatTable};
use benchdoc_report::{assemble, format_as_markdown_table, render, AssembleOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const STRATEGY_COUNTS: [usize; 3] = [4, 16, 64];
const SEEDS: u32 = 10;
const ROUTING_MODULES: [&str; 4] = ["Channel Build", "A* Search", "Rip-up", "Commit"];

fn synthetic_table(strategies: usize) -> FlatTable {
    let mut records = Vec::with_capacity(strategies * SEEDS as usize);
    for s in 0..strategies {
        for seed in 0..SEEDS {
            let base = (s as f64 + 1.0) * (seed as f64 + 1.0);
            let mut details = vec![
                ("L1-Placement".to_string(), Some(base)),
                ("L1-Routing".to_string(), Some(base * 2.0)),
                ("L1-Post-Process".to_string(), Some(base * 0.5)),
            ];
            details.extend(
                ROUTING_MODULES
                    .iter()
                    .enumerate()
                    .map(|(i, m)| (m.to_string(), Some(base / (i as f64 + 1.0)))),
            );
            records.push(BenchmarkRecord {
                scenario: Some("Large (Standard)".to_string()),
                seed: Some(i64::from(seed)),
                strategy: Some(format!("Strategy {}", s)),
                total_time: Some(base * 3.5),
                details,
            });
        }
    }
    FlatTable::from_records(records)
}

fn bench_assemble_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    for &count in &STRATEGY_COUNTS {
        let table = synthetic_table(count);
        let summary = aggregate::summarize_total_time(&table);
        let options = AssembleOptions::default();
        let probe = |_: &str| true;

        group.throughput(Throughput::Elements(table.len() as u64));
        group.bench_with_input(BenchmarkId::new("assemble", count), &table, |b, table| {
            b.iter(|| assemble(black_box(table), &summary, &probe, &options))
        });

        let context = assemble(&table, &summary, &probe, &options);
        group.bench_with_input(BenchmarkId::new("render", count), &context, |b, context| {
            b.iter(|| render(black_box(context)))
        });
    }

    group.finish();
}

fn bench_summary_table(c: &mut Criterion) {
    let table = synthetic_table(64);
    let summary = aggregate::summarize_total_time(&table);
    let data = aggregate::summary_table(&summary);

    c.bench_function("format_summary_table", |b| {
        b.iter(|| format_as_markdown_table(Some(black_box(&data))))
    });
}

criterion_group!(benches, bench_assemble_and_render, bench_summary_table);
criterion_main!(benches);
