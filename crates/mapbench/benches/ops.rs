// Mapbench - Key-Value Map Micro-Benchmarks
//
// Copyright (c) 2026 Mapbench contributors.
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

//! Criterion benchmarks over the operation suite, as a statistically
//! rigorous complement to the harness's own min/max/mean trials.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mapbench::{MapOperationSuite, INSERTION_OPS, LOOKUP_OPS};

fn bench_insertion_patterns(c: &mut Criterion) {
    let suite = MapOperationSuite::new(&[0, 5]);
    let mut group = c.benchmark_group("insertion");

    for count in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(count as u64));
        for &op in INSERTION_OPS {
            group.bench_with_input(BenchmarkId::new(op.name(), count), &count, |b, &n| {
                b.iter(|| suite.run(op, n, false).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_lookup_patterns(c: &mut Criterion) {
    let suite = MapOperationSuite::new(&[0, 5]);
    let mut group = c.benchmark_group("lookup");

    for count in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(count as u64));
        for &op in LOOKUP_OPS {
            group.bench_with_input(BenchmarkId::new(op.name(), count), &count, |b, &n| {
                b.iter(|| suite.run(op, n, false).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_insertion_patterns, bench_lookup_patterns);
criterion_main!(benches);
