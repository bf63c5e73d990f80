// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


use arbor_bnb::config::BnbSolverConfig;
use arbor_bnb::monitor::no_op::NoOperationMonitor;
use arbor_graph::index::VertexIndex;
use arbor_graph::simple::{GraphBuilder, SimpleGraph};
use arbor_mis::problem::{ChoiceHeuristic, MisBound, MisOptions};
use arbor_mis::solve::solve_with;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

fn vi(i: usize) -> VertexIndex {
    VertexIndex::new(i)
}

fn random_graph(seed: u64, n: usize, density: f64) -> SimpleGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(density) {
                builder.add_edge(vi(u), vi(v));
            }
        }
    }
    builder.build()
}

fn bench_random_graphs(c: &mut Criterion) {
    let variants = [
        (
            "min_degree",
            MisOptions::new(),
        ),
        (
            "eligible_count",
            MisOptions::new().with_bound(MisBound::EligibleCount),
        ),
        (
            "first_eligible",
            MisOptions::new().with_heuristic(ChoiceHeuristic::FirstEligible),
        ),
    ];

    let mut group = c.benchmark_group("mis_benchmark");

    for &n in &[20usize, 30, 40] {
        let graph = random_graph(0xA7B0 + n as u64, n, 0.3);
        group.throughput(Throughput::Elements(n as u64));

        for (label, options) in variants {
            group.bench_with_input(BenchmarkId::new(label, n), &graph, |b, graph| {
                b.iter(|| {
                    let outcome = solve_with(
                        black_box(graph),
                        options,
                        BnbSolverConfig::default(),
                        NoOperationMonitor::new(),
                    );
                    if !outcome.is_optimal() {
                        panic!("Benchmark configuration error: search stopped without a monitor.");
                    }
                    black_box(outcome.incumbent().value())
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_random_graphs);
criterion_main!(benches);
