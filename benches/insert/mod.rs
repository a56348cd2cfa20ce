use bstree::Tree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to insert `n_values` number of randomly generated
/// values into an empty tree one at a time, and to build a balanced tree from
/// the same values in one step.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        bench: "insert",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Values inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (Tree::new(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    t.insert(rand.next());
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });

    let bench_name = BenchName {
        bench: "build",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Values inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || {
                let mut rand = Lfsr::default();
                (0..n_values).map(|_| rand.next()).collect::<Vec<_>>()
            },
            Tree::build,
            criterion::BatchSize::PerIteration,
        );
    });
}
