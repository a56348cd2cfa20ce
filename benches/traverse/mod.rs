use std::hint::black_box;

use bstree::Tree;
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("traverse");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree by inserting values one at a time, leaving it
    // unbalanced.
    let mut rand = Lfsr::default();
    let mut t = Tree::new();

    for _i in 0..n_values {
        t.insert(rand.next());
    }

    bench_level_order(n_values, g, &t);
    bench_preorder(n_values, g, &t);
    bench_inorder(n_values, g, &t);
    bench_postorder(n_values, g, &t);
    bench_is_balanced(n_values, g, &t);
    bench_rebalance(n_values, g, &t);
}

macro_rules! traverse_bench {
    (
        $name:ident
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &Tree<u16>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        let iter = t.[<iter_ $name>]();
                        for v in iter {
                            black_box(v);
                        }
                    })
                });
            }
        }
    }
}

traverse_bench!(level_order);
traverse_bench!(preorder);
traverse_bench!(inorder);
traverse_bench!(postorder);

fn bench_is_balanced<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &Tree<u16>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "is_balanced",
    };

    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| black_box(t.is_balanced()))
    });
}

fn bench_rebalance<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &Tree<u16>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "rebalance",
    };

    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || t.clone(),
            |mut t| {
                t.rebalance();
                t
            },
            BatchSize::LargeInput,
        )
    });
}
