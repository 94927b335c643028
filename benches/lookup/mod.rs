use std::hint::black_box;

use bstmap::BstMap;
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
    n_lookups: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(
            format!("{}_values_{}_n_lookups", v.n_values, v.bench),
            v.n_lookups,
        )
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("lookup");

    // Map size
    for n_values in [1_000, 10_000] {
        // Number of key lookups
        for n_lookups in [100, 1_000] {
            // The map must be at least as big as the number of lookups.
            assert!(n_values >= n_lookups);

            bench_contains_key(&mut g, n_values, n_lookups);
            bench_get(&mut g, n_values, n_lookups);
        }
    }
}

/// For a map containing `n_values`, perform two benchmarks that each perform
/// `n_lookups` of the named method, one run causing all hits, one run causing
/// all misses.
macro_rules! lookup_bench {
    ($name:ident) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(
                g: &mut BenchmarkGroup<'_, M>,
                n_values: usize,
                n_lookups: usize,
            ) where
                M: Measurement,
            {
                // Generate the map.
                let mut rand = Lfsr::default();
                let mut t = BstMap::default();

                for _i in 0..n_values {
                    let key = rand.next();
                    t.insert(key, 42_usize);
                }

                let bench_name = BenchName {
                    bench: concat!(stringify!($name), "_misses"),
                    n_values,
                    n_lookups,
                };

                // Perform a benchmark that looks up random keys that do not
                // exist in the map.
                g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        // Provide the LFSR state after inserting n_values.
                        //
                        // It will now generate n_lookups of different keys.
                        || rand.clone(),
                        |mut rand| {
                            for _ in 0..n_lookups {
                                let key = rand.next();
                                black_box(t.$name(&key));
                            }
                        },
                        BatchSize::SmallInput,
                    )
                });

                let bench_name = BenchName {
                    bench: concat!(stringify!($name), "_hits"),
                    n_values,
                    n_lookups,
                };

                // Perform a benchmark that re-visits the inserted keys.
                g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        // Reset the LFSR.
                        //
                        // It will now generate the same sequence of random
                        // keys as what was inserted into the map originally.
                        Lfsr::default,
                        |mut rand| {
                            for _ in 0..n_lookups {
                                let key = rand.next();
                                black_box(t.$name(&key));
                            }
                        },
                        BatchSize::SmallInput,
                    )
                });
            }
        }
    };
}

lookup_bench!(contains_key);
lookup_bench!(get);
