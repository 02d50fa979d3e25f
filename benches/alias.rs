use aliasdraw::{AliasSampler, AliasTable};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::distr::Distribution;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

fn gen_weights(n: usize) -> Vec<f64> {
    let mut rng = Pcg32::seed_from_u64(777);
    (0..n).map(|_| 0.1 + rng.random::<f64>()).collect()
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_build");
    for &n in &[2usize, 8, 64, 256, 1024, 65536] {
        let weights = gen_weights(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("table_n={n}"), |b| {
            b.iter(|| black_box(AliasTable::new(black_box(&weights))).unwrap());
        });
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_draw");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &[2usize, 8, 64, 256, 1024] {
        let weights = gen_weights(n);
        let table = AliasTable::new(&weights).unwrap();
        let mut sampler = AliasSampler::new(&weights).unwrap();
        group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));

        group.bench_function(format!("sampler_draw_n={n}"), |b| {
            b.iter(|| black_box(sampler.draw(DRAWS_PER_ITER, black_box(None))));
        });

        group.bench_function(format!("table_sample_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(999),
                |rng| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= table.sample(rng);
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(alias, bench_table_build, bench_draw);
criterion_main!(alias);
