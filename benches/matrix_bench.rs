use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gabp_linalg::{det, matadd, matmul, share, DenseMatrix};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> DenseMatrix<f64> {
    DenseMatrix::from_fn(rows, cols, |_, _| rng.gen_range(-1.0..1.0))
}

fn bench_matadd(c: &mut Criterion) {
    let mut group = c.benchmark_group("matadd");
    let mut rng = StdRng::seed_from_u64(7);
    for size in [8usize, 32, 128] {
        group.throughput(Throughput::Elements((size * size) as u64));
        let a = random_matrix(&mut rng, size, size);
        let b = random_matrix(&mut rng, size, size);
        let mut dest = DenseMatrix::zeros(size, size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| matadd(&a, &b, &mut dest).unwrap());
        });
    }
    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let mut rng = StdRng::seed_from_u64(11);
    for size in [8usize, 32, 64] {
        group.throughput(Throughput::Elements((size * size * size) as u64));
        let a = random_matrix(&mut rng, size, size);
        let b = random_matrix(&mut rng, size, size);
        let mut dest = DenseMatrix::zeros(size, size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| matmul(&a, &b, &mut dest).unwrap());
        });
    }
    group.finish();
}

fn bench_det(c: &mut Criterion) {
    // Cofactor expansion is O(n!); keep n small.
    let mut group = c.benchmark_group("det");
    let mut rng = StdRng::seed_from_u64(13);
    for size in [3usize, 5, 7] {
        let m = share(random_matrix(&mut rng, size, size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| det(&m).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matadd, bench_matmul, bench_det);
criterion_main!(benches);
