use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use csvtranspose::Transposer;
use std::fmt::Write as _;
use tempfile::TempDir;

fn matrix_file(dir: &TempDir, rows: usize, cols: usize) -> std::path::PathBuf {
    let path = dir.path().join(format!("matrix_{}x{}.csv", rows, cols));
    let mut content = String::new();
    for r in 0..rows {
        for c in 0..cols {
            if c > 0 {
                content.push(',');
            }
            write!(content, "{}", r * cols + c).unwrap();
        }
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();
    path
}

fn benchmark_tall(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose_tall");

    for size in [100, 1000, 10000].iter() {
        let dir = tempfile::tempdir().unwrap();
        let input = matrix_file(&dir, *size, 10);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let output = dir.path().join("out.csv");
                Transposer::new().run(&input, &output).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose_wide");

    for size in [100, 1000, 10000].iter() {
        let dir = tempfile::tempdir().unwrap();
        let input = matrix_file(&dir, 10, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let output = dir.path().join("out.csv");
                Transposer::new().run(&input, &output).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose_square");

    for size in [100, 500].iter() {
        let dir = tempfile::tempdir().unwrap();
        let input = matrix_file(&dir, *size, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let output = dir.path().join("out.csv");
                Transposer::new().run(&input, &output).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_tall, benchmark_wide, benchmark_square);
criterion_main!(benches);
