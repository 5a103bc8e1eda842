//! Benchmarks for extscan
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_store_record(c: &mut Criterion) {
    use extscan::store::ScanStore;

    c.bench_function("store_record", |b| {
        let store = ScanStore::new(None);
        b.iter(|| {
            store
                .record(black_box("/data/projects/src/module/file.rs"))
                .unwrap();
        })
    });
}

fn benchmark_report_formatting(c: &mut Criterion) {
    use extscan::report;

    // Alternating extensions keep the group machinery busy.
    let paths: Vec<String> = (0..10_000)
        .map(|i| match i % 3 {
            0 => format!("/data/file_{i}.txt"),
            1 => format!("/data/file_{i}.md"),
            _ => format!("/data/file_{i}"),
        })
        .collect();

    c.bench_function("report_10k_paths", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            report::write_report(&mut out, &paths).unwrap();
            black_box(out);
        })
    });
}

criterion_group!(benches, benchmark_store_record, benchmark_report_formatting);
criterion_main!(benches);
