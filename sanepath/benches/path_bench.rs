use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;

use sanepath::path::{extend, split_path, DirProbe};
use sanepath::{sanitize_path, SanitizeOptions, Shell};

/// Probe that approves every path, keeping the benchmark off the filesystem.
struct YesProbe;

impl DirProbe for YesProbe {
    fn is_dir(&self, _path: &Path) -> bool {
        true
    }
}

fn bench_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("extend");

    let dirs = vec!["/usr/local".to_string(), "/opt/homebrew".to_string()];

    // Benchmark a clean path
    group.bench_function("clean_path", |b| {
        b.iter(|| {
            extend(
                black_box("/usr/bin:/bin:/usr/sbin:/sbin"),
                true,
                black_box(&dirs),
                true,
                &YesProbe,
            )
        });
    });

    // Benchmark a path full of separator artifacts
    group.bench_function("messy_path", |b| {
        b.iter(|| {
            extend(
                black_box(":::///usr///bin::://bin:::"),
                true,
                black_box(&dirs),
                false,
                &YesProbe,
            )
        });
    });

    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    group.bench_function("no_duplicates", |b| {
        b.iter(|| split_path(black_box("/usr/bin:/bin:/usr/sbin:/sbin")));
    });

    group.bench_function("heavy_duplicates", |b| {
        let path = "/usr/bin:/bin:".repeat(16);
        b.iter(|| split_path(black_box(&path)));
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let options = SanitizeOptions::new(Shell::Bash);
    let dirs = vec!["/usr/local".to_string()];

    c.bench_function("sanitize_path", |b| {
        b.iter(|| {
            sanitize_path(
                black_box("/usr/bin:/bin:/usr/bin::/sbin"),
                black_box(&dirs),
                &options,
                &YesProbe,
            )
        });
    });
}

criterion_group!(benches, bench_extend, bench_split, bench_pipeline);
criterion_main!(benches);
