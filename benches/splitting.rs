//! Benchmarks for the splitting core.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strips::SplitRequest;

fn sample_text(size: usize) -> String {
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "How vexingly quick daft zebras jump! ",
        "The five boxing wizards jump quickly. ",
        "Sphinx of black quartz, judge my vow. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("plain", size), &text, |b, text| {
            b.iter(|| strips::split(black_box(&SplitRequest::new(text, 500))));
        });
    }

    group.finish();
}

fn bench_split_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_filtered");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("strip_whitespace", size), &text, |b, text| {
            b.iter(|| {
                strips::split(black_box(
                    &SplitRequest::new(text, 500).strip_whitespace(true),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split, bench_split_filtered);
criterion_main!(benches);
