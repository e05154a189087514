use appgen_patterns::{expand, PatternExpander};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_expand_simple(c: &mut Criterion) {
    c.bench_function("expand_simple", |b| {
        b.iter(|| expand(black_box("file1.txt, file2.txt")))
    });
}

fn benchmark_expand_groups(c: &mut Criterion) {
    let expander = PatternExpander::new();
    let input = black_box("home.(html,js), about.(html,js,css), pages\\home.(aspx, aspx.cs), File.TXT");

    c.bench_function("expand_groups", |b| b.iter(|| expander.expand(input)));
}

fn benchmark_expand_wide(c: &mut Criterion) {
    let input: String = (0..200)
        .map(|i| format!("file{}.(txt,md,json)", i % 50))
        .collect::<Vec<_>>()
        .join(", ");

    c.bench_function("expand_wide", |b| b.iter(|| expand(black_box(&input))));
}

criterion_group!(
    benches,
    benchmark_expand_simple,
    benchmark_expand_groups,
    benchmark_expand_wide
);
criterion_main!(benches);
