use criterion::{Criterion, black_box, criterion_group, criterion_main};
use greeter::{format_greeting, must_format_greeting};

fn greeting_benchmark(c: &mut Criterion) {
    c.bench_function("format_greeting", |b| {
        b.iter(|| format_greeting(black_box("Benchmark")))
    });
    c.bench_function("format_greeting_default_subject", |b| {
        b.iter(|| format_greeting(black_box("")))
    });
    c.bench_function("format_greeting_blank", |b| {
        b.iter(|| format_greeting(black_box("   ")).is_err())
    });
    c.bench_function("must_format_greeting", |b| {
        b.iter(|| must_format_greeting(black_box("Benchmark")))
    });
}

criterion_group!(benches, greeting_benchmark);
criterion_main!(benches);
