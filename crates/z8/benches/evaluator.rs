//! Benchmarks for expression evaluation.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use z8::{Engine, Evaluator};

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let engine = Engine::standard();
    let eval = Evaluator::new(&engine);

    let cases = [
        ("literal", "hgfedcb"),
        ("precedence", "b + g * d - h"),
        ("nested", "-((b + g) * (d - (h + e))) * f"),
        ("division_chain", "cccc / g / g / g"),
        ("whitespace", "   b   +   b   "),
    ];

    for (name, expr) in cases {
        group.throughput(Throughput::Bytes(expr.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(eval.evaluate(black_box(expr))));
        });
    }

    group.bench_function("syntax_error", |b| {
        b.iter(|| black_box(eval.evaluate(black_box("b + (g * d"))));
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
