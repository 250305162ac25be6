use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kacalc::interpreter::{convert, evaluate};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let expressions = [
        "2**3".to_string(),
        "10 - 2 * 3 + 4 / 8".to_string(),
        "2 * sqrt(16) + 1".to_string(),
        "5(3+1)(2pi - e)".to_string(),
        "sin(rad(30))**2 + cos(rad(30))**2 - ln(e**2) / log(100)".to_string(),
    ];
    for expression in expressions {
        let tree_size = convert(&expression).map_or(expression.len(), |tree| tree.size());
        group.throughput(Throughput::Elements(tree_size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
