use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quill_parser::lexer::tokenize;
use quill_parser::parser::Parser;

const STATEMENTS: &str = r#"
func clamp(n, low, high) {
    var out = n
    if n < low { var out = low } elseif high { var out = n } else { var out = high }
    return out
}
var i = 0
while i < 10 {
    print("i is", clamp(i * 2 - 3, 0, 9), -i / 2)
    var i = i + 1
}
"#;

fn program(source: &str) {
    let tokens = tokenize(source).unwrap();
    let _ast = Parser::new(tokens).parse_program().unwrap();
}

fn statement_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement-lists");

    for copies in [1, 10, 100] {
        let source = STATEMENTS.repeat(copies);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(copies), &source, |b, source| {
            b.iter(|| program(source))
        });
    }
}

fn nested_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested-calls");

    let depth = 100;
    let source = format!(
        "print({}1{})",
        "f(1 + ".repeat(depth),
        ", \"x\")".repeat(depth)
    );
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("nested-calls", |b| b.iter(|| program(&source)));
}

criterion_group!(benches, statement_lists, nested_calls);
criterion_main!(benches);
