use criterion::{criterion_group, criterion_main, Criterion};
use quill_eval::Interpreter;
use quill_parser::lexer::tokenize;
use quill_parser::parser::Parser;
use quill_value::{BuiltinFns, MemoryHost};

const SUMN: &str = r#"
func sumn(count) {
    var total = 0
    var i = 1
    while i < count + 1 {
        var total = total + i
        var i = i + 1
    }
    return total
}
var result = sumn(sumn(sumn(10)))
"#;

fn sumn(c: &mut Criterion) {
    let ast = Parser::new(tokenize(SUMN).unwrap()).parse_program().unwrap();
    let builtins = BuiltinFns::new();

    c.bench_function("sumn", |b| {
        b.iter(|| {
            let mut host = MemoryHost::new();
            let mut interpreter = Interpreter::new(&builtins, &mut host);
            interpreter.interpret(&ast).unwrap();
        })
    });
}

criterion_group!(benches, sumn);
criterion_main!(benches);
