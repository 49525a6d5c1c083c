use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tern_engine::syntax::ast::{BinaryOperator, Module, Statement};
use tern_engine::{lower, AstBuilder, Interner};

/// A module with `functions` top-level functions, each calling the next one
/// before it is declared and running a small counting loop.
fn generate(functions: usize) -> (Module, Interner) {
    let b = AstBuilder::new();
    let mut statements: Vec<Statement> = Vec::with_capacity(functions + 1);

    for index in 0..functions {
        let name = format!("f{}", index);
        let next = format!("f{}", (index + 1) % functions.max(1));
        let body = vec![
            b.let_decl("i", Some(b.type_ref("i32")), Some(b.name("n"))),
            b.while_(
                b.name("i"),
                vec![
                    b.expr_stmt(b.assign(
                        b.name("i"),
                        b.binary(BinaryOperator::Subtract, b.name("i"), b.int(1)),
                    )),
                    b.if_(
                        b.binary(BinaryOperator::Equal, b.name("i"), b.int(0)),
                        vec![b.expr_stmt(b.call(b.name(&next), vec![b.name("i")]))],
                        None,
                    ),
                ],
            ),
        ];
        statements.push(b.function(&name, vec![b.param("n", Some(b.type_ref("i64")))], body));
    }
    statements.push(b.expr_stmt(b.call(b.name("f0"), vec![b.int(10)])));

    let module = b.module(statements);
    (module, b.into_interner())
}

fn bench_lower_small(c: &mut Criterion) {
    let b = AstBuilder::new();
    let module = b.module(vec![
        b.let_decl("x", None, None),
        b.let_decl("y", None, None),
        b.expr_stmt(b.assign(
            b.name("x"),
            b.binary(BinaryOperator::Add, b.paren(b.assign(b.name("y"), b.int(5))), b.int(1)),
        )),
    ]);
    let interner = b.into_interner();

    c.bench_function("lower_nested_assignment", |bench| {
        bench.iter(|| lower(black_box(&module), &interner))
    });
}

fn bench_lower_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("functions");

    for count in [10usize, 100, 1000] {
        let (module, interner) = generate(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &module, |bench, module| {
            bench.iter(|| lower(black_box(module), &interner))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lower_small, bench_lower_functions);
criterion_main!(benches);
