use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polyglot_dataframe::catalog::Catalog;
use polyglot_dataframe::functions::{self, col, Column, Value};

const NAMES: [&str; 4] = ["upper", "round", "lag", "concat_ws"];

fn args_for(name: &str) -> Vec<Value> {
    match name {
        "upper" => vec!["name".into()],
        "round" => vec!["price".into(), 2.into()],
        "lag" => vec!["price".into(), Value::Null, 0.into()],
        _ => vec!["-".into(), "a".into(), "b".into(), "c".into()],
    }
}

fn bench_dynamic_call(c: &mut Criterion) {
    let catalog = Catalog::global();
    let mut group = c.benchmark_group("catalog_call");

    for name in NAMES {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, name| {
            b.iter(|| catalog.call(black_box(name), args_for(name)))
        });
    }

    group.finish();
}

fn bench_free_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_function");

    group.bench_function("upper", |b| b.iter(|| functions::upper(black_box("name"))));
    group.bench_function("round", |b| {
        b.iter(|| functions::round(black_box("price"), Some(2)))
    });
    group.bench_function("transform", |b| {
        b.iter(|| functions::transform(black_box("xs"), |x: Column| x * 2 + 1))
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let exact = Catalog::global();
    c.bench_function("lookup_alias", |b| {
        b.iter(|| exact.canonical_name(black_box("shiftRightUnsigned")))
    });
    c.bench_function("lookup_folded", |b| {
        b.iter(|| exact.canonical_name(black_box("APPROX_COUNT_DISTINCT")))
    });
}

fn bench_nested_expression(c: &mut Criterion) {
    c.bench_function("nested_when", |b| {
        b.iter(|| {
            let mut case = functions::when(col("a").eq(0), "zero");
            for i in 1..10 {
                case = case.when(col("a").eq(i), i).unwrap_or_else(|_| col("a"));
            }
            black_box(case)
        })
    });
}

criterion_group!(
    benches,
    bench_dynamic_call,
    bench_free_functions,
    bench_lookup,
    bench_nested_expression
);
criterion_main!(benches);
