//! Declaration indexing benchmarks
//!
//! Measures indexing of already-parsed files, which is the indexer's whole
//! job; parsing is benchmarked separately so the two costs stay apart.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use declindex::{DeclIndexer, GoParser, Settings, SourceContext};
use std::hint::black_box;

/// Generate a Go file with `count` declarations of each kind
fn generate_go_code(count: usize) -> String {
    let mut code = String::from("package bench\n\n");

    for i in 0..count {
        code.push_str(&format!(
            "// Item{i} is generated.\ntype Item{i} struct {{\n\tID int\n}}\n\n\
             type Getter{i} interface {{\n\tGet() int\n}}\n\n\
             var (\n\tvalue{i}, other{i} = {i}, 0\n\t_ = value{i}\n)\n\n\
             const Limit{i} = {i}\n\n\
             func (it *Item{i}) Get() int {{\n\treturn it.ID\n}}\n\n\
             func NewItem{i}(id int) *Item{i} {{\n\treturn &Item{i}{{ID: id}}\n}}\n\n"
        ));
    }

    code
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("go_parse");

    for size in [10, 100, 1000] {
        let code = generate_go_code(size);
        group.throughput(Throughput::Bytes(code.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse_source", size), &code, |b, code| {
            let mut parser = GoParser::new().expect("Failed to create Go parser");
            b.iter(|| black_box(parser.parse_source("bench.go", black_box(code.as_str()))))
        });
    }

    group.finish();
}

fn bench_index_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("decl_index");
    let indexer = DeclIndexer::new();

    for size in [10, 100, 1000] {
        let mut parser = GoParser::new().expect("Failed to create Go parser");
        let file = parser
            .parse_source("bench.go", generate_go_code(size))
            .expect("Failed to parse generated code");
        let ctx = SourceContext::file(file);

        // Six declarations per generated item
        group.throughput(Throughput::Elements((size * 6) as u64));
        group.bench_with_input(BenchmarkId::new("index", size), &ctx, |b, ctx| {
            b.iter(|| black_box(indexer.index(black_box(ctx))))
        });
    }

    group.finish();
}

fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("decl_index_package");

    let mut parser = GoParser::new().expect("Failed to create Go parser");
    let files = (0..32)
        .map(|i| {
            parser
                .parse_source(format!("file{i}.go"), generate_go_code(50))
                .expect("Failed to parse generated code")
        })
        .collect::<Vec<_>>();
    let ctx = SourceContext::from_files(files);
    let indexer = DeclIndexer::with_settings(&Settings::default());

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(indexer.index(black_box(&ctx))))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(indexer.index_parallel(black_box(&ctx))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_index_file,
    bench_sequential_vs_parallel
);
criterion_main!(benches);
