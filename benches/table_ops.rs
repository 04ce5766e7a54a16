use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_table_tools::processing::{
    left_join, project, sort_by_column, unique_records, unique_values, Projection,
};
use rust_table_tools::types::Table;

fn primary(n: usize) -> Table {
    let header = vec!["id".to_string(), "name".to_string(), "group".to_string()];
    let rows = (0..n)
        .map(|i| vec![format!("{}", (i * 7919) % n), format!("row{i}"), format!("g{}", i % 97)])
        .collect();
    Table::new(header, rows)
}

fn foreign(n: usize) -> Table {
    let header = vec!["key".to_string(), "score".to_string(), "flag".to_string()];
    let rows = (0..n)
        .map(|i| vec![format!("{}", i % (n / 2).max(1)), format!("{i}"), "y".to_string()])
        .collect();
    Table::new(header, rows)
}

fn bench_table_ops(c: &mut Criterion) {
    let p = primary(20_000);
    let f = foreign(20_000);

    c.bench_function("left_join_20k", |b| {
        b.iter(|| left_join(black_box(p.clone()), black_box(&f), "id", "key").unwrap())
    });

    c.bench_function("sort_20k", |b| {
        b.iter(|| sort_by_column(black_box(p.clone()), "id").unwrap())
    });

    c.bench_function("unique_records_20k", |b| {
        b.iter(|| unique_records(black_box(p.clone()), "group").unwrap())
    });

    c.bench_function("unique_values_20k", |b| {
        b.iter(|| unique_values(black_box(&p), "group").unwrap())
    });

    c.bench_function("project_keep_20k", |b| {
        b.iter(|| project(black_box(&p), &["id", "group"], Projection::Keep).unwrap())
    });
}

criterion_group!(benches, bench_table_ops);
criterion_main!(benches);
