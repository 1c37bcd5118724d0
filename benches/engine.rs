use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use linedb::{Predicate, Session, Table, Value};
use std::hint::black_box;

fn setup_populated_table(n: usize) -> Table {
    let mut table = Table::new("users", [("id", "int"), ("name", "varchar"), ("age", "int")])
        .unwrap();

    for i in 0..n {
        let row: IndexMap<String, Value> = [
            ("id".to_string(), Value::from(i.to_string())),
            ("name".to_string(), Value::from(format!("user{i}"))),
            ("age".to_string(), Value::from((i % 100).to_string())),
        ]
        .into_iter()
        .collect();
        table.insert(&row);
    }
    table
}

fn bench_insert_command(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert_Command_Pipeline");
    group.bench_function("insert_single_row_command", |b| {
        let mut session = Session::new();
        session.process_command("create database bench");
        session.process_command("use database bench");
        session.process_command("create table tests (id int, name varchar)");
        b.iter(|| {
            session.process_command(black_box(
                "insert into tests (id, name) values (42, 'Appleseed, John')",
            ));
        });
    });
    group.finish();
}

fn bench_select_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Select_Where_Performance");

    for n in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let table = setup_populated_table(n);
            let predicate = Predicate::new("age", "42");
            b.iter(|| {
                let rows = table.select(Some(&predicate));
                black_box(rows);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert_command, bench_select_scaling);
criterion_main!(benches);
