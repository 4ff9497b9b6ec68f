use criterion::{black_box, criterion_group, criterion_main, Criterion};
use khl_quiz_engine::{check, default_clubs, Athlete, MatchEngine, TaskGenerator};
use std::collections::HashSet;

const FIRST: &[&str] = &["Иван", "Сергей", "Пётр", "Илья", "Алексей", "Евгений", "Дмитрий"];
const LAST: &[&str] = &["Петров", "Мозякин", "Иванов", "Ковальчук", "Радулов", "Кузнецов", "Орлов"];

fn create_test_roster(count: usize) -> Vec<Athlete> {
    let clubs = default_clubs();
    (0..count)
        .map(|i| {
            let name = format!("{} {} {}", FIRST[i % FIRST.len()], LAST[(i / FIRST.len()) % LAST.len()], i);
            let teams = format!("{}/{}", clubs[i % clubs.len()].name, clubs[(i * 7 + 3) % clubs.len()].name);
            Athlete::new(name, [teams]).with_top_league(i % 3 == 0)
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let engine = MatchEngine::new();
    let excluded = HashSet::new();

    let roster_100 = create_test_roster(100);
    let roster_1000 = create_test_roster(1_000);
    let roster_10000 = create_test_roster(10_000);

    c.bench_function("search_100", |b| {
        b.iter(|| black_box(engine.search("мозякин", &roster_100, &excluded)));
    });

    c.bench_function("search_1000", |b| {
        b.iter(|| black_box(engine.search("мозякин", &roster_1000, &excluded)));
    });

    c.bench_function("search_10000_fuzzy", |b| {
        b.iter(|| black_box(engine.search("сергей мазякен", &roster_10000, &excluded)));
    });
}

fn bench_tasks(c: &mut Criterion) {
    let clubs = default_clubs();
    let roster = create_test_roster(1_000);
    let mut generator = TaskGenerator::with_seed(1);

    c.bench_function("generate_and_check_1000", |b| {
        b.iter(|| {
            let task = generator.next(&clubs).unwrap();
            black_box(roster.iter().filter(|a| check(a, &task)).count())
        });
    });
}

criterion_group!(benches, bench_search, bench_tasks);
criterion_main!(benches);
