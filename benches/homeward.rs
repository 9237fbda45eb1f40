use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use homeward::prelude::*;
use std::hint::black_box;

fn evaluate_all_modes(repository: &Repository, date: NaiveDate) {
    let _ = black_box(
        repository
            .advise("yuli", date)
            .and_then(|advisor| {
                advisor
                    .departure_at(Time::from_hour(8))
                    .focus(Focus::Pain)
                    .evaluate()
            }),
    );
}

fn search_township(repository: &Repository) {
    let _ = black_box(repository.search_townships_by_name("taitung city"));
}

fn criterion_benchmark(c: &mut Criterion) {
    let repository = Repository::builtin();
    let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap_or_default();

    c.bench_function("evaluate_all_modes", |b| {
        b.iter(|| evaluate_all_modes(&repository, date))
    });
    c.bench_function("search_township", |b| {
        b.iter(|| search_township(&repository))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
