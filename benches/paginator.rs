//! Benchmarks for mik-paginate page bookkeeping and fetching.
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mik_paginate::{MemoryQuery, Paginator};
use std::hint::black_box;

fn bench_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("totals");

    for size in [1_000u64, 100_000] {
        let query: MemoryQuery<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("count_cold", size), &query, |b, q| {
            b.iter(|| {
                let paginator = Paginator::new(q.clone(), 25);
                black_box(paginator.count().unwrap())
            })
        });
        group.bench_with_input(BenchmarkId::new("count_memoized", size), &query, |b, q| {
            let paginator = Paginator::new(q.clone(), 25);
            paginator.count().unwrap();
            b.iter(|| black_box(paginator.count().unwrap()))
        });
    }

    group.finish();
}

fn bench_page_fetch(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_fetch");

    let query: MemoryQuery<u64> = (0..100_000u64).collect();
    let paginator = Paginator::new(query, 25);
    paginator.total_pages().unwrap();

    group.bench_function("first_page", |b| {
        b.iter(|| black_box(paginator.page(black_box(1)).unwrap().len()))
    });
    group.bench_function("middle_page", |b| {
        b.iter(|| black_box(paginator.page(black_box(2_000)).unwrap().len()))
    });
    group.bench_function("page_from_string", |b| {
        b.iter(|| black_box(paginator.page(black_box("2000")).unwrap().len()))
    });

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    let query: MemoryQuery<u64> = (0..10_000u64).collect();
    let paginator = Paginator::new(query, 100);

    group.bench_function("walk_all_pages", |b| {
        b.iter(|| {
            let mut records = 0usize;
            for page in paginator.pages() {
                records += page.unwrap().len();
            }
            black_box(records)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_totals, bench_page_fetch, bench_iteration);
criterion_main!(benches);
