// ============================================================================
// Numeral Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Resolver - Unchecked summation over growing inputs
// 2. Validator - Grammar checks on valid and rejected input
// 3. Safe Conversion - Validate + resolve vs. resolve alone
// 4. Converter - Full path with normalization and event dispatch
// ============================================================================

use alien_numerals::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

const NUMERALS: [&str; 4] = ["A", "LBAAA", "RCRZCAB", "RRRCRZCAZ"];

// ============================================================================
// Resolver Benchmarks
// ============================================================================

fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for numeral in NUMERALS {
        group.bench_with_input(BenchmarkId::new("canonical", numeral), numeral, |b, n| {
            b.iter(|| black_box(resolve(black_box(n))))
        });
    }

    // Long lenient input, linear scan
    for len in [16usize, 256, 4096] {
        let numeral: String = "RCRZCAB".chars().cycle().take(len).collect();
        group.bench_with_input(BenchmarkId::new("lenient", len), &numeral, |b, n| {
            b.iter(|| black_box(resolve(black_box(n))))
        });
    }

    group.finish();
}

// ============================================================================
// Validator Benchmarks
// ============================================================================

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for numeral in NUMERALS {
        group.bench_with_input(BenchmarkId::new("valid", numeral), numeral, |b, n| {
            b.iter(|| black_box(validate(black_box(n))))
        });
    }

    for numeral in ["AAAA", "AL", "XYZ", "RRRCRZCAL"] {
        group.bench_with_input(BenchmarkId::new("rejected", numeral), numeral, |b, n| {
            b.iter(|| black_box(validate(black_box(n))))
        });
    }

    group.finish();
}

// ============================================================================
// Safe Conversion Benchmarks
// ============================================================================

fn benchmark_safe_vs_unchecked(c: &mut Criterion) {
    let mut group = c.benchmark_group("safe_vs_unchecked");
    let numeral = "RRRCRZCAZ";

    group.bench_function("resolve", |b| b.iter(|| black_box(resolve(black_box(numeral)))));
    group.bench_function("to_integer_safe", |b| {
        b.iter(|| black_box(to_integer_safe(black_box(numeral))))
    });

    group.finish();
}

// ============================================================================
// Converter Benchmarks
// ============================================================================

fn benchmark_converter(c: &mut Criterion) {
    let mut group = c.benchmark_group("converter");

    let converter = NumeralConverterBuilder::interactive()
        .build(Arc::new(NoOpEventHandler))
        .unwrap();

    group.bench_function("interactive", |b| {
        b.iter(|| black_box(converter.convert(black_box("  rcrzcab \n"))))
    });

    group.bench_function("encode_full_range", |b| {
        b.iter(|| {
            for n in 1..=3999 {
                black_box(encode(black_box(n)).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_resolve,
    benchmark_validate,
    benchmark_safe_vs_unchecked,
    benchmark_converter,
);
criterion_main!(benches);
