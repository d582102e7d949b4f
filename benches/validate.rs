//! Throughput of validating and upgrading identity card numbers.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use identity_card::{compute_checksum, convert_15_to_18, validate, IdCode};

/// Generates a batch of 18-character codes, about one in eleven valid.
fn sample_codes() -> Vec<String> {
    (0..1_000u32)
        .map(|i| {
            let day = i % 28 + 1;
            let month = i % 12 + 1;
            let check = char::from_digit(i % 10, 10).unwrap_or('X');
            format!("110105{:04}{month:02}{day:02}{:03}{check}", 1950 + i % 70, i % 1000)
        })
        .collect()
}

fn validate_batch(c: &mut Criterion) {
    let codes = sample_codes();
    c.bench_function("validate 1000", |b| {
        b.iter(|| codes.iter().filter(|code| validate(black_box(code))).count());
    });
}

fn parse_batch(c: &mut Criterion) {
    let codes = sample_codes();
    c.bench_function("parse 1000", |b| {
        b.iter(|| {
            codes
                .iter()
                .filter_map(|code| black_box(code).parse::<IdCode>().ok())
                .count()
        });
    });
}

fn checksum(c: &mut Criterion) {
    c.bench_function("compute checksum", |b| {
        b.iter(|| compute_checksum(black_box("11010519491231002")));
    });
}

fn upgrade(c: &mut Criterion) {
    c.bench_function("convert 15 to 18", |b| {
        b.iter(|| convert_15_to_18(black_box("110105491231002")));
    });
}

criterion_group!(benches, validate_batch, parse_batch, checksum, upgrade);
criterion_main!(benches);
