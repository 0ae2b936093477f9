// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use abacus_radix::digits::{digit_count_and_sum, digits};
use abacus_radix::locate::locate;
use abacus_radix::log::log;
use abacus_radix::nearest::{RoundingMode, nearest_power};
use abacus_radix::pow::pow;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const MAGNITUDES: [i64; 4] = [9, 65_535, 1_000_000_007, 4_611_686_018_427_387_904];

fn bench_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("digits");
    for n in MAGNITUDES {
        for r in [2i64, 10, 62] {
            group.throughput(Throughput::Elements(1));
            group.bench_with_input(BenchmarkId::new(format!("radix{r}"), n), &n, |b, &n| {
                b.iter(|| digits(black_box(n), black_box(r)));
            });
        }
    }
    group.finish();
}

fn bench_digit_count_and_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_count_and_sum");
    for n in MAGNITUDES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| digit_count_and_sum(black_box(n), black_box(10)));
        });
    }
    group.finish();
}

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow");
    for (base, exponent) in [(2i64, 62i64), (10, 18), (62, 10)] {
        group.bench_with_input(
            BenchmarkId::new(format!("base{base}"), exponent),
            &exponent,
            |b, &exponent| {
                b.iter(|| pow(black_box(base), black_box(exponent)));
            },
        );
    }
    group.finish();
}

fn bench_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("log");
    for n in MAGNITUDES {
        for r in [2i64, 10] {
            group.bench_with_input(BenchmarkId::new(format!("radix{r}"), n), &n, |b, &n| {
                b.iter(|| log(black_box(n), black_box(r)));
            });
        }
    }
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    for n in [9i64, 65_535, 1_000_000_007] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| locate(black_box(n), black_box(10), black_box(false)));
        });
    }
    group.finish();
}

fn bench_nearest_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_power");
    for n in [9i64, 65_535, 1_000_000_007] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                nearest_power(
                    black_box(n),
                    black_box(10),
                    black_box(false),
                    black_box(RoundingMode::ToEven),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_digits,
    bench_digit_count_and_sum,
    bench_pow,
    bench_log,
    bench_locate,
    bench_nearest_power
);
criterion_main!(benches);
