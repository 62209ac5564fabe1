#[macro_use]
extern crate criterion;

use criterion::Criterion;
use dejong::{render, run_pass, Parameters};

fn full_pass(c: &mut Criterion) {
    let params = Parameters::new(1.4, -2.3, 2.4, -2.1);
    c.bench_function("accumulate 100k", move |b| {
        b.iter(|| run_pass(&params, 100_000, 640, 640))
    });
}

fn tone_map(c: &mut Criterion) {
    let params = Parameters::new(1.4, -2.3, 2.4, -2.1);
    let grid = run_pass(&params, 1_000_000, 640, 640);
    c.bench_function("render 640x640", move |b| {
        b.iter(|| render(&grid, 1_000_000, 640, 640))
    });
}

criterion_group!(benches, full_pass, tone_map);
criterion_main!(benches);
