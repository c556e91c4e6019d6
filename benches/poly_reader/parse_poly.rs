use std::path::Path;

use criterion::{criterion_group, criterion_main, Criterion};
use poly_reader::PolyGraph;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let path = Path::new("../crates/path_core/test_data/sample.poly");

    c.bench_function("parse_sample_poly", |b| {
        b.iter(|| PolyGraph::from_path(path).unwrap())
    });
}
