use path_core::{
    graph::Graph,
    matrix::build,
    search::dijkstra::Dijkstra,
    util::test_graphs::{grid_graph, sample_cycle_graph},
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

criterion_group!(benches, criterion_benchmark, matrix_build);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let sample: Graph = sample_cycle_graph().unwrap();

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_sample_graph", stringify!(sample)),
        &sample,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g.matrix());
                dijkstra.search(black_box(5.into()), black_box(14.into()))
            })
        },
    );

    let mut group = c.benchmark_group("dijkstra_on_grid");
    for size in [8, 16, 32].iter() {
        let g = grid_graph(*size, *size).unwrap();
        let target = size * size - 1;
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g.matrix());
                dijkstra.search(black_box(0.into()), black_box(target.into()))
            })
        });
    }
    group.finish();
}

fn matrix_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_build");
    for size in [8, 16, 32].iter() {
        let g = grid_graph(*size, *size).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| build(black_box(g.vertices()), black_box(g.edges())))
        });
    }
    group.finish();
}
