use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linegraph::graph::{IdCounter, Vertex, VertexId};

/// Benchmark vertex construction throughput
fn bench_vertex_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_creation");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let counter = IdCounter::default();
                for i in 0..size {
                    let v = if i % 2 == 0 {
                        Vertex::new_in(&counter)
                    } else {
                        Vertex::with_name_in(&counter, format!("Stop{}", i))
                    };
                    criterion::black_box(v);
                }
            });
        });
    }
    group.finish();
}

/// Benchmark appending lines, spread over a fixed set of neighbours
fn bench_add_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_lines");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let counter = IdCounter::default();
                let mut v = Vertex::new_in(&counter);
                for i in 0..size {
                    let neighbour = VertexId::new((i % 64) as u64);
                    v.add_neighbour_out(neighbour, "Line");
                    v.add_neighbour_in(neighbour, "Line");
                }
                criterion::black_box(v.neighbour_count());
            });
        });
    }
    group.finish();
}

/// Benchmark line lookups, half of them for absent neighbours
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [100, 1000, 10_000].iter() {
        let counter = IdCounter::default();
        let mut v = Vertex::new_in(&counter);
        for i in 0..*size {
            v.add_neighbour_out(VertexId::new(i as u64), format!("Line{}", i));
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut total = 0usize;
                for i in 0..(size * 2) {
                    total += v.get_lines_out(VertexId::new(i as u64)).len();
                }
                criterion::black_box(total);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_vertex_creation, bench_add_lines, bench_lookup);
criterion_main!(benches);
