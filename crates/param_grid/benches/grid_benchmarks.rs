//! Criterion benchmarks for param_grid
//!
//! Run with: cargo bench -p param_grid

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use param_grid::{GridBuilder, GridSpec, ParameterGrid};

/// `n_params` parameters with `width` candidates each, half of them nested
fn create_grid(n_params: usize, width: i64) -> ParameterGrid {
    let mut builder = GridBuilder::new();
    for i in 0..n_params {
        if i % 2 == 0 {
            builder = builder.range(format!("p{i}"), 0..width);
        } else {
            builder = builder.nested(format!("group{i}"), |g| g.range("leaf", 0..width));
        }
    }
    ParameterGrid::new(builder.build()).unwrap()
}

fn create_union(n_grids: usize) -> ParameterGrid {
    let grids = (0..n_grids)
        .map(|i| {
            GridBuilder::new()
                .param("kernel", [format!("k{i}")])
                .range("degree", 0..8)
                .log_space("gamma", 1e-4, 1.0, 8)
                .build()
        })
        .collect::<Vec<_>>();
    ParameterGrid::new(GridSpec::from(grids)).unwrap()
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for n_params in [2, 4, 6] {
        let grid = create_grid(n_params, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n_params), &grid, |b, grid| {
            b.iter(|| {
                for combination in grid.iter() {
                    black_box(combination);
                }
            })
        });
    }

    group.finish();
}

fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("at");

    let grid = create_grid(8, 6);
    let len = grid.len() as i64;
    group.bench_function("deep_grid_middle", |b| {
        b.iter(|| black_box(grid.at(black_box(len / 2)).unwrap()))
    });
    group.bench_function("deep_grid_last", |b| {
        b.iter(|| black_box(grid.at(black_box(-1)).unwrap()))
    });

    let union = create_union(64);
    let len = union.len() as i64;
    group.bench_function("union_last_grid", |b| {
        b.iter(|| black_box(union.at(black_box(len - 1)).unwrap()))
    });

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("construct_json_union", |b| {
        let text = serde_json::to_string(&serde_json::json!([
            {"kernel": ["linear"], "C": [0.1, 1, 10, 100]},
            {"kernel": ["rbf"], "C": [0.1, 1, 10, 100], "gamma": [1e-3, 1e-2, 1e-1]},
            {"kernel": ["poly"], "degree": [2, 3, 4], "opt": {"tol": [1e-3, 1e-4]}},
        ]))
        .unwrap();
        b.iter(|| black_box(ParameterGrid::from_json_str(black_box(&text)).unwrap()))
    });
}

criterion_group!(benches, bench_iteration, bench_indexing, bench_construction);
criterion_main!(benches);
