use criterion::{criterion_group, criterion_main, Criterion};
use smolyak::{one_dimensional_nodes::ClenshawCurtis, sparse_grid::SparseGrid};

fn build_grid() -> SparseGrid
{
    SparseGrid::new(2, 8, &ClenshawCurtis).unwrap()
}

fn integrate(grid: &SparseGrid) -> f64
{
    grid.integrate(|x| libm::exp(x[0] * x[0] + x[1] * x[1]))
}

fn run_case(c: &mut Criterion)
{
    let grid = build_grid();
    c.bench_function("sparse_grid_build", |b| b.iter(build_grid));
    c.bench_function("sparse_grid_integrate", |b| b.iter(|| integrate(&grid)));
}

criterion_group!(benches, run_case);
criterion_main!(benches);
