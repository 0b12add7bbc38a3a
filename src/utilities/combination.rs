///
/// Binomial coefficient n choose k, k <= n.
///
fn binomial(n: u32, k: u32) -> u64
{
    let k = k.min(n - k);
    let mut r = 1_u64;
    for i in 0..k as u64
    {
        r = r * (n as u64 - i) / (i + 1);
    }
    r
}

///
/// Signed combination coefficient for the tensor rule whose levels sum to
/// `index_sum` within a sparse grid of dimension `ndim` and total `level`:
/// (-1)^(level+ndim-s) * C(ndim-1, level+ndim-s). Tensors on the outermost
/// shell (s = level+ndim) always carry coefficient +1.
///
pub fn combination_coefficient(ndim: usize, level: u32, index_sum: u32) -> f64
{
    let excess = level + ndim as u32 - index_sum;
    let sign = if excess % 2 == 0 { 1.0 } else { -1.0 };
    sign * binomial(ndim as u32 - 1, excess) as f64
}

#[test]
fn check_binomial()
{
    assert_eq!(binomial(0, 0), 1);
    assert_eq!(binomial(4, 2), 6);
    assert_eq!(binomial(5, 0), 1);
    assert_eq!(binomial(6, 5), 6);
    assert_eq!(binomial(10, 5), 252);
}

#[test]
fn check_coefficients_two_dimensions()
{
    // level 3, dimension 2: sums 4 and 5 alternate between -1 and +1
    assert_eq!(combination_coefficient(2, 3, 4), -1.0);
    assert_eq!(combination_coefficient(2, 3, 5), 1.0);
}

#[test]
fn check_coefficients_three_dimensions()
{
    assert_eq!(combination_coefficient(3, 2, 3), 1.0);
    assert_eq!(combination_coefficient(3, 2, 4), -2.0);
    assert_eq!(combination_coefficient(3, 2, 5), 1.0);
}

#[test]
fn coefficients_telescope_to_one()
{
    // summed over the whole index set, the coefficients partition unity
    for (ndim, level) in [(1, 4), (2, 3), (3, 2), (4, 3)]
    {
        let indices = crate::index_set::index_set(ndim, level).unwrap();
        let total: f64 = indices
            .chunks_exact(ndim)
            .map(|idx| combination_coefficient(ndim, level, idx.iter().sum()))
            .sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
