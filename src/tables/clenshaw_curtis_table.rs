use rustfft::{FftPlanner, num_complex::Complex};
///
/// Clenshaw-Curtis weights on [-1, 1] for a rule with `num_points` nodes,
/// computed with the FFT construction of J. Waldvogel, "Fast construction of
/// the Fejer and Clenshaw-Curtis quadrature rules". Weights sum to 2, the
/// length of the reference interval.
///
pub(crate) fn cc_weights(num_points: usize) -> Vec<f64>
{
    if num_points == 1
    {
        // midpoint rule
        return vec![2.0];
    }
    let n = num_points - 1;
    let mut n_vals = Vec::new();
    for i in 0..n
    {
        let val = 2 * i + 1;
        if val >= n
        {
            break;
        }
        n_vals.push(val as f64);
    }
    let l = n_vals.len();
    let m = n - l;
    let mut v0: Vec<f64> = n_vals.iter()
        .map(|&i| 2.0 / (i * (i - 2.0)))
        .collect();
    v0.push(1.0 / n_vals.last().unwrap());
    v0.extend(vec![0.0; m]);

    let mut v2 = vec![0.0; v0.len() - 1];
    let end = v0.len();
    for i in 0..v2.len()
    {
        v2[i] = -v0[i] - v0[end - i - 1];
    }

    let mut planner = FftPlanner::new();
    let mut weights = vec![Complex::new(-1.0, 0.0); n];
    weights[l] += n as f64;
    weights[m] += n as f64;

    let g_scale = (n * n - 1 + n % 2) as f64;
    for (g, w) in weights.iter_mut().zip(v2)
    {
        g.re = g.re / g_scale + w;
    }
    let fft = planner.plan_fft_inverse(n);
    fft.process(&mut weights);
    // rustfft leaves the inverse transform unnormalized
    for w in weights.iter_mut()
    {
        w.re /= n as f64;
    }
    weights.push(weights[0]);
    weights.iter().map(|x| x.re).collect()
}

#[test]
fn check_weights()
{
    let cc_weights3 = cc_weights(3);
    assert!((1.0 - cc_weights3.iter().sum::<f64>() / 2.0).abs() < 1e-15);
    let expected3 = [1.0 / 3.0, 4.0 / 3.0, 1.0 / 3.0];
    for i in 0..3
    {
        assert!((1.0 - cc_weights3[i] / expected3[i]).abs() < 1e-14);
    }

    // Weights computed from CLENSHAW_CURTIS_RULE by J. Burkardt over (-1,+1).
    let weights5 = [0.06666666666666668, 0.5333333333333333, 0.7999999999999999, 0.5333333333333334, 0.06666666666666668];
    let cc_weights5 = cc_weights(5);
    assert_eq!(cc_weights5.len(), 5);
    for i in 0..5
    {
        assert!((1.0 - cc_weights5[i] / weights5[i]).abs() < 1e-14);
    }
}

#[test]
fn check_weight_sums()
{
    for num_points in [1, 3, 5, 9, 17, 33, 65]
    {
        let weights = cc_weights(num_points);
        assert_eq!(weights.len(), num_points);
        assert!((1.0 - weights.iter().sum::<f64>() / 2.0).abs() < 1e-14);
    }
}
