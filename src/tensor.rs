use crate::{errors::SGError, one_dimensional_nodes::OneDimensionalRule};

///
/// Full tensor-product quadrature rule over [a, b]^ndim. Points are stored
/// flattened (`ndim` coordinates per point); `weights[k]` belongs to the
/// k-th point. Weights sum to the hypercube volume (b-a)^ndim.
///
pub struct TensorRule
{
    pub points: Vec<f64>,
    pub weights: Vec<f64>,
}

///
/// Build the tensor product of one one-dimensional rule per entry of
/// `levels`, mapped from [-1, 1]^ndim onto [a, b]^ndim. The boundaries must
/// be integer-valued with a < b.
///
pub fn tensor_product_rule<R: OneDimensionalRule + ?Sized>(levels: &[u32], one_d_rule: &R, a: f64, b: f64) -> Result<TensorRule, SGError>
{
    if a >= b
    {
        return Err(SGError::EmptyInterval);
    }
    if a.fract() != 0.0 || b.fract() != 0.0
    {
        return Err(SGError::NonIntegerBounds);
    }
    if levels.is_empty()
    {
        return Err(SGError::InvalidDimension);
    }
    let ndim = levels.len();
    let rules = levels.iter()
        .map(|&level| one_d_rule.rule(level))
        .collect::<Result<Vec<_>, _>>()?;
    let num_points: Vec<usize> = rules.iter().map(|rule| rule.x.len()).collect();
    let total_combinations = num_points.iter().product::<usize>();

    let mut points = vec![0.0; total_combinations * ndim];
    let mut weights = vec![1.0; total_combinations];
    for (i, point) in points.chunks_exact_mut(ndim).enumerate()
    {
        // mixed-radix decode of the flat counter, last dimension fastest
        let mut index = i;
        for j in (0..ndim).rev()
        {
            let k = index % num_points[j];
            index /= num_points[j];
            point[j] = rules[j].x[k];
            weights[i] *= rules[j].weights[k];
        }
    }
    if a != -1.0 || b != 1.0
    {
        let half_width = 0.5 * (b - a);
        let midpoint = 0.5 * (a + b);
        let scale = half_width.powi(ndim as i32);
        for x in points.iter_mut()
        {
            *x = half_width * *x + midpoint;
        }
        for w in weights.iter_mut()
        {
            *w *= scale;
        }
    }
    Ok(TensorRule { points, weights })
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::one_dimensional_nodes::ClenshawCurtis;

    #[test]
    fn midpoint_maps_to_interval_center()
    {
        let rule = tensor_product_rule(&[1], &ClenshawCurtis, 0.0, 2.0).unwrap();
        assert_eq!(rule.points, vec![1.0]);
        assert_eq!(rule.weights, vec![2.0]);
    }

    #[test]
    fn reference_interval_left_untouched()
    {
        let rule = tensor_product_rule(&[2], &ClenshawCurtis, -1.0, 1.0).unwrap();
        assert_eq!(rule.points.len(), 3);
        assert!((rule.points[0] + 1.0).abs() < 1e-15);
        assert!((rule.points[2] - 1.0).abs() < 1e-15);
        assert!((1.0 - rule.weights[1] / (4.0 / 3.0)).abs() < 1e-14);
    }

    #[test]
    fn weights_sum_to_volume()
    {
        let rule = tensor_product_rule(&[2, 3], &ClenshawCurtis, -1.0, 2.0).unwrap();
        assert_eq!(rule.weights.len(), 15);
        assert_eq!(rule.points.len(), 30);
        assert!((1.0 - rule.weights.iter().sum::<f64>() / 9.0).abs() < 1e-13);

        let rule = tensor_product_rule(&[1, 2, 2], &ClenshawCurtis, 0.0, 1.0).unwrap();
        assert!((1.0 - rule.weights.iter().sum::<f64>() / 1.0).abs() < 1e-13);
    }

    #[test]
    fn last_dimension_varies_fastest()
    {
        let rule = tensor_product_rule(&[2, 2], &ClenshawCurtis, 0.0, 1.0).unwrap();
        assert_eq!(rule.weights.len(), 9);
        let points: Vec<&[f64]> = rule.points.chunks_exact(2).collect();
        assert_eq!(points[0], &[0.0, 0.0][..]);
        assert_eq!(points[1], &[0.0, 0.5][..]);
        assert_eq!(points[2], &[0.0, 1.0][..]);
        assert_eq!(points[3], &[0.5, 0.0][..]);
    }

    #[test]
    fn rejects_empty_interval()
    {
        assert_eq!(tensor_product_rule(&[2], &ClenshawCurtis, 1.0, 0.0).err(), Some(SGError::EmptyInterval));
        assert_eq!(tensor_product_rule(&[2], &ClenshawCurtis, 0.5, 0.0).err(), Some(SGError::EmptyInterval));
    }

    #[test]
    fn rejects_non_integer_bounds()
    {
        assert_eq!(tensor_product_rule(&[2], &ClenshawCurtis, 0.5, 1.0).err(), Some(SGError::NonIntegerBounds));
        assert_eq!(tensor_product_rule(&[2], &ClenshawCurtis, 0.0, 1.5).err(), Some(SGError::NonIntegerBounds));
    }

    #[test]
    fn propagates_invalid_level()
    {
        assert_eq!(tensor_product_rule(&[2, 0], &ClenshawCurtis, 0.0, 1.0).err(), Some(SGError::InvalidLevel));
    }
}
