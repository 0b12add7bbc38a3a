use core::f64;
use f64::consts::PI;
use static_init::dynamic;

use crate::{errors::SGError, growth, tables};

///
/// Nodes and weights of a one-dimensional quadrature rule on [-1, 1].
///
pub struct OneDimensionalNodes
{
    pub x: Vec<f64>,
    pub weights: Vec<f64>,
}

///
/// A family of one-dimensional quadrature rules on [-1, 1], one rule per
/// level. The sparse grid assembly consumes rules only through this trait,
/// so another nested family (e.g. Gauss-Patterson) can be substituted
/// without touching the combination logic.
///
pub trait OneDimensionalRule
{
    fn num_nodes(&self, level: u32) -> Result<usize, SGError>;
    fn nodes(&self, level: u32) -> Result<Vec<f64>, SGError>;
    fn weights(&self, level: u32) -> Result<Vec<f64>, SGError>;
    fn rule(&self, level: u32) -> Result<OneDimensionalNodes, SGError>
    {
        Ok(OneDimensionalNodes { x: self.nodes(level)?, weights: self.weights(level)? })
    }
}

static CC_MAX_LEVEL: u32 = 12;

#[derive(Clone)]
pub struct ClenshawCurtisCache{ nodes: Vec<Vec<f64>>, weights: Vec<Vec<f64>>}

impl ClenshawCurtisCache
{
    pub fn new(max_level: u32) -> Self
    {
        let mut nodes = Vec::new();
        let mut weights = Vec::new();
        for level in 1..=max_level
        {
            let num_points = growth::num_points(level).unwrap() as usize;
            nodes.push(clenshaw_curtis_nodes(num_points));
            weights.push(tables::clenshaw_curtis_table::cc_weights(num_points));
        }
        Self{ nodes, weights}
    }
}

#[dynamic]
static CC_CACHE: ClenshawCurtisCache = ClenshawCurtisCache::new(CC_MAX_LEVEL);

///
/// Closed Clenshaw-Curtis rules on [-1, 1] sized by the nonlinear growth
/// rule. Levels up to 12 are precomputed once; higher levels are computed
/// on demand.
///
pub struct ClenshawCurtis;

impl OneDimensionalRule for ClenshawCurtis
{
    fn num_nodes(&self, level: u32) -> Result<usize, SGError>
    {
        Ok(growth::num_points(level)? as usize)
    }

    fn nodes(&self, level: u32) -> Result<Vec<f64>, SGError>
    {
        let num_points = self.num_nodes(level)?;
        if level <= CC_MAX_LEVEL
        {
            Ok(CC_CACHE.nodes[(level - 1) as usize].clone())
        }
        else
        {
            Ok(clenshaw_curtis_nodes(num_points))
        }
    }

    fn weights(&self, level: u32) -> Result<Vec<f64>, SGError>
    {
        let num_points = self.num_nodes(level)?;
        if level <= CC_MAX_LEVEL
        {
            Ok(CC_CACHE.weights[(level - 1) as usize].clone())
        }
        else
        {
            Ok(tables::clenshaw_curtis_table::cc_weights(num_points))
        }
    }
}

/// Return Clenshaw-Curtis nodes over [-1, 1], ascending. A single-point rule
/// sits at the midpoint; larger rules include both endpoints.
pub fn clenshaw_curtis_nodes(num_points: usize) -> Vec<f64>
{
    let mut nodes = vec![0.0; num_points];
    if num_points > 1
    {
        let n = num_points - 1;
        #[allow(clippy::needless_range_loop)]
        for i in 0..num_points
        {
            nodes[i] = f64::cos(PI * (n - i) as f64 / n as f64);
        }
    }
    nodes
}

#[test]
fn check_clenshaw_curtis_level_one()
{
    let rule = ClenshawCurtis.rule(1).unwrap();
    assert_eq!(rule.x, vec![0.0]);
    assert_eq!(rule.weights, vec![2.0]);
}

#[test]
fn check_clenshaw_curtis_level_two()
{
    let rule = ClenshawCurtis.rule(2).unwrap();
    assert_eq!(rule.x.len(), 3);
    assert!((rule.x[0] + 1.0).abs() < 1e-15);
    assert!(rule.x[1].abs() < 1e-15);
    assert!((rule.x[2] - 1.0).abs() < 1e-15);
    assert!((1.0 - rule.weights[1] / (4.0 / 3.0)).abs() < 1e-14);
}

#[test]
fn check_nodes_symmetric()
{
    for level in 2..=6
    {
        let nodes = ClenshawCurtis.nodes(level).unwrap();
        let m = nodes.len();
        assert_eq!(m, growth::num_points(level).unwrap() as usize);
        assert!((nodes[0] + 1.0).abs() < 1e-15);
        assert!((nodes[m - 1] - 1.0).abs() < 1e-15);
        for i in 0..m
        {
            assert!((nodes[i] + nodes[m - 1 - i]).abs() < 1e-15);
        }
    }
}

#[test]
fn check_weight_sums_through_cache_cutoff()
{
    // level 13 falls past the precomputed range
    for level in [1, 2, 3, 8, 12, 13]
    {
        let rule = ClenshawCurtis.rule(level).unwrap();
        assert_eq!(rule.x.len(), rule.weights.len());
        assert!((1.0 - rule.weights.iter().sum::<f64>() / 2.0).abs() < 1e-13);
    }
}

#[test]
fn check_polynomial_exactness()
{
    // a rule with m nodes integrates monomials up to degree m-1
    let rule = ClenshawCurtis.rule(2).unwrap();
    let integral: f64 = rule.x.iter().zip(&rule.weights).map(|(&x, &w)| w * x * x).sum();
    assert!((1.0 - integral / (2.0 / 3.0)).abs() < 1e-14);

    let rule = ClenshawCurtis.rule(3).unwrap();
    let integral: f64 = rule.x.iter().zip(&rule.weights).map(|(&x, &w)| w * x.powi(4)).sum();
    assert!((1.0 - integral / (2.0 / 5.0)).abs() < 1e-14);
}

#[test]
fn check_invalid_level()
{
    assert_eq!(ClenshawCurtis.rule(0).err(), Some(SGError::InvalidLevel));
    assert_eq!(ClenshawCurtis.nodes(0).err(), Some(SGError::InvalidLevel));
    assert_eq!(ClenshawCurtis.weights(0).err(), Some(SGError::InvalidLevel));
}
