use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::SGError;
use crate::index_set::index_set;
use crate::one_dimensional_nodes::OneDimensionalRule;
use crate::tensor::tensor_product_rule;
use crate::utilities::combination::combination_coefficient;

///
/// Sparse quadrature grid over [a, b]^ndim assembled with the Smolyak
/// combination technique. Nodes are stored flattened, `ndim` coordinates per
/// node, with `weights[k]` belonging to the k-th node. Coincident nodes
/// contributed by different tensor rules are kept as separate entries, each
/// with its own (possibly negative) weight; `consolidated` merges them.
///
#[derive(Clone, Serialize, Deserialize)]
pub struct SparseGrid
{
    ndim: usize,
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl SparseGrid
{
    ///
    /// Assemble the sparse grid of total `level` over the unit hypercube
    /// [0, 1]^ndim.
    ///
    pub fn new<R: OneDimensionalRule + ?Sized>(ndim: usize, level: u32, one_d_rule: &R) -> Result<Self, SGError>
    {
        Self::with_bounds(ndim, level, one_d_rule, 0.0, 1.0)
    }

    ///
    /// Assemble the sparse grid of total `level` over [a, b]^ndim. The
    /// boundaries must be integer-valued with a < b. Every tensor rule in
    /// the multi-index set is scaled by its signed combination coefficient
    /// and appended whole.
    ///
    pub fn with_bounds<R: OneDimensionalRule + ?Sized>(ndim: usize, level: u32, one_d_rule: &R, a: f64, b: f64) -> Result<Self, SGError>
    {
        let indices = index_set(ndim, level)?;
        let mut nodes = Vec::new();
        let mut weights = Vec::new();
        for idx in indices.chunks_exact(ndim)
        {
            let coeff = combination_coefficient(ndim, level, idx.iter().sum());
            let rule = tensor_product_rule(idx, one_d_rule, a, b)?;
            nodes.extend(rule.points);
            weights.extend(rule.weights.iter().map(|&w| coeff * w));
        }
        Ok(Self { ndim, nodes, weights })
    }

    /// Number of nodes, duplicates included.
    pub fn len(&self) -> usize
    {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    ///
    /// Number of dimensions
    ///
    pub fn ndim(&self) -> usize
    {
        self.ndim
    }

    ///
    /// Flattened node coordinates (size = `ndim` * len()).
    ///
    pub fn nodes(&self) -> &[f64]
    {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64]
    {
        &self.weights
    }

    ///
    /// Compute the integral from `values` evaluated beforehand at the grid
    /// nodes, one value per node in storage order.
    ///
    pub fn integral(&self, values: &[f64]) -> Result<f64, SGError>
    {
        if values.len() != self.len()
        {
            return Err(SGError::NumberOfPointsAndValuesMismatch);
        }
        let mut y = 0.0;
        for (&weight, &value) in self.weights.iter().zip(values)
        {
            y += weight * value;
        }
        Ok(y)
    }

    ///
    /// Evaluate `f` at every node and return the weighted sum. Coincident
    /// nodes are evaluated again for each entry; evaluations run in
    /// parallel.
    ///
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(&[f64]) -> f64 + Sync,
    {
        self.nodes
            .par_chunks_exact(self.ndim)
            .zip(self.weights.par_iter())
            .map(|(x, &weight)| weight * f(x))
            .sum()
    }

    ///
    /// Merge bitwise-identical nodes, summing their weights. The first
    /// occurrence of a node determines its position in the result.
    ///
    pub fn consolidated(&self) -> SparseGrid
    {
        let mut map: FxHashMap<Vec<u64>, usize> = FxHashMap::default();
        let mut nodes = Vec::new();
        let mut weights: Vec<f64> = Vec::new();
        for (node, &weight) in self.nodes.chunks_exact(self.ndim).zip(&self.weights)
        {
            let key: Vec<u64> = node.iter().map(|&x| x.to_bits()).collect();
            if let Some(&idx) = map.get(&key)
            {
                weights[idx] += weight;
            }
            else
            {
                map.insert(key, weights.len());
                nodes.extend_from_slice(node);
                weights.push(weight);
            }
        }
        SparseGrid { ndim: self.ndim, nodes, weights }
    }
}

///
/// Integrate `f` over [a, b]^ndim with a sparse grid of total `level`.
///
pub fn integrate<F, R>(f: F, ndim: usize, level: u32, one_d_rule: &R, a: f64, b: f64) -> Result<f64, SGError>
where
    F: Fn(&[f64]) -> f64 + Sync,
    R: OneDimensionalRule + ?Sized,
{
    Ok(SparseGrid::with_bounds(ndim, level, one_d_rule, a, b)?.integrate(f))
}
