//! Graph generators for tests and benchmarks.
//!
//! Random graphs are always connected: a path `0 - 1 - ... - (n-1)` is laid
//! down first, then every other vertex pair gets an edge with the probability
//! given by [`GraphDensity`].

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

use crate::cs::error::{Error, Result};
use crate::cs::graph::weighted_graph::WeightedGraph;

/// Edge probability for pairs outside the spanning path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GraphDensity {
    Sparse,
    #[default]
    Random,
    Dense,
    Complete,
    Custom(f64),
}

impl GraphDensity {
    pub fn edge_probability(&self) -> f64 {
        match self {
            GraphDensity::Sparse => 0.3,
            GraphDensity::Random => 0.5,
            GraphDensity::Dense => 0.7,
            GraphDensity::Complete => 1.0,
            GraphDensity::Custom(p) => *p,
        }
    }
}

/// Pairs `(i, j)`, `i < j`, of a connected random graph on `n` vertices.
fn connected_pairs<R: Rng>(
    n: usize,
    density: GraphDensity,
    rng: &mut R,
) -> Result<Vec<(usize, usize)>> {
    let coin = Bernoulli::new(density.edge_probability())
        .map_err(|e| Error::invalid_input(format!("edge probability: {}", e)))?;

    let mut pairs = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            if j == i + 1 || coin.sample(rng) {
                pairs.push((i, j));
            }
        }
    }
    Ok(pairs)
}

/// Connected random graph with unit weights.
pub fn random_connected_graph<R: Rng>(
    n: usize,
    density: GraphDensity,
    rng: &mut R,
) -> Result<WeightedGraph<u32>> {
    let edges: Vec<_> = connected_pairs(n, density, rng)?
        .into_iter()
        .map(|(i, j)| (i, j, 1))
        .collect();
    WeightedGraph::with_edges(n, &edges)
}

/// Connected random graph with weights drawn uniformly from `1..=max_weight`.
pub fn random_weighted_graph<R: Rng>(
    n: usize,
    density: GraphDensity,
    max_weight: u32,
    rng: &mut R,
) -> Result<WeightedGraph<u32>> {
    if max_weight == 0 {
        return Err(Error::invalid_input("max_weight must be positive"));
    }
    let pairs = connected_pairs(n, density, rng)?;
    let edges: Vec<_> = pairs
        .into_iter()
        .map(|(i, j)| (i, j, rng.gen_range(1..=max_weight)))
        .collect();
    WeightedGraph::with_edges(n, &edges)
}

/// `K_n` with unit weights; its minimum cut is `n - 1`.
pub fn complete_graph(n: usize) -> Result<WeightedGraph<u32>> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            edges.push((i, j, 1));
        }
    }
    WeightedGraph::with_edges(n, &edges)
}

/// Two copies of `K_k` (vertices `0..k` and `k..2k`) joined by the single
/// edge `(k - 1, k)`; its minimum cut is `1`.
pub fn two_cliques(k: usize) -> Result<WeightedGraph<u32>> {
    if k == 0 {
        return Ok(WeightedGraph::new(0));
    }
    let mut edges = Vec::new();
    for offset in [0, k] {
        for i in 0..k {
            for j in i + 1..k {
                edges.push((offset + i, offset + j, 1));
            }
        }
    }
    edges.push((k - 1, k, 1));
    WeightedGraph::with_edges(2 * k, &edges)
}

/// Unit-weight cycle on `n >= 3` vertices; its minimum cut is `2`.
pub fn cycle_graph(n: usize) -> Result<WeightedGraph<u32>> {
    if n < 3 {
        return Err(Error::invalid_input("a cycle needs at least three vertices"));
    }
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n, 1)).collect();
    WeightedGraph::with_edges(n, &edges)
}
