//! Single trials of Karger's randomized contraction.
//!
//! A trial contracts random edges with a union-find until two components are
//! left, then counts the original edges that still cross between them.
//! Repeating trials and keeping the minimum is done in
//! [`min_cut`](crate::cs::graph::min_cut).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cs::graph::union_find::UnionFind;

/// How a trial picks the next edge to contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Draw a random edge index each step and throw away draws that have
    /// become self-loops.
    Rejection,
    /// Shuffle the edge list once and contract in that order.
    #[default]
    Shuffle,
}

/// Result of one contraction trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    /// Edges crossing between the components left at the end.
    pub cut: usize,
    /// Components left when contraction stopped.
    pub components: usize,
}

impl Trial {
    /// More than two components survived, which only happens on a
    /// disconnected graph. The cut is still a valid upper bound.
    pub fn is_degraded(&self) -> bool {
        self.components > 2
    }
}

/// Runs one trial of Karger's algorithm.
///
/// # Arguments
/// - `num_vertices`: Number of vertices in the graph.
/// - `edges`: Slice of edges as (u, v) pairs (0-indexed). The graph is undirected.
/// - `sampling`: Edge selection scheme.
/// - `rng`: Source of randomness; the trial is reproducible for a seeded generator.
pub fn karger_trial<R: Rng>(
    num_vertices: usize,
    edges: &[(usize, usize)],
    sampling: Sampling,
    rng: &mut R,
) -> Trial {
    let mut uf = UnionFind::new(num_vertices);
    match sampling {
        Sampling::Rejection => contract_by_rejection(&mut uf, edges, rng),
        Sampling::Shuffle => contract_shuffled(&mut uf, edges, rng),
    }
    Trial {
        cut: crossing_edges(&mut uf, edges),
        components: uf.components(),
    }
}

fn contract_by_rejection<R: Rng>(uf: &mut UnionFind, edges: &[(usize, usize)], rng: &mut R) {
    let mut pool = edges.to_vec();
    while uf.components() > 2 && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        let (u, v) = pool[idx];
        if !uf.union(u, v) {
            // Self-loop in the contracted graph, and it stays one.
            pool.swap_remove(idx);
        }
    }
}

fn contract_shuffled<R: Rng>(uf: &mut UnionFind, edges: &[(usize, usize)], rng: &mut R) {
    let mut order = edges.to_vec();
    order.shuffle(rng);
    for &(u, v) in &order {
        if uf.components() <= 2 {
            break;
        }
        uf.union(u, v);
    }
}

/// Counts edges whose endpoints lie in different components.
pub fn crossing_edges(uf: &mut UnionFind, edges: &[(usize, usize)]) -> usize {
    edges
        .iter()
        .filter(|&&(u, v)| !uf.connected(u, v))
        .count()
}
