use num_traits::PrimInt;

use crate::cs::error::{Error, Result};
use crate::cs::graph::weight_matrix::WeightMatrix;

/// Upper bound on the number of unit edges [`WeightedGraph::to_unit_edges`]
/// will materialize.
pub const MAX_UNIT_EDGES: usize = 1 << 24;

/// Represents an undirected, weighted edge in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub src: usize,
    pub dst: usize,
    pub weight: W,
}

/// Undirected weighted graph over vertices `0..vertex_count`, stored as an edge list.
///
/// Endpoints and weights are validated on insertion, so both cut engines can
/// assume well-formed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W: PrimInt> WeightedGraph<W> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Builds a graph from `(src, dst, weight)` triples.
    pub fn with_edges(vertex_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for &(src, dst, weight) in edges {
            graph.add_edge(src, dst, weight)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge. Parallel edges are allowed and add up.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: W) -> Result<()> {
        for vertex in [src, dst] {
            if vertex >= self.vertex_count {
                return Err(Error::InvalidVertex {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        if src == dst {
            return Err(Error::SelfLoop { vertex: src });
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight { src, dst });
        }
        self.edges.push(Edge { src, dst, weight });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn to_weight_matrix(&self) -> Result<WeightMatrix<W>> {
        let triples: Vec<_> = self
            .edges
            .iter()
            .map(|e| (e.src, e.dst, e.weight))
            .collect();
        WeightMatrix::from_edges(self.vertex_count, &triples)
    }

    /// Expands the graph into unit edges for the contraction engine.
    ///
    /// An edge of weight `w` becomes `w` parallel unit edges, so the number of
    /// crossing unit edges equals the weighted cut. Zero-weight edges vanish.
    /// Fails with `Error::TooManyUnitEdges` when the expansion would exceed
    /// [`MAX_UNIT_EDGES`] or cannot be allocated.
    pub fn to_unit_edges(&self) -> Result<Vec<(usize, usize)>> {
        let required = self.edges.iter().fold(0usize, |acc, e| {
            acc.saturating_add(e.weight.to_usize().unwrap_or(usize::MAX))
        });
        let too_many = Error::TooManyUnitEdges {
            required,
            limit: MAX_UNIT_EDGES,
        };
        if required > MAX_UNIT_EDGES {
            return Err(too_many);
        }

        let mut unit = Vec::new();
        unit.try_reserve_exact(required).map_err(|_| too_many)?;
        for e in &self.edges {
            let copies = e.weight.to_usize().unwrap_or(0);
            unit.extend(std::iter::repeat((e.src, e.dst)).take(copies));
        }
        Ok(unit)
    }
}
