//! Dense symmetric weight matrix with in-place vertex merging.
//!
//! The backing array never shrinks. Merging `remove` into `keep` folds the
//! removed row and column into `keep` and marks `remove` dead, so later passes
//! simply skip it.

use bitvec::prelude::*;
use ndarray::Array2;
use num_traits::PrimInt;

use crate::cs::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix<W> {
    weights: Array2<W>,
    live: BitVec,
    live_count: usize,
}

impl<W: PrimInt> WeightMatrix<W> {
    /// An edgeless matrix over `n` vertices.
    pub fn zeros(n: usize) -> Self {
        Self {
            weights: Array2::zeros((n, n)),
            live: bitvec![1; n],
            live_count: n,
        }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// Rejects non-square input, negative weights, a non-zero diagonal,
    /// asymmetric entries and totals that overflow `W`.
    pub fn from_rows(rows: &[Vec<W>]) -> Result<Self> {
        let n = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(Error::NotSquare {
                row,
                len: r.len(),
                expected: n,
            });
        }

        let mut matrix = Self::zeros(n);
        let mut total = W::zero();
        for (i, row) in rows.iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                if w < W::zero() {
                    return Err(Error::NegativeWeight { src: i, dst: j });
                }
                if i == j {
                    if w != W::zero() {
                        return Err(Error::SelfLoop { vertex: i });
                    }
                    continue;
                }
                if rows[j][i] != w {
                    return Err(Error::AsymmetricWeights { row: i, col: j });
                }
                if i < j {
                    total = total.checked_add(&w).ok_or(Error::WeightOverflow)?;
                }
                matrix.weights[[i, j]] = w;
            }
        }
        Ok(matrix)
    }

    /// Builds a matrix from `(src, dst, weight)` triples. Parallel edges are summed.
    pub fn from_edges(n: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut matrix = Self::zeros(n);
        let mut total = W::zero();
        for &(src, dst, w) in edges {
            for vertex in [src, dst] {
                if vertex >= n {
                    return Err(Error::InvalidVertex {
                        vertex,
                        vertex_count: n,
                    });
                }
            }
            if src == dst {
                return Err(Error::SelfLoop { vertex: src });
            }
            if w < W::zero() {
                return Err(Error::NegativeWeight { src, dst });
            }
            total = total.checked_add(&w).ok_or(Error::WeightOverflow)?;
            let summed = matrix.weights[[src, dst]] + w;
            matrix.weights[[src, dst]] = summed;
            matrix.weights[[dst, src]] = summed;
        }
        Ok(matrix)
    }

    /// Dimension of the backing array, including retired vertices.
    pub fn size(&self) -> usize {
        self.live.len()
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn is_live(&self, v: usize) -> bool {
        self.live[v]
    }

    pub fn live_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.live.iter_ones()
    }

    pub fn weight(&self, u: usize, v: usize) -> W {
        self.weights[[u, v]]
    }

    /// Sum of all edge weights between live vertices.
    pub fn total_weight(&self) -> W {
        self.edges()
            .into_iter()
            .fold(W::zero(), |acc, (_, _, w)| acc + w)
    }

    /// Live edges `(i, j, w)` with `i < j` and `w > 0`, in row-major order.
    pub fn edges(&self) -> Vec<(usize, usize, W)> {
        let mut edges = Vec::new();
        for i in self.live.iter_ones() {
            for j in self.live.iter_ones().filter(|&j| j > i) {
                let w = self.weights[[i, j]];
                if w > W::zero() {
                    edges.push((i, j, w));
                }
            }
        }
        edges
    }

    /// Contracts `remove` into `keep`.
    ///
    /// Edges of `remove` are added onto `keep` (both directions). The edge
    /// joining the pair would become a self-loop and is dropped.
    pub fn merge(&mut self, keep: usize, remove: usize) {
        debug_assert!(keep != remove);
        debug_assert!(self.live[keep] && self.live[remove]);

        let n = self.size();
        for k in self.live.iter_ones() {
            if k == keep || k == remove {
                continue;
            }
            let combined = self.weights[[keep, k]] + self.weights[[remove, k]];
            self.weights[[keep, k]] = combined;
            self.weights[[k, keep]] = combined;
        }
        self.weights[[keep, remove]] = W::zero();
        self.weights[[remove, keep]] = W::zero();
        for k in 0..n {
            self.weights[[remove, k]] = W::zero();
            self.weights[[k, remove]] = W::zero();
        }

        self.live.set(remove, false);
        self.live_count -= 1;
    }
}
