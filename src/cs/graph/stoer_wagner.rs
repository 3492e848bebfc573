//! Stoer-Wagner exact global minimum cut.
//!
//! Each phase grows a set from the first live vertex, always absorbing the
//! vertex most tightly connected to the set (maximum adjacency search). The
//! weight joining the last absorbed vertex to everything before it is a cut of
//! the current graph; the last two vertices are then merged. After `V - 1`
//! phases the smallest of those cuts is the global minimum.

use bitvec::prelude::*;
use log::{debug, trace};
use num_traits::PrimInt;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::cs::error::{Error, Result};
use crate::cs::graph::weight_matrix::WeightMatrix;

/// How a phase finds the next most tightly connected vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// O(V) scan per step; ties go to the lowest vertex index.
    LinearScan,
    /// Max-heap with lazy deletion of stale entries; ties go to the
    /// highest vertex index.
    #[default]
    PriorityQueue,
}

/// Outcome of one minimum-cut phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase<W> {
    /// Cut of the phase, or `None` if the phase ran out of candidates before
    /// absorbing every vertex.
    pub cut: Option<W>,
    /// Second-to-last vertex absorbed; survives the merge.
    pub prev: usize,
    /// Last vertex absorbed; merged into `prev`.
    pub last: usize,
}

/// Heap entry. Ordered by weight, then by vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate<W> {
    weight: W,
    vertex: usize,
}

/// Runs a single phase on `graph` and merges its last two vertices.
///
/// Returns `None` when fewer than two live vertices remain.
pub fn minimum_cut_phase<W: PrimInt>(
    graph: &mut WeightMatrix<W>,
    selection: Selection,
) -> Option<Phase<W>> {
    if graph.live_count() < 2 {
        return None;
    }
    let start = graph.live_vertices().next()?;

    let n = graph.size();
    let mut added = bitvec![0; n];
    let mut weight = vec![W::zero(); n];
    let mut heap = BinaryHeap::new();
    let use_heap = selection == Selection::PriorityQueue;

    added.set(start, true);
    let mut remaining = graph.live_count() - 1;
    for v in graph.live_vertices().filter(|&v| v != start) {
        weight[v] = graph.weight(v, start);
        if use_heap {
            heap.push(Candidate {
                weight: weight[v],
                vertex: v,
            });
        }
    }

    let mut prev = start;
    let mut last = start;
    while remaining > 0 {
        let next = match selection {
            Selection::LinearScan => tightest_by_scan(graph, &added, &weight),
            Selection::PriorityQueue => pop_tightest(&mut heap, &added),
        };
        let Some(v) = next else {
            break;
        };

        prev = last;
        last = v;
        added.set(v, true);
        remaining -= 1;

        for u in graph.live_vertices() {
            if added[u] {
                continue;
            }
            weight[u] = weight[u] + graph.weight(v, u);
            if use_heap {
                heap.push(Candidate {
                    weight: weight[u],
                    vertex: u,
                });
            }
        }
    }

    if last == start {
        return None;
    }
    let cut = (remaining == 0).then(|| weight[last]);
    graph.merge(prev, last);
    Some(Phase { cut, prev, last })
}

fn tightest_by_scan<W: PrimInt>(
    graph: &WeightMatrix<W>,
    added: &BitSlice,
    weight: &[W],
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for v in graph.live_vertices() {
        if added[v] {
            continue;
        }
        if best.map_or(true, |b| weight[v] > weight[b]) {
            best = Some(v);
        }
    }
    best
}

fn pop_tightest<W: Ord>(heap: &mut BinaryHeap<Candidate<W>>, added: &BitSlice) -> Option<usize> {
    while let Some(Candidate { vertex, .. }) = heap.pop() {
        if !added[vertex] {
            return Some(vertex);
        }
    }
    None
}

/// Computes the exact global minimum cut of `graph`.
///
/// Works on a private copy; `graph` is left untouched. A disconnected graph
/// yields `0`.
///
/// # Returns
/// * `Ok(cut)` - The minimum cut weight
/// * `Err(Error::TooFewVertices)` - If fewer than two vertices are live
pub fn stoer_wagner<W: PrimInt + Debug>(graph: &WeightMatrix<W>, selection: Selection) -> Result<W> {
    if graph.live_count() < 2 {
        return Err(Error::TooFewVertices {
            found: graph.live_count(),
        });
    }

    let mut graph = graph.clone();
    let mut best: Option<W> = None;
    let mut phases = 0usize;
    while graph.live_count() > 1 {
        let Some(phase) = minimum_cut_phase(&mut graph, selection) else {
            break;
        };
        phases += 1;
        trace!(
            "phase {}: merged {} into {}, cut of the phase {:?}",
            phases,
            phase.last,
            phase.prev,
            phase.cut
        );
        if let Some(cut) = phase.cut {
            best = Some(best.map_or(cut, |b| b.min(cut)));
        }
    }

    debug!(
        "stoer-wagner ({:?}) finished after {} phases, min cut {:?}",
        selection, phases, best
    );
    Ok(best.unwrap_or_else(W::max_value))
}

/// Exact minimum cut of a graph given as a symmetric weight matrix.
///
/// `weights[i][j]` is the weight between `i` and `j`; `0` means no edge.
/// Uses the priority-queue phase search.
///
/// # Examples
/// ```
/// use mincut::cs::graph::stoer_wagner::minimum_cut_exact;
///
/// let weights = vec![
///     vec![0, 2, 3],
///     vec![2, 0, 1],
///     vec![3, 1, 0],
/// ];
/// assert_eq!(minimum_cut_exact(&weights).unwrap(), 3);
/// ```
pub fn minimum_cut_exact<W: PrimInt + Debug>(weights: &[Vec<W>]) -> Result<W> {
    minimum_cut_exact_with(weights, Selection::default())
}

pub fn minimum_cut_exact_with<W: PrimInt + Debug>(
    weights: &[Vec<W>],
    selection: Selection,
) -> Result<W> {
    let graph = WeightMatrix::from_rows(weights)?;
    stoer_wagner(&graph, selection)
}
