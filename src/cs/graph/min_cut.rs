//! Entry points for the global minimum cut: best-of-N Karger trials, the
//! exact Stoer-Wagner engine, and a dispatcher over both.

use log::{debug, trace};
use num_traits::{NumCast, PrimInt};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use std::fmt::Debug;

use crate::cs::error::{Error, Result};
use crate::cs::graph::karger::{karger_trial, Sampling, Trial};
use crate::cs::graph::stoer_wagner::{stoer_wagner, Selection};
use crate::cs::graph::weighted_graph::{WeightedGraph, MAX_UNIT_EDGES};

/// Parameters for the randomized engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KargerConfig {
    /// Number of independent trials
    pub trials: usize,
    /// Base seed; trial `i` draws from stream `i` of this seed
    pub seed: u64,
    /// Edge selection scheme
    pub sampling: Sampling,
    /// Run trials on the rayon pool
    pub parallel: bool,
}

impl Default for KargerConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            seed: 0x5eed,
            sampling: Sampling::default(),
            parallel: true,
        }
    }
}

impl KargerConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Best-of-N result of the randomized engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    /// Smallest cut seen over all trials
    pub cut: usize,
    /// Trials that were run
    pub trials: usize,
    /// Trials that stopped with more than two components
    pub degraded_trials: usize,
}

/// Which engine [`minimum_cut`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Exact(Selection),
    Randomized(KargerConfig),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Exact(Selection::default())
    }
}

fn trial_rng(seed: u64, trial: usize) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(trial as u64);
    rng
}

fn validate_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<()> {
    if vertex_count < 2 {
        return Err(Error::TooFewVertices {
            found: vertex_count,
        });
    }
    if edges.is_empty() {
        return Err(Error::EmptyEdgeSet);
    }
    for &(u, v) in edges {
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(Error::InvalidVertex {
                    vertex,
                    vertex_count,
                });
            }
        }
        if u == v {
            return Err(Error::SelfLoop { vertex: u });
        }
    }
    Ok(())
}

/// Implements Karger's randomized min cut algorithm.
///
/// # Arguments
/// - `vertex_count`: Number of vertices in the graph.
/// - `edges`: Slice of edges as (u, v) pairs (0-indexed). The graph is undirected.
/// - `trials`: Number of independent trials to run (the more, the higher the chance to find the minimum cut).
///
/// # Returns
/// The smallest cut found, which is never below the true minimum cut.
///
/// # Examples
/// ```
/// use mincut::cs::graph::min_cut::minimum_cut_randomized;
///
/// let edges = vec![(0, 1), (1, 2), (2, 0)];
/// assert_eq!(minimum_cut_randomized(3, &edges, 10).unwrap(), 2);
/// ```
pub fn minimum_cut_randomized(
    vertex_count: usize,
    edges: &[(usize, usize)],
    trials: usize,
) -> Result<usize> {
    let config = KargerConfig::default().with_trials(trials);
    Ok(minimum_cut_randomized_with(vertex_count, edges, &config)?.cut)
}

/// Runs `config.trials` independent Karger trials and keeps the smallest cut.
///
/// Each trial owns its union-find, its shuffled copy of the edges and its own
/// ChaCha stream, so sequential and parallel runs give the same answer and
/// adding trials can only lower the result.
pub fn minimum_cut_randomized_with(
    vertex_count: usize,
    edges: &[(usize, usize)],
    config: &KargerConfig,
) -> Result<Estimate> {
    validate_edges(vertex_count, edges)?;
    if config.trials == 0 {
        return Err(Error::invalid_input("trials must be positive"));
    }

    let run = |trial: usize| -> Trial {
        let mut rng = trial_rng(config.seed, trial);
        let outcome = karger_trial(vertex_count, edges, config.sampling, &mut rng);
        trace!("trial {}: cut {}, {} components", trial, outcome.cut, outcome.components);
        outcome
    };
    let outcomes: Vec<Trial> = if config.parallel {
        (0..config.trials).into_par_iter().map(run).collect()
    } else {
        (0..config.trials).map(run).collect()
    };

    let cut = outcomes.iter().map(|t| t.cut).min().unwrap_or(usize::MAX);
    let degraded_trials = outcomes.iter().filter(|t| t.is_degraded()).count();
    debug!(
        "karger ({:?}, {} trials, parallel={}) on {} vertices / {} edges: min cut {}, {} degraded",
        config.sampling,
        config.trials,
        config.parallel,
        vertex_count,
        edges.len(),
        cut,
        degraded_trials
    );

    Ok(Estimate {
        cut,
        trials: config.trials,
        degraded_trials,
    })
}

/// Computes the global minimum cut of `graph` with the chosen engine.
///
/// The randomized engine sees each edge of weight `w` as `w` parallel unit
/// edges, so both engines measure the same quantity. Graphs whose total
/// weight exceeds [`MAX_UNIT_EDGES`] are rejected by that engine with
/// `Error::TooManyUnitEdges`.
///
/// # Examples
/// ```
/// use mincut::cs::graph::min_cut::{minimum_cut, Strategy};
/// use mincut::cs::graph::WeightedGraph;
///
/// let graph = WeightedGraph::with_edges(3, &[(0, 1, 2u32), (1, 2, 5)]).unwrap();
/// assert_eq!(minimum_cut(&graph, &Strategy::default()).unwrap(), 2);
/// ```
pub fn minimum_cut<W: PrimInt + Debug>(graph: &WeightedGraph<W>, strategy: &Strategy) -> Result<W> {
    match strategy {
        Strategy::Exact(selection) => stoer_wagner(&graph.to_weight_matrix()?, *selection),
        Strategy::Randomized(config) => {
            let edges = graph.to_unit_edges()?;
            let estimate = minimum_cut_randomized_with(graph.vertex_count(), &edges, config)?;
            <W as NumCast>::from(estimate.cut).ok_or(Error::WeightOverflow)
        }
    }
}

/// Probability that at least one of `trials` basic Karger trials finds a
/// given minimum cut: `1 - (1 - 2 / (V (V - 1)))^trials`.
pub fn success_probability(vertex_count: usize, trials: usize) -> f64 {
    if vertex_count < 2 {
        return 0.0;
    }
    let v = vertex_count as f64;
    let single = (2.0 / (v * (v - 1.0))).min(1.0);
    1.0 - (1.0 - single).powf(trials as f64)
}

/// Smallest trial count whose failure probability is at most
/// `failure_probability`, using `(1 - p)^N <= e^(-pN)`.
pub fn trials_for_confidence(vertex_count: usize, failure_probability: f64) -> Result<usize> {
    if vertex_count < 2 {
        return Err(Error::TooFewVertices {
            found: vertex_count,
        });
    }
    if !(failure_probability > 0.0 && failure_probability < 1.0) {
        return Err(Error::invalid_input(
            "failure probability must lie strictly between 0 and 1",
        ));
    }
    let v = vertex_count as f64;
    let pairs = v * (v - 1.0) / 2.0;
    Ok(((1.0 / failure_probability).ln() * pairs).ceil().max(1.0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cliques(k: usize) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for offset in [0, k] {
            for i in 0..k {
                for j in i + 1..k {
                    edges.push((offset + i, offset + j));
                }
            }
        }
        edges.push((k - 1, k));
        edges
    }

    #[test]
    fn test_minimum_cut_randomized_single_edge() {
        assert_eq!(minimum_cut_randomized(2, &[(0, 1)], 1), Ok(1));
    }

    #[test]
    fn test_minimum_cut_randomized_triangle() {
        let edges = vec![(0, 1), (1, 2), (2, 0)];
        assert_eq!(minimum_cut_randomized(3, &edges, 100), Ok(2));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            minimum_cut_randomized(1, &[], 10),
            Err(Error::TooFewVertices { found: 1 })
        );
        assert_eq!(minimum_cut_randomized(3, &[], 10), Err(Error::EmptyEdgeSet));
        assert_eq!(
            minimum_cut_randomized(3, &[(0, 3)], 10),
            Err(Error::InvalidVertex {
                vertex: 3,
                vertex_count: 3
            })
        );
        assert_eq!(
            minimum_cut_randomized(3, &[(1, 1)], 10),
            Err(Error::SelfLoop { vertex: 1 })
        );
        assert!(matches!(
            minimum_cut_randomized(3, &[(0, 1)], 0),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_disconnected_graph_reports_zero() {
        let edges = vec![(0, 1), (1, 2), (3, 4), (4, 5)];
        for sampling in [Sampling::Rejection, Sampling::Shuffle] {
            let config = KargerConfig::default()
                .with_trials(20)
                .with_sampling(sampling);
            let estimate = minimum_cut_randomized_with(6, &edges, &config).unwrap();
            assert_eq!(estimate.cut, 0);
            assert_eq!(estimate.trials, 20);
        }
    }

    #[test]
    fn test_degraded_trials_are_counted() {
        // Vertex 4 has no edges.
        let edges = vec![(0, 1), (2, 3)];
        let config = KargerConfig::default().with_trials(8);
        let estimate = minimum_cut_randomized_with(5, &edges, &config).unwrap();
        assert_eq!(
            estimate,
            Estimate {
                cut: 0,
                trials: 8,
                degraded_trials: 8
            }
        );
    }

    #[test]
    fn test_bridge_is_found_with_high_frequency() {
        let edges = two_cliques(5);
        let mut hits = 0;
        for seed in 0..20 {
            let config = KargerConfig::default().with_trials(50).with_seed(seed);
            if minimum_cut_randomized_with(10, &edges, &config).unwrap().cut == 1 {
                hits += 1;
            }
        }
        assert!(hits >= 19, "bridge found in only {} of 20 runs", hits);
    }

    #[test]
    fn test_more_trials_never_increase_cut() {
        let edges = two_cliques(4);
        let mut previous = usize::MAX;
        for trials in 1..40 {
            let config = KargerConfig::default().with_trials(trials).with_seed(3);
            let cut = minimum_cut_randomized_with(8, &edges, &config).unwrap().cut;
            assert!(cut <= previous);
            previous = cut;
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let edges = two_cliques(6);
        for sampling in [Sampling::Rejection, Sampling::Shuffle] {
            let base = KargerConfig::default()
                .with_trials(30)
                .with_seed(17)
                .with_sampling(sampling);
            let parallel =
                minimum_cut_randomized_with(12, &edges, &base.clone().with_parallel(true)).unwrap();
            let sequential =
                minimum_cut_randomized_with(12, &edges, &base.with_parallel(false)).unwrap();
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_minimum_cut_dispatch() {
        let graph = WeightedGraph::with_edges(
            4,
            &[(0, 1, 3u32), (0, 2, 1), (1, 2, 2), (1, 3, 4), (2, 3, 1)],
        )
        .unwrap();
        let exact = minimum_cut(&graph, &Strategy::Exact(Selection::LinearScan)).unwrap();
        assert_eq!(exact, 4);
        assert_eq!(minimum_cut(&graph, &Strategy::default()).unwrap(), exact);

        let randomized = minimum_cut(
            &graph,
            &Strategy::Randomized(KargerConfig::default().with_trials(200)),
        )
        .unwrap();
        assert_eq!(randomized, exact);
    }

    #[test]
    fn test_single_weighted_edge_both_engines() {
        let graph = WeightedGraph::with_edges(2, &[(0, 1, 9u16)]).unwrap();
        assert_eq!(minimum_cut(&graph, &Strategy::default()), Ok(9));
        assert_eq!(
            minimum_cut(
                &graph,
                &Strategy::Randomized(KargerConfig::default().with_trials(1))
            ),
            Ok(9)
        );
    }

    #[test]
    fn test_disconnected_weighted_graph_both_engines() {
        let graph = WeightedGraph::with_edges(4, &[(0, 1, 2u32), (2, 3, 3)]).unwrap();
        assert_eq!(minimum_cut(&graph, &Strategy::default()), Ok(0));
        assert_eq!(
            minimum_cut(&graph, &Strategy::Randomized(KargerConfig::default())),
            Ok(0)
        );
    }

    #[test]
    fn test_heavy_weights_error_instead_of_expanding() {
        let graph = WeightedGraph::with_edges(2, &[(0, 1, 1u64 << 62)]).unwrap();
        assert_eq!(minimum_cut(&graph, &Strategy::default()), Ok(1 << 62));
        assert_eq!(
            minimum_cut(
                &graph,
                &Strategy::Randomized(KargerConfig::default().with_trials(1))
            ),
            Err(Error::TooManyUnitEdges {
                required: 1 << 62,
                limit: MAX_UNIT_EDGES
            })
        );
    }

    #[test]
    fn test_success_probability() {
        assert_eq!(success_probability(1, 10), 0.0);
        assert!((success_probability(2, 1) - 1.0).abs() < 1e-12);
        // V = 4: single trial succeeds with probability 1/6.
        assert!((success_probability(4, 1) - 1.0 / 6.0).abs() < 1e-12);
        assert!(success_probability(10, 100) < success_probability(10, 101));
    }

    #[test]
    fn test_trials_for_confidence() {
        for v in [3, 10, 50] {
            let n = trials_for_confidence(v, 0.01).unwrap();
            assert!(success_probability(v, n) >= 0.99);
        }
        assert_eq!(trials_for_confidence(2, 0.5), Ok(1));
        assert!(matches!(
            trials_for_confidence(10, 0.0),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(
            trials_for_confidence(1, 0.1),
            Err(Error::TooFewVertices { found: 1 })
        );
    }
}
