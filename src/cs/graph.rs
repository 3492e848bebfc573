//! Global minimum cut of weighted, undirected graphs.
//!
//! - [`stoer_wagner`]: exact, deterministic (maximum adjacency search with
//!   vertex merging), linear-scan or lazy priority-queue selection
//! - [`karger`]: single randomized contraction trials over a union-find
//! - [`min_cut`]: best-of-N trial driver and strategy dispatch
//!
//! # Examples
//!
//! ```rust
//! use mincut::cs::graph::{minimum_cut, generate, KargerConfig, Strategy};
//!
//! let graph = generate::two_cliques(4).unwrap();
//! assert_eq!(minimum_cut(&graph, &Strategy::default()).unwrap(), 1);
//!
//! let karger = Strategy::Randomized(KargerConfig::default().with_trials(200));
//! assert_eq!(minimum_cut(&graph, &karger).unwrap(), 1);
//! ```

pub mod generate;
pub mod karger;
pub mod min_cut;
pub mod stoer_wagner;
pub mod union_find;
pub mod weight_matrix;
pub mod weighted_graph;

pub use karger::{karger_trial, Sampling, Trial};
pub use min_cut::{
    minimum_cut, minimum_cut_randomized, minimum_cut_randomized_with, success_probability,
    trials_for_confidence, Estimate, KargerConfig, Strategy,
};
pub use stoer_wagner::{
    minimum_cut_exact, minimum_cut_exact_with, minimum_cut_phase, stoer_wagner, Phase, Selection,
};
pub use union_find::UnionFind;
pub use weight_matrix::WeightMatrix;
pub use weighted_graph::{Edge, WeightedGraph};
