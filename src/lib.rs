pub mod cs;

pub use cs::error::{Error, Result};
pub use cs::graph;
pub use cs::graph::{minimum_cut, minimum_cut_exact, minimum_cut_randomized};
