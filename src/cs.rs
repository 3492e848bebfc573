pub mod error;
pub mod graph;

// Re-export all modules
pub use graph::*;
