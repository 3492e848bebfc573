use thiserror::Error;

/// Errors reported by the cut algorithms.
///
/// Malformed input is rejected before any engine runs. `TooFewVertices` and
/// `EmptyEdgeSet` describe graphs on which a cut is undefined; they are kept
/// apart from a legitimate cut of weight `0`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: usize },

    #[error("negative weight on edge ({src}, {dst})")]
    NegativeWeight { src: usize, dst: usize },

    #[error("weight matrix is not symmetric at ({row}, {col})")]
    AsymmetricWeights { row: usize, col: usize },

    #[error("weight matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("total edge weight does not fit in the weight type")]
    WeightOverflow,

    #[error("expanding weights needs {required} unit edges, limit is {limit}")]
    TooManyUnitEdges { required: usize, limit: usize },

    #[error("a cut needs at least two vertices, found {found}")]
    TooFewVertices { found: usize },

    #[error("graph has no edges")]
    EmptyEdgeSet,
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
