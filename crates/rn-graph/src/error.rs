//! Graph and routing error type.

use thiserror::Error;

use rn_core::IntersectionId;

/// Errors produced by `rn-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("intersection {0} not found in graph")]
    UnknownIntersection(IntersectionId),

    #[error("no path exists from {from} to {to}")]
    Unreachable { from: IntersectionId, to: IntersectionId },

    #[error("no road from {from} to {to}")]
    MissingEdge { from: IntersectionId, to: IntersectionId },

    #[error("malformed route: {0}")]
    InvalidRoute(String),

    #[error("predecessor chain to {to} did not reach the source within {bound} steps")]
    DegenerateCycle { to: IntersectionId, bound: usize },

    #[error("road {from} -> {to} has negative travel time {value}")]
    NegativeTravelTime { from: IntersectionId, to: IntersectionId, value: i64 },

    #[error("road network parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
