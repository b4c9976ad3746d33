use thiserror::Error;

use crate::topology::VertexId;

/// Top-level error type for the Meshtrail path-selection kernel.
#[derive(Debug, Error)]
pub enum MeshtrailError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Errors related to raw mesh topology input.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors raised during shortest-path search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unknown vertex: {0}")]
    UnknownVertex(VertexId),

    #[error("no path from {src} to {target}")]
    NoPath {
        src: VertexId,
        target: VertexId,
    },

    #[error("search aborted: {reason}")]
    Aborted { reason: &'static str },
}

/// Errors raised while assembling the final selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("no waypoints supplied")]
    EmptyInput,
}

/// Convenience type alias for results using [`MeshtrailError`].
pub type Result<T> = std::result::Result<T, MeshtrailError>;
