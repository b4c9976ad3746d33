use crate::error::TopologyError;

use super::vertex::VertexId;

/// An unordered pair of vertices connected in the mesh.
///
/// Edges are bidirectional: each one contributes adjacency in both
/// directions when the graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// One endpoint of the edge.
    pub a: VertexId,
    /// The other endpoint of the edge.
    pub b: VertexId,
}

impl Edge {
    /// Creates a new edge between two vertices.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self { a, b }
    }

    /// Parses an edge from a raw endpoint row as handed over by the host mesh.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidTopology`] if the row does not hold
    /// exactly two endpoints.
    pub fn from_slice(endpoints: &[u32]) -> Result<Self, TopologyError> {
        match endpoints {
            [a, b] => Ok(Self::new(VertexId::new(*a), VertexId::new(*b))),
            other => Err(TopologyError::InvalidTopology(format!(
                "edge row has {} endpoints, expected 2",
                other.len()
            ))),
        }
    }

    /// Returns whether both endpoints are the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}
