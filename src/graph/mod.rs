use std::collections::HashMap;

use crate::topology::VertexId;

/// Cost of traversing a single mesh edge.
pub type Weight = u32;

/// Every mesh edge costs one unit, so path length equals edge count.
pub const UNIT_WEIGHT: Weight = 1;

/// Adjacency structure of the mesh's vertex/edge network.
///
/// Maps each vertex to its neighbor list. Every vertex appearing in the
/// source topology — including isolated vertices and edge endpoints missing
/// from the vertex list — has an entry. Built once per computation by
/// [`BuildGraph`](crate::operations::BuildGraph) and read-only afterwards,
/// so concurrent searches may share it freely.
#[derive(Debug, Clone, Default)]
pub struct MeshGraph {
    adjacency: HashMap<VertexId, Vec<(VertexId, Weight)>>,
}

impl MeshGraph {
    pub(crate) fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Ensures the vertex has an adjacency entry, possibly empty.
    pub(crate) fn ensure_vertex(&mut self, vertex: VertexId) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Records a bidirectional connection between two vertices.
    pub(crate) fn connect(&mut self, a: VertexId, b: VertexId, weight: Weight) {
        self.adjacency.entry(a).or_default().push((b, weight));
        self.adjacency.entry(b).or_default().push((a, weight));
    }

    /// Returns whether the vertex has an entry in the graph.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Returns the neighbor list of a vertex, empty if the vertex is unknown.
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[(VertexId, Weight)] {
        self.adjacency.get(&vertex).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of vertices with an adjacency entry.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterates over all vertices of the graph, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }
}
