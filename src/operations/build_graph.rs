use crate::error::Result;
use crate::graph::{MeshGraph, UNIT_WEIGHT};
use crate::topology::MeshTopology;

/// Builds the adjacency graph from raw mesh topology.
///
/// Each edge contributes two adjacency entries (one per direction) with unit
/// weight. Self-loops are skipped. Duplicate edges produce duplicate
/// adjacency entries, which the search tolerates.
pub struct BuildGraph<'a> {
    topology: &'a MeshTopology,
}

impl<'a> BuildGraph<'a> {
    /// Creates a new `BuildGraph` operation.
    #[must_use]
    pub fn new(topology: &'a MeshTopology) -> Self {
        Self { topology }
    }

    /// Executes the operation, producing the adjacency graph.
    ///
    /// An edge endpoint missing from the vertex list still gets an entry —
    /// topology handed over by the host is never silently dropped, since the
    /// mesh may have been edited concurrently with indexing.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<MeshGraph> {
        let mut graph = MeshGraph::with_capacity(self.topology.vertex_count());

        for &vertex in self.topology.vertices() {
            graph.ensure_vertex(vertex);
        }

        for edge in self.topology.edges() {
            if edge.is_loop() {
                graph.ensure_vertex(edge.a);
                continue;
            }
            graph.connect(edge.a, edge.b, UNIT_WEIGHT);
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = self.topology.edge_count(),
            "mesh graph built"
        );
        Ok(graph)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::{Edge, VertexId};

    fn v(index: u32) -> VertexId {
        VertexId::new(index)
    }

    #[test]
    fn every_edge_yields_two_entries() {
        let topology = MeshTopology::from_raw(&[0, 1, 2], &[[0, 1], [1, 2]]).unwrap();
        let graph = BuildGraph::new(&topology).execute().unwrap();

        assert_eq!(graph.neighbors(v(0)), &[(v(1), 1)]);
        assert_eq!(graph.neighbors(v(1)), &[(v(0), 1), (v(2), 1)]);
        assert_eq!(graph.neighbors(v(2)), &[(v(1), 1)]);
    }

    #[test]
    fn isolated_vertex_gets_empty_entry() {
        let topology = MeshTopology::from_raw(&[0, 1, 9], &[[0, 1]]).unwrap();
        let graph = BuildGraph::new(&topology).execute().unwrap();

        assert!(graph.contains(v(9)));
        assert!(graph.neighbors(v(9)).is_empty());
        assert_eq!(graph.vertices().count(), 3);
    }

    #[test]
    fn endpoint_missing_from_vertex_list_still_gets_entry() {
        let topology = MeshTopology::from_raw(&[0, 1], &[[0, 1], [1, 5]]).unwrap();
        let graph = BuildGraph::new(&topology).execute().unwrap();

        assert!(graph.contains(v(5)));
        assert_eq!(graph.neighbors(v(5)), &[(v(1), 1)]);
    }

    #[test]
    fn self_loop_is_inert() {
        let topology = MeshTopology::new(
            vec![v(0), v(1)],
            vec![Edge::new(v(0), v(0)), Edge::new(v(0), v(1))],
        );
        let graph = BuildGraph::new(&topology).execute().unwrap();

        assert_eq!(graph.neighbors(v(0)), &[(v(1), 1)]);
    }

    #[test]
    fn duplicate_edge_yields_duplicate_entries() {
        let topology = MeshTopology::from_raw(&[0, 1], &[[0, 1], [0, 1]]).unwrap();
        let graph = BuildGraph::new(&topology).execute().unwrap();

        assert_eq!(graph.neighbors(v(0)), &[(v(1), 1), (v(1), 1)]);
    }
}
