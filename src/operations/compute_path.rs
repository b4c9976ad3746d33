use crate::error::Result;
use crate::graph::MeshGraph;
use crate::operations::build_graph::BuildGraph;
use crate::operations::shortest_path::SearchBudget;
use crate::operations::trace_path::TracePath;
use crate::topology::{MeshTopology, VertexId};

/// One-shot surface: builds the adjacency graph and traces the waypoints.
///
/// # Errors
///
/// Returns an error if the topology is malformed, any waypoint is unknown,
/// a segment is unreachable, or no waypoints were supplied.
pub fn compute_path(topology: &MeshTopology, waypoints: &[VertexId]) -> Result<Vec<VertexId>> {
    compute_path_with_budget(topology, waypoints, &SearchBudget::unlimited())
}

/// Like [`compute_path`], threading a budget through every segment search.
///
/// # Errors
///
/// See [`compute_path`]; additionally fails with
/// [`SearchError::Aborted`](crate::error::SearchError::Aborted) if the
/// budget is exceeded.
pub fn compute_path_with_budget(
    topology: &MeshTopology,
    waypoints: &[VertexId],
    budget: &SearchBudget,
) -> Result<Vec<VertexId>> {
    let graph: MeshGraph = BuildGraph::new(topology).execute()?;
    TracePath::new(waypoints.to_vec()).execute_with_budget(&graph, budget)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn v(index: u32) -> VertexId {
        VertexId::new(index)
    }

    #[test]
    fn end_to_end_over_raw_topology() {
        let topology = MeshTopology::from_raw(
            &[0, 1, 2, 3, 4],
            &[[0, 1], [1, 2], [2, 3], [0, 4], [4, 3]],
        )
        .unwrap();

        // 0-4-3 is two edges; the 0-1-2-3 side is three.
        let path = compute_path(&topology, &[v(0), v(3)]).unwrap();
        assert_eq!(path, vec![v(0), v(4), v(3)]);
    }

    #[test]
    fn multi_waypoint_round_trip() {
        let topology =
            MeshTopology::from_raw(&[0, 1, 2, 3], &[[0, 1], [1, 2], [2, 3]]).unwrap();
        let path = compute_path(&topology, &[v(0), v(2), v(3)]).unwrap();
        assert_eq!(path, vec![v(0), v(1), v(2), v(3)]);
    }
}
