use crate::error::Result;
use crate::operations::compute_path;
use crate::topology::{MeshTopology, VertexId};

/// Supplies the vertex and edge lists for the current mesh state.
///
/// Indices must be consistent at the moment of the call; if the mesh was
/// edited, the host must re-synchronize them before handing the topology
/// over (host editors typically force a mode round-trip for this).
pub trait TopologySource {
    /// Yields the current mesh topology.
    ///
    /// # Errors
    ///
    /// Returns an error if the topology cannot be read or is malformed.
    fn topology(&self) -> Result<MeshTopology>;
}

/// Supplies the ordered list of previously selected vertices.
pub trait WaypointSource {
    /// Yields the selection history, most-recent-last.
    fn waypoints(&self) -> Vec<VertexId>;
}

/// Accepts the final ordered vertex sequence.
pub trait SelectionSink {
    /// Clears the prior selection and marks exactly these vertices selected.
    fn select(&mut self, vertices: &[VertexId]);
}

/// Runs the full path-selection flow against the host collaborators.
///
/// Reads the topology and waypoints, computes the connected selection, and
/// hands it to the sink. The sink is only invoked on full success; on any
/// failure the host's prior selection state is left untouched.
///
/// # Errors
///
/// Propagates every failure from the topology read and the path
/// computation; no partial selection is ever emitted.
pub fn run_path_selection<T, W, S>(
    topology: &T,
    waypoints: &W,
    sink: &mut S,
) -> Result<Vec<VertexId>>
where
    T: TopologySource,
    W: WaypointSource,
    S: SelectionSink,
{
    let mesh = topology.topology()?;
    let path = compute_path(&mesh, &waypoints.waypoints())?;
    tracing::debug!(selected = path.len(), "handing selection to sink");
    sink.select(&path);
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::MeshTopology;

    struct FixedMesh {
        vertices: Vec<u32>,
        edges: Vec<[u32; 2]>,
    }

    impl TopologySource for FixedMesh {
        fn topology(&self) -> Result<MeshTopology> {
            Ok(MeshTopology::from_raw(&self.vertices, &self.edges)?)
        }
    }

    struct History(Vec<u32>);

    impl WaypointSource for History {
        fn waypoints(&self) -> Vec<VertexId> {
            self.0.iter().copied().map(VertexId::new).collect()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        selected: Option<Vec<VertexId>>,
    }

    impl SelectionSink for RecordingSink {
        fn select(&mut self, vertices: &[VertexId]) {
            self.selected = Some(vertices.to_vec());
        }
    }

    fn v(index: u32) -> VertexId {
        VertexId::new(index)
    }

    #[test]
    fn sink_receives_final_selection() {
        let mesh = FixedMesh {
            vertices: vec![0, 1, 2, 3],
            edges: vec![[0, 1], [1, 2], [2, 3]],
        };
        let history = History(vec![0, 3]);
        let mut sink = RecordingSink::default();

        let path = run_path_selection(&mesh, &history, &mut sink).unwrap();
        assert_eq!(path, vec![v(0), v(1), v(2), v(3)]);
        assert_eq!(sink.selected, Some(path));
    }

    #[test]
    fn sink_untouched_on_failure() {
        let mesh = FixedMesh {
            vertices: vec![0, 1, 2, 3],
            edges: vec![[0, 1], [2, 3]],
        };
        let history = History(vec![0, 3]);
        let mut sink = RecordingSink::default();

        assert!(run_path_selection(&mesh, &history, &mut sink).is_err());
        assert!(sink.selected.is_none());
    }

    #[test]
    fn empty_history_fails_before_reaching_sink() {
        let mesh = FixedMesh {
            vertices: vec![0, 1],
            edges: vec![[0, 1]],
        };
        let history = History(vec![]);
        let mut sink = RecordingSink::default();

        assert!(run_path_selection(&mesh, &history, &mut sink).is_err());
        assert!(sink.selected.is_none());
    }
}
