use std::collections::HashSet;

use crate::error::{Result, SelectionError};
use crate::graph::MeshGraph;
use crate::operations::shortest_path::{SearchBudget, ShortestPath};
use crate::topology::VertexId;

/// Traces a connected selection through the waypoint sequence.
///
/// Forms consecutive waypoint pairs, computes the shortest segment for each
/// pair in order, concatenates the segments, and deduplicates the result
/// keeping the first occurrence of every vertex. Waypoint order is selection
/// order, not spatial order.
pub struct TracePath {
    waypoints: Vec<VertexId>,
}

impl TracePath {
    /// Creates a new `TracePath` operation.
    #[must_use]
    pub fn new(waypoints: Vec<VertexId>) -> Self {
        Self { waypoints }
    }

    /// Executes the trace with an unlimited budget.
    ///
    /// # Errors
    ///
    /// Returns an error if no waypoints were supplied or any segment search
    /// fails.
    pub fn execute(&self, graph: &MeshGraph) -> Result<Vec<VertexId>> {
        self.execute_with_budget(graph, &SearchBudget::unlimited())
    }

    /// Executes the trace, threading the budget through every segment search.
    ///
    /// A single waypoint degenerates to a one-vertex selection with no
    /// search. Any segment failure aborts the whole trace; no partial
    /// selection is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::EmptyInput`] for zero waypoints, and
    /// propagates any [`SearchError`](crate::error::SearchError) from the
    /// per-pair searches.
    pub fn execute_with_budget(
        &self,
        graph: &MeshGraph,
        budget: &SearchBudget,
    ) -> Result<Vec<VertexId>> {
        let Some(&first) = self.waypoints.first() else {
            return Err(SelectionError::EmptyInput.into());
        };
        if self.waypoints.len() == 1 {
            return Ok(vec![first]);
        }

        let mut concatenated = Vec::new();
        for pair in self.waypoints.windows(2) {
            let segment = ShortestPath::new(pair[0], pair[1]).execute_with_budget(graph, budget)?;
            concatenated.extend(segment);
        }

        let selection = dedup_keep_first(concatenated);
        tracing::debug!(
            waypoints = self.waypoints.len(),
            selected = selection.len(),
            "waypoint path traced"
        );
        Ok(selection)
    }
}

/// Removes duplicates, keeping first-occurrence order.
fn dedup_keep_first(sequence: Vec<VertexId>) -> Vec<VertexId> {
    let mut seen = HashSet::with_capacity(sequence.len());
    sequence.into_iter().filter(|v| seen.insert(*v)).collect()
}
