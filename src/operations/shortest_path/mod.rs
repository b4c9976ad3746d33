mod budget;
mod frontier;

pub use budget::{CancelToken, SearchBudget};
pub use frontier::Frontier;

use std::collections::HashMap;

use crate::error::{Result, SearchError};
use crate::graph::{MeshGraph, Weight};
use crate::topology::VertexId;

/// Computes the shortest path between two vertices of the mesh graph.
///
/// Dijkstra over the adjacency structure, valid for any nonnegative weights.
/// The frontier uses lazy deletion: relaxing a vertex pushes a fresh
/// candidate and stale entries are skipped on extraction. The search stops
/// as soon as the target is extracted, or fails with
/// [`SearchError::NoPath`] once the frontier is exhausted.
pub struct ShortestPath {
    source: VertexId,
    target: VertexId,
}

impl ShortestPath {
    /// Creates a new `ShortestPath` operation.
    #[must_use]
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// Executes the search with an unlimited budget.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is unknown or the target is
    /// unreachable.
    pub fn execute(&self, graph: &MeshGraph) -> Result<Vec<VertexId>> {
        self.execute_with_budget(graph, &SearchBudget::unlimited())
    }

    /// Executes the search, checking the budget once per frontier extraction.
    ///
    /// Returns the ordered vertex sequence from source to target inclusive.
    /// At equal distance the lower vertex id is finalized first, which makes
    /// the chosen path deterministic for a given adjacency order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownVertex`] if either endpoint has no
    /// graph entry, [`SearchError::NoPath`] if the target is unreachable,
    /// or [`SearchError::Aborted`] if the budget is exceeded.
    pub fn execute_with_budget(
        &self,
        graph: &MeshGraph,
        budget: &SearchBudget,
    ) -> Result<Vec<VertexId>> {
        if !graph.contains(self.source) {
            return Err(SearchError::UnknownVertex(self.source).into());
        }
        if !graph.contains(self.target) {
            return Err(SearchError::UnknownVertex(self.target).into());
        }
        if self.source == self.target {
            return Ok(vec![self.source]);
        }

        // Absent key = +infinity.
        let mut distance: HashMap<VertexId, Weight> = HashMap::new();
        let mut predecessor: HashMap<VertexId, VertexId> = HashMap::new();
        let mut frontier = Frontier::new();

        distance.insert(self.source, 0);
        frontier.push(0, self.source);

        let mut extractions = 0usize;
        while let Some((dist, vertex)) = frontier.pop() {
            budget.check(extractions)?;
            extractions += 1;

            if vertex == self.target {
                tracing::trace!(
                    source = %self.source,
                    target = %self.target,
                    length = dist,
                    extractions,
                    "target finalized"
                );
                return Ok(backtrack(&predecessor, self.target));
            }

            // Stale lazy-deletion entry for an already-finalized vertex.
            if distance.get(&vertex).is_some_and(|&best| dist > best) {
                continue;
            }

            for &(neighbor, weight) in graph.neighbors(vertex) {
                let candidate = dist + weight;
                let best = distance.get(&neighbor).copied().unwrap_or(Weight::MAX);
                if candidate < best {
                    distance.insert(neighbor, candidate);
                    predecessor.insert(neighbor, vertex);
                    frontier.push(candidate, neighbor);
                }
            }
        }

        Err(SearchError::NoPath {
            src: self.source,
            target: self.target,
        }
        .into())
    }
}

/// Follows predecessor links from the target back to the source, then
/// reverses into source-to-target order.
fn backtrack(predecessor: &HashMap<VertexId, VertexId>, target: VertexId) -> Vec<VertexId> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&previous) = predecessor.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
