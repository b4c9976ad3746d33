pub mod build_graph;
pub mod compute_path;
pub mod shortest_path;
pub mod trace_path;

pub use build_graph::BuildGraph;
pub use compute_path::{compute_path, compute_path_with_budget};
pub use shortest_path::{CancelToken, SearchBudget, ShortestPath};
pub use trace_path::TracePath;
