//! Meshtrail demo — traces a waypoint path across a small grid mesh.
//!
//! Usage:
//! ```text
//! cargo run --example pathfind              # default waypoints (grid corners)
//! cargo run --example pathfind -- 0 24 20   # explicit waypoint indices
//! RUST_LOG=meshtrail=debug cargo run --example pathfind
//! ```

use meshtrail::host::{run_path_selection, SelectionSink, TopologySource, WaypointSource};
use meshtrail::topology::{MeshTopology, VertexId};
use meshtrail::{MeshtrailError, Result};

const GRID: u32 = 5;

/// A GRID x GRID quad grid, vertex id `row * GRID + column`.
struct GridMesh;

impl TopologySource for GridMesh {
    fn topology(&self) -> Result<MeshTopology> {
        let vertices: Vec<u32> = (0..GRID * GRID).collect();
        let mut edges: Vec<[u32; 2]> = Vec::new();
        for row in 0..GRID {
            for column in 0..GRID {
                let id = row * GRID + column;
                if column + 1 < GRID {
                    edges.push([id, id + 1]);
                }
                if row + 1 < GRID {
                    edges.push([id, id + GRID]);
                }
            }
        }
        Ok(MeshTopology::from_raw(&vertices, &edges)?)
    }
}

struct ArgWaypoints(Vec<u32>);

impl WaypointSource for ArgWaypoints {
    fn waypoints(&self) -> Vec<VertexId> {
        self.0.iter().copied().map(VertexId::new).collect()
    }
}

struct PrintSink;

impl SelectionSink for PrintSink {
    fn select(&mut self, vertices: &[VertexId]) {
        let rendered: Vec<String> = vertices.iter().map(ToString::to_string).collect();
        println!("selected: {}", rendered.join(" -> "));
    }
}

fn main() -> std::result::Result<(), MeshtrailError> {
    // Default: WARN for everything, INFO for meshtrail.
    // Override with RUST_LOG env var (e.g. RUST_LOG=meshtrail=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("meshtrail=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let indices: Vec<u32> = std::env::args()
        .skip(1)
        .filter_map(|arg| arg.parse().ok())
        .collect();
    let waypoints = if indices.is_empty() {
        // Corners of the grid, clockwise.
        ArgWaypoints(vec![0, GRID - 1, GRID * GRID - 1, GRID * (GRID - 1)])
    } else {
        ArgWaypoints(indices)
    };

    let path = run_path_selection(&GridMesh, &waypoints, &mut PrintSink)?;
    println!("{} vertices selected", path.len());
    Ok(())
}
