//! Dense vs sparse Dijkstra on the same graph
//!
//! This crate runs single-source shortest paths on weighted undirected graphs
//! with two strategies and measures how their cost diverges as graphs grow:
//!
//! - **Dense**: adjacency matrix + linear-scan minimum selection, O(V²)
//!   regardless of how many edges actually exist
//! - **Sparse**: adjacency lists + an indexed binary min-heap with
//!   `decrease_key`, O((V + E) log V)
//!
//! Both engines consume the *same* generated graph instance (one random
//! draw, two physical encodings), so a size sweep compares the strategies
//! apples-to-apples. Each run reports wall-clock time and an operation-count
//! proxy for algorithmic work; the proxy charges log₂V per heap operation
//! and is a documented heuristic, not an instruction count.
//!
//! # Example
//!
//! ```rust
//! use dijkstra_compare::{generate, dense_shortest_path, sparse_shortest_path};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let graph = generate(50, 0.3, &mut rng).unwrap();
//!
//! let dense = dense_shortest_path(&graph.matrix, 0).unwrap();
//! let sparse = sparse_shortest_path(&graph.adjacency, 0).unwrap();
//! assert_eq!(dense.dist, sparse.dist);
//! ```
//!
//! For the full size sweep, see [`benchmark::run_sweep`].

pub mod benchmark;
pub mod dense;
pub mod graph;
pub mod heap;
pub mod sparse;

pub use benchmark::{run_sweep, SweepConfig, SweepRecord};
pub use dense::dense_shortest_path;
pub use graph::{generate, Edge, GeneratedGraph};
pub use heap::VertexHeap;
pub use sparse::sparse_shortest_path;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("edge density {0} is outside [0, 1]")]
    DensityOutOfRange(f64),

    #[error("source vertex {src} is out of range for {vertices} vertices")]
    SourceOutOfRange { src: usize, vertices: usize },

    #[error("sweep size 0 cannot be run from source vertex 0")]
    EmptySweepSize,

    #[error("heap contract violation: {0}")]
    Heap(#[from] heap::HeapError),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// The output of one shortest-path run.
///
/// Created fresh per invocation and owned by it; nothing is shared between
/// runs. `dist[v]` is `None` when `v` is unreachable from the source,
/// `parent[v]` is `None` for the source itself and for unreachable vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Shortest known distance from the source, `None` = unreachable
    pub dist: Vec<Option<u64>>,
    /// Predecessor on a shortest path, `None` = source or unreachable
    pub parent: Vec<Option<usize>>,
    /// Operation-count proxy: integer counts for scans/relaxations plus
    /// fractional log₂V terms for heap work. A heuristic cost measure,
    /// kept separate from the integer distance computation.
    pub operations: f64,
}

impl PathResult {
    pub(crate) fn new(vertices: usize) -> Self {
        PathResult {
            dist: vec![None; vertices],
            parent: vec![None; vertices],
            operations: 0.0,
        }
    }

    /// Reconstructs the shortest path from the source to `target` by
    /// walking the predecessor chain.
    ///
    /// Returns `None` if `target` is unreachable or out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.dist.len() || self.dist[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(v) = current {
            path.push(v);
            current = self.parent[v];
        }
        path.reverse();
        Some(path)
    }
}
