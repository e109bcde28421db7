//! Sparse Dijkstra: adjacency lists + indexed binary min-heap
//!
//! The O((V + E) log V) formulation. The frontier lives in a
//! [`VertexHeap`]; each extraction finalizes one vertex, and each
//! relaxation that improves a distance either decreases the key of an
//! entry already in the heap or inserts a first entry for a vertex not
//! yet seen. Work is proportional to the edges that actually exist.
//!
//! A finalized vertex is never re-extracted: once popped it has no heap
//! entry, and later relaxations can only touch entries still present
//! (via `decrease_key`), never resurrect it.
//!
//! # Operation counting
//!
//! Extractions, decrease-keys, and inserts each charge log₂V operations;
//! every relaxation check charges one. The heap term is charged for every
//! improving relaxation, even when the same vertex improves several times
//! before finalization — a slight overcount versus a strict edge-bounded
//! analysis, preserved deliberately as the documented heuristic.

use crate::graph::Edge;
use crate::heap::VertexHeap;
use crate::{Error, PathResult, Result};

/// Runs heap-based Dijkstra over adjacency lists from `source`.
///
/// `adjacency[u]` lists u's (neighbor, weight) pairs; the lists must be
/// symmetric (undirected graph) with positive weights. Vertices
/// unreachable from the source keep `None` distance and parent.
///
/// # Errors
/// Returns [`Error::SourceOutOfRange`] if `source` is not a valid index
/// (including empty input), and propagates [`crate::heap::HeapError`] if
/// the heap contract is ever violated — which would mean a bug in this
/// engine, not a property of the input.
pub fn sparse_shortest_path(adjacency: &[Vec<Edge>], source: usize) -> Result<PathResult> {
    let vertices = adjacency.len();
    if source >= vertices {
        return Err(Error::SourceOutOfRange { src: source, vertices });
    }

    let heap_cost = (vertices as f64).log2();
    let mut result = PathResult::new(vertices);
    let mut heap = VertexHeap::with_capacity(vertices);

    result.dist[source] = Some(0);
    heap.insert(source, 0)?;

    while let Some((u, dist_u)) = heap.extract_min() {
        result.operations += heap_cost;

        for &Edge { to: v, weight } in &adjacency[u] {
            result.operations += 1.0;

            let candidate = dist_u + weight;
            if result.dist[v].map_or(true, |d| candidate < d) {
                result.dist[v] = Some(candidate);
                result.parent[v] = Some(u);

                if heap.contains(v) {
                    heap.decrease_key(v, candidate)?;
                } else {
                    heap.insert(v, candidate)?;
                }
                result.operations += heap_cost;
            }
        }
    }

    Ok(result)
}
