//! Dense Dijkstra: adjacency matrix + linear-scan minimum selection
//!
//! The textbook O(V²) formulation. Each of the V−1 rounds scans all V
//! vertices to find the unvisited one with the smallest finite distance,
//! then walks that vertex's entire matrix row to relax neighbors — checking
//! every slot whether or not an edge is there.
//!
//! That full-row check is the defining property of this strategy: the work
//! is proportional to V², not to the actual edge count, and the operation
//! counter reflects it by charging one operation per slot inspected. On a
//! sparse graph most of those operations touch empty cells.

use crate::{Error, PathResult, Result};

/// Runs Dijkstra's algorithm over a V×V adjacency matrix from `source`.
///
/// `matrix[u][v]` is the weight of edge (u, v), with `0` meaning no edge;
/// the matrix must be symmetric with a zero diagonal (undirected graph).
/// Vertices unreachable from the source keep `None` distance and parent.
///
/// Counts V operations per minimum scan and one per relaxation slot
/// checked, accumulated in [`PathResult::operations`].
///
/// # Errors
/// Returns [`Error::SourceOutOfRange`] if `source` is not a valid row
/// index (including the empty matrix).
pub fn dense_shortest_path(matrix: &[Vec<u64>], source: usize) -> Result<PathResult> {
    let vertices = matrix.len();
    if source >= vertices {
        return Err(Error::SourceOutOfRange { src: source, vertices });
    }

    let mut result = PathResult::new(vertices);
    let mut visited = vec![false; vertices];
    result.dist[source] = Some(0);

    for _round in 0..vertices.saturating_sub(1) {
        // Linear scan for the unvisited vertex with minimum finite distance.
        let mut next = None;
        for (v, &d) in result.dist.iter().enumerate() {
            if visited[v] {
                continue;
            }
            if let Some(d) = d {
                match next {
                    Some((_, best)) if best <= d => {}
                    _ => next = Some((v, d)),
                }
            }
        }
        result.operations += vertices as f64;

        // Everything still unvisited is unreachable from the source.
        let Some((u, dist_u)) = next else { break };
        visited[u] = true;

        // Relax the whole row, counting every slot regardless of edge
        // presence.
        for (v, &weight) in matrix[u].iter().enumerate() {
            result.operations += 1.0;
            if visited[v] || weight == 0 {
                continue;
            }
            let candidate = dist_u + weight;
            if result.dist[v].map_or(true, |d| candidate < d) {
                result.dist[v] = Some(candidate);
                result.parent[v] = Some(u);
            }
        }
    }

    Ok(result)
}
