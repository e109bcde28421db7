//! Random graph generation in two physical encodings
//!
//! The generator produces one logical graph as both an adjacency matrix and
//! adjacency lists, from a single pass over the unordered vertex pairs. Each
//! edge decision and weight is written to both encodings in the same step,
//! so the two forms always describe the identical edge set — the property
//! the dense/sparse comparison depends on.
//!
//! Graphs are undirected with positive integer weights in `[1, 20]`; in the
//! matrix, `0` means "no edge" and the diagonal is always `0`.
//!
//! The randomness source is an explicit parameter: tests pass a seeded
//! [`StdRng`](rand::rngs::StdRng) for deterministic graphs, while the
//! benchmark demo passes `thread_rng()` so every sweep sees a fresh
//! instance.

use rand::Rng;

use crate::{Error, Result};

/// Largest edge weight the generator assigns (weights are uniform in [1, MAX])
pub const MAX_WEIGHT: u64 = 20;

/// An adjacency-list entry: the neighbor and the edge weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: u64,
}

/// One random graph in both encodings, plus the realized edge count
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    /// V×V symmetric matrix; `matrix[i][j]` is the edge weight, 0 = no edge
    pub matrix: Vec<Vec<u64>>,
    /// Per-vertex (neighbor, weight) lists mirroring the matrix exactly
    pub adjacency: Vec<Vec<Edge>>,
    /// Number of undirected edges actually drawn
    pub edge_count: usize,
}

impl GeneratedGraph {
    /// Number of vertices
    pub fn vertices(&self) -> usize {
        self.matrix.len()
    }
}

/// Generates a random undirected graph over `vertices` vertices.
///
/// Every unordered pair (i, j) with i < j gets an edge with probability
/// `density`; included edges get a weight drawn uniformly from
/// `[1, MAX_WEIGHT]` and are recorded symmetrically in both encodings.
///
/// `vertices == 0` yields empty structures with `edge_count == 0`.
///
/// # Errors
/// Returns [`Error::DensityOutOfRange`] if `density` is not in `[0, 1]`
/// (NaN included), before any allocation happens.
pub fn generate<R: Rng>(vertices: usize, density: f64, rng: &mut R) -> Result<GeneratedGraph> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::DensityOutOfRange(density));
    }

    let mut matrix = vec![vec![0u64; vertices]; vertices];
    let mut adjacency = vec![Vec::new(); vertices];
    let mut edge_count = 0;

    for i in 0..vertices {
        for j in (i + 1)..vertices {
            if rng.gen::<f64>() < density {
                let weight = rng.gen_range(1..=MAX_WEIGHT);
                matrix[i][j] = weight;
                matrix[j][i] = weight;
                adjacency[i].push(Edge { to: j, weight });
                adjacency[j].push(Edge { to: i, weight });
                edge_count += 1;
            }
        }
    }

    tracing::trace!(vertices, density, edge_count, "generated graph");

    Ok(GeneratedGraph {
        matrix,
        adjacency,
        edge_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_matrix_is_symmetric_with_zero_diagonal() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = generate(40, 0.5, &mut rng).unwrap();

        for i in 0..40 {
            assert_eq!(graph.matrix[i][i], 0);
            for j in 0..40 {
                assert_eq!(graph.matrix[i][j], graph.matrix[j][i]);
            }
        }
    }

    #[test]
    fn test_encodings_agree_edge_for_edge() {
        let mut rng = StdRng::seed_from_u64(2);
        let graph = generate(30, 0.4, &mut rng).unwrap();

        // Every list entry appears in the matrix with the same weight, and
        // the symmetric entry exists in the neighbor's list.
        for (u, edges) in graph.adjacency.iter().enumerate() {
            for edge in edges {
                assert_eq!(graph.matrix[u][edge.to], edge.weight);
                assert!(graph.adjacency[edge.to]
                    .iter()
                    .any(|e| e.to == u && e.weight == edge.weight));
            }
        }

        // Every matrix edge appears in the list.
        for u in 0..30 {
            for v in 0..30 {
                if graph.matrix[u][v] != 0 {
                    assert!(graph.adjacency[u]
                        .iter()
                        .any(|e| e.to == v && e.weight == graph.matrix[u][v]));
                }
            }
        }

        // The edge count matches both encodings.
        let list_edges: usize = graph.adjacency.iter().map(Vec::len).sum();
        assert_eq!(list_edges, graph.edge_count * 2);
    }

    #[test]
    fn test_weights_are_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let graph = generate(25, 0.8, &mut rng).unwrap();
        for edges in &graph.adjacency {
            for edge in edges {
                assert!((1..=MAX_WEIGHT).contains(&edge.weight));
            }
        }
    }

    #[test]
    fn test_density_extremes() {
        let mut rng = StdRng::seed_from_u64(4);

        let empty = generate(20, 0.0, &mut rng).unwrap();
        assert_eq!(empty.edge_count, 0);

        let complete = generate(20, 1.0, &mut rng).unwrap();
        assert_eq!(complete.edge_count, 20 * 19 / 2);
    }

    #[test]
    fn test_zero_vertices() {
        let mut rng = StdRng::seed_from_u64(5);
        let graph = generate(0, 0.3, &mut rng).unwrap();
        assert!(graph.matrix.is_empty());
        assert!(graph.adjacency.is_empty());
        assert_eq!(graph.edge_count, 0);
    }

    #[test]
    fn test_invalid_density_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        assert!(matches!(
            generate(10, -0.1, &mut rng),
            Err(Error::DensityOutOfRange(_))
        ));
        assert!(matches!(
            generate(10, 1.5, &mut rng),
            Err(Error::DensityOutOfRange(_))
        ));
        assert!(matches!(
            generate(10, f64::NAN, &mut rng),
            Err(Error::DensityOutOfRange(_))
        ));
    }
}
