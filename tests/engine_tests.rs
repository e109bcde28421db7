//! Scenario tests exercising both engines end to end
//!
//! The two engines must agree on distances for any graph; parent arrays
//! may differ only where several shortest paths tie. These tests pin down
//! the concrete scenarios from the design, plus the operation-count
//! ordering that motivates the whole comparison.

use dijkstra_compare::{
    dense_shortest_path, generate, run_sweep, sparse_shortest_path, Edge, SweepConfig,
};
use rand::{rngs::StdRng, SeedableRng};

fn both_encodings(vertices: usize, edges: &[(usize, usize, u64)]) -> (Vec<Vec<u64>>, Vec<Vec<Edge>>) {
    let mut matrix = vec![vec![0; vertices]; vertices];
    let mut adjacency = vec![Vec::new(); vertices];
    for &(u, v, weight) in edges {
        matrix[u][v] = weight;
        matrix[v][u] = weight;
        adjacency[u].push(Edge { to: v, weight });
        adjacency[v].push(Edge { to: u, weight });
    }
    (matrix, adjacency)
}

#[test]
fn test_star_graph_both_engines() {
    let (matrix, adjacency) = both_encodings(4, &[(0, 1, 5), (0, 2, 3), (0, 3, 9)]);

    let dense = dense_shortest_path(&matrix, 0).unwrap();
    let sparse = sparse_shortest_path(&adjacency, 0).unwrap();

    let expected = vec![Some(0), Some(5), Some(3), Some(9)];
    assert_eq!(dense.dist, expected);
    assert_eq!(sparse.dist, expected);
    assert_eq!(dense.parent, vec![None, Some(0), Some(0), Some(0)]);
    assert_eq!(sparse.parent, vec![None, Some(0), Some(0), Some(0)]);
}

#[test]
fn test_disconnected_graph_both_engines() {
    let (matrix, adjacency) = both_encodings(3, &[]);

    let dense = dense_shortest_path(&matrix, 0).unwrap();
    let sparse = sparse_shortest_path(&adjacency, 0).unwrap();

    for result in [&dense, &sparse] {
        assert_eq!(result.dist, vec![Some(0), None, None]);
        assert_eq!(result.parent, vec![None, None, None]);
    }
}

#[test]
fn test_engines_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);
    for &(vertices, density) in &[(10, 0.1), (50, 0.3), (80, 0.7), (120, 0.05)] {
        let graph = generate(vertices, density, &mut rng).unwrap();
        let dense = dense_shortest_path(&graph.matrix, 0).unwrap();
        let sparse = sparse_shortest_path(&graph.adjacency, 0).unwrap();
        assert_eq!(
            dense.dist, sparse.dist,
            "distance mismatch at V={vertices} density={density}"
        );
    }
}

#[test]
fn test_sparse_ops_beat_dense_ops_on_sparse_graph() {
    // With E ≪ V² the heap engine's E-proportional work must undercut the
    // dense engine's fixed V² work.
    let mut rng = StdRng::seed_from_u64(100);
    let graph = generate(100, 0.05, &mut rng).unwrap();

    let dense = dense_shortest_path(&graph.matrix, 0).unwrap();
    let sparse = sparse_shortest_path(&graph.adjacency, 0).unwrap();

    assert!(
        sparse.operations < dense.operations,
        "sparse ops {} should be below dense ops {}",
        sparse.operations,
        dense.operations
    );
}

#[test]
fn test_partial_connectivity() {
    // Component {0,1} reachable, component {2,3} not.
    let (matrix, adjacency) = both_encodings(4, &[(0, 1, 2), (2, 3, 4)]);

    let dense = dense_shortest_path(&matrix, 0).unwrap();
    let sparse = sparse_shortest_path(&adjacency, 0).unwrap();

    for result in [&dense, &sparse] {
        assert_eq!(result.dist, vec![Some(0), Some(2), None, None]);
        assert_eq!(result.path_to(3), None);
    }
}

#[test]
fn test_sweep_end_to_end() {
    let config = SweepConfig {
        sizes: vec![10, 25, 40],
        density: 0.3,
    };
    let mut rng = StdRng::seed_from_u64(7);
    let records = run_sweep(&config, &mut rng).unwrap();

    assert_eq!(records.len(), 3);
    for (record, &size) in records.iter().zip(&config.sizes) {
        assert_eq!(record.vertices, size);
        // Dense ops never depend on E: at most (2V)(V−1) and positive.
        assert!(record.dense_ops <= (2 * size * (size - 1)) as f64);
        assert!(record.dense_ops > 0.0);
        assert!(record.sparse_ops >= 0.0);
    }
}

#[test]
fn test_sweep_records_serialize() {
    let config = SweepConfig {
        sizes: vec![10],
        density: 0.3,
    };
    let mut rng = StdRng::seed_from_u64(8);
    let records = run_sweep(&config, &mut rng).unwrap();

    let json = serde_json::to_string(&records).unwrap();
    assert!(json.contains("\"vertices\":10"));
    assert!(json.contains("\"sparse_ms\""));
}
