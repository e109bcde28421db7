//! Benchmark sweep: both engines over a range of graph sizes
//!
//! For each configured size the harness draws one random graph, runs the
//! dense engine and then the sparse engine from source vertex 0 on the
//! same instance, and records wall-clock time plus the operation-count
//! proxy for each. Runs are strictly sequential — nothing executes in
//! parallel, no mutable state crosses run boundaries — so the timings are
//! not skewed by contention.
//!
//! Timing uses [`std::time::Instant`], which is monotonic with
//! sub-millisecond resolution; elapsed values are reported in fractional
//! milliseconds so small sizes still measure meaningfully.
//!
//! The sweep is a plain synchronous computation. A host that wants to stay
//! responsive can run it on a worker thread; the harness itself defines no
//! concurrency.

use std::time::Instant;

use rand::Rng;
use serde::Serialize;

use crate::dense::dense_shortest_path;
use crate::graph::generate;
use crate::sparse::sparse_shortest_path;
use crate::{Error, Result};

/// Configuration for a benchmark sweep.
///
/// Validated up front by [`run_sweep`]: a bad density or a size of 0
/// fails fast before any graph is generated, and no partial records are
/// emitted.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Vertex counts to sweep, in the order records should be produced
    pub sizes: Vec<usize>,
    /// Edge-inclusion probability shared by every size
    pub density: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            sizes: vec![10, 20, 30, 40, 50, 75, 100, 150],
            density: 0.3,
        }
    }
}

impl SweepConfig {
    /// Checks that the density is in `[0, 1]` and every size admits
    /// source vertex 0.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::DensityOutOfRange(self.density));
        }
        if self.sizes.contains(&0) {
            return Err(Error::EmptySweepSize);
        }
        Ok(())
    }
}

/// One row of the comparison: both engines' measured cost at one size.
///
/// Immutable once produced; the sweep returns them in sweep order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRecord {
    /// Vertex count V
    pub vertices: usize,
    /// Realized undirected edge count E
    pub edges: usize,
    /// Dense engine wall-clock time, fractional milliseconds
    pub dense_ms: f64,
    /// Sparse engine wall-clock time, fractional milliseconds
    pub sparse_ms: f64,
    /// Dense engine operation-count proxy
    pub dense_ops: f64,
    /// Sparse engine operation-count proxy
    pub sparse_ops: f64,
}

impl SweepRecord {
    /// How many times faster the sparse engine ran (dense time over
    /// sparse time)
    pub fn speedup(&self) -> f64 {
        self.dense_ms / self.sparse_ms
    }
}

/// Runs the full sweep, producing one record per configured size.
///
/// Each size generates a single graph consumed by both engines, keeping
/// the comparison apples-to-apples. There are no retries: an engine error
/// mid-sweep means malformed input (a configuration bug) and aborts the
/// whole sweep.
///
/// # Errors
/// Returns the validation error before any run starts, or the first
/// engine error encountered.
pub fn run_sweep<R: Rng>(config: &SweepConfig, rng: &mut R) -> Result<Vec<SweepRecord>> {
    config.validate()?;

    let mut records = Vec::with_capacity(config.sizes.len());

    for &vertices in &config.sizes {
        let graph = generate(vertices, config.density, rng)?;

        let start = Instant::now();
        let dense = dense_shortest_path(&graph.matrix, 0)?;
        let dense_ms = start.elapsed().as_secs_f64() * 1e3;

        let start = Instant::now();
        let sparse = sparse_shortest_path(&graph.adjacency, 0)?;
        let sparse_ms = start.elapsed().as_secs_f64() * 1e3;

        debug_assert_eq!(dense.dist, sparse.dist);

        tracing::debug!(
            vertices,
            edges = graph.edge_count,
            dense_ms,
            sparse_ms,
            dense_ops = dense.operations,
            sparse_ops = sparse.operations,
            "swept size"
        );

        records.push(SweepRecord {
            vertices,
            edges: graph.edge_count,
            dense_ms,
            sparse_ms,
            dense_ops: dense.operations,
            sparse_ops: sparse.operations,
        });
    }

    Ok(records)
}
