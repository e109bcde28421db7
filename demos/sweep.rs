//! Runs the default benchmark sweep and prints the comparison table.
//!
//! ```bash
//! cargo run --example sweep
//! cargo run --example sweep -- --json   # records as JSON instead
//! RUST_LOG=debug cargo run --example sweep
//! ```
//!
//! Uses the unseeded thread RNG, so every invocation measures a fresh
//! graph instance per size.

use dijkstra_compare::{run_sweep, SweepConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let json = std::env::args().any(|a| a == "--json");

    let config = SweepConfig::default();
    let mut rng = rand::thread_rng();
    let records = run_sweep(&config, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!(
        "{:>6} {:>6} {:>14} {:>14} {:>12} {:>12} {:>9}",
        "V", "E", "dense (ms)", "sparse (ms)", "dense ops", "sparse ops", "speedup"
    );
    for r in &records {
        println!(
            "{:>6} {:>6} {:>14.3} {:>14.3} {:>12.1} {:>12.1} {:>8.2}x",
            r.vertices,
            r.edges,
            r.dense_ms,
            r.sparse_ms,
            r.dense_ops,
            r.sparse_ops,
            r.speedup()
        );
    }

    Ok(())
}
