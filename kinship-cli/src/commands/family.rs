use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::info;

use kinship::generator::{generate_family, FamilyShape};

use crate::state::{AppState, BenchmarkResult};

/// Print a random family snapshot; always JSON so it can be fed back in.
pub fn generate(shape: FamilyShape, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let registry = generate_family(&mut rng, shape)?;
    info!(members = registry.len(), "generated family");

    println!("{}", registry.export_json()?);
    Ok(())
}

/// Label a generated family from up to `references` different members.
pub fn bench(state: &AppState, shape: FamilyShape, references: u32) -> Result<()> {
    let registry = generate_family(&mut StdRng::from_entropy(), shape)?;
    info!("Benchmarking {} members...", registry.len());

    let refs: Vec<&str> = registry
        .list()
        .iter()
        .take(references.max(1) as usize)
        .map(|m| m.name.as_str())
        .collect();

    let start = Instant::now();
    for reference in &refs {
        let labels = registry.label_all(reference);
        debug_assert_eq!(labels.len(), registry.len());
    }
    let elapsed = start.elapsed();

    let total_ms = elapsed.as_secs_f64() * 1000.0;
    info!("Benchmark complete: {:?} total", elapsed);

    state.emit(&BenchmarkResult {
        members: registry.len() as u32,
        references: refs.len() as u32,
        total_ms,
        per_reference_ms: total_ms / refs.len() as f64,
    })
}
