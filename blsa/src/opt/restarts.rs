use crate::opt::annealing::{CoolingSchedule, SearchResult, run_search};
use crate::opt::neighborhood::shuffled;
use anyhow::{Context, Result, ensure};
use log::info;
use orthopack::entities::Instance;
use ordered_float::OrderedFloat;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Runs `n_restarts` independent searches in parallel, each from its own shuffled item order.
///
/// Restart `i` draws all its randomness from a [`SmallRng`] seeded with `seed + i`.
/// Returns the index of the best restart and its result; ties go to the lowest index,
/// so the outcome only depends on `seed`, not on thread scheduling.
pub fn solve_with_restarts(
    instance: &Instance,
    schedule: &CoolingSchedule,
    n_restarts: usize,
    seed: u64,
) -> Result<(usize, SearchResult)> {
    ensure!(n_restarts > 0, "at least one restart is required");

    let results = (0..n_restarts)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            let initial_permutation = shuffled(&instance.item_ids(), &mut rng);
            run_search(instance, schedule, initial_permutation, &mut rng)
        })
        .collect::<Result<Vec<_>>>()?;

    let (best_idx, best) = results
        .into_iter()
        .enumerate()
        .min_by_key(|(i, r)| (Reverse(OrderedFloat(r.best_value)), *i))
        .context("no restarts were run")?;

    if n_restarts > 1 {
        info!(
            "[RESTARTS] {}: restart {best_idx}/{n_restarts} found the best value {}",
            instance.name, best.best_value
        );
    }

    Ok((best_idx, best))
}
