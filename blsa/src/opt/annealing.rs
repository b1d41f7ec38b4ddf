use crate::opt::neighborhood::{shuffled, swap_neighbor};
use anyhow::{Result, ensure};
use log::{debug, info, trace};
use orthopack::entities::{Instance, Layout};
use orthopack::eval::evaluate;
use orthopack::placement::place;
use orthopack::util::assertions;
use rand::Rng;
use rand::prelude::SmallRng;
use std::time::Instant;
use thousands::Separable;

/// Geometric cooling schedule: the temperature starts at `t0` and is multiplied by `alpha`
/// after every `inner_iterations` neighbors, until it drops to or below `tf`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoolingSchedule {
    t0: f64,
    alpha: f64,
    tf: f64,
    inner_iterations: usize,
}

impl CoolingSchedule {
    pub fn try_new(t0: f64, alpha: f64, tf: f64, inner_iterations: usize) -> Result<Self> {
        ensure!(
            t0.is_finite() && t0 > 0.0,
            "initial temperature must be positive and finite, got {t0}"
        );
        ensure!(
            tf > 0.0 && tf < t0,
            "final temperature must lie in (0, t0 = {t0}), got {tf}"
        );
        ensure!(
            alpha > 0.0 && alpha < 1.0,
            "cooling factor must lie in (0, 1), got {alpha}"
        );
        Ok(CoolingSchedule {
            t0,
            alpha,
            tf,
            inner_iterations,
        })
    }

    pub fn t0(&self) -> f64 {
        self.t0
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn tf(&self) -> f64 {
        self.tf
    }

    pub fn inner_iterations(&self) -> usize {
        self.inner_iterations
    }

    /// Number of temperature levels visited before the final temperature is reached: `⌈log(tf/t0) / log(alpha)⌉`
    pub fn n_cooling_steps(&self) -> usize {
        ((self.tf / self.t0).ln() / self.alpha.ln()).ceil() as usize
    }

    /// Temperature of the `step`-th level, `t0 * alpha^step`
    pub fn temperature_at(&self, step: usize) -> f64 {
        self.t0 * self.alpha.powf(step as f64)
    }
}

/// Outcome of a single search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Value of the best permutation
    pub best_value: f64,
    /// Best permutation (of item ids) encountered during the search
    pub best_permutation: Vec<usize>,
    pub n_cooling_steps: usize,
    /// Number of permutations that were placed and evaluated, the initial one included
    pub n_evaluations: usize,
    /// Number of accepted neighbors
    pub n_accepted: usize,
}

impl SearchResult {
    /// Regenerates the layout of the best permutation
    pub fn layout(&self, instance: &Instance) -> Layout {
        place(instance, &self.best_permutation).1
    }
}

/// Metropolis criterion for maximization: improvements are always accepted,
/// a deterioration `delta <= 0` with probability `exp(delta / temperature)`.
pub fn metropolis(delta: f64, temperature: f64, rng: &mut impl Rng) -> bool {
    delta > 0.0 || rng.random::<f64>() < (delta / temperature).exp()
}

/// Simulated annealing over the order in which items are handed to the Bottom-Left heuristic.
///
/// Starting from `initial_permutation`, every temperature level evaluates `inner_iterations` swap neighbors
/// of the current permutation and moves to them according to the [Metropolis criterion](metropolis).
/// Returns the best permutation encountered and its value.
///
/// Fails only if `initial_permutation` does not contain every item of `instance` exactly once.
pub fn run_search(
    instance: &Instance,
    schedule: &CoolingSchedule,
    initial_permutation: Vec<usize>,
    rng: &mut impl Rng,
) -> Result<SearchResult> {
    ensure!(
        assertions::is_permutation_of(&initial_permutation, instance),
        "initial permutation must contain every item id of {} exactly once, got {:?}",
        instance.name,
        initial_permutation
    );
    let start = Instant::now();

    let eval_permutation = |permutation: &[usize]| evaluate(&place(instance, permutation).1);

    let mut current = initial_permutation;
    let mut current_value = eval_permutation(&current);
    let mut best = current.clone();
    let mut best_value = current_value;

    let mut n_evaluations = 1;
    let mut n_accepted = 0;

    //permutations of less than two items have no neighbors
    let explore = current.len() >= 2;
    if !explore {
        debug!("[SA] {} has a single item, skipping the neighborhood search", instance.name);
    }

    let n_cooling_steps = schedule.n_cooling_steps();
    for step in 0..n_cooling_steps {
        let temperature = schedule.temperature_at(step);
        if explore {
            for _ in 0..schedule.inner_iterations {
                let candidate = swap_neighbor(&current, rng);
                let candidate_value = eval_permutation(&candidate);
                n_evaluations += 1;

                if metropolis(candidate_value - current_value, temperature, rng) {
                    current = candidate;
                    current_value = candidate_value;
                    n_accepted += 1;

                    if current_value > best_value {
                        trace!("[SA] improved best: {best_value} -> {current_value} (t: {temperature:.3})");
                        best.clone_from(&current);
                        best_value = current_value;
                    }
                }
            }
        }
        if (step + 1) % 50 == 0 {
            debug!(
                "[SA] step {}, t: {temperature:.3}, current: {current_value}, best: {best_value}",
                step + 1
            );
        }
    }

    info!(
        "[SA] {}: best value {} after {} cooling steps, {} evaluations ({} accepted) in {:.3}ms",
        instance.name,
        best_value,
        n_cooling_steps,
        n_evaluations.separate_with_commas(),
        n_accepted.separate_with_commas(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(SearchResult {
        best_value,
        best_permutation: best,
        n_cooling_steps,
        n_evaluations,
        n_accepted,
    })
}

/// Simulated annealing optimizer owning its instance and random source.
pub struct AnnealingScheduler {
    pub instance: Instance,
    pub schedule: CoolingSchedule,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

impl AnnealingScheduler {
    pub fn new(instance: Instance, schedule: CoolingSchedule, rng: SmallRng) -> Self {
        Self {
            instance,
            schedule,
            rng,
        }
    }

    /// Runs a search starting from a uniformly shuffled item order.
    pub fn solve(&mut self) -> Result<SearchResult> {
        let initial_permutation = shuffled(&self.instance.item_ids(), &mut self.rng);
        run_search(
            &self.instance,
            &self.schedule,
            initial_permutation,
            &mut self.rng,
        )
    }
}
