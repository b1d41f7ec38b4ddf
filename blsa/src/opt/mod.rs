/// The simulated annealing control loop
pub mod annealing;

/// Generation of neighboring permutations
pub mod neighborhood;

/// Independent searches run in parallel
pub mod restarts;
