use crate::config::SAConfig;
use orthopack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct SAOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: SAConfig,
    /// Seed from which the solution can be reproduced
    pub prng_seed: u64,
}
