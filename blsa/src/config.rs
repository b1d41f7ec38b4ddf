use crate::opt::annealing::CoolingSchedule;
use anyhow::Result;
use orthopack::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration for the Bottom-Left Simulated Annealing optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct SAConfig {
    /// Initial temperature
    pub t0: f64,
    /// Factor by which the temperature is multiplied after every temperature level, in (0, 1)
    pub alpha: f64,
    /// Final temperature, the search stops once the temperature drops to or below this value
    pub tf: f64,
    /// Number of neighbors evaluated per temperature level
    pub inner_iterations: usize,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of independent searches, run in parallel. The best result is kept.
    pub n_restarts: usize,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl SAConfig {
    pub fn schedule(&self) -> Result<CoolingSchedule> {
        CoolingSchedule::try_new(self.t0, self.alpha, self.tf, self.inner_iterations)
    }
}

impl Default for SAConfig {
    fn default() -> Self {
        Self {
            t0: 1000.0,
            alpha: 0.99,
            tf: 1.0,
            inner_iterations: 50,
            prng_seed: Some(0),
            n_restarts: 1,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SAConfig::default().schedule().is_ok());
    }

    #[test]
    fn config_from_json_without_svg_options() {
        let json = r#"{"t0": 50.0, "alpha": 0.9, "tf": 0.5, "inner_iterations": 10, "prng_seed": null, "n_restarts": 4}"#;
        let config: SAConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.prng_seed, None);
        assert_eq!(config.n_restarts, 4);
        assert_eq!(config.svg_draw_options, SvgDrawOptions::default());
        assert!(config.schedule().is_ok());
    }
}
