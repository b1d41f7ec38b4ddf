use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use blsa::config::SAConfig;
use blsa::io::cli::Cli;
use blsa::io::output::SAOutput;
use blsa::opt::annealing::CoolingSchedule;
use blsa::opt::restarts::solve_with_restarts;
use blsa::io;
use clap::Parser as ClapParser;
use log::{error, info, warn};
use orthopack::io::svg::layout_to_svg;
use orthopack::io::{export, import};

/// Name of the file in the solution folder collecting one line per solved instance
const RESULTS_FILE: &str = "results.txt";

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SAConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    //fail fast on an invalid configuration, before any instance is touched
    let schedule = config.schedule()?;

    info!("Successfully parsed SAConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let instance_files = io::instance_files(&args.input)?;
    let batch = instance_files.len() > 1 || args.input.is_dir();
    info!(
        "[MAIN] {} instance file(s) to solve in {}",
        instance_files.len(),
        args.input.display()
    );

    let results_path = args.solution_folder.join(RESULTS_FILE);
    fs::write(&results_path, "instance | best value | time (s)\n")?;

    for instance_file in &instance_files {
        let outcome = solve_instance(instance_file, &config, &schedule, &args.solution_folder);
        match (outcome, batch) {
            (Ok(line), _) => io::append_line(&results_path, &line)?,
            (Err(e), true) => error!("[MAIN] skipping {}: {e:#}", instance_file.display()),
            (Err(e), false) => return Err(e),
        }
    }

    Ok(())
}

/// Solves a single instance file and writes its solution (JSON and SVG) to `output_folder`.
/// Returns the line to report in the results file.
fn solve_instance(
    instance_file: &Path,
    config: &SAConfig,
    schedule: &CoolingSchedule,
    output_folder: &Path,
) -> Result<String> {
    info!("[MAIN] solving {}", instance_file.display());
    let ext_instance = io::read_instance(instance_file)?;
    let instance = import::import(&ext_instance)?;

    let seed = match config.prng_seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            info!("[MAIN] no seed configured, using {seed} from entropy");
            seed
        }
    };

    let start = Instant::now();
    let (_, result) = solve_with_restarts(&instance, schedule, config.n_restarts, seed)?;
    let layout = result.layout(&instance);
    let run_time = start.elapsed();

    info!(
        "[MAIN] {}: value {} with {}/{} items placed, density {:.3}% in {:.3}s",
        instance.name,
        result.best_value,
        layout.n_placed(),
        instance.n_items(),
        layout.density() * 100.0,
        run_time.as_secs_f64()
    );

    let input_stem = instance_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(&instance.name);

    {
        let output = SAOutput {
            instance: ext_instance,
            solution: export::export(&instance, &result.best_permutation, &layout, run_time),
            config: *config,
            prng_seed: seed,
        };

        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    {
        let svg_path = output_folder.join(format!("sol_{input_stem}.svg"));
        let svg = layout_to_svg(&layout, config.svg_draw_options, &instance.name);
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(format!(
        "{} | {} | {:.4}",
        instance.name,
        result.best_value,
        run_time.as_secs_f64()
    ))
}
