use std::fs;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{LevelFilter, info};
use orthopack::io::ext_repr::ExtInstance;
use orthopack::io::parse::parse_txt;
use serde::Serialize;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod output;

/// Extensions of the files recognized as instances
pub const INSTANCE_EXTENSIONS: [&str; 2] = ["txt", "json"];

/// Reads an instance, either in the plain-text format or as JSON (`.json` extension).
/// Plain-text instances without a name are named after the file.
pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let file = File::open(path)
                .with_context(|| format!("could not open instance file: {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("could not parse instance file: {}", path.display()))
        }
        _ => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("could not open instance file: {}", path.display()))?;
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unnamed");
            parse_txt(&content, stem)
                .with_context(|| format!("could not parse instance file: {}", path.display()))
        }
    }
}

/// Lists the instance files to solve: `input` itself if it is a file,
/// otherwise all instance files directly inside the folder, sorted by name.
pub fn instance_files(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }
    let entries = fs::read_dir(input)
        .with_context(|| format!("could not read folder: {}", input.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;

    Ok(entries
        .into_iter()
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| INSTANCE_EXTENSIONS.contains(&e))
        })
        .sorted()
        .collect_vec())
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Appends a single line to a (possibly new) text file
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("could not open results file: {}", path.display()))?;
    writeln!(file, "{line}")?;
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] epoch: {}", jiff::Timestamp::now());
    Ok(())
}
