//! Generate a default analyzer configuration file
//!
//! Writes the default `AnalyzerConfig` as pretty-printed JSON, giving a
//! starting point for tuning thresholds or switching the legacy modes on.

use colorguide::AnalyzerConfig;
use std::{env, path::PathBuf, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = match args.len() {
        1 => PathBuf::from("config.json"),
        2 => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: {} [output.json]", args[0]);
            process::exit(1);
        }
    };

    let config = AnalyzerConfig::default();
    if let Err(err) = config.to_json_file(&path) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }

    println!("Wrote default configuration to {}", path.display());
}
