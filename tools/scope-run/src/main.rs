//! scope-run: headless radar session runner.
//!
//! Usage:
//!   scope-run run --ticks 600 --dt 0.05 --every 20 > session.jsonl
//!   scope-run run --config radar.json --commands ops.json --seed 7
//!   scope-run config > radar.json

use std::path::{Path, PathBuf};
use std::process;

use sweepscope_core::commands::OperatorCommand;
use sweepscope_core::config::RadarConfig;
use sweepscope_sim::RadarEngine;
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "config" => cmd_config(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "scope-run: SWEEPSCOPE headless radar runner\n\
         \n\
         Commands:\n\
         \n\
         run       Tick a radar engine and print snapshots as JSON lines\n\
         \n\
           --config <path>    RadarConfig JSON (optional, defaults otherwise)\n\
           --commands <path>  JSON array of operator commands queued before tick 1\n\
           --seed <N>         Override the config seed\n\
           --ticks <N>        Number of ticks (default: 200)\n\
           --dt <secs>        Clock step between ticks (default: 0.05)\n\
           --every <N>        Print every Nth snapshot (default: 1)\n\
         \n\
         config    Print the default RadarConfig as JSON\n\
         \n\
         Set RUST_LOG=debug to see spawn and detection decisions on stderr.\n"
    );
}

fn parse_value(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_value(args, flag) {
        Some(raw) => match raw.parse::<T>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got {raw:?}");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn read_file(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn load_config(args: &[String]) -> RadarConfig {
    let mut config = match parse_value(args, "--config").map(PathBuf::from) {
        Some(path) => match RadarConfig::from_json_str(&read_file(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error in {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => RadarConfig::default(),
    };
    if parse_value(args, "--seed").is_some() {
        config.seed = parse_number(args, "--seed", config.seed);
        info!(seed = config.seed, "seed overridden");
    }
    config
}

fn load_commands(args: &[String]) -> Vec<OperatorCommand> {
    let Some(path) = parse_value(args, "--commands").map(PathBuf::from) else {
        return Vec::new();
    };
    match serde_json::from_str(&read_file(&path)) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("Error parsing commands in {}: {e}", path.display());
            process::exit(1);
        }
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let config = load_config(args);
    let commands = load_commands(args);
    let ticks: u64 = parse_number(args, "--ticks", 200);
    let dt: f64 = parse_number(args, "--dt", 0.05);
    let every: u64 = parse_number(args, "--every", 1).max(1);

    if !(dt.is_finite() && dt > 0.0) {
        eprintln!("Error: --dt must be a positive number of seconds");
        process::exit(1);
    }

    let start = config.start_time;
    let mut engine = match RadarEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: invalid config: {e}");
            process::exit(1);
        }
    };
    engine.queue_commands(commands);

    info!(ticks, dt, every, "session started");
    for k in 1..=ticks {
        let snapshot = engine.tick(start + k as f64 * dt);
        if k % every != 0 {
            continue;
        }
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    }
    info!(
        attempts = engine.spawn_attempts(),
        held = engine.contact_count(),
        active = engine.active_contact_count(),
        "session finished"
    );
}

// --- Config command ---

fn cmd_config() {
    match serde_json::to_string_pretty(&RadarConfig::default()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing config: {e}");
            process::exit(1);
        }
    }
}
