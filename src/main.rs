//! grid-monitor entry point: CLI wiring and run configuration.

use std::io;
use std::path::Path;
use std::process;
use std::time::Duration;

use tracing::info;

use grid_monitor::config::{OutputFormat, RunConfig};
use grid_monitor::logging;
use grid_monitor::nodes::UniformSource;
use grid_monitor::reporting::renderer_for;
use grid_monitor::sim::monitor::Monitor;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    seed_override: Option<u64>,
    pause_override: Option<u64>,
    format_override: Option<String>,
}

fn print_help() {
    eprintln!("grid-monitor: toy power grid stability monitor");
    eprintln!();
    eprintln!("Usage: grid-monitor [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load run settings from a TOML file");
    eprintln!("  --seed <u64>             Seed the power readings");
    eprintln!("  --pause-ms <u64>         Pause between iterations (default: 2000)");
    eprintln!("  --format <text|json>     Report format (default: text)");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.");
}

/// Returns the value following flag `args[*i]`, exiting if it is missing.
fn flag_value(args: &[String], i: &mut usize, what: &str) -> String {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("error: {flag} requires {what}");
            process::exit(1);
        }
    }
}

fn parse_u64_flag(flag: &str, value: &str) -> u64 {
    value.parse::<u64>().unwrap_or_else(|_| {
        eprintln!("error: {flag} value \"{value}\" is not a valid u64");
        process::exit(1);
    })
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        seed_override: None,
        pause_override: None,
        format_override: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                cli.config_path = Some(flag_value(&args, &mut i, "a path argument"));
            }
            "--seed" => {
                let v = flag_value(&args, &mut i, "a u64 argument");
                cli.seed_override = Some(parse_u64_flag("--seed", &v));
            }
            "--pause-ms" => {
                let v = flag_value(&args, &mut i, "a u64 argument");
                cli.pause_override = Some(parse_u64_flag("--pause-ms", &v));
            }
            "--format" => {
                cli.format_override = Some(flag_value(&args, &mut i, "text or json"));
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    logging::init();
    let cli = parse_args();

    // --config file first, then individual flag overrides
    let mut config = match cli.config_path {
        Some(ref path) => RunConfig::from_toml_file(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        }),
        None => RunConfig::default(),
    };

    if let Some(seed) = cli.seed_override {
        config.run.seed = Some(seed);
    }
    if let Some(pause_ms) = cli.pause_override {
        config.run.pause_ms = pause_ms;
    }
    if let Some(format) = cli.format_override {
        config.output.format = format;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let format: OutputFormat = config.output_format();
    info!(?format, seed = ?config.run.seed, pause_ms = config.run.pause_ms, "run configured");

    let stdout = io::stdout();
    let mut renderer = renderer_for(format, stdout.lock());
    let source = UniformSource::new(config.run.seed);
    let pause = Duration::from_millis(config.run.pause_ms);

    let result = Monitor::with_default_nodes(source, pause, renderer.as_mut())
        .and_then(|mut monitor| monitor.run(renderer.as_mut()));
    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
