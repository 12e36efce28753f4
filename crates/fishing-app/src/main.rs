//! fishing-app: headless runner for the fishing game.
//!
//! Usage:
//!   fishing-app --script session.json --ticks 900
//!   fishing-app --tunables tunables.json --seed 7 --realtime

mod game_loop;
mod script;

use std::path::PathBuf;
use std::process;

use fishing_sim::core::config::{load_tunables, ConfigError, Tunables};
use fishing_sim::{FishingEngine, SimConfig};

use crate::game_loop::LoopOptions;
use crate::script::InputScript;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
struct Args {
    tunables: Option<PathBuf>,
    script: Option<PathBuf>,
    seed: Option<u64>,
    options: LoopOptions,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(parsed) {
        eprintln!("fishing-app: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "fishing-app: run a fishing session without a window\n\
         \n\
           --tunables <path>  Tunables JSON (default: built-in values)\n\
           --script <path>    Scripted input steps (default: no input)\n\
           --ticks <N>        Frames to run (default: 600)\n\
           --seed <N>         RNG seed (default: 42)\n\
           --realtime         Run at 60 Hz instead of flat out\n\
         \n\
         The final snapshot is printed to stdout as JSON.\n"
    );
}

fn parse_args(args: &[String]) -> Result<Args, AppError> {
    let mut parsed = Args::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--realtime" => parsed.options.realtime = true,
            flag @ ("--tunables" | "--script" | "--ticks" | "--seed") => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))?;
                match flag {
                    "--tunables" => parsed.tunables = Some(PathBuf::from(value)),
                    "--script" => parsed.script = Some(PathBuf::from(value)),
                    "--ticks" => parsed.options.ticks = parse_number(flag, value)?,
                    _ => parsed.seed = Some(parse_number(flag, value)?),
                }
                i += 1;
            }
            other => return Err(AppError::Usage(format!("Unknown argument: {other}"))),
        }
        i += 1;
    }
    Ok(parsed)
}

fn parse_number(flag: &str, value: &str) -> Result<u64, AppError> {
    value
        .parse()
        .map_err(|_| AppError::Usage(format!("{flag} expects a whole number, got {value}")))
}

fn run(args: Args) -> Result<(), AppError> {
    let tunables = match &args.tunables {
        Some(path) => load_tunables(path)?,
        None => Tunables::default(),
    };
    let script = match &args.script {
        Some(path) => InputScript::load(path)?,
        None => InputScript::default(),
    };
    if script.is_empty() {
        log::info!("no input script; the session runs without input");
    } else if let Some(last) = script.last_tick().filter(|&t| t >= args.options.ticks) {
        log::warn!(
            "script has steps up to frame {last} but only {} frames will run",
            args.options.ticks
        );
    }

    let mut config = SimConfig {
        tunables,
        ..Default::default()
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut engine = FishingEngine::new(config);
    let snapshot = game_loop::run(&mut engine, &script, &args.options);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn parses_all_flags() {
        let args = parse_args(&strings(&[
            "--tunables",
            "t.json",
            "--script",
            "s.json",
            "--ticks",
            "120",
            "--seed",
            "9",
            "--realtime",
        ]))
        .unwrap();
        assert_eq!(args.tunables, Some(PathBuf::from("t.json")));
        assert_eq!(args.script, Some(PathBuf::from("s.json")));
        assert_eq!(args.options.ticks, 120);
        assert_eq!(args.seed, Some(9));
        assert!(args.options.realtime);
    }

    #[test]
    fn defaults_without_flags() {
        let args = parse_args(&[]).unwrap();
        assert_eq!(args.options.ticks, 600);
        assert!(!args.options.realtime);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse_args(&strings(&["--ticks"])),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&strings(&["--seed", "abc"])),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&strings(&["--fast"])),
            Err(AppError::Usage(_))
        ));
    }
}
