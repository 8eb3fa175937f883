use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::RngCore;
use smz3rando::errors::GenerationError;
use smz3rando::item_settings::ItemSettingOptions;
use smz3rando::randomize::{generate_with_retries, rng_from_seed, Randomizer};
use smz3rando::settings::{Config, GameMode, KeysanityMode};

#[derive(Parser)]
struct Args {
    #[arg(long, default_value_t = 100)]
    test_cycles: usize,

    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Stop handing out seeds once this many have failed.
    #[arg(long, default_value_t = 10)]
    max_failures: usize,

    #[arg(long, default_value_t = 0)]
    base_seed: u64,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 1)]
    players: usize,

    #[arg(long)]
    keysanity: Option<KeysanityMode>,
}

#[derive(Default)]
struct Tally {
    successes: usize,
    cancelled: usize,
    failures: Vec<(u64, String)>,
}

impl Tally {
    /// Records one cycle and returns whether the run should stop.
    fn record(&mut self, seed: u64, result: Result<()>, max_failures: usize) -> bool {
        match result {
            Ok(()) => self.successes += 1,
            Err(e) if e.downcast_ref::<GenerationError>() == Some(&GenerationError::Cancelled) => {
                self.cancelled += 1;
            }
            Err(e) => {
                warn!("{e:#}");
                self.failures.push((seed, format!("{e:#}")));
            }
        }
        !self.failures.is_empty() && self.failures.len() >= max_failures
    }
}

fn build_configs(args: &Args) -> Result<Vec<Config>> {
    let mut config: Config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Unable to read config {}", path.display()))?;
            serde_json::from_str(&json)?
        }
        None => Config::default(),
    };
    if let Some(mode) = args.keysanity {
        config.keysanity_mode = mode;
    }
    if args.players > 1 {
        config.game_mode = GameMode::Multiworld;
    }
    Ok((0..args.players)
        .map(|i| Config {
            player_name: format!("Player {}", i + 1),
            ..config.clone()
        })
        .collect())
}

fn seed_for_cycle(base_seed: u64, cycle: usize) -> u64 {
    rng_from_seed(base_seed ^ cycle as u64).next_u64()
}

fn perform_test_cycle(
    randomizer: &Randomizer,
    seed: u64,
    test_cycle: usize,
    cancel: &AtomicBool,
) -> Result<()> {
    let randomization = generate_with_retries(randomizer, seed, cancel)
        .with_context(|| format!("Failed during test cycle {test_cycle} (seed {seed})"))?;
    info!(
        "Test cycle {test_cycle}: seed {} with {} spheres",
        randomization.seed,
        randomization.playthrough.spheres.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let configs = build_configs(&args)?;
    let options = ItemSettingOptions::load()?;
    let randomizer = Randomizer::new(&configs, &options)?;

    let next_cycle = AtomicUsize::new(0);
    let cancel = AtomicBool::new(false);
    let tally = Mutex::new(Tally::default());

    std::thread::scope(|s| {
        for _ in 0..args.threads.max(1) {
            s.spawn(|| loop {
                if cancel.load(Ordering::Relaxed) {
                    break;
                }
                let cycle = next_cycle.fetch_add(1, Ordering::Relaxed);
                if cycle >= args.test_cycles {
                    break;
                }
                let seed = seed_for_cycle(args.base_seed, cycle);
                let result = perform_test_cycle(&randomizer, seed, cycle + 1, &cancel);
                let Ok(mut tally) = tally.lock() else {
                    break;
                };
                if tally.record(seed, result, args.max_failures) {
                    cancel.store(true, Ordering::Relaxed);
                }
            });
        }
    });

    let tally = match tally.into_inner() {
        Ok(t) => t,
        Err(_) => bail!("A worker panicked while recording results"),
    };
    info!(
        "{} succeeded, {} failed, {} cancelled",
        tally.successes,
        tally.failures.len(),
        tally.cancelled
    );
    for (seed, e) in &tally.failures {
        info!("Seed {seed}: {e}");
    }
    if cancel.load(Ordering::Relaxed) {
        bail!("Stopped after {} failures", tally.failures.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_max_failures() {
        let mut tally = Tally::default();
        assert!(!tally.record(1, Ok(()), 2));
        assert!(!tally.record(2, Err(anyhow::anyhow!("no location accepts Boots")), 2));
        assert!(tally.record(3, Err(anyhow::anyhow!("no location accepts Hammer")), 2));
        assert_eq!(tally.successes, 1);
        assert_eq!(tally.failures.len(), 2);
    }

    #[test]
    fn cancelled_cycles_are_not_failures() {
        let mut tally = Tally::default();
        let cancelled =
            anyhow::Error::new(GenerationError::Cancelled).context("Failed during test cycle 4");
        assert!(!tally.record(4, Err(cancelled), 1));
        assert_eq!(tally.cancelled, 1);
        assert!(tally.failures.is_empty());
    }
}
