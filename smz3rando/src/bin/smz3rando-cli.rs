use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use smz3rando::item_settings::ItemSettingOptions;
use smz3rando::randomize::{generate_with_retries, Randomizer};
use smz3rando::settings::{Config, GameMode, ItemPlacementRule, KeysanityMode};

#[derive(Parser)]
struct Args {
    /// JSON file with the settings shared by every player.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 1)]
    players: usize,

    #[arg(long)]
    keysanity: Option<KeysanityMode>,

    #[arg(long)]
    placement_rule: Option<ItemPlacementRule>,

    /// Where to write the JSON summary; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Unable to read config {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Unable to parse config {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(mode) = args.keysanity {
        config.keysanity_mode = mode;
    }
    if let Some(rule) = args.placement_rule {
        config.item_placement_rule = rule;
    }
    if args.players > 1 {
        config.game_mode = GameMode::Multiworld;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let configs: Vec<Config> = (0..args.players)
        .map(|i| {
            let mut c = config.clone();
            if args.players > 1 {
                c.player_name = format!("{} {}", config.player_name, i + 1);
            }
            c
        })
        .collect();

    let options = ItemSettingOptions::load()?;
    let randomizer = Randomizer::new(&configs, &options)?;
    let cancel = AtomicBool::new(false);
    let randomization = generate_with_retries(&randomizer, args.seed, &cancel)?;
    info!(
        "Generated seed {} with {} spheres",
        randomization.seed,
        randomization.playthrough.spheres.len()
    );

    let summary = serde_json::to_string_pretty(&randomization.summary())?;
    match &args.output {
        Some(path) => std::fs::write(path, summary)
            .with_context(|| format!("Unable to write {}", path.display()))?,
        None => println!("{summary}"),
    }
    Ok(())
}
