use std::sync::atomic::AtomicBool;

use anyhow::{bail, Result};
use hashbrown::HashSet;
use smz3rando::errors::{FillPhase, GenerationError};
use smz3rando::item_settings::ItemSettingOptions;
use smz3rando::randomize::{generate_with_retries, verify_fill, Randomization, Randomizer};
use smz3rando::settings::{
    Config, GameMode, ItemPlacementRule, KeysanityMode, LocationItemPreference,
};
use smz3rando::world::location::SPHERE_ONE;
use smz3rando::world::region::RegionKind;
use smz3rando::world::{LocationRef, World};
use smz3rando_game::{ItemType, LocationId, ZELDA_LOCATION_OFFSET};

fn generate(configs: &[Config], seed: u64) -> Result<Randomization> {
    let options = ItemSettingOptions::load()?;
    let randomizer = Randomizer::new(configs, &options)?;
    let cancel = AtomicBool::new(false);
    generate_with_retries(&randomizer, seed, &cancel)
}

fn multiworld(players: usize) -> Vec<Config> {
    (0..players)
        .map(|i| Config {
            game_mode: GameMode::Multiworld,
            player_name: format!("Player {}", i + 1),
            ..Config::default()
        })
        .collect()
}

fn location_ref(world: &World, id: LocationId) -> Result<LocationRef> {
    match world.location_idx(id) {
        Some(idx) => Ok(LocationRef {
            world: world.id,
            idx,
        }),
        None => bail!("unknown location id {id}"),
    }
}

#[test]
fn single_world_fill_is_complete_and_beatable() -> Result<()> {
    // Seeds 1, 2 and 26 put a big key or small key in the chest it opens.
    for seed in [1, 2, 26] {
        let r = generate(&[Config::default()], seed)?;
        verify_fill(&r.worlds)?;

        let world = &r.worlds[0];
        assert_eq!(world.empty_locations().count(), 0);

        // Every progression item of the pool turns up in some sphere.
        let found: HashSet<(usize, usize)> = r
            .playthrough
            .spheres
            .iter()
            .flat_map(|s| &s.items)
            .map(|i| (i.world, i.id))
            .collect();
        for item in world.pools.progression.iter().chain(&world.pools.dungeon) {
            assert!(
                found.contains(&(item.world, item.id)),
                "seed {seed}: {:?} never became reachable",
                item.item_type
            );
        }
        assert!(r.playthrough.inaccessible.len() < 15);
    }
    Ok(())
}

#[test]
fn every_item_is_placed_once() -> Result<()> {
    let r = generate(&multiworld(2), 7)?;
    let mut seen = HashSet::new();
    for world in &r.worlds {
        for loc in &world.locations {
            let Some(item) = loc.item else {
                bail!("{} is empty", loc.full_name());
            };
            assert!(seen.insert((item.world, item.id)), "{item:?} placed twice");
        }
    }
    let locations: usize = r.worlds.iter().map(|w| w.locations.len()).sum();
    assert_eq!(seen.len(), locations);
    Ok(())
}

#[test]
fn same_seed_gives_same_fill() -> Result<()> {
    let a = generate(&[Config::default()], 42)?;
    let b = generate(&[Config::default()], 42)?;
    assert_eq!(
        serde_json::to_string(&a.summary())?,
        serde_json::to_string(&b.summary())?
    );

    let c = generate(&[Config::default()], 43)?;
    assert_ne!(
        serde_json::to_string(&a.summary())?,
        serde_json::to_string(&c.summary())?
    );
    Ok(())
}

#[test]
fn shields_stay_in_their_own_world() -> Result<()> {
    for seed in 0..3 {
        let r = generate(&multiworld(2), seed)?;
        for world in &r.worlds {
            for loc in &world.locations {
                if let Some(item) = loc.item {
                    if item.item_type == ItemType::ProgressiveShield {
                        assert_eq!(item.world, world.id, "shield crossed into {}", loc.full_name());
                    }
                }
            }
        }
    }
    Ok(())
}

#[test]
fn hyrule_castle_start_is_sphere_one() -> Result<()> {
    let r = generate(&[Config::default()], 3)?;
    let world = &r.worlds[0];
    let first = &r.playthrough.spheres[0];
    // Sanctuary, Hyrule Castle map chest, Link's Uncle, secret passage
    for n in [91, 96, 99, 100] {
        let loc = location_ref(world, ZELDA_LOCATION_OFFSET + n)?;
        assert!(first.locations.contains(&loc));
    }
    assert!(first.items.iter().any(|i| i.progression));
    Ok(())
}

#[test]
fn dungeon_items_stay_in_their_dungeon() -> Result<()> {
    for seed in 0..3 {
        let r = generate(&[Config::default()], seed)?;
        let world = &r.worlds[0];
        for loc in &world.locations {
            let Some(item) = loc.item else { continue };
            if item.is_dungeon_item() {
                assert!(
                    world.region(loc.region).is_region_item(&item),
                    "{:?} found at {}",
                    item.item_type,
                    loc.full_name()
                );
            }
        }
    }
    Ok(())
}

#[test]
fn keysanity_fill_succeeds() -> Result<()> {
    let config = Config {
        keysanity_mode: KeysanityMode::Both,
        ..Config::default()
    };
    let r = generate(&[config], 5)?;
    verify_fill(&r.worlds)?;
    let keycards = r.worlds[0]
        .locations
        .iter()
        .filter(|l| l.item.is_some_and(|i| i.is_keycard()))
        .count();
    assert_eq!(keycards, r.worlds[0].pools.keycards.len());
    Ok(())
}

#[test]
fn pool_is_padded_to_location_count() -> Result<()> {
    let r = generate(&[Config::default()], 11)?;
    let world = &r.worlds[0];
    let placeable = world.pools.len() - world.pools.keycards.len();
    assert!(placeable >= world.locations.len());
    assert_eq!(world.empty_locations().count(), 0);
    Ok(())
}

#[test]
fn impossible_preference_fails_every_attempt() -> Result<()> {
    // Pegasus Rocks can only be opened with the boots it would hold.
    let mut config = Config {
        max_attempts: 3,
        ..Config::default()
    };
    config.location_items.insert(
        ZELDA_LOCATION_OFFSET + 18,
        LocationItemPreference::Item(ItemType::Boots),
    );
    let Err(err) = generate(&[config], 1) else {
        bail!("generation should have failed");
    };
    assert!(format!("{err}").contains("Exhausted randomization attempts"));
    match err.downcast_ref::<GenerationError>() {
        Some(GenerationError::GenerationFailure { phase, .. }) => {
            assert_eq!(*phase, FillPhase::Preferences)
        }
        other => bail!("unexpected error {other:?}"),
    }
    Ok(())
}

#[test]
fn cancelled_attempt_is_not_retried() -> Result<()> {
    let options = ItemSettingOptions::load()?;
    let configs = [Config::default()];
    let randomizer = Randomizer::new(&configs, &options)?;
    let cancel = AtomicBool::new(true);
    let err = match randomizer.randomize(1, 1, &cancel) {
        Ok(_) => bail!("cancelled attempt completed"),
        Err(e) => e,
    };
    assert_eq!(err, GenerationError::Cancelled);
    assert!(!err.is_retryable());
    Ok(())
}

#[test]
fn placement_rules_hold_outside_sphere_one() -> Result<()> {
    for rule in [
        ItemPlacementRule::OppositeGame,
        ItemPlacementRule::SameGame,
        ItemPlacementRule::DungeonsAndMetroid,
    ] {
        let config = Config {
            item_placement_rule: rule,
            ..Config::default()
        };
        for seed in 0..2 {
            let r = generate(&[config.clone()], seed)?;
            let world = &r.worlds[0];
            for loc in &world.locations {
                let Some(item) = loc.item else { continue };
                if !item.progression || loc.weight(world) <= SPHERE_ONE {
                    continue;
                }
                assert!(
                    world
                        .region(loc.region)
                        .matches_item_placement_rule(&item, &world.config, &world.config),
                    "{rule:?}: {:?} at {}",
                    item.item_type,
                    loc.full_name()
                );
            }
        }
    }
    Ok(())
}

#[test]
fn early_items_land_in_the_first_sphere() -> Result<()> {
    let mut config = Config::default();
    // Early Pegasus Boots, Early Fighter's Sword
    config.item_options.insert("Boots".to_string(), 2);
    config.item_options.insert("ProgressiveSword".to_string(), 3);
    for seed in 0..3 {
        let r = generate(&[config.clone()], seed)?;
        let first = &r.playthrough.spheres[0];
        for item_type in [ItemType::Boots, ItemType::ProgressiveSword] {
            assert!(
                first.items.iter().any(|i| i.item_type == item_type),
                "seed {seed}: {item_type:?} missing from the first sphere"
            );
        }
    }
    Ok(())
}

#[test]
fn ganons_tower_gets_its_share_of_junk() -> Result<()> {
    for crystals in [7, 4] {
        let configs: Vec<Config> = multiworld(2)
            .into_iter()
            .map(|c| Config {
                ganons_tower_crystal_count: crystals,
                ..c
            })
            .collect();
        let r = generate(&configs, 13)?;
        for world in &r.worlds {
            let junk: HashSet<(usize, usize)> =
                world.pools.junk.iter().map(|i| (i.world, i.id)).collect();
            let in_tower = world
                .region_locations(RegionKind::GanonsTower)
                .filter_map(|l| l.item)
                .filter(|i| junk.contains(&(i.world, i.id)))
                .count();
            assert!(
                in_tower >= 15 * crystals / 7,
                "world {}: {in_tower} junk items in Ganon's Tower",
                world.id
            );
        }
    }
    Ok(())
}

#[test]
fn location_filters_hold_after_fill() -> Result<()> {
    for keysanity_mode in [KeysanityMode::None, KeysanityMode::Zelda] {
        let config = Config {
            keysanity_mode,
            ..Config::default()
        };
        let r = generate(&[config], 21)?;
        let world = &r.worlds[0];
        // Skull Woods Pinball Room only ever holds a Skull Woods key.
        let pinball = location_ref(world, ZELDA_LOCATION_OFFSET + 149)?;
        let item = world.locations[pinball.idx].item;
        assert!(item.is_some_and(|i| i.is(ItemType::KeySW, world.id)), "{item:?}");
        if keysanity_mode == KeysanityMode::None {
            let entrance = location_ref(world, ZELDA_LOCATION_OFFSET + 135)?;
            let item = world.locations[entrance.idx].item;
            assert!(item.is_some_and(|i| i.is(ItemType::KeySP, world.id)), "{item:?}");
        }
    }
    Ok(())
}
