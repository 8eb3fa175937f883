use anyhow::Result;
use hashbrown::HashSet;
use smz3rando::errors::GenerationError;
use smz3rando::item_settings::ItemSettingOptions;
use smz3rando::randomize::rng_from_seed;
use smz3rando::settings::Config;
use smz3rando::world::region::RegionKind;
use smz3rando::world::World;
use smz3rando_game::{BossType, ItemCategory, ItemType, RewardType, ZELDA_LOCATION_OFFSET};
use smz3rando_logic::Progression;

fn setup_world(config: Config, seed: u64) -> Result<World> {
    let options = ItemSettingOptions::load()?;
    let pending = World::new(0, config, &options)?;
    Ok(pending.setup(&mut rng_from_seed(seed)))
}

#[test]
fn location_ids_are_unique_per_game() -> Result<()> {
    let world = setup_world(Config::default(), 0)?;
    let ids: HashSet<usize> = world.locations.iter().map(|l| l.id).collect();
    assert_eq!(ids.len(), world.locations.len());
    assert_eq!(world.locations.len(), 316);
    assert_eq!(ids.iter().filter(|&&id| id >= ZELDA_LOCATION_OFFSET).count(), 216);
    assert_eq!(ids.iter().filter(|&&id| id < ZELDA_LOCATION_OFFSET).count(), 100);
    for (idx, loc) in world.locations.iter().enumerate() {
        assert_eq!(loc.idx, idx);
        assert!(world.region(loc.region).locations.contains(&idx));
    }
    Ok(())
}

#[test]
fn setup_assigns_every_dungeon_reward() -> Result<()> {
    let world = setup_world(Config::default(), 5)?;
    let rewards: Vec<RewardType> = world
        .reward_regions()
        .filter_map(|r| r.reward_type())
        .collect();
    assert!(!rewards.contains(&RewardType::None));
    let count = |t: RewardType| rewards.iter().filter(|&&r| r == t).count();
    assert_eq!(count(RewardType::PendantGreen), 1);
    assert_eq!(count(RewardType::PendantRed), 1);
    assert_eq!(count(RewardType::PendantBlue), 1);
    assert_eq!(count(RewardType::CrystalRed), 2);
    assert_eq!(count(RewardType::CrystalBlue), 5);
    assert_eq!(count(RewardType::Agahnim), 1);
    assert_eq!(count(RewardType::MetroidBoss), 4);
    Ok(())
}

#[test]
fn setup_picks_medallions() -> Result<()> {
    let world = setup_world(Config::default(), 9)?;
    for kind in [RegionKind::MiseryMire, RegionKind::TurtleRock] {
        let medallion = world.region(kind).medallion();
        assert!(matches!(
            medallion,
            Some(ItemType::Bombos | ItemType::Ether | ItemType::Quake)
        ));
    }
    assert_eq!(world.region(RegionKind::EasternPalace).medallion(), None);
    Ok(())
}

#[test]
fn same_seed_sets_up_the_same_world() -> Result<()> {
    let a = setup_world(Config::default(), 17)?;
    let b = setup_world(Config::default(), 17)?;
    let rewards = |w: &World| -> Vec<_> { w.regions.iter().map(|r| r.reward_type()).collect() };
    let medallions = |w: &World| -> Vec<_> { w.regions.iter().map(|r| r.medallion()).collect() };
    assert_eq!(rewards(&a), rewards(&b));
    assert_eq!(medallions(&a), medallions(&b));
    Ok(())
}

#[test]
fn randomized_bottles_stay_bottles() -> Result<()> {
    let plain = setup_world(Config::default(), 2)?;
    let world = setup_world(
        Config {
            randomized_bottles: true,
            ..Config::default()
        },
        2,
    )?;
    let bottles = |w: &World| {
        w.pools
            .all_items()
            .filter(|i| i.item_type.is_in_category(ItemCategory::Bottle))
            .count()
    };
    assert_eq!(bottles(&plain), bottles(&world));
    assert!(plain
        .pools
        .all_items()
        .filter(|i| i.item_type.is_in_category(ItemCategory::Bottle))
        .all(|i| i.item_type == ItemType::Bottle));
    Ok(())
}

#[test]
fn capability_queries() -> Result<()> {
    let world = setup_world(Config::default(), 0)?;
    let eastern = world.region(RegionKind::EasternPalace);
    assert!(eastern.as_dungeon().is_some());
    assert!(eastern.as_reward_region().is_some());
    assert!(eastern.as_medallion_region().is_none());

    let kraid = world.region(RegionKind::KraidsLair);
    assert_eq!(kraid.boss_type(), Some(BossType::Kraid));
    assert_eq!(kraid.reward_type(), Some(RewardType::MetroidBoss));
    assert!(kraid.as_dungeon().is_none());

    let south = world.region(RegionKind::LightWorldSouth);
    assert!(south.as_dungeon().is_none());
    assert!(south.as_reward_region().is_none());
    assert!(south.as_boss_region().is_none());

    assert!(world.region(RegionKind::MiseryMire).as_medallion_region().is_some());
    Ok(())
}

#[test]
fn free_locations_need_nothing() -> Result<()> {
    let world = setup_world(Config::default(), 0)?;
    let lg = world.logic();
    let p = Progression::new();
    // Link's Uncle and Sanctuary
    for id in [ZELDA_LOCATION_OFFSET + 99, ZELDA_LOCATION_OFFSET + 91] {
        let loc = world.location_by_id(id).ok_or_else(|| anyhow::anyhow!("missing {id}"))?;
        assert!(loc.is_available(&lg, &p));
    }
    // Varia Suit waits on Kraid
    let varia = world.location_by_id(48).ok_or_else(|| anyhow::anyhow!("missing 48"))?;
    assert!(!varia.is_available(&lg, &p));
    Ok(())
}

#[test]
fn missing_items_for_pegasus_rocks() -> Result<()> {
    let world = setup_world(Config::default(), 0)?;
    let idx = world
        .location_idx(ZELDA_LOCATION_OFFSET + 18)
        .ok_or_else(|| anyhow::anyhow!("missing Pegasus Rocks"))?;
    let missing = world.missing_required_items(idx, &Progression::new());
    assert_eq!(missing, vec![vec![ItemType::Boots]]);
    Ok(())
}

#[test]
fn unknown_preference_location_is_rejected() -> Result<()> {
    let options = ItemSettingOptions::load()?;
    let mut config = Config::default();
    config
        .location_items
        .insert(9999, smz3rando::settings::LocationItemPreference::Junk);
    match World::new(0, config, &options) {
        Err(GenerationError::ConfigurationError(_)) => Ok(()),
        Err(e) => Err(e.into()),
        Ok(_) => anyhow::bail!("unknown location id accepted"),
    }
}

#[test]
fn chest_holding_its_own_key_opens() -> Result<()> {
    let mut world = setup_world(Config::default(), 0)?;
    // Skull Woods Big Chest, Swamp Palace Big Chest, Tower of Hera Big Key Chest
    for (n, key) in [
        (147, ItemType::BigKeySW),
        (137, ItemType::BigKeySP),
        (117, ItemType::KeyTH),
    ] {
        let idx = world
            .location_idx(ZELDA_LOCATION_OFFSET + n)
            .ok_or_else(|| anyhow::anyhow!("missing location {n}"))?;
        let item = *world
            .pools
            .all_items()
            .find(|i| i.item_type == key)
            .ok_or_else(|| anyhow::anyhow!("no {key:?} in the pools"))?;
        let p = world.progression_with_rewards(
            world
                .pools
                .all_items()
                .map(|i| i.item_type)
                .filter(|&t| t != key),
        );

        assert!(!world.locations[idx].is_available(&world.logic(), &p));
        world.locations[idx].item = Some(item);
        assert!(world.locations[idx].is_available(&world.logic(), &p));
    }
    Ok(())
}

#[test]
fn starting_items_get_their_own_ids() -> Result<()> {
    let mut config = Config::default();
    config.starting_items.insert(ItemType::Lamp, 1);
    config.item_options.insert("ProgressiveSword".to_string(), 2);
    let world = setup_world(config, 0)?;
    assert_eq!(world.starting_inventory.len(), 3);

    let mut ids = HashSet::new();
    for item in world.pools.all_items() {
        assert!(ids.insert(item.id));
    }
    for item in &world.starting_inventory {
        assert_eq!(item.world, world.id);
        assert!(ids.insert(item.id), "{:?} reuses id {}", item.item_type, item.id);
    }
    Ok(())
}
