use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use smz3rando::item_settings::ItemSettingOptions;
use smz3rando::randomize::rng_from_seed;
use smz3rando::settings::{Config, KeysanityMode};
use smz3rando::world::World;
use smz3rando_game::{ItemCategory, ItemType};

/// Adding items to a progression never closes a region or a location.
fn check_world(config: Config, seed: u64) -> Result<()> {
    let options = ItemSettingOptions::load()?;
    let mut rng = rng_from_seed(seed);
    let world = World::new(0, config, &options)?.setup(&mut rng);
    let lg = world.logic();

    let mut all_types: Vec<ItemType> = world
        .pools
        .all_items()
        .map(|i| i.item_type)
        .filter(|t| !t.is_in_category(ItemCategory::Junk))
        .collect();

    for _ in 0..40 {
        all_types.shuffle(&mut rng);
        let n = rng.gen_range(0..all_types.len());
        let m = rng.gen_range(n..=all_types.len());
        let p = world.progression_with_rewards(all_types[..n].iter().copied());
        let q = world.progression_with_rewards(all_types[..m].iter().copied());
        assert!(q.is_superset_of(&p));

        for region in &world.regions {
            for require_rewards in [true, false] {
                if region.can_enter(&lg, &p, require_rewards) {
                    assert!(
                        region.can_enter(&lg, &q, require_rewards),
                        "{} closed by extra items",
                        region.name
                    );
                }
            }
        }
        for loc in &world.locations {
            if loc.is_available(&lg, &p) {
                assert!(
                    loc.is_available(&lg, &q),
                    "{} closed by extra items",
                    loc.full_name()
                );
            }
        }
    }
    Ok(())
}

#[test]
fn default_logic_is_monotone() -> Result<()> {
    check_world(Config::default(), 1)
}

#[test]
fn keysanity_logic_is_monotone() -> Result<()> {
    check_world(
        Config {
            keysanity_mode: KeysanityMode::Both,
            ..Config::default()
        },
        2,
    )
}

#[test]
fn everything_opens_with_every_item() -> Result<()> {
    let options = ItemSettingOptions::load()?;
    let world = World::new(0, Config::default(), &options)?.setup(&mut rng_from_seed(3));
    let lg = world.logic();
    let p = world.progression_with_rewards(world.pools.all_items().map(|i| i.item_type));
    let closed: Vec<String> = world
        .locations
        .iter()
        .filter(|l| !l.is_available(&lg, &p))
        .map(|l| l.full_name())
        .collect();
    assert!(closed.is_empty(), "closed with every item: {closed:?}");
    Ok(())
}
