use smz3rando_game::{ItemType, WorldId};

use crate::settings::Config;
use crate::world::item::{Item, ItemFactory};

/// The items one world contributes to the fill, split by how they are placed.
#[derive(Clone, Debug, Default)]
pub struct WorldItemPools {
    pub progression: Vec<Item>,
    pub nice: Vec<Item>,
    pub junk: Vec<Item>,
    pub dungeon: Vec<Item>,
    pub keycards: Vec<Item>,
}

impl WorldItemPools {
    /// Builds the pools for a world with `location_count` locations, removing `starting_items`
    /// and padding with rupees so that every location receives exactly one item.
    pub fn new(
        world: WorldId,
        config: &Config,
        starting_items: &[ItemType],
        location_count: usize,
        factory: &mut ItemFactory,
    ) -> Self {
        let mut pools = WorldItemPools {
            progression: progression_pool(world, factory),
            nice: nice_pool(world, config, factory),
            dungeon: dungeon_pool(world, config, factory),
            keycards: keycards(world, factory),
            junk: junk_pool(world, factory),
        };

        for &item_type in starting_items {
            pools.remove_first(item_type);
        }

        let mut item_count =
            pools.progression.len() + pools.nice.len() + pools.dungeon.len() + pools.junk.len();
        if config.metroid_keysanity() {
            item_count += pools.keycards.len();
        }
        if item_count < location_count {
            pools.junk.extend(factory.copies(
                location_count - item_count,
                ItemType::TwentyRupees,
                world,
            ));
        }
        pools
    }

    /// Removes one item of the given type, searching pools in a fixed order.
    pub fn remove_first(&mut self, item_type: ItemType) -> Option<Item> {
        for pool in [
            &mut self.progression,
            &mut self.nice,
            &mut self.junk,
            &mut self.dungeon,
            &mut self.keycards,
        ] {
            if let Some(pos) = pool.iter().position(|i| i.item_type == item_type) {
                return Some(pool.remove(pos));
            }
        }
        None
    }

    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.progression
            .iter()
            .chain(&self.nice)
            .chain(&self.junk)
            .chain(&self.dungeon)
            .chain(&self.keycards)
    }

    pub fn all_items_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.progression
            .iter_mut()
            .chain(&mut self.nice)
            .chain(&mut self.junk)
            .chain(&mut self.dungeon)
            .chain(&mut self.keycards)
    }

    pub fn len(&self) -> usize {
        self.all_items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn progression_pool(world: WorldId, factory: &mut ItemFactory) -> Vec<Item> {
    use ItemType::*;
    let types = [
        ProgressiveShield,
        ProgressiveShield,
        ProgressiveShield,
        ProgressiveSword,
        ProgressiveSword,
        Bow,
        Hookshot,
        Mushroom,
        Powder,
        Firerod,
        Icerod,
        Bombos,
        Ether,
        Quake,
        Lamp,
        Hammer,
        Shovel,
        Flute,
        Book,
        Bottle,
        Somaria,
        Byrna,
        Cape,
        Mirror,
        Boots,
        ProgressiveGlove,
        ProgressiveGlove,
        Flippers,
        MoonPearl,
        HalfMagic,
        Grapple,
        Charge,
        Ice,
        Wave,
        Plasma,
        Varia,
        Gravity,
        Morph,
        Bombs,
        SpringBall,
        ScrewAttack,
        HiJump,
        SpaceJump,
        SpeedBooster,
        Missile,
        Super,
        PowerBomb,
        PowerBomb,
        ETank,
        ETank,
        ETank,
        ETank,
        ETank,
        ReserveTank,
        ReserveTank,
        ReserveTank,
        ReserveTank,
        ThreeHundredRupees,
        ThreeHundredRupees,
    ];
    types
        .iter()
        .map(|&t| factory.create(t, world, true))
        .collect()
}

fn nice_pool(world: WorldId, config: &Config, factory: &mut ItemFactory) -> Vec<Item> {
    use ItemType::*;
    let mut types = vec![
        ProgressiveTunic,
        ProgressiveTunic,
        ProgressiveSword,
        ProgressiveSword,
        SilverArrows,
        BlueBoomerang,
        RedBoomerang,
        Bottle,
        Bottle,
        Bottle,
        Bugnet,
        HeartContainerRefill,
        Spazer,
        XRay,
    ];
    if config.logic_config.quarter_magic {
        types.push(HalfMagic);
    }
    let mut pool: Vec<Item> = types
        .into_iter()
        .map(|t| factory.create(t, world, false))
        .collect();
    pool.extend(factory.copies(10, HeartContainer, world));
    pool
}

fn junk_pool(world: WorldId, factory: &mut ItemFactory) -> Vec<Item> {
    use ItemType::*;
    let counts = [
        (Arrow, 1),
        (OneHundredRupees, 1),
        (HeartPiece, 24),
        (TenArrows, 8),
        (ThreeBombs, 13),
        (ArrowUpgrade5, 4),
        (BombUpgrade5, 4),
        (OneRupee, 2),
        (FiveRupees, 4),
        (FiftyRupees, 7),
        (ThreeHundredRupees, 3),
        (ETank, 9),
        (Missile, 39),
        (Super, 15),
        (PowerBomb, 8),
    ];
    counts
        .iter()
        .flat_map(|&(t, n)| factory.copies(n, t, world))
        .collect()
}

/// Dungeon items in a fixed order: big keys first, then small keys, then maps and compasses.
fn dungeon_pool(world: WorldId, config: &Config, factory: &mut ItemFactory) -> Vec<Item> {
    use ItemType::*;
    let mut counts = vec![
        (BigKeyEP, 1),
        (BigKeyDP, 1),
        (BigKeyTH, 1),
        (BigKeyPD, 1),
        (BigKeySP, 1),
        (BigKeySW, 1),
        (BigKeyTT, 1),
        (BigKeyIP, 1),
        (BigKeyMM, 1),
        (BigKeyTR, 1),
        (BigKeyGT, 1),
        (KeyHC, 1),
        (KeyCT, 2),
        (KeyDP, 1),
        (KeyTH, 1),
        (KeyPD, 6),
        (KeySP, 1),
        (KeySW, 3),
        (KeyTT, 1),
        (KeyIP, 2),
        (KeyMM, 3),
        (KeyTR, 4),
        (KeyGT, 4),
        (MapEP, 1),
        (MapDP, 1),
        (MapTH, 1),
        (MapPD, 1),
        (MapSP, 1),
        (MapSW, 1),
        (MapTT, 1),
        (MapIP, 1),
        (MapMM, 1),
        (MapTR, 1),
    ];
    if !config.metroid_keysanity() {
        counts.extend([
            (MapHC, 1),
            (MapGT, 1),
            (CompassEP, 1),
            (CompassDP, 1),
            (CompassTH, 1),
            (CompassPD, 1),
            (CompassSP, 1),
            (CompassSW, 1),
            (CompassTT, 1),
            (CompassIP, 1),
            (CompassMM, 1),
            (CompassTR, 1),
            (CompassGT, 1),
        ]);
    }
    counts
        .into_iter()
        .flat_map(|(t, n)| factory.copies(n, t, world))
        .collect()
}

fn keycards(world: WorldId, factory: &mut ItemFactory) -> Vec<Item> {
    use ItemType::*;
    [
        CardCrateriaL1,
        CardCrateriaL2,
        CardCrateriaBoss,
        CardBrinstarL1,
        CardBrinstarL2,
        CardBrinstarBoss,
        CardNorfairL1,
        CardNorfairL2,
        CardNorfairBoss,
        CardMaridiaL1,
        CardMaridiaL2,
        CardMaridiaBoss,
        CardWreckedShipL1,
        CardWreckedShipBoss,
        CardLowerNorfairL1,
        CardLowerNorfairBoss,
    ]
    .iter()
    .map(|&t| factory.create(t, world, false))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::KeysanityMode;

    const LOCATIONS: usize = 316;

    fn build(config: &Config, starting: &[ItemType]) -> WorldItemPools {
        WorldItemPools::new(0, config, starting, LOCATIONS, &mut ItemFactory::new())
    }

    #[test]
    fn default_pool_sizes() {
        let pools = build(&Config::default(), &[]);
        assert_eq!(pools.progression.len(), 59);
        assert_eq!(pools.nice.len(), 25);
        assert_eq!(pools.dungeon.len(), 63);
        assert_eq!(pools.keycards.len(), 16);
        assert_eq!(pools.junk.len(), 142 + 27);
        assert!(pools.progression.iter().all(|i| i.progression));
        assert!(pools.junk.iter().all(|i| !i.progression));
    }

    #[test]
    fn padding_fills_every_location() {
        for mode in [KeysanityMode::None, KeysanityMode::SuperMetroid, KeysanityMode::Both] {
            let config = Config {
                keysanity_mode: mode,
                ..Config::default()
            };
            let pools = build(&config, &[]);
            let mut placed = pools.len();
            if !config.metroid_keysanity() {
                placed -= pools.keycards.len();
            }
            assert_eq!(placed, LOCATIONS);
        }
    }

    #[test]
    fn starting_items_leave_the_pools() {
        let pools = build(
            &Config::default(),
            &[ItemType::ProgressiveSword, ItemType::Morph, ItemType::CardCrateriaL1],
        );
        assert_eq!(pools.progression.len(), 57);
        assert_eq!(pools.keycards.len(), 15);
        assert!(!pools.progression.iter().any(|i| i.item_type == ItemType::Morph));
        // The removed items are replaced with rupees.
        assert_eq!(pools.junk.len(), 142 + 29);
    }

    #[test]
    fn item_ids_are_unique() {
        let pools = build(&Config::default(), &[]);
        let mut ids: Vec<_> = pools.all_items().map(|i| i.id).collect();
        let n = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), n);
    }
}
