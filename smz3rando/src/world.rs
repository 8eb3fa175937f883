pub mod item;
pub mod location;
pub mod logic;
pub mod region;
pub mod regions;

use hashbrown::HashMap;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_derive::{Deserialize, Serialize};
use smz3rando_game::{BossType, ItemType, LocationId, LocationIdx, RewardType, WorldId};
use smz3rando_logic::Progression;

use crate::errors::GenerationError;
use crate::item_settings::ItemSettingOptions;
use crate::pools::WorldItemPools;
use crate::settings::Config;
use item::{Item, ItemFactory};
use location::Location;
use logic::Logic;
use region::{Region, RegionKind};

/// A location of a particular world, as addressed across a multiworld fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationRef {
    pub world: WorldId,
    pub idx: LocationIdx,
}

/// Per-world progressions for a set of items owned across worlds, each including the rewards
/// and bosses its own items unlock.
pub fn world_progressions<'i, I>(worlds: &[World], items: I) -> Vec<Progression>
where
    I: IntoIterator<Item = &'i Item>,
{
    let mut progressions = vec![Progression::new(); worlds.len()];
    for item in items {
        if let Some(p) = progressions.get_mut(item.world) {
            p.add(item.item_type);
        }
    }
    for (world, p) in worlds.iter().zip(progressions.iter_mut()) {
        world.collect_rewards_and_bosses(p);
    }
    progressions
}

/// The region graph of one player, with the items placed so far.
pub struct World {
    pub id: WorldId,
    pub config: Config,
    pub regions: Vec<Region>,
    pub locations: Vec<Location>,
    pub pools: WorldItemPools,
    pub starting_items: Vec<ItemType>,
    /// `starting_items` as owned items, numbered after the pools.
    pub starting_inventory: Vec<Item>,
    pub early_items: Vec<ItemType>,
    location_by_id: HashMap<LocationId, LocationIdx>,
}

/// A world whose randomized slots (medallions, rewards, bottles) are not yet assigned.
///
/// Access predicates read those slots, so no `Logic` can be built until `setup` runs.
pub struct PendingWorld {
    world: World,
}

impl World {
    pub fn new(
        id: WorldId,
        config: Config,
        options: &ItemSettingOptions,
    ) -> Result<PendingWorld, GenerationError> {
        config.validate(options)?;

        let mut locations = vec![];
        let regions = regions::build_regions(&mut locations);
        let mut location_by_id = HashMap::new();
        for loc in &locations {
            if location_by_id.insert(loc.id, loc.idx).is_some() {
                return Err(GenerationError::InvariantViolation(format!(
                    "duplicate location id {}",
                    loc.id
                )));
            }
        }
        for loc_id in config.location_items.keys() {
            if !location_by_id.contains_key(loc_id) {
                return Err(GenerationError::ConfigurationError(format!(
                    "unknown location id {loc_id} in location preferences"
                )));
            }
        }

        let starting_items = config.get_starting_items(options)?;
        let early_items = config.get_early_items(options)?;
        let mut factory = ItemFactory::new();
        let pools = WorldItemPools::new(
            id,
            &config,
            &starting_items,
            locations.len(),
            &mut factory,
        );
        let starting_inventory = starting_items
            .iter()
            .map(|&t| factory.create(t, id, true))
            .collect();

        Ok(PendingWorld {
            world: World {
                id,
                config,
                regions,
                locations,
                pools,
                starting_items,
                starting_inventory,
                early_items,
                location_by_id,
            },
        })
    }

    pub fn region(&self, kind: RegionKind) -> &Region {
        &self.regions[kind as usize]
    }

    pub fn logic(&self) -> Logic<'_> {
        Logic::new(self)
    }

    pub fn location_idx(&self, id: LocationId) -> Option<LocationIdx> {
        self.location_by_id.get(&id).copied()
    }

    pub fn location_by_id(&self, id: LocationId) -> Option<&Location> {
        self.location_idx(id).map(|idx| &self.locations[idx])
    }

    pub fn region_locations(&self, kind: RegionKind) -> impl Iterator<Item = &Location> {
        self.region(kind)
            .locations
            .iter()
            .map(move |&idx| &self.locations[idx])
    }

    pub fn empty_locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| l.item.is_none())
    }

    pub fn dungeons(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.dungeon.is_some())
    }

    pub fn reward_regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.reward.is_some())
    }

    pub fn boss_regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.boss.is_some())
    }

    /// Adds every reward whose region can be completed, then every boss that can be beaten
    /// with those rewards, to `p`.
    pub fn collect_rewards_and_bosses(&self, p: &mut Progression) {
        let lg = self.logic();
        let rewards: Vec<RewardType> = self
            .reward_regions()
            .filter(|r| r.can_complete(&lg, p))
            .filter_map(|r| r.reward_type())
            .collect();
        for reward in rewards {
            p.add_reward(reward);
        }
        let bosses: Vec<BossType> = self
            .boss_regions()
            .filter(|r| r.can_beat_boss(&lg, p))
            .filter_map(|r| r.boss_type())
            .collect();
        for boss in bosses {
            p.add_boss(boss);
        }
    }

    /// Fresh progression over `items` plus the rewards and bosses they unlock.
    pub fn progression_with_rewards<I: IntoIterator<Item = ItemType>>(&self, items: I) -> Progression {
        let mut p = Progression::from_items(items);
        self.collect_rewards_and_bosses(&mut p);
        p
    }

    /// Combinations of at most three item types which would make the location available
    /// on top of `p`. Item types that work alone are not repeated in larger combinations.
    pub fn missing_required_items(&self, idx: LocationIdx, p: &Progression) -> Vec<Vec<ItemType>> {
        let lg = self.logic();
        let location = &self.locations[idx];
        if location.is_available(&lg, p) {
            return vec![];
        }

        let mut remaining: Vec<ItemType> = self
            .pools
            .progression
            .iter()
            .chain(&self.pools.dungeon)
            .chain(&self.pools.keycards)
            .map(|i| i.item_type)
            .collect();
        for (t, n) in p.item_types() {
            for _ in 0..n {
                if let Some(pos) = remaining.iter().position(|&r| r == t) {
                    remaining.remove(pos);
                }
            }
        }
        let mut counts: Vec<(ItemType, usize)> = vec![];
        for t in remaining {
            match counts.iter_mut().find(|(c, _)| *c == t) {
                Some((_, n)) => *n += 1,
                None => counts.push((t, 1)),
            }
        }

        let works = |extra: &[ItemType]| {
            let mut q = p.clone();
            q.add_range(extra.iter().copied());
            location.is_available(&lg, &q)
        };
        let allowed = |counts: &[(ItemType, usize)], combo: &[usize]| {
            combo
                .iter()
                .all(|&i| combo.iter().filter(|&&j| j == i).count() <= counts[i].1)
        };

        let mut combinations = vec![];
        for (t, _) in &counts {
            if works(&[*t]) {
                combinations.push(vec![*t]);
            }
        }
        counts.retain(|(t, _)| !combinations.iter().any(|c| c[0] == *t));

        let singles = combinations.len();
        for i in 0..counts.len() {
            for j in i..counts.len() {
                if allowed(&counts, &[i, j]) && works(&[counts[i].0, counts[j].0]) {
                    combinations.push(vec![counts[i].0, counts[j].0]);
                }
            }
        }
        let used: Vec<ItemType> = combinations[singles..].iter().flatten().copied().collect();
        counts.retain(|(t, _)| !used.contains(t));

        for i in 0..counts.len() {
            for j in i..counts.len() {
                for k in j..counts.len() {
                    if allowed(&counts, &[i, j, k])
                        && works(&[counts[i].0, counts[j].0, counts[k].0])
                    {
                        combinations.push(vec![counts[i].0, counts[j].0, counts[k].0]);
                    }
                }
            }
        }
        combinations
    }
}

impl PendingWorld {
    pub fn id(&self) -> WorldId {
        self.world.id
    }

    pub fn config(&self) -> &Config {
        &self.world.config
    }

    pub fn regions(&self) -> &[Region] {
        &self.world.regions
    }

    pub fn locations(&self) -> &[Location] {
        &self.world.locations
    }

    pub fn pools(&self) -> &WorldItemPools {
        &self.world.pools
    }

    /// Assigns medallions, shuffled dungeon rewards and (optionally) bottle contents.
    /// The order of RNG draws is part of seed reproducibility.
    pub fn setup<R: Rng>(self, rng: &mut R) -> World {
        let mut world = self.world;

        for region in world.regions.iter_mut() {
            if let Some(m) = region.medallion.as_mut() {
                let medallion = match rng.gen_range(0..3) {
                    0 => ItemType::Bombos,
                    1 => ItemType::Ether,
                    _ => ItemType::Quake,
                };
                debug!("[world {}] {} requires {:?}", world.id, region.name, medallion);
                m.medallion = Some(medallion);
            }
        }

        let mut rewards = vec![
            RewardType::PendantGreen,
            RewardType::PendantRed,
            RewardType::PendantBlue,
            RewardType::CrystalRed,
            RewardType::CrystalRed,
            RewardType::CrystalBlue,
            RewardType::CrystalBlue,
            RewardType::CrystalBlue,
            RewardType::CrystalBlue,
            RewardType::CrystalBlue,
        ];
        rewards.shuffle(rng);
        let mut rewards = rewards.into_iter();
        for region in world.regions.iter_mut() {
            if let Some(r) = region.reward.as_mut() {
                if !r.fixed && r.reward == RewardType::None {
                    if let Some(reward) = rewards.next() {
                        r.reward = reward;
                    }
                }
            }
        }

        if world.config.randomized_bottles {
            let bottle_types = [
                ItemType::Bottle,
                ItemType::BottleWithBee,
                ItemType::BottleWithFairy,
                ItemType::BottleWithBluePotion,
                ItemType::BottleWithGoldBee,
                ItemType::BottleWithGreenPotion,
                ItemType::BottleWithRedPotion,
            ];
            for item in world.pools.all_items_mut() {
                if item.item_type == ItemType::Bottle {
                    item.item_type = bottle_types[rng.gen_range(0..bottle_types.len())];
                }
            }
        }

        world
    }
}
