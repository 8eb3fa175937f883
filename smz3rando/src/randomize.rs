use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Result};
use hashbrown::{HashMap, HashSet};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use serde_derive::Serialize;
use smz3rando_game::{ItemType, LocationId, WorldId};
use smz3rando_logic::Progression;

use crate::errors::{FillPhase, GenerationError};
use crate::item_settings::ItemSettingOptions;
use crate::playthrough::{generate_spheres, Playthrough};
use crate::pools::WorldItemPools;
use crate::settings::{validate_configs, Config, LocationItemPreference};
use crate::world::item::{Item, ItemId};
use crate::world::logic::Logic;
use crate::world::region::RegionKind;
use crate::world::regions::z;
use crate::world::{world_progressions, LocationRef, World};

/// An item requeued this many times aborts the attempt.
const MAX_ITEM_FAILURES: usize = 500;

const PINBALL_ROOM: LocationId = z(149);

// Placed late in the multiworld progression list so they tend to land early.
const ITEM_BIAS: [(ItemType, f64); 2] = [(ItemType::MoonPearl, 0.40), (ItemType::Morph, 0.20)];

pub fn rng_from_seed(seed: u64) -> StdRng {
    let mut rng_seed = [0u8; 32];
    rng_seed[..8].copy_from_slice(&seed.to_le_bytes());
    StdRng::from_seed(rng_seed)
}

pub struct Randomizer<'a> {
    pub configs: &'a [Config],
    pub options: &'a ItemSettingOptions,
}

/// A finished, verified fill.
pub struct Randomization {
    pub seed: u64,
    pub worlds: Vec<World>,
    pub playthrough: Playthrough,
}

#[derive(Serialize)]
pub struct PlacementSummary {
    pub world: WorldId,
    pub location_id: LocationId,
    pub location: String,
    pub item: ItemType,
    pub item_world: WorldId,
}

#[derive(Serialize)]
pub struct SphereSummary {
    pub locations: Vec<String>,
    pub items: Vec<ItemType>,
}

#[derive(Serialize)]
pub struct RandomizationSummary {
    pub seed: u64,
    pub placements: Vec<PlacementSummary>,
    pub spheres: Vec<SphereSummary>,
    pub inaccessible: Vec<String>,
}

impl Randomization {
    fn location_name(&self, loc: LocationRef) -> String {
        let name = self.worlds[loc.world].locations[loc.idx].full_name();
        if self.worlds.len() > 1 {
            format!("{} ({})", name, self.worlds[loc.world].config.player_name)
        } else {
            name
        }
    }

    pub fn summary(&self) -> RandomizationSummary {
        let mut placements = vec![];
        for world in &self.worlds {
            for loc in &world.locations {
                if let Some(item) = loc.item {
                    placements.push(PlacementSummary {
                        world: world.id,
                        location_id: loc.id,
                        location: loc.full_name(),
                        item: item.item_type,
                        item_world: item.world,
                    });
                }
            }
        }
        let spheres = self
            .playthrough
            .spheres
            .iter()
            .map(|s| SphereSummary {
                locations: s.locations.iter().map(|&l| self.location_name(l)).collect(),
                items: s.items.iter().map(|i| i.item_type).collect(),
            })
            .collect();
        RandomizationSummary {
            seed: self.seed,
            placements,
            spheres,
            inaccessible: self
                .playthrough
                .inaccessible
                .iter()
                .map(|&l| self.location_name(l))
                .collect(),
        }
    }
}

/// Mutable state of one fill attempt. Nothing here outlives the attempt.
struct Filler<'r> {
    worlds: Vec<World>,
    pools: Vec<WorldItemPools>,
    rng: StdRng,
    cancel: &'r AtomicBool,
    attempt_num: usize,
}

impl<'r> Filler<'r> {
    fn check_cancelled(&self) -> Result<(), GenerationError> {
        if self.cancel.load(Ordering::Relaxed) {
            return Err(GenerationError::Cancelled);
        }
        Ok(())
    }

    fn place(&mut self, loc: LocationRef, item: Item) {
        let location = &mut self.worlds[loc.world].locations[loc.idx];
        debug!(
            "[attempt {}] {:?} (world {}) at {} (world {})",
            self.attempt_num,
            item.item_type,
            item.world,
            location.full_name(),
            loc.world
        );
        location.item = Some(item);
    }

    fn is_empty(&self, loc: LocationRef) -> bool {
        self.worlds[loc.world].locations[loc.idx].item.is_none()
    }

    fn empty_locations(&self, world: WorldId) -> Vec<LocationRef> {
        self.worlds[world]
            .empty_locations()
            .map(|l| LocationRef { world, idx: l.idx })
            .collect()
    }

    fn all_empty_locations(&self) -> Vec<LocationRef> {
        (0..self.worlds.len())
            .flat_map(|w| self.empty_locations(w))
            .collect()
    }

    /// Item types placed in the locations of `world`, whoever owns them.
    fn placed_item_types(&self, world: WorldId) -> Vec<ItemType> {
        self.worlds[world]
            .locations
            .iter()
            .filter_map(|l| l.item.map(|i| i.item_type))
            .collect()
    }

    /// Expands `items` with everything reachable from it through already filled locations,
    /// until nothing new is found. With `scope` set, only that world's locations are opened.
    fn collect_items(&self, scope: Option<WorldId>, mut items: Vec<Item>) -> Vec<Item> {
        let mut remaining: Vec<(LocationRef, Item)> = vec![];
        for world in &self.worlds {
            if scope.is_some_and(|s| s != world.id) {
                continue;
            }
            for loc in &world.locations {
                if let Some(item) = loc.item {
                    remaining.push((
                        LocationRef {
                            world: world.id,
                            idx: loc.idx,
                        },
                        item,
                    ));
                }
            }
        }

        loop {
            let progressions = world_progressions(&self.worlds, &items);
            let (found, rest): (Vec<_>, Vec<_>) = remaining.into_iter().partition(|(l, _)| {
                let world = &self.worlds[l.world];
                world.locations[l.idx].is_available(&world.logic(), &progressions[l.world])
            });
            if found.is_empty() {
                return items;
            }
            items.extend(found.iter().map(|&(_, item)| item));
            remaining = rest;
        }
    }

    /// The location must accept the item, and the location with the same id in the item's own
    /// world must be reachable by its owner once the item is held.
    fn can_fill_within_world(
        &self,
        loc: LocationRef,
        item: &Item,
        progressions: &[Progression],
        owner_progression: &Progression,
    ) -> bool {
        let world = &self.worlds[loc.world];
        let location = &world.locations[loc.idx];
        if location.item.is_some() {
            return false;
        }
        let owner = &self.worlds[item.world];
        location.can_fill(world, item, &owner.config, &progressions[loc.world])
            && owner
                .location_by_id(location.id)
                .is_some_and(|l| l.is_available(&owner.logic(), owner_progression))
    }

    fn assumed_fill(
        &mut self,
        phase: FillPhase,
        items: Vec<Item>,
        base_items: &[Item],
        locations: &mut [LocationRef],
        scope: Option<WorldId>,
    ) -> Result<(), GenerationError> {
        let mut items_to_add: VecDeque<Item> = items.into();
        let mut failures: HashMap<Item, usize> = HashMap::new();

        while let Some(item) = items_to_add.pop_front() {
            self.check_cancelled()?;

            let assumed: Vec<Item> = items_to_add.iter().chain(base_items).copied().collect();
            let inventory = self.collect_items(scope, assumed);
            let progressions = world_progressions(&self.worlds, &inventory);
            let owner_progression = self.worlds[item.world].progression_with_rewards(
                inventory
                    .iter()
                    .filter(|i| i.world == item.world)
                    .map(|i| i.item_type)
                    .chain([item.item_type]),
            );

            let target = locations.iter().copied().find(|&loc| {
                self.can_fill_within_world(loc, &item, &progressions, &owner_progression)
            });
            let Some(loc) = target else {
                let count = failures.entry(item).or_insert(0);
                *count += 1;
                if *count > MAX_ITEM_FAILURES {
                    return Err(GenerationError::failure(
                        phase,
                        items_to_add.len() + 1,
                        format!("no location accepts {:?} of world {}", item.item_type, item.world),
                    ));
                }
                items_to_add.push_back(item);
                continue;
            };

            self.place(loc, item);
            if item.is_big_key() && !items_to_add.iter().any(|i| i.is_big_key()) {
                locations.shuffle(&mut self.rng);
            }
        }
        Ok(())
    }

    /// Fills empty locations in order with the first item the region and the location's own
    /// filter accept. Reachability is not considered, and items left over once the locations
    /// run out are dropped.
    fn fast_fill(
        &mut self,
        phase: FillPhase,
        items: &mut Vec<Item>,
        locations: &[LocationRef],
    ) -> Result<(), GenerationError> {
        let empty = Progression::new();
        for &loc in locations {
            if items.is_empty() {
                break;
            }
            if !self.is_empty(loc) {
                continue;
            }
            self.check_cancelled()?;
            let world = &self.worlds[loc.world];
            let lg = Logic::new(world);
            let location = &world.locations[loc.idx];
            let region = world.region(location.region);
            let pos = items.iter().position(|item| {
                region.can_fill(&lg, item, &self.worlds[item.world].config, &empty)
                    && location.allows(&lg, item, &empty)
            });
            let Some(pos) = pos else {
                return Err(GenerationError::failure(
                    phase,
                    items.len(),
                    format!("no remaining item fits {}", location.full_name()),
                ));
            };
            let item = items.remove(pos);
            self.place(loc, item);
        }
        Ok(())
    }

    fn take_progression(&mut self, world: WorldId, item_type: ItemType) -> Option<Item> {
        let pools = &mut self.pools[world];
        for pool in [&mut pools.progression, &mut pools.dungeon] {
            if let Some(pos) = pool.iter().position(|i| i.item_type == item_type) {
                return Some(pool.remove(pos));
            }
        }
        None
    }

    fn take_from(items: &mut Vec<Item>, world: WorldId, item_type: Option<ItemType>) -> Option<Item> {
        let pos = items
            .iter()
            .position(|i| i.world == world && item_type.map_or(true, |t| i.item_type == t))?;
        Some(items.remove(pos))
    }

    /// Honors `Config::location_items` and early items. Returns the items placed.
    fn apply_location_preferences(
        &mut self,
        world: WorldId,
        nice: &mut Vec<Item>,
        junk: &mut Vec<Item>,
    ) -> Result<Vec<Item>, GenerationError> {
        let mut placed = vec![];
        let preferences: Vec<(LocationId, LocationItemPreference)> = self.worlds[world]
            .config
            .location_items
            .iter()
            .map(|(&id, &pref)| (id, pref))
            .collect();

        for (id, preference) in preferences {
            let Some(idx) = self.worlds[world].location_idx(id) else {
                continue;
            };
            let loc = LocationRef { world, idx };
            if !self.is_empty(loc) {
                continue;
            }
            let item = match preference {
                LocationItemPreference::Any => continue,
                LocationItemPreference::Progression => {
                    let game = self.worlds[world].locations[idx].region.game();
                    let candidates: Vec<usize> = self.pools[world]
                        .progression
                        .iter()
                        .enumerate()
                        .filter(|(_, i)| i.game().is_some_and(|g| g != game))
                        .map(|(pos, _)| pos)
                        .collect();
                    match candidates.choose(&mut self.rng) {
                        Some(&pos) => Some(self.pools[world].progression.remove(pos)),
                        None => None,
                    }
                }
                LocationItemPreference::Junk => Self::take_from(junk, world, None),
                LocationItemPreference::Item(item_type) => {
                    if self.pools[world]
                        .progression
                        .iter()
                        .chain(&self.pools[world].dungeon)
                        .any(|i| i.item_type == item_type)
                    {
                        let missing = self.worlds[world]
                            .missing_required_items(idx, &Progression::new());
                        if !missing.is_empty() && missing.iter().all(|c| c.contains(&item_type)) {
                            return Err(GenerationError::failure(
                                FillPhase::Preferences,
                                1,
                                format!(
                                    "{:?} is required to reach {}",
                                    item_type,
                                    self.worlds[world].locations[idx].full_name()
                                ),
                            ));
                        }
                        self.take_progression(world, item_type)
                    } else {
                        Self::take_from(nice, world, Some(item_type))
                            .or_else(|| Self::take_from(junk, world, Some(item_type)))
                    }
                }
            };
            let Some(item) = item else {
                return Err(GenerationError::ConfigurationError(format!(
                    "no item left to satisfy {:?} at location {}",
                    preference, id
                )));
            };
            self.place(loc, item);
            placed.push(item);
        }

        let mut early = self.worlds[world].early_items.clone();
        early.shuffle(&mut self.rng);
        let start = Progression::from_items(self.worlds[world].starting_items.iter().copied());
        for item_type in early {
            let item = self
                .take_progression(world, item_type)
                .or_else(|| Self::take_from(nice, world, Some(item_type)))
                .ok_or_else(|| {
                    GenerationError::ConfigurationError(format!(
                        "early item {item_type:?} is not in the item pool"
                    ))
                })?;
            let w = &self.worlds[world];
            let candidates: Vec<LocationRef> = w
                .empty_locations()
                .filter(|l| l.can_fill(w, &item, &w.config, &start))
                .map(|l| LocationRef { world, idx: l.idx })
                .collect();
            let Some(&loc) = candidates.choose(&mut self.rng) else {
                return Err(GenerationError::failure(
                    FillPhase::Preferences,
                    1,
                    format!("no sphere one location for early item {item_type:?}"),
                ));
            };
            self.place(loc, item);
            placed.push(item);
        }
        Ok(placed)
    }

    /// Skull Woods pinball key, then one Super Missile and one Power Bomb somewhere reachable
    /// with what this world already holds.
    fn initial_fill_in_own_world(&mut self, world: WorldId) -> Result<(), GenerationError> {
        if let Some(idx) = self.worlds[world].location_idx(PINBALL_ROOM) {
            let loc = LocationRef { world, idx };
            if self.is_empty(loc) {
                if let Some(item) = self.take_progression(world, ItemType::KeySW) {
                    self.place(loc, item);
                }
            }
        }

        for item_type in [ItemType::Super, ItemType::PowerBomb] {
            if self.worlds[world].starting_items.contains(&item_type) {
                continue;
            }
            let Some(item) = self.take_progression(world, item_type) else {
                continue;
            };
            let p = Progression::from_items(self.placed_item_types(world));
            let w = &self.worlds[world];
            let candidates: Vec<LocationRef> = w
                .empty_locations()
                .filter(|l| !w.config.location_items.contains_key(&l.id))
                .filter(|l| l.can_fill(w, &item, &w.config, &p))
                .map(|l| LocationRef { world, idx: l.idx })
                .collect();
            let Some(&loc) = candidates.choose(&mut self.rng) else {
                return Err(GenerationError::failure(
                    FillPhase::InitialFill,
                    1,
                    format!("no reachable location for the initial {item_type:?}"),
                ));
            };
            self.place(loc, item);
        }
        Ok(())
    }

    /// Junk into a share of Ganon's Tower that grows with the crystals needed to open it.
    fn ganons_tower_fill(&mut self, junk: &mut Vec<Item>) -> Result<(), GenerationError> {
        for world in 0..self.worlds.len() {
            let crystals = self.worlds[world].config.ganons_tower_crystal_count;
            let count = 15 * crystals / 7;
            let mut locations: Vec<LocationRef> = self.worlds[world]
                .region_locations(RegionKind::GanonsTower)
                .filter(|l| l.item.is_none())
                .map(|l| LocationRef { world, idx: l.idx })
                .collect();
            locations.shuffle(&mut self.rng);
            for &loc in locations.iter().take(count) {
                let Some(item) = Self::take_from(junk, world, None) else {
                    return Err(GenerationError::failure(
                        FillPhase::GanonsTower,
                        count,
                        format!("world {world} ran out of junk for Ganon's Tower"),
                    ));
                };
                self.place(loc, item);
            }
        }
        Ok(())
    }

    fn apply_location_weighting(&self, locations: &mut [LocationRef]) {
        locations.sort_by_key(|l| {
            let world = &self.worlds[l.world];
            world.locations[l.idx].weight(world)
        });
    }

    fn fill(&mut self) -> Result<(), GenerationError> {
        let mut assumed_inventory: Vec<Item> = vec![];
        for world in &self.worlds {
            assumed_inventory.extend(world.starting_inventory.iter().copied());
        }

        let mut nice: Vec<Item> = self.pools.iter().flat_map(|p| p.nice.clone()).collect();
        let mut junk: Vec<Item> = self.pools.iter().flat_map(|p| p.junk.clone()).collect();
        nice.shuffle(&mut self.rng);
        junk.shuffle(&mut self.rng);

        let mut progression_items: Vec<Item> = vec![];
        for world in 0..self.worlds.len() {
            let preference_items = self.apply_location_preferences(world, &mut nice, &mut junk)?;
            self.initial_fill_in_own_world(world)?;

            let config = &self.worlds[world].config;
            let zelda_keysanity = config.zelda_keysanity();
            let metroid_keysanity = config.metroid_keysanity();

            if !zelda_keysanity {
                let dungeon = std::mem::take(&mut self.pools[world].dungeon);
                let base: Vec<Item> = self.pools[world]
                    .progression
                    .iter()
                    .chain(&self.pools[world].keycards)
                    .chain(&assumed_inventory)
                    .chain(&preference_items)
                    .copied()
                    .collect();
                let mut locations = self.empty_locations(world);
                locations.shuffle(&mut self.rng);
                info!(
                    "[attempt {}] Placing {} dungeon items in world {}",
                    self.attempt_num,
                    dungeon.len(),
                    world
                );
                self.assumed_fill(FillPhase::Dungeon, dungeon, &base, &mut locations, Some(world))?;
            }

            let pools = &mut self.pools[world];
            let keycards = std::mem::take(&mut pools.keycards);
            if metroid_keysanity {
                progression_items.extend(keycards);
            } else {
                assumed_inventory.extend(keycards);
            }
            progression_items.append(&mut pools.dungeon);
            progression_items.append(&mut pools.progression);
        }

        progression_items.shuffle(&mut self.rng);
        let mut locations = self.all_empty_locations();
        locations.shuffle(&mut self.rng);
        if self.worlds.len() == 1 {
            self.apply_location_weighting(&mut locations);
        } else {
            apply_item_bias(&mut progression_items, &ITEM_BIAS, &mut self.rng);
        }

        self.ganons_tower_fill(&mut junk)?;

        info!(
            "[attempt {}] Placing {} progression items",
            self.attempt_num,
            progression_items.len()
        );
        self.assumed_fill(
            FillPhase::Progression,
            progression_items,
            &assumed_inventory,
            &mut locations,
            None,
        )?;

        self.fast_fill(FillPhase::Nice, &mut nice, &locations)?;
        self.fast_fill(FillPhase::Junk, &mut junk, &locations)?;
        Ok(())
    }
}

/// Moves each biased item to a random position in the last `weight` share of the list.
fn apply_item_bias<R: Rng>(items: &mut Vec<Item>, bias: &[(ItemType, f64)], rng: &mut R) {
    let n = items.len();
    let mut biased: Vec<(Item, f64)> = vec![];
    for &(item_type, weight) in bias {
        while let Some(pos) = items.iter().position(|i| i.item_type == item_type) {
            biased.push((items.remove(pos), weight));
        }
    }
    for (item, weight) in biased {
        let start = ((n as f64 * (1.0 - weight)) as usize).min(items.len());
        let pos = rng.gen_range(start..=items.len());
        items.insert(pos, item);
    }
}

/// Post-fill checks: every location holds exactly one item, no item is placed twice,
/// dungeon items stay home outside keysanity, and shields never cross worlds.
pub fn verify_fill(worlds: &[World]) -> Result<(), GenerationError> {
    let mut seen: HashSet<(WorldId, ItemId)> = HashSet::new();
    for world in worlds {
        for loc in &world.locations {
            let Some(item) = loc.item else {
                return Err(GenerationError::InvariantViolation(format!(
                    "{} in world {} is empty after the fill",
                    loc.full_name(),
                    world.id
                )));
            };
            if !seen.insert((item.world, item.id)) {
                return Err(GenerationError::InvariantViolation(format!(
                    "{:?} of world {} was placed twice",
                    item.item_type, item.world
                )));
            }
            let owner = &worlds[item.world].config;
            if item.is_dungeon_item()
                && !owner.zelda_keysanity()
                && (item.world != world.id || !world.region(loc.region).is_region_item(&item))
            {
                return Err(GenerationError::InvariantViolation(format!(
                    "{:?} of world {} left its dungeon for {}",
                    item.item_type,
                    item.world,
                    loc.full_name()
                )));
            }
            if world.config.multi_world()
                && item.item_type == ItemType::ProgressiveShield
                && item.world != world.id
            {
                return Err(GenerationError::InvariantViolation(format!(
                    "shield of world {} placed in world {}",
                    item.world, world.id
                )));
            }
        }
    }
    Ok(())
}

impl<'a> Randomizer<'a> {
    pub fn new(
        configs: &'a [Config],
        options: &'a ItemSettingOptions,
    ) -> Result<Self, GenerationError> {
        validate_configs(configs, options)?;
        Ok(Randomizer { configs, options })
    }

    /// One complete attempt: fresh worlds, setup, fill, verification and playthrough.
    pub fn randomize(
        &self,
        attempt_num: usize,
        seed: u64,
        cancel: &AtomicBool,
    ) -> Result<Randomization, GenerationError> {
        let mut rng = rng_from_seed(seed);
        if self.configs.iter().any(|c| c.race) {
            rng = rng_from_seed(rng.next_u64());
        }

        let mut worlds = vec![];
        for (id, config) in self.configs.iter().enumerate() {
            worlds.push(World::new(id, config.clone(), self.options)?);
        }
        let worlds: Vec<World> = worlds.into_iter().map(|w| w.setup(&mut rng)).collect();
        let pools = worlds.iter().map(|w| w.pools.clone()).collect();

        let mut filler = Filler {
            worlds,
            pools,
            rng,
            cancel,
            attempt_num,
        };
        filler.fill()?;

        verify_fill(&filler.worlds)?;
        let playthrough = generate_spheres(&filler.worlds)?;
        info!(
            "[attempt {attempt_num}] Filled with {} spheres",
            playthrough.spheres.len()
        );
        Ok(Randomization {
            seed,
            worlds: filler.worlds,
            playthrough,
        })
    }
}

/// Runs attempts with seeds drawn from `seed` until one succeeds. Only generation failures are
/// retried; cancellation, configuration errors and invariant violations end the run.
pub fn generate_with_retries(
    randomizer: &Randomizer,
    seed: u64,
    cancel: &AtomicBool,
) -> Result<Randomization> {
    let max_attempts = randomizer
        .configs
        .iter()
        .map(|c| c.max_attempts)
        .max()
        .unwrap_or(1);
    let mut seed_rng = rng_from_seed(seed);
    let mut last_failure = None;
    for attempt_num in 1..=max_attempts {
        let attempt_seed = seed_rng.next_u64();
        info!("[attempt {attempt_num}] Seed {attempt_seed}");
        match randomizer.randomize(attempt_num, attempt_seed, cancel) {
            Ok(randomization) => return Ok(randomization),
            Err(e) if e.is_retryable() => {
                info!("[attempt {attempt_num}] {e}");
                last_failure = Some(e);
            }
            Err(e) => return Err(e.into()),
        }
    }
    match last_failure {
        Some(e) => Err(anyhow::Error::new(e).context("Exhausted randomization attempts")),
        None => bail!("Exhausted randomization attempts"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::item::ItemFactory;

    #[test]
    fn biased_items_move_to_the_tail() {
        for seed in 0..20 {
            let mut rng = rng_from_seed(seed);
            let mut factory = ItemFactory::new();
            let mut items = factory.copies(98, ItemType::Hammer, 0);
            items.insert(3, factory.create(ItemType::MoonPearl, 0, true));
            items.insert(7, factory.create(ItemType::Morph, 0, true));

            apply_item_bias(&mut items, &ITEM_BIAS, &mut rng);

            assert_eq!(items.len(), 100);
            let pos = |t: ItemType| items.iter().position(|i| i.item_type == t).unwrap();
            assert!(pos(ItemType::MoonPearl) >= 60, "seed {seed}: Moon Pearl early");
            assert!(pos(ItemType::Morph) >= 80, "seed {seed}: Morph Ball early");
        }
    }

    #[test]
    fn items_without_bias_keep_their_order() {
        let mut factory = ItemFactory::new();
        let mut items: Vec<Item> = [ItemType::Hammer, ItemType::Hookshot, ItemType::Lamp]
            .into_iter()
            .map(|t| factory.create(t, 0, true))
            .collect();
        let before = items.clone();
        apply_item_bias(&mut items, &ITEM_BIAS, &mut rng_from_seed(0));
        assert_eq!(items, before);
    }
}
