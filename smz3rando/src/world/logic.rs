use smz3rando_game::{BossType, ItemType, LocationId, LocationIdx, RewardType};
use smz3rando_logic::helpers::{can_lift_heavy, can_lift_light};
use smz3rando_logic::{LogicConfig, Progression};

use super::item::Item;
use super::region::RegionKind;
use super::World;
use crate::settings::Config;

/// Reachability condition evaluated against a world and an assumed inventory.
pub type Requirement = Box<dyn Fn(&Logic<'_>, &Progression) -> bool + Send + Sync>;

/// Region entry condition; the flag says whether dungeon rewards must already be held.
pub type EnterRequirement = Box<dyn Fn(&Logic<'_>, &Progression, bool) -> bool + Send + Sync>;

/// Per-location (or per-region) acceptance test for a candidate item.
pub type ItemFilter = Box<dyn Fn(&Logic<'_>, &Item, &Progression) -> bool + Send + Sync>;

/// Read-only view of a set-up world used by every access predicate.
///
/// A `Logic` may carry a probe: a tentative item at one location, which predicates observe in
/// place of the location's real contents. This is how key logic ("this chest may hold its own
/// key") is tested without mutating the world.
#[derive(Clone, Copy)]
pub struct Logic<'a> {
    world: &'a World,
    probe: Option<(LocationIdx, Item)>,
}

impl<'a> Logic<'a> {
    pub fn new(world: &'a World) -> Self {
        Logic { world, probe: None }
    }

    pub fn with_probe(world: &'a World, idx: LocationIdx, item: Item) -> Self {
        Logic {
            world,
            probe: Some((idx, item)),
        }
    }

    pub fn world(&self) -> &'a World {
        self.world
    }

    pub fn config(&self) -> &'a Config {
        &self.world.config
    }

    pub fn cfg(&self) -> &'a LogicConfig {
        &self.world.config.logic_config
    }

    pub fn item_at(&self, idx: LocationIdx) -> Option<Item> {
        match self.probe {
            Some((probe_idx, item)) if probe_idx == idx => Some(item),
            _ => self.world.locations[idx].item,
        }
    }

    /// True if the location holds `item_type` belonging to this world.
    pub fn item_is(&self, idx: LocationIdx, item_type: ItemType) -> bool {
        self.item_at(idx)
            .is_some_and(|item| item.is(item_type, self.world.id))
    }

    pub fn any_item_is(&self, idxs: &[LocationIdx], item_type: ItemType) -> bool {
        idxs.iter().any(|&idx| self.item_is(idx, item_type))
    }

    pub fn can_enter(&self, kind: RegionKind, p: &Progression, require_rewards: bool) -> bool {
        self.world.region(kind).can_enter(self, p, require_rewards)
    }

    pub fn is_available(&self, idx: LocationIdx, p: &Progression) -> bool {
        self.world.locations[idx].is_available(self, p)
    }

    pub fn is_available_by_id(&self, id: LocationId, p: &Progression) -> bool {
        self.world
            .location_idx(id)
            .is_some_and(|idx| self.is_available(idx, p))
    }

    /// Whether the region currently carrying `reward` can be completed.
    pub fn can_aquire(&self, p: &Progression, reward: RewardType) -> bool {
        self.world
            .regions
            .iter()
            .find(|r| r.reward_type() == Some(reward))
            .is_some_and(|r| r.can_complete(self, p))
    }

    pub fn can_aquire_all(&self, p: &Progression, rewards: &[RewardType]) -> bool {
        self.world
            .regions
            .iter()
            .filter(|r| r.reward_type().is_some_and(|t| rewards.contains(&t)))
            .all(|r| r.can_complete(self, p))
    }

    pub fn can_defeat_all(&self, p: &Progression, bosses: &[BossType]) -> bool {
        self.world
            .regions
            .iter()
            .filter(|r| r.boss_type().is_some_and(|b| bosses.contains(&b)))
            .all(|r| r.can_beat_boss(self, p))
    }

    pub fn can_defeat_boss_count(&self, p: &Progression, bosses: &[BossType]) -> usize {
        self.world
            .regions
            .iter()
            .filter(|r| r.boss_type().is_some_and(|b| bosses.contains(&b)))
            .filter(|r| r.can_beat_boss(self, p))
            .count()
    }

    pub fn check_agahnim(&self, p: &Progression, require_rewards: bool) -> bool {
        p.agahnim() || (!require_rewards && self.can_aquire(p, RewardType::Agahnim))
    }

    pub fn can_access_maridia_portal(&self, p: &Progression, require_rewards: bool) -> bool {
        p.contains(ItemType::MoonPearl)
            && p.contains(ItemType::Flippers)
            && p.contains(ItemType::Gravity)
            && p.contains(ItemType::Morph)
            && (self.check_agahnim(p, require_rewards)
                || (p.contains(ItemType::Hammer) && can_lift_light(p))
                || can_lift_heavy(p))
    }

    pub fn medallion(&self, kind: RegionKind) -> Option<ItemType> {
        self.world.region(kind).medallion()
    }

    /// True if the player can open the medallion gate of `kind`.
    pub fn has_medallion(&self, kind: RegionKind, p: &Progression) -> bool {
        p.has_marked_medallion(self.medallion(kind))
    }
}
