use serde_derive::{Deserialize, Serialize};
use smz3rando_game::{ItemType, LocationId, LocationIdx};
use smz3rando_logic::Progression;

use super::item::Item;
use super::logic::{ItemFilter, Logic, Requirement};
use super::region::RegionKind;
use super::World;
use crate::settings::{Config, ItemPlacementRule};

/// Locations at or below this weight are meant to be filled in the first sphere.
pub const SPHERE_ONE: i32 = -10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationKind {
    Regular,
    HeraStandingKey,
    Pedestal,
    Ether,
    Bombos,
    NotInDungeon,
    Visible,
    Chozo,
    Hidden,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationStatus {
    Cleared,
    Available,
    Relevant,
    OutOfLogic,
}

pub struct Location {
    pub idx: LocationIdx,
    pub id: LocationId,
    pub name: &'static str,
    pub room: Option<&'static str>,
    pub region: RegionKind,
    pub kind: LocationKind,
    pub vanilla_item: ItemType,
    pub item: Option<Item>,
    pub cleared: bool,
    weight: Option<i32>,
    access: Requirement,
    relevance: Option<Requirement>,
    tracker_logic: Option<Requirement>,
    allow: Option<ItemFilter>,
    always_allow: Option<ItemFilter>,
}

impl std::fmt::Debug for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Location")
            .field("id", &self.id)
            .field("name", &self.full_name())
            .field("item", &self.item)
            .finish()
    }
}

impl Location {
    pub(super) fn new(
        idx: LocationIdx,
        id: LocationId,
        name: &'static str,
        room: Option<&'static str>,
        region: RegionKind,
        vanilla_item: ItemType,
    ) -> Self {
        Location {
            idx,
            id,
            name,
            room,
            region,
            kind: LocationKind::Regular,
            vanilla_item,
            item: None,
            cleared: false,
            weight: None,
            access: Box::new(|_, _| true),
            relevance: None,
            tracker_logic: None,
            allow: None,
            always_allow: None,
        }
    }

    pub fn full_name(&self) -> String {
        match self.room {
            Some(room) => format!("{} - {}", room, self.name),
            None => format!("{} - {}", self.region.name(), self.name),
        }
    }

    pub fn kind(&mut self, kind: LocationKind) -> &mut Self {
        self.kind = kind;
        self
    }

    pub fn access<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Logic<'_>, &Progression) -> bool + Send + Sync + 'static,
    {
        self.access = Box::new(f);
        self
    }

    pub fn relevance<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Logic<'_>, &Progression) -> bool + Send + Sync + 'static,
    {
        self.relevance = Some(Box::new(f));
        self
    }

    pub fn tracker_logic<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Logic<'_>, &Progression) -> bool + Send + Sync + 'static,
    {
        self.tracker_logic = Some(Box::new(f));
        self
    }

    /// Replaces any earlier filter.
    pub fn allow<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Logic<'_>, &Item, &Progression) -> bool + Send + Sync + 'static,
    {
        self.allow = Some(Box::new(f));
        self
    }

    pub fn always_allow<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Logic<'_>, &Item, &Progression) -> bool + Send + Sync + 'static,
    {
        self.always_allow = Some(Box::new(f));
        self
    }

    pub fn weighted(&mut self, weight: i32) -> &mut Self {
        self.weight = Some(weight);
        self
    }

    pub fn weight(&self, world: &World) -> i32 {
        self.weight.unwrap_or(world.region(self.region).weight)
    }

    pub fn is_available(&self, lg: &Logic<'_>, p: &Progression) -> bool {
        lg.can_enter(self.region, p, true) && (self.access)(lg, p)
    }

    pub fn is_available_with_tracker_logic(&self, lg: &Logic<'_>, p: &Progression) -> bool {
        self.is_available(lg, p) && self.passes_tracker_logic(lg, p)
    }

    /// Reachable ignoring dungeon rewards; used for hints about what may matter later.
    pub fn is_relevant(&self, lg: &Logic<'_>, p: &Progression) -> bool {
        let relevant = match &self.relevance {
            Some(f) => f(lg, p),
            None => (self.access)(lg, p),
        };
        lg.can_enter(self.region, p, false) && relevant && self.passes_tracker_logic(lg, p)
    }

    fn passes_tracker_logic(&self, lg: &Logic<'_>, p: &Progression) -> bool {
        self.tracker_logic.as_ref().map_or(true, |f| f(lg, p))
    }

    pub fn status(&self, lg: &Logic<'_>, p: &Progression) -> LocationStatus {
        if self.cleared {
            LocationStatus::Cleared
        } else if self.is_available_with_tracker_logic(lg, p) {
            LocationStatus::Available
        } else if self.is_relevant(lg, p) {
            LocationStatus::Relevant
        } else {
            LocationStatus::OutOfLogic
        }
    }

    /// The location's own item filter, ignoring region rules and reachability.
    pub fn allows(&self, lg: &Logic<'_>, item: &Item, p: &Progression) -> bool {
        self.allow.as_ref().map_or(true, |f| f(lg, item, p))
    }

    /// Whether `item` (owned by a world configured with `owner`) may be placed here given the
    /// inventory `p` of this location's world. `world` must be the world owning this location.
    pub fn can_fill(&self, world: &World, item: &Item, owner: &Config, p: &Progression) -> bool {
        let lg = Logic::with_probe(world, self.idx, *item);
        let region = world.region(self.region);

        let early_override = (item.progression
            || (item.is_dungeon_item() && owner.zelda_keysanity())
            || (item.is_keycard() && owner.metroid_keysanity()))
            && world.config.item_placement_rule != ItemPlacementRule::Anywhere
            && self.weight.is_some_and(|w| w <= SPHERE_ONE);

        let fillable = self.always_allow.as_ref().is_some_and(|f| f(&lg, item, p))
            || ((region.can_fill(&lg, item, owner, p) || early_override)
                && self.allows(&lg, item, p)
                && self.is_available(&lg, p));

        // Shields handed between players duplicate in game, so they stay home.
        if world.config.multi_world()
            && item.item_type == ItemType::ProgressiveShield
            && item.world != world.id
        {
            return false;
        }
        fillable
    }
}

/// A named group of locations within a region.
#[derive(Clone, Debug)]
pub struct Room {
    pub name: &'static str,
    pub locations: Vec<LocationIdx>,
}
