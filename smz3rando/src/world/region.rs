use smz3rando_game::{BossType, Game, ItemCategory, ItemType, LocationId, LocationIdx, RewardType};
use smz3rando_logic::Progression;
use strum_macros::{EnumString, VariantNames};

use super::item::Item;
use super::location::{Location, Room};
use super::logic::{EnterRequirement, ItemFilter, Logic, Requirement};
use crate::settings::{Config, ItemPlacementRule};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, VariantNames)]
#[repr(usize)]
pub enum RegionKind {
    CastleTower,
    EasternPalace,
    DesertPalace,
    TowerOfHera,
    PalaceOfDarkness,
    SwampPalace,
    SkullWoods,
    ThievesTown,
    IcePalace,
    MiseryMire,
    TurtleRock,
    GanonsTower,
    LightWorldDeathMountainWest,
    LightWorldDeathMountainEast,
    LightWorldNorthWest,
    LightWorldNorthEast,
    LightWorldSouth,
    HyruleCastle,
    DarkWorldDeathMountainWest,
    DarkWorldDeathMountainEast,
    DarkWorldNorthWest,
    DarkWorldNorthEast,
    DarkWorldSouth,
    DarkWorldMire,
    CentralCrateria,
    WestCrateria,
    EastCrateria,
    BlueBrinstar,
    GreenBrinstar,
    KraidsLair,
    PinkBrinstar,
    RedBrinstar,
    OuterMaridia,
    InnerMaridia,
    UpperNorfairWest,
    UpperNorfairEast,
    UpperNorfairCrocomire,
    LowerNorfairWest,
    LowerNorfairEast,
    WreckedShip,
}

pub const NUM_REGIONS: usize = RegionKind::WreckedShip as usize + 1;

impl RegionKind {
    pub const ALL: [RegionKind; NUM_REGIONS] = {
        use RegionKind::*;
        [
            CastleTower,
            EasternPalace,
            DesertPalace,
            TowerOfHera,
            PalaceOfDarkness,
            SwampPalace,
            SkullWoods,
            ThievesTown,
            IcePalace,
            MiseryMire,
            TurtleRock,
            GanonsTower,
            LightWorldDeathMountainWest,
            LightWorldDeathMountainEast,
            LightWorldNorthWest,
            LightWorldNorthEast,
            LightWorldSouth,
            HyruleCastle,
            DarkWorldDeathMountainWest,
            DarkWorldDeathMountainEast,
            DarkWorldNorthWest,
            DarkWorldNorthEast,
            DarkWorldSouth,
            DarkWorldMire,
            CentralCrateria,
            WestCrateria,
            EastCrateria,
            BlueBrinstar,
            GreenBrinstar,
            KraidsLair,
            PinkBrinstar,
            RedBrinstar,
            OuterMaridia,
            InnerMaridia,
            UpperNorfairWest,
            UpperNorfairEast,
            UpperNorfairCrocomire,
            LowerNorfairWest,
            LowerNorfairEast,
            WreckedShip,
        ]
    };

    pub fn name(self) -> &'static str {
        use RegionKind::*;
        match self {
            CastleTower => "Castle Tower",
            EasternPalace => "Eastern Palace",
            DesertPalace => "Desert Palace",
            TowerOfHera => "Tower of Hera",
            PalaceOfDarkness => "Palace of Darkness",
            SwampPalace => "Swamp Palace",
            SkullWoods => "Skull Woods",
            ThievesTown => "Thieves' Town",
            IcePalace => "Ice Palace",
            MiseryMire => "Misery Mire",
            TurtleRock => "Turtle Rock",
            GanonsTower => "Ganon's Tower",
            LightWorldDeathMountainWest => "Light World Death Mountain West",
            LightWorldDeathMountainEast => "Light World Death Mountain East",
            LightWorldNorthWest => "Light World North West",
            LightWorldNorthEast => "Light World North East",
            LightWorldSouth => "Light World South",
            HyruleCastle => "Hyrule Castle",
            DarkWorldDeathMountainWest => "Dark World Death Mountain West",
            DarkWorldDeathMountainEast => "Dark World Death Mountain East",
            DarkWorldNorthWest => "Dark World North West",
            DarkWorldNorthEast => "Dark World North East",
            DarkWorldSouth => "Dark World South",
            DarkWorldMire => "Dark World Mire",
            CentralCrateria => "Central Crateria",
            WestCrateria => "West Crateria",
            EastCrateria => "East Crateria",
            BlueBrinstar => "Blue Brinstar",
            GreenBrinstar => "Green Brinstar",
            KraidsLair => "Kraid's Lair",
            PinkBrinstar => "Pink Brinstar",
            RedBrinstar => "Red Brinstar",
            OuterMaridia => "Outer Maridia",
            InnerMaridia => "Inner Maridia",
            UpperNorfairWest => "Upper Norfair West",
            UpperNorfairEast => "Upper Norfair East",
            UpperNorfairCrocomire => "Upper Norfair Crocomire",
            LowerNorfairWest => "Lower Norfair West",
            LowerNorfairEast => "Lower Norfair East",
            WreckedShip => "Wrecked Ship",
        }
    }

    pub fn game(self) -> Game {
        if (self as usize) < RegionKind::CentralCrateria as usize {
            Game::Zelda
        } else {
            Game::Metroid
        }
    }
}

#[derive(Clone, Debug)]
pub struct DungeonInfo {
    pub abbreviation: &'static str,
}

#[derive(Clone, Debug)]
pub struct RewardRegion {
    pub reward: RewardType,
    /// Fixed rewards are not shuffled during world setup.
    pub fixed: bool,
}

pub struct BossRegion {
    pub boss: BossType,
    can_beat: Option<Requirement>,
}

#[derive(Clone, Debug)]
pub struct MedallionRegion {
    pub medallion: Option<ItemType>,
}

pub struct Region {
    pub kind: RegionKind,
    pub name: &'static str,
    pub game: Game,
    pub is_overworld: bool,
    pub weight: i32,
    pub region_items: Vec<ItemType>,
    pub locations: Vec<LocationIdx>,
    pub rooms: Vec<Room>,
    pub dungeon: Option<DungeonInfo>,
    pub reward: Option<RewardRegion>,
    pub boss: Option<BossRegion>,
    pub medallion: Option<MedallionRegion>,
    can_enter: EnterRequirement,
    can_fill: Option<ItemFilter>,
    can_complete: Option<Requirement>,
}

impl Region {
    pub fn can_enter(&self, lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
        (self.can_enter)(lg, p, require_rewards)
    }

    /// Region-level acceptance of `item`, whose owning world is configured by `owner`.
    pub fn can_fill(&self, lg: &Logic<'_>, item: &Item, owner: &Config, p: &Progression) -> bool {
        if let Some(f) = &self.can_fill {
            if !f(lg, item, p) {
                return false;
            }
        }
        self.default_can_fill(item, owner, lg.config())
    }

    pub fn is_region_item(&self, item: &Item) -> bool {
        self.region_items.contains(&item.item_type)
    }

    fn default_can_fill(&self, item: &Item, owner: &Config, config: &Config) -> bool {
        (owner.zelda_keysanity() || !item.is_dungeon_item() || self.is_region_item(item))
            && self.matches_item_placement_rule(item, owner, config)
    }

    pub fn matches_item_placement_rule(&self, item: &Item, owner: &Config, config: &Config) -> bool {
        if config.multi_world() {
            return true;
        }
        let rule = config.item_placement_rule;
        if rule == ItemPlacementRule::Anywhere
            || (!item.progression && !item.is_key() && !item.is_keycard() && !item.is_big_key())
            || (!owner.zelda_keysanity() && (item.is_key() || item.is_big_key()))
        {
            return true;
        }
        let zelda_item = item.item_type.is_in_category(ItemCategory::Zelda);
        let metroid_item = item.item_type.is_in_category(ItemCategory::Metroid);
        match rule {
            ItemPlacementRule::Anywhere => true,
            ItemPlacementRule::DungeonsAndMetroid => {
                self.game == Game::Metroid || !self.is_overworld
            }
            ItemPlacementRule::CrystalDungeonsAndMetroid => {
                self.game == Game::Metroid
                    || self.reward_type().is_some_and(|r| r.is_crystal())
            }
            ItemPlacementRule::OppositeGame => {
                (zelda_item && self.game == Game::Metroid)
                    || (metroid_item && self.game == Game::Zelda)
            }
            ItemPlacementRule::SameGame => {
                (zelda_item && self.game == Game::Zelda)
                    || (metroid_item && self.game == Game::Metroid)
            }
        }
    }

    pub fn can_complete(&self, lg: &Logic<'_>, p: &Progression) -> bool {
        self.can_complete.as_ref().is_some_and(|f| f(lg, p))
    }

    pub fn can_beat_boss(&self, lg: &Logic<'_>, p: &Progression) -> bool {
        match &self.boss {
            Some(BossRegion {
                can_beat: Some(f), ..
            }) => f(lg, p),
            Some(_) => self.can_complete(lg, p),
            None => false,
        }
    }

    pub fn as_dungeon(&self) -> Option<&DungeonInfo> {
        self.dungeon.as_ref()
    }

    pub fn as_reward_region(&self) -> Option<&RewardRegion> {
        self.reward.as_ref()
    }

    pub fn as_boss_region(&self) -> Option<&BossRegion> {
        self.boss.as_ref()
    }

    pub fn as_medallion_region(&self) -> Option<&MedallionRegion> {
        self.medallion.as_ref()
    }

    pub fn reward_type(&self) -> Option<RewardType> {
        self.reward.as_ref().map(|r| r.reward)
    }

    pub fn boss_type(&self) -> Option<BossType> {
        self.boss.as_ref().map(|b| b.boss)
    }

    pub fn medallion(&self) -> Option<ItemType> {
        self.medallion.as_ref().and_then(|m| m.medallion)
    }
}

/// Builds one region, appending its locations to the world's location arena.
pub struct RegionBuilder<'a> {
    kind: RegionKind,
    arena: &'a mut Vec<Location>,
    is_overworld: bool,
    weight: i32,
    region_items: Vec<ItemType>,
    locations: Vec<LocationIdx>,
    rooms: Vec<Room>,
    current_room: Option<usize>,
    dungeon: Option<DungeonInfo>,
    reward: Option<RewardRegion>,
    boss: Option<BossRegion>,
    medallion: Option<MedallionRegion>,
    can_enter: EnterRequirement,
    can_fill: Option<ItemFilter>,
    can_complete: Option<Requirement>,
}

impl<'a> RegionBuilder<'a> {
    pub fn new(kind: RegionKind, arena: &'a mut Vec<Location>) -> Self {
        RegionBuilder {
            kind,
            arena,
            is_overworld: false,
            weight: 0,
            region_items: vec![],
            locations: vec![],
            rooms: vec![],
            current_room: None,
            dungeon: None,
            reward: None,
            boss: None,
            medallion: None,
            can_enter: Box::new(|_, _, _| true),
            can_fill: None,
            can_complete: None,
        }
    }

    pub fn weight(&mut self, weight: i32) -> &mut Self {
        self.weight = weight;
        self
    }

    pub fn overworld(&mut self) -> &mut Self {
        self.is_overworld = true;
        self
    }

    pub fn region_items(&mut self, items: &[ItemType]) -> &mut Self {
        self.region_items = items.to_vec();
        self
    }

    pub fn can_enter<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Logic<'_>, &Progression, bool) -> bool + Send + Sync + 'static,
    {
        self.can_enter = Box::new(f);
        self
    }

    /// Additional region-wide restriction applied before the default dungeon-item and
    /// placement-rule checks.
    pub fn can_fill<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Logic<'_>, &Item, &Progression) -> bool + Send + Sync + 'static,
    {
        self.can_fill = Some(Box::new(f));
        self
    }

    pub fn dungeon(&mut self, abbreviation: &'static str) -> &mut Self {
        self.dungeon = Some(DungeonInfo { abbreviation });
        self
    }

    pub fn can_complete<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Logic<'_>, &Progression) -> bool + Send + Sync + 'static,
    {
        self.can_complete = Some(Box::new(f));
        self
    }

    /// A reward assigned during world setup.
    pub fn reward(&mut self) -> &mut Self {
        self.reward = Some(RewardRegion {
            reward: RewardType::None,
            fixed: false,
        });
        self
    }

    pub fn fixed_reward(&mut self, reward: RewardType) -> &mut Self {
        self.reward = Some(RewardRegion {
            reward,
            fixed: true,
        });
        self
    }

    /// A boss beaten exactly when the region can be completed.
    pub fn boss(&mut self, boss: BossType) -> &mut Self {
        self.boss = Some(BossRegion {
            boss,
            can_beat: None,
        });
        self
    }

    pub fn boss_with<F>(&mut self, boss: BossType, can_beat: F) -> &mut Self
    where
        F: Fn(&Logic<'_>, &Progression) -> bool + Send + Sync + 'static,
    {
        self.boss = Some(BossRegion {
            boss,
            can_beat: Some(Box::new(can_beat)),
        });
        self
    }

    pub fn needs_medallion(&mut self) -> &mut Self {
        self.medallion = Some(MedallionRegion { medallion: None });
        self
    }

    pub fn room(&mut self, name: &'static str) -> &mut Self {
        self.rooms.push(Room {
            name,
            locations: vec![],
        });
        self.current_room = Some(self.rooms.len() - 1);
        self
    }

    pub fn end_room(&mut self) -> &mut Self {
        self.current_room = None;
        self
    }

    pub fn next_location_idx(&self) -> LocationIdx {
        self.arena.len()
    }

    /// Adds a location to the region (and to the open room, if any).
    pub fn location(
        &mut self,
        id: LocationId,
        name: &'static str,
        vanilla_item: ItemType,
    ) -> &mut Location {
        let idx = self.arena.len();
        let room = self.current_room.map(|r| self.rooms[r].name);
        self.arena
            .push(Location::new(idx, id, name, room, self.kind, vanilla_item));
        self.locations.push(idx);
        if let Some(r) = self.current_room {
            self.rooms[r].locations.push(idx);
        }
        &mut self.arena[idx]
    }

    pub fn loc(&mut self, idx: LocationIdx) -> &mut Location {
        &mut self.arena[idx]
    }

    pub fn finish(self) -> Region {
        Region {
            kind: self.kind,
            name: self.kind.name(),
            game: self.kind.game(),
            is_overworld: self.is_overworld,
            weight: self.weight,
            region_items: self.region_items,
            locations: self.locations,
            rooms: self.rooms,
            dungeon: self.dungeon,
            reward: self.reward,
            boss: self.boss,
            medallion: self.medallion,
            can_enter: self.can_enter,
            can_fill: self.can_fill,
            can_complete: self.can_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_kinds_are_indexed_by_position() {
        for (i, kind) in RegionKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
        assert_eq!(RegionKind::HyruleCastle.game(), Game::Zelda);
        assert_eq!(RegionKind::CentralCrateria.game(), Game::Metroid);
    }

    #[test]
    fn builder_tracks_rooms() {
        let mut arena = vec![];
        let mut b = RegionBuilder::new(RegionKind::EasternPalace, &mut arena);
        b.location(256 + 103, "Cannonball Chest", ItemType::BlueBoomerang);
        b.room("Big Key Room");
        let idx = b.location(256 + 107, "Big Key Chest", ItemType::BigKeyEP).idx;
        b.end_room();
        let region = b.finish();
        assert_eq!(region.locations.len(), 2);
        assert_eq!(region.rooms[0].locations, vec![idx]);
        assert_eq!(arena[idx].room, Some("Big Key Room"));
        assert_eq!(arena[0].room, None);
    }
}
