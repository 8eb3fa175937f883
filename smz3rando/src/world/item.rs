use serde_derive::{Deserialize, Serialize};
use smz3rando_game::{BossType, Game, ItemCategory, ItemType, RewardType, WorldId};

/// Sequence number of an item within its owning world; `(world, id)` is unique per attempt.
pub type ItemId = usize;

/// A single placeable item. Ownership is by `world`, which may differ from the world of the
/// location holding it in multiworld games.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub item_type: ItemType,
    pub world: WorldId,
    pub progression: bool,
}

impl Item {
    pub fn new(id: ItemId, item_type: ItemType, world: WorldId, progression: bool) -> Self {
        Item {
            id,
            item_type,
            world,
            progression,
        }
    }

    pub fn is(&self, item_type: ItemType, world: WorldId) -> bool {
        self.item_type == item_type && self.world == world
    }

    pub fn is_dungeon_item(&self) -> bool {
        self.item_type.is_dungeon_item()
    }

    pub fn is_key(&self) -> bool {
        self.item_type.is_key()
    }

    pub fn is_big_key(&self) -> bool {
        self.item_type.is_big_key()
    }

    pub fn is_map(&self) -> bool {
        self.item_type.is_map()
    }

    pub fn is_compass(&self) -> bool {
        self.item_type.is_compass()
    }

    pub fn is_keycard(&self) -> bool {
        self.item_type.is_keycard()
    }

    pub fn is_junk(&self) -> bool {
        self.item_type.is_in_category(ItemCategory::Junk)
    }

    pub fn game(&self) -> Option<Game> {
        self.item_type.game()
    }
}

/// A dungeon reward as held by a specific world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub reward_type: RewardType,
    pub world: WorldId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    pub boss_type: BossType,
    pub world: WorldId,
}

/// Sequential item id allocation for the pools of one world.
#[derive(Default)]
pub struct ItemFactory {
    next_id: ItemId,
}

impl ItemFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, item_type: ItemType, world: WorldId, progression: bool) -> Item {
        let item = Item::new(self.next_id, item_type, world, progression);
        self.next_id += 1;
        item
    }

    pub fn copies(&mut self, n: usize, item_type: ItemType, world: WorldId) -> Vec<Item> {
        (0..n).map(|_| self.create(item_type, world, false)).collect()
    }

    pub fn num_created(&self) -> usize {
        self.next_id
    }
}
