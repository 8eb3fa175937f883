pub mod helpers;

use serde::{Deserialize, Serialize};
use smz3rando_game::{
    BossType, ItemType, RewardType, METROID_BOSSES, NUM_BOSS_TYPES, NUM_ITEM_TYPES,
    NUM_REWARD_TYPES,
};
use strum_macros::{EnumString, VariantNames};

/// Snapshot of everything a player is assumed to hold: items, dungeon rewards and defeated bosses.
///
/// Counts are stored densely, indexed by the enum discriminant, since the same progression is
/// queried many thousands of times during a fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progression {
    items: Vec<u16>,
    rewards: Vec<u16>,
    bosses: Vec<u16>,
}

impl Default for Progression {
    fn default() -> Self {
        Progression {
            items: vec![0; NUM_ITEM_TYPES],
            rewards: vec![0; NUM_REWARD_TYPES],
            bosses: vec![0; NUM_BOSS_TYPES],
        }
    }
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I: IntoIterator<Item = ItemType>>(items: I) -> Self {
        let mut p = Self::new();
        p.add_range(items);
        p
    }

    pub fn add(&mut self, item: ItemType) {
        self.items[item as usize] += 1;
    }

    pub fn add_range<I: IntoIterator<Item = ItemType>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }

    /// Removes one copy of `item`. Counts never go below zero.
    pub fn remove(&mut self, item: ItemType) {
        let c = &mut self.items[item as usize];
        *c = c.saturating_sub(1);
    }

    pub fn add_reward(&mut self, reward: RewardType) {
        self.rewards[reward as usize] += 1;
    }

    pub fn add_boss(&mut self, boss: BossType) {
        self.bosses[boss as usize] += 1;
    }

    pub fn contains(&self, item: ItemType) -> bool {
        self.items[item as usize] > 0
    }

    pub fn count(&self, item: ItemType) -> usize {
        self.items[item as usize] as usize
    }

    pub fn has(&self, item: ItemType, n: usize) -> bool {
        self.count(item) >= n
    }

    pub fn reward_count(&self, reward: RewardType) -> usize {
        self.rewards[reward as usize] as usize
    }

    pub fn has_reward(&self, reward: RewardType) -> bool {
        self.reward_count(reward) > 0
    }

    pub fn has_defeated(&self, boss: BossType) -> bool {
        self.bosses[boss as usize] > 0
    }

    pub fn total_reward_count(&self) -> usize {
        self.rewards.iter().map(|&c| c as usize).sum()
    }

    pub fn total_boss_count(&self) -> usize {
        self.bosses.iter().map(|&c| c as usize).sum()
    }

    /// Returns true if every count in `other` is covered by this progression.
    pub fn is_superset_of(&self, other: &Progression) -> bool {
        self.items.iter().zip(&other.items).all(|(a, b)| a >= b)
            && self.rewards.iter().zip(&other.rewards).all(|(a, b)| a >= b)
            && self.bosses.iter().zip(&other.bosses).all(|(a, b)| a >= b)
    }

    pub fn item_types(&self) -> impl Iterator<Item = (ItemType, usize)> + '_ {
        ItemType::all()
            .map(|t| (t, self.count(t)))
            .filter(|&(_, c)| c > 0)
    }

    pub fn sword(&self) -> bool {
        self.has(ItemType::ProgressiveSword, 1)
    }

    pub fn master_sword(&self) -> bool {
        self.has(ItemType::ProgressiveSword, 2)
    }

    pub fn glove(&self) -> bool {
        self.has(ItemType::ProgressiveGlove, 1)
    }

    pub fn mitt(&self) -> bool {
        self.has(ItemType::ProgressiveGlove, 2)
    }

    pub fn can_block_lasers(&self) -> bool {
        self.has(ItemType::ProgressiveShield, 3)
    }

    pub fn bottle(&self) -> bool {
        [
            ItemType::Bottle,
            ItemType::BottleWithRedPotion,
            ItemType::BottleWithGreenPotion,
            ItemType::BottleWithBluePotion,
            ItemType::BottleWithFairy,
            ItemType::BottleWithBee,
            ItemType::BottleWithGoldBee,
        ]
        .iter()
        .any(|&t| self.contains(t))
    }

    pub fn two_power_bombs(&self) -> bool {
        self.has(ItemType::PowerBomb, 2)
    }

    pub fn etank_count(&self) -> usize {
        self.count(ItemType::ETank)
    }

    pub fn reserve_tank_count(&self) -> usize {
        self.count(ItemType::ReserveTank)
    }

    pub fn rupees(&self) -> usize {
        [
            (ItemType::OneRupee, 1),
            (ItemType::FiveRupees, 5),
            (ItemType::TwentyRupees, 20),
            (ItemType::TwentyRupees2, 20),
            (ItemType::FiftyRupees, 50),
            (ItemType::OneHundredRupees, 100),
            (ItemType::ThreeHundredRupees, 300),
        ]
        .iter()
        .map(|&(t, v)| self.count(t) * v)
        .sum()
    }

    pub fn agahnim(&self) -> bool {
        self.has_reward(RewardType::Agahnim)
    }

    pub fn green_pendant(&self) -> bool {
        self.has_reward(RewardType::PendantGreen)
    }

    pub fn pendant_count(&self) -> usize {
        self.reward_count(RewardType::PendantGreen)
            + self.reward_count(RewardType::PendantRed)
            + self.reward_count(RewardType::PendantBlue)
    }

    pub fn all_pendants(&self) -> bool {
        self.pendant_count() >= 3
    }

    pub fn both_red_crystals(&self) -> bool {
        self.reward_count(RewardType::CrystalRed) >= 2
    }

    pub fn crystal_count(&self) -> usize {
        self.reward_count(RewardType::CrystalBlue) + self.reward_count(RewardType::CrystalRed)
    }

    pub fn all_crystals(&self) -> bool {
        self.crystal_count() >= 7
    }

    pub fn kraid(&self) -> bool {
        self.has_defeated(BossType::Kraid)
    }

    pub fn phantoon(&self) -> bool {
        self.has_defeated(BossType::Phantoon)
    }

    pub fn draygon(&self) -> bool {
        self.has_defeated(BossType::Draygon)
    }

    pub fn ridley(&self) -> bool {
        self.has_defeated(BossType::Ridley)
    }

    pub fn metroid_boss_count(&self) -> usize {
        METROID_BOSSES.iter().filter(|&&b| self.has_defeated(b)).count()
    }

    pub fn all_metroid_bosses(&self) -> bool {
        self.metroid_boss_count() == METROID_BOSSES.len()
    }

    /// True if the required medallion is known and held, or if all three medallions are held
    /// so that it doesn't matter which one is required.
    pub fn has_marked_medallion(&self, medallion: Option<ItemType>) -> bool {
        let marked = match medallion {
            Some(ItemType::Nothing) | None => false,
            Some(m) => self.contains(m),
        };
        marked
            || (self.contains(ItemType::Bombos)
                && self.contains(ItemType::Ether)
                && self.contains(ItemType::Quake))
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    VariantNames,
)]
pub enum WallJumpDifficulty {
    None,
    Easy,
    #[default]
    Medium,
    Hard,
    Insane,
}

/// Switches for tricks and safety rails used by the access predicates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicConfig {
    pub prevent_screw_attack_soft_lock: bool,
    pub prevent_five_power_bomb_seed: bool,
    pub left_sand_pit_requires_spring_ball: bool,
    pub launch_pad_requires_ice_beam: bool,
    pub waterway_needs_gravity_suit: bool,
    pub easy_east_crateria_sky_item: bool,
    pub easy_blue_brinstar_top: bool,
    pub kholdstare_needs_cane_of_somaria: bool,
    pub zora_needs_rupee_items: bool,
    pub quarter_magic: bool,
    pub fire_rod_dark_rooms: bool,
    pub infinite_bomb_jump: bool,
    pub parlor_speed_booster: bool,
    pub moat_speed_booster: bool,
    pub mock_ball: bool,
    pub sword_only_dark_rooms: bool,
    pub light_world_south_fake_flippers: bool,
    pub wall_jump_difficulty: WallJumpDifficulty,
}

impl Default for LogicConfig {
    fn default() -> Self {
        LogicConfig {
            prevent_screw_attack_soft_lock: false,
            prevent_five_power_bomb_seed: false,
            left_sand_pit_requires_spring_ball: false,
            launch_pad_requires_ice_beam: false,
            waterway_needs_gravity_suit: false,
            easy_east_crateria_sky_item: false,
            easy_blue_brinstar_top: false,
            kholdstare_needs_cane_of_somaria: false,
            zora_needs_rupee_items: false,
            quarter_magic: true,
            fire_rod_dark_rooms: false,
            infinite_bomb_jump: false,
            parlor_speed_booster: false,
            moat_speed_booster: false,
            mock_ball: false,
            sword_only_dark_rooms: false,
            light_world_south_fake_flippers: false,
            wall_jump_difficulty: WallJumpDifficulty::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_never_go_negative() {
        let mut p = Progression::new();
        p.remove(ItemType::Morph);
        assert_eq!(p.count(ItemType::Morph), 0);
        p.add(ItemType::Morph);
        p.add(ItemType::Morph);
        p.remove(ItemType::Morph);
        assert_eq!(p.count(ItemType::Morph), 1);
    }

    #[test]
    fn progressive_items() {
        let mut p = Progression::from_items([ItemType::ProgressiveSword]);
        assert!(p.sword());
        assert!(!p.master_sword());
        p.add(ItemType::ProgressiveSword);
        assert!(p.master_sword());
        p.add_range([ItemType::ProgressiveShield; 2]);
        assert!(!p.can_block_lasers());
        p.add(ItemType::ProgressiveShield);
        assert!(p.can_block_lasers());
    }

    #[test]
    fn reserve_tanks_are_counted_separately() {
        let p = Progression::from_items([ItemType::ETank, ItemType::ETank, ItemType::ReserveTank]);
        assert_eq!(p.etank_count(), 2);
        assert_eq!(p.reserve_tank_count(), 1);
    }

    #[test]
    fn rewards_and_bosses() {
        let mut p = Progression::new();
        for _ in 0..5 {
            p.add_reward(RewardType::CrystalBlue);
        }
        p.add_reward(RewardType::CrystalRed);
        assert!(!p.all_crystals());
        assert!(!p.both_red_crystals());
        p.add_reward(RewardType::CrystalRed);
        assert!(p.all_crystals());
        assert!(p.both_red_crystals());

        p.add_boss(BossType::Kraid);
        p.add_boss(BossType::Ridley);
        assert_eq!(p.metroid_boss_count(), 2);
        assert!(!p.all_metroid_bosses());
    }

    #[test]
    fn marked_medallion() {
        let p = Progression::from_items([ItemType::Ether]);
        assert!(p.has_marked_medallion(Some(ItemType::Ether)));
        assert!(!p.has_marked_medallion(Some(ItemType::Quake)));
        assert!(!p.has_marked_medallion(None));
        let all = Progression::from_items([ItemType::Bombos, ItemType::Ether, ItemType::Quake]);
        assert!(all.has_marked_medallion(None));
        assert!(all.has_marked_medallion(Some(ItemType::Nothing)));
    }

    #[test]
    fn rupee_total() {
        let p = Progression::from_items([
            ItemType::ThreeHundredRupees,
            ItemType::FiftyRupees,
            ItemType::TwentyRupees2,
            ItemType::OneRupee,
        ]);
        assert_eq!(p.rupees(), 371);
    }
}
