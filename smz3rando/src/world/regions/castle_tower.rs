use smz3rando_game::ItemType::*;
use smz3rando_game::{BossType, RewardType};
use smz3rando_logic::helpers::{can_kill_many_enemies, can_pass_sword_only_dark_rooms};

use super::z;
use crate::world::region::{RegionBuilder, RegionKind};

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeyCT])
        .dungeon("CT")
        .fixed_reward(RewardType::Agahnim)
        .boss(BossType::Agahnim)
        .can_enter(|_, p, _| can_kill_many_enemies(p) && (p.contains(Cape) || p.master_sword()));

    b.location(z(101), "Foyer", KeyCT)
        .access(|_, p| can_kill_many_enemies(p));
    b.location(z(102), "Dark Maze", KeyCT).access(|lg, p| {
        can_kill_many_enemies(p) && can_pass_sword_only_dark_rooms(p, lg.cfg()) && p.has(KeyCT, 1)
    });

    b.can_complete(|lg, p| {
        lg.can_enter(RegionKind::CastleTower, p, true)
            && can_pass_sword_only_dark_rooms(p, lg.cfg())
            && p.has(KeyCT, 2)
            && p.sword()
    });
}
