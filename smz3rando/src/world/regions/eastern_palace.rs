use smz3rando_game::BossType;
use smz3rando_game::ItemType::*;
use smz3rando_logic::helpers::{can_pass_fire_rod_dark_rooms, can_pass_sword_only_dark_rooms};

use super::z;
use crate::world::region::RegionBuilder;

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[BigKeyEP, MapEP, CompassEP])
        .dungeon("EP")
        .reward()
        .boss(BossType::ArmosKnights);

    b.location(z(103), "Cannonball Chest", OneHundredRupees);
    b.location(z(104), "Map Chest", MapEP);
    b.location(z(105), "Compass Chest", CompassEP);
    b.location(z(106), "Big Chest", Bow)
        .access(|_, p| p.contains(BigKeyEP));
    b.location(z(107), "Big Key Chest", BigKeyEP)
        .access(|lg, p| can_pass_sword_only_dark_rooms(p, lg.cfg()));
    let armos = b
        .location(z(108), "Armos Knights", HeartContainer)
        .access(|lg, p| {
            p.contains(BigKeyEP) && p.contains(Bow) && can_pass_fire_rod_dark_rooms(p, lg.cfg())
        })
        .idx;

    b.can_complete(move |lg, p| lg.is_available(armos, p));
}
