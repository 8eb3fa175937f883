use smz3rando_game::BossType;
use smz3rando_game::ItemType::*;

use super::z;
use crate::world::region::{RegionBuilder, RegionKind};

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeyTT, BigKeyTT, MapTT, CompassTT])
        .dungeon("TT")
        .reward()
        .boss(BossType::Blind)
        .can_enter(|lg, p, req| {
            p.contains(MoonPearl) && lg.can_enter(RegionKind::DarkWorldNorthWest, p, req)
        });

    b.location(z(153), "Map Chest", MapTT);
    b.location(z(154), "Ambush Chest", TwentyRupees);
    b.location(z(155), "Compass Chest", CompassTT);
    b.location(z(156), "Big Key Chest", BigKeyTT);
    b.location(z(157), "Attic", Nothing)
        .access(|_, p| p.contains(BigKeyTT) && p.contains(KeyTT));
    b.location(z(158), "Blind's Cell", KeyTT)
        .access(|_, p| p.contains(BigKeyTT));

    let big_chest = b.next_location_idx();
    b.location(z(159), "Big Chest", ProgressiveGlove)
        .access(move |lg, p| {
            p.contains(BigKeyTT)
                && p.contains(Hammer)
                && (lg.item_is(big_chest, KeyTT) || p.contains(KeyTT))
        })
        .always_allow(|lg, item, p| item.is(KeyTT, lg.world().id) && p.contains(Hammer));

    let blind = b
        .location(z(160), "Blind", HeartContainer)
        .access(|_, p| {
            p.contains(BigKeyTT)
                && p.contains(KeyTT)
                && (p.sword() || p.contains(Hammer) || p.contains(Somaria) || p.contains(Byrna))
        })
        .idx;

    b.can_complete(move |lg, p| lg.is_available(blind, p));
}
