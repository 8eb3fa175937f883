use smz3rando_game::BossType;
use smz3rando_game::ItemType::*;
use smz3rando_logic::helpers::{can_light_torches, can_pass_sword_only_dark_rooms};

use super::z;
use crate::world::region::{RegionBuilder, RegionKind};

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeyMM, BigKeyMM, MapMM, CompassMM])
        .dungeon("MM")
        .reward()
        .boss(BossType::Vitreous)
        .needs_medallion()
        .can_enter(|lg, p, req| {
            lg.medallion(RegionKind::MiseryMire).is_some_and(|m| p.contains(m))
                && p.sword()
                && p.contains(MoonPearl)
                && (p.contains(Boots) || p.contains(Hookshot))
                && lg.can_enter(RegionKind::DarkWorldMire, p, req)
        });

    let first = b.next_location_idx();
    let (compass_chest, big_key_chest) = (first + 4, first + 5);

    b.location(z(169), "Main Lobby", KeyMM)
        .access(|_, p| p.contains(BigKeyMM) || p.has(KeyMM, 1));
    b.location(z(170), "Map Chest", MapMM)
        .access(|_, p| p.contains(BigKeyMM) || p.has(KeyMM, 1));
    b.location(z(171), "Bridge Chest", KeyMM);
    b.location(z(172), "Spike Chest", KeyMM);
    b.location(z(173), "Compass Chest", CompassMM)
        .access(move |lg, p| {
            can_light_torches(p)
                && p.count(KeyMM) >= if lg.item_is(big_key_chest, BigKeyMM) { 2 } else { 3 }
        });
    b.location(z(174), "Big Key Chest", BigKeyMM)
        .access(move |lg, p| {
            can_light_torches(p)
                && p.count(KeyMM) >= if lg.item_is(compass_chest, BigKeyMM) { 2 } else { 3 }
        });
    b.location(z(175), "Big Chest", Somaria)
        .access(|_, p| p.contains(BigKeyMM));
    let vitreous = b
        .location(z(176), "Vitreous", HeartContainer)
        .access(|lg, p| {
            p.contains(BigKeyMM) && can_pass_sword_only_dark_rooms(p, lg.cfg()) && p.contains(Somaria)
        })
        .idx;

    for idx in first..=vitreous {
        b.loc(idx)
            .tracker_logic(|lg, p| lg.has_medallion(RegionKind::MiseryMire, p));
    }

    b.can_complete(move |lg, p| lg.is_available(vitreous, p));
}
