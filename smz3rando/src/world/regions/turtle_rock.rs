use smz3rando_game::BossType;
use smz3rando_game::ItemType::*;
use smz3rando_logic::helpers::{can_lift_heavy, can_pass_sword_only_dark_rooms};
use smz3rando_logic::Progression;

use super::z;
use crate::world::logic::Logic;
use crate::world::region::{RegionBuilder, RegionKind};

fn can_cross_laser_bridge(lg: &Logic<'_>, p: &Progression) -> bool {
    p.contains(BigKeyTR)
        && p.has(KeyTR, 3)
        && can_pass_sword_only_dark_rooms(p, lg.cfg())
        && (p.contains(Cape) || p.contains(Byrna) || p.can_block_lasers())
}

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeyTR, BigKeyTR, MapTR, CompassTR])
        .dungeon("TR")
        .reward()
        .boss(BossType::Trinexx)
        .needs_medallion()
        .can_enter(|lg, p, req| {
            lg.medallion(RegionKind::TurtleRock).is_some_and(|m| p.contains(m))
                && p.sword()
                && p.contains(MoonPearl)
                && can_lift_heavy(p)
                && p.contains(Hammer)
                && p.contains(Somaria)
                && lg.can_enter(RegionKind::LightWorldDeathMountainEast, p, req)
        });

    let first = b.next_location_idx();
    b.location(z(177), "Compass Chest", CompassTR);
    b.location(z(180), "Chain Chomps", KeyTR)
        .access(|_, p| p.has(KeyTR, 1));

    let big_key_chest = b.next_location_idx();
    b.location(z(181), "Big Key Chest", BigKeyTR)
        .access(move |lg, p| {
            let needed = if !lg.config().zelda_keysanity() || lg.item_is(big_key_chest, BigKeyTR) {
                2
            } else if lg.item_is(big_key_chest, KeyTR) {
                3
            } else {
                4
            };
            p.count(KeyTR) >= needed
        })
        .always_allow(|lg, item, p| item.is(KeyTR, lg.world().id) && p.has(KeyTR, 3));
    b.location(z(182), "Big Chest", ProgressiveShield)
        .access(|_, p| p.contains(BigKeyTR) && p.has(KeyTR, 2))
        .allow(|lg, item, _| !item.is(BigKeyTR, lg.world().id));
    b.location(z(183), "Crystaroller Room", KeyTR)
        .access(|_, p| p.contains(BigKeyTR) && p.has(KeyTR, 2));
    let trinexx = b
        .location(z(188), "Trinexx", HeartContainer)
        .access(|lg, p| {
            p.contains(BigKeyTR)
                && p.has(KeyTR, 4)
                && can_pass_sword_only_dark_rooms(p, lg.cfg())
                && p.contains(Firerod)
                && p.contains(Icerod)
        })
        .idx;

    b.room("Roller Room");
    for (id, name, vanilla) in [(z(178), "Left", MapTR), (z(179), "Right", KeyTR)] {
        b.location(id, name, vanilla)
            .access(|_, p| p.contains(Firerod));
    }
    b.room("Eye Bridge");
    for (id, name, vanilla) in [
        (z(184), "Top Right", FiveRupees),
        (z(185), "Top Left", FiveRupees),
        (z(186), "Bottom Right", TwentyRupees),
        (z(187), "Bottom Left", KeyTR),
    ] {
        b.location(id, name, vanilla).access(can_cross_laser_bridge);
    }
    b.end_room();

    for idx in first..b.next_location_idx() {
        b.loc(idx)
            .tracker_logic(|lg, p| lg.has_medallion(RegionKind::TurtleRock, p));
    }

    b.can_complete(move |lg, p| lg.is_available(trinexx, p));
}
