use smz3rando_game::BossType;
use smz3rando_game::ItemType::*;
use smz3rando_logic::helpers::can_light_torches;

use super::z;
use crate::world::location::LocationKind;
use crate::world::region::{RegionBuilder, RegionKind};

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeyTH, BigKeyTH, MapTH, CompassTH])
        .dungeon("TH")
        .reward()
        .boss(BossType::Moldorm)
        .can_enter(|lg, p, req| {
            (p.contains(Mirror) || (p.contains(Hookshot) && p.contains(Hammer)))
                && lg.can_enter(RegionKind::LightWorldDeathMountainWest, p, req)
        });

    b.location(z(115), "Basement Cage", KeyTH)
        .kind(LocationKind::HeraStandingKey);
    b.location(z(116), "Map Chest", MapTH);
    let big_key_chest = b.next_location_idx();
    b.location(z(117), "Big Key Chest", BigKeyTH)
        .access(move |lg, p| {
            (p.contains(KeyTH) || lg.item_is(big_key_chest, KeyTH)) && can_light_torches(p)
        })
        .always_allow(|lg, item, _| item.is(KeyTH, lg.world().id));
    b.location(z(118), "Compass Chest", CompassTH)
        .access(|_, p| p.contains(BigKeyTH));
    b.location(z(119), "Big Chest", MoonPearl)
        .access(|_, p| p.contains(BigKeyTH));
    let moldorm = b
        .location(z(120), "Moldorm", HeartContainer)
        .access(|_, p| p.contains(BigKeyTH) && (p.sword() || p.contains(Hammer)))
        .idx;

    b.can_complete(move |lg, p| lg.is_available(moldorm, p));
}
