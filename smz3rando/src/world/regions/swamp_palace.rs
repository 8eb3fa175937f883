use smz3rando_game::BossType;
use smz3rando_game::ItemType::*;

use super::z;
use crate::world::region::{RegionBuilder, RegionKind};

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeySP, BigKeySP, MapSP, CompassSP])
        .dungeon("SP")
        .reward()
        .boss(BossType::Arrghus)
        .can_enter(|lg, p, req| {
            p.contains(MoonPearl)
                && p.contains(Mirror)
                && p.contains(Flippers)
                && lg.can_enter(RegionKind::DarkWorldSouth, p, req)
        });

    b.location(z(135), "Entrance", KeySP)
        .allow(|lg, item, _| lg.config().zelda_keysanity() || item.is(KeySP, lg.world().id));
    b.location(z(136), "Map Chest", MapSP)
        .access(|_, p| p.contains(KeySP));
    let big_chest = b.next_location_idx();
    b.location(z(137), "Big Chest", Hookshot)
        .access(move |lg, p| {
            (p.contains(BigKeySP) || lg.item_is(big_chest, BigKeySP))
                && p.contains(KeySP)
                && p.contains(Hammer)
        })
        .always_allow(|lg, item, _| item.is(BigKeySP, lg.world().id));
    for (id, name, vanilla) in [
        (z(138), "Compass Chest", CompassSP),
        (z(139), "West Chest", TwentyRupees),
        (z(140), "Big Key Chest", BigKeySP),
    ] {
        b.location(id, name, vanilla)
            .access(|_, p| p.contains(KeySP) && p.contains(Hammer));
    }
    b.location(z(143), "Waterfall Room", TwentyRupees)
        .access(|_, p| p.contains(KeySP) && p.contains(Hammer) && p.contains(Hookshot));
    let arrghus = b
        .location(z(144), "Arrghus", HeartContainer)
        .access(|_, p| p.contains(KeySP) && p.contains(Hammer) && p.contains(Hookshot))
        .idx;

    b.room("Flooded Room");
    for (id, name) in [(z(141), "Left"), (z(142), "Right")] {
        b.location(id, name, TwentyRupees)
            .access(|_, p| p.contains(KeySP) && p.contains(Hammer) && p.contains(Hookshot));
    }
    b.end_room();

    b.can_complete(move |lg, p| lg.is_available(arrghus, p));
}
