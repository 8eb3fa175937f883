use smz3rando_game::BossType;
use smz3rando_game::ItemType::*;

use super::z;
use crate::world::region::{RegionBuilder, RegionKind};

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeySW, BigKeySW, MapSW, CompassSW])
        .dungeon("SW")
        .reward()
        .boss(BossType::Mothula)
        .can_enter(|lg, p, req| {
            p.contains(MoonPearl) && lg.can_enter(RegionKind::DarkWorldNorthWest, p, req)
        });

    b.location(z(145), "Pot Prison", KeySW);
    b.location(z(146), "Compass Chest", CompassSW);
    let big_chest = b.next_location_idx();
    b.location(z(147), "Big Chest", Firerod)
        .access(move |lg, p| p.contains(BigKeySW) || lg.item_is(big_chest, BigKeySW))
        .always_allow(|lg, item, _| item.is(BigKeySW, lg.world().id));
    b.location(z(148), "Map Chest", MapSW);
    b.location(z(149), "Pinball Room", KeySW)
        .allow(|lg, item, _| item.is(KeySW, lg.world().id));
    b.location(z(150), "Big Key Chest", BigKeySW);
    b.location(z(151), "Bridge Room", KeySW)
        .access(|_, p| p.contains(Firerod));
    let mothula = b
        .location(z(152), "Mothula", HeartContainer)
        .access(|_, p| p.contains(Firerod) && p.sword() && p.has(KeySW, 3))
        .idx;

    b.can_complete(move |lg, p| lg.is_available(mothula, p));
}
