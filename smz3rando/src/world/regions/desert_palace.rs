use smz3rando_game::BossType;
use smz3rando_game::ItemType::*;
use smz3rando_logic::helpers::{
    can_access_misery_mire_portal, can_lift_heavy, can_lift_light, can_light_torches,
};
use smz3rando_logic::Progression;

use super::z;
use crate::world::region::RegionBuilder;

fn can_defeat_lanmolas(p: &Progression) -> bool {
    p.sword()
        || p.contains(Hammer)
        || p.contains(Bow)
        || p.contains(Firerod)
        || p.contains(Icerod)
        || p.contains(Byrna)
        || p.contains(Somaria)
}

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeyDP, BigKeyDP, MapDP, CompassDP])
        .dungeon("DP")
        .reward()
        .boss(BossType::Lanmolas)
        .can_enter(|lg, p, _| {
            p.contains(Book)
                || (p.contains(Mirror) && can_lift_heavy(p) && p.contains(Flute))
                || (can_access_misery_mire_portal(p, lg.cfg()) && p.contains(Mirror))
        });

    b.location(z(109), "Big Chest", ProgressiveGlove)
        .access(|_, p| p.contains(BigKeyDP));
    b.location(z(110), "Torch", KeyDP)
        .access(|_, p| p.contains(Boots));
    b.location(z(111), "Map Chest", MapDP);
    b.location(z(112), "Big Key Chest", BigKeyDP)
        .access(|_, p| p.contains(KeyDP));
    b.location(z(113), "Compass Chest", CompassDP)
        .access(|_, p| p.contains(KeyDP));
    let lanmolas = b
        .location(z(114), "Lanmolas", HeartContainer)
        .access(|lg, p| {
            (can_lift_light(p)
                || (can_access_misery_mire_portal(p, lg.cfg()) && p.contains(Mirror)))
                && p.contains(BigKeyDP)
                && p.contains(KeyDP)
                && can_light_torches(p)
                && can_defeat_lanmolas(p)
        })
        .idx;

    b.can_complete(move |lg, p| lg.is_available(lanmolas, p));
}
