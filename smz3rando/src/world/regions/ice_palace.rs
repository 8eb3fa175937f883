use smz3rando_game::BossType;
use smz3rando_game::ItemType::*;
use smz3rando_game::LocationIdx;
use smz3rando_logic::helpers::{can_lift_heavy, can_lift_light, can_melt_freezors};
use smz3rando_logic::Progression;

use super::z;
use crate::world::logic::Logic;
use crate::world::region::RegionBuilder;

/// A single key is enough for the key-locked side rooms only if it can't be spent before the
/// big key is found, i.e. the big key isn't held yet or lies behind one of `others`.
fn cannot_waste_keys(lg: &Logic<'_>, p: &Progression, others: &[LocationIdx]) -> bool {
    !p.contains(BigKeyIP) || lg.any_item_is(others, BigKeyIP)
}

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeyIP, BigKeyIP, MapIP, CompassIP])
        .dungeon("IP")
        .reward()
        .boss(BossType::Kholdstare)
        .can_enter(|_, p, _| {
            p.contains(MoonPearl)
                && p.contains(Flippers)
                && can_lift_heavy(p)
                && can_melt_freezors(p)
        });

    b.location(z(161), "Compass Chest", CompassIP);
    let spike_room = b.location(z(162), "Spike Room", KeyIP).idx;
    let map_chest = b.location(z(163), "Map Chest", MapIP).idx;
    let big_key_chest = b.location(z(164), "Big Key Chest", BigKeyIP).idx;
    b.location(z(165), "Iced T Room", KeyIP);
    b.location(z(166), "Freezor Chest", ThreeBombs);
    b.location(z(167), "Big Chest", ProgressiveTunic)
        .access(|_, p| p.contains(BigKeyIP));
    let kholdstare = b
        .location(z(168), "Kholdstare", HeartContainer)
        .access(|lg, p| {
            p.contains(BigKeyIP)
                && p.contains(Hammer)
                && can_lift_light(p)
                && p.count(KeyIP) >= if p.contains(Somaria) { 1 } else { 2 }
                && (!lg.cfg().kholdstare_needs_cane_of_somaria || p.contains(Somaria))
        })
        .idx;

    b.loc(spike_room).access(move |lg, p| {
        p.contains(Hookshot)
            || (p.has(KeyIP, 1) && cannot_waste_keys(lg, p, &[map_chest, big_key_chest]))
    });
    b.loc(map_chest).access(move |lg, p| {
        p.contains(Hammer)
            && can_lift_light(p)
            && (p.contains(Hookshot)
                || (p.has(KeyIP, 1) && cannot_waste_keys(lg, p, &[spike_room, big_key_chest])))
    });
    b.loc(big_key_chest).access(move |lg, p| {
        p.contains(Hammer)
            && can_lift_light(p)
            && (p.contains(Hookshot)
                || (p.has(KeyIP, 1) && cannot_waste_keys(lg, p, &[spike_room, map_chest])))
    });

    b.can_complete(move |lg, p| lg.is_available(kholdstare, p));
}
