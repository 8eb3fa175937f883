use smz3rando_game::BossType;
use smz3rando_game::ItemType::*;
use smz3rando_logic::helpers::{can_pass_fire_rod_dark_rooms, can_pass_sword_only_dark_rooms};
use smz3rando_logic::Progression;

use super::z;
use crate::world::logic::Logic;
use crate::world::region::{RegionBuilder, RegionKind};

/// Key count needed once the front of the dungeon is open; one extra key is budgeted when the
/// player could otherwise waste it on the Hammer/Bow side.
fn keys(lg: &Logic<'_>, p: &Progression, with_bow_hammer: usize, without: usize) -> usize {
    if (p.contains(Hammer) && p.contains(Bow)) || lg.config().zelda_keysanity() {
        with_bow_hammer
    } else {
        without
    }
}

fn dark_keys(lg: &Logic<'_>, p: &Progression, with: usize, without: usize) -> usize {
    if (p.contains(Hammer) && p.contains(Bow) && can_pass_sword_only_dark_rooms(p, lg.cfg()))
        || lg.config().zelda_keysanity()
    {
        with
    } else {
        without
    }
}

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeyPD, BigKeyPD, MapPD, CompassPD])
        .dungeon("PD")
        .reward()
        .boss(BossType::HelmasaurKing)
        .can_enter(|lg, p, req| {
            p.contains(MoonPearl) && lg.can_enter(RegionKind::DarkWorldNorthEast, p, req)
        });

    b.location(z(121), "Shooter Room", KeyPD);

    let big_key_chest = b.next_location_idx();
    b.location(z(122), "Big Key Chest", BigKeyPD)
        .access(move |lg, p| {
            let needed = if lg.item_is(big_key_chest, KeyPD) {
                1
            } else {
                dark_keys(lg, p, 6, 5)
            };
            p.count(KeyPD) >= needed
        })
        .always_allow(|lg, item, p| item.is(KeyPD, lg.world().id) && p.count(KeyPD) >= 5);

    b.location(z(123), "Stalfos Basement", KeyPD)
        .access(|_, p| p.has(KeyPD, 1) || (p.contains(Bow) && p.contains(Hammer)));
    b.location(z(124), "The Arena - Bridge", KeyPD)
        .access(|_, p| p.has(KeyPD, 1) || (p.contains(Bow) && p.contains(Hammer)));
    b.location(z(125), "The Arena - Ledge", KeyPD)
        .access(|_, p| p.contains(Bow));
    b.location(z(126), "Map Chest", MapPD)
        .access(|_, p| p.contains(Bow));
    b.location(z(127), "Compass Chest", CompassPD)
        .access(|lg, p| p.count(KeyPD) >= dark_keys(lg, p, 4, 3));

    let hellway = b.next_location_idx();
    b.location(z(128), "Harmless Hellway", FiveRupees)
        .access(move |lg, p| {
            let needed = if lg.item_is(hellway, KeyPD) {
                dark_keys(lg, p, 4, 3)
            } else {
                dark_keys(lg, p, 6, 5)
            };
            p.count(KeyPD) >= needed
        })
        .always_allow(|lg, item, p| item.is(KeyPD, lg.world().id) && p.count(KeyPD) >= 5);

    b.location(z(133), "Big Chest", Hammer).access(|lg, p| {
        p.contains(BigKeyPD)
            && can_pass_sword_only_dark_rooms(p, lg.cfg())
            && p.count(KeyPD) >= keys(lg, p, 6, 5)
    });
    let helmasaur = b
        .location(z(134), "Helmasaur King", HeartContainer)
        .access(|lg, p| {
            can_pass_sword_only_dark_rooms(p, lg.cfg())
                && p.contains(Hammer)
                && p.contains(Bow)
                && p.contains(BigKeyPD)
                && p.has(KeyPD, 6)
        })
        .idx;

    b.room("Dark Maze");
    for (id, name, vanilla) in [(z(131), "Top", ThreeBombs), (z(132), "Bottom", KeyPD)] {
        b.location(id, name, vanilla).access(|lg, p| {
            can_pass_sword_only_dark_rooms(p, lg.cfg()) && p.count(KeyPD) >= keys(lg, p, 6, 5)
        });
    }
    b.room("Dark Basement");
    for (id, name, vanilla) in [(z(129), "Left", TenArrows), (z(130), "Right", KeyPD)] {
        b.location(id, name, vanilla).access(|lg, p| {
            can_pass_fire_rod_dark_rooms(p, lg.cfg()) && p.count(KeyPD) >= keys(lg, p, 4, 3)
        });
    }
    b.end_room();

    b.can_complete(move |lg, p| lg.is_available(helmasaur, p));
}
