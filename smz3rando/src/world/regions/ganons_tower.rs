use smz3rando_game::ItemType::*;
use smz3rando_game::{LocationIdx, METROID_BOSSES};
use smz3rando_logic::helpers::{can_extend_magic, can_light_torches};
use smz3rando_logic::Progression;

use super::z;
use crate::world::logic::Logic;
use crate::world::region::{RegionBuilder, RegionKind};

fn tower_ascend(p: &Progression) -> bool {
    p.contains(BigKeyGT) && p.has(KeyGT, 3) && p.contains(Bow) && can_light_torches(p)
}

fn can_beat_armos(p: &Progression) -> bool {
    p.sword()
        || p.contains(Hammer)
        || p.contains(Bow)
        || (can_extend_magic(p, 2) && (p.contains(Somaria) || p.contains(Byrna)))
        || (can_extend_magic(p, 4) && (p.contains(Firerod) || p.contains(Icerod)))
}

fn big_key_room(p: &Progression) -> bool {
    p.has(KeyGT, 3)
        && can_beat_armos(p)
        && ((p.contains(Hammer) && p.contains(Hookshot))
            || (p.contains(Firerod) && p.contains(Somaria)))
}

/// Keys needed in a four-chest room: one less if the big key sits in a sibling chest.
fn room_keys(lg: &Logic<'_>, siblings: &[LocationIdx]) -> usize {
    if lg.any_item_is(siblings, BigKeyGT) {
        3
    } else {
        4
    }
}

fn siblings(room: [LocationIdx; 4], this: LocationIdx) -> Vec<LocationIdx> {
    room.into_iter().filter(|&idx| idx != this).collect()
}

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeyGT, BigKeyGT, MapGT, CompassGT])
        .dungeon("GT")
        .can_enter(|lg, p, req| {
            let config = lg.config();
            let enough_crystals = p.crystal_count() >= config.ganons_tower_crystal_count;
            let open_before_ganon = config.ganons_tower_crystal_count < config.ganon_crystal_count;
            p.contains(MoonPearl)
                && lg.can_enter(RegionKind::DarkWorldDeathMountainEast, p, req)
                && enough_crystals
                && (open_before_ganon
                    || lg.can_defeat_boss_count(p, &METROID_BOSSES) >= config.tourian_boss_count)
        })
        .can_fill(|lg, item, _| {
            let world = lg.world();
            if !world.config.multi_world() {
                return true;
            }
            if item.world != world.id || item.progression {
                return false;
            }
            let own_gt_key = item.is(BigKeyGT, world.id) || item.is(KeyGT, world.id);
            !(world.config.zelda_keysanity()
                && !own_gt_key
                && (item.is_key() || item.is_big_key() || item.is_keycard()))
        });

    b.location(z(189), "Bob's Torch", KeyGT)
        .access(|_, p| p.contains(Boots));

    let map_chest = b.next_location_idx();
    b.location(z(194), "Map Chest", MapGT)
        .access(move |lg, p| {
            let needed = if lg.item_is(map_chest, BigKeyGT) || lg.item_is(map_chest, KeyGT) {
                3
            } else {
                4
            };
            p.contains(Hammer)
                && (p.contains(Hookshot) || p.contains(Boots))
                && p.count(KeyGT) >= needed
        })
        .always_allow(|lg, item, p| item.is(KeyGT, lg.world().id) && p.has(KeyGT, 3));

    let firesnake = b.location(z(195), "Firesnake Room", KeyGT).idx;
    b.location(z(202), "Tile Room", KeyGT)
        .access(|_, p| p.contains(Somaria));
    b.location(z(207), "Bob's Chest", TenArrows).access(|_, p| {
        p.has(KeyGT, 3)
            && ((p.contains(Hammer) && p.contains(Hookshot))
                || (p.contains(Somaria) && p.contains(Firerod)))
    });
    b.location(z(208), "Big Chest", ProgressiveTunic)
        .access(|_, p| {
            p.contains(BigKeyGT)
                && p.has(KeyGT, 3)
                && ((p.contains(Hammer) && p.contains(Hookshot))
                    || (p.contains(Somaria) && p.contains(Firerod)))
        })
        .allow(|lg, item, _| !item.is(BigKeyGT, lg.world().id));
    b.location(z(214), "Pre-Moldorm Chest", KeyGT)
        .access(|_, p| tower_ascend(p))
        .allow(|lg, item, _| !item.is(BigKeyGT, lg.world().id));
    b.location(z(215), "Moldorm Chest", TwentyRupees)
        .access(|_, p| {
            p.contains(BigKeyGT)
                && p.has(KeyGT, 4)
                && p.contains(Bow)
                && can_light_torches(p)
                && (p.sword() || p.contains(Hammer))
                && p.contains(Hookshot)
        })
        .allow(|lg, item, _| {
            !item.is(KeyGT, lg.world().id) && !item.is(BigKeyGT, lg.world().id)
        });

    b.room("DMs Room");
    for (id, name) in [
        (z(190), "Top Left"),
        (z(191), "Top Right"),
        (z(192), "Bottom Left"),
        (z(193), "Bottom Right"),
    ] {
        b.location(id, name, Nothing)
            .access(|_, p| p.contains(Hammer) && p.contains(Hookshot));
    }

    b.room("Randomizer Room");
    let first = b.next_location_idx();
    let randomizer_room = [first, first + 1, first + 2, first + 3];
    for (i, (id, name)) in [
        (z(196), "Top Left"),
        (z(197), "Top Right"),
        (z(198), "Bottom Left"),
        (z(199), "Bottom Right"),
    ]
    .into_iter()
    .enumerate()
    {
        let others = siblings(randomizer_room, randomizer_room[i]);
        b.location(id, name, Nothing).access(move |lg, p| {
            p.contains(Hammer) && p.contains(Hookshot) && p.count(KeyGT) >= room_keys(lg, &others)
        });
    }

    b.room("Hope Room");
    b.location(z(200), "Left", TenArrows);
    b.location(z(201), "Right", ThreeBombs);

    b.room("Compass Room");
    let first = b.next_location_idx();
    let compass_room = [first, first + 1, first + 2, first + 3];
    for (i, (id, name, vanilla)) in [
        (z(203), "Top Left", CompassGT),
        (z(204), "Top Right", Nothing),
        (z(205), "Bottom Left", Nothing),
        (z(206), "Bottom Right", Nothing),
    ]
    .into_iter()
    .enumerate()
    {
        let others = siblings(compass_room, compass_room[i]);
        b.location(id, name, vanilla).access(move |lg, p| {
            p.contains(Somaria) && p.contains(Firerod) && p.count(KeyGT) >= room_keys(lg, &others)
        });
    }

    b.room("Big Key Room");
    for (id, name, vanilla) in [
        (z(209), "Bottom Big Key Chest", BigKeyGT),
        (z(210), "Left", TenArrows),
        (z(211), "Right", ThreeBombs),
    ] {
        b.location(id, name, vanilla).access(|_, p| big_key_room(p));
    }

    b.room("Mini Helmasaur Room");
    for (id, name) in [(z(212), "Left"), (z(213), "Right")] {
        b.location(id, name, ThreeBombs)
            .access(|_, p| tower_ascend(p))
            .allow(|lg, item, _| !item.is(BigKeyGT, lg.world().id));
    }
    b.end_room();

    b.loc(firesnake).access(move |lg, p| {
        let needed = if lg.any_item_is(&randomizer_room, BigKeyGT) || lg.item_is(firesnake, KeyGT) {
            2
        } else {
            3
        };
        p.contains(Hammer) && p.contains(Hookshot) && p.count(KeyGT) >= needed
    });
}
