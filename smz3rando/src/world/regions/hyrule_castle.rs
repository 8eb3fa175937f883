use smz3rando_game::ItemType::*;
use smz3rando_logic::helpers::{can_lift_light, can_pass_fire_rod_dark_rooms};

use super::z;
use crate::world::location::{LocationKind, SPHERE_ONE};
use crate::world::region::RegionBuilder;

pub fn build(b: &mut RegionBuilder<'_>) {
    b.region_items(&[KeyHC, MapHC]).dungeon("HC");

    b.location(z(91), "Sanctuary", HeartContainer)
        .weighted(SPHERE_ONE);
    b.location(z(96), "Map Chest", MapHC)
        .weighted(SPHERE_ONE);
    b.location(z(97), "Boomerang Chest", BlueBoomerang)
        .access(|_, p| p.contains(KeyHC))
        .weighted(SPHERE_ONE);
    b.location(z(98), "Zelda's Cell", FiveRupees)
        .access(|_, p| p.contains(KeyHC))
        .weighted(SPHERE_ONE);
    for (id, name, vanilla) in [
        (z(99), "Link's Uncle", ProgressiveSword),
        (z(100), "Secret Passage", FiveRupees),
    ] {
        b.location(id, name, vanilla)
            .kind(LocationKind::NotInDungeon)
            .allow(|lg, item, _| lg.config().zelda_keysanity() || !item.is_dungeon_item())
            .weighted(SPHERE_ONE);
    }

    b.room("Sewers");
    for (id, name, vanilla) in [
        (z(92), "Secret Room - Left", ThreeBombs),
        (z(93), "Secret Room - Middle", ThreeHundredRupees),
        (z(94), "Secret Room - Right", TenArrows),
    ] {
        b.location(id, name, vanilla).access(|lg, p| {
            can_lift_light(p) || (can_pass_fire_rod_dark_rooms(p, lg.cfg()) && p.contains(KeyHC))
        });
    }
    b.location(z(95), "Dark Cross", KeyHC)
        .access(|lg, p| can_pass_fire_rod_dark_rooms(p, lg.cfg()));
    b.end_room();
}
