use smz3rando_game::ItemType::*;
use smz3rando_game::RewardType;
use smz3rando_logic::helpers::{
    can_access_death_mountain_portal, can_access_misery_mire_portal,
    can_hyrule_south_fake_flippers, can_lift_heavy, can_lift_light,
};

use super::z;
use crate::world::location::{LocationKind, SPHERE_ONE};
use crate::world::region::{RegionBuilder, RegionKind};

/// Kakariko locations sort ahead of the rest of sphere one.
const KAKARIKO: i32 = SPHERE_ONE - 4;

pub fn death_mountain_west(b: &mut RegionBuilder<'_>) {
    b.overworld().can_enter(|lg, p, _| {
        p.contains(Flute)
            || (can_lift_light(p) && p.contains(Lamp))
            || can_access_death_mountain_portal(p, lg.cfg())
    });

    b.location(z(0), "Ether Tablet", Ether)
        .kind(LocationKind::Ether)
        .access(|_, p| {
            p.contains(Book)
                && p.master_sword()
                && (p.contains(Mirror) || (p.contains(Hammer) && p.contains(Hookshot)))
        });
    b.location(z(1), "Spectacle Rock", HeartPiece)
        .access(|_, p| p.contains(Mirror));
    b.location(z(2), "Spectacle Rock Cave", HeartPiece);
    b.location(z(3), "Old Man", Mirror)
        .access(|_, p| p.contains(Lamp));
}

pub fn death_mountain_east(b: &mut RegionBuilder<'_>) {
    b.overworld().can_enter(|lg, p, req| {
        lg.can_enter(RegionKind::LightWorldDeathMountainWest, p, req)
            && ((p.contains(Hammer) && p.contains(Mirror)) || p.contains(Hookshot))
    });

    b.location(z(4), "Floating Island", HeartPiece)
        .access(|_, p| p.contains(Mirror) && p.contains(MoonPearl) && can_lift_heavy(p));
    b.location(z(5), "Spiral Cave", FiftyRupees);
    b.location(z(13), "Mimic Cave", HeartPiece)
        .access(|lg, p| {
            p.contains(Mirror) && p.has(KeyTR, 2) && lg.can_enter(RegionKind::TurtleRock, p, true)
        })
        .relevance(|lg, p| {
            p.contains(Mirror) && p.has(KeyTR, 2) && lg.can_enter(RegionKind::TurtleRock, p, false)
        })
        .tracker_logic(|lg, p| lg.has_medallion(RegionKind::TurtleRock, p));

    b.room("Paradox Cave");
    for (id, name, vanilla) in [
        (z(6), "Paradox Cave Upper - Left", ThreeBombs),
        (z(7), "Paradox Cave Upper - Right", TenArrows),
        (z(8), "Paradox Cave Lower - Far Left", TwentyRupees),
        (z(9), "Paradox Cave Lower - Left", TwentyRupees),
        (z(10), "Paradox Cave Lower - Middle", TwentyRupees),
        (z(11), "Paradox Cave Lower - Right", TwentyRupees),
        (z(12), "Paradox Cave Lower - Far Right", TwentyRupees),
    ] {
        b.location(id, name, vanilla);
    }
    b.end_room();
}

pub fn north_west(b: &mut RegionBuilder<'_>) {
    use RegionKind::DarkWorldNorthWest;

    b.overworld();

    b.location(z(14), "Master Sword Pedestal", ProgressiveSword)
        .kind(LocationKind::Pedestal)
        .access(|_, p| p.all_pendants())
        .relevance(|lg, p| {
            lg.can_aquire_all(
                p,
                &[
                    RewardType::PendantGreen,
                    RewardType::PendantBlue,
                    RewardType::PendantRed,
                ],
            )
        });
    b.location(z(15), "Mushroom", Mushroom).weighted(KAKARIKO);
    b.location(z(16), "Lost Woods Hideout", HeartPiece)
        .weighted(KAKARIKO);
    b.location(z(17), "Lumberjack Tree", HeartPiece)
        .access(|lg, p| lg.check_agahnim(p, true) && p.contains(Boots))
        .relevance(|lg, p| lg.check_agahnim(p, false) && p.contains(Boots));
    b.location(z(18), "Pegasus Rocks", HeartPiece)
        .access(|_, p| p.contains(Boots));
    b.location(z(19), "Graveyard Ledge", HeartPiece)
        .access(|lg, p| {
            p.contains(Mirror) && p.contains(MoonPearl) && lg.can_enter(DarkWorldNorthWest, p, true)
        })
        .relevance(|lg, p| {
            p.contains(Mirror) && p.contains(MoonPearl) && lg.can_enter(DarkWorldNorthWest, p, false)
        });
    b.location(z(20), "King's Tomb", Cape)
        .access(|lg, p| {
            p.contains(Boots)
                && (can_lift_heavy(p)
                    || (p.contains(Mirror)
                        && p.contains(MoonPearl)
                        && lg.can_enter(DarkWorldNorthWest, p, true)))
        })
        .relevance(|lg, p| {
            p.contains(Boots)
                && (can_lift_heavy(p)
                    || (p.contains(Mirror)
                        && p.contains(MoonPearl)
                        && lg.can_enter(DarkWorldNorthWest, p, false)))
        });
    b.location(z(31), "Bottle Merchant", Bottle)
        .weighted(KAKARIKO);
    b.location(z(250), "Chicken House", TenArrows)
        .weighted(KAKARIKO);
    b.location(z(33), "Sick Kid", Bugnet)
        .access(|_, p| p.bottle());
    b.location(z(34), "Kakariko Tavern", Bottle)
        .weighted(KAKARIKO);
    b.location(z(76), "Blacksmith", ProgressiveSword)
        .access(|lg, p| lg.can_enter(DarkWorldNorthWest, p, true) && can_lift_heavy(p))
        .relevance(|lg, p| lg.can_enter(DarkWorldNorthWest, p, false) && can_lift_heavy(p));
    b.location(z(35), "Magic Bat", HalfMagic).access(|_, p| {
        p.contains(Powder)
            && (p.contains(Hammer)
                || (p.contains(MoonPearl) && p.contains(Mirror) && can_lift_heavy(p)))
    });

    b.room("Kakariko Well");
    for (id, name, vanilla) in [
        (z(21), "Top", HeartPiece),
        (z(22), "Left", TwentyRupees),
        (z(23), "Middle", TwentyRupees),
        (z(24), "Right", TwentyRupees),
        (z(25), "Bottom", ThreeBombs),
    ] {
        b.location(id, name, vanilla).weighted(KAKARIKO);
    }
    b.room("Blind's Hideout");
    for (id, name) in [
        (z(26), "Top"),
        (z(27), "Far Left"),
        (z(28), "Left"),
        (z(29), "Right"),
        (z(30), "Far Right"),
    ] {
        b.location(id, name, Nothing).weighted(KAKARIKO);
    }
    b.end_room();
}

pub fn north_east(b: &mut RegionBuilder<'_>) {
    b.overworld();

    b.location(z(40), "Potion Shop", Powder)
        .access(|_, p| p.contains(Mushroom));

    b.room("Sahasrahla's Hut");
    for (id, name, vanilla) in [
        (z(41), "Left", FiftyRupees),
        (z(42), "Middle", ThreeBombs),
        (z(43), "Right", FiftyRupees),
    ] {
        b.location(id, name, vanilla).weighted(SPHERE_ONE);
    }
    b.location(z(44), "Sahasrahla", Boots)
        .access(|_, p| p.green_pendant())
        .relevance(|lg, p| lg.can_aquire(p, RewardType::PendantGreen));

    b.room("Waterfall Fairy");
    for (id, name) in [(z(254), "Left"), (z(39), "Right")] {
        b.location(id, name, Nothing).access(|lg, p| {
            p.contains(Flippers) || can_hyrule_south_fake_flippers(p, lg.cfg(), true)
        });
    }

    b.room("Zora's Domain");
    b.location(z(36), "King Zora", Flippers).access(|lg, p| {
        (can_lift_light(p) || p.contains(Flippers))
            && (!lg.cfg().zora_needs_rupee_items || p.rupees() >= 500)
    });
    b.location(z(37), "Zora's Ledge", HeartPiece)
        .access(|_, p| p.contains(Flippers));
    b.end_room();
}

pub fn south(b: &mut RegionBuilder<'_>) {
    use RegionKind::{DarkWorldNorthEast, DarkWorldSouth, DesertPalace};

    b.overworld();

    b.location(z(45), "Maze Race", HeartPiece)
        .weighted(SPHERE_ONE);
    b.location(z(240), "Library", Book)
        .access(|_, p| p.contains(Boots));
    b.location(z(241), "Flute Spot", Flute)
        .access(|_, p| p.contains(Shovel));
    b.location(z(242), "South of Grove", HeartPiece)
        .access(|lg, p| p.contains(Mirror) && lg.can_enter(DarkWorldSouth, p, true))
        .relevance(|lg, p| p.contains(Mirror) && lg.can_enter(DarkWorldSouth, p, false));
    b.location(z(243), "Link's House", Lamp)
        .weighted(SPHERE_ONE);
    b.location(z(244), "Aginah's Cave", HeartPiece)
        .weighted(SPHERE_ONE);
    b.location(z(252), "Desert Ledge", HeartPiece)
        .access(|lg, p| lg.can_enter(DesertPalace, p, true));
    b.location(z(253), "Checkerboard Cave", HeartPiece)
        .access(|lg, p| {
            p.contains(Mirror)
                && ((p.contains(Flute) && can_lift_heavy(p))
                    || can_access_misery_mire_portal(p, lg.cfg()))
                && can_lift_light(p)
        });
    b.location(z(58), "Bombos Tablet", Bombos)
        .kind(LocationKind::Bombos)
        .access(|lg, p| {
            p.contains(Book)
                && p.master_sword()
                && p.contains(Mirror)
                && lg.can_enter(DarkWorldSouth, p, true)
        })
        .relevance(|lg, p| {
            p.contains(Book)
                && p.master_sword()
                && p.contains(Mirror)
                && lg.can_enter(DarkWorldSouth, p, false)
        });
    b.location(z(61), "Lake Hylia Island", HeartPiece)
        .access(|lg, p| {
            p.contains(Flippers)
                && p.contains(MoonPearl)
                && p.contains(Mirror)
                && (lg.can_enter(DarkWorldSouth, p, true) || lg.can_enter(DarkWorldNorthEast, p, true))
        })
        .relevance(|lg, p| {
            p.contains(Flippers)
                && p.contains(MoonPearl)
                && p.contains(Mirror)
                && (lg.can_enter(DarkWorldSouth, p, false)
                    || lg.can_enter(DarkWorldNorthEast, p, false))
        });
    b.location(z(62), "Hobo", Bottle).access(|lg, p| {
        p.contains(Flippers) || can_hyrule_south_fake_flippers(p, lg.cfg(), false)
    });
    b.location(z(63), "Ice Rod Cave", Icerod)
        .weighted(SPHERE_ONE);

    b.room("Mini Moldorm Cave");
    for (id, name, vanilla) in [
        (z(51), "Far Left", ThreeBombs),
        (z(52), "Left", TwentyRupees),
        (z(53), "NPC", ThreeHundredRupees),
        (z(54), "Right", TwentyRupees),
        (z(251), "Far Right", TenArrows),
    ] {
        b.location(id, name, vanilla).weighted(SPHERE_ONE);
    }
    b.room("Swamp Ruins");
    b.location(z(59), "Floodgate Chest", ThreeBombs)
        .weighted(SPHERE_ONE);
    b.location(z(60), "Sunken Treasure", HeartPiece)
        .weighted(SPHERE_ONE);
    b.end_room();
}
