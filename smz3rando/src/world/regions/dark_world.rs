use smz3rando_game::ItemType::*;
use smz3rando_game::RewardType;
use smz3rando_logic::helpers::{
    can_access_dark_world_portal, can_access_misery_mire_portal, can_extend_magic, can_lift_heavy,
    can_lift_light,
};
use smz3rando_logic::Progression;

use super::z;
use crate::world::logic::Logic;
use crate::world::region::{RegionBuilder, RegionKind};

pub fn death_mountain_west(b: &mut RegionBuilder<'_>) {
    b.overworld();

    b.location(z(64), "Spike Cave", Byrna).access(|lg, p| {
        p.contains(MoonPearl)
            && p.contains(Hammer)
            && can_lift_light(p)
            && ((can_extend_magic(p, 2) && p.contains(Cape)) || p.contains(Byrna))
            && lg.can_enter(RegionKind::LightWorldDeathMountainWest, p, true)
    });
}

pub fn death_mountain_east(b: &mut RegionBuilder<'_>) {
    b.overworld().can_enter(|lg, p, req| {
        can_lift_heavy(p) && lg.can_enter(RegionKind::LightWorldDeathMountainEast, p, req)
    });

    b.room("Hookshot Cave");
    for (id, name) in [
        (z(65), "Hookshot Cave - Top Right"),
        (z(66), "Hookshot Cave - Top Left"),
        (z(67), "Hookshot Cave - Bottom Left"),
    ] {
        b.location(id, name, FiftyRupees)
            .access(|_, p| p.contains(MoonPearl) && p.contains(Hookshot));
    }
    b.location(z(68), "Hookshot Cave - Bottom Right", FiftyRupees)
        .access(|_, p| p.contains(MoonPearl) && (p.contains(Hookshot) || p.contains(Boots)));

    b.room("Superbunny Cave");
    for (id, name) in [(z(69), "Superbunny Cave - Top"), (z(70), "Superbunny Cave - Bottom")] {
        b.location(id, name, Nothing)
            .access(|_, p| p.contains(MoonPearl));
    }
    b.end_room();
}

pub fn north_west(b: &mut RegionBuilder<'_>) {
    b.overworld().can_enter(|lg, p, req| {
        p.contains(MoonPearl)
            && (((lg.check_agahnim(p, req)
                || (can_access_dark_world_portal(p, lg.cfg()) && p.contains(Flippers)))
                && p.contains(Hookshot)
                && (p.contains(Flippers) || can_lift_light(p) || p.contains(Hammer)))
                || (p.contains(Hammer) && can_lift_light(p))
                || can_lift_heavy(p))
    });

    b.location(z(71), "Bumper Cave", HeartPiece)
        .access(|_, p| can_lift_light(p) && p.contains(Cape));
    b.location(z(72), "Chest Game", HeartPiece);
    b.location(z(73), "C-Shaped House", ThreeHundredRupees);
    b.location(z(74), "Brewery", ThreeHundredRupees);
    b.location(z(75), "Hammer Pegs", HeartPiece)
        .access(|_, p| can_lift_heavy(p) && p.contains(Hammer));
    b.location(z(77), "Purple Chest", Bottle)
        .access(|_, p| can_lift_heavy(p));
}

fn can_access_pyramid_fairy(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    (p.both_red_crystals()
        || (!require_rewards && lg.can_aquire_all(p, &[RewardType::CrystalRed])))
        && p.contains(MoonPearl)
        && lg.can_enter(RegionKind::DarkWorldSouth, p, require_rewards)
        && (p.contains(Hammer) || (p.contains(Mirror) && lg.check_agahnim(p, require_rewards)))
}

pub fn north_east(b: &mut RegionBuilder<'_>) {
    b.overworld().can_enter(|lg, p, req| {
        lg.check_agahnim(p, req)
            || (p.contains(MoonPearl)
                && ((p.contains(Hammer) && can_lift_light(p))
                    || (can_lift_heavy(p) && p.contains(Flippers))
                    || (can_access_dark_world_portal(p, lg.cfg()) && p.contains(Flippers))))
    });

    b.location(z(78), "Catfish", Quake)
        .access(|_, p| p.contains(MoonPearl) && can_lift_light(p));
    b.location(z(79), "Pyramid", HeartPiece);

    b.room("Pyramid Fairy");
    for (id, name, vanilla) in [(z(80), "Left", ProgressiveSword), (z(81), "Right", SilverArrows)] {
        b.location(id, name, vanilla)
            .access(|lg, p| can_access_pyramid_fairy(lg, p, true))
            .relevance(|lg, p| can_access_pyramid_fairy(lg, p, false));
    }
    b.end_room();
}

pub fn south(b: &mut RegionBuilder<'_>) {
    b.overworld().can_enter(|lg, p, req| {
        p.contains(MoonPearl)
            && (((lg.check_agahnim(p, req)
                || (can_access_dark_world_portal(p, lg.cfg()) && p.contains(Flippers)))
                && (p.contains(Hammer)
                    || (p.contains(Hookshot) && (p.contains(Flippers) || can_lift_light(p)))))
                || (p.contains(Hammer) && can_lift_light(p))
                || can_lift_heavy(p))
    });

    b.location(z(82), "Digging Game", HeartPiece);
    b.location(z(83), "Stumpy", Shovel);

    b.room("Hype Cave");
    for (id, name, vanilla) in [
        (z(84), "Top", TwentyRupees),
        (z(85), "Middle Right", TwentyRupees),
        (z(86), "Middle Left", TwentyRupees),
        (z(87), "Bottom", TwentyRupees),
        (z(88), "NPC", ThreeHundredRupees),
    ] {
        b.location(id, name, vanilla);
    }
    b.end_room();
}

pub fn mire(b: &mut RegionBuilder<'_>) {
    b.overworld().can_enter(|lg, p, _| {
        (p.contains(Flute) && can_lift_heavy(p)) || can_access_misery_mire_portal(p, lg.cfg())
    });

    for (id, name, vanilla) in [
        (z(89), "Mire Shed - Left", HeartPiece),
        (z(90), "Mire Shed - Right", TwentyRupees),
    ] {
        b.location(id, name, vanilla)
            .access(|_, p| p.contains(MoonPearl));
    }
}
