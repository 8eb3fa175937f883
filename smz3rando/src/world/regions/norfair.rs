use smz3rando_game::ItemType::*;
use smz3rando_game::{BossType, RewardType};
use smz3rando_logic::helpers::{
    can_access_norfair_lower_portal, can_access_norfair_upper_portal, can_destroy_bomb_walls,
    can_fly, can_move_at_high_speeds, can_open_red_doors, can_pass_bomb_passages,
    can_use_power_bombs, can_wall_jump, has_energy_reserves,
};
use smz3rando_logic::WallJumpDifficulty::{self, Easy, Hard, Insane, Medium};
use smz3rando_logic::Progression;

use super::keycard_or;
use crate::world::location::LocationKind;
use crate::world::logic::Logic;
use crate::world::region::{RegionBuilder, RegionKind};

fn jump(lg: &Logic<'_>, difficulty: WallJumpDifficulty) -> bool {
    can_wall_jump(lg.cfg(), difficulty)
}

/// Through the Kraid's Lair hallway or in from the Zelda side portal.
fn can_reach_upper_norfair(lg: &Logic<'_>, p: &Progression) -> bool {
    ((can_destroy_bomb_walls(p, lg.cfg()) || p.contains(SpeedBooster))
        && p.contains(Super)
        && p.contains(Morph))
        || can_access_norfair_upper_portal(p)
}

fn can_climb_cathedral(lg: &Logic<'_>, p: &Progression) -> bool {
    can_open_red_doors(p)
        && keycard_or(lg, p, CardNorfairL2, p.contains(Super))
        && (can_fly(p, lg.cfg()) || p.contains(HiJump) || p.contains(SpeedBooster))
}

pub fn upper_west(b: &mut RegionBuilder<'_>) {
    b.can_enter(|lg, p, _| can_reach_upper_norfair(lg, p));

    b.room("Cathedral");
    b.location(49, "Missile (lava room)", Missile)
        .kind(LocationKind::Hidden)
        .access(|lg, p| {
            p.contains(Varia)
                && ((can_open_red_doors(p)
                    && (can_fly(p, lg.cfg()) || p.contains(HiJump) || p.contains(SpeedBooster)))
                    || (lg.can_enter(RegionKind::UpperNorfairEast, p, true)
                        && p.contains(CardNorfairL2)))
                && p.contains(Morph)
        });

    b.room("Ice Beam Room");
    b.location(50, "Ice Beam", Ice)
        .kind(LocationKind::Chozo)
        .access(|lg, p| {
            let cfg = lg.cfg();
            keycard_or(lg, p, CardNorfairL1, p.contains(Super))
                && can_pass_bomb_passages(p, cfg)
                && p.contains(Varia)
                && can_move_at_high_speeds(p, cfg)
        });

    b.room("Crumble Shaft Room");
    b.location(51, "Missile (below Ice Beam)", Missile)
        .kind(LocationKind::Hidden)
        .access(|lg, p| {
            let cfg = lg.cfg();
            keycard_or(lg, p, CardNorfairL1, p.contains(Super))
                && can_use_power_bombs(p, cfg)
                && p.contains(Varia)
                && can_move_at_high_speeds(p, cfg)
                && (jump(lg, Easy) || can_fly(p, cfg))
        });

    b.room("Hi-Jump Boots Room");
    b.location(53, "Hi-Jump Boots", HiJump)
        .kind(LocationKind::Chozo)
        .access(|lg, p| can_open_red_doors(p) && can_pass_bomb_passages(p, lg.cfg()));

    b.room("Hi-Jump Energy Tank Room");
    b.location(55, "Missile (Hi-Jump Boots)", Missile)
        .kind(LocationKind::Visible)
        .access(|_, p| can_open_red_doors(p) && p.contains(Morph));
    b.location(56, "Energy Tank (Hi-Jump Boots)", ETank)
        .kind(LocationKind::Visible)
        .access(|_, p| can_open_red_doors(p));
    b.end_room();
}

fn can_reach_bubble_mountain_left(lg: &Logic<'_>, p: &Progression) -> bool {
    can_fly(p, lg.cfg())
        || (p.contains(Grapple)
            && p.contains(Morph)
            && (p.contains(SpeedBooster) || can_pass_bomb_passages(p, lg.cfg())))
        || (p.contains(HiJump) && jump(lg, Easy))
        || (p.contains(Ice) && p.contains(HiJump))
        || jump(lg, Insane)
        || (jump(lg, Hard) && p.contains(Grapple))
}

fn can_reach_bubble_mountain_right(lg: &Logic<'_>, p: &Progression) -> bool {
    can_fly(p, lg.cfg())
        || (p.contains(Morph)
            && (p.contains(SpeedBooster) || can_pass_bomb_passages(p, lg.cfg())))
        || (p.contains(HiJump) && jump(lg, Easy))
        || (p.contains(Ice) && p.contains(HiJump))
        || jump(lg, Hard)
}

fn can_reach_speed_booster_hall(lg: &Logic<'_>, p: &Progression) -> bool {
    p.contains(CardNorfairL2)
        && can_reach_bubble_mountain_right(lg, p)
        && (jump(lg, Easy) || p.contains(HiJump))
}

fn can_reach_wave_beam(lg: &Logic<'_>, p: &Progression) -> bool {
    (p.contains(CardNorfairL2) && can_reach_bubble_mountain_right(lg, p))
        || (p.contains(SpeedBooster) && p.contains(Wave) && p.contains(Morph) && p.contains(Super))
}

pub fn upper_east(b: &mut RegionBuilder<'_>) {
    b.can_enter(|lg, p, _| {
        can_reach_upper_norfair(lg, p)
            && p.contains(Varia)
            && p.contains(Super)
            && (can_climb_cathedral(lg, p)
                // Frog Speedway
                || (p.contains(SpeedBooster)
                    && (p.contains(CardNorfairL2) || p.contains(Wave))
                    && can_use_power_bombs(p, lg.cfg())))
    });

    b.location(63, "Missile (bubble Norfair green door)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| p.contains(CardNorfairL2) && can_reach_bubble_mountain_left(lg, p));
    b.location(64, "Missile (bubble Norfair)", Missile)
        .kind(LocationKind::Visible)
        .access(|_, p| p.contains(CardNorfairL2));
    b.location(65, "Missile (Speed Booster)", Missile)
        .kind(LocationKind::Hidden)
        .access(can_reach_speed_booster_hall);
    b.location(66, "Speed Booster", SpeedBooster)
        .kind(LocationKind::Chozo)
        .access(can_reach_speed_booster_hall);
    b.location(67, "Missile (Wave Beam)", Missile)
        .kind(LocationKind::Visible)
        .access(can_reach_wave_beam);
    b.location(68, "Wave Beam", Wave)
        .kind(LocationKind::Chozo)
        .access(|lg, p| p.contains(Morph) && can_reach_wave_beam(lg, p));

    b.room("Bubble Mountain Hidden Hall");
    b.location(61, "Main Item", ReserveTank)
        .kind(LocationKind::Chozo)
        .access(|lg, p| {
            p.contains(CardNorfairL2) && p.contains(Morph) && can_reach_bubble_mountain_left(lg, p)
        });
    b.location(62, "Hidden Item", Missile)
        .kind(LocationKind::Hidden)
        .access(|lg, p| {
            p.contains(CardNorfairL2) && p.contains(Morph) && can_reach_bubble_mountain_left(lg, p)
        });
    b.end_room();
}

fn can_access_crocomire(lg: &Logic<'_>, p: &Progression) -> bool {
    keycard_or(lg, p, CardNorfairBoss, p.contains(Super))
        && (p.contains(HiJump)
            || p.contains(SpeedBooster)
            || can_fly(p, lg.cfg())
            || jump(lg, Easy))
}

fn can_reach_grapple_area(lg: &Logic<'_>, p: &Progression) -> bool {
    let cfg = lg.cfg();
    can_access_crocomire(lg, p)
        && p.contains(Morph)
        && (can_fly(p, cfg) || (p.contains(SpeedBooster) && can_use_power_bombs(p, cfg)))
        && (can_fly(p, cfg) || jump(lg, Medium) || (p.contains(HiJump) && p.contains(Grapple)))
}

pub fn upper_crocomire(b: &mut RegionBuilder<'_>) {
    b.can_enter(|lg, p, _| {
        let cfg = lg.cfg();
        can_reach_upper_norfair(lg, p)
            && p.contains(Varia)
            // Ice Beam to Croc Speedway
            && ((keycard_or(lg, p, CardNorfairL1, p.contains(Super))
                && can_use_power_bombs(p, cfg)
                && p.contains(SpeedBooster))
                // Frog Speedway
                || (p.contains(SpeedBooster) && p.contains(Wave))
                // Cathedral, then through the floor or the volcano
                || (can_climb_cathedral(lg, p)
                    && (can_pass_bomb_passages(p, cfg) || (p.contains(Gravity) && p.contains(Morph)))
                    && p.contains(Wave))
                // Reverse lava dive
                || (can_access_norfair_lower_portal(p)
                    && p.contains(ScrewAttack)
                    && p.contains(SpaceJump)
                    && p.contains(Super)
                    && p.contains(Gravity)
                    && p.contains(Wave)
                    && (p.contains(CardNorfairL2) || p.contains(Morph))))
    });

    b.room("Crocomire's Room");
    b.location(52, "Energy Tank, Crocomire", ETank)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            can_access_crocomire(lg, p)
                && ((has_energy_reserves(p, 1) && jump(lg, Easy))
                    || p.contains(SpaceJump)
                    || p.contains(Grapple))
        });

    b.room("Crocomire Escape");
    b.location(54, "Missile (above Crocomire)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            can_fly(p, lg.cfg())
                || p.contains(Grapple)
                || (p.contains(HiJump) && p.contains(SpeedBooster) && jump(lg, Hard))
        });

    b.room("Post Crocomire Power Bomb Room");
    b.location(57, "Power Bomb (Crocomire)", PowerBomb)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            can_access_crocomire(lg, p)
                && (can_fly(p, lg.cfg()) || p.contains(HiJump) || p.contains(Grapple))
        });

    b.room("Post Crocomire Missile Room");
    b.location(58, "Missile (below Crocomire)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            let cfg = lg.cfg();
            can_access_crocomire(lg, p)
                && p.contains(Morph)
                && (can_fly(p, cfg)
                    || jump(lg, Medium)
                    || (p.contains(SpeedBooster)
                        && can_use_power_bombs(p, cfg)
                        && p.contains(HiJump)
                        && p.contains(Grapple)))
        });

    b.room("Post Crocomire Jump Room");
    b.location(59, "Missile (Grappling Beam)", Missile)
        .kind(LocationKind::Visible)
        .access(can_reach_grapple_area);

    b.room("Grapple Beam Room");
    b.location(60, "Grappling Beam", Grapple)
        .kind(LocationKind::Chozo)
        .access(can_reach_grapple_area);
    b.end_room();
}

fn can_climb_out_of_lower_norfair(lg: &Logic<'_>, p: &Progression) -> bool {
    jump(lg, Insane) || (p.contains(HiJump) && jump(lg, Hard)) || can_fly(p, lg.cfg())
}

pub fn lower_west(b: &mut RegionBuilder<'_>) {
    b.can_enter(|lg, p, _| {
        let cfg = lg.cfg();
        p.contains(Varia)
            && ((lg.can_enter(RegionKind::UpperNorfairEast, p, true)
                && can_use_power_bombs(p, cfg)
                && can_fly(p, cfg)
                && p.contains(Gravity)
                // Bubble Mountain, or Frog Speedway to the farming room gate
                && (p.contains(CardNorfairL2) || (p.contains(SpeedBooster) && p.contains(Wave))))
                || (can_access_norfair_lower_portal(p) && can_destroy_bomb_walls(p, cfg)))
    });

    b.location(70, "Missile (Gold Torizo)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            can_use_power_bombs(p, lg.cfg()) && p.contains(SpaceJump) && p.contains(Super)
        });
    b.location(71, "Super Missile (Gold Torizo)", Super)
        .kind(LocationKind::Hidden)
        .access(|lg, p| {
            let cfg = lg.cfg();
            can_destroy_bomb_walls(p, cfg)
                && (p.contains(Super) || p.contains(Charge))
                && (jump(lg, Easy) || can_fly(p, cfg))
                && (can_access_norfair_lower_portal(p)
                    || (p.contains(SpaceJump) && can_use_power_bombs(p, cfg)))
        });
    b.location(79, "Screw Attack", ScrewAttack)
        .kind(LocationKind::Chozo)
        .access(|lg, p| {
            let cfg = lg.cfg();
            (can_destroy_bomb_walls(p, cfg) || p.contains(ScrewAttack))
                && ((p.contains(SpaceJump) && can_use_power_bombs(p, cfg))
                    || can_access_norfair_lower_portal(p))
        });
    b.location(73, "Missile (Mickey Mouse room)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            p.contains(Morph)
                && p.contains(Super)
                && can_climb_out_of_lower_norfair(lg, p)
                // Back to Upper Norfair, by lava dive, the volcano, or the Golden Torizo and portal
                && (((p.contains(CardLowerNorfairL1) || p.contains(Gravity))
                    && p.contains(CardNorfairL2))
                    || (p.contains(Gravity)
                        && p.contains(Wave)
                        && (p.contains(Grapple) || p.contains(SpaceJump)))
                    || (can_use_power_bombs(p, lg.cfg())
                        && p.contains(SpaceJump)
                        && (p.contains(Super) || p.contains(Charge))))
        });
}

fn can_exit_lower_norfair_east(p: &Progression) -> bool {
    p.contains(CardNorfairL2)
        || (p.contains(Gravity)
            && p.contains(Wave)
            && (p.contains(Grapple) || p.contains(SpaceJump)))
}

fn can_beat_ridley(lg: &Logic<'_>, p: &Progression) -> bool {
    lg.can_enter(RegionKind::LowerNorfairEast, p, true)
        && can_exit_lower_norfair_east(p)
        && p.contains(CardLowerNorfairBoss)
        && can_use_power_bombs(p, lg.cfg())
        && p.contains(Super)
}

pub fn lower_east(b: &mut RegionBuilder<'_>) {
    b.fixed_reward(RewardType::MetroidBoss)
        .boss(BossType::Ridley)
        .can_enter(|lg, p, req| {
            let cfg = lg.cfg();
            p.contains(Varia)
                && p.contains(CardLowerNorfairL1)
                && ((lg.can_enter(RegionKind::UpperNorfairEast, p, req)
                    && can_use_power_bombs(p, cfg)
                    && can_fly(p, cfg)
                    && p.contains(Gravity))
                    || (can_access_norfair_lower_portal(p)
                        && can_destroy_bomb_walls(p, cfg)
                        && p.contains(Super)
                        && can_use_power_bombs(p, cfg)
                        && can_climb_out_of_lower_norfair(lg, p)))
        })
        .can_complete(can_beat_ridley);

    b.location(74, "Missile (lower Norfair above fire flea room)", Missile)
        .kind(LocationKind::Visible)
        .access(|_, p| can_exit_lower_norfair_east(p));
    b.location(75, "Power Bomb (lower Norfair above fire flea room)", PowerBomb)
        .kind(LocationKind::Visible)
        .access(|_, p| can_exit_lower_norfair_east(p));
    b.location(76, "Power Bomb (Power Bombs of shame)", PowerBomb)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_exit_lower_norfair_east(p) && can_use_power_bombs(p, lg.cfg()));
    b.location(77, "Missile (lower Norfair near Wave Beam)", Missile)
        .kind(LocationKind::Visible)
        .access(|_, p| can_exit_lower_norfair_east(p));
    b.location(78, "Energy Tank, Ridley", ETank)
        .kind(LocationKind::Hidden)
        .access(|_, p| p.ridley())
        .relevance(can_beat_ridley);
    b.location(80, "Energy Tank, Firefleas", ETank)
        .kind(LocationKind::Visible)
        .access(|_, p| can_exit_lower_norfair_east(p));
}
