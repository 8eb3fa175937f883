use smz3rando_game::ItemType::*;
use smz3rando_logic::helpers::{
    can_access_norfair_upper_portal, can_destroy_bomb_walls, can_fly, can_ibj, can_open_red_doors,
    can_parlor_speed_boost, can_pass_bomb_passages, can_safely_use_screw_attack,
    can_use_power_bombs, can_wall_jump, has_energy_reserves,
};
use smz3rando_logic::{Progression, WallJumpDifficulty};

use super::{can_access_shut_down_rooms, keycard_or};
use crate::world::location::LocationKind;
use crate::world::logic::Logic;
use crate::world::region::{RegionBuilder, RegionKind};

pub fn central(b: &mut RegionBuilder<'_>) {
    b.room("Crateria Power Bomb Room");
    b.location(0, "Power Bomb (Crateria surface)", PowerBomb)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            let cfg = lg.cfg();
            keycard_or(lg, p, CardCrateriaL1, can_use_power_bombs(p, cfg))
                && (p.contains(SpeedBooster) || can_fly(p, cfg))
        });

    b.room("The Final Missile Room");
    b.location(12, "Missile (Crateria middle)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_pass_bomb_passages(p, lg.cfg()));

    b.room("Pit Room");
    b.location(6, "Missile (Crateria bottom)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_destroy_bomb_walls(p, lg.cfg()));

    b.room("Crateria Super Room");
    b.location(11, "Super Missile (Crateria)", Super)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            can_use_power_bombs(p, lg.cfg())
                && has_energy_reserves(p, 2)
                && p.contains(SpeedBooster)
                && (!lg.cfg().launch_pad_requires_ice_beam || p.contains(Ice))
        });

    b.room("Bomb Torizo Room");
    b.location(7, "Bombs", Bombs)
        .kind(LocationKind::Chozo)
        .access(|lg, p| {
            let cfg = lg.cfg();
            keycard_or(lg, p, CardCrateriaBoss, can_open_red_doors(p))
                && (can_pass_bomb_passages(p, cfg)
                    || can_wall_jump(cfg, WallJumpDifficulty::Hard))
        });
    b.end_room();
}

fn can_enter_and_leave_gauntlet(lg: &Logic<'_>, p: &Progression) -> bool {
    let cfg = lg.cfg();
    p.contains(CardCrateriaL1)
        && p.contains(Morph)
        && (can_fly(p, cfg) || p.contains(SpeedBooster) || can_wall_jump(cfg, WallJumpDifficulty::Hard))
        && (can_ibj(p, cfg)
            || (can_use_power_bombs(p, cfg) && p.two_power_bombs())
            || can_safely_use_screw_attack(p, cfg))
}

pub fn west(b: &mut RegionBuilder<'_>) {
    b.can_enter(|lg, p, _| {
        can_destroy_bomb_walls(p, lg.cfg()) || can_parlor_speed_boost(p, lg.cfg())
    });

    b.room("Gauntlet Shaft");
    for (id, name) in [(9, "Right"), (10, "Left")] {
        b.location(id, name, Missile)
            .kind(LocationKind::Visible)
            .access(|lg, p| {
                can_enter_and_leave_gauntlet(lg, p)
                    && can_pass_bomb_passages(p, lg.cfg())
                    && has_energy_reserves(p, 2)
            });
    }

    b.room("Gauntlet Energy Tank Room");
    b.location(5, "Energy Tank, Gauntlet", ETank)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_enter_and_leave_gauntlet(lg, p) && has_energy_reserves(p, 1));

    b.room("Terminator Room");
    b.location(8, "Energy Tank, Terminator", ETank)
        .kind(LocationKind::Visible);
    b.end_room();
}

fn can_access_flooded_cavern(lg: &Logic<'_>, p: &Progression) -> bool {
    p.contains(Morph)
        && (p.contains(SpeedBooster)
            || p.contains(Grapple)
            || p.contains(SpaceJump)
            || (p.contains(Gravity) && (can_ibj(p, lg.cfg()) || p.contains(HiJump)))
            || lg.can_enter(RegionKind::WreckedShip, p, true))
}

fn can_pass_through_wrecked_ship(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    lg.can_enter(RegionKind::WreckedShip, p, require_rewards)
        && can_access_shut_down_rooms(lg, p, require_rewards)
}

fn can_access_sky_item(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    can_pass_through_wrecked_ship(lg, p, require_rewards)
        && (p.contains(SpaceJump)
            || p.contains(SpeedBooster)
            || !lg.cfg().easy_east_crateria_sky_item)
}

pub fn east(b: &mut RegionBuilder<'_>) {
    b.can_enter(|lg, p, req| {
        let cfg = lg.cfg();
        let moat_door = keycard_or(lg, p, CardCrateriaL2, can_use_power_bombs(p, cfg));
        // Ship to moat
        (moat_door && p.contains(Super))
            // Upper Norfair portal through Red Tower
            || (moat_door
                && can_access_norfair_upper_portal(p)
                && (p.contains(Ice) || p.contains(HiJump) || p.contains(SpaceJump)))
            // Maridia portal to Forgotten Highway, via Oasis or past Draygon
            || (lg.can_access_maridia_portal(p, req)
                && p.contains(Gravity)
                && p.contains(Super)
                && ((p.contains(CardMaridiaL2) && can_destroy_bomb_walls(p, cfg))
                    || lg.is_available_by_id(154, p)))
            // Maridia from the pipe
            || (can_use_power_bombs(p, cfg) && p.contains(Super) && p.contains(Gravity))
    });

    b.location(1, "Missile (outside Wrecked Ship bottom)", Missile)
        .kind(LocationKind::Visible)
        .access(can_access_flooded_cavern);
    b.location(2, "Missile (outside Wrecked Ship top)", Missile)
        .kind(LocationKind::Hidden)
        .access(|lg, p| can_access_sky_item(lg, p, true))
        .relevance(|lg, p| can_access_sky_item(lg, p, false));
    b.location(3, "Missile (outside Wrecked Ship middle)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_pass_through_wrecked_ship(lg, p, true))
        .relevance(|lg, p| can_pass_through_wrecked_ship(lg, p, false));
    b.location(4, "Missile (Crateria moat)", Missile)
        .kind(LocationKind::Visible);
}
