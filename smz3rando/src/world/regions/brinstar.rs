use smz3rando_game::ItemType::*;
use smz3rando_game::{BossType, RewardType};
use smz3rando_logic::helpers::{
    can_access_norfair_upper_portal, can_destroy_bomb_walls, can_fly, can_move_at_high_speeds,
    can_open_red_doors, can_parlor_speed_boost, can_pass_bomb_passages, can_use_power_bombs,
    can_wall_jump, has_energy_reserves,
};
use smz3rando_logic::{Progression, WallJumpDifficulty};

use crate::world::location::LocationKind;
use crate::world::logic::Logic;
use crate::world::region::{RegionBuilder, RegionKind};

fn can_climb_easy(lg: &Logic<'_>, p: &Progression) -> bool {
    can_wall_jump(lg.cfg(), WallJumpDifficulty::Easy) || can_fly(p, lg.cfg())
}

fn can_reach_blue_brinstar_top(lg: &Logic<'_>, p: &Progression) -> bool {
    let cfg = lg.cfg();
    p.contains(CardBrinstarL1)
        && can_use_power_bombs(p, cfg)
        && (can_wall_jump(cfg, WallJumpDifficulty::Medium)
            || p.contains(SpaceJump)
            || p.contains(SpeedBooster))
        && (!cfg.easy_blue_brinstar_top || p.contains(Gravity) || p.contains(SpaceJump))
}

pub fn blue(b: &mut RegionBuilder<'_>) {
    b.location(26, "Morphing Ball", Morph).kind(LocationKind::Visible);
    b.location(27, "Power Bomb (blue Brinstar)", PowerBomb)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_use_power_bombs(p, lg.cfg()));
    b.location(28, "Missile (blue Brinstar middle)", Missile)
        .kind(LocationKind::Visible)
        .access(|_, p| p.contains(CardBrinstarL1) && p.contains(Morph));
    b.location(29, "Energy Tank, Brinstar Ceiling", ETank)
        .kind(LocationKind::Hidden)
        .access(|lg, p| {
            p.contains(CardBrinstarL1)
                && (can_fly(p, lg.cfg())
                    || p.contains(HiJump)
                    || p.contains(SpeedBooster)
                    || p.contains(Ice))
        });
    b.location(34, "Missile (blue Brinstar bottom)", Missile)
        .kind(LocationKind::Chozo)
        .access(|_, p| p.contains(Morph));

    b.room("Blue Brinstar Top");
    b.location(36, "Main Item", Missile)
        .kind(LocationKind::Visible)
        .access(can_reach_blue_brinstar_top);
    b.location(37, "Hidden Item", Missile)
        .kind(LocationKind::Hidden)
        .access(can_reach_blue_brinstar_top);
    b.end_room();
}

fn can_reach_etecoons(lg: &Logic<'_>, p: &Progression) -> bool {
    p.contains(CardBrinstarL2) && can_use_power_bombs(p, lg.cfg()) && can_climb_easy(lg, p)
}

pub fn green(b: &mut RegionBuilder<'_>) {
    b.weight(-6).can_enter(|lg, p, _| {
        can_destroy_bomb_walls(p, lg.cfg()) || can_parlor_speed_boost(p, lg.cfg())
    });

    b.location(13, "Power Bomb (green Brinstar bottom)", PowerBomb)
        .kind(LocationKind::Chozo)
        .access(can_reach_etecoons);
    b.location(15, "Missile (green Brinstar below super missile)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_pass_bomb_passages(p, lg.cfg()) && can_open_red_doors(p));
    b.location(16, "Super Missile (green Brinstar top)", Super)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_open_red_doors(p) && can_move_at_high_speeds(p, lg.cfg()));
    b.location(17, "Reserve Tank, Brinstar", ReserveTank)
        .kind(LocationKind::Chozo)
        .access(|lg, p| can_open_red_doors(p) && can_move_at_high_speeds(p, lg.cfg()));
    b.location(30, "Energy Tank, Etecoons", ETank)
        .kind(LocationKind::Visible)
        .access(can_reach_etecoons);
    b.location(31, "Super Missile (green Brinstar bottom)", Super)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_reach_etecoons(lg, p) && p.contains(Super));

    b.room("Mockball Hall Hidden Room");
    b.location(18, "Hidden Item", Missile)
        .kind(LocationKind::Hidden)
        .access(|lg, p| {
            let cfg = lg.cfg();
            can_move_at_high_speeds(p, cfg) && can_pass_bomb_passages(p, cfg) && can_open_red_doors(p)
        });
    b.location(19, "Main Item", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            can_move_at_high_speeds(p, lg.cfg()) && can_open_red_doors(p) && p.contains(Morph)
        });
    b.end_room();
}

fn can_beat_kraid(lg: &Logic<'_>, p: &Progression) -> bool {
    lg.can_enter(RegionKind::KraidsLair, p, true) && p.contains(CardBrinstarBoss)
}

pub fn kraids_lair(b: &mut RegionBuilder<'_>) {
    b.fixed_reward(RewardType::MetroidBoss)
        .boss(BossType::Kraid)
        .can_enter(|lg, p, _| {
            let cfg = lg.cfg();
            (can_destroy_bomb_walls(p, cfg)
                || p.contains(SpeedBooster)
                || can_access_norfair_upper_portal(p))
                && p.contains(Super)
                && can_pass_bomb_passages(p, cfg)
                && (p.contains(HiJump)
                    || can_wall_jump(cfg, WallJumpDifficulty::Medium)
                    || can_fly(p, cfg))
        })
        .can_complete(can_beat_kraid);

    b.room("Warehouse Energy Tank Room");
    b.location(43, "Energy Tank, Kraid", ETank)
        .kind(LocationKind::Hidden)
        .access(|_, p| p.kraid())
        .relevance(can_beat_kraid);

    b.room("Warehouse Kihunter Room");
    b.location(44, "Missile (Kraid)", Missile)
        .kind(LocationKind::Hidden)
        .access(|lg, p| can_use_power_bombs(p, lg.cfg()));

    b.room("Varia Suit Room");
    b.location(48, "Varia Suit", Varia)
        .kind(LocationKind::Chozo)
        .access(|_, p| p.kraid())
        .relevance(can_beat_kraid);
    b.end_room();
}

fn can_hop_over_gates(lg: &Logic<'_>, p: &Progression) -> bool {
    p.contains(Grapple) || can_climb_easy(lg, p)
}

pub fn pink(b: &mut RegionBuilder<'_>) {
    b.weight(-4).can_enter(|lg, p, _| {
        let cfg = lg.cfg();
        (can_open_red_doors(p)
            && (can_destroy_bomb_walls(p, cfg) || can_parlor_speed_boost(p, cfg)))
            || can_use_power_bombs(p, cfg)
            || (can_access_norfair_upper_portal(p)
                && p.contains(Morph)
                && p.contains(Wave)
                && (p.contains(Ice) || p.contains(HiJump) || p.contains(SpaceJump)))
    });

    b.room("Big Pink");
    b.location(21, "Missile (pink Brinstar top)", Missile)
        .kind(LocationKind::Visible)
        .access(can_hop_over_gates);
    b.location(22, "Missile (pink Brinstar bottom)", Missile)
        .kind(LocationKind::Visible);
    b.location(23, "Charge Beam", Charge)
        .kind(LocationKind::Chozo)
        .access(|lg, p| can_pass_bomb_passages(p, lg.cfg()));

    b.room("Pink Brinstar Power Bomb Room");
    b.location(24, "Power Bomb (pink Brinstar)", PowerBomb)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            can_use_power_bombs(p, lg.cfg())
                && p.contains(Super)
                && has_energy_reserves(p, 1)
                && can_hop_over_gates(lg, p)
        });

    b.room("Hoptank Room");
    b.location(35, "Energy Tank, Brinstar Gate", ETank)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            p.contains(CardBrinstarL2)
                && can_use_power_bombs(p, lg.cfg())
                && p.contains(Wave)
                && has_energy_reserves(p, 1)
                && can_hop_over_gates(lg, p)
        });

    b.room("Spore Spawn Super Room");
    b.location(14, "Super Missile (pink Brinstar)", Super)
        .kind(LocationKind::Chozo)
        .access(|lg, p| {
            p.contains(CardBrinstarBoss) && can_pass_bomb_passages(p, lg.cfg()) && p.contains(Super)
        });

    b.room("Waterway Energy Tank Room");
    b.location(33, "Energy Tank, Waterway", ETank)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            let cfg = lg.cfg();
            can_use_power_bombs(p, cfg)
                && can_open_red_doors(p)
                && p.contains(SpeedBooster)
                && ((has_energy_reserves(p, 1) && !cfg.waterway_needs_gravity_suit)
                    || p.contains(Gravity))
        });

    b.room("Green Hill Zone");
    b.location(25, "Missile (green Brinstar pipe)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            p.contains(Morph)
                && (p.contains(PowerBomb) || p.contains(Super) || can_access_norfair_upper_portal(p))
                && (p.contains(HiJump) || can_climb_easy(lg, p))
        });
    b.end_room();
}

pub fn red(b: &mut RegionBuilder<'_>) {
    b.can_enter(|lg, p, _| {
        ((can_destroy_bomb_walls(p, lg.cfg()) || p.contains(SpeedBooster))
            && p.contains(Super)
            && p.contains(Morph))
            || (can_access_norfair_upper_portal(p)
                && (p.contains(Ice) || p.contains(HiJump) || p.contains(SpaceJump)))
    });

    b.room("X-Ray Scope Room");
    b.location(38, "X-Ray Scope", XRay)
        .kind(LocationKind::Chozo)
        .access(|lg, p| {
            can_use_power_bombs(p, lg.cfg())
                && can_open_red_doors(p)
                && (p.contains(Grapple) || p.contains(SpaceJump))
        });

    b.room("Beta Power Bomb Room");
    b.location(39, "Power Bomb (red Brinstar sidehopper room)", PowerBomb)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_use_power_bombs(p, lg.cfg()) && p.contains(Super));

    b.room("Alpha Power Bomb Room");
    b.location(40, "Power Bomb (red Brinstar spike room)", PowerBomb)
        .kind(LocationKind::Chozo)
        .access(|lg, p| {
            (can_use_power_bombs(p, lg.cfg()) || p.contains(Ice)) && p.contains(Super)
        });
    b.location(41, "Missile (red Brinstar spike room)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_use_power_bombs(p, lg.cfg()) && p.contains(Super));

    b.room("Spazer Room");
    b.location(42, "Spazer", Spazer)
        .kind(LocationKind::Chozo)
        .access(|lg, p| {
            can_pass_bomb_passages(p, lg.cfg())
                && p.contains(Super)
                && (p.contains(HiJump) || can_climb_easy(lg, p))
        });
    b.end_room();
}
