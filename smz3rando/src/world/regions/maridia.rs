use smz3rando_game::ItemType::*;
use smz3rando_game::{BossType, RewardType};
use smz3rando_logic::helpers::{
    can_fly, can_navigate_maridia_left_sand_pit, can_open_red_doors, can_pass_bomb_passages,
    can_use_power_bombs, can_wall_jump,
};
use smz3rando_logic::Progression;
use smz3rando_logic::WallJumpDifficulty::{self, Easy, Hard, Medium};

use crate::world::location::LocationKind;
use crate::world::logic::Logic;
use crate::world::region::{RegionBuilder, RegionKind};

fn jump(lg: &Logic<'_>, difficulty: WallJumpDifficulty) -> bool {
    can_wall_jump(lg.cfg(), difficulty)
}

fn can_reach_turtle_room(lg: &Logic<'_>, p: &Progression) -> bool {
    can_open_red_doors(p)
        && (jump(lg, Medium)
            || (jump(lg, Easy) && (p.contains(Plasma) || p.contains(ScrewAttack)))
            || p.contains(HiJump)
            || can_fly(p, lg.cfg()))
}

pub fn outer(b: &mut RegionBuilder<'_>) {
    b.can_enter(|lg, p, req| {
        let cfg = lg.cfg();
        p.contains(Gravity)
            && ((lg.can_enter(RegionKind::UpperNorfairWest, p, req) && can_use_power_bombs(p, cfg))
                || (lg.can_access_maridia_portal(p, req)
                    && p.contains(CardMaridiaL1)
                    && p.contains(CardMaridiaL2)
                    && (can_pass_bomb_passages(p, cfg) || p.contains(ScrewAttack))))
    });

    b.room("Main Street");
    b.location(136, "Missile (green Maridia shinespark)", Missile)
        .kind(LocationKind::Visible)
        .access(|_, p| p.contains(SpeedBooster));
    b.location(137, "Super Missile (green Maridia)", Super)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            jump(lg, Medium)
                || (jump(lg, Easy) && p.contains(Ice))
                || p.contains(HiJump)
                || can_fly(p, lg.cfg())
        });

    b.room("Mama Turtle Room");
    b.location(138, "Energy Tank, Mama turtle", ETank)
        .kind(LocationKind::Visible)
        .access(|lg, p| {
            can_reach_turtle_room(lg, p)
                && (can_fly(p, lg.cfg()) || p.contains(SpeedBooster) || p.contains(Grapple))
        });
    b.location(139, "Missile (green Maridia tatori)", Missile)
        .kind(LocationKind::Hidden)
        .access(|lg, p| {
            can_reach_turtle_room(lg, p)
                && (jump(lg, Easy)
                    || p.contains(SpeedBooster)
                    || (p.contains(Grapple) && p.contains(HiJump))
                    || can_fly(p, lg.cfg()))
        });
    b.end_room();
}

fn can_pass_mount_death(lg: &Logic<'_>, p: &Progression) -> bool {
    can_fly(p, lg.cfg())
        || p.contains(SpeedBooster)
        || p.contains(Grapple)
        || (p.contains(HiJump) && jump(lg, Hard))
}

fn can_reach_aqueduct(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    (p.contains(CardMaridiaL1) && can_pass_mount_death(lg, p))
        || (p.contains(CardMaridiaL2) && lg.can_access_maridia_portal(p, require_rewards))
}

fn can_pass_pipe_crossroads(lg: &Logic<'_>, p: &Progression) -> bool {
    jump(lg, Medium) || p.contains(HiJump) || can_fly(p, lg.cfg())
}

fn can_defeat_botwoon(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    (p.contains(SpeedBooster) || lg.can_access_maridia_portal(p, require_rewards))
        && (jump(lg, Easy) || p.contains(Grapple) || can_fly(p, lg.cfg()))
}

fn can_access_precious_room(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    p.contains(Super)
        && (jump(lg, Hard) || p.contains(Grapple) || p.contains(SpaceJump))
        && (lg.can_access_maridia_portal(p, require_rewards)
            || (p.contains(CardMaridiaL1)
                && p.contains(CardMaridiaL2)
                && can_defeat_botwoon(lg, p, require_rewards)))
}

fn can_defeat_draygon(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    can_access_precious_room(lg, p, require_rewards)
        && p.contains(CardMaridiaBoss)
        // Leaving the room afterwards
        && ((p.contains(SpeedBooster) && p.contains(HiJump) && jump(lg, Easy))
            || can_fly(p, lg.cfg()))
}

fn can_beat_draygon(lg: &Logic<'_>, p: &Progression) -> bool {
    lg.can_enter(RegionKind::InnerMaridia, p, true) && can_defeat_draygon(lg, p, true)
}

fn can_access_plasma_room(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    (p.draygon() || (!require_rewards && can_defeat_draygon(lg, p, false)))
        && (p.contains(ScrewAttack) || p.contains(Plasma))
        && ((p.contains(HiJump) && jump(lg, Medium)) || can_fly(p, lg.cfg()))
}

fn can_reach_right_sand_pit(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    can_reach_aqueduct(lg, p, require_rewards)
        && p.contains(Super)
        && (jump(lg, Easy) || p.contains(HiJump) || p.contains(SpaceJump))
}

fn can_reach_watering_hole(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    p.contains(CardMaridiaL1)
        && can_pass_bomb_passages(p, lg.cfg())
        && can_pass_pipe_crossroads(lg, p)
        && can_reach_aqueduct(lg, p, require_rewards)
}

fn can_reach_left_sand_pit(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    can_reach_aqueduct(lg, p, require_rewards)
        && p.contains(Super)
        && can_pass_bomb_passages(p, lg.cfg())
        && can_navigate_maridia_left_sand_pit(p, lg.cfg())
}

fn can_reach_botwoon_tank(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    (p.contains(CardMaridiaL1)
        && p.contains(CardMaridiaL2)
        && can_defeat_botwoon(lg, p, require_rewards))
        || (lg.can_access_maridia_portal(p, require_rewards) && p.contains(CardMaridiaL2))
}

pub fn inner(b: &mut RegionBuilder<'_>) {
    b.fixed_reward(RewardType::MetroidBoss)
        .boss(BossType::Draygon)
        .can_enter(|lg, p, req| {
            p.contains(Gravity)
                && ((lg.can_enter(RegionKind::UpperNorfairWest, p, true)
                    && p.contains(Super)
                    && can_use_power_bombs(p, lg.cfg())
                    && can_pass_mount_death(lg, p))
                    || lg.can_access_maridia_portal(p, req))
        })
        .can_complete(can_beat_draygon);

    b.location(142, "Missile (yellow Maridia false wall)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_reach_watering_hole(lg, p, true))
        .relevance(|lg, p| can_reach_watering_hole(lg, p, false));
    b.location(143, "Plasma Beam", Plasma)
        .kind(LocationKind::Chozo)
        .access(|lg, p| can_access_plasma_room(lg, p, true))
        .relevance(|lg, p| can_access_plasma_room(lg, p, false));
    b.location(146, "Missile (right Maridia sand pit room)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_reach_right_sand_pit(lg, p, true))
        .relevance(|lg, p| can_reach_right_sand_pit(lg, p, false));
    b.location(147, "Power Bomb (right Maridia sand pit room)", PowerBomb)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_reach_right_sand_pit(lg, p, true))
        .relevance(|lg, p| can_reach_right_sand_pit(lg, p, false));
    b.location(148, "Missile (pink Maridia)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_reach_aqueduct(lg, p, true) && p.contains(SpeedBooster))
        .relevance(|lg, p| can_reach_aqueduct(lg, p, false) && p.contains(SpeedBooster));
    b.location(149, "Super Missile (pink Maridia)", Super)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_reach_aqueduct(lg, p, true) && p.contains(SpeedBooster))
        .relevance(|lg, p| can_reach_aqueduct(lg, p, false) && p.contains(SpeedBooster));
    b.location(150, "Spring Ball", SpringBall)
        .kind(LocationKind::Chozo)
        .access(|lg, p| {
            p.contains(Super)
                && can_use_power_bombs(p, lg.cfg())
                && p.contains(Grapple)
                && (p.contains(SpaceJump) || (p.contains(HiJump) && jump(lg, Medium)))
                // Getting back out
                && (jump(lg, Medium) || p.contains(SpringBall) || p.contains(SpaceJump))
        });
    b.location(151, "Missile (Draygon)", Missile)
        .kind(LocationKind::Hidden)
        .access(|lg, p| can_access_precious_room(lg, p, true))
        .relevance(|lg, p| can_access_precious_room(lg, p, false));
    b.location(152, "Energy Tank, Botwoon", ETank)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_reach_botwoon_tank(lg, p, true))
        .relevance(|lg, p| can_reach_botwoon_tank(lg, p, false));
    b.location(154, "Space Jump", SpaceJump)
        .kind(LocationKind::Chozo)
        .access(|_, p| p.draygon())
        .relevance(|lg, p| can_defeat_draygon(lg, p, false));

    b.room("Watering Hole");
    b.location(140, "Left", Super)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_reach_watering_hole(lg, p, true))
        .relevance(|lg, p| can_reach_watering_hole(lg, p, false));
    b.location(141, "Right", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_reach_watering_hole(lg, p, true))
        .relevance(|lg, p| can_reach_watering_hole(lg, p, false));

    b.room("Left Sand Pit");
    b.location(144, "Left", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_reach_left_sand_pit(lg, p, true))
        .relevance(|lg, p| can_reach_left_sand_pit(lg, p, false));
    b.location(145, "Right", ReserveTank)
        .kind(LocationKind::Chozo)
        .access(|lg, p| can_reach_left_sand_pit(lg, p, true))
        .relevance(|lg, p| can_reach_left_sand_pit(lg, p, false));
    b.end_room();
}
