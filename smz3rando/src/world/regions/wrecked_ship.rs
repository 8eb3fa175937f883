use smz3rando_game::ItemType::*;
use smz3rando_game::{BossType, RewardType};
use smz3rando_logic::helpers::{
    can_destroy_bomb_walls, can_fly, can_ibj, can_moat_speed_boost, can_pass_bomb_passages,
    can_use_power_bombs, can_wall_jump, has_energy_reserves,
};
use smz3rando_logic::Progression;
use smz3rando_logic::WallJumpDifficulty::{Easy, Insane};

use super::keycard_or;
use crate::world::location::LocationKind;
use crate::world::logic::Logic;
use crate::world::region::{RegionBuilder, RegionKind};

fn can_unlock_ship(lg: &Logic<'_>, p: &Progression) -> bool {
    p.contains(CardWreckedShipBoss) && can_pass_bomb_passages(p, lg.cfg())
}

/// The rooms that only power up once Phantoon is down.
pub(crate) fn can_access_shut_down_rooms(
    lg: &Logic<'_>,
    p: &Progression,
    require_rewards: bool,
) -> bool {
    p.phantoon() || (!require_rewards && can_unlock_ship(lg, p))
}

fn can_beat_phantoon(lg: &Logic<'_>, p: &Progression) -> bool {
    lg.can_enter(RegionKind::WreckedShip, p, true) && can_unlock_ship(lg, p)
}

fn can_view_concert(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    can_access_shut_down_rooms(lg, p, require_rewards)
        && p.contains(CardWreckedShipL1)
        && (p.contains(Grapple)
            || p.contains(SpaceJump)
            || (p.contains(Varia) && has_energy_reserves(p, 2))
            || has_energy_reserves(p, 3))
}

fn can_access_wrecked_pool(lg: &Logic<'_>, p: &Progression, require_rewards: bool) -> bool {
    can_access_shut_down_rooms(lg, p, require_rewards)
        && ((p.contains(HiJump) && can_wall_jump(lg.cfg(), Easy))
            || p.contains(SpaceJump)
            || p.contains(SpeedBooster)
            || p.contains(Gravity))
}

fn can_pass_reverse_forgotten_highway(lg: &Logic<'_>, p: &Progression) -> bool {
    p.contains(Gravity)
        && (can_fly(p, lg.cfg())
            || can_wall_jump(lg.cfg(), Easy)
            || (p.contains(HiJump) && p.contains(Ice)))
}

fn can_cross_moat(lg: &Logic<'_>, p: &Progression) -> bool {
    let cfg = lg.cfg();
    can_moat_speed_boost(p, cfg)
        || p.contains(Grapple)
        || p.contains(SpaceJump)
        || (p.contains(Gravity)
            && (can_ibj(p, cfg) || (p.contains(HiJump) && can_wall_jump(cfg, Easy))))
        || can_wall_jump(cfg, Insane)
}

pub fn build(b: &mut RegionBuilder<'_>) {
    b.fixed_reward(RewardType::MetroidBoss)
        .boss(BossType::Phantoon)
        .can_enter(|lg, p, req| {
            let cfg = lg.cfg();
            p.contains(Super)
                && ((keycard_or(lg, p, CardCrateriaL2, can_use_power_bombs(p, cfg))
                    && can_cross_moat(lg, p))
                    // Maridia through the Forgotten Highway
                    || (can_use_power_bombs(p, cfg) && can_pass_reverse_forgotten_highway(lg, p))
                    || (lg.can_access_maridia_portal(p, req)
                        && can_pass_reverse_forgotten_highway(lg, p)
                        && ((can_destroy_bomb_walls(p, cfg) && p.contains(CardMaridiaL2))
                            || lg.is_available_by_id(154, p))))
        })
        .can_complete(can_beat_phantoon);

    b.room("Wrecked Ship Main Shaft");
    b.location(128, "Missile (Wrecked Ship middle)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_pass_bomb_passages(p, lg.cfg()));

    b.room("Bowling Alley");
    b.location(129, "Reserve Tank, Wrecked Ship", ReserveTank)
        .kind(LocationKind::Chozo)
        .access(|lg, p| {
            can_view_concert(lg, p, true)
                && p.contains(SpeedBooster)
                && can_use_power_bombs(p, lg.cfg())
        })
        .relevance(|lg, p| {
            can_view_concert(lg, p, false)
                && p.contains(SpeedBooster)
                && can_use_power_bombs(p, lg.cfg())
        });
    b.location(130, "Missile (Gravity Suit)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_view_concert(lg, p, true))
        .relevance(|lg, p| can_view_concert(lg, p, false));

    b.room("Assembly Line");
    b.location(131, "Missile (Wrecked Ship top)", Missile)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_access_shut_down_rooms(lg, p, true))
        .relevance(|lg, p| can_access_shut_down_rooms(lg, p, false));

    b.room("Wrecked Ship Energy Tank Room");
    b.location(132, "Energy Tank, Wrecked Ship", ETank)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_access_wrecked_pool(lg, p, true))
        .relevance(|lg, p| can_access_wrecked_pool(lg, p, false));

    b.room("Wrecked Ship West Super Room");
    b.location(133, "Super Missile (Wrecked Ship left)", Super)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_access_shut_down_rooms(lg, p, true))
        .relevance(|lg, p| can_access_shut_down_rooms(lg, p, false));

    b.room("Wrecked Ship East Super Room");
    b.location(134, "Right Super, Wrecked Ship", Super)
        .kind(LocationKind::Visible)
        .access(|lg, p| can_access_shut_down_rooms(lg, p, true))
        .relevance(|lg, p| can_access_shut_down_rooms(lg, p, false));

    b.room("Gravity Suit Room");
    b.location(135, "Gravity Suit", Gravity)
        .kind(LocationKind::Chozo)
        .access(|lg, p| can_view_concert(lg, p, true))
        .relevance(|lg, p| can_view_concert(lg, p, false));
    b.end_room();
}
