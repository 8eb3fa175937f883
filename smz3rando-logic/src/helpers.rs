use crate::{LogicConfig, Progression, WallJumpDifficulty};
use smz3rando_game::ItemType::*;

pub fn can_lift_light(p: &Progression) -> bool {
    p.glove()
}

pub fn can_lift_heavy(p: &Progression) -> bool {
    p.mitt()
}

pub fn can_light_torches(p: &Progression) -> bool {
    p.contains(Firerod) || p.contains(Lamp)
}

pub fn can_melt_freezors(p: &Progression) -> bool {
    p.contains(Firerod) || (p.contains(Bombos) && p.sword())
}

pub fn can_extend_magic(p: &Progression, bars: usize) -> bool {
    let half = if p.contains(HalfMagic) { 2 } else { 1 };
    let bottle = if p.bottle() { 2 } else { 1 };
    half * bottle >= bars
}

pub fn can_kill_many_enemies(p: &Progression) -> bool {
    p.sword()
        || p.contains(Hammer)
        || p.contains(Bow)
        || p.contains(Firerod)
        || p.contains(Somaria)
        || (p.contains(Byrna) && can_extend_magic(p, 2))
}

pub fn can_wall_jump(cfg: &LogicConfig, difficulty: WallJumpDifficulty) -> bool {
    cfg.wall_jump_difficulty >= difficulty
}

pub fn can_ibj(p: &Progression, cfg: &LogicConfig) -> bool {
    p.contains(Morph) && p.contains(Bombs) && cfg.infinite_bomb_jump
}

pub fn can_fly(p: &Progression, cfg: &LogicConfig) -> bool {
    p.contains(SpaceJump) || can_ibj(p, cfg)
}

pub fn can_use_power_bombs(p: &Progression, cfg: &LogicConfig) -> bool {
    p.contains(Morph)
        && ((!cfg.prevent_five_power_bomb_seed && p.contains(PowerBomb)) || p.two_power_bombs())
}

pub fn can_pass_bomb_passages(p: &Progression, cfg: &LogicConfig) -> bool {
    p.contains(Morph) && (p.contains(Bombs) || can_use_power_bombs(p, cfg))
}

pub fn can_safely_use_screw_attack(p: &Progression, cfg: &LogicConfig) -> bool {
    p.contains(ScrewAttack) && (!cfg.prevent_screw_attack_soft_lock || p.contains(Morph))
}

pub fn can_destroy_bomb_walls(p: &Progression, cfg: &LogicConfig) -> bool {
    can_pass_bomb_passages(p, cfg) || can_safely_use_screw_attack(p, cfg)
}

pub fn can_spring_ball_jump(p: &Progression) -> bool {
    p.contains(Morph) && p.contains(SpringBall)
}

pub fn has_energy_reserves(p: &Progression, amount: usize) -> bool {
    p.etank_count() + p.reserve_tank_count() >= amount
}

pub fn can_hell_run(p: &Progression) -> bool {
    p.contains(Varia) || has_energy_reserves(p, 5)
}

pub fn can_open_red_doors(p: &Progression) -> bool {
    p.contains(Missile) || p.contains(Super)
}

pub fn can_parlor_speed_boost(p: &Progression, cfg: &LogicConfig) -> bool {
    p.contains(SpeedBooster) && cfg.parlor_speed_booster
}

pub fn can_moat_speed_boost(p: &Progression, cfg: &LogicConfig) -> bool {
    p.contains(SpeedBooster) && cfg.moat_speed_booster
}

pub fn can_move_at_high_speeds(p: &Progression, cfg: &LogicConfig) -> bool {
    p.contains(SpeedBooster) || (p.contains(Morph) && cfg.mock_ball)
}

pub fn can_pass_sword_only_dark_rooms(p: &Progression, cfg: &LogicConfig) -> bool {
    p.contains(Lamp) || (p.sword() && cfg.sword_only_dark_rooms)
}

pub fn can_pass_fire_rod_dark_rooms(p: &Progression, cfg: &LogicConfig) -> bool {
    can_pass_sword_only_dark_rooms(p, cfg) || (p.contains(Firerod) && cfg.fire_rod_dark_rooms)
}

/// Fake flippers across the Hyrule south waters; with `need_fairy` the dark world swim also
/// requires the Moon Pearl.
pub fn can_hyrule_south_fake_flippers(p: &Progression, cfg: &LogicConfig, need_fairy: bool) -> bool {
    cfg.light_world_south_fake_flippers && (!need_fairy || p.contains(MoonPearl))
}

pub fn can_navigate_maridia_left_sand_pit(p: &Progression, cfg: &LogicConfig) -> bool {
    if cfg.left_sand_pit_requires_spring_ball {
        p.contains(SpringBall)
    } else {
        can_wall_jump(cfg, WallJumpDifficulty::Medium)
            || (can_wall_jump(cfg, WallJumpDifficulty::Easy) && p.contains(SpringBall))
            || can_fly(p, cfg)
    }
}

pub fn can_access_death_mountain_portal(p: &Progression, cfg: &LogicConfig) -> bool {
    (can_destroy_bomb_walls(p, cfg) || p.contains(SpeedBooster))
        && p.contains(Super)
        && p.contains(Morph)
}

pub fn can_access_dark_world_portal(p: &Progression, cfg: &LogicConfig) -> bool {
    p.contains(CardMaridiaL1)
        && p.contains(CardMaridiaL2)
        && can_use_power_bombs(p, cfg)
        && p.contains(Super)
        && p.contains(Gravity)
        && p.contains(SpeedBooster)
}

pub fn can_access_misery_mire_portal(p: &Progression, cfg: &LogicConfig) -> bool {
    (p.contains(CardNorfairL2) || (p.contains(SpeedBooster) && p.contains(Wave)))
        && p.contains(Varia)
        && p.contains(Super)
        && p.contains(Gravity)
        && p.contains(SpaceJump)
        && can_use_power_bombs(p, cfg)
}

pub fn can_access_norfair_upper_portal(p: &Progression) -> bool {
    p.contains(Flute) || (can_lift_light(p) && p.contains(Lamp))
}

pub fn can_access_norfair_lower_portal(p: &Progression) -> bool {
    p.contains(Flute) && can_lift_heavy(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_bomb_safety_rail() {
        let mut cfg = LogicConfig::default();
        let p = Progression::from_items([Morph, PowerBomb]);
        assert!(can_use_power_bombs(&p, &cfg));
        cfg.prevent_five_power_bomb_seed = true;
        assert!(!can_use_power_bombs(&p, &cfg));
        let p = Progression::from_items([Morph, PowerBomb, PowerBomb]);
        assert!(can_use_power_bombs(&p, &cfg));
    }

    #[test]
    fn wall_jump_levels() {
        let cfg = LogicConfig::default();
        assert!(can_wall_jump(&cfg, WallJumpDifficulty::Easy));
        assert!(can_wall_jump(&cfg, WallJumpDifficulty::Medium));
        assert!(!can_wall_jump(&cfg, WallJumpDifficulty::Hard));
    }

    #[test]
    fn magic_extension() {
        assert!(can_extend_magic(&Progression::new(), 1));
        assert!(!can_extend_magic(&Progression::new(), 2));
        let p = Progression::from_items([HalfMagic, Bottle]);
        assert!(can_extend_magic(&p, 4));
        assert!(!can_extend_magic(&p, 5));
    }

    #[test]
    fn infinite_bomb_jump_requires_trick() {
        let mut cfg = LogicConfig::default();
        let p = Progression::from_items([Morph, Bombs]);
        assert!(!can_fly(&p, &cfg));
        cfg.infinite_bomb_jump = true;
        assert!(can_fly(&p, &cfg));
    }
}
