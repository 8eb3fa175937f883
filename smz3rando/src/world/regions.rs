mod brinstar;
mod castle_tower;
mod crateria;
mod dark_world;
mod desert_palace;
mod eastern_palace;
mod ganons_tower;
mod hyrule_castle;
mod ice_palace;
mod light_world;
mod maridia;
mod misery_mire;
mod norfair;
mod palace_of_darkness;
mod skull_woods;
mod swamp_palace;
mod thieves_town;
mod tower_of_hera;
mod turtle_rock;
mod wrecked_ship;

use smz3rando_game::{ItemType, LocationId, ZELDA_LOCATION_OFFSET};
use smz3rando_logic::Progression;

use super::location::Location;
use super::logic::Logic;
use super::region::{Region, RegionBuilder, RegionKind};

pub(crate) use wrecked_ship::can_access_shut_down_rooms;

/// Location id of a Zelda location from its per-game number.
pub(crate) const fn z(n: LocationId) -> LocationId {
    ZELDA_LOCATION_OFFSET + n
}

/// Doors locked by a keycard under Metroid keysanity fall back to `otherwise` in vanilla mode.
pub(crate) fn keycard_or(lg: &Logic<'_>, p: &Progression, card: ItemType, otherwise: bool) -> bool {
    if lg.config().metroid_keysanity() {
        p.contains(card)
    } else {
        otherwise
    }
}

/// Builds all regions in `RegionKind` order, appending locations to `arena`.
pub fn build_regions(arena: &mut Vec<Location>) -> Vec<Region> {
    RegionKind::ALL
        .iter()
        .map(|&kind| {
            let mut b = RegionBuilder::new(kind, arena);
            build(kind, &mut b);
            b.finish()
        })
        .collect()
}

fn build(kind: RegionKind, b: &mut RegionBuilder<'_>) {
    use RegionKind::*;
    match kind {
        CastleTower => castle_tower::build(b),
        EasternPalace => eastern_palace::build(b),
        DesertPalace => desert_palace::build(b),
        TowerOfHera => tower_of_hera::build(b),
        PalaceOfDarkness => palace_of_darkness::build(b),
        SwampPalace => swamp_palace::build(b),
        SkullWoods => skull_woods::build(b),
        ThievesTown => thieves_town::build(b),
        IcePalace => ice_palace::build(b),
        MiseryMire => misery_mire::build(b),
        TurtleRock => turtle_rock::build(b),
        GanonsTower => ganons_tower::build(b),
        LightWorldDeathMountainWest => light_world::death_mountain_west(b),
        LightWorldDeathMountainEast => light_world::death_mountain_east(b),
        LightWorldNorthWest => light_world::north_west(b),
        LightWorldNorthEast => light_world::north_east(b),
        LightWorldSouth => light_world::south(b),
        HyruleCastle => hyrule_castle::build(b),
        DarkWorldDeathMountainWest => dark_world::death_mountain_west(b),
        DarkWorldDeathMountainEast => dark_world::death_mountain_east(b),
        DarkWorldNorthWest => dark_world::north_west(b),
        DarkWorldNorthEast => dark_world::north_east(b),
        DarkWorldSouth => dark_world::south(b),
        DarkWorldMire => dark_world::mire(b),
        CentralCrateria => crateria::central(b),
        WestCrateria => crateria::west(b),
        EastCrateria => crateria::east(b),
        BlueBrinstar => brinstar::blue(b),
        GreenBrinstar => brinstar::green(b),
        KraidsLair => brinstar::kraids_lair(b),
        PinkBrinstar => brinstar::pink(b),
        RedBrinstar => brinstar::red(b),
        OuterMaridia => maridia::outer(b),
        InnerMaridia => maridia::inner(b),
        UpperNorfairWest => norfair::upper_west(b),
        UpperNorfairEast => norfair::upper_east(b),
        UpperNorfairCrocomire => norfair::upper_crocomire(b),
        LowerNorfairWest => norfair::lower_west(b),
        LowerNorfairEast => norfair::lower_east(b),
        WreckedShip => wrecked_ship::build(b),
    }
}
