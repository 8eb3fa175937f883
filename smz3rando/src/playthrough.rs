use hashbrown::HashSet;
use log::debug;
use serde_derive::Serialize;
use smz3rando_game::{ItemType, LocationId, ZELDA_LOCATION_OFFSET};

use crate::errors::{FillPhase, GenerationError};
use crate::world::item::Item;
use crate::world::{world_progressions, LocationRef, World};

const MAX_SPHERES: usize = 100;

// Moldorm chest in Ganon's Tower, Varia Suit, Wrecked Ship east super, Space Jump, Ridley tank.
const VITAL_LOCATIONS: [LocationId; 5] = [ZELDA_LOCATION_OFFSET + 215, 48, 134, 154, 78];

/// Locations that first become reachable together, and the items found there.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Sphere {
    pub locations: Vec<LocationRef>,
    pub items: Vec<Item>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Playthrough {
    pub spheres: Vec<Sphere>,
    /// Locations never reached; only non-empty for seeds with a few dead-end locations.
    pub inaccessible: Vec<LocationRef>,
}

/// Items every player holds before the first sphere.
fn initial_inventory(worlds: &[World]) -> Vec<Item> {
    let mut items = vec![];
    for world in worlds {
        if !world.config.metroid_keysanity() {
            items.extend(world.pools.keycards.iter().copied());
        }
        items.extend(world.starting_inventory.iter().copied());
    }
    items
}

/// Walks the filled worlds sphere by sphere, collecting every item reachable with the items
/// of earlier spheres. Each location is checked against the progression of its own world.
pub fn generate_spheres(worlds: &[World]) -> Result<Playthrough, GenerationError> {
    let mut items = initial_inventory(worlds);
    let initial_count = items.len();
    let total_count = worlds
        .iter()
        .flat_map(|w| &w.locations)
        .filter(|l| l.item.is_some())
        .count();

    let mut seen: HashSet<LocationRef> = HashSet::new();
    let mut playthrough = Playthrough::default();
    let mut prev_reward_count = 0;

    while items.len() - initial_count < total_count {
        let progressions = world_progressions(worlds, &items);
        let reward_count: usize = progressions
            .iter()
            .map(|p| p.total_reward_count() + p.total_boss_count())
            .sum();

        let mut accessible = vec![];
        for world in worlds {
            let lg = world.logic();
            let p = &progressions[world.id];
            for loc in &world.locations {
                if loc.is_available(&lg, p) {
                    accessible.push(LocationRef {
                        world: world.id,
                        idx: loc.idx,
                    });
                }
            }
        }

        let mut sphere = Sphere::default();
        for &loc in &accessible {
            if seen.insert(loc) {
                sphere.locations.push(loc);
                if let Some(item) = worlds[loc.world].locations[loc.idx].item {
                    sphere.items.push(item);
                }
            }
        }
        items.extend(sphere.items.iter().copied());

        debug!(
            "Sphere {}: {} new items, {} new rewards",
            playthrough.spheres.len() + 1,
            sphere.items.len(),
            reward_count - prev_reward_count
        );

        if sphere.items.is_empty() && reward_count == prev_reward_count {
            let inaccessible: Vec<LocationRef> = worlds
                .iter()
                .flat_map(|w| {
                    w.locations.iter().map(move |l| LocationRef {
                        world: w.id,
                        idx: l.idx,
                    })
                })
                .filter(|l| !seen.contains(l))
                .collect();

            if inaccessible.len() >= 15 * worlds.len() {
                let vital_reached = worlds.iter().all(|w| {
                    VITAL_LOCATIONS.iter().all(|&id| {
                        w.location_idx(id).is_some_and(|idx| {
                            seen.contains(&LocationRef {
                                world: w.id,
                                idx,
                            })
                        })
                    })
                });
                let crateria_boss_cards = items
                    .iter()
                    .filter(|i| i.item_type == ItemType::CardCrateriaBoss)
                    .count();
                if !vital_reached || crateria_boss_cards != worlds.len() {
                    return Err(GenerationError::failure(
                        FillPhase::Playthrough,
                        inaccessible.len(),
                        "too many inaccessible locations, seed is likely unbeatable",
                    ));
                }
            }
            playthrough.inaccessible = inaccessible;
            break;
        }

        playthrough.spheres.push(sphere);
        prev_reward_count = reward_count;

        let uncollected = total_count.saturating_sub(items.len() - initial_count);
        check_sphere_limit(playthrough.spheres.len(), uncollected)?;
    }

    Ok(playthrough)
}

/// More than `MAX_SPHERES` spheres fails the attempt.
fn check_sphere_limit(spheres: usize, uncollected: usize) -> Result<(), GenerationError> {
    if spheres > MAX_SPHERES {
        return Err(GenerationError::failure(
            FillPhase::Playthrough,
            uncollected,
            format!("playthrough exceeded {MAX_SPHERES} spheres"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlong_playthrough_is_retryable() {
        assert!(check_sphere_limit(MAX_SPHERES, 10).is_ok());
        let err = check_sphere_limit(MAX_SPHERES + 1, 10).unwrap_err();
        assert!(err.is_retryable());
        assert!(matches!(
            err,
            GenerationError::GenerationFailure {
                phase: FillPhase::Playthrough,
                unplaced: 10,
                ..
            }
        ));
    }
}
