//! Engagement detection
//!
//! The hero engages the moment any hostile's battle radius covers the
//! hero's tile. Engagement is all-or-nothing: once detected, fight-mode
//! is set on the hero and every hostile, and nothing in this core clears
//! it again for the encounter.

use crate::actor::registry::ActorRegistry;
use crate::core::types::TilePoint;
use crate::grid::service::PositioningService;

/// Boundary-inclusive battle radius test
pub fn is_within_battle_radius(hero_pos: TilePoint, hostile_pos: TilePoint, radius: u32) -> bool {
    hero_pos.manhattan_distance(&hostile_pos) <= radius
}

/// Should the encounter be (or stay) in fight-mode?
///
/// True iff the hero already carries the sticky flag, or any hostile's
/// radius covers the hero. Re-evaluated on every hero step completion.
pub fn evaluate_engagement<P: PositioningService>(registry: &ActorRegistry, grid: &P) -> bool {
    let Some(hero) = registry.hero() else {
        return false;
    };
    if hero.fight_mode {
        return true;
    }
    let Some(hero_pos) = grid.position(&hero.id) else {
        return false;
    };
    registry.hostiles().any(|hostile| {
        grid.position(&hostile.id)
            .map(|pos| is_within_battle_radius(hero_pos, pos, hostile.battle_radius))
            .unwrap_or(false)
    })
}

/// Flip fight-mode on the hero and every hostile
pub fn engage_all(registry: &mut ActorRegistry) {
    if let Some(hero) = registry.hero_mut() {
        hero.engage();
    }
    for id in registry.hostile_ids() {
        if let Some(hostile) = registry.get_mut(&id) {
            hostile.engage();
        }
    }
}
