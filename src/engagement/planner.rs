//! Enemy engagement planner
//!
//! One planning pass ranks the hero's free adjacent tiles in fixed
//! west/north/east/south order and walks the hostiles in registry
//! (insertion) order: already-adjacent hostiles attack, the rest are
//! assigned the next unused candidate tile. Hostiles beyond the candidate
//! supply sit this cycle out.
//!
//! The planner is a pure decision pass; the coordinator executes the
//! directives (and clears wander timers for every planned hostile).

use crate::actor::registry::ActorRegistry;
use crate::core::types::{ActorId, TilePoint};
use crate::grid::service::PositioningService;

/// What one hostile should do this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Cardinally adjacent to the hero: attack
    Attack,
    /// Walk toward an assigned tile next to the hero
    MoveTo(TilePoint),
    /// No action this cycle (moving, exhausted, out of candidate tiles)
    Hold,
    /// Degraded fallback: zero out AP and wait for the next pass
    Drain,
    /// Degraded fallback for an adjacent, able hostile: one attack, then
    /// AP drained like the rest of the aborted tail
    AttackAndDrain,
}

/// Result of one planning pass over all hostiles, in registry order
#[derive(Debug, Clone, Default)]
pub struct ApproachPlan {
    pub directives: Vec<(ActorId, Directive)>,
    /// True when a position lookup failed and the pass fell back to
    /// draining the unprocessed hostiles
    pub degraded: bool,
}

fn eligible(
    registry: &ActorRegistry,
    grid: &impl PositioningService,
    id: &ActorId,
) -> bool {
    let Some(hostile) = registry.get(id) else {
        return false;
    };
    hostile.fight_mode && !hostile.is_exhausted() && !grid.is_moving(id)
}

/// Plan one engagement cycle
///
/// `fallback_hero_pos` is the coordinator's last tile observed for the
/// hero from step events; it keeps adjacent hostiles attack-eligible when
/// the positioning service momentarily cannot resolve the hero.
pub fn plan_approach<P: PositioningService>(
    registry: &ActorRegistry,
    grid: &P,
    fallback_hero_pos: Option<TilePoint>,
) -> ApproachPlan {
    let mut plan = ApproachPlan::default();
    let Some(hero) = registry.hero() else {
        return plan;
    };

    let hero_pos = grid.position(&hero.id).or(fallback_hero_pos);
    let Some(hero_pos) = hero_pos else {
        // Position unresolvable even from the event cache: drain everyone
        // still eligible so the cycle cannot wedge, and retry next pass.
        tracing::warn!("hero position unavailable, degrading planning pass");
        plan.degraded = true;
        for id in registry.hostile_ids() {
            plan.directives.push((id, Directive::Drain));
        }
        return plan;
    };

    let candidates: Vec<TilePoint> = hero_pos
        .cardinal_neighbors()
        .into_iter()
        .filter(|&tile| !grid.is_blocked(tile))
        .collect();
    let mut next_candidate = 0usize;
    let mut lookup_failed = false;

    for id in registry.hostile_ids() {
        if lookup_failed {
            // Abort assignment, but let an adjacent, able hostile still
            // get its attack in before its AP is drained.
            let attacks = grid
                .position(&id)
                .map(|pos| pos.is_cardinally_adjacent(&hero_pos))
                .unwrap_or(false)
                && eligible(registry, grid, &id);
            plan.directives.push((
                id,
                if attacks {
                    Directive::AttackAndDrain
                } else {
                    Directive::Drain
                },
            ));
            continue;
        }

        if !eligible(registry, grid, &id) {
            plan.directives.push((id, Directive::Hold));
            continue;
        }

        let Some(pos) = grid.position(&id) else {
            tracing::warn!(hostile = %id, "hostile position unavailable, degrading planning pass");
            plan.degraded = true;
            lookup_failed = true;
            plan.directives.push((id, Directive::Drain));
            continue;
        };

        if pos.is_cardinally_adjacent(&hero_pos) {
            plan.directives.push((id, Directive::Attack));
        } else if let Some(&tile) = candidates.get(next_candidate) {
            next_candidate += 1;
            plan.directives.push((id, Directive::MoveTo(tile)));
        } else {
            // More hostiles than free adjacent tiles; skipped this cycle.
            plan.directives.push((id, Directive::Hold));
        }
    }

    plan
}
