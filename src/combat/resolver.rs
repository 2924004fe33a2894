//! Attack resolution
//!
//! The resolver derives facing, charges the attacker's AP and rolls the
//! hit. It assumes the caller has already verified adjacency (exactly one
//! tile, cardinal) and that both actors are registered and alive; it only
//! rejects non-cardinal geometry.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::actor::actor::Actor;
use crate::actor::weapon::Accuracy;
use crate::combat::facing::{classify_facing, Facing};
use crate::core::types::TilePoint;

/// Outcome of one attack attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Attacker has no AP left; nothing happened
    Exhausted,
    /// Attacker is not in fight-mode; nothing happened
    NotEngaged,
    /// Non-cardinal geometry; no AP charged, no damage
    OutOfLine,
    /// AP charged, roll failed, no damage
    Miss { facing: Facing },
    /// AP charged, damage applied
    Hit {
        facing: Facing,
        damage: u32,
        defender_died: bool,
    },
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit { .. })
    }
}

/// Resolve one attack with the attacker's active weapon
///
/// Fixed-damage weapons always hit for base damage. Rolled weapons
/// resample accuracy uniformly in `[min, max]` and hit when a uniform
/// roll in `[0, 100)` falls below it; a miss still pays the AP cost.
/// Death is reported in the outcome; removing the defender from the
/// registry is the caller's job.
pub fn resolve_attack(
    attacker: &mut Actor,
    defender: &mut Actor,
    attacker_pos: TilePoint,
    defender_pos: TilePoint,
    rng: &mut impl Rng,
) -> AttackOutcome {
    let Some(facing) = classify_facing(attacker_pos, defender_pos) else {
        return AttackOutcome::OutOfLine;
    };

    let weapon = attacker.active_weapon().clone();
    attacker.charge_action_points(weapon.ap_cost);

    let hit = match weapon.accuracy {
        Accuracy::Certain => true,
        Accuracy::Rolled { .. } => {
            let accuracy = weapon.accuracy.sample(rng);
            rng.gen_range(0..100) < accuracy
        }
    };

    if !hit {
        tracing::debug!(
            attacker = %attacker.id,
            defender = %defender.id,
            weapon = %weapon.name,
            "attack missed"
        );
        return AttackOutcome::Miss { facing };
    }

    let defender_died = defender.apply_damage(weapon.damage);
    tracing::debug!(
        attacker = %attacker.id,
        defender = %defender.id,
        weapon = %weapon.name,
        damage = weapon.damage,
        defender_died,
        "attack hit"
    );

    AttackOutcome::Hit {
        facing,
        damage: weapon.damage,
        defender_died,
    }
}
