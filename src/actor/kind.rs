//! Actor kinds and their per-kind combat budgets
//!
//! Kind fixes the AP pool, the natural attack and the default battle
//! radius. Values come from the reference map's bestiary.

use serde::{Deserialize, Serialize};

use crate::actor::weapon::Weapon;

/// Which side of the encounter an actor is on
///
/// Stored directly on the actor record; dispatch never matches on id
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorRole {
    Hero,
    Hostile,
}

/// Actor species/kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Hero,
    Scorpion,
    Ghoul,
    DeathClaw,
}

impl ActorKind {
    pub fn role(&self) -> ActorRole {
        match self {
            ActorKind::Hero => ActorRole::Hero,
            _ => ActorRole::Hostile,
        }
    }

    /// Full AP pool for this kind
    pub fn max_action_points(&self) -> i32 {
        match self {
            ActorKind::Hero => 10,
            ActorKind::Scorpion => 5,
            ActorKind::Ghoul => 5,
            ActorKind::DeathClaw => 8,
        }
    }

    /// Distance (manhattan tiles) at which this kind turns aggressive
    ///
    /// Only meaningful for hostiles; the hero has no radius of its own.
    pub fn battle_radius(&self) -> u32 {
        match self {
            ActorKind::Hero => 0,
            ActorKind::Scorpion => 6,
            ActorKind::Ghoul => 4,
            ActorKind::DeathClaw => 8,
        }
    }

    /// Innate melee attack for hostile kinds
    pub fn natural_weapon(&self) -> Weapon {
        match self {
            ActorKind::Hero => Weapon::fists(),
            ActorKind::Scorpion => Weapon::punch("Stinger", 3),
            ActorKind::Ghoul => Weapon::punch("Claws", 2),
            ActorKind::DeathClaw => Weapon::punch("Talons", 5),
        }
    }
}
