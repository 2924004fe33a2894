//! Encounter event log
//!
//! Events generated by the turn coordinator for the presentation layer:
//! the UI drives HP/AP panels from the read-only actor accessors and
//! despawn/death animation from `ActorDied`.

use serde::{Deserialize, Serialize};

use crate::core::types::{ActorId, Tick};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterEventKind {
    /// Fight-mode flipped on for the whole encounter
    FightModeEngaged,
    /// An attack resolved (hit or miss); `damage` is 0 on a miss
    AttackResolved {
        attacker: ActorId,
        defender: ActorId,
        damage: u32,
        hit: bool,
    },
    /// An actor ran out of AP and its movement was halted mid-step
    MovementHalted { actor: ActorId },
    /// AP reset to max
    ActionPointsRefreshed { actor: ActorId },
    /// An actor died and was removed from the registry
    ActorDied { actor: ActorId },
    /// A planning pass hit a position lookup failure and degraded
    PlanningDegraded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterEvent {
    pub tick: Tick,
    pub kind: EncounterEventKind,
}

/// Append-only log of one encounter's events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterLog {
    pub events: Vec<EncounterEvent>,
}

impl EncounterLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EncounterEventKind, tick: Tick) {
        self.events.push(EncounterEvent { tick, kind });
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncounterEvent> {
        self.events.iter()
    }
}
