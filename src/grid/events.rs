//! Step lifecycle events emitted by the positioning service
//!
//! The coordinator consumes these as typed values, FIFO per tick. One
//! completed step produces a begin event followed by an end event.

use serde::{Deserialize, Serialize};

use crate::core::types::{ActorId, TilePoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepPhase {
    Begin,
    End,
}

/// One tile-to-tile step of one actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent {
    pub actor: ActorId,
    pub exit_tile: TilePoint,
    pub enter_tile: TilePoint,
    pub phase: StepPhase,
}

impl StepEvent {
    pub fn begin(actor: impl Into<ActorId>, exit_tile: TilePoint, enter_tile: TilePoint) -> Self {
        Self {
            actor: actor.into(),
            exit_tile,
            enter_tile,
            phase: StepPhase::Begin,
        }
    }

    pub fn end(actor: impl Into<ActorId>, exit_tile: TilePoint, enter_tile: TilePoint) -> Self {
        Self {
            actor: actor.into(),
            exit_tile,
            enter_tile,
            phase: StepPhase::End,
        }
    }
}
