use thiserror::Error;

use crate::core::types::{ActorId, TilePoint};

#[derive(Error, Debug)]
pub enum AshfallError {
    #[error("Actor not found in registry: {0}")]
    ActorNotFound(ActorId),

    #[error("Duplicate actor id: {0}")]
    DuplicateActor(ActorId),

    #[error("Encounter has no hero")]
    MissingHero,

    #[error("Tile is occupied: {0:?}")]
    TileOccupied(TilePoint),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AshfallError>;
