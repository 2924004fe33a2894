pub mod config;
pub mod error;
pub mod types;

pub use config::EncounterConfig;
pub use error::{AshfallError, Result};
pub use types::{ActorId, Tick, TilePoint};
