//! Turn/AP coordination: event intake, refresh cycle, wander timers

pub mod coordinator;
pub mod events;
pub mod wander;

pub use coordinator::{Coordinator, TurnState};
pub use events::{EncounterEvent, EncounterEventKind, EncounterLog};
pub use wander::{WanderRoster, WanderTimer};
