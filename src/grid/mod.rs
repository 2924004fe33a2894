//! Positioning collaborator seam: service trait, step events and an
//! in-memory implementation for tests and the demo binary

pub mod events;
pub mod memory;
pub mod service;

pub use events::{StepEvent, StepPhase};
pub use memory::MemoryGrid;
pub use service::PositioningService;
