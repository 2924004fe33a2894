//! Ashfall - turn/engagement core for a tile-based tactical game
//!
//! A hero and hostile actors share a grid; movement toward each other
//! triggers a turn-based fight governed by per-actor action points,
//! proximity engagement and weapon-driven attack resolution. Rendering,
//! asset loading and pathfinding internals live outside this crate,
//! behind the [`grid::PositioningService`] seam.

pub mod actor;
pub mod combat;
pub mod core;
pub mod engagement;
pub mod grid;
pub mod turn;
