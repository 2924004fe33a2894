//! Seam to the external grid-positioning service
//!
//! Rendering, pathfinding internals and movement interpolation live
//! outside this crate. The combat core only queries positions and
//! occupancy, and commands/halts movement through this trait.

use crate::core::types::{ActorId, TilePoint};

pub trait PositioningService {
    /// Current tile of an actor, if the service can resolve it
    ///
    /// `None` is a legal transient answer (e.g. mid-transition); the
    /// planner degrades gracefully rather than treating it as fatal.
    fn position(&self, id: &ActorId) -> Option<TilePoint>;

    /// Is the tile impassable or occupied?
    fn is_blocked(&self, tile: TilePoint) -> bool;

    /// Command pathing toward a destination tile
    fn move_to(&mut self, id: &ActorId, tile: TilePoint);

    /// Halt an actor immediately, cancelling its destination
    fn stop_movement(&mut self, id: &ActorId);

    fn is_moving(&self, id: &ActorId) -> bool;
}
