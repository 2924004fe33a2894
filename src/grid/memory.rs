//! In-memory positioning service
//!
//! Deterministic single-step movement used by the demo binary and the
//! integration tests. Real deployments plug a full pathfinding service
//! into the [`PositioningService`](crate::grid::PositioningService) seam
//! instead; this one walks the x axis first, then the y axis, and waits
//! when the next tile is blocked.

use ahash::{AHashMap, AHashSet};

use crate::core::types::{ActorId, TilePoint};
use crate::grid::events::StepEvent;
use crate::grid::service::PositioningService;

#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    positions: AHashMap<ActorId, TilePoint>,
    obstacles: AHashSet<TilePoint>,
    /// Active destinations in command order
    destinations: Vec<(ActorId, TilePoint)>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, id: impl Into<ActorId>, tile: TilePoint) {
        self.positions.insert(id.into(), tile);
    }

    pub fn set_obstacle(&mut self, tile: TilePoint) {
        self.obstacles.insert(tile);
    }

    /// Despawn an actor (driven by the death notification)
    pub fn remove(&mut self, id: &ActorId) {
        self.positions.remove(id);
        self.destinations.retain(|(d, _)| d != id);
    }

    fn occupied(&self, tile: TilePoint, moving: &ActorId) -> bool {
        self.positions
            .iter()
            .any(|(id, pos)| id != moving && *pos == tile)
    }

    fn next_tile_toward(from: TilePoint, to: TilePoint) -> TilePoint {
        if from.x != to.x {
            TilePoint::new(from.x + (to.x - from.x).signum(), from.y)
        } else {
            TilePoint::new(from.x, from.y + (to.y - from.y).signum())
        }
    }

    /// Advance every moving actor by at most one tile, in command order
    ///
    /// Emits the begin/end event pair for each completed step.
    pub fn step(&mut self) -> Vec<StepEvent> {
        let mut events = Vec::new();
        let pending = self.destinations.clone();
        for (id, dest) in pending {
            // A handler may have halted this actor while we iterate.
            if !self.destinations.iter().any(|(d, _)| *d == id) {
                continue;
            }
            let Some(&from) = self.positions.get(&id) else {
                continue;
            };
            if from == dest {
                self.destinations.retain(|(d, _)| *d != id);
                continue;
            }
            let next = Self::next_tile_toward(from, dest);
            if self.obstacles.contains(&next) || self.occupied(next, &id) {
                // Wait for the tile to clear.
                continue;
            }
            events.push(StepEvent::begin(id.clone(), from, next));
            self.positions.insert(id.clone(), next);
            if next == dest {
                self.destinations.retain(|(d, _)| *d != id);
            }
            events.push(StepEvent::end(id, from, next));
        }
        events
    }
}

impl PositioningService for MemoryGrid {
    fn position(&self, id: &ActorId) -> Option<TilePoint> {
        self.positions.get(id).copied()
    }

    fn is_blocked(&self, tile: TilePoint) -> bool {
        self.obstacles.contains(&tile) || self.positions.values().any(|&p| p == tile)
    }

    fn move_to(&mut self, id: &ActorId, tile: TilePoint) {
        self.destinations.retain(|(d, _)| d != id);
        self.destinations.push((id.clone(), tile));
    }

    fn stop_movement(&mut self, id: &ActorId) {
        self.destinations.retain(|(d, _)| d != id);
    }

    fn is_moving(&self, id: &ActorId) -> bool {
        self.destinations.iter().any(|(d, _)| d == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::events::StepPhase;

    #[test]
    fn test_step_moves_one_tile_x_first() {
        let mut grid = MemoryGrid::new();
        grid.place("hero", TilePoint::new(0, 0));
        grid.move_to(&"hero".into(), TilePoint::new(2, 2));
        let events = grid.step();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].phase, StepPhase::Begin);
        assert_eq!(events[1].phase, StepPhase::End);
        assert_eq!(events[1].enter_tile, TilePoint::new(1, 0));
        assert!(grid.is_moving(&"hero".into()));
    }

    #[test]
    fn test_arrival_clears_destination() {
        let mut grid = MemoryGrid::new();
        grid.place("hero", TilePoint::new(0, 0));
        grid.move_to(&"hero".into(), TilePoint::new(1, 0));
        grid.step();
        assert!(!grid.is_moving(&"hero".into()));
        assert_eq!(grid.position(&"hero".into()), Some(TilePoint::new(1, 0)));
    }

    #[test]
    fn test_blocked_tile_waits() {
        let mut grid = MemoryGrid::new();
        grid.place("hero", TilePoint::new(0, 0));
        grid.set_obstacle(TilePoint::new(1, 0));
        grid.move_to(&"hero".into(), TilePoint::new(2, 0));
        let events = grid.step();
        assert!(events.is_empty());
        assert_eq!(grid.position(&"hero".into()), Some(TilePoint::new(0, 0)));
    }

    #[test]
    fn test_occupied_tile_counts_as_blocked() {
        let mut grid = MemoryGrid::new();
        grid.place("hero", TilePoint::new(0, 0));
        grid.place("scorpion1", TilePoint::new(1, 0));
        assert!(grid.is_blocked(TilePoint::new(1, 0)));
        assert!(!grid.is_blocked(TilePoint::new(2, 0)));
    }

    #[test]
    fn test_stop_movement_cancels_destination() {
        let mut grid = MemoryGrid::new();
        grid.place("hero", TilePoint::new(0, 0));
        grid.move_to(&"hero".into(), TilePoint::new(5, 0));
        grid.stop_movement(&"hero".into());
        assert!(!grid.is_moving(&"hero".into()));
        assert!(grid.step().is_empty());
    }
}
