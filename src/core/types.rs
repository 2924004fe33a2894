//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for actors (hero and hostiles)
///
/// Ids are small strings assigned at encounter setup ("hero", "scorpion1", ...).
/// Role dispatch never inspects the string; see [`crate::actor::ActorRole`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Position on the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TilePoint {
    pub x: i32,
    pub y: i32,
}

impl TilePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance: |x1-x2| + |y1-y2|
    pub fn manhattan_distance(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four cardinal neighbors in fixed west, north, east, south order
    ///
    /// Planning iterates candidates in this order; keep it stable.
    pub fn cardinal_neighbors(&self) -> [TilePoint; 4] {
        [
            TilePoint::new(self.x - 1, self.y), // west
            TilePoint::new(self.x, self.y - 1), // north
            TilePoint::new(self.x + 1, self.y), // east
            TilePoint::new(self.x, self.y + 1), // south
        ]
    }

    /// True when `other` is exactly one tile away on a cardinal axis
    pub fn is_cardinally_adjacent(&self, other: &Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = TilePoint::new(5, 5);
        let b = TilePoint::new(2, 9);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_manhattan_symmetry() {
        let a = TilePoint::new(-3, 12);
        let b = TilePoint::new(8, -1);
        assert_eq!(a.manhattan_distance(&b), b.manhattan_distance(&a));
    }

    #[test]
    fn test_cardinal_neighbor_order() {
        let p = TilePoint::new(10, 10);
        let n = p.cardinal_neighbors();
        assert_eq!(n[0], TilePoint::new(9, 10)); // west
        assert_eq!(n[1], TilePoint::new(10, 9)); // north
        assert_eq!(n[2], TilePoint::new(11, 10)); // east
        assert_eq!(n[3], TilePoint::new(10, 11)); // south
    }

    #[test]
    fn test_cardinal_adjacency_excludes_diagonals() {
        let p = TilePoint::new(5, 5);
        assert!(p.is_cardinally_adjacent(&TilePoint::new(5, 4)));
        assert!(p.is_cardinally_adjacent(&TilePoint::new(4, 5)));
        assert!(!p.is_cardinally_adjacent(&TilePoint::new(6, 6)));
        assert!(!p.is_cardinally_adjacent(&TilePoint::new(5, 5)));
    }
}
