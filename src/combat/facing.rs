//! Relative facing between attacker and defender
//!
//! Attacks resolve only along the four cardinal directions. Diagonal or
//! otherwise non-aligned positions have no facing and the attack is a
//! silent no-op (no AP charged, no damage).

use serde::{Deserialize, Serialize};

use crate::core::types::TilePoint;

/// Cardinal direction from attacker toward defender
///
/// North is toward smaller y (the grid's up direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    pub fn opposite(&self) -> Self {
        match self {
            Facing::North => Facing::South,
            Facing::South => Facing::North,
            Facing::East => Facing::West,
            Facing::West => Facing::East,
        }
    }
}

/// Classify attacker-to-defender facing, or `None` when neither axis
/// matches (including the degenerate same-tile case)
pub fn classify_facing(attacker: TilePoint, defender: TilePoint) -> Option<Facing> {
    if attacker == defender {
        return None;
    }
    if attacker.x == defender.x {
        if defender.y < attacker.y {
            Some(Facing::North)
        } else {
            Some(Facing::South)
        }
    } else if attacker.y == defender.y {
        if defender.x > attacker.x {
            Some(Facing::East)
        } else {
            Some(Facing::West)
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_column_faces_north_or_south() {
        let attacker = TilePoint::new(5, 5);
        assert_eq!(
            classify_facing(attacker, TilePoint::new(5, 4)),
            Some(Facing::North)
        );
        assert_eq!(
            classify_facing(attacker, TilePoint::new(5, 8)),
            Some(Facing::South)
        );
    }

    #[test]
    fn test_same_row_faces_east_or_west() {
        let attacker = TilePoint::new(5, 5);
        assert_eq!(
            classify_facing(attacker, TilePoint::new(9, 5)),
            Some(Facing::East)
        );
        assert_eq!(
            classify_facing(attacker, TilePoint::new(2, 5)),
            Some(Facing::West)
        );
    }

    #[test]
    fn test_diagonal_has_no_facing() {
        assert_eq!(classify_facing(TilePoint::new(5, 5), TilePoint::new(6, 6)), None);
        assert_eq!(classify_facing(TilePoint::new(5, 5), TilePoint::new(3, 9)), None);
    }

    #[test]
    fn test_same_tile_has_no_facing() {
        assert_eq!(classify_facing(TilePoint::new(5, 5), TilePoint::new(5, 5)), None);
    }

    #[test]
    fn test_facing_opposite_roundtrip() {
        for f in [Facing::North, Facing::South, Facing::East, Facing::West] {
            assert_eq!(f.opposite().opposite(), f);
        }
    }
}
