//! Weapon records and accuracy model
//!
//! A weapon is owned by the actor wielding it. The hero holds a
//! primary/secondary pair and switches the active slot; hostiles carry a
//! single natural weapon. Accuracy, when rolled, is resampled on every
//! attack attempt and never cached across attacks.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a weapon decides whether it hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accuracy {
    /// Deterministic melee ("fists"/"punch" category): always hits
    Certain,
    /// Accuracy resampled uniformly in `[min_pct, max_pct]` per attempt
    Rolled { min_pct: u32, max_pct: u32 },
}

impl Accuracy {
    pub fn is_certain(&self) -> bool {
        matches!(self, Accuracy::Certain)
    }

    /// Sample this attempt's accuracy percentage
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        match self {
            Accuracy::Certain => 100,
            Accuracy::Rolled { min_pct, max_pct } => rng.gen_range(*min_pct..=*max_pct),
        }
    }
}

/// A weapon record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Damage dealt on a hit
    pub damage: u32,
    /// AP charged per use, hit or miss
    pub ap_cost: i32,
    pub accuracy: Accuracy,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32, ap_cost: i32, accuracy: Accuracy) -> Self {
        Self {
            name: name.into(),
            damage,
            ap_cost,
            accuracy,
        }
    }

    /// Hero's default melee weapon
    pub fn fists() -> Self {
        Self::new("Fists", 5, 3, Accuracy::Certain)
    }

    /// Hero's secondary melee weapon
    pub fn blade() -> Self {
        Self::new("Blade", 12, 3, Accuracy::Certain)
    }

    /// Rolled-accuracy sidearm
    pub fn pistol() -> Self {
        Self::new(
            "Pistol",
            10,
            4,
            Accuracy::Rolled {
                min_pct: 60,
                max_pct: 85,
            },
        )
    }

    /// Natural melee attack for hostile kinds (fixed damage, cost 3)
    pub fn punch(name: impl Into<String>, damage: u32) -> Self {
        Self::new(name, damage, 3, Accuracy::Certain)
    }
}

/// Which of the hero's two held weapons is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeaponSlot {
    #[default]
    Primary,
    Secondary,
}

impl WeaponSlot {
    pub fn other(&self) -> Self {
        match self {
            WeaponSlot::Primary => WeaponSlot::Secondary,
            WeaponSlot::Secondary => WeaponSlot::Primary,
        }
    }
}
