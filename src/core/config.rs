//! Encounter configuration with documented constants
//!
//! All tunable values for the turn/engagement core are collected here
//! with explanations of their purpose and how they interact.

/// Configuration for one encounter
///
/// These values reproduce the pacing of the reference map. Changing them
/// shifts how quickly turns alternate and how restless idle hostiles are.
#[derive(Debug, Clone)]
pub struct EncounterConfig {
    // === ACTION POINTS ===
    /// AP charged for every movement step, regardless of actor kind
    ///
    /// Charged on step-begin. An actor whose AP reaches zero or below
    /// mid-step is halted immediately and waits for the next refresh.
    pub step_cost: i32,

    // === WANDER BEHAVIOR ===
    /// Ticks per wander period
    ///
    /// Wander intervals are rolled in whole periods, so this is the
    /// granularity of idle movement cadence.
    pub wander_period_ticks: u64,

    /// Maximum wander interval, in periods
    ///
    /// Each time a wander timer is rearmed the interval is rolled
    /// uniformly in `1..=wander_interval_max_periods`.
    pub wander_interval_max_periods: u64,

    /// Maximum wander offset per axis, in tiles
    ///
    /// Idle hostiles drift to `anchor + (1..=radius, 1..=radius)`,
    /// keeping them loosely tethered to their spawn tile.
    pub wander_radius: i32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            step_cost: 1,
            wander_period_ticks: 10,
            wander_interval_max_periods: 5,
            wander_radius: 4,
        }
    }
}
