//! Autonomous wander timers for idle hostiles
//!
//! While NOT in fight-mode each hostile drifts around its spawn anchor on
//! a rolled cadence. The timer must be cancelled the instant fight-mode
//! engages, and before the planner redirects a hostile.

use ahash::AHashMap;
use rand::Rng;

use crate::core::config::EncounterConfig;
use crate::core::types::{ActorId, Tick, TilePoint};

#[derive(Debug, Clone)]
pub struct WanderTimer {
    /// Spawn tile the hostile stays tethered to
    pub anchor: TilePoint,
    /// Tick at which the next wander move fires
    pub due_at: Tick,
}

/// All standing wander timers, keyed by hostile id
///
/// Lookup-only map; callers drive iteration in registry order so rng
/// draws stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct WanderRoster {
    timers: AHashMap<ActorId, WanderTimer>,
}

impl WanderRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or rearm) a hostile's timer with a rolled interval
    pub fn arm(
        &mut self,
        id: ActorId,
        anchor: TilePoint,
        now: Tick,
        config: &EncounterConfig,
        rng: &mut impl Rng,
    ) {
        let periods = rng.gen_range(1..=config.wander_interval_max_periods);
        self.timers.insert(
            id,
            WanderTimer {
                anchor,
                due_at: now + periods * config.wander_period_ticks,
            },
        );
    }

    /// Cancel a hostile's timer, if any
    pub fn clear(&mut self, id: &ActorId) {
        self.timers.remove(id);
    }

    pub fn is_armed(&self, id: &ActorId) -> bool {
        self.timers.contains_key(id)
    }

    /// If the timer is due, roll a wander destination and rearm
    ///
    /// Returns the destination to command, or `None` when not due or not
    /// armed. Offsets are `1..=radius` per axis from the anchor.
    pub fn poll(
        &mut self,
        id: &ActorId,
        now: Tick,
        config: &EncounterConfig,
        rng: &mut impl Rng,
    ) -> Option<TilePoint> {
        let timer = self.timers.get(id)?;
        if now < timer.due_at {
            return None;
        }
        let anchor = timer.anchor;
        let dx = rng.gen_range(1..=config.wander_radius);
        let dy = rng.gen_range(1..=config.wander_radius);
        let dest = TilePoint::new(anchor.x + dx, anchor.y + dy);
        self.arm(id.clone(), anchor, now, config, rng);
        Some(dest)
    }
}
