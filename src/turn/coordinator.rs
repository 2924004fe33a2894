//! Turn / AP coordinator
//!
//! Consumes step lifecycle events from the positioning service, keeps the
//! AP ledger, and drives the engagement detector, enemy planner and
//! attack resolver. There is no hard turn queue: alternation emerges from
//! two refresh rules — all hostiles exhausting refreshes the hero, and
//! the hero exhausting while all hostiles are spent refreshes them.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ahash::AHashMap;

use crate::actor::actor::Actor;
use crate::actor::kind::ActorRole;
use crate::actor::registry::ActorRegistry;
use crate::combat::resolver::{resolve_attack, AttackOutcome};
use crate::core::config::EncounterConfig;
use crate::core::error::{AshfallError, Result};
use crate::core::types::{ActorId, Tick, TilePoint};
use crate::engagement::detector::{engage_all, evaluate_engagement};
use crate::engagement::planner::{plan_approach, Directive};
use crate::grid::events::{StepEvent, StepPhase};
use crate::grid::service::PositioningService;
use crate::turn::events::{EncounterEventKind, EncounterLog};
use crate::turn::wander::WanderRoster;

/// Derived per-actor turn state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Moving,
    Exhausted,
    Dead,
}

/// Owns the registry and orchestrates one encounter
pub struct Coordinator {
    registry: ActorRegistry,
    config: EncounterConfig,
    wander: WanderRoster,
    log: EncounterLog,
    rng: ChaCha8Rng,
    tick: Tick,
    /// Hero tile last observed from step events; planning fallback when
    /// the positioning service momentarily cannot resolve the hero
    last_hero_tile: Option<TilePoint>,
    /// Planner tile assignments, re-issued on hostile step completion
    assignments: AHashMap<ActorId, TilePoint>,
}

impl Coordinator {
    pub fn new(config: EncounterConfig, seed: u64) -> Self {
        Self {
            registry: ActorRegistry::new(),
            config,
            wander: WanderRoster::new(),
            log: EncounterLog::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick: 0,
            last_hero_tile: None,
            assignments: AHashMap::new(),
        }
    }

    // --- setup -----------------------------------------------------------

    pub fn spawn_hero(&mut self, hero: Actor) -> Result<()> {
        self.registry.insert(hero)
    }

    /// Register a hostile and arm its idle wander timer around `anchor`
    /// (its spawn tile)
    pub fn spawn_hostile(&mut self, hostile: Actor, anchor: TilePoint) -> Result<()> {
        let id = hostile.id.clone();
        self.registry.insert(hostile)?;
        self.wander
            .arm(id, anchor, self.tick, &self.config, &mut self.rng);
        Ok(())
    }

    // --- read-only surface (presentation layer) --------------------------

    pub fn registry(&self) -> &ActorRegistry {
        &self.registry
    }

    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.registry.get(id)
    }

    pub fn hero(&self) -> Option<&Actor> {
        self.registry.hero()
    }

    pub fn log(&self) -> &EncounterLog {
        &self.log
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn turn_state<P: PositioningService>(&self, grid: &P, id: &ActorId) -> TurnState {
        let Some(actor) = self.registry.get(id) else {
            return TurnState::Dead;
        };
        if !actor.is_alive() {
            TurnState::Dead
        } else if actor.is_exhausted() {
            TurnState::Exhausted
        } else if grid.is_moving(id) {
            TurnState::Moving
        } else {
            TurnState::Idle
        }
    }

    // --- hero commands ----------------------------------------------------

    /// Toggle the hero's active weapon. Free, no cooldown, any time.
    pub fn switch_weapon(&mut self) -> Result<()> {
        let hero = self.registry.hero_mut().ok_or(AshfallError::MissingHero)?;
        hero.switch_weapon();
        Ok(())
    }

    /// Command the hero toward a destination tile
    ///
    /// Refused while exhausted; the AP ledger is charged per step as the
    /// positioning service reports step-begin events.
    pub fn command_hero_move<P: PositioningService>(
        &mut self,
        grid: &mut P,
        dest: TilePoint,
    ) -> Result<()> {
        let hero = self.registry.hero().ok_or(AshfallError::MissingHero)?;
        if hero.is_exhausted() {
            return Ok(());
        }
        let id = hero.id.clone();
        grid.move_to(&id, dest);
        Ok(())
    }

    /// Hero attacks a hostile with the active weapon
    ///
    /// The coordinator is the caller in the resolver's contract: it
    /// verifies registry membership and exact cardinal adjacency before
    /// resolution.
    pub fn hero_attack<P: PositioningService>(
        &mut self,
        grid: &mut P,
        target: &ActorId,
    ) -> Result<AttackOutcome> {
        let hero = self.registry.hero().ok_or(AshfallError::MissingHero)?;
        if !self.registry.contains(target) {
            return Err(AshfallError::ActorNotFound(target.clone()));
        }
        if !hero.fight_mode {
            return Ok(AttackOutcome::NotEngaged);
        }
        if hero.is_exhausted() {
            return Ok(AttackOutcome::Exhausted);
        }
        let hero_id = hero.id.clone();
        let (Some(hero_pos), Some(target_pos)) =
            (grid.position(&hero_id), grid.position(target))
        else {
            return Ok(AttackOutcome::OutOfLine);
        };
        if hero_pos.manhattan_distance(&target_pos) != 1 {
            return Ok(AttackOutcome::OutOfLine);
        }

        let (hero, defender) = self
            .registry
            .pair_mut(&hero_id, target)
            .ok_or_else(|| AshfallError::ActorNotFound(target.clone()))?;
        let outcome = resolve_attack(hero, defender, hero_pos, target_pos, &mut self.rng);
        self.record_attack(&hero_id, target, &outcome);
        if let AttackOutcome::Hit {
            defender_died: true,
            ..
        } = outcome
        {
            self.bury(grid, &target.clone());
            self.try_hero_refresh();
        }
        // The attack cost itself can cross the exhaustion boundary.
        if self.registry.hero().map(|h| h.is_exhausted()).unwrap_or(false) {
            self.on_exhaustion_edge(ActorRole::Hero);
        }
        Ok(outcome)
    }

    // --- event intake -----------------------------------------------------

    /// Advance one tick: fire due wander timers for idle hostiles
    pub fn tick<P: PositioningService>(&mut self, grid: &mut P) {
        self.tick += 1;
        for id in self.registry.hostile_ids() {
            let idle = self
                .registry
                .get(&id)
                .map(|h| !h.fight_mode && h.is_alive())
                .unwrap_or(false);
            if !idle {
                continue;
            }
            if let Some(dest) = self.wander.poll(&id, self.tick, &self.config, &mut self.rng) {
                tracing::debug!(hostile = %id, ?dest, "wander move");
                grid.move_to(&id, dest);
            }
        }
    }

    /// Feed one step lifecycle event from the positioning service
    ///
    /// Events for actors no longer in the registry are dropped: death
    /// removal wins over any in-flight movement.
    pub fn handle_step_event<P: PositioningService>(&mut self, grid: &mut P, event: &StepEvent) {
        if !self.registry.contains(&event.actor) {
            return;
        }
        match event.phase {
            StepPhase::Begin => self.on_step_begin(grid, event),
            StepPhase::End => self.on_step_end(grid, event),
        }
    }

    fn on_step_begin<P: PositioningService>(&mut self, grid: &mut P, event: &StepEvent) {
        let step_cost = self.config.step_cost;
        let Some(actor) = self.registry.get_mut(&event.actor) else {
            return;
        };
        if actor.is_exhausted() {
            // Halted actors must not keep walking; re-issue the stop.
            grid.stop_movement(&event.actor);
            return;
        }
        actor.charge_action_points(step_cost);
        let exhausted_now = actor.is_exhausted();
        let role = actor.role;
        if exhausted_now {
            grid.stop_movement(&event.actor);
            self.log
                .push(EncounterEventKind::MovementHalted { actor: event.actor.clone() }, self.tick);
            tracing::debug!(actor = %event.actor, "AP exhausted, movement halted mid-step");
            self.on_exhaustion_edge(role);
        }
    }

    fn on_step_end<P: PositioningService>(&mut self, grid: &mut P, event: &StepEvent) {
        let Some(actor) = self.registry.get(&event.actor) else {
            return;
        };
        match actor.role {
            ActorRole::Hero => {
                self.last_hero_tile = Some(event.enter_tile);
                if evaluate_engagement(&self.registry, grid) {
                    self.engage();
                    self.run_planner(grid);
                }
            }
            ActorRole::Hostile => self.on_hostile_step_end(grid, event),
        }
    }

    fn on_hostile_step_end<P: PositioningService>(&mut self, grid: &mut P, event: &StepEvent) {
        let id = event.actor.clone();
        let ready = self
            .registry
            .get(&id)
            .map(|h| h.fight_mode && !h.is_exhausted())
            .unwrap_or(false);
        if !ready {
            return;
        }
        let hero_pos = self
            .registry
            .hero_id()
            .and_then(|hid| grid.position(&hid))
            .or(self.last_hero_tile);
        let (Some(hero_pos), Some(pos)) = (hero_pos, grid.position(&id)) else {
            return;
        };
        if pos.is_cardinally_adjacent(&hero_pos) {
            // Reaching adjacency completes the approach, even mid-path.
            grid.stop_movement(&id);
            self.hostile_attack_hero(grid, &id);
        } else if !grid.is_moving(&id) {
            if let Some(&dest) = self.assignments.get(&id) {
                grid.move_to(&id, dest);
            }
        }
    }

    // --- engagement -------------------------------------------------------

    fn engage(&mut self) {
        let already = self.registry.hero().map(|h| h.fight_mode).unwrap_or(false)
            && self.registry.hostiles().all(|h| h.fight_mode);
        if already {
            return;
        }
        engage_all(&mut self.registry);
        for id in self.registry.hostile_ids() {
            self.wander.clear(&id);
        }
        self.log.push(EncounterEventKind::FightModeEngaged, self.tick);
        tracing::info!("fight mode engaged");
    }

    fn run_planner<P: PositioningService>(&mut self, grid: &mut P) {
        let plan = plan_approach(&self.registry, grid, self.last_hero_tile);
        if plan.degraded {
            self.log.push(EncounterEventKind::PlanningDegraded, self.tick);
        }
        for (id, directive) in plan.directives {
            // Standing wander timers are cleared before any redirection.
            self.wander.clear(&id);
            match directive {
                Directive::Attack => {
                    self.hostile_attack_hero(grid, &id);
                }
                Directive::AttackAndDrain => {
                    self.hostile_attack_hero(grid, &id);
                    if let Some(h) = self.registry.get_mut(&id) {
                        h.drain_action_points();
                    }
                    grid.stop_movement(&id);
                }
                Directive::MoveTo(tile) => {
                    self.assignments.insert(id.clone(), tile);
                    grid.move_to(&id, tile);
                }
                Directive::Hold => {}
                Directive::Drain => {
                    if let Some(h) = self.registry.get_mut(&id) {
                        h.drain_action_points();
                    }
                    grid.stop_movement(&id);
                }
            }
        }
    }

    // --- attack execution -------------------------------------------------

    fn hostile_attack_hero<P: PositioningService>(&mut self, grid: &mut P, id: &ActorId) {
        let Some(hero_id) = self.registry.hero_id() else {
            return;
        };
        let hero_pos = grid.position(&hero_id).or(self.last_hero_tile);
        let (Some(hero_pos), Some(pos)) = (hero_pos, grid.position(id)) else {
            return;
        };
        let Some((attacker, hero)) = self.registry.pair_mut(id, &hero_id) else {
            return;
        };
        let outcome = resolve_attack(attacker, hero, pos, hero_pos, &mut self.rng);
        let attacker_exhausted = attacker.is_exhausted();
        self.record_attack(&id.clone(), &hero_id, &outcome);
        match outcome {
            AttackOutcome::Hit {
                defender_died: true,
                ..
            } => {
                self.bury(grid, &hero_id);
            }
            AttackOutcome::Hit { .. } | AttackOutcome::Miss { .. } => {
                // Being attacked restores the hero's turn budget; this is
                // the encounter's pacing mechanism, not a bug.
                if let Some(hero) = self.registry.hero_mut() {
                    hero.refresh_action_points();
                    self.log.push(
                        EncounterEventKind::ActionPointsRefreshed { actor: hero_id },
                        self.tick,
                    );
                }
            }
            _ => {}
        }
        if attacker_exhausted {
            self.on_exhaustion_edge(ActorRole::Hostile);
        }
    }

    fn record_attack(&mut self, attacker: &ActorId, defender: &ActorId, outcome: &AttackOutcome) {
        match outcome {
            AttackOutcome::Hit { damage, .. } => self.log.push(
                EncounterEventKind::AttackResolved {
                    attacker: attacker.clone(),
                    defender: defender.clone(),
                    damage: *damage,
                    hit: true,
                },
                self.tick,
            ),
            AttackOutcome::Miss { .. } => self.log.push(
                EncounterEventKind::AttackResolved {
                    attacker: attacker.clone(),
                    defender: defender.clone(),
                    damage: 0,
                    hit: false,
                },
                self.tick,
            ),
            _ => {}
        }
    }

    /// Remove a dead actor and notify the presentation layer
    fn bury<P: PositioningService>(&mut self, grid: &mut P, id: &ActorId) {
        grid.stop_movement(id);
        self.wander.clear(id);
        self.assignments.remove(id);
        if self.registry.remove(id).is_some() {
            self.log
                .push(EncounterEventKind::ActorDied { actor: id.clone() }, self.tick);
            tracing::info!(actor = %id, "actor died");
        }
    }

    // --- AP refresh cycle -------------------------------------------------

    fn all_hostiles_exhausted(&self) -> bool {
        let mut any = false;
        for hostile in self.registry.hostiles() {
            any = true;
            if !hostile.is_exhausted() {
                return false;
            }
        }
        any
    }

    /// React to an actor newly crossing into exhaustion
    ///
    /// Full scan each time; the two refresh rules fire on condition
    /// edges, never once per already-exhausted actor.
    fn on_exhaustion_edge(&mut self, role: ActorRole) {
        match role {
            ActorRole::Hostile => {
                if self.all_hostiles_exhausted() {
                    let hero_was_exhausted =
                        self.registry.hero().map(|h| h.is_exhausted()).unwrap_or(false);
                    // Skip when the pacing refresh already topped the hero up.
                    if self.registry.hero().map(|h| h.ap < h.max_ap).unwrap_or(false) {
                        self.refresh_hero();
                    }
                    if hero_was_exhausted {
                        self.refresh_hostiles();
                    }
                }
            }
            ActorRole::Hero => {
                if self.all_hostiles_exhausted() {
                    self.refresh_hostiles();
                }
            }
        }
    }

    /// Hostile death can complete the all-exhausted condition
    fn try_hero_refresh(&mut self) {
        if self.all_hostiles_exhausted() {
            let stale = self.registry.hero().map(|h| h.ap < h.max_ap).unwrap_or(false);
            if stale {
                self.refresh_hero();
            }
        }
    }

    fn refresh_hero(&mut self) {
        let Some(hero) = self.registry.hero_mut() else {
            return;
        };
        hero.refresh_action_points();
        let id = hero.id.clone();
        self.log
            .push(EncounterEventKind::ActionPointsRefreshed { actor: id.clone() }, self.tick);
        tracing::debug!(actor = %id, "hero AP refreshed");
    }

    fn refresh_hostiles(&mut self) {
        for id in self.registry.hostile_ids() {
            if let Some(hostile) = self.registry.get_mut(&id) {
                hostile.refresh_action_points();
            }
            self.log
                .push(EncounterEventKind::ActionPointsRefreshed { actor: id }, self.tick);
        }
        tracing::debug!("hostile AP refreshed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::kind::ActorKind;
    use crate::actor::weapon::Weapon;
    use crate::grid::memory::MemoryGrid;

    fn coordinator_with_grid() -> (Coordinator, MemoryGrid) {
        let mut coordinator = Coordinator::new(EncounterConfig::default(), 7);
        let mut grid = MemoryGrid::new();
        coordinator
            .spawn_hero(Actor::hero("hero", 20, Weapon::fists(), Weapon::blade()))
            .unwrap();
        grid.place("hero", TilePoint::new(5, 5));
        (coordinator, grid)
    }

    fn add_scorpion(coordinator: &mut Coordinator, grid: &mut MemoryGrid, id: &str, at: TilePoint) {
        coordinator
            .spawn_hostile(Actor::hostile(id, ActorKind::Scorpion, 15), at)
            .unwrap();
        grid.place(id, at);
    }

    #[test]
    fn test_step_begin_charges_one_ap() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        let event = StepEvent::begin("hero", TilePoint::new(5, 5), TilePoint::new(6, 5));
        coordinator.handle_step_event(&mut grid, &event);
        assert_eq!(coordinator.hero().unwrap().ap, 9);
    }

    #[test]
    fn test_tenth_step_halts_hero() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        grid.move_to(&"hero".into(), TilePoint::new(50, 5));
        for step in 0..10 {
            let from = TilePoint::new(5 + step, 5);
            let to = TilePoint::new(6 + step, 5);
            coordinator.handle_step_event(&mut grid, &StepEvent::begin("hero", from, to));
            coordinator.handle_step_event(&mut grid, &StepEvent::end("hero", from, to));
        }
        let hero = coordinator.hero().unwrap();
        assert_eq!(hero.ap, 0);
        assert!(!grid.is_moving(&"hero".into()));
        assert!(coordinator
            .log()
            .iter()
            .any(|e| matches!(e.kind, EncounterEventKind::MovementHalted { .. })));
    }

    #[test]
    fn test_hero_step_into_radius_engages_everyone() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        add_scorpion(&mut coordinator, &mut grid, "scorpion1", TilePoint::new(9, 7));
        // Distance from (5,5) is 6, exactly the scorpion radius.
        let event = StepEvent::end("hero", TilePoint::new(4, 5), TilePoint::new(5, 5));
        coordinator.handle_step_event(&mut grid, &event);
        assert!(coordinator.hero().unwrap().fight_mode);
        assert!(coordinator
            .actor(&"scorpion1".into())
            .unwrap()
            .fight_mode);
        assert!(coordinator
            .log()
            .iter()
            .any(|e| e.kind == EncounterEventKind::FightModeEngaged));
    }

    #[test]
    fn test_engagement_clears_wander_timers() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        add_scorpion(&mut coordinator, &mut grid, "scorpion1", TilePoint::new(9, 7));
        assert!(coordinator.wander.is_armed(&"scorpion1".into()));
        let event = StepEvent::end("hero", TilePoint::new(4, 5), TilePoint::new(5, 5));
        coordinator.handle_step_event(&mut grid, &event);
        assert!(!coordinator.wander.is_armed(&"scorpion1".into()));
    }

    #[test]
    fn test_hero_attack_requires_registry_membership() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        let missing: ActorId = "phantom".into();
        assert!(matches!(
            coordinator.hero_attack(&mut grid, &missing),
            Err(AshfallError::ActorNotFound(_))
        ));
    }

    #[test]
    fn test_hero_attack_diagonal_is_noop() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        add_scorpion(&mut coordinator, &mut grid, "scorpion1", TilePoint::new(6, 6));
        coordinator.registry.hero_mut().unwrap().engage();
        let outcome = coordinator
            .hero_attack(&mut grid, &"scorpion1".into())
            .unwrap();
        assert_eq!(outcome, AttackOutcome::OutOfLine);
        assert_eq!(coordinator.hero().unwrap().ap, 10);
        assert_eq!(coordinator.actor(&"scorpion1".into()).unwrap().hp, 15);
    }

    #[test]
    fn test_hero_kills_adjacent_hostile() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        add_scorpion(&mut coordinator, &mut grid, "scorpion1", TilePoint::new(5, 4));
        coordinator.registry.hero_mut().unwrap().engage();
        coordinator.switch_weapon().unwrap(); // blade, 12 damage
        coordinator.hero_attack(&mut grid, &"scorpion1".into()).unwrap();
        assert_eq!(coordinator.actor(&"scorpion1".into()).unwrap().hp, 3);
        let outcome = coordinator
            .hero_attack(&mut grid, &"scorpion1".into())
            .unwrap();
        assert!(matches!(
            outcome,
            AttackOutcome::Hit {
                defender_died: true,
                ..
            }
        ));
        assert!(!coordinator.registry().contains(&"scorpion1".into()));
        assert!(coordinator
            .log()
            .iter()
            .any(|e| matches!(e.kind, EncounterEventKind::ActorDied { .. })));
    }

    #[test]
    fn test_hostile_attack_refreshes_hero_ap() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        add_scorpion(&mut coordinator, &mut grid, "scorpion1", TilePoint::new(5, 4));
        coordinator.engage();
        coordinator.registry.hero_mut().unwrap().ap = 2;
        let event = StepEvent::end("scorpion1", TilePoint::new(5, 3), TilePoint::new(5, 4));
        coordinator.handle_step_event(&mut grid, &event);
        let hero = coordinator.hero().unwrap();
        assert_eq!(hero.hp, 17); // stinger, 3 damage
        assert_eq!(hero.ap, hero.max_ap); // refresh-on-being-attacked
    }

    #[test]
    fn test_all_hostiles_exhausted_refreshes_hero_once() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        for (i, at) in [(1, TilePoint::new(20, 5)), (2, TilePoint::new(22, 5)), (3, TilePoint::new(24, 5))] {
            add_scorpion(&mut coordinator, &mut grid, &format!("s{i}"), at);
        }
        coordinator.registry.hero_mut().unwrap().ap = 4;
        // Walk each scorpion until its 5 AP run out.
        for i in 1..=3 {
            let id = format!("s{i}");
            for step in 0..5 {
                let from = TilePoint::new(20 + step, 5);
                let to = TilePoint::new(19 + step, 5);
                coordinator.handle_step_event(&mut grid, &StepEvent::begin(id.as_str(), from, to));
            }
        }
        let hero = coordinator.hero().unwrap();
        assert_eq!(hero.ap, hero.max_ap);
        let hero_refreshes = coordinator
            .log()
            .iter()
            .filter(|e| {
                matches!(
                    &e.kind,
                    EncounterEventKind::ActionPointsRefreshed { actor } if actor.as_str() == "hero"
                )
            })
            .count();
        assert_eq!(hero_refreshes, 1);
    }

    #[test]
    fn test_hero_exhaustion_with_spent_hostiles_refreshes_hostiles() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        add_scorpion(&mut coordinator, &mut grid, "scorpion1", TilePoint::new(20, 5));
        coordinator
            .registry
            .get_mut(&"scorpion1".into())
            .unwrap()
            .drain_action_points();
        coordinator.registry.hero_mut().unwrap().ap = 1;
        let event = StepEvent::begin("hero", TilePoint::new(5, 5), TilePoint::new(6, 5));
        coordinator.handle_step_event(&mut grid, &event);
        let scorpion = coordinator.actor(&"scorpion1".into()).unwrap();
        assert_eq!(scorpion.ap, scorpion.max_ap);
    }

    #[test]
    fn test_wander_fires_only_outside_fight_mode() {
        let (mut coordinator, mut grid) = coordinator_with_grid();
        add_scorpion(&mut coordinator, &mut grid, "scorpion1", TilePoint::new(30, 30));
        let horizon =
            coordinator.config.wander_period_ticks * coordinator.config.wander_interval_max_periods;
        for _ in 0..horizon {
            coordinator.tick(&mut grid);
        }
        assert!(grid.is_moving(&"scorpion1".into()));

        // Engaged hostiles never wander.
        grid.stop_movement(&"scorpion1".into());
        coordinator.engage();
        for _ in 0..horizon {
            coordinator.tick(&mut grid);
        }
        assert!(!grid.is_moving(&"scorpion1".into()));
    }

    #[test]
    fn test_switch_weapon_without_hero_errors() {
        let mut coordinator = Coordinator::new(EncounterConfig::default(), 7);
        assert!(matches!(
            coordinator.switch_weapon(),
            Err(AshfallError::MissingHero)
        ));
    }
}
