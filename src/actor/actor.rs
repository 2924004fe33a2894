//! Actor records: health, action points and fight-mode
//!
//! The AP ledger deliberately lets current AP go negative: callers treat
//! `ap <= 0` as the exhaustion signal and stop issuing actions until the
//! next refresh, which resets to max and discards the deficit.

use serde::{Deserialize, Serialize};

use crate::actor::kind::{ActorKind, ActorRole};
use crate::actor::weapon::{Weapon, WeaponSlot};
use crate::core::types::ActorId;

/// One hero or hostile in the encounter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub role: ActorRole,
    /// Health points, clamped at 0 (0 = dead)
    pub hp: u32,
    pub max_hp: u32,
    /// Current AP; may go transiently negative, see module docs
    pub ap: i32,
    pub max_ap: i32,
    /// Sticky engagement flag; one-way for the encounter
    pub fight_mode: bool,
    /// Aggression radius in manhattan tiles (hostiles only)
    pub battle_radius: u32,
    /// Owned weapons; the hero holds two, hostiles one
    weapons: Vec<Weapon>,
    active_slot: WeaponSlot,
}

impl Actor {
    /// The hero, holding a primary/secondary weapon pair
    pub fn hero(id: impl Into<ActorId>, hp: u32, primary: Weapon, secondary: Weapon) -> Self {
        let kind = ActorKind::Hero;
        Self {
            id: id.into(),
            kind,
            role: kind.role(),
            hp,
            max_hp: hp,
            ap: kind.max_action_points(),
            max_ap: kind.max_action_points(),
            fight_mode: false,
            battle_radius: 0,
            weapons: vec![primary, secondary],
            active_slot: WeaponSlot::Primary,
        }
    }

    /// A hostile of the given kind with its innate weapon and radius
    pub fn hostile(id: impl Into<ActorId>, kind: ActorKind, hp: u32) -> Self {
        Self {
            id: id.into(),
            kind,
            role: kind.role(),
            hp,
            max_hp: hp,
            ap: kind.max_action_points(),
            max_ap: kind.max_action_points(),
            fight_mode: false,
            battle_radius: kind.battle_radius(),
            weapons: vec![kind.natural_weapon()],
            active_slot: WeaponSlot::Primary,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// AP exhausted; the actor stops acting until refresh
    pub fn is_exhausted(&self) -> bool {
        self.ap <= 0
    }

    /// Subtract `cost` from current AP, without clamping at zero
    pub fn charge_action_points(&mut self, cost: i32) {
        self.ap -= cost;
    }

    /// Reset AP to max exactly, discarding any negative overflow
    pub fn refresh_action_points(&mut self) {
        self.ap = self.max_ap;
    }

    /// Drain AP to zero (degraded planning fallback)
    pub fn drain_action_points(&mut self) {
        self.ap = 0;
    }

    /// Apply damage, saturating at 0. Returns true if the actor died.
    ///
    /// Removal from the registry is the caller's responsibility.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp == 0
    }

    /// Set fight-mode; never cleared again during the encounter
    pub fn engage(&mut self) {
        self.fight_mode = true;
    }

    pub fn active_weapon(&self) -> &Weapon {
        match self.active_slot {
            WeaponSlot::Primary => &self.weapons[0],
            WeaponSlot::Secondary => self.weapons.get(1).unwrap_or(&self.weapons[0]),
        }
    }

    /// Toggle between the two held weapons. Free and instantaneous.
    ///
    /// A single-weapon actor keeps its only weapon active.
    pub fn switch_weapon(&mut self) {
        if self.weapons.len() > 1 {
            self.active_slot = self.active_slot.other();
        }
    }

    pub fn active_weapon_name(&self) -> &str {
        &self.active_weapon().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_allows_negative_ap() {
        let mut hero = Actor::hero("hero", 20, Weapon::fists(), Weapon::blade());
        hero.ap = 1;
        hero.charge_action_points(4);
        assert_eq!(hero.ap, -3);
        assert!(hero.is_exhausted());
    }

    #[test]
    fn test_refresh_discards_negative_overflow() {
        let mut hero = Actor::hero("hero", 20, Weapon::fists(), Weapon::blade());
        hero.ap = -3;
        hero.refresh_action_points();
        assert_eq!(hero.ap, hero.max_ap);
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut ghoul = Actor::hostile("ghoul1", ActorKind::Ghoul, 4);
        assert!(ghoul.apply_damage(10));
        assert_eq!(ghoul.hp, 0);
        assert!(!ghoul.is_alive());
    }

    #[test]
    fn test_weapon_switch_toggles_pair() {
        let mut hero = Actor::hero("hero", 20, Weapon::fists(), Weapon::blade());
        assert_eq!(hero.active_weapon_name(), "Fists");
        hero.switch_weapon();
        assert_eq!(hero.active_weapon_name(), "Blade");
        hero.switch_weapon();
        assert_eq!(hero.active_weapon_name(), "Fists");
    }

    #[test]
    fn test_hostile_single_weapon_switch_is_noop() {
        let mut scorpion = Actor::hostile("scorpion1", ActorKind::Scorpion, 15);
        scorpion.switch_weapon();
        assert_eq!(scorpion.active_weapon_name(), "Stinger");
    }

    #[test]
    fn test_fight_mode_is_sticky() {
        let mut scorpion = Actor::hostile("scorpion1", ActorKind::Scorpion, 15);
        assert!(!scorpion.fight_mode);
        scorpion.engage();
        scorpion.refresh_action_points();
        scorpion.charge_action_points(3);
        assert!(scorpion.fight_mode);
    }
}
