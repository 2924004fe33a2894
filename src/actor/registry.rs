//! Insertion-ordered actor registry
//!
//! The registry is owned by the turn coordinator and is the sole place
//! actors are inserted (on spawn) or removed (on death). Iteration order
//! is insertion order; that ordering is the only tie-break guarantee the
//! planner offers between equally-distant hostiles.

use ahash::AHashMap;

use crate::actor::actor::Actor;
use crate::actor::kind::ActorRole;
use crate::core::error::{AshfallError, Result};
use crate::core::types::ActorId;

#[derive(Debug, Clone, Default)]
pub struct ActorRegistry {
    actors: Vec<Actor>,
    index: AHashMap<ActorId, usize>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, actor: Actor) -> Result<()> {
        if self.index.contains_key(&actor.id) {
            return Err(AshfallError::DuplicateActor(actor.id.clone()));
        }
        self.index.insert(actor.id.clone(), self.actors.len());
        self.actors.push(actor);
        Ok(())
    }

    /// Remove an actor (death). Preserves insertion order of the rest.
    pub fn remove(&mut self, id: &ActorId) -> Option<Actor> {
        let pos = self.index.remove(id)?;
        let actor = self.actors.remove(pos);
        for idx in self.index.values_mut() {
            if *idx > pos {
                *idx -= 1;
            }
        }
        Some(actor)
    }

    pub fn contains(&self, id: &ActorId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &ActorId) -> Option<&Actor> {
        self.index.get(id).map(|&i| &self.actors[i])
    }

    pub fn get_mut(&mut self, id: &ActorId) -> Option<&mut Actor> {
        let i = *self.index.get(id)?;
        Some(&mut self.actors[i])
    }

    pub fn hero(&self) -> Option<&Actor> {
        self.actors.iter().find(|a| a.role == ActorRole::Hero)
    }

    pub fn hero_mut(&mut self) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.role == ActorRole::Hero)
    }

    pub fn hero_id(&self) -> Option<ActorId> {
        self.hero().map(|h| h.id.clone())
    }

    /// Hostiles in insertion order
    pub fn hostiles(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.role == ActorRole::Hostile)
    }

    pub fn hostile_ids(&self) -> Vec<ActorId> {
        self.hostiles().map(|a| a.id.clone()).collect()
    }

    /// All actors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Mutable access to two distinct actors at once (attacker/defender)
    pub fn pair_mut(&mut self, a: &ActorId, b: &ActorId) -> Option<(&mut Actor, &mut Actor)> {
        let i = *self.index.get(a)?;
        let j = *self.index.get(b)?;
        if i == j {
            return None;
        }
        if i < j {
            let (left, right) = self.actors.split_at_mut(j);
            Some((&mut left[i], &mut right[0]))
        } else {
            let (left, right) = self.actors.split_at_mut(i);
            Some((&mut right[0], &mut left[j]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::kind::ActorKind;
    use crate::actor::weapon::Weapon;

    fn sample_registry() -> ActorRegistry {
        let mut registry = ActorRegistry::new();
        registry
            .insert(Actor::hero("hero", 20, Weapon::fists(), Weapon::blade()))
            .unwrap();
        registry
            .insert(Actor::hostile("scorpion1", ActorKind::Scorpion, 15))
            .unwrap();
        registry
            .insert(Actor::hostile("scorpion2", ActorKind::Scorpion, 15))
            .unwrap();
        registry
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut registry = sample_registry();
        let dup = Actor::hostile("scorpion1", ActorKind::Scorpion, 15);
        assert!(matches!(
            registry.insert(dup),
            Err(AshfallError::DuplicateActor(_))
        ));
    }

    #[test]
    fn test_hostiles_iterate_in_insertion_order() {
        let registry = sample_registry();
        let ids: Vec<_> = registry.hostiles().map(|a| a.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["scorpion1", "scorpion2"]);
    }

    #[test]
    fn test_remove_keeps_lookups_consistent() {
        let mut registry = sample_registry();
        registry.remove(&"scorpion1".into()).unwrap();
        assert!(!registry.contains(&"scorpion1".into()));
        assert_eq!(registry.get(&"scorpion2".into()).unwrap().id.as_str(), "scorpion2");
        assert_eq!(registry.hero().unwrap().id.as_str(), "hero");
    }

    #[test]
    fn test_pair_mut_distinct_actors() {
        let mut registry = sample_registry();
        let (a, b) = registry
            .pair_mut(&"scorpion2".into(), &"hero".into())
            .unwrap();
        assert_eq!(a.id.as_str(), "scorpion2");
        assert_eq!(b.id.as_str(), "hero");
    }

    #[test]
    fn test_pair_mut_same_actor_is_none() {
        let mut registry = sample_registry();
        assert!(registry.pair_mut(&"hero".into(), &"hero".into()).is_none());
    }
}
