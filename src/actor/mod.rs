//! Combat data model: actors, weapons and the encounter registry

#[allow(clippy::module_inception)]
pub mod actor;
pub mod kind;
pub mod registry;
pub mod weapon;

pub use actor::Actor;
pub use kind::{ActorKind, ActorRole};
pub use registry::ActorRegistry;
pub use weapon::{Accuracy, Weapon, WeaponSlot};
