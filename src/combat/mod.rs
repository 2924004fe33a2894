//! Attack resolution: facing classification, accuracy rolls and damage

pub mod facing;
pub mod resolver;

pub use facing::{classify_facing, Facing};
pub use resolver::{resolve_attack, AttackOutcome};
