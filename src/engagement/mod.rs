//! Engagement detection and enemy approach planning

pub mod detector;
pub mod planner;

pub use detector::{engage_all, evaluate_engagement, is_within_battle_radius};
pub use planner::{plan_approach, ApproachPlan, Directive};
