//! Rapier-backed collision host: typed level colliders, the character body and level queries.
pub mod collision;
pub mod components;
mod plugin;

pub use collision::{solid_recovery_lift, LevelShape};
pub use components::{character_body, CategoryMask, ColliderCategory, KinematicBody, LevelCollider};
pub use plugin::PhysicsPlugin;
