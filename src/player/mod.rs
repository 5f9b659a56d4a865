//! Player module: movement controller, input sampling, animation pose and their ECS glue.

pub mod animation;
pub mod components;
pub mod config;
pub mod controller;
pub mod events;
pub mod input;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
