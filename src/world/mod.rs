//! World module housing the level layout and camera.
pub mod components;
pub mod level;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
