//! Core module hosting the simulation clock.
pub mod plugin;

pub use plugin::{ClockSet, CorePlugin, SimulationClock};
