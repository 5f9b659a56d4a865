//! Player movement events broadcast to other systems.
use bevy::prelude::*;

use super::controller::MovementMode;

/// Fired on the tick a jump starts.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct PlayerJumpedEvent {
    pub entity: Entity,
    pub position: Vec2,
    pub from_ladder: bool,
}

/// Fired when the player grabs or lets go of a ladder.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct ClimbStateChangedEvent {
    pub entity: Entity,
    pub position: Vec2,
    pub mode: MovementMode,
}
