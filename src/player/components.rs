//! Components identifying the player entity and its presentation state.
use bevy::prelude::*;

use super::controller::FacingSink;

/// Marker component identifying the controllable player.
#[derive(Component, Debug)]
pub struct Player;

/// Where the player is placed at startup and after falling out of the level.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerSpawn {
    pub position: Vec2,
}

/// Horizontal facing written by the movement tick; mirrored onto the sprite.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerFacing {
    pub flip_x: bool,
}

impl FacingSink for PlayerFacing {
    fn set_flip_x(&mut self, flip_x: bool) {
        self.flip_x = flip_x;
    }
}

/// Visual state chosen from the animation parameters each frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlayerPose {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Climb,
}
