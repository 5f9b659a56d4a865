//! Components used by the world module.
use bevy::prelude::*;

/// 2D camera that trails the player.
#[derive(Component, Debug)]
pub struct FollowCamera {
    /// Exponential catch-up rate per second.
    pub stiffness: f32,
    pub offset: Vec2,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            stiffness: 6.0,
            offset: Vec2::new(0.0, 2.0),
        }
    }
}
