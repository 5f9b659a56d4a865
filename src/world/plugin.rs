//! WorldPlugin spawns the level and keeps the camera on the player.
use bevy::prelude::*;

use crate::{
    player::plugin::PlayerMovementSet,
    world::systems::{follow_player_camera, spawn_level},
};

const BACKDROP: Color = Color::srgb(0.1, 0.11, 0.15);

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKDROP))
            .add_systems(Startup, spawn_level)
            .add_systems(Update, follow_player_camera.after(PlayerMovementSet));
    }
}
