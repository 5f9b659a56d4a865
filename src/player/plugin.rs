//! Player plugin wiring input, the movement tick and presentation systems.
use bevy::prelude::*;

use crate::{
    core::ClockSet,
    player::{
        animation::apply_player_pose,
        config::PlayerConfig,
        events::{ClimbStateChangedEvent, PlayerJumpedEvent},
        input::{sample_player_input, PlayerInput},
        systems::{
            draw_overlap_gizmo, drive_player_movement, log_player_events, respawn_fallen_player,
            spawn_player,
        },
    },
    world::systems::spawn_level,
};

/// Systems that move the player; anything reading its transform this frame runs after.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerMovementSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        let config = PlayerConfig::load_or_default();
        info!(
            "Player movement: speed {:.1}, gravity {:.1}, jump {:.1}, ladder radius {:.2}",
            config.movement.move_speed,
            config.movement.gravity,
            config.movement.jump_height,
            config.movement.overlap_radius
        );

        app.insert_resource(config)
            .init_resource::<PlayerInput>()
            .add_message::<PlayerJumpedEvent>()
            .add_message::<ClimbStateChangedEvent>()
            .add_systems(Startup, spawn_player.after(spawn_level))
            .add_systems(
                Update,
                (
                    (
                        sample_player_input,
                        drive_player_movement,
                        respawn_fallen_player,
                    )
                        .chain()
                        .in_set(PlayerMovementSet),
                    (apply_player_pose, log_player_events, draw_overlap_gizmo)
                        .after(PlayerMovementSet),
                )
                    .after(ClockSet),
            );
    }
}
