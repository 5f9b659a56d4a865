//! Systems for the world module.
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::{
    core::SimulationClock,
    physics::{ColliderCategory, LevelCollider},
    player::components::Player,
    world::{components::FollowCamera, level::LEVEL_BLOCKS},
};

const PIXELS_PER_UNIT: f32 = 48.0;

/// Spawns the level geometry and the follow camera.
pub fn spawn_level(mut commands: Commands) {
    for block in LEVEL_BLOCKS.iter() {
        debug!("Spawning {} block '{}'", block.category, block.name);
        let mut entity = commands.spawn((
            Sprite::from_color(block.color(), block.size),
            Transform::from_translation(block.center.extend(block.depth())),
            LevelCollider::bundle(block.category, block.size),
            Name::new(block.name),
        ));
        if block.category == ColliderCategory::Ladder {
            entity.insert(Sensor);
        }
    }

    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 4.0, 10.0),
        FollowCamera::default(),
    ));

    info!("Level spawned with {} blocks", LEVEL_BLOCKS.len());
}

/// Eases the camera toward the player.
pub fn follow_player_camera(
    clock: Res<SimulationClock>,
    player: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };
    let dt = clock.delta_seconds();

    for (camera, mut transform) in cameras.iter_mut() {
        let target = player_transform.translation.truncate() + camera.offset;
        let blend = 1.0 - (-camera.stiffness * dt).exp();
        let current = transform.translation.truncate();
        let next = current.lerp(target, blend);
        transform.translation = next.extend(transform.translation.z);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn camera_moves_toward_player() {
        let mut clock = SimulationClock::default();
        clock.tick(Duration::from_millis(50));

        let mut app = App::new();
        app.insert_resource(clock)
            .add_systems(Update, follow_player_camera);
        app.world_mut()
            .spawn((Player, Transform::from_xyz(10.0, 0.0, 1.0)));
        let camera = app
            .world_mut()
            .spawn((FollowCamera::default(), Transform::from_xyz(0.0, 2.0, 10.0)))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(camera).copied().unwrap_or_default();
        assert!(transform.translation.x > 0.0 && transform.translation.x < 10.0);
        assert!((transform.translation.y - 2.0).abs() < 1e-5);
        assert_eq!(transform.translation.z, 10.0);
    }
}
