//! Registers rapier and copies character-controller results back onto the bodies.
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::KinematicBody;

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(
                PostUpdate,
                sync_grounded_from_controller.after(PhysicsSet::Writeback),
            );
    }
}

/// Only bodies whose controller resolved a move this frame are touched, so a direct
/// translation or a respawn leaves the flag as it was.
pub fn sync_grounded_from_controller(
    mut bodies: Query<
        (&KinematicCharacterControllerOutput, &mut KinematicBody),
        Changed<KinematicCharacterControllerOutput>,
    >,
) {
    for (output, mut body) in bodies.iter_mut() {
        if body.grounded != output.grounded {
            trace!("Character grounded -> {}", output.grounded);
            body.grounded = output.grounded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_output_updates_grounded_flag() {
        let mut app = App::new();
        app.add_systems(Update, sync_grounded_from_controller);
        let body = app
            .world_mut()
            .spawn((
                KinematicBody::default(),
                KinematicCharacterControllerOutput {
                    grounded: true,
                    ..default()
                },
            ))
            .id();

        app.update();
        assert!(app.world().get::<KinematicBody>(body).is_some_and(|b| b.grounded));

        // Unchanged output does not overwrite a flag reset elsewhere.
        if let Some(mut kinematic) = app.world_mut().get_mut::<KinematicBody>(body) {
            kinematic.grounded = false;
        }
        app.update();
        assert!(!app.world().get::<KinematicBody>(body).is_some_and(|b| b.grounded));
    }
}
