//! Systems spawning the player and running its movement tick against the level.
use bevy::{color::palettes::css::RED, prelude::*};
use bevy_rapier2d::prelude::*;

use crate::{
    core::SimulationClock,
    physics::{character_body, solid_recovery_lift, KinematicBody, LevelCollider, LevelShape},
    player::{
        animation::PlayerAnimator,
        components::{Player, PlayerFacing, PlayerPose, PlayerSpawn},
        config::PlayerConfig,
        controller::{
            ClimbTransition, MovementMode, MovementState, PlayerBody, PlayerMovementController,
        },
        events::{ClimbStateChangedEvent, PlayerJumpedEvent},
        input::PlayerInput,
    },
    world::level::{KILL_HEIGHT, PLAYER_SPAWN},
};

/// Player box in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.0);
const PLAYER_Z: f32 = 1.0;

/// Body adapter: velocity moves go to rapier's character controller, which resolves
/// them against solids this frame; translations go straight to the transform.
struct CharacterRig<'a> {
    transform: &'a mut Transform,
    body: &'a KinematicBody,
    controller: &'a mut KinematicCharacterController,
    level: &'a [LevelShape<'a>],
}

impl PlayerBody for CharacterRig<'_> {
    fn is_grounded(&self) -> bool {
        self.body.grounded
    }

    fn origin(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn move_by(&mut self, delta: Vec3) {
        self.controller.translation = Some(delta.truncate());
    }

    fn translate(&mut self, delta: Vec3) {
        self.transform.translation += delta;

        let foot = self.origin() - Vec2::new(0.0, PLAYER_SIZE.y * 0.5);
        if let Some(lift) = solid_recovery_lift(self.level, foot) {
            trace!("Climb translation sank into a solid; lifting by {:.3}", lift);
            self.transform.translation.y += lift;
        }
    }
}

/// Spawns the player at the level's spawn point.
pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        PlayerSpawn {
            position: PLAYER_SPAWN,
        },
        Sprite::from_color(PlayerPose::Idle.tint(), PLAYER_SIZE),
        Transform::from_translation(PLAYER_SPAWN.extend(PLAYER_Z)),
        character_body(PLAYER_SIZE),
        MovementState::default(),
        PlayerFacing::default(),
        PlayerAnimator::default(),
        PlayerPose::default(),
        Name::new("Player"),
    ));
    info!("Player spawned at ({:.1}, {:.1})", PLAYER_SPAWN.x, PLAYER_SPAWN.y);
}

/// Runs one movement tick for every player.
#[allow(clippy::type_complexity)]
pub fn drive_player_movement(
    config: Res<PlayerConfig>,
    clock: Res<SimulationClock>,
    input: Res<PlayerInput>,
    colliders: Query<(&Transform, &Collider, &LevelCollider), Without<Player>>,
    mut players: Query<
        (
            Entity,
            &mut Transform,
            &KinematicBody,
            &mut KinematicCharacterController,
            &mut MovementState,
            &mut PlayerFacing,
            &mut PlayerAnimator,
        ),
        With<Player>,
    >,
    mut jumped_events: MessageWriter<PlayerJumpedEvent>,
    mut climb_events: MessageWriter<ClimbStateChangedEvent>,
) {
    let dt = clock.delta_seconds();

    let level: Vec<LevelShape> = colliders
        .iter()
        .map(|(transform, collider, level)| {
            LevelShape::new(transform, collider, level.category.collision_groups())
        })
        .collect();

    for (entity, mut transform, body, mut controller, mut state, mut facing, mut animator) in
        players.iter_mut()
    {
        let was_climbing = state.is_climbing();
        let mut rig = CharacterRig {
            transform: &mut transform,
            body,
            controller: &mut controller,
            level: &level,
        };
        let mut movement =
            PlayerMovementController::new(config.movement, &mut rig, &mut *facing, &mut *animator);
        let outcome = movement.update(&mut state, &level[..], input.tick_input(), dt);

        let position = transform.translation.truncate();
        if outcome.jumped {
            jumped_events.write(PlayerJumpedEvent {
                entity,
                position,
                from_ladder: was_climbing,
            });
        }
        if outcome.transition != ClimbTransition::None {
            climb_events.write(ClimbStateChangedEvent {
                entity,
                position,
                mode: state.mode,
            });
        }
    }
}

/// Puts a player that fell out of the level back at its spawn point.
pub fn respawn_fallen_player(
    mut players: Query<
        (
            &PlayerSpawn,
            &mut Transform,
            &mut KinematicBody,
            &mut KinematicCharacterController,
            &mut MovementState,
        ),
        With<Player>,
    >,
) {
    for (spawn, mut transform, mut body, mut controller, mut state) in players.iter_mut() {
        if transform.translation.y >= KILL_HEIGHT {
            continue;
        }
        info!(
            "Player fell below {:.1} at x = {:.1}; respawning",
            KILL_HEIGHT, transform.translation.x
        );
        transform.translation = spawn.position.extend(transform.translation.z);
        body.grounded = false;
        controller.translation = None;
        *state = MovementState::default();
    }
}

pub fn log_player_events(
    mut jumped: MessageReader<PlayerJumpedEvent>,
    mut climbs: MessageReader<ClimbStateChangedEvent>,
) {
    for event in jumped.read() {
        debug!(
            "Player {:?} jumped at ({:.2}, {:.2}){}",
            event.entity,
            event.position.x,
            event.position.y,
            if event.from_ladder { " off a ladder" } else { "" }
        );
    }
    for event in climbs.read() {
        let verb = match event.mode {
            MovementMode::Climbing => "grabbed",
            MovementMode::Free => "released",
        };
        debug!(
            "Player {:?} {} ladder at ({:.2}, {:.2})",
            event.entity, verb, event.position.x, event.position.y
        );
    }
}

/// Draws the ladder query radius around the player origin.
pub fn draw_overlap_gizmo(
    mut gizmos: Gizmos,
    config: Res<PlayerConfig>,
    players: Query<&Transform, With<Player>>,
) {
    if !config.draw_overlap_gizmo {
        return;
    }
    for transform in players.iter() {
        gizmos.circle_2d(
            Isometry2d::from_translation(transform.translation.truncate()),
            config.movement.overlap_radius,
            RED,
        );
    }
}
