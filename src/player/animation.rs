//! Animation parameters written by the movement tick and the sprite pose derived from them.
use bevy::prelude::*;

use super::{
    components::{PlayerFacing, PlayerPose},
    controller::{AnimationSink, AnimatorParameter},
};

const CLIMB_HOLD_TINT: Color = Color::srgb(0.35, 0.7, 0.35);

/// Latest values of the animation parameters plus the one-shot jump trigger.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerAnimator {
    pub is_grounded: bool,
    pub jump_y: f32,
    pub is_running: bool,
    pub is_climbing: bool,
    pub climb_speed: f32,
    jump_triggered: bool,
}

impl PlayerAnimator {
    /// Returns the pending trigger and clears it.
    pub fn take_jump_trigger(&mut self) -> bool {
        std::mem::take(&mut self.jump_triggered)
    }
}

impl AnimationSink for PlayerAnimator {
    fn set_parameter(&mut self, parameter: AnimatorParameter) {
        match parameter {
            AnimatorParameter::IsGrounded(value) => self.is_grounded = value,
            AnimatorParameter::JumpY(value) => self.jump_y = value,
            AnimatorParameter::IsRunning(value) => self.is_running = value,
            AnimatorParameter::IsClimbing(value) => self.is_climbing = value,
            AnimatorParameter::ClimbSpeed(value) => self.climb_speed = value,
        }
    }

    fn trigger_jump(&mut self) {
        self.jump_triggered = true;
    }
}

impl PlayerPose {
    pub fn from_animator(animator: &PlayerAnimator, jump_triggered: bool) -> Self {
        if animator.is_climbing {
            Self::Climb
        } else if jump_triggered || (!animator.is_grounded && animator.jump_y > 0.0) {
            Self::Jump
        } else if !animator.is_grounded {
            Self::Fall
        } else if animator.is_running {
            Self::Run
        } else {
            Self::Idle
        }
    }

    pub fn tint(self) -> Color {
        match self {
            Self::Idle => Color::srgb(0.85, 0.85, 0.9),
            Self::Run => Color::srgb(0.55, 0.8, 1.0),
            Self::Jump => Color::srgb(1.0, 0.85, 0.35),
            Self::Fall => Color::srgb(1.0, 0.6, 0.3),
            Self::Climb => Color::srgb(0.5, 0.95, 0.5),
        }
    }
}

/// Resolves the pose for this frame, consumes the jump trigger and updates the sprite.
pub fn apply_player_pose(
    mut query: Query<(
        &mut PlayerAnimator,
        &PlayerFacing,
        &mut PlayerPose,
        &mut Sprite,
    )>,
) {
    for (mut animator, facing, mut pose, mut sprite) in query.iter_mut() {
        let jump_triggered = animator.take_jump_trigger();
        let next = PlayerPose::from_animator(&animator, jump_triggered);

        if *pose != next {
            debug!("Player pose {:?} -> {:?}", *pose, next);
            *pose = next;
        }

        // The climb cycle holds still while the player hangs on the ladder.
        let tint = if next == PlayerPose::Climb && animator.climb_speed == 0.0 {
            CLIMB_HOLD_TINT
        } else {
            next.tint()
        };
        if sprite.color != tint {
            sprite.color = tint;
        }

        if sprite.flip_x != facing.flip_x {
            sprite.flip_x = facing.flip_x;
        }
    }
}
