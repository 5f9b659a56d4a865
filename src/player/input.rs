//! Keyboard sampling into smoothed movement axes and a jump edge.
use bevy::prelude::*;

use crate::core::SimulationClock;

use super::{
    config::{AxisSmoothing, PlayerConfig},
    controller::TickInput,
};

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const DOWN_KEYS: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const UP_KEYS: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const JUMP_KEY: KeyCode = KeyCode::Space;

/// Input for the current frame, refreshed before the movement tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    pub horizontal: f32,
    pub vertical: f32,
    pub jump_pressed: bool,
}

impl PlayerInput {
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            horizontal: self.horizontal,
            vertical: self.vertical,
            jump_pressed: self.jump_pressed,
        }
    }
}

/// Moves `current` toward the raw `target` axis value.
///
/// Held keys approach the target at `sensitivity` per second and released keys
/// return to rest at `gravity` per second. A rate of zero applies the change
/// instantly.
pub fn step_axis(current: f32, target: f32, smoothing: &AxisSmoothing, dt: f32) -> f32 {
    if smoothing.sensitivity <= 0.0 {
        return target;
    }

    let mut value = current;
    if smoothing.snap && target != 0.0 && value != 0.0 && target.signum() != value.signum() {
        value = 0.0;
    }

    let rate = if target != 0.0 {
        smoothing.sensitivity
    } else {
        smoothing.gravity
    };
    if rate <= 0.0 {
        return target;
    }

    move_towards(value, target, rate * dt).clamp(-1.0, 1.0)
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let difference = target - current;
    if difference.abs() <= max_delta {
        target
    } else {
        current + difference.signum() * max_delta
    }
}

fn raw_axis(
    keyboard: &ButtonInput<KeyCode>,
    negative: [KeyCode; 2],
    positive: [KeyCode; 2],
) -> f32 {
    let mut axis = 0.0;
    if keyboard.any_pressed(negative) {
        axis -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        axis += 1.0;
    }
    axis
}

/// Samples the keyboard into [`PlayerInput`].
pub fn sample_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<PlayerConfig>,
    clock: Res<SimulationClock>,
    mut input: ResMut<PlayerInput>,
) {
    let dt = clock.delta_seconds();
    let smoothing = config.input;

    let horizontal = raw_axis(&keyboard, LEFT_KEYS, RIGHT_KEYS);
    let vertical = raw_axis(&keyboard, DOWN_KEYS, UP_KEYS);

    input.horizontal = step_axis(input.horizontal, horizontal, &smoothing, dt);
    input.vertical = step_axis(input.vertical, vertical, &smoothing, dt);
    input.jump_pressed = keyboard.just_pressed(JUMP_KEY);
}
