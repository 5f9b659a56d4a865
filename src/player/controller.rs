//! Per-tick player movement: running, gravity, jumping and ladder climbing.
//!
//! The controller owns no engine state. It reads and writes the world through the
//! collaborator traits below, which the ECS layer implements over components and
//! tests implement with recording fakes.
use std::fmt;

use bevy::prelude::*;

use crate::physics::CategoryMask;

/// Tuning values fixed for the lifetime of a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementSettings {
    pub move_speed: f32,
    /// Signed vertical acceleration; negative pulls the player down.
    pub gravity: f32,
    /// Vertical velocity applied on the tick a jump starts.
    pub jump_height: f32,
    /// Radius around the body origin searched for ladders.
    pub overlap_radius: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            gravity: -10.0,
            jump_height: 7.0,
            overlap_radius: 0.1,
        }
    }
}

/// Input sampled for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub horizontal: f32,
    pub vertical: f32,
    /// True only on the tick the jump button went down.
    pub jump_pressed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MovementMode {
    /// Grounded or airborne; moved through the body by velocity.
    #[default]
    Free,
    /// On a ladder; translated directly from input.
    Climbing,
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Free => "free",
            Self::Climbing => "climbing",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClimbTransition {
    #[default]
    None,
    Entered,
    Exited,
}

/// Result of applying the climb guards for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimbResolution {
    pub mode: MovementMode,
    pub transition: ClimbTransition,
    /// Set whenever the enter guard fires, including while already climbing.
    pub cancel_vertical_velocity: bool,
}

impl MovementMode {
    /// Enter guard: over a ladder with vertical input. Exit guard: not over a ladder.
    /// The exit guard is evaluated last and wins.
    pub fn resolve(self, over_ladder: bool, vertical: f32) -> ClimbResolution {
        let mut next = self;
        let mut cancel_vertical_velocity = false;

        if over_ladder && vertical != 0.0 {
            next = Self::Climbing;
            cancel_vertical_velocity = true;
        }
        if !over_ladder {
            next = Self::Free;
        }

        let transition = match (self, next) {
            (Self::Free, Self::Climbing) => ClimbTransition::Entered,
            (Self::Climbing, Self::Free) => ClimbTransition::Exited,
            _ => ClimbTransition::None,
        };

        ClimbResolution {
            mode: next,
            transition,
            cancel_vertical_velocity,
        }
    }
}

/// Movement state carried across ticks by the player entity.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementState {
    /// Per-axis speed; z is always zero in 2D.
    pub velocity: Vec3,
    pub mode: MovementMode,
}

impl MovementState {
    pub fn is_climbing(&self) -> bool {
        self.mode == MovementMode::Climbing
    }
}

/// Parameters pushed to the animation sink every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorParameter {
    IsGrounded(bool),
    JumpY(f32),
    IsRunning(bool),
    IsClimbing(bool),
    ClimbSpeed(f32),
}

impl AnimatorParameter {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IsGrounded(_) => "IsGrounded",
            Self::JumpY(_) => "JumpY",
            Self::IsRunning(_) => "IsRunning",
            Self::IsClimbing(_) => "IsClimbing",
            Self::ClimbSpeed(_) => "ClimbSpeed",
        }
    }
}

/// Kinematic body the controller drives.
pub trait PlayerBody {
    fn is_grounded(&self) -> bool;
    /// Point the ladder query is centred on.
    fn origin(&self) -> Vec2;
    /// Velocity-scaled move resolved against level geometry.
    fn move_by(&mut self, delta: Vec3);
    /// Direct translation that bypasses collision.
    fn translate(&mut self, delta: Vec3);
}

pub trait FacingSink {
    fn set_flip_x(&mut self, flip_x: bool);
}

pub trait AnimationSink {
    fn set_parameter(&mut self, parameter: AnimatorParameter);
    fn trigger_jump(&mut self);
}

/// Spatial query over the level's classified colliders.
pub trait OverlapQuery {
    /// True when any collider in `mask` lies within `radius` of `center`.
    fn any_overlap(&self, center: Vec2, radius: f32, mask: CategoryMask) -> bool;
}

impl<T: PlayerBody + ?Sized> PlayerBody for &mut T {
    fn is_grounded(&self) -> bool {
        (**self).is_grounded()
    }

    fn origin(&self) -> Vec2 {
        (**self).origin()
    }

    fn move_by(&mut self, delta: Vec3) {
        (**self).move_by(delta);
    }

    fn translate(&mut self, delta: Vec3) {
        (**self).translate(delta);
    }
}

impl<T: FacingSink + ?Sized> FacingSink for &mut T {
    fn set_flip_x(&mut self, flip_x: bool) {
        (**self).set_flip_x(flip_x);
    }
}

impl<T: AnimationSink + ?Sized> AnimationSink for &mut T {
    fn set_parameter(&mut self, parameter: AnimatorParameter) {
        (**self).set_parameter(parameter);
    }

    fn trigger_jump(&mut self) {
        (**self).trigger_jump();
    }
}

/// What happened during a tick, for event emission and logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub jumped: bool,
    pub over_ladder: bool,
    pub transition: ClimbTransition,
}

pub struct PlayerMovementController<B, F, A> {
    settings: MovementSettings,
    body: B,
    facing: F,
    animator: A,
}

impl<B, F, A> PlayerMovementController<B, F, A>
where
    B: PlayerBody,
    F: FacingSink,
    A: AnimationSink,
{
    pub fn new(settings: MovementSettings, body: B, facing: F, animator: A) -> Self {
        Self {
            settings,
            body,
            facing,
            animator,
        }
    }

    /// Runs one tick. The step order is observable and must not change: the
    /// gravity branch reads the climbing flag from the previous tick, and the
    /// climb guards run after it.
    pub fn update<O>(
        &mut self,
        state: &mut MovementState,
        overlaps: &O,
        input: TickInput,
        dt: f32,
    ) -> TickOutcome
    where
        O: OverlapQuery + ?Sized,
    {
        let jumped = self.apply_gravity_or_jump(state, input.jump_pressed, dt);

        self.animator
            .set_parameter(AnimatorParameter::IsGrounded(self.body.is_grounded()));
        self.animator
            .set_parameter(AnimatorParameter::JumpY(state.velocity.y));

        self.run(state, input.horizontal);
        let (over_ladder, transition) = self.climb(state, overlaps, input, dt);

        if !state.is_climbing() {
            self.body.move_by(state.velocity * dt);
        }

        TickOutcome {
            jumped,
            over_ladder,
            transition,
        }
    }

    fn apply_gravity_or_jump(
        &mut self,
        state: &mut MovementState,
        jump_pressed: bool,
        dt: f32,
    ) -> bool {
        if !self.body.is_grounded() && !state.is_climbing() {
            state.velocity.y += self.settings.gravity * dt;
            return false;
        }

        if jump_pressed {
            state.velocity.y = self.settings.jump_height;
            self.animator.trigger_jump();
            return true;
        }

        false
    }

    fn run(&mut self, state: &mut MovementState, horizontal: f32) {
        state.velocity.x = horizontal * self.settings.move_speed;

        let is_running = horizontal != 0.0;
        self.animator
            .set_parameter(AnimatorParameter::IsRunning(is_running));
        if is_running {
            self.facing.set_flip_x(horizontal < 0.0);
        }
    }

    fn climb<O>(
        &mut self,
        state: &mut MovementState,
        overlaps: &O,
        input: TickInput,
        dt: f32,
    ) -> (bool, ClimbTransition)
    where
        O: OverlapQuery + ?Sized,
    {
        let over_ladder = overlaps.any_overlap(
            self.body.origin(),
            self.settings.overlap_radius,
            CategoryMask::LADDER,
        );

        let resolution = state.mode.resolve(over_ladder, input.vertical);
        state.mode = resolution.mode;
        if resolution.cancel_vertical_velocity {
            state.velocity.y = 0.0;
        }

        if state.is_climbing() {
            let direction = Vec3::new(input.horizontal, input.vertical, 0.0);
            self.body
                .translate(direction * self.settings.move_speed * dt);
        }

        self.animator
            .set_parameter(AnimatorParameter::IsClimbing(state.is_climbing()));
        self.animator
            .set_parameter(AnimatorParameter::ClimbSpeed(input.vertical));

        (over_ladder, resolution.transition)
    }
}
