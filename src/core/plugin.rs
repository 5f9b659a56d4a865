//! CorePlugin owns the frame clock that every movement tick reads its delta from.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

/// Longest step handed to gameplay systems; a hitch longer than this is truncated
/// so a falling body cannot tunnel through a platform in a single move.
const MAX_STEP: Duration = Duration::from_millis(50);

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
    frames: u32,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
            frames: 0,
        }
    }
}

/// Clamped frame delta shared by the gameplay systems.
#[derive(Resource, Debug)]
pub struct SimulationClock {
    max_step: Duration,
    last_real_delta: Duration,
    last_step: Duration,
    elapsed: Duration,
}

impl SimulationClock {
    pub fn new(max_step: Duration) -> Self {
        Self {
            max_step,
            last_real_delta: Duration::ZERO,
            last_step: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn last_real_delta(&self) -> Duration {
        self.last_real_delta
    }

    /// Step in seconds, the `dt` of a movement tick.
    pub fn delta_seconds(&self) -> f32 {
        self.last_step.as_secs_f32()
    }

    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Applies a real delta, truncated to the maximum step.
    pub fn tick(&mut self, real_delta: Duration) {
        self.last_real_delta = real_delta;
        self.last_step = real_delta.min(self.max_step);
        self.elapsed += self.last_step;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(MAX_STEP)
    }
}

/// Registers the simulation clock and its tick system.
pub struct CorePlugin;

/// Systems that must see this frame's delta run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockSet;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Startup, log_startup_clock)
            .add_systems(Update, update_simulation_clock.in_set(ClockSet));

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_clock_ticks.after(ClockSet));
        }
    }
}

fn update_simulation_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_clock(clock: Res<SimulationClock>) {
    info!(
        "CorePlugin initialised with max step {:.3}s",
        clock.max_step.as_secs_f32()
    );
}

#[cfg(feature = "core_debug")]
fn log_clock_ticks(mut timer: ResMut<DebugTickTimer>, clock: Res<SimulationClock>) {
    timer.frames += 1;
    if timer.timer.tick(clock.last_real_delta()).just_finished() {
        info!(
            target: "core_debug",
            "Sim elapsed: {:.2}s | frames: {} | real dt: {:.4}s | step dt: {:.4}s",
            clock.elapsed().as_secs_f32(),
            timer.frames,
            clock.last_real_delta().as_secs_f32(),
            clock.delta_seconds(),
        );
        timer.frames = 0;
    }
}
