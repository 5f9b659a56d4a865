use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use super::controller::MovementSettings;

const CONFIG_PATH: &str = "config/player.toml";
const MIN_OVERLAP_RADIUS: f32 = 0.001;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawPlayerConfig {
    #[serde(default)]
    movement: RawMovement,
    #[serde(default)]
    input: RawInput,
    #[serde(default)]
    debug: RawDebug,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMovement {
    move_speed: f32,
    gravity: f32,
    jump_height: f32,
    overlap_radius: f32,
}

impl Default for RawMovement {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            gravity: -10.0,
            jump_height: 7.0,
            overlap_radius: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawInput {
    axis_sensitivity: f32,
    axis_gravity: f32,
    snap: bool,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            axis_sensitivity: 3.0,
            axis_gravity: 3.0,
            snap: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawDebug {
    draw_overlap_gizmo: bool,
}

impl Default for RawDebug {
    fn default() -> Self {
        Self {
            draw_overlap_gizmo: true,
        }
    }
}

/// Runtime configuration derived from `config/player.toml`.
#[derive(Resource, Debug, Clone)]
pub struct PlayerConfig {
    pub movement: MovementSettings,
    pub input: AxisSmoothing,
    pub draw_overlap_gizmo: bool,
}

/// How fast the sampled axes follow the keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSmoothing {
    /// Units per second toward a held direction; zero means no smoothing.
    pub sensitivity: f32,
    /// Units per second back to rest once released.
    pub gravity: f32,
    pub snap: bool,
}

impl PlayerConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_or_default(&raw),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawPlayerConfig::default().into()
            }
        }
    }

    fn from_toml_or_default(raw: &str) -> Self {
        match toml::from_str::<RawPlayerConfig>(raw) {
            Ok(parsed) => parsed.into(),
            Err(err) => {
                warn!(
                    "Failed to parse {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawPlayerConfig::default().into()
            }
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        RawPlayerConfig::default().into()
    }
}

impl From<RawPlayerConfig> for PlayerConfig {
    fn from(value: RawPlayerConfig) -> Self {
        let movement = MovementSettings {
            move_speed: finite_or(value.movement.move_speed, 10.0).max(0.0),
            gravity: finite_or(value.movement.gravity, -10.0),
            jump_height: finite_or(value.movement.jump_height, 7.0).max(0.0),
            overlap_radius: finite_or(value.movement.overlap_radius, 0.1)
                .max(MIN_OVERLAP_RADIUS),
        };

        let input = AxisSmoothing {
            sensitivity: finite_or(value.input.axis_sensitivity, 0.0).max(0.0),
            gravity: finite_or(value.input.axis_gravity, 0.0).max(0.0),
            snap: value.input.snap,
        };

        Self {
            movement,
            input,
            draw_overlap_gizmo: value.debug.draw_overlap_gizmo,
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_movement_settings() {
        let config = PlayerConfig::default();
        assert_eq!(config.movement, MovementSettings::default());
        assert!(config.input.snap);
        assert!(config.draw_overlap_gizmo);
    }

    #[test]
    fn partial_file_keeps_unspecified_defaults() {
        let config = PlayerConfig::from_toml_or_default(
            r#"
            [movement]
            move_speed = 6.5

            [debug]
            draw_overlap_gizmo = false
            "#,
        );

        assert_eq!(config.movement.move_speed, 6.5);
        assert_eq!(config.movement.gravity, -10.0);
        assert_eq!(config.input.sensitivity, 3.0);
        assert!(!config.draw_overlap_gizmo);
    }

    #[test]
    fn out_of_range_values_are_sanitised() {
        let config = PlayerConfig::from_toml_or_default(
            r#"
            [movement]
            move_speed = -4.0
            jump_height = -1.0
            overlap_radius = 0.0

            [input]
            axis_sensitivity = -2.0
            "#,
        );

        assert_eq!(config.movement.move_speed, 0.0);
        assert_eq!(config.movement.jump_height, 0.0);
        assert_eq!(config.movement.overlap_radius, MIN_OVERLAP_RADIUS);
        assert_eq!(config.input.sensitivity, 0.0);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let config = PlayerConfig::from_toml_or_default("[movement\nmove_speed = ");
        assert_eq!(config.movement, MovementSettings::default());
    }
}
