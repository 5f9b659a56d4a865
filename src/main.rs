use bevy::prelude::*;

mod core;
mod physics;
mod player;
mod world;

use crate::{core::CorePlugin, physics::PhysicsPlugin, player::PlayerPlugin, world::WorldPlugin};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Ladder Runner".into(),
                    ..default()
                }),
                ..default()
            }),
            CorePlugin,
            PhysicsPlugin,
            WorldPlugin,
            PlayerPlugin,
        ))
        .run();
}
