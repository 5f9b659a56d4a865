//! Fixed level layout in world units. The ground's top edge sits at y = 0.
use bevy::prelude::*;

use crate::physics::ColliderCategory;

pub const PLAYER_SPAWN: Vec2 = Vec2::new(-12.0, 1.0);
/// Below this height the player is considered out of the level.
pub const KILL_HEIGHT: f32 = -10.0;

#[derive(Debug, Clone, Copy)]
pub struct LevelBlock {
    pub name: &'static str,
    pub center: Vec2,
    pub size: Vec2,
    pub category: ColliderCategory,
}

const fn solid(name: &'static str, center: Vec2, size: Vec2) -> LevelBlock {
    LevelBlock {
        name,
        center,
        size,
        category: ColliderCategory::Solid,
    }
}

const fn ladder(name: &'static str, center: Vec2, size: Vec2) -> LevelBlock {
    LevelBlock {
        name,
        center,
        size,
        category: ColliderCategory::Ladder,
    }
}

pub const LEVEL_BLOCKS: [LevelBlock; 9] = [
    solid("Ground", Vec2::new(0.0, -0.5), Vec2::new(42.0, 1.0)),
    solid("West Wall", Vec2::new(-20.5, 6.0), Vec2::new(1.0, 12.0)),
    solid("East Wall", Vec2::new(20.5, 6.0), Vec2::new(1.0, 12.0)),
    solid("Low Ledge", Vec2::new(6.0, 3.5), Vec2::new(6.0, 0.5)),
    solid("High Ledge", Vec2::new(-7.0, 6.0), Vec2::new(5.0, 0.5)),
    solid("Stepping Stone", Vec2::new(13.0, 1.25), Vec2::new(2.0, 0.5)),
    solid("Roof Beam", Vec2::new(0.0, 9.5), Vec2::new(6.0, 0.5)),
    ladder("Low Ladder", Vec2::new(2.5, 2.25), Vec2::new(1.0, 4.5)),
    ladder("High Ladder", Vec2::new(-4.0, 3.5), Vec2::new(1.0, 7.0)),
];

impl LevelBlock {
    pub fn color(&self) -> Color {
        match self.category {
            ColliderCategory::Solid => Color::srgb(0.32, 0.3, 0.36),
            ColliderCategory::Ladder => Color::srgba(0.65, 0.45, 0.2, 0.8),
        }
    }

    /// Ladders draw behind the player, solids in front of the backdrop.
    pub fn depth(&self) -> f32 {
        match self.category {
            ColliderCategory::Solid => 0.0,
            ColliderCategory::Ladder => 0.5,
        }
    }
}
