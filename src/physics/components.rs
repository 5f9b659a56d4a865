//! Collider classification mapped onto rapier collision groups, and the kinematic body state.
use std::fmt;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Collision group bits. Level categories get one bit each; the player body has its own.
const SOLID_GROUP: Group = Group::GROUP_1;
const LADDER_GROUP: Group = Group::GROUP_2;
const PLAYER_GROUP: Group = Group::GROUP_3;

/// Kind of level geometry a collider represents, fixed when the collider is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderCategory {
    /// Blocks kinematic movement.
    Solid,
    /// Climbable zone; never blocks movement.
    Ladder,
}

impl ColliderCategory {
    /// Solids interact with everything; ladders are sensors nothing collides with.
    pub fn collision_groups(self) -> CollisionGroups {
        match self {
            Self::Solid => CollisionGroups::new(SOLID_GROUP, Group::ALL),
            Self::Ladder => CollisionGroups::new(LADDER_GROUP, Group::NONE),
        }
    }
}

impl fmt::Display for ColliderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Solid => "solid",
            Self::Ladder => "ladder",
        };
        write!(f, "{}", label)
    }
}

/// Collision-group filter used by spatial queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMask(Group);

impl CategoryMask {
    pub const SOLID: Self = Self(SOLID_GROUP);
    pub const LADDER: Self = Self(LADDER_GROUP);

    pub fn group(self) -> Group {
        self.0
    }

    /// True when a collider in `groups` is a member of this mask.
    pub fn matches(self, groups: &CollisionGroups) -> bool {
        groups.memberships.intersects(self.0)
    }
}

/// Tags a piece of level geometry with its category.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCollider {
    pub category: ColliderCategory,
}

impl LevelCollider {
    /// Fixed box collider of `size` centred on the entity, filed under `category`.
    pub fn bundle(
        category: ColliderCategory,
        size: Vec2,
    ) -> (LevelCollider, RigidBody, Collider, CollisionGroups) {
        let half = size * 0.5;
        (
            LevelCollider { category },
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
            category.collision_groups(),
        )
    }
}

/// Grounded flag of a character body, copied from the last resolved controller move.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KinematicBody {
    pub grounded: bool,
}

/// Kinematic box body driven by rapier's character controller; it only collides with solids.
pub fn character_body(
    size: Vec2,
) -> (
    KinematicBody,
    RigidBody,
    Collider,
    CollisionGroups,
    KinematicCharacterController,
) {
    let half = size * 0.5;
    let groups = CollisionGroups::new(PLAYER_GROUP, CategoryMask::SOLID.group());
    (
        KinematicBody::default(),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(half.x, half.y),
        groups,
        KinematicCharacterController {
            offset: CharacterLength::Absolute(0.01),
            snap_to_ground: None,
            autostep: None,
            filter_groups: Some(groups),
            ..default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_follow_collision_group_membership() {
        let solid = ColliderCategory::Solid.collision_groups();
        let ladder = ColliderCategory::Ladder.collision_groups();

        assert!(CategoryMask::LADDER.matches(&ladder));
        assert!(!CategoryMask::LADDER.matches(&solid));
        assert!(CategoryMask::SOLID.matches(&solid));
    }

    #[test]
    fn character_collides_with_solids_only() {
        let (_, _, _, player, controller) = character_body(Vec2::new(0.8, 1.0));
        let solid = ColliderCategory::Solid.collision_groups();
        let ladder = ColliderCategory::Ladder.collision_groups();

        assert!(player.filters.intersects(solid.memberships));
        assert!(solid.filters.intersects(player.memberships));
        assert!(!player.filters.intersects(ladder.memberships));
        assert!(!ladder.filters.intersects(player.memberships));
        assert_eq!(controller.filter_groups, Some(player));
    }

    #[test]
    fn level_bundle_carries_category() {
        let (tag, body, _, groups) = LevelCollider::bundle(ColliderCategory::Ladder, Vec2::ONE);
        assert_eq!(tag.category, ColliderCategory::Ladder);
        assert_eq!(body, RigidBody::Fixed);
        assert_eq!(groups, ColliderCategory::Ladder.collision_groups());
        assert_eq!(tag.category.to_string(), "ladder");
    }
}
