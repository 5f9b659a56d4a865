//! Per-tick view of the level's rapier colliders: ladder overlap and solid recovery queries.
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::CategoryMask;
use crate::player::controller::OverlapQuery;

/// A level collider placed in world space for one frame of queries.
#[derive(Clone, Copy)]
pub struct LevelShape<'a> {
    pub translation: Vec2,
    pub rotation: f32,
    pub collider: &'a Collider,
    pub groups: CollisionGroups,
}

impl<'a> LevelShape<'a> {
    pub fn new(transform: &Transform, collider: &'a Collider, groups: CollisionGroups) -> Self {
        let (rotation, _, _) = transform.rotation.to_euler(EulerRot::ZYX);
        Self {
            translation: transform.translation.truncate(),
            rotation,
            collider,
            groups,
        }
    }

    /// Distance from `point` to the shape; zero when the point lies inside it.
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.collider.distance_to_point(self.translation, self.rotation, point, true)
    }

    /// Upward shift that moves `point` from inside the shape onto its boundary.
    fn recovery_lift(&self, point: Vec2) -> Option<f32> {
        if !self.collider.contains_point(self.translation, self.rotation, point) {
            return None;
        }
        let projection = self.collider.project_point(self.translation, self.rotation, point, false);
        let lift = projection.point.y - point.y;
        (lift > 0.0).then_some(lift)
    }
}

/// Ball overlap: a shape touches the ball when its distance to `center` is at most `radius`.
impl OverlapQuery for [LevelShape<'_>] {
    fn any_overlap(&self, center: Vec2, radius: f32, mask: CategoryMask) -> bool {
        self.iter()
            .filter(|shape| mask.matches(&shape.groups))
            .any(|shape| shape.distance_to(center) <= radius)
    }
}

/// Height a body must rise so that `foot` leaves every solid it sank into, if any.
///
/// Direct translations skip the character controller, and rapier does not push a
/// character out of geometry it starts inside.
pub fn solid_recovery_lift(shapes: &[LevelShape<'_>], foot: Vec2) -> Option<f32> {
    shapes
        .iter()
        .filter(|shape| CategoryMask::SOLID.matches(&shape.groups))
        .filter_map(|shape| shape.recovery_lift(foot))
        .reduce(f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::components::ColliderCategory;

    fn ground() -> (Transform, Collider) {
        (Transform::from_xyz(0.0, -0.5, 0.0), Collider::cuboid(10.0, 0.5))
    }

    fn ladder() -> (Transform, Collider) {
        (Transform::from_xyz(0.0, 3.0, 0.0), Collider::cuboid(0.5, 3.0))
    }

    fn shape<'a>(placed: &'a (Transform, Collider), category: ColliderCategory) -> LevelShape<'a> {
        LevelShape::new(&placed.0, &placed.1, category.collision_groups())
    }

    #[test]
    fn overlap_honours_radius_and_mask() {
        let ladder = ladder();
        let ground = ground();
        let shapes = [
            shape(&ladder, ColliderCategory::Ladder),
            shape(&ground, ColliderCategory::Solid),
        ];

        assert!(shapes[..].any_overlap(Vec2::new(0.55, 2.0), 0.1, CategoryMask::LADDER));
        assert!(!shapes[..].any_overlap(Vec2::new(0.7, 2.0), 0.1, CategoryMask::LADDER));
        // Standing on the ground is not standing on a ladder.
        assert!(!shapes[..].any_overlap(Vec2::new(3.0, 0.05), 0.1, CategoryMask::LADDER));
        assert!(shapes[..].any_overlap(Vec2::new(3.0, 0.05), 0.1, CategoryMask::SOLID));
    }

    #[test]
    fn foot_sunk_into_ground_is_lifted_to_its_top() {
        let ground = ground();
        let shapes = [shape(&ground, ColliderCategory::Solid)];

        let lift = solid_recovery_lift(&shapes, Vec2::new(1.0, -0.2));
        assert!(lift.is_some_and(|lift| (lift - 0.2).abs() < 1e-4));
        assert_eq!(solid_recovery_lift(&shapes, Vec2::new(1.0, 0.3)), None);
    }

    #[test]
    fn ladders_never_lift() {
        let ladder = ladder();
        let shapes = [shape(&ladder, ColliderCategory::Ladder)];

        assert_eq!(solid_recovery_lift(&shapes, Vec2::new(0.0, 2.0)), None);
    }
}
