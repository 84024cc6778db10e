//! Axis-aligned collision primitives
//!
//! Walls and the vehicle footprint are plain axis-aligned rectangles; overlap
//! is the standard four-comparison test. Comparisons are strict, so two
//! rectangles sharing an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from a center point and full width/length
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Square footprint from a center point and half-extent
    pub fn from_center_half_extent(center: Vec2, half_extent: f32) -> Self {
        Self {
            min: center - Vec2::splat(half_extent),
            max: center + Vec2::splat(half_extent),
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test: all four "separated" conditions must be false
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }

    /// Point containment (inclusive on both edges)
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Index of the first wall the footprint overlaps, in list order.
///
/// The scan short-circuits on the first hit; callers that care about which
/// wall was struck rely on the wall list keeping a stable order.
pub fn first_hit(footprint: &Aabb, walls: &[Aabb]) -> Option<usize> {
    walls.iter().position(|w| footprint.overlaps(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = Aabb::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_edge_touch_is_not_a_hit() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = Aabb::new(Vec2::new(2.0, 0.0), Vec2::new(4.0, 2.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        // Overlapping in x, separated in y
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 1.0));
        let b = Aabb::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 3.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_from_center_constructors() {
        let rect = Aabb::from_center_size(Vec2::new(0.0, -50.0), Vec2::new(100.0, 2.0));
        assert_eq!(rect.min, Vec2::new(-50.0, -51.0));
        assert_eq!(rect.max, Vec2::new(50.0, -49.0));

        let square = Aabb::from_center_half_extent(Vec2::new(1.0, 1.0), 0.4);
        assert_eq!(square.min, Vec2::new(0.6, 0.6));
        assert_eq!(square.max, Vec2::new(1.4, 1.4));
        assert_eq!(square.center(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_first_hit_takes_list_order() {
        let footprint = Aabb::from_center_half_extent(Vec2::ZERO, 1.0);
        let walls = vec![
            Aabb::from_center_size(Vec2::new(10.0, 0.0), Vec2::splat(2.0)),
            Aabb::from_center_size(Vec2::new(0.5, 0.0), Vec2::splat(2.0)),
            Aabb::from_center_size(Vec2::new(-0.5, 0.0), Vec2::splat(2.0)),
        ];
        assert_eq!(first_hit(&footprint, &walls), Some(1));
        assert_eq!(first_hit(&footprint, &walls[..1]), None);
    }

    #[test]
    fn test_contains() {
        let tile = Aabb::from_center_size(Vec2::new(10.0, 10.0), Vec2::splat(10.0));
        assert!(tile.contains(Vec2::new(10.0, 10.0)));
        assert!(tile.contains(Vec2::new(5.0, 15.0)));
        assert!(!tile.contains(Vec2::new(4.9, 10.0)));
    }
}
