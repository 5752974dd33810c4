//! Axis-aligned collision tests
//!
//! The avatar's box is tested against each pipe's two segments and the
//! playfield edges. Boundary policy: crossing either the top or the bottom
//! edge is terminal, same as a pipe hit. There is no ceiling clamp.

use glam::Vec2;

use super::pipes::Pipe;
use crate::consts::GAME_HEIGHT;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from top-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap in both axes; touching edges do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Does the avatar's box overlap either segment of the pipe?
pub fn avatar_hits_pipe(avatar: &Aabb, pipe: &Pipe, gap: f32) -> bool {
    avatar.overlaps(&pipe.top_segment(gap)) || avatar.overlaps(&pipe.bottom_segment(gap))
}

/// Has the avatar crossed the top or bottom playfield edge?
pub fn out_of_bounds(avatar: &Aabb) -> bool {
    avatar.min.y < 0.0 || avatar.max.y > GAME_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avatar_box(y: f32) -> Aabb {
        // 40x40 box at x=50, like the real avatar
        Aabb::from_pos_size(Vec2::new(50.0, y), Vec2::splat(40.0))
    }

    #[test]
    fn test_no_collision_when_y_clear() {
        // Avatar box [50,50]-[90,90]; top segment x 40..100, y 0..40:
        // x overlaps but y does not
        let avatar = avatar_box(50.0);
        let pipe = Pipe::new(40.0, 100.0, false);
        // Gap 120 centered at 100: top segment ends at y=40
        assert!(!avatar.overlaps(&pipe.top_segment(120.0)));
    }

    #[test]
    fn test_collision_when_both_axes_overlap() {
        // Same pipe with the top segment extended to y 0..60: overlap 50..60
        let avatar = avatar_box(50.0);
        let pipe = Pipe::new(40.0, 120.0, false);
        assert!((pipe.gap_top(120.0) - 60.0).abs() < f32::EPSILON);
        assert!(avatar.overlaps(&pipe.top_segment(120.0)));
        assert!(avatar_hits_pipe(&avatar, &pipe, 120.0));
    }

    #[test]
    fn test_no_collision_without_x_overlap() {
        // Pipe entirely to the right of the avatar
        let avatar = avatar_box(50.0);
        let pipe = Pipe::new(200.0, 120.0, false);
        assert!(!avatar_hits_pipe(&avatar, &pipe, 120.0));
    }

    #[test]
    fn test_bottom_segment_collision() {
        // Gap centered at 300 with gap 120: bottom segment starts at 360
        let avatar = avatar_box(350.0);
        let pipe = Pipe::new(40.0, 300.0, false);
        assert!(avatar.overlaps(&pipe.bottom_segment(120.0)));
    }

    #[test]
    fn test_avatar_in_gap_is_safe() {
        let avatar = avatar_box(280.0);
        let pipe = Pipe::new(40.0, 300.0, false);
        assert!(!avatar_hits_pipe(&avatar, &pipe, 120.0));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Avatar bottom exactly at the bottom segment's top edge
        let avatar = avatar_box(320.0);
        let pipe = Pipe::new(40.0, 300.0, false);
        assert!((pipe.gap_bottom(120.0) - 360.0).abs() < f32::EPSILON);
        assert!(!avatar.overlaps(&pipe.bottom_segment(120.0)));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(out_of_bounds(&avatar_box(-0.5)));
        assert!(out_of_bounds(&avatar_box(GAME_HEIGHT - 39.5)));
        assert!(!out_of_bounds(&avatar_box(0.0)));
        assert!(!out_of_bounds(&avatar_box(GAME_HEIGHT - 40.0)));
        assert!(!out_of_bounds(&avatar_box(300.0)));
    }
}
