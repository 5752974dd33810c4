//! Pipe stream: spawn, scroll, retire
//!
//! The stream exclusively owns its pipes. They are stored in spawn order,
//! which while active is also descending x. Gap geometry and the rare tag
//! are chosen once at spawn and never change.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::Tuning;
use crate::consts::*;
use glam::Vec2;

/// A pipe pair: top and bottom segments sharing one x with a gap between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Leading (left) edge x; decreases while active
    pub x: f32,
    /// y of the gap center, immutable after spawn
    pub gap_center_y: f32,
    /// Set once when the avatar clears this pipe, never cleared
    pub passed: bool,
    /// Rare pipes award more points and use a different sprite
    pub rare: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_center_y: f32, rare: bool) -> Self {
        Self {
            x,
            gap_center_y,
            passed: false,
            rare,
        }
    }

    /// Trailing (right) edge x
    pub fn trailing_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Bottom of the top segment
    pub fn gap_top(&self, gap: f32) -> f32 {
        self.gap_center_y - gap / 2.0
    }

    /// Top of the bottom segment
    pub fn gap_bottom(&self, gap: f32) -> f32 {
        self.gap_center_y + gap / 2.0
    }

    /// Top segment box, spanning y in [0, gap_top]
    pub fn top_segment(&self, gap: f32) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, 0.0),
            Vec2::new(self.trailing_edge(), self.gap_top(gap)),
        )
    }

    /// Bottom segment box, spanning y in [gap_bottom, GAME_HEIGHT]
    pub fn bottom_segment(&self, gap: f32) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.gap_bottom(gap)),
            Vec2::new(self.trailing_edge(), GAME_HEIGHT),
        )
    }
}

/// Spawn a pipe at the right edge with a uniformly random gap position.
///
/// The gap center range keeps the full gap plus `gap_margin` clearance on
/// screen. Returns whether the new pipe is rare (independent draw with
/// `rare_chance` probability).
pub fn spawn<R: Rng>(pipes: &mut Vec<Pipe>, tuning: &Tuning, rng: &mut R) -> bool {
    let half_gap = tuning.pipe_gap / 2.0;
    let min_center = tuning.gap_margin + half_gap;
    let max_center = GAME_HEIGHT - tuning.gap_margin - half_gap;
    let gap_center_y = rng.random_range(min_center..=max_center);
    let rare = rng.random_bool(tuning.rare_chance);

    pipes.push(Pipe::new(GAME_WIDTH, gap_center_y, rare));
    rare
}

/// Scroll every pipe left by the given speed
pub fn advance(pipes: &mut [Pipe], speed: f32) {
    for pipe in pipes {
        pipe.x -= speed;
    }
}

/// Drop pipes whose trailing edge has crossed x = 0.
///
/// Scoring has already been applied by then (the score threshold sits at
/// the avatar's leading edge, well to the right of zero).
pub fn retire(pipes: &mut Vec<Pipe>) {
    pipes.retain(|p| p.trailing_edge() >= 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_at_right_edge() {
        let mut pipes = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);
        spawn(&mut pipes, &Tuning::default(), &mut rng);

        assert_eq!(pipes.len(), 1);
        assert!((pipes[0].x - GAME_WIDTH).abs() < f32::EPSILON);
        assert!(!pipes[0].passed);
    }

    #[test]
    fn test_spawn_deterministic_for_seed() {
        let tuning = Tuning::default();
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);
        for _ in 0..20 {
            spawn(&mut a, &tuning, &mut rng_a);
            spawn(&mut b, &tuning, &mut rng_b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_advance_scrolls_left() {
        let mut pipes = vec![Pipe::new(300.0, 320.0, false), Pipe::new(480.0, 200.0, true)];
        advance(&mut pipes, 3.0);
        assert!((pipes[0].x - 297.0).abs() < f32::EPSILON);
        assert!((pipes[1].x - 477.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_retire_boundary() {
        // Trailing edge exactly at 0 stays; past 0 goes
        let mut pipes = vec![
            Pipe::new(-PIPE_WIDTH, 320.0, false),
            Pipe::new(-PIPE_WIDTH - 0.5, 320.0, false),
            Pipe::new(100.0, 320.0, false),
        ];
        retire(&mut pipes);
        assert_eq!(pipes.len(), 2);
        assert!(pipes.iter().all(|p| p.trailing_edge() >= 0.0));
    }

    #[test]
    fn test_segment_geometry() {
        let tuning = Tuning::default();
        let pipe = Pipe::new(200.0, 300.0, false);

        let top = pipe.top_segment(tuning.pipe_gap);
        assert!((top.min.y - 0.0).abs() < f32::EPSILON);
        assert!((top.max.y - 240.0).abs() < f32::EPSILON);

        let bottom = pipe.bottom_segment(tuning.pipe_gap);
        assert!((bottom.min.y - 360.0).abs() < f32::EPSILON);
        assert!((bottom.max.y - GAME_HEIGHT).abs() < f32::EPSILON);

        // Both segments share the pipe's x span
        assert!((top.min.x - 200.0).abs() < f32::EPSILON);
        assert!((top.max.x - 250.0).abs() < f32::EPSILON);
        assert_eq!(top.min.x, bottom.min.x);
        assert_eq!(top.max.x, bottom.max.x);
    }

    proptest! {
        #[test]
        fn prop_gap_always_fits_on_screen(seed in any::<u64>()) {
            let tuning = Tuning::default();
            let mut pipes = Vec::new();
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..50 {
                spawn(&mut pipes, &tuning, &mut rng);
            }
            for pipe in &pipes {
                prop_assert!(pipe.gap_top(tuning.pipe_gap) >= tuning.gap_margin);
                prop_assert!(pipe.gap_bottom(tuning.pipe_gap) <= GAME_HEIGHT - tuning.gap_margin);
            }
        }
    }
}
