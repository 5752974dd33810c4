//! Read-only render snapshots
//!
//! Captured after a tick for the embedding rendering layer. Everything
//! needed to draw one frame, nothing mutable.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use crate::config::Tuning;
use crate::skins::SkinId;

/// Avatar box plus the skin to draw it with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvatarView {
    pub min: Vec2,
    pub max: Vec2,
    pub skin: SkinId,
}

/// One pipe pair, pre-resolved to draw coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeView {
    pub x: f32,
    pub width: f32,
    /// Bottom of the top segment
    pub gap_top: f32,
    /// Top of the bottom segment
    pub gap_bottom: f32,
    pub rare: bool,
}

/// Frame snapshot for the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub avatar: AvatarView,
    /// Pipes in spawn order (descending x)
    pub pipes: Vec<PipeView>,
    pub score: u32,
    pub best_score: u32,
    pub tick: u64,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, tuning: &Tuning, best_score: u32) -> Self {
        let avatar_box = state.avatar.aabb();
        Self {
            phase: state.phase,
            avatar: AvatarView {
                min: avatar_box.min,
                max: avatar_box.max,
                skin: state.avatar.skin,
            },
            pipes: state
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    width: crate::consts::PIPE_WIDTH,
                    gap_top: p.gap_top(tuning.pipe_gap),
                    gap_bottom: p.gap_bottom(tuning.pipe_gap),
                    rare: p.rare,
                })
                .collect(),
            score: state.score,
            best_score,
            tick: state.time_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::pipes::Pipe;

    #[test]
    fn test_capture_reflects_state() {
        let mut state = GameState::new(5);
        state.reset();
        state.score = 6;
        state.avatar.skin = SkinId::Player3;
        state.pipes.push(Pipe::new(300.0, 250.0, true));

        let snap = RenderSnapshot::capture(&state, &Tuning::default(), 11);

        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.score, 6);
        assert_eq!(snap.best_score, 11);
        assert_eq!(snap.avatar.skin, SkinId::Player3);
        assert_eq!(snap.pipes.len(), 1);
        assert!((snap.pipes[0].gap_top - 190.0).abs() < f32::EPSILON);
        assert!((snap.pipes[0].gap_bottom - 310.0).abs() < f32::EPSILON);
        assert!(snap.pipes[0].rare);
        assert!((snap.avatar.min.x - AVATAR_X).abs() < f32::EPSILON);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(5);
        let snap = RenderSnapshot::capture(&state, &Tuning::default(), 0);
        let json = serde_json::to_string(&snap).unwrap();
        let back: RenderSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
