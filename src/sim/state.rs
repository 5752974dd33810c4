//! Game state and core simulation types
//!
//! All state that must survive a tick (and serialize for save/replay) lives
//! here. There are no module-level globals: the whole session is one value
//! owned by the driver.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::pipes::Pipe;
use crate::consts::*;
use crate::skins::SkinId;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting in the menu; simulation state frozen at initial values
    Idle,
    /// Physics pipeline active
    Running,
    /// Run ended; final state retained for the game-over screen
    Over,
}

/// The player avatar
///
/// Position is the top-left corner of its box, matching canvas draw
/// coordinates. Only y moves; x is fixed at `AVATAR_X`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    /// Vertical velocity (px/tick, positive = downward)
    pub vel_y: f32,
    /// Selected skin; purely cosmetic, no effect on the box
    pub skin: SkinId,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(AVATAR_X, GAME_HEIGHT / 2.0),
            vel_y: 0.0,
            skin: SkinId::default(),
        }
    }

    /// Bounding box for collision and rendering
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(AVATAR_SIZE))
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

/// Events produced by a tick, for the embedding layer (menus, audio,
/// persistence) to react to without polling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PipeSpawned { rare: bool },
    Scored { points: u32, rare: bool },
    GameOver { score: u32 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Base seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player avatar
    pub avatar: Avatar,
    /// Active pipes, in spawn order (descending x)
    pub pipes: Vec<Pipe>,
    /// Current run score
    pub score: u32,
    /// Ticks elapsed in the current run
    pub time_ticks: u64,
    /// Ticks since the last pipe spawn
    pub ticks_since_spawn: u32,
}

impl GameState {
    /// Create a fresh session in the Idle phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            avatar: Avatar::new(),
            pipes: Vec::new(),
            score: 0,
            time_ticks: 0,
            ticks_since_spawn: 0,
        }
    }

    /// Reset all mutable run state and enter Running.
    ///
    /// The selected skin survives the reset; customization is orthogonal to
    /// the run lifecycle.
    pub fn reset(&mut self) {
        let skin = self.avatar.skin;
        self.avatar = Avatar::new();
        self.avatar.skin = skin;
        self.pipes.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.ticks_since_spawn = 0;
        self.phase = GamePhase::Running;
    }
}
