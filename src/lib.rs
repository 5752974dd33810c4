//! Flap Core - deterministic simulation core for a side-scrolling
//! "flappy" arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, game state)
//! - `driver`: Fixed-timestep driver decoupled from the render cadence
//! - `bestscore`: Persisted best score
//! - `config`: Named gameplay tuning
//! - `skins`: Avatar customization
//!
//! Rendering, menus, audio and asset loading live in the embedding layer;
//! this crate only exposes read-only snapshots for them to draw from.

pub mod bestscore;
pub mod config;
pub mod driver;
pub mod sim;
pub mod skins;

pub use bestscore::BestScore;
pub use config::Tuning;
pub use driver::Game;
pub use sim::{GameEvent, GamePhase, GameState, RenderSnapshot};
pub use skins::SkinId;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the canvas original)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical playfield dimensions (canvas pixels)
    pub const GAME_WIDTH: f32 = 480.0;
    pub const GAME_HEIGHT: f32 = 640.0;

    /// Avatar bounding box - x is fixed, only y moves
    pub const AVATAR_X: f32 = 50.0;
    pub const AVATAR_SIZE: f32 = 40.0;

    /// Pipe width
    pub const PIPE_WIDTH: f32 = 50.0;
}
