//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; physics constants are calibrated to the 60 Hz tick,
//!   so `tick` takes no dt
//! - Seeded RNG only, passed in by the driver
//! - Stable iteration order (pipes in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pipes;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Aabb, avatar_hits_pipe, out_of_bounds};
pub use pipes::Pipe;
pub use snapshot::{AvatarView, PipeView, RenderSnapshot};
pub use state::{Avatar, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
