//! Fixed timestep simulation tick
//!
//! Advances one simulation step in a fixed order: gravity, flap impulse,
//! position integration, pipe spawn, scroll, scoring, collision. Nothing
//! outside this function mutates run state while Running.

use rand::Rng;

use super::collision::{avatar_hits_pipe, out_of_bounds};
use super::pipes;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::Tuning;
use crate::consts::*;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap this tick. Overrides velocity with the jump impulse; no
    /// cooldown, rapid repeats are valid.
    pub flap: bool,
}

/// Advance the game state by one fixed timestep.
///
/// No-op unless the phase is Running. On a pipe hit or a playfield boundary
/// crossing (top or bottom, both terminal) the phase flips to Over and the
/// tick ends immediately; no further updates happen that tick.
pub fn tick<R: Rng>(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    // Avatar physics: gravity accumulates, a flap overrides outright, and
    // position integrates exactly once per tick.
    state.avatar.vel_y += tuning.gravity;
    if input.flap {
        state.avatar.vel_y = tuning.jump_impulse;
    }
    state.avatar.pos.y += state.avatar.vel_y;

    // Spawn clock
    state.ticks_since_spawn += 1;
    if state.ticks_since_spawn >= tuning.spawn_interval_ticks {
        state.ticks_since_spawn = 0;
        let rare = pipes::spawn(&mut state.pipes, tuning, rng);
        log::debug!("pipe spawned (rare: {rare})");
        events.push(GameEvent::PipeSpawned { rare });
    }

    // Scroll
    pipes::advance(&mut state.pipes, tuning.pipe_speed_at(state.score));

    // Scoring: fires exactly once per pipe, when its trailing edge crosses
    // the avatar's leading edge.
    for pipe in &mut state.pipes {
        if !pipe.passed && pipe.trailing_edge() < AVATAR_X {
            pipe.passed = true;
            let points = if pipe.rare {
                tuning.rare_points
            } else {
                tuning.pass_points
            };
            state.score += points;
            events.push(GameEvent::Scored {
                points,
                rare: pipe.rare,
            });
        }
    }

    // Collision
    let avatar_box = state.avatar.aabb();
    let hit = state
        .pipes
        .iter()
        .any(|p| avatar_hits_pipe(&avatar_box, p, tuning.pipe_gap))
        || out_of_bounds(&avatar_box);
    if hit {
        state.phase = GamePhase::Over;
        log::info!("game over at score {}", state.score);
        events.push(GameEvent::GameOver { score: state.score });
        return events;
    }

    // Retire off-screen pipes; their score (if any) is already applied
    pipes::retire(&mut state.pipes);

    events
}
