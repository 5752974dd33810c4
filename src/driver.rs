//! Fixed-timestep game driver
//!
//! Owns the whole session (state, tuning, RNG, best score) and is the only
//! caller of the tick pipeline. An accumulator with bounded substeps
//! decouples the 60 Hz simulation from whatever cadence the display runs
//! at, so physics stays deterministic under any refresh rate.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::bestscore::BestScore;
use crate::config::Tuning;
use crate::consts::*;
use crate::sim::{GameEvent, GamePhase, GameState, RenderSnapshot, TickInput, tick};
use crate::skins::SkinId;

/// Game session driver
pub struct Game {
    tuning: Tuning,
    state: GameState,
    best: BestScore,
    rng: Pcg32,
    accumulator: f32,
    input: TickInput,
    /// Completed start() calls; salts the per-run RNG stream
    runs: u64,
}

impl Game {
    /// Create a session with persisted tuning and best score.
    ///
    /// This is the single startup read of the best score; it is written
    /// again only when a run improves on it.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::load())
    }

    /// Create a session with explicit tuning (tests, headless embedding)
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            tuning,
            state: GameState::new(seed),
            best: BestScore::load(),
            rng: Pcg32::seed_from_u64(seed),
            accumulator: 0.0,
            input: TickInput::default(),
            runs: 0,
        }
    }

    /// Start (or restart) a run: resets avatar, pipes and score, reseeds
    /// the RNG stream, enters Running. No-op while already Running.
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Running {
            return;
        }
        self.runs += 1;
        // Distinct deterministic stream per run from the base seed
        self.rng =
            Pcg32::seed_from_u64(self.state.seed ^ self.runs.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.state.reset();
        self.accumulator = 0.0;
        self.input = TickInput::default();
        log::info!("run {} started", self.runs);
    }

    /// Halt the physics pipeline without destroying last-known state, so a
    /// frozen frame can still be rendered.
    pub fn stop(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.state.phase = GamePhase::Idle;
        }
    }

    /// Queue a flap for the next tick. Silently ignored unless Running.
    pub fn flap(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.input.flap = true;
        }
    }

    /// Change the avatar skin. Cosmetic only; valid in any phase.
    pub fn set_skin(&mut self, skin: SkinId) {
        self.state.avatar.skin = skin;
    }

    /// Change the avatar skin from a UI/storage key; rejects unknown keys.
    pub fn set_skin_key(&mut self, key: &str) -> bool {
        match SkinId::from_key(key) {
            Some(skin) => {
                self.set_skin(skin);
                true
            }
            None => false,
        }
    }

    /// Advance the simulation by a wall-clock frame of `dt` seconds,
    /// running as many fixed ticks as fit (bounded by `MAX_SUBSTEPS`).
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= TICK_DT;
            substeps += 1;
        }
        events
    }

    /// Run exactly one fixed tick (headless stepping and tests).
    pub fn step(&mut self) -> Vec<GameEvent> {
        // One-shot input is consumed by the tick it applies to
        let input = std::mem::take(&mut self.input);
        let events = tick(&mut self.state, &input, &self.tuning, &mut self.rng);

        if let Some(GameEvent::GameOver { score }) = events
            .iter()
            .find(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            // The single per-game-over persistence write, only on improvement
            if self.best.record(*score) {
                self.best.save();
            }
        }
        events
    }

    /// Read-only view of the session state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current best score across runs
    pub fn best_score(&self) -> u32 {
        self.best.value()
    }

    /// Snapshot for the rendering layer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, &self.tuning, self.best.value())
    }
}
