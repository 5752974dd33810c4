//! Gameplay tuning
//!
//! All physics and spawn constants collapsed into one named struct instead
//! of magic numbers inline. Persisted separately from the best score in
//! LocalStorage.

use serde::{Deserialize, Serialize};

/// Named gameplay constants, calibrated for the 60 Hz fixed tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration added to velocity each tick (px/tick²)
    pub gravity: f32,
    /// Velocity assigned by a flap; negative is upward (px/tick)
    pub jump_impulse: f32,
    /// Horizontal pipe scroll speed (px/tick)
    pub pipe_speed: f32,
    /// Extra scroll speed per point scored; 0 disables the ramp (px/tick)
    pub speed_ramp_per_point: f32,
    /// Vertical gap height, fixed for the whole session (px)
    pub pipe_gap: f32,
    /// Minimum clearance between the gap and the top/bottom edges (px)
    pub gap_margin: f32,
    /// Ticks between consecutive pipe spawns
    pub spawn_interval_ticks: u32,
    /// Probability that a spawned pipe is rare
    pub rare_chance: f64,
    /// Points for passing a normal pipe
    pub pass_points: u32,
    /// Points for passing a rare pipe
    pub rare_points: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_impulse: -8.0,
            pipe_speed: 3.0,
            speed_ramp_per_point: 0.0,
            pipe_gap: 120.0,
            gap_margin: 60.0,
            spawn_interval_ticks: 100,
            rare_chance: 0.1,
            pass_points: 1,
            rare_points: 5,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "flap_core_tuning";

    /// Effective scroll speed at the given score (deterministic ramp)
    pub fn pipe_speed_at(&self, score: u32) -> f32 {
        self.pipe_speed + self.speed_ramp_per_point * score as f32
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
