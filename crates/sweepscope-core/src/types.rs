//! Fundamental vector and simulation-time types.

use serde::{Deserialize, Serialize};

/// 2D point or vector in radar units (x = right, y = up, origin = radar).
pub use glam::DVec2;

/// RGB display color with components in `0.0..=1.0`.
pub type Color = [f32; 3];

/// Simulation time tracking.
///
/// The model is time-based: `now_secs` is the caller-supplied clock value of
/// the most recent tick, so irregular tick spacing does not change results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks processed so far.
    pub tick: u64,
    /// Clock value (seconds) passed to the most recent tick.
    pub now_secs: f64,
}

impl SimTime {
    pub fn starting_at(now_secs: f64) -> Self {
        Self { tick: 0, now_secs }
    }

    /// Advance by one tick to the given clock value.
    ///
    /// The clock never runs backwards; an earlier `now` keeps the previous value.
    pub fn advance_to(&mut self, now_secs: f64) {
        self.tick += 1;
        if now_secs.is_finite() && now_secs > self.now_secs {
            self.now_secs = now_secs;
        }
    }
}
