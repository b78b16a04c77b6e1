//! ECS components for hecs contact entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::DVec2;

/// Identity, classification and detection state of a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Unique id assigned at spawn. Never reused, even after eviction.
    pub target_id: u32,
    pub status: ContactStatus,
    /// False once the flight is complete. Never becomes true again.
    pub active: bool,
    /// Latched true by the first sweep pass. Never reset.
    pub visible: bool,
    /// Clock value of the sweep pass that detected the contact.
    pub last_sweep_time: Option<f64>,
    /// Display the trajectory overlay for this contact.
    pub show_trajectory: bool,
    /// Clock value at which the contact became inactive.
    pub deactivated_at: Option<f64>,
}

/// Current position and estimated velocity (radar units, units per second).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: DVec2,
    pub velocity: DVec2,
}

/// Immutable flight parameters fixed at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlightPlan {
    pub kind: TrajectoryKind,
    /// Border point the contact enters at; it exits at `-start`.
    pub start: DVec2,
    /// Bézier control point (used by parabolic flights).
    pub control: DVec2,
    /// Multiplier on normalized flight time, > 0.
    pub speed_factor: f64,
    pub creation_time: f64,
}

/// Past positions for trail rendering, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrajectoryHistory {
    pub points: Vec<DVec2>,
    /// Clock value of the most recent sample.
    pub last_sample: Option<f64>,
}
