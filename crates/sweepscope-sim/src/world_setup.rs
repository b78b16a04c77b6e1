//! Entity spawn factories and initial scene setup.
//!
//! Creates contact entities with their component bundles and seeds the
//! zone store with generated terrain and configured sectors.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use sweepscope_core::components::*;
use sweepscope_core::config::RadarConfig;
use sweepscope_core::enums::{ContactStatus, TrajectoryKind};
use sweepscope_core::error::CommandError;
use sweepscope_core::types::DVec2;
use sweepscope_terrain::{generate_random_polygons, ZoneStore};

use crate::trajectory;

/// Flight parameters for a new contact.
#[derive(Debug, Clone, Copy)]
pub struct ContactSpec {
    pub kind: TrajectoryKind,
    pub start: DVec2,
    pub control: DVec2,
    pub speed_factor: f64,
    pub status: ContactStatus,
}

impl ContactSpec {
    /// Reject flight parameters that would put NaN into the world. A start
    /// at the origin is allowed; that contact expires on its first tick.
    pub fn validate(&self) -> Result<(), CommandError> {
        if !self.start.is_finite() {
            return Err(CommandError::InvalidFlight(format!(
                "start point {} is not finite",
                self.start
            )));
        }
        if !self.control.is_finite() {
            return Err(CommandError::InvalidFlight(format!(
                "control point {} is not finite",
                self.control
            )));
        }
        if !(self.speed_factor.is_finite() && self.speed_factor > 0.0) {
            return Err(CommandError::InvalidFlight(format!(
                "speed factor must be positive, got {}",
                self.speed_factor
            )));
        }
        Ok(())
    }
}

/// Spawn an active, not yet visible contact at its start point.
pub fn spawn_contact(world: &mut World, target_id: u32, spec: ContactSpec, now: f64) -> Entity {
    let plan = FlightPlan {
        kind: spec.kind,
        start: spec.start,
        control: spec.control,
        speed_factor: spec.speed_factor,
        creation_time: now,
    };
    let info = ContactInfo {
        target_id,
        status: spec.status,
        active: true,
        ..Default::default()
    };
    let kinematics = Kinematics {
        position: spec.start,
        velocity: trajectory::velocity_at(&plan, 0.0),
    };

    world.spawn((info, plan, kinematics, TrajectoryHistory::default()))
}

/// Populate the zone store for a fresh run: random terrain when enabled,
/// then the configured default sectors. A sector that fails validation is
/// skipped with a warning.
pub fn setup_zones(zones: &mut ZoneStore, rng: &mut ChaCha8Rng, config: &RadarConfig) {
    if config.seed_terrain {
        let ids = generate_random_polygons(zones, rng, config);
        info!(count = ids.len(), "terrain polygons generated");
    }
    for spec in &config.default_sectors {
        if let Err(err) = zones.create_sector(spec.distance_km, spec.angle_degrees, spec.kind) {
            warn!(%err, "default sector skipped");
        }
    }
}
