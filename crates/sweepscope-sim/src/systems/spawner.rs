//! Spawn and density control for new contacts.
//!
//! A spawn is attempted at most once per `spawn_delay_secs`. The attempt is
//! skipped when the radar is at capacity, and rejected when the chosen entry
//! bearing is already crowded.

use std::collections::HashMap;
use std::f64::consts::TAU;

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use sweepscope_core::components::{ContactInfo, Kinematics};
use sweepscope_core::config::RadarConfig;
use sweepscope_core::constants::CONTROL_OFFSET_MAX;
use sweepscope_core::enums::{ContactStatus, TrajectoryKind};
use sweepscope_core::events::RadarEvent;
use sweepscope_core::geometry::{angular_distance_radians, azimuth_degrees, azimuth_radians};
use sweepscope_core::types::DVec2;

use crate::trajectory::generate_control_point;
use crate::world_setup::{self, ContactSpec};

/// Scheduling state carried between ticks.
#[derive(Debug, Clone)]
pub struct SpawnState {
    /// Id handed to the next contact. Starts at 1, only increases.
    pub next_target_id: u32,
    /// Clock value of the last scheduled attempt.
    pub last_spawn_time: f64,
    /// Scheduled attempts made so far, accepted or not.
    pub attempts: u64,
}

impl SpawnState {
    pub fn new(start_time: f64) -> Self {
        Self {
            next_target_id: 1,
            last_spawn_time: start_time,
            attempts: 0,
        }
    }

    pub(crate) fn issue_target_id(&mut self) -> u32 {
        let id = self.next_target_id;
        self.next_target_id += 1;
        id
    }
}

/// Result of a spawn attempt. Rejections are scheduling decisions, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned(u32),
    /// Active contacts already at `max_objects`.
    AtCapacity,
    /// Too many active contacts near the entry bearing.
    SectorCrowded,
}

/// Mutable context shared by the spawn entry points.
pub struct SpawnContext<'a> {
    pub world: &'a mut World,
    pub index: &'a mut HashMap<u32, Entity>,
    pub state: &'a mut SpawnState,
    pub rng: &'a mut ChaCha8Rng,
    pub events: &'a mut Vec<RadarEvent>,
}

pub fn active_count(world: &World) -> usize {
    world
        .query::<&ContactInfo>()
        .iter()
        .filter(|(_, info)| info.active)
        .count()
}

/// Active contacts whose bearing is within `half_width` radians of `azimuth`.
pub fn active_in_window(world: &World, azimuth: f64, half_width: f64) -> usize {
    world
        .query::<(&ContactInfo, &Kinematics)>()
        .iter()
        .filter(|(_, (info, kin))| {
            info.active
                && angular_distance_radians(azimuth_radians(kin.position), azimuth) <= half_width
        })
        .count()
}

/// Scheduled spawn for this tick. Returns `None` when no attempt is due.
///
/// An attempt is due once the delay has elapsed and capacity allows; the
/// delay restarts even when the density check rejects the spawn.
pub fn run(ctx: SpawnContext<'_>, config: &RadarConfig, now: f64) -> Option<SpawnOutcome> {
    if now - ctx.state.last_spawn_time < config.spawn_delay_secs {
        return None;
    }
    if active_count(ctx.world) >= config.max_objects {
        return None;
    }
    ctx.state.attempts += 1;
    ctx.state.last_spawn_time = now;
    Some(try_spawn(ctx, config, now))
}

/// Attempt a spawn at a uniformly random border bearing.
pub fn try_spawn(ctx: SpawnContext<'_>, config: &RadarConfig, now: f64) -> SpawnOutcome {
    let azimuth = ctx.rng.gen_range(0.0..TAU);
    try_spawn_at(ctx, config, now, azimuth)
}

/// Attempt a spawn entering at the border point on bearing `azimuth` (radians).
pub fn try_spawn_at(
    ctx: SpawnContext<'_>,
    config: &RadarConfig,
    now: f64,
    azimuth: f64,
) -> SpawnOutcome {
    if active_count(ctx.world) >= config.max_objects {
        debug!(now, "spawn skipped: at capacity");
        return SpawnOutcome::AtCapacity;
    }

    let start = DVec2::new(azimuth.cos(), azimuth.sin()) * config.border_radius;
    let entry = azimuth_radians(start);
    let crowd = active_in_window(ctx.world, entry, config.sector_window_radians);
    if crowd >= config.max_objects_per_sector {
        debug!(now, azimuth = entry, crowd, "spawn rejected: sector crowded");
        return SpawnOutcome::SectorCrowded;
    }

    let kind = *TrajectoryKind::ALL
        .choose(&mut *ctx.rng)
        .unwrap_or(&TrajectoryKind::Straight);
    let status = if config.random_status {
        *ContactStatus::ALL
            .choose(&mut *ctx.rng)
            .unwrap_or(&ContactStatus::Unknown)
    } else {
        ContactStatus::Unknown
    };
    let speed_factor = ctx
        .rng
        .gen_range(config.speed_factor_min..=config.speed_factor_max);
    let offset = ctx.rng.gen_range(-CONTROL_OFFSET_MAX..=CONTROL_OFFSET_MAX);

    let target_id = ctx.state.issue_target_id();
    let spec = ContactSpec {
        kind,
        start,
        control: generate_control_point(start, offset),
        speed_factor,
        status,
    };
    let entity = world_setup::spawn_contact(ctx.world, target_id, spec, now);
    ctx.index.insert(target_id, entity);
    ctx.events.push(RadarEvent::ContactSpawned {
        target_id,
        azimuth_degrees: azimuth_degrees(start),
    });
    debug!(target_id, ?kind, speed_factor, "contact spawned");
    SpawnOutcome::Spawned(target_id)
}
