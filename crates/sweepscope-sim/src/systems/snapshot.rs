//! Snapshot system: queries the world and zone store and builds a RadarSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use sweepscope_core::components::*;
use sweepscope_core::config::RadarConfig;
use sweepscope_core::events::RadarEvent;
use sweepscope_core::geometry::{azimuth_degrees, distance_from_origin};
use sweepscope_core::state::*;
use sweepscope_core::types::SimTime;
use sweepscope_terrain::ZoneStore;

use super::sweep::{contact_alpha, SweepState};
use crate::trajectory;

/// Build a complete RadarSnapshot from the current state.
pub fn build_snapshot(
    world: &World,
    zones: &ZoneStore,
    sweep: &SweepState,
    time: &SimTime,
    config: &RadarConfig,
    events: Vec<RadarEvent>,
) -> RadarSnapshot {
    RadarSnapshot {
        time: *time,
        sweep: sweep.view(),
        contacts: build_contacts(world, time.now_secs, config),
        polygons: zones.polygons().map(|p| p.view()).collect(),
        sectors: zones.sectors().map(|s| s.view()).collect(),
        events,
    }
}

/// ContactView list sorted by target id.
fn build_contacts(world: &World, now: f64, config: &RadarConfig) -> Vec<ContactView> {
    let mut contacts: Vec<ContactView> = world
        .query::<(&ContactInfo, &FlightPlan, &Kinematics, &TrajectoryHistory)>()
        .iter()
        .map(|(_, (info, plan, kin, history))| {
            let predicted = if info.show_trajectory && info.active {
                trajectory::future_path(plan, now)
            } else {
                Vec::new()
            };
            ContactView {
                target_id: info.target_id,
                position: kin.position,
                velocity: kin.velocity,
                trajectory: plan.kind,
                status: info.status,
                active: info.active,
                visible: info.visible,
                alpha: contact_alpha(info.last_sweep_time, now, config.fade_in_secs),
                range_km: config.units_to_km(distance_from_origin(kin.position)),
                azimuth_degrees: azimuth_degrees(kin.position),
                show_trajectory: info.show_trajectory,
                history: history.points.clone(),
                predicted,
            }
        })
        .collect();

    contacts.sort_by_key(|c| c.target_id);
    contacts
}
