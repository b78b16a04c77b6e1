//! Movement system: advances every active contact along its flight plan.

use hecs::World;
use tracing::debug;

use sweepscope_core::components::{ContactInfo, FlightPlan, Kinematics, TrajectoryHistory};
use sweepscope_core::events::RadarEvent;

use crate::trajectory;

/// Recompute position and velocity, retire finished flights, sample trails.
///
/// A contact whose flight completes is marked inactive and keeps its last
/// position; it is not removed here.
pub fn run(world: &mut World, now: f64, history_interval: f64, events: &mut Vec<RadarEvent>) {
    for (_entity, (info, plan, kin, history)) in world.query_mut::<(
        &mut ContactInfo,
        &FlightPlan,
        &mut Kinematics,
        &mut TrajectoryHistory,
    )>() {
        if !info.active {
            continue;
        }

        let t = trajectory::normalized_time(plan, now);
        if trajectory::is_expired(plan, t) {
            info.active = false;
            info.deactivated_at = Some(now);
            kin.velocity = Default::default();
            debug!(target_id = info.target_id, "contact expired");
            events.push(RadarEvent::ContactExpired {
                target_id: info.target_id,
            });
            continue;
        }

        kin.position = trajectory::position_at(plan, t);
        kin.velocity = trajectory::velocity_at(plan, t);

        let due = history
            .last_sample
            .map_or(true, |last| now - last >= history_interval);
        if due {
            history.points.push(kin.position);
            history.last_sample = Some(now);
        }
    }
}
