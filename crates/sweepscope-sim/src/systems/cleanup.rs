//! Cleanup system: evicts contacts that have been inactive for too long.

use std::collections::HashMap;

use hecs::{Entity, World};
use tracing::debug;

use sweepscope_core::components::ContactInfo;
use sweepscope_core::events::RadarEvent;

/// Despawn contacts inactive for at least `delay` seconds and drop them from
/// the id index. `None` retains inactive contacts forever.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    index: &mut HashMap<u32, Entity>,
    despawn_buffer: &mut Vec<Entity>,
    now: f64,
    delay: Option<f64>,
    events: &mut Vec<RadarEvent>,
) {
    let Some(delay) = delay else {
        return;
    };
    despawn_buffer.clear();

    for (entity, info) in world.query_mut::<&ContactInfo>() {
        let expired_for = info.deactivated_at.map(|at| now - at);
        if !info.active && expired_for.is_some_and(|secs| secs >= delay) {
            despawn_buffer.push(entity);
            index.remove(&info.target_id);
            debug!(target_id = info.target_id, "contact evicted");
            events.push(RadarEvent::ContactEvicted {
                target_id: info.target_id,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
