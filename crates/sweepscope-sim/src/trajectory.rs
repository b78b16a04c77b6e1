//! Trajectory model: contact position as a function of normalized flight time.
//!
//! Normalized time `t = elapsed / FLIGHT_DURATION_SECS`; the curve parameter
//! is `t' = t * speed_factor`. Every curve runs from `start` at `t' = 0` to the
//! antipodal point `-start` at `t' = 1`, when the flight expires.

use sweepscope_core::components::FlightPlan;
use sweepscope_core::constants::*;
use sweepscope_core::enums::TrajectoryKind;
use sweepscope_core::types::DVec2;

/// Normalized flight time at clock value `now`. Never negative.
pub fn normalized_time(plan: &FlightPlan, now: f64) -> f64 {
    ((now - plan.creation_time) / FLIGHT_DURATION_SECS).max(0.0)
}

/// Curve parameter `t'` for normalized time `t`.
pub fn progress(plan: &FlightPlan, t: f64) -> f64 {
    t * plan.speed_factor
}

/// A start point at the origin gives a zero-length flight with no direction.
pub fn is_degenerate(plan: &FlightPlan) -> bool {
    plan.start.length() < DEGENERATE_EPSILON
}

pub fn is_expired(plan: &FlightPlan, t: f64) -> bool {
    is_degenerate(plan) || progress(plan, t) >= 1.0
}

/// Unit vector perpendicular to the flight line `start -> -start`.
/// Zero for a degenerate start.
pub fn perpendicular(start: DVec2) -> DVec2 {
    let d = -start;
    let length = d.length();
    if length < DEGENERATE_EPSILON {
        return DVec2::ZERO;
    }
    DVec2::new(-d.y, d.x) / length
}

/// Control point: the midpoint of `start` and `-start` pushed sideways by `offset`.
pub fn generate_control_point(start: DVec2, offset: f64) -> DVec2 {
    (start + -start) / 2.0 + perpendicular(start) * offset
}

/// Position at normalized time `t`.
pub fn position_at(plan: &FlightPlan, t: f64) -> DVec2 {
    let p = progress(plan, t);
    if p >= 1.0 {
        return -plan.start;
    }
    curve_point(plan.kind, plan.start, plan.control, p.max(0.0))
}

/// Point on the curve for parameter `t'` in `[0, 1]`.
pub fn curve_point(kind: TrajectoryKind, start: DVec2, control: DVec2, tp: f64) -> DVec2 {
    match kind {
        TrajectoryKind::Parabolic => parabolic(start, control, tp),
        TrajectoryKind::Straight => straight(start, tp),
        TrajectoryKind::Sinusoidal => sinusoidal(start, tp),
    }
}

fn parabolic(start: DVec2, control: DVec2, t: f64) -> DVec2 {
    let u = 1.0 - t;
    start * (u * u) + control * (2.0 * u * t) + -start * (t * t)
}

fn straight(start: DVec2, t: f64) -> DVec2 {
    start + (-2.0 * start) * t
}

fn sinusoidal(start: DVec2, t: f64) -> DVec2 {
    let wave = (t * SINUSOID_OMEGA).sin() * SINUSOID_AMPLITUDE;
    straight(start, t) + perpendicular(start) * wave
}

/// Forward-difference velocity at normalized time `t`, in units per second.
pub fn velocity_at(plan: &FlightPlan, t: f64) -> DVec2 {
    let next = (t + VELOCITY_LOOKAHEAD).min(1.0);
    (position_at(plan, next) - position_at(plan, t)) * VELOCITY_SCALE
}

/// Predicted positions over the rest of the flight, from `now` to expiry.
pub fn future_path(plan: &FlightPlan, now: f64) -> Vec<DVec2> {
    if is_degenerate(plan) {
        return Vec::new();
    }
    let current = progress(plan, normalized_time(plan, now));
    if current >= 1.0 {
        return Vec::new();
    }
    let remaining = 1.0 - current;
    (0..FUTURE_PATH_SAMPLES)
        .map(|i| {
            let tp = current + remaining * i as f64 / FUTURE_PATH_SAMPLES as f64;
            curve_point(plan.kind, plan.start, plan.control, tp)
        })
        .collect()
}
