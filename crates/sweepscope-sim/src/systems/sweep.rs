//! Rotating sweep beam and the one-way visibility latch.

use hecs::World;
use tracing::debug;

use sweepscope_core::components::{ContactInfo, Kinematics};
use sweepscope_core::config::RadarConfig;
use sweepscope_core::error::CommandError;
use sweepscope_core::events::RadarEvent;
use sweepscope_core::geometry::{angle_in_arc, azimuth_degrees};
use sweepscope_core::state::SweepView;

/// Beam angle and rotation rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepState {
    beam_angle_degrees: f64,
    rotation_speed_deg_per_tick: f64,
    trailing_window_degrees: f64,
}

impl SweepState {
    pub fn from_config(config: &RadarConfig) -> Self {
        Self {
            beam_angle_degrees: 0.0,
            rotation_speed_deg_per_tick: config.rotation_speed_deg_per_tick,
            trailing_window_degrees: config.trailing_window_degrees,
        }
    }

    /// Current beam angle in `[0, 360)`.
    pub fn beam_angle_degrees(&self) -> f64 {
        self.beam_angle_degrees
    }

    /// Signed degrees per tick. Negative rotates clockwise.
    pub fn rotation_speed_deg_per_tick(&self) -> f64 {
        self.rotation_speed_deg_per_tick
    }

    /// Arc behind the beam, in degrees, that counts as swept. 360 sweeps the
    /// whole scope every tick.
    pub fn trailing_window_degrees(&self) -> f64 {
        self.trailing_window_degrees
    }

    /// Rotate the beam by one tick.
    pub fn advance(&mut self) {
        self.beam_angle_degrees =
            (self.beam_angle_degrees + self.rotation_speed_deg_per_tick).rem_euclid(360.0);
        if self.beam_angle_degrees >= 360.0 {
            self.beam_angle_degrees = 0.0;
        }
    }

    /// Whether an azimuth lies in the arc `[beam - window, beam]`. A full
    /// 360° window contains every azimuth.
    pub fn in_window(&self, azimuth_degrees: f64) -> bool {
        angle_in_arc(
            azimuth_degrees,
            self.beam_angle_degrees - self.trailing_window_degrees,
            self.beam_angle_degrees,
        )
    }

    pub fn set_rotation_speed(&mut self, deg_per_tick: f64) -> Result<(), CommandError> {
        if !deg_per_tick.is_finite() {
            return Err(CommandError::InvalidRotationSpeed(deg_per_tick));
        }
        self.rotation_speed_deg_per_tick = deg_per_tick;
        Ok(())
    }

    /// Multiply the rotation rate, e.g. by 1.2 to speed up or 0.8 to slow down.
    pub fn scale_rotation_speed(&mut self, factor: f64) -> Result<(), CommandError> {
        self.set_rotation_speed(self.rotation_speed_deg_per_tick * factor)
    }

    pub fn reverse(&mut self) {
        self.rotation_speed_deg_per_tick = -self.rotation_speed_deg_per_tick;
    }

    pub fn view(&self) -> SweepView {
        SweepView {
            beam_angle_degrees: self.beam_angle_degrees,
            rotation_speed_deg_per_tick: self.rotation_speed_deg_per_tick,
            trailing_window_degrees: self.trailing_window_degrees,
        }
    }
}

/// Latch visibility on every active contact inside the trailing window.
///
/// Visibility only ever goes from false to true; inactive contacts are not
/// detected.
pub fn run(world: &mut World, sweep: &SweepState, now: f64, events: &mut Vec<RadarEvent>) {
    for (_entity, (info, kin)) in world.query_mut::<(&mut ContactInfo, &Kinematics)>() {
        if !info.active || info.visible {
            continue;
        }
        let azimuth = azimuth_degrees(kin.position);
        if sweep.in_window(azimuth) {
            info.visible = true;
            info.last_sweep_time = Some(now);
            debug!(target_id = info.target_id, azimuth, "contact detected");
            events.push(RadarEvent::ContactDetected {
                target_id: info.target_id,
                azimuth_degrees: azimuth,
            });
        }
    }
}

/// Display opacity: 0 until `fade_in` seconds after the detecting pass, then 1.
pub fn contact_alpha(last_sweep_time: Option<f64>, now: f64, fade_in: f64) -> f64 {
    match last_sweep_time {
        Some(swept) if now - swept >= fade_in => 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep(beam: f64, speed: f64) -> SweepState {
        SweepState {
            beam_angle_degrees: beam,
            rotation_speed_deg_per_tick: speed,
            trailing_window_degrees: 20.0,
        }
    }

    #[test]
    fn test_advance_wraps_both_directions() {
        let mut s = sweep(2.0, -5.0);
        s.advance();
        assert!((s.beam_angle_degrees - 357.0).abs() < 1e-9);

        let mut s = sweep(358.0, 5.0);
        s.advance();
        assert!((s.beam_angle_degrees - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_trails_beam() {
        let s = sweep(90.0, -5.0);
        assert!(s.in_window(80.0));
        assert!(s.in_window(70.0));
        assert!(s.in_window(90.0));
        assert!(!s.in_window(95.0));
        assert!(!s.in_window(69.0));
    }

    #[test]
    fn test_window_across_zero() {
        let s = sweep(10.0, -5.0);
        assert!(s.in_window(355.0));
        assert!(s.in_window(0.0));
        assert!(!s.in_window(340.0));
    }

    #[test]
    fn test_full_turn_window_sees_everything() {
        let mut s = sweep(355.0, -5.0);
        s.trailing_window_degrees = 360.0;
        for azimuth in [0.0, 90.0, 180.0, 354.0, 355.0, 356.0] {
            assert!(s.in_window(azimuth), "{azimuth} outside a full window");
        }
    }

    #[test]
    fn test_speed_controls() {
        let mut s = sweep(0.0, -5.0);
        s.scale_rotation_speed(1.2).unwrap();
        assert!((s.rotation_speed_deg_per_tick + 6.0).abs() < 1e-9);
        s.reverse();
        assert!((s.rotation_speed_deg_per_tick - 6.0).abs() < 1e-9);
        assert!(matches!(
            s.set_rotation_speed(f64::NAN),
            Err(CommandError::InvalidRotationSpeed(_))
        ));
        assert!((s.rotation_speed_deg_per_tick - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_alpha_fades_in() {
        assert_eq!(contact_alpha(None, 10.0, 0.5), 0.0);
        assert_eq!(contact_alpha(Some(10.0), 10.2, 0.5), 0.0);
        assert_eq!(contact_alpha(Some(10.0), 10.5, 0.5), 1.0);
        assert_eq!(contact_alpha(Some(10.0), 12.0, 0.5), 1.0);
    }
}
