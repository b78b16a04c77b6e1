//! Radar snapshot: the complete read-only state handed to a renderer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::RadarEvent;
use crate::types::{Color, DVec2, SimTime};

/// Complete radar state broadcast after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarSnapshot {
    pub time: SimTime,
    pub sweep: SweepView,
    pub contacts: Vec<ContactView>,
    pub polygons: Vec<PolygonView>,
    pub sectors: Vec<SectorView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<RadarEvent>,
}

impl RadarSnapshot {
    /// Contacts still in flight.
    pub fn active_contacts(&self) -> impl Iterator<Item = &ContactView> {
        self.contacts.iter().filter(|c| c.active)
    }
}

/// Beam state for drawing the sweep line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepView {
    pub beam_angle_degrees: f64,
    pub rotation_speed_deg_per_tick: f64,
    pub trailing_window_degrees: f64,
}

/// A contact on the display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactView {
    pub target_id: u32,
    pub position: DVec2,
    pub velocity: DVec2,
    pub trajectory: TrajectoryKind,
    pub status: ContactStatus,
    pub active: bool,
    pub visible: bool,
    /// Display opacity after the fade-in delay (0.0 or 1.0).
    pub alpha: f64,
    /// Range in kilometres on the linear display scale.
    pub range_km: f64,
    pub azimuth_degrees: f64,
    pub show_trajectory: bool,
    /// Past positions, oldest first.
    pub history: Vec<DVec2>,
    /// Predicted positions for the rest of the flight (only when the overlay is on).
    pub predicted: Vec<DVec2>,
}

impl ContactView {
    /// Trail followed by prediction, for the trajectory overlay.
    pub fn full_path(&self) -> Vec<DVec2> {
        self.history
            .iter()
            .chain(&self.predicted)
            .copied()
            .collect()
    }
}

/// A terrain polygon for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonView {
    pub id: u32,
    pub kind: ZoneKind,
    pub color: Color,
    pub vertices: Vec<DVec2>,
}

/// An operator sector for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorView {
    pub id: u32,
    pub kind: ZoneKind,
    pub color: Color,
    pub distance_km: f64,
    pub angle_degrees: f64,
    pub width_degrees: f64,
    /// Normalized radius from the distance circles.
    pub radius: f64,
    pub active: bool,
    /// Wedge outline: the origin followed by the arc points.
    pub outline: Vec<DVec2>,
}
