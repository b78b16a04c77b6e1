//! Operator commands sent from the display or voice front end to the simulation.
//!
//! Commands are validated when processed; an invalid command is rejected
//! with a [`crate::error::CommandError`] and leaves the simulation untouched.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::DVec2;

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Contacts ---
    /// Reclassify a contact.
    SetContactStatus {
        target_id: u32,
        status: ContactStatus,
    },
    /// Toggle the trajectory overlay of a contact.
    ToggleTrajectory { target_id: u32 },

    // --- Zones ---
    /// Open a new sector at the given range and bearing.
    CreateSector {
        distance_km: f64,
        angle_degrees: f64,
        kind: ZoneKind,
    },
    /// Enable or disable a sector for clipping.
    SetSectorActive { id: u32, active: bool },
    /// Add a terrain polygon.
    AddPolygon { vertices: Vec<DVec2>, kind: ZoneKind },
    /// Remove a polygon, or a sector if no polygon has this id.
    RemoveZone { id: u32 },
    /// Split terrain polygons against every active sector.
    ApplySectorClipping,

    // --- Sweep ---
    /// Set the beam rotation in degrees per tick (sign selects direction).
    SetRotationSpeed { deg_per_tick: f64 },
    /// Multiply the beam rotation speed.
    ScaleRotationSpeed { factor: f64 },
}
