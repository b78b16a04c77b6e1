//! Events emitted by the simulation for display and audio feedback.

use serde::{Deserialize, Serialize};

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RadarEvent {
    /// A new contact entered at the border.
    ContactSpawned { target_id: u32, azimuth_degrees: f64 },
    /// The sweep beam passed a contact for the first time.
    ContactDetected { target_id: u32, azimuth_degrees: f64 },
    /// A contact finished its flight.
    ContactExpired { target_id: u32 },
    /// An inactive contact was dropped from memory.
    ContactEvicted { target_id: u32 },
    SectorCreated { id: u32 },
    ZoneRemoved { id: u32 },
    /// A terrain polygon was replaced by its pieces.
    PolygonSplit { original_id: u32, pieces: Vec<u32> },
    /// A queued command was rejected.
    CommandRejected { reason: String },
}
