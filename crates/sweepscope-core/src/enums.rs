//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::types::Color;

/// Flight curve followed by a contact from its start point to the antipode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrajectoryKind {
    /// Quadratic Bézier through a random control point.
    Parabolic,
    /// Straight line through the radar.
    Straight,
    /// Straight line with a perpendicular two-cycle weave.
    Sinusoidal,
}

impl TrajectoryKind {
    pub const ALL: [TrajectoryKind; 3] = [
        TrajectoryKind::Parabolic,
        TrajectoryKind::Straight,
        TrajectoryKind::Sinusoidal,
    ];
}

/// Operator classification of a contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    Unknown,
    Enemy,
    Ally,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 3] = [
        ContactStatus::Unknown,
        ContactStatus::Enemy,
        ContactStatus::Ally,
    ];

    /// Lowercase tag used by the voice and text front ends.
    pub fn as_tag(self) -> &'static str {
        match self {
            ContactStatus::Unknown => "unknown",
            ContactStatus::Enemy => "enemy",
            ContactStatus::Ally => "ally",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_tag() == tag)
            .ok_or_else(|| CommandError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Terrain and sector type tag. Drives display color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    SignalRejection,
    Wind,
    ScoSignal,
    Mfd,
    Bkp,
    Ppz,
    Pbl,
    Varu,
}

/// Color used for zones whose type tag could not be resolved.
pub const DEFAULT_ZONE_COLOR: Color = [0.7, 0.7, 0.7];

impl ZoneKind {
    pub const ALL: [ZoneKind; 8] = [
        ZoneKind::SignalRejection,
        ZoneKind::Wind,
        ZoneKind::ScoSignal,
        ZoneKind::Mfd,
        ZoneKind::Bkp,
        ZoneKind::Ppz,
        ZoneKind::Pbl,
        ZoneKind::Varu,
    ];

    /// Snake-case tag used by the voice and text front ends.
    pub fn as_tag(self) -> &'static str {
        match self {
            ZoneKind::SignalRejection => "signal_rejection",
            ZoneKind::Wind => "wind",
            ZoneKind::ScoSignal => "sco_signal",
            ZoneKind::Mfd => "mfd",
            ZoneKind::Bkp => "bkp",
            ZoneKind::Ppz => "ppz",
            ZoneKind::Pbl => "pbl",
            ZoneKind::Varu => "varu",
        }
    }

    /// Fixed display color for this kind.
    pub fn color(self) -> Color {
        match self {
            ZoneKind::SignalRejection => [1.0, 0.0, 0.0],
            ZoneKind::Wind => [0.0, 0.0, 1.0],
            ZoneKind::ScoSignal => [0.0, 1.0, 0.0],
            ZoneKind::Mfd => [1.0, 1.0, 0.0],
            ZoneKind::Bkp => [1.0, 0.5, 0.0],
            ZoneKind::Ppz => [0.5, 0.0, 0.5],
            ZoneKind::Pbl => [0.0, 1.0, 1.0],
            ZoneKind::Varu => [1.0, 0.0, 1.0],
        }
    }

    /// Color for a raw tag, falling back to grey when the tag is unknown.
    pub fn color_for_tag(tag: &str) -> Color {
        tag.parse::<ZoneKind>()
            .map(ZoneKind::color)
            .unwrap_or(DEFAULT_ZONE_COLOR)
    }
}

impl FromStr for ZoneKind {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_tag() == tag)
            .ok_or_else(|| CommandError::UnknownZoneKind(s.to_string()))
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
