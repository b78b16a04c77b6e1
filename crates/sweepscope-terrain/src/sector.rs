//! Operator sectors: fixed-width wedges anchored at the radar.

use serde::{Deserialize, Serialize};

use sweepscope_core::constants::{SECTOR_ARC_SEGMENTS, SECTOR_WIDTH_DEGREES};
use sweepscope_core::enums::ZoneKind;
use sweepscope_core::geometry::{point_in_sector, polar_to_cartesian};
use sweepscope_core::state::SectorView;
use sweepscope_core::types::{Color, DVec2};

/// A wedge of `SECTOR_WIDTH_DEGREES` centred on `angle_degrees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: u32,
    pub kind: ZoneKind,
    pub distance_km: f64,
    /// Bearing of the centre line, `[0, 360)`, 90° = up.
    pub angle_degrees: f64,
    /// Normalized radius resolved from the distance circles at creation.
    pub radius: f64,
    /// Whether clipping applies this sector.
    pub active: bool,
}

impl Sector {
    pub fn width_degrees(&self) -> f64 {
        SECTOR_WIDTH_DEGREES
    }

    /// Start and end bearing of the wedge (not normalized).
    pub fn span(&self) -> (f64, f64) {
        let half = self.width_degrees() / 2.0;
        (self.angle_degrees - half, self.angle_degrees + half)
    }

    pub fn contains(&self, p: DVec2) -> bool {
        point_in_sector(p, self.angle_degrees, self.width_degrees(), self.radius)
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Display outline: the origin followed by evenly spaced arc points.
    pub fn outline(&self) -> Vec<DVec2> {
        let (start, end) = self.span();
        let mut points = Vec::with_capacity(SECTOR_ARC_SEGMENTS + 2);
        points.push(DVec2::ZERO);
        for i in 0..=SECTOR_ARC_SEGMENTS {
            let angle = start + (end - start) * i as f64 / SECTOR_ARC_SEGMENTS as f64;
            points.push(polar_to_cartesian(angle, self.radius));
        }
        points
    }

    pub fn view(&self) -> SectorView {
        SectorView {
            id: self.id,
            kind: self.kind,
            color: self.color(),
            distance_km: self.distance_km,
            angle_degrees: self.angle_degrees,
            width_degrees: self.width_degrees(),
            radius: self.radius,
            active: self.active,
            outline: self.outline(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector_at(angle_degrees: f64, radius: f64) -> Sector {
        Sector {
            id: 1,
            kind: ZoneKind::Wind,
            distance_km: 20.0,
            angle_degrees,
            radius,
            active: true,
        }
    }

    #[test]
    fn test_outline_spans_width() {
        let sector = sector_at(90.0, 1.0);
        let outline = sector.outline();
        assert_eq!(outline.len(), SECTOR_ARC_SEGMENTS + 2);
        assert_eq!(outline[0], DVec2::ZERO);
        let first = outline[1];
        let last = outline[outline.len() - 1];
        assert!((first.length() - 1.0).abs() < 1e-12);
        // Symmetric about the vertical centre line.
        assert!((first.x + last.x).abs() < 1e-12);
        assert!((first.y - last.y).abs() < 1e-12);
    }

    #[test]
    fn test_contains_uses_half_width() {
        let sector = sector_at(90.0, 1.0);
        assert!(sector.contains(polar_to_cartesian(107.0, 0.5)));
        assert!(!sector.contains(polar_to_cartesian(108.0, 0.5)));
        assert!(sector.contains(DVec2::ZERO));
    }
}
