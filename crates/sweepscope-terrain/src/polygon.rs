//! Terrain polygons.

use serde::{Deserialize, Serialize};

use sweepscope_core::enums::ZoneKind;
use sweepscope_core::geometry::point_in_polygon;
use sweepscope_core::state::PolygonView;
use sweepscope_core::types::{Color, DVec2};

/// An implicitly closed terrain polygon. Vertices may be concave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub id: u32,
    pub kind: ZoneKind,
    pub vertices: Vec<DVec2>,
}

impl Polygon {
    pub fn color(&self) -> Color {
        self.kind.color()
    }

    pub fn contains(&self, p: DVec2) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    pub fn view(&self) -> PolygonView {
        PolygonView {
            id: self.id,
            kind: self.kind,
            color: self.color(),
            vertices: self.vertices.clone(),
        }
    }
}
