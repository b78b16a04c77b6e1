//! Zone store: owns terrain polygons and operator sectors.
//!
//! Polygons and sectors have independent id spaces. Each counter starts at 1
//! and only ever increases, so ids are never reused within a run.

use std::collections::BTreeMap;

use tracing::info;

use sweepscope_core::enums::ZoneKind;
use sweepscope_core::error::CommandError;
use sweepscope_core::geometry::normalize_degrees;
use sweepscope_core::types::DVec2;

use crate::distance::DistanceTable;
use crate::polygon::Polygon;
use crate::sector::Sector;

/// What a shared removal by id took out of the store.
#[derive(Debug, Clone, PartialEq)]
pub enum RemovedZone {
    Polygon(Polygon),
    Sector(Sector),
}

#[derive(Debug, Clone)]
pub struct ZoneStore {
    polygons: BTreeMap<u32, Polygon>,
    sectors: BTreeMap<u32, Sector>,
    next_polygon_id: u32,
    next_sector_id: u32,
    distances: DistanceTable,
}

impl Default for ZoneStore {
    fn default() -> Self {
        Self::new(DistanceTable::default())
    }
}

impl ZoneStore {
    pub fn new(distances: DistanceTable) -> Self {
        Self {
            polygons: BTreeMap::new(),
            sectors: BTreeMap::new(),
            next_polygon_id: 1,
            next_sector_id: 1,
            distances,
        }
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    // --- Polygons ---

    /// Add a terrain polygon and return its id.
    pub fn add_polygon(&mut self, vertices: Vec<DVec2>, kind: ZoneKind) -> Result<u32, CommandError> {
        if vertices.len() < 3 {
            return Err(CommandError::TooFewVertices(vertices.len()));
        }
        Ok(self.push_polygon(vertices, kind))
    }

    /// Insert a polygon under a freshly assigned id, ignoring the id it carries.
    pub fn insert_polygon(&mut self, polygon: Polygon) -> Result<u32, CommandError> {
        self.add_polygon(polygon.vertices, polygon.kind)
    }

    /// Store a vertex list without validation. Clipping pieces may hold fewer
    /// than three vertices.
    pub(crate) fn push_polygon(&mut self, vertices: Vec<DVec2>, kind: ZoneKind) -> u32 {
        let id = self.next_polygon_id;
        self.next_polygon_id += 1;
        self.polygons.insert(id, Polygon { id, kind, vertices });
        id
    }

    pub fn remove_polygon(&mut self, id: u32) -> bool {
        self.polygons.remove(&id).is_some()
    }

    pub fn polygon(&self, id: u32) -> Option<&Polygon> {
        self.polygons.get(&id)
    }

    /// Polygons in id order.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.values()
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    // --- Sectors ---

    /// Create a sector, resolving its radius through the distance table.
    pub fn create_sector(
        &mut self,
        distance_km: f64,
        angle_degrees: f64,
        kind: ZoneKind,
    ) -> Result<Sector, CommandError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(CommandError::MalformedSector(format!(
                "distance must be a non-negative number of km, got {distance_km}"
            )));
        }
        if !angle_degrees.is_finite() {
            return Err(CommandError::MalformedSector(format!(
                "angle must be finite, got {angle_degrees}"
            )));
        }

        let id = self.next_sector_id;
        self.next_sector_id += 1;
        let sector = Sector {
            id,
            kind,
            distance_km,
            angle_degrees: normalize_degrees(angle_degrees),
            radius: self.distances.radius_for(distance_km),
            active: true,
        };
        info!(
            id,
            distance_km,
            angle = sector.angle_degrees,
            radius = sector.radius,
            kind = %kind,
            "sector created"
        );
        self.sectors.insert(id, sector.clone());
        Ok(sector)
    }

    pub fn remove_sector(&mut self, id: u32) -> bool {
        self.sectors.remove(&id).is_some()
    }

    pub fn set_sector_active(&mut self, id: u32, active: bool) -> bool {
        match self.sectors.get_mut(&id) {
            Some(sector) => {
                sector.active = active;
                true
            }
            None => false,
        }
    }

    pub fn sector(&self, id: u32) -> Option<&Sector> {
        self.sectors.get(&id)
    }

    /// Sectors in id order.
    pub fn sectors(&self) -> impl Iterator<Item = &Sector> {
        self.sectors.values()
    }

    // --- Shared ---

    /// Remove a polygon with this id, or failing that a sector.
    pub fn remove_polygon_or_sector(&mut self, id: u32) -> Option<RemovedZone> {
        if let Some(polygon) = self.polygons.remove(&id) {
            info!(id, "polygon removed");
            return Some(RemovedZone::Polygon(polygon));
        }
        if let Some(sector) = self.sectors.remove(&id) {
            info!(id, "sector removed");
            return Some(RemovedZone::Sector(sector));
        }
        None
    }
}
