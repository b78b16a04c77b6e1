//! Terrain and sector system for SWEEPSCOPE.
//!
//! Terrain polygons, operator sectors, the distance-circle table,
//! the zone store that owns them, and the sector clipping engine.

pub use sweepscope_core as core;

pub mod clip;
pub mod distance;
pub mod polygon;
pub mod procgen;
pub mod sector;
pub mod store;

// Re-export key types for convenience.
pub use clip::{apply_sectors, split_polygon_by_sector, ClipReport};
pub use distance::DistanceTable;
pub use polygon::Polygon;
pub use procgen::generate_random_polygons;
pub use sector::Sector;
pub use store::{RemovedZone, ZoneStore};
