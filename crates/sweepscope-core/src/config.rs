//! Radar configuration injected into the engine at construction.
//!
//! Every tunable the simulation reads lives here; there is no global state.
//! Missing JSON fields fall back to [`RadarConfig::default`].

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ZoneKind;
use crate::error::ConfigError;

/// One entry of the distance-circle table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceCircle {
    /// Normalized display radius.
    pub radius: f64,
    /// Real-world distance in kilometres shown at that radius.
    pub distance_km: f64,
}

/// Sector created automatically when the engine starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorSpec {
    pub distance_km: f64,
    pub angle_degrees: f64,
    pub kind: ZoneKind,
}

/// Complete simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// RNG seed. Same seed and same tick times give the same simulation.
    pub seed: u64,
    /// Clock value at construction; the first spawn is due one delay later.
    pub start_time: f64,
    pub border_radius: f64,
    /// Real-world distance at the border circle, for contact range readouts.
    pub max_distance_km: f64,
    pub distance_circles: Vec<DistanceCircle>,

    // --- Spawning ---
    pub max_objects: usize,
    pub max_objects_per_sector: usize,
    pub sector_window_radians: f64,
    pub spawn_delay_secs: f64,
    pub speed_factor_min: f64,
    pub speed_factor_max: f64,
    /// Assign a random status to new contacts instead of `Unknown`.
    pub random_status: bool,

    // --- Contacts ---
    pub history_interval_secs: f64,
    pub fade_in_secs: f64,
    /// Seconds an inactive contact is retained. `None` keeps it forever.
    pub eviction_delay_secs: Option<f64>,

    // --- Sweep ---
    /// Degrees per tick; the sign selects the rotation direction.
    pub rotation_speed_deg_per_tick: f64,
    pub trailing_window_degrees: f64,

    // --- Terrain ---
    /// Generate random terrain polygons at startup.
    pub seed_terrain: bool,
    pub min_polygons: usize,
    pub max_polygons: usize,
    pub min_polygon_sides: usize,
    pub max_polygon_sides: usize,
    pub default_sectors: Vec<SectorSpec>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_time: 0.0,
            border_radius: BORDER_RADIUS,
            max_distance_km: MAX_DISTANCE_KM,
            distance_circles: DEFAULT_DISTANCE_CIRCLES
                .iter()
                .map(|&(radius, distance_km)| DistanceCircle {
                    radius,
                    distance_km,
                })
                .collect(),
            max_objects: MAX_OBJECTS,
            max_objects_per_sector: MAX_OBJECTS_PER_SECTOR,
            sector_window_radians: SECTOR_WINDOW_RADIANS,
            spawn_delay_secs: SPAWN_DELAY_SECS,
            speed_factor_min: SPEED_FACTOR_MIN,
            speed_factor_max: SPEED_FACTOR_MAX,
            random_status: false,
            history_interval_secs: HISTORY_INTERVAL_SECS,
            fade_in_secs: FADE_IN_SECS,
            eviction_delay_secs: Some(EVICTION_DELAY_SECS),
            rotation_speed_deg_per_tick: DEFAULT_ROTATION_SPEED_DEG,
            trailing_window_degrees: TRAILING_WINDOW_DEGREES,
            seed_terrain: false,
            min_polygons: MIN_TERRAIN_POLYGONS,
            max_polygons: MAX_TERRAIN_POLYGONS,
            min_polygon_sides: MIN_POLYGON_SIDES,
            max_polygon_sides: MAX_POLYGON_SIDES,
            default_sectors: Vec::new(),
        }
    }
}

impl RadarConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RadarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Signal-rejection and wind sectors of the classic startup layout.
    pub fn classic_sectors() -> Vec<SectorSpec> {
        vec![
            SectorSpec {
                distance_km: 10.0,
                angle_degrees: 45.0,
                kind: ZoneKind::SignalRejection,
            },
            SectorSpec {
                distance_km: 28.0,
                angle_degrees: 87.0,
                kind: ZoneKind::Wind,
            },
        ]
    }

    /// Convert a distance in radar units to kilometres on the display scale.
    pub fn units_to_km(&self, units: f64) -> f64 {
        units * self.max_distance_km / self.border_radius
    }

    /// Check value ranges the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.border_radius.is_finite() && self.border_radius > 0.0) {
            return Err(ConfigError::invalid("border_radius", "must be positive"));
        }
        if !(self.max_distance_km.is_finite() && self.max_distance_km > 0.0) {
            return Err(ConfigError::invalid("max_distance_km", "must be positive"));
        }
        if !self.start_time.is_finite() {
            return Err(ConfigError::invalid("start_time", "must be finite"));
        }
        if self.distance_circles.is_empty() {
            return Err(ConfigError::invalid("distance_circles", "must not be empty"));
        }
        let ascending = self.distance_circles.windows(2).all(|pair| {
            pair[0].distance_km < pair[1].distance_km && pair[0].radius <= pair[1].radius
        });
        if !ascending {
            return Err(ConfigError::invalid(
                "distance_circles",
                "entries must be sorted by ascending distance and radius",
            ));
        }
        if self.max_objects_per_sector == 0 {
            return Err(ConfigError::invalid("max_objects_per_sector", "must be at least 1"));
        }
        if !(self.spawn_delay_secs.is_finite() && self.spawn_delay_secs >= 0.0) {
            return Err(ConfigError::invalid("spawn_delay_secs", "must be non-negative"));
        }
        if !(self.speed_factor_min > 0.0 && self.speed_factor_min <= self.speed_factor_max)
            || !self.speed_factor_max.is_finite()
        {
            return Err(ConfigError::invalid(
                "speed_factor_min",
                format!(
                    "need 0 < min <= max, got {}..{}",
                    self.speed_factor_min, self.speed_factor_max
                ),
            ));
        }
        if !(self.sector_window_radians.is_finite() && self.sector_window_radians >= 0.0) {
            return Err(ConfigError::invalid("sector_window_radians", "must be non-negative"));
        }
        if !self.rotation_speed_deg_per_tick.is_finite() {
            return Err(ConfigError::invalid("rotation_speed_deg_per_tick", "must be finite"));
        }
        if !(0.0..=360.0).contains(&self.trailing_window_degrees) {
            return Err(ConfigError::invalid(
                "trailing_window_degrees",
                "must be within 0..=360",
            ));
        }
        if !(self.history_interval_secs.is_finite() && self.history_interval_secs >= 0.0) {
            return Err(ConfigError::invalid("history_interval_secs", "must be non-negative"));
        }
        if !(self.fade_in_secs.is_finite() && self.fade_in_secs >= 0.0) {
            return Err(ConfigError::invalid("fade_in_secs", "must be non-negative"));
        }
        if let Some(delay) = self.eviction_delay_secs {
            if !(delay.is_finite() && delay >= 0.0) {
                return Err(ConfigError::invalid("eviction_delay_secs", "must be non-negative"));
            }
        }
        if self.min_polygons > self.max_polygons {
            return Err(ConfigError::invalid("min_polygons", "must not exceed max_polygons"));
        }
        if self.min_polygon_sides < 3 || self.min_polygon_sides > self.max_polygon_sides {
            return Err(ConfigError::invalid(
                "min_polygon_sides",
                "need 3 <= min_polygon_sides <= max_polygon_sides",
            ));
        }
        Ok(())
    }
}
