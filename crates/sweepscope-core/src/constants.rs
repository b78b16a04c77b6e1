//! Simulation constants and tuning parameters.
//!
//! Values that are part of the model (flight time, sector width, sinusoid
//! shape) are fixed here. Tunables that operators may change live in
//! [`crate::config::RadarConfig`], whose defaults are taken from this file.

use std::f64::consts::PI;

// --- Display ---

/// Radius of the radar border circle in radar units.
pub const BORDER_RADIUS: f64 = 1.9;

/// Real-world distance (km) represented by the outermost distance circle.
pub const MAX_DISTANCE_KM: f64 = 30.0;

/// Default distance circles as `(radius, distance_km)` pairs.
pub const DEFAULT_DISTANCE_CIRCLES: [(f64, f64); 5] = [
    (0.5, 10.0),
    (0.8, 15.0),
    (1.1, 20.0),
    (1.4, 25.0),
    (1.7, MAX_DISTANCE_KM),
];

/// Seconds after first detection before a contact fades in on the display.
pub const FADE_IN_SECS: f64 = 0.5;

// --- Trajectories ---

/// Flight time that maps to normalized time `t = 1.0`.
pub const FLIGHT_DURATION_SECS: f64 = 3.0;

/// Normalized-time step for the forward-difference velocity estimate.
pub const VELOCITY_LOOKAHEAD: f64 = 0.01;

/// Scale applied to the forward difference (1 / VELOCITY_LOOKAHEAD).
pub const VELOCITY_SCALE: f64 = 100.0;

/// Perpendicular amplitude of the sinusoidal trajectory (radar units).
pub const SINUSOID_AMPLITUDE: f64 = 0.3;

/// Angular frequency of the sinusoid over `t' in [0, 1]`: two full cycles.
pub const SINUSOID_OMEGA: f64 = 4.0 * PI;

/// Start positions closer to the origin than this are degenerate.
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Number of points in a predicted future path.
pub const FUTURE_PATH_SAMPLES: usize = 20;

/// Minimum interval between trajectory history samples (seconds).
pub const HISTORY_INTERVAL_SECS: f64 = 0.05;

// --- Spawning ---

/// Maximum number of simultaneously active contacts.
pub const MAX_OBJECTS: usize = 10;

/// Maximum active contacts inside one density window.
pub const MAX_OBJECTS_PER_SECTOR: usize = 3;

/// Half-width of the density window around a spawn azimuth (radians).
pub const SECTOR_WINDOW_RADIANS: f64 = 1.0;

/// Minimum time between spawn attempts (seconds).
pub const SPAWN_DELAY_SECS: f64 = 1.0;

/// Lower bound of the random speed factor.
pub const SPEED_FACTOR_MIN: f64 = 0.05;

/// Upper bound of the random speed factor.
pub const SPEED_FACTOR_MAX: f64 = 0.1;

/// Magnitude bound of the random control-point offset.
pub const CONTROL_OFFSET_MAX: f64 = 1.0;

/// Inactive contacts are evicted after this many seconds.
pub const EVICTION_DELAY_SECS: f64 = 5.0;

// --- Sweep ---

/// Default beam rotation per tick in degrees. Negative rotates clockwise.
pub const DEFAULT_ROTATION_SPEED_DEG: f64 = -5.0;

/// Arc behind the beam in which contacts are detected (degrees).
pub const TRAILING_WINDOW_DEGREES: f64 = 20.0;

/// Multiplier for the operator "speed up" control.
pub const ROTATION_SPEED_UP: f64 = 1.2;

/// Multiplier for the operator "slow down" control.
pub const ROTATION_SLOW_DOWN: f64 = 0.8;

// --- Sectors ---

/// Angular width of every operator sector (degrees).
pub const SECTOR_WIDTH_DEGREES: f64 = 35.0;

/// Arc segments in a sector's display outline.
pub const SECTOR_ARC_SEGMENTS: usize = 10;

// --- Terrain generation ---

/// Minimum number of random terrain polygons.
pub const MIN_TERRAIN_POLYGONS: usize = 1;

/// Maximum number of random terrain polygons.
pub const MAX_TERRAIN_POLYGONS: usize = 5;

/// Minimum vertex count of a random terrain polygon.
pub const MIN_POLYGON_SIDES: usize = 6;

/// Maximum vertex count of a random terrain polygon.
pub const MAX_POLYGON_SIDES: usize = 30;

/// Vertex radius range of a random terrain polygon (radar units).
pub const POLYGON_VERTEX_RADIUS: (f64, f64) = (0.2, 0.5);

/// Angular extent a random terrain polygon's vertices are spread over (degrees).
pub const POLYGON_ANGULAR_SPAN_DEG: f64 = 90.0;
