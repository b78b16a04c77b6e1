//! Random terrain generation.
//!
//! Produces fan-shaped terrain polygons scattered inside the radar border.

use rand::seq::SliceRandom;
use rand::Rng;

use sweepscope_core::config::RadarConfig;
use sweepscope_core::constants::{POLYGON_ANGULAR_SPAN_DEG, POLYGON_VERTEX_RADIUS};
use sweepscope_core::enums::ZoneKind;
use sweepscope_core::geometry::polar_to_cartesian;
use sweepscope_core::types::DVec2;

use crate::store::ZoneStore;

/// Uniformly random angle, uniformly random radius in `[0, border_radius]`.
pub fn random_point_inside<R: Rng>(rng: &mut R, border_radius: f64) -> DVec2 {
    let radius = rng.gen_range(0.0..=border_radius);
    let angle: f64 = rng.gen_range(0.0..360.0);
    polar_to_cartesian(angle, radius)
}

/// Vertices fanned over a quarter turn around `center` with random radii.
pub fn random_polygon_vertices<R: Rng>(rng: &mut R, center: DVec2, sides: usize) -> Vec<DVec2> {
    let offset: f64 = rng.gen_range(0.0..90.0);
    let step = POLYGON_ANGULAR_SPAN_DEG / sides as f64;
    let (r_min, r_max) = POLYGON_VERTEX_RADIUS;
    (0..sides)
        .map(|i| {
            let radius = rng.gen_range(r_min..=r_max);
            center + polar_to_cartesian(offset + i as f64 * step, radius)
        })
        .collect()
}

/// Populate the store with a random number of random terrain polygons.
/// Returns the ids of the new polygons.
pub fn generate_random_polygons<R: Rng>(
    store: &mut ZoneStore,
    rng: &mut R,
    config: &RadarConfig,
) -> Vec<u32> {
    let count = rng.gen_range(ordered(config.min_polygons, config.max_polygons));
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let center = random_point_inside(rng, config.border_radius);
        let sides = rng
            .gen_range(ordered(config.min_polygon_sides, config.max_polygon_sides))
            .max(3);
        let vertices = random_polygon_vertices(rng, center, sides);
        let kind = *ZoneKind::ALL.choose(rng).unwrap_or(&ZoneKind::SignalRejection);
        if let Ok(id) = store.add_polygon(vertices, kind) {
            ids.push(id);
        }
    }
    ids
}

fn ordered(a: usize, b: usize) -> std::ops::RangeInclusive<usize> {
    a.min(b)..=a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generated_polygons_respect_config_ranges() {
        let config = RadarConfig::default();
        let mut store = ZoneStore::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let ids = generate_random_polygons(&mut store, &mut rng, &config);

        assert!((config.min_polygons..=config.max_polygons).contains(&ids.len()));
        for polygon in store.polygons() {
            let n = polygon.vertices.len();
            assert!((config.min_polygon_sides..=config.max_polygon_sides).contains(&n));
            // Centre within the border, vertices at most 0.5 further out.
            for v in &polygon.vertices {
                assert!(v.length() <= config.border_radius + POLYGON_VERTEX_RADIUS.1 + 1e-9);
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let config = RadarConfig::default();
        let mut a = ZoneStore::default();
        let mut b = ZoneStore::default();
        generate_random_polygons(&mut a, &mut ChaCha8Rng::seed_from_u64(3), &config);
        generate_random_polygons(&mut b, &mut ChaCha8Rng::seed_from_u64(3), &config);
        let va: Vec<_> = a.polygons().cloned().collect();
        let vb: Vec<_> = b.polygons().cloned().collect();
        assert_eq!(va, vb);
    }
}
