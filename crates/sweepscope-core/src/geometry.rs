//! Planar geometry helpers in radar space.
//!
//! Angles follow the display convention: degrees counter-clockwise from +x,
//! so 90° points "up". All angle results are normalized into `[0, 360)`.

use crate::types::DVec2;

/// Distance from the radar (origin) in radar units.
pub fn distance_from_origin(p: DVec2) -> f64 {
    p.length()
}

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Azimuth of a point in degrees, `[0, 360)`.
pub fn azimuth_degrees(p: DVec2) -> f64 {
    normalize_degrees(p.y.atan2(p.x).to_degrees())
}

/// Azimuth of a point in radians, `[0, 2π)`.
pub fn azimuth_radians(p: DVec2) -> f64 {
    azimuth_degrees(p).to_radians()
}

/// Point at the given azimuth (degrees) and distance from the origin.
pub fn polar_to_cartesian(azimuth_deg: f64, radius: f64) -> DVec2 {
    let a = azimuth_deg.to_radians();
    DVec2::new(radius * a.cos(), radius * a.sin())
}

/// Whether `angle` lies on the inclusive arc running counter-clockwise from
/// `start` to `end`. Handles arcs that cross 0°. An arc spanning 360° or
/// more covers every angle.
pub fn angle_in_arc(angle: f64, start: f64, end: f64) -> bool {
    if end - start >= 360.0 {
        return true;
    }
    let a = normalize_degrees(angle);
    let s = normalize_degrees(start);
    let e = normalize_degrees(end);
    if s <= e {
        s <= a && a <= e
    } else {
        a >= s || a <= e
    }
}

/// Smallest absolute difference between two angles in radians, `[0, π]`.
pub fn angular_distance_radians(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(std::f64::consts::TAU);
    diff.min(std::f64::consts::TAU - diff)
}

/// Even-odd ray-casting test. Polygons with fewer than 3 vertices contain nothing.
pub fn point_in_polygon(p: DVec2, vertices: &[DVec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether a point lies inside the circular sector centred on `center_deg`
/// with total angular `width_deg` and the given `radius`.
///
/// The origin has no azimuth and counts as inside whenever it is within range.
pub fn point_in_sector(p: DVec2, center_deg: f64, width_deg: f64, radius: f64) -> bool {
    let distance = distance_from_origin(p);
    if distance > radius {
        return false;
    }
    if distance == 0.0 || width_deg >= 360.0 {
        return true;
    }
    let half = width_deg / 2.0;
    angle_in_arc(azimuth_degrees(p), center_deg - half, center_deg + half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_azimuth_quadrants() {
        assert!((azimuth_degrees(DVec2::new(1.0, 0.0)) - 0.0).abs() < 1e-10);
        assert!((azimuth_degrees(DVec2::new(0.0, 1.0)) - 90.0).abs() < 1e-10);
        assert!((azimuth_degrees(DVec2::new(-1.0, 0.0)) - 180.0).abs() < 1e-10);
        assert!((azimuth_degrees(DVec2::new(0.0, -1.0)) - 270.0).abs() < 1e-10);
        assert!((azimuth_degrees(DVec2::new(1.0, -1.0)) - 315.0).abs() < 1e-10);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-5.0) - 355.0).abs() < 1e-10);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-10);
        assert!(normalize_degrees(-1e-18) < 360.0);
    }

    #[test]
    fn test_angle_in_arc_wraparound() {
        assert!(angle_in_arc(350.0, 340.0, 10.0));
        assert!(angle_in_arc(5.0, 340.0, 10.0));
        assert!(!angle_in_arc(20.0, 340.0, 10.0));
        assert!(angle_in_arc(10.0, 0.0, 10.0));
        assert!(!angle_in_arc(10.5, 0.0, 10.0));
        assert!(angle_in_arc(-10.0, -20.0, 0.0));
    }

    #[test]
    fn test_angle_in_arc_full_turn() {
        // Start and end normalize to the same angle but the arc is a full turn.
        for angle in [0.0, 90.0, 179.9, 270.0, 359.9] {
            assert!(angle_in_arc(angle, -40.0, 320.0));
        }
        assert!(angle_in_arc(12.0, 0.0, 720.0));
        // A zero-width arc still holds only its endpoint.
        assert!(angle_in_arc(30.0, 30.0, 30.0));
        assert!(!angle_in_arc(31.0, 30.0, 30.0));
    }

    #[test]
    fn test_angular_distance_shortest_way() {
        let d = angular_distance_radians(0.1, std::f64::consts::TAU - 0.1);
        assert!((d - 0.2).abs() < 1e-10);
        assert!((angular_distance_radians(1.0, 2.5) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_point_in_polygon_square() {
        let square = [
            DVec2::new(-1.0, -1.0),
            DVec2::new(1.0, -1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(-1.0, 1.0),
        ];
        assert!(point_in_polygon(DVec2::ZERO, &square));
        assert!(point_in_polygon(DVec2::new(0.9, -0.9), &square));
        assert!(!point_in_polygon(DVec2::new(1.5, 0.0), &square));
        assert!(!point_in_polygon(DVec2::ZERO, &square[..2]));
    }

    #[test]
    fn test_point_in_polygon_concave() {
        // U shape opening upward.
        let u = [
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 0.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(2.0, 3.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 3.0),
            DVec2::new(0.0, 3.0),
        ];
        assert!(point_in_polygon(DVec2::new(0.5, 2.0), &u));
        assert!(!point_in_polygon(DVec2::new(1.5, 2.0), &u));
        assert!(point_in_polygon(DVec2::new(1.5, 0.5), &u));
    }

    #[test]
    fn test_point_in_sector_origin_always_inside() {
        for center in [0.0, 90.0, 200.0, 359.0] {
            assert!(point_in_sector(DVec2::ZERO, center, 35.0, 0.1));
        }
        assert!(!point_in_sector(DVec2::new(0.2, 0.0), 0.0, 35.0, 0.1));
    }

    #[test]
    fn test_point_in_sector_span_and_radius() {
        let p = polar_to_cartesian(45.0, 1.0);
        assert!(point_in_sector(p, 45.0, 35.0, 1.5));
        assert!(point_in_sector(p, 60.0, 35.0, 1.5));
        assert!(!point_in_sector(p, 70.0, 35.0, 1.5));
        assert!(!point_in_sector(p, 45.0, 35.0, 0.9));
    }

    #[test]
    fn test_point_in_sector_across_zero() {
        let p = polar_to_cartesian(355.0, 0.5);
        assert!(point_in_sector(p, 5.0, 35.0, 1.0));
        let q = polar_to_cartesian(10.0, 0.5);
        assert!(point_in_sector(q, 355.0, 35.0, 1.0));
    }
}
