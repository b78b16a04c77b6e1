//! Distance-circle table: piecewise-linear mapping from kilometres to display radius.

use sweepscope_core::config::DistanceCircle;

/// Ascending `(radius, distance_km)` breakpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    circles: Vec<DistanceCircle>,
}

impl DistanceTable {
    /// Build a table; entries are sorted by distance.
    pub fn new(mut circles: Vec<DistanceCircle>) -> Self {
        circles.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        Self { circles }
    }

    pub fn circles(&self) -> &[DistanceCircle] {
        &self.circles
    }

    /// Normalized radius for a real-world distance.
    ///
    /// Interpolates between the bracketing breakpoints and clamps to the first
    /// and last radius outside the table. An empty table maps everything to 0.
    pub fn radius_for(&self, distance_km: f64) -> f64 {
        let (Some(first), Some(last)) = (self.circles.first(), self.circles.last()) else {
            return 0.0;
        };
        if distance_km.is_nan() || distance_km <= first.distance_km {
            return first.radius;
        }
        if distance_km >= last.distance_km {
            return last.radius;
        }
        for pair in self.circles.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if distance_km <= hi.distance_km {
                let span = hi.distance_km - lo.distance_km;
                if span <= 0.0 {
                    return hi.radius;
                }
                let t = (distance_km - lo.distance_km) / span;
                return lo.radius + t * (hi.radius - lo.radius);
            }
        }
        last.radius
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::new(sweepscope_core::config::RadarConfig::default().distance_circles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point_table() -> DistanceTable {
        DistanceTable::new(vec![
            DistanceCircle {
                radius: 0.5,
                distance_km: 10.0,
            },
            DistanceCircle {
                radius: 0.8,
                distance_km: 15.0,
            },
        ])
    }

    #[test]
    fn test_exact_at_breakpoints() {
        let table = two_point_table();
        assert!((table.radius_for(10.0) - 0.5).abs() < 1e-12);
        assert!((table.radius_for(15.0) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_interpolates_between_breakpoints() {
        let table = two_point_table();
        assert!((table.radius_for(12.5) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_clamps_outside_table() {
        let table = two_point_table();
        assert_eq!(table.radius_for(0.0), 0.5);
        assert_eq!(table.radius_for(-3.0), 0.5);
        assert_eq!(table.radius_for(100.0), 0.8);
        assert_eq!(DistanceTable::new(Vec::new()).radius_for(12.0), 0.0);
    }

    #[test]
    fn test_monotonic_over_default_table() {
        let table = DistanceTable::default();
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=400 {
            let km = step as f64 * 0.1;
            let radius = table.radius_for(km);
            assert!(radius >= previous, "radius decreased at {km} km");
            previous = radius;
        }
        assert!((table.radius_for(28.0) - 1.58).abs() < 1e-9);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let table = DistanceTable::new(vec![
            DistanceCircle {
                radius: 0.8,
                distance_km: 15.0,
            },
            DistanceCircle {
                radius: 0.5,
                distance_km: 10.0,
            },
        ]);
        assert!((table.radius_for(12.5) - 0.65).abs() < 1e-12);
    }
}
