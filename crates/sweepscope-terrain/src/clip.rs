//! Sector clipping engine.
//!
//! Splits terrain polygons where their vertices cross a sector boundary.
//! The split happens at existing vertices only: no intersection points are
//! inserted on the wedge edges or arc, so pieces approximate the true clip.

use tracing::info;

use sweepscope_core::types::DVec2;

use crate::sector::Sector;
use crate::store::ZoneStore;

/// Polygons replaced during one clipping pass: `(original_id, piece_ids)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipReport {
    pub split: Vec<(u32, Vec<u32>)>,
}

impl ClipReport {
    pub fn is_empty(&self) -> bool {
        self.split.is_empty()
    }
}

/// Inside/outside flag per vertex.
pub fn classify_vertices(vertices: &[DVec2], sector: &Sector) -> Vec<bool> {
    vertices.iter().map(|&v| sector.contains(v)).collect()
}

/// Cut a vertex ring into maximal circular runs of same-classification vertices.
///
/// A polygon entirely inside or entirely outside the sector comes back as a
/// single unchanged vertex list. Otherwise every run becomes one piece; runs
/// may be shorter than three vertices.
pub fn split_polygon_by_sector(vertices: &[DVec2], sector: &Sector) -> Vec<Vec<DVec2>> {
    let inside = classify_vertices(vertices, sector);
    let Some(&first) = inside.first() else {
        return vec![Vec::new()];
    };
    if inside.iter().all(|&flag| flag == first) {
        return vec![vertices.to_vec()];
    }

    // Start the walk on a run boundary so the run that wraps past the end of
    // the list is not cut in two.
    let n = vertices.len();
    let start = (0..n)
        .find(|&i| inside[i] != inside[(i + n - 1) % n])
        .unwrap_or(0);

    let mut pieces = Vec::new();
    let mut current = Vec::new();
    let mut state = inside[start];
    for k in 0..n {
        let i = (start + k) % n;
        if inside[i] != state {
            pieces.push(std::mem::take(&mut current));
            state = inside[i];
        }
        current.push(vertices[i]);
    }
    pieces.push(current);
    pieces
}

/// Split every polygon in the store against the sectors accepted by `is_active`.
///
/// Each polygon is fed through the active sectors in id order, and every
/// piece one sector produces is fed to the next. When the final set has more
/// than one piece the original is replaced by them (same kind, fresh ids), so
/// no stored polygon straddles an active sector afterwards.
pub fn apply_sectors<F>(store: &mut ZoneStore, is_active: F) -> ClipReport
where
    F: Fn(&Sector) -> bool,
{
    let active: Vec<Sector> = store.sectors().filter(|s| is_active(s)).cloned().collect();
    let mut report = ClipReport::default();
    if active.is_empty() {
        return report;
    }

    let polygon_ids: Vec<u32> = store.polygons().map(|p| p.id).collect();
    for polygon_id in polygon_ids {
        let Some(polygon) = store.polygon(polygon_id).cloned() else {
            continue;
        };
        let mut pieces = vec![polygon.vertices.clone()];
        let mut cut_by = Vec::new();
        for sector in &active {
            let before = pieces.len();
            pieces = pieces
                .iter()
                .flat_map(|piece| split_polygon_by_sector(piece, sector))
                .collect();
            if pieces.len() > before {
                cut_by.push(sector.id);
            }
        }
        if pieces.len() < 2 {
            continue;
        }

        store.remove_polygon(polygon.id);
        let piece_ids: Vec<u32> = pieces
            .into_iter()
            .map(|vertices| store.push_polygon(vertices, polygon.kind))
            .collect();
        info!(
            polygon = polygon.id,
            sectors = ?cut_by,
            pieces = piece_ids.len(),
            "polygon split by sectors"
        );
        report.split.push((polygon.id, piece_ids));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweepscope_core::enums::ZoneKind;
    use sweepscope_core::geometry::polar_to_cartesian;

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(-1.0, -1.0),
            DVec2::new(1.0, -1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(-1.0, 1.0),
        ]
    }

    fn sector(angle_degrees: f64, radius: f64) -> Sector {
        Sector {
            id: 1,
            kind: ZoneKind::SignalRejection,
            distance_km: 30.0,
            angle_degrees,
            radius,
            active: true,
        }
    }

    #[test]
    fn test_square_against_upper_right_sector_splits() {
        let pieces = split_polygon_by_sector(&square(), &sector(45.0, 2.0));
        assert!(pieces.len() >= 2, "expected a split, got {pieces:?}");
        let total: usize = pieces.iter().map(Vec::len).sum();
        assert_eq!(total, 4, "every vertex lands in exactly one piece");
        assert!(pieces.iter().any(|p| p == &vec![DVec2::new(1.0, 1.0)]));
    }

    #[test]
    fn test_entirely_outside_is_unchanged() {
        // Radius too short to reach any corner.
        let pieces = split_polygon_by_sector(&square(), &sector(45.0, 1.0));
        assert_eq!(pieces, vec![square()]);
        // Pointing away from every corner.
        let pieces = split_polygon_by_sector(&square(), &sector(0.0, 5.0));
        assert_eq!(pieces, vec![square()]);
    }

    #[test]
    fn test_entirely_inside_is_unchanged() {
        let small: Vec<DVec2> = [40.0, 45.0, 50.0]
            .iter()
            .map(|&a| polar_to_cartesian(a, 0.5))
            .collect();
        let pieces = split_polygon_by_sector(&small, &sector(45.0, 1.0));
        assert_eq!(pieces, vec![small]);
    }

    #[test]
    fn test_run_wrapping_past_end_stays_whole() {
        // Inside, outside, outside, inside: the two inside vertices form one run.
        let ring = vec![
            polar_to_cartesian(50.0, 0.5),
            polar_to_cartesian(150.0, 0.5),
            polar_to_cartesian(250.0, 0.5),
            polar_to_cartesian(40.0, 0.5),
        ];
        let pieces = split_polygon_by_sector(&ring, &sector(45.0, 1.0));
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], vec![ring[1], ring[2]]);
        assert_eq!(pieces[1], vec![ring[3], ring[0]]);
    }

    #[test]
    fn test_empty_vertices() {
        assert_eq!(
            split_polygon_by_sector(&[], &sector(45.0, 1.0)),
            vec![Vec::<DVec2>::new()]
        );
    }

    #[test]
    fn test_apply_sectors_replaces_polygon_with_pieces() {
        let mut store = ZoneStore::default();
        let original = store.add_polygon(square(), ZoneKind::Varu).unwrap();
        let untouched = store
            .add_polygon(
                vec![
                    DVec2::new(-1.5, -0.2),
                    DVec2::new(-1.2, -0.2),
                    DVec2::new(-1.2, 0.2),
                ],
                ZoneKind::Wind,
            )
            .unwrap();
        // 30 km resolves to the outer radius 1.7, which reaches the corners.
        let sector = store.create_sector(30.0, 45.0, ZoneKind::Wind).unwrap();
        assert!(sector.radius > 2f64.sqrt());

        let report = apply_sectors(&mut store, |s| s.active);
        assert_eq!(report.split.len(), 1);
        let (old_id, piece_ids) = &report.split[0];
        assert_eq!(*old_id, original);
        assert_eq!(piece_ids.len(), 2);
        assert!(store.polygon(original).is_none());
        assert!(store.polygon(untouched).is_some());
        for id in piece_ids {
            let piece = store.polygon(*id).unwrap();
            assert_eq!(piece.kind, ZoneKind::Varu);
            assert!(*id > untouched);
        }
    }

    #[test]
    fn test_pieces_cascade_through_every_active_sector() {
        let mut store = ZoneStore::default();
        let original = store.add_polygon(square(), ZoneKind::Varu).unwrap();
        // Upper-right corner only, then lower-left corner only.
        store.create_sector(30.0, 45.0, ZoneKind::Wind).unwrap();
        store.create_sector(30.0, 225.0, ZoneKind::Mfd).unwrap();

        let report = apply_sectors(&mut store, |s| s.active);
        assert_eq!(report.split.len(), 1);
        let (old_id, piece_ids) = &report.split[0];
        assert_eq!(*old_id, original);
        assert_eq!(piece_ids.len(), 3);
        assert_eq!(store.polygon_count(), 3);

        let total: usize = store.polygons().map(|p| p.vertices.len()).sum();
        assert_eq!(total, 4);
        let sectors: Vec<Sector> = store.sectors().cloned().collect();
        for polygon in store.polygons() {
            for sector in &sectors {
                assert_eq!(
                    split_polygon_by_sector(&polygon.vertices, sector).len(),
                    1,
                    "polygon {} still straddles sector {}",
                    polygon.id,
                    sector.id
                );
            }
        }

        // Nothing left to cut.
        assert!(apply_sectors(&mut store, |s| s.active).is_empty());
    }

    #[test]
    fn test_apply_sectors_skips_inactive() {
        let mut store = ZoneStore::default();
        store.add_polygon(square(), ZoneKind::Varu).unwrap();
        let sector = store.create_sector(30.0, 45.0, ZoneKind::Wind).unwrap();
        store.set_sector_active(sector.id, false);

        let report = apply_sectors(&mut store, |s| s.active);
        assert!(report.is_empty());
        assert_eq!(store.polygon_count(), 1);
    }
}
