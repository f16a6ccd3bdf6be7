//! Diagonal search from the fan anchor (section index 0).

use nalgebra::Vector2;

use crate::geom2::{on_open_segment, point_in_indexed_polygon, segments_properly_intersect, GeomCfg};

/// Is `section[0] – section[k]` an interior diagonal of the section polygon?
///
/// Conditions, all required:
/// - it properly crosses no section edge (the edges incident to either
///   endpoint are skipped; they can only touch it);
/// - its midpoint lies inside the section polygon;
/// - no other section vertex lies on it.
pub fn is_connect_ok(verts: &[Vector2<f64>], section: &[usize], k: usize, cfg: GeomCfg) -> bool {
    let n = section.len();
    if k < 2 || k + 1 >= n {
        return false;
    }
    let a = verts[section[0]];
    let b = verts[section[k]];
    // Edges (i-1, i) for i in 2..n, i.e. every edge not touching section[0].
    for i in 2..n {
        if i == k || i == k + 1 {
            continue;
        }
        let e1 = verts[section[i - 1]];
        let e2 = verts[section[i]];
        if segments_properly_intersect(a, b, e1, e2, cfg) {
            return false;
        }
    }
    let mid = (a + b) * 0.5;
    if !point_in_indexed_polygon(verts, section, mid, cfg) {
        return false;
    }
    section
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != 0 && j != k)
        .all(|(_, &v)| !on_open_segment(verts[v], a, b, cfg))
}

/// Pick the split index for the diagonal from `section[0]`.
///
/// Starts at `n / 2` and widens alternately upwards then downwards, never
/// considering index 0, index 1 or the last index. `None` when no candidate
/// passes `is_connect_ok`.
pub fn split_section(verts: &[Vector2<f64>], section: &[usize], cfg: GeomCfg) -> Option<usize> {
    let n = section.len();
    let center = n / 2;
    if is_connect_ok(verts, section, center, cfg) {
        return Some(center);
    }
    for offset in 1..=center {
        let up = center + offset;
        if up < n - 1 && is_connect_ok(verts, section, up, cfg) {
            return Some(up);
        }
        if let Some(down) = center.checked_sub(offset) {
            if down > 1 && is_connect_ok(verts, section, down, cfg) {
                return Some(down);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    /// U shape: a notch cut down from the top between x = 2 and x = 4.
    fn notch() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![6.0, 0.0],
            vector![6.0, 4.0],
            vector![4.0, 4.0],
            vector![4.0, 1.0],
            vector![2.0, 1.0],
            vector![2.0, 4.0],
            vector![0.0, 4.0],
        ]
    }

    #[test]
    fn convex_polygon_splits_at_center() {
        let cfg = GeomCfg::default();
        let hex: Vec<Vector2<f64>> = (0..6)
            .map(|k| {
                let th = std::f64::consts::PI * (k as f64) / 3.0;
                vector![th.cos(), th.sin()]
            })
            .collect();
        let section: Vec<usize> = (0..6).collect();
        assert_eq!(split_section(&hex, &section, cfg), Some(3));
    }

    #[test]
    fn notch_diagonals() {
        let cfg = GeomCfg::default();
        let pts = notch();
        let section: Vec<usize> = (0..pts.len()).collect();
        // passes under the notch floor
        assert!(is_connect_ok(&pts, &section, 4, cfg));
        // both cross the notch wall (5, 6)
        assert!(!is_connect_ok(&pts, &section, 3, cfg));
        assert!(!is_connect_ok(&pts, &section, 2, cfg));
        assert!(is_connect_ok(&pts, &section, 5, cfg));
        assert!(is_connect_ok(&pts, &section, 6, cfg));
        assert_eq!(split_section(&pts, &section, cfg), Some(4));
    }

    #[test]
    fn search_widens_when_center_fails() {
        let cfg = GeomCfg::default();
        let pts = notch();
        // anchor at the top-left corner
        let section = vec![7, 0, 1, 2, 3, 4, 5, 6];
        // center 4 runs along the top edge through vertex 6
        assert!(!is_connect_ok(&pts, &section, 4, cfg));
        // 5 crosses the notch wall, 3 runs through vertices 6 and 3
        assert!(!is_connect_ok(&pts, &section, 5, cfg));
        assert!(!is_connect_ok(&pts, &section, 3, cfg));
        assert_eq!(split_section(&pts, &section, cfg), Some(6));
    }

    #[test]
    fn adjacent_and_out_of_range_candidates_are_rejected() {
        let cfg = GeomCfg::default();
        let pts = notch();
        let section: Vec<usize> = (0..pts.len()).collect();
        assert!(!is_connect_ok(&pts, &section, 0, cfg));
        assert!(!is_connect_ok(&pts, &section, 1, cfg));
        assert!(!is_connect_ok(&pts, &section, 7, cfg));
        assert!(!is_connect_ok(&pts, &section, 99, cfg));
    }

    #[test]
    fn diagonal_grazing_a_vertex_is_rejected() {
        let cfg = GeomCfg::default();
        // the spike tip (vertex 5) touches the segment 0 -> 2 from above
        let pts = vec![
            vector![0.0, 0.0],
            vector![2.0, -2.0],
            vector![4.0, 0.0],
            vector![4.0, 3.0],
            vector![2.0, 3.0],
            vector![1.0, 0.0],
            vector![0.5, 3.0],
            vector![0.0, 3.0],
        ];
        let section: Vec<usize> = (0..pts.len()).collect();
        assert!(!is_connect_ok(&pts, &section, 2, cfg));
        assert_eq!(split_section(&pts, &section, cfg), Some(5));
    }
}
