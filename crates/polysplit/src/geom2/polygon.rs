//! Whole-polygon queries built on the predicates.
//!
//! - Shoelace area and area centroid.
//! - Nearest boundary edge to a point.
//! - Boundary crossings of a query segment.
//!
//! Polygons are plain ordered vertex slices without a repeated closing vertex;
//! edge `i` runs from `points[i]` to `points[(i + 1) % n]`.

use nalgebra::Vector2;

use super::containment::point_in_polygon;
use super::distance::point_to_segment_distance;
use super::predicates::segment_intersection_point;
use super::types::{EdgeCrossing, GeomCfg};

/// Boundary edges as `(index, start, end)`, closing edge last.
pub fn edges(
    points: &[Vector2<f64>],
) -> impl Iterator<Item = (usize, Vector2<f64>, Vector2<f64>)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (i, points[i], points[(i + 1) % n]))
}

/// Shoelace signed area; positive for counter-clockwise order.
pub fn signed_area(points: &[Vector2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    0.5 * edges(points)
        .map(|(_, p, q)| p.x * q.y - q.x * p.y)
        .sum::<f64>()
}

#[inline]
pub fn area(points: &[Vector2<f64>]) -> f64 {
    signed_area(points).abs()
}

/// Unsigned area of the triangle `abc`.
#[inline]
pub fn triangle_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    0.5 * super::predicates::cross(a, b, c).abs()
}

/// Area centroid (`None` for fewer than three points or zero area).
pub fn area_centroid(points: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if points.len() < 3 {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for (_, p, q) in edges(points) {
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}

/// Boundary edge closest to `p` as `(edge index, distance)`.
///
/// Ties keep the lowest edge index.
pub fn nearest_edge(points: &[Vector2<f64>], p: Vector2<f64>, cfg: GeomCfg) -> Option<(usize, f64)> {
    if points.len() < 2 {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for (i, a, b) in edges(points) {
        let d = point_to_segment_distance(p, a, b, cfg);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best
}

/// Every boundary edge crossed by the segment `a b`, in edge order.
pub fn edge_crossings(
    points: &[Vector2<f64>],
    a: Vector2<f64>,
    b: Vector2<f64>,
    cfg: GeomCfg,
) -> Vec<EdgeCrossing> {
    edges(points)
        .filter_map(|(edge, s1, s2)| {
            segment_intersection_point(a, b, s1, s2, cfg).map(|point| EdgeCrossing { edge, point })
        })
        .collect()
}

/// True when `a` lies inside the polygon or the segment `a b` crosses its
/// boundary.
pub fn segment_meets_polygon(
    points: &[Vector2<f64>],
    a: Vector2<f64>,
    b: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    point_in_polygon(points, a, cfg)
        || edges(points).any(|(_, s1, s2)| segment_intersection_point(a, b, s1, s2, cfg).is_some())
}
