//! Ray-parity point-in-polygon test.
//!
//! A horizontal ray is cast from the query point towards +X and the boundary
//! crossings are counted; an odd count means inside.
//!
//! Vertex policy
//! - A non-horizontal edge counts when the ray's Y lies in the half-open span
//!   `[min_y, max_y)` of the edge. A vertex at the ray's height is therefore
//!   counted by exactly one of its two edges when they continue on opposite
//!   sides, and by none or both when the boundary only touches the ray.
//! - Horizontal edges follow `GeomCfg::horizontal_edges`.
//! - Points exactly on the boundary get an unspecified answer.

use nalgebra::Vector2;

use super::types::{GeomCfg, HorizontalEdgePolicy};

/// Does the rightward ray from `origin` cross the edge `s1 s2`?
pub fn is_ray_segment_cross(
    origin: Vector2<f64>,
    s1: Vector2<f64>,
    s2: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    let dy = s2.y - s1.y;
    if dy.abs() <= cfg.eps_length {
        return match cfg.horizontal_edges {
            HorizontalEdgePolicy::Ignore => false,
            HorizontalEdgePolicy::CountIfLeft => {
                (origin.y - s1.y).abs() <= cfg.eps_length
                    && (origin.x < s1.x || origin.x < s2.x)
            }
        };
    }
    let (lo, hi) = if s1.y < s2.y { (s1.y, s2.y) } else { (s2.y, s1.y) };
    if origin.y < lo || origin.y >= hi {
        return false;
    }
    let x = s1.x + (origin.y - s1.y) * (s2.x - s1.x) / dy;
    let min_x = s1.x.min(s2.x) - cfg.eps_length;
    let max_x = s1.x.max(s2.x) + cfg.eps_length;
    origin.x <= x && (min_x..=max_x).contains(&x)
}

/// Ray-parity containment over the closed polygon `points` (no repeated
/// closing vertex). O(n).
pub fn point_in_polygon(points: &[Vector2<f64>], p: Vector2<f64>, cfg: GeomCfg) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut crossings = 0usize;
    for i in 0..n {
        if is_ray_segment_cross(p, points[i], points[(i + 1) % n], cfg) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Containment for a polygon given as indices into a shared vertex buffer.
pub(crate) fn point_in_indexed_polygon(
    verts: &[Vector2<f64>],
    section: &[usize],
    p: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    let n = section.len();
    if n < 3 {
        return false;
    }
    let mut crossings = 0usize;
    for i in 0..n {
        let a = verts[section[i]];
        let b = verts[section[(i + 1) % n]];
        if is_ray_segment_cross(p, a, b, cfg) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}
