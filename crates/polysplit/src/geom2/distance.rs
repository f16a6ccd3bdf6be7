use nalgebra::Vector2;

use super::types::GeomCfg;

/// Shortest distance from `p` to the segment `s1 s2`.
///
/// `p` is projected onto the line through the segment. When the projection
/// leaves the segment's extent along its dominant axis (X unless the segment
/// is steeper than 45°), the nearer endpoint distance is returned; otherwise
/// the perpendicular distance to the line.
///
/// Degenerate inputs: `p == s1` gives 0, a zero-length segment gives `|p − s1|`.
pub fn point_to_segment_distance(
    p: Vector2<f64>,
    s1: Vector2<f64>,
    s2: Vector2<f64>,
    cfg: GeomCfg,
) -> f64 {
    let d1 = (p - s1).norm();
    if d1 <= cfg.eps_length {
        return 0.0;
    }
    let seg = s2 - s1;
    let len2 = seg.norm_squared();
    if len2.sqrt() <= cfg.eps_length {
        return d1;
    }
    let t = (p - s1).dot(&seg) / len2;
    let foot = s1 + seg * t;
    let outside = if seg.x.abs() >= seg.y.abs() {
        foot.x < s1.x.min(s2.x) || foot.x > s1.x.max(s2.x)
    } else {
        foot.y < s1.y.min(s2.y) || foot.y > s1.y.max(s2.y)
    };
    if outside {
        d1.min((p - s2).norm())
    } else {
        (p - foot).norm()
    }
}
