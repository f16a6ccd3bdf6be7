//! Orientation and segment intersection predicates.
//!
//! Purpose
//! - Sign tests on the cross product `(B − A) × (P − A)` and the segment
//!   intersection routines built on them.
//! - Every comparison against zero goes through a `GeomCfg` epsilon, so
//!   near-degenerate inputs take a defined branch instead of flipping on noise.
//!
//! Code cross-refs: `types::{GeomCfg, Orientation}`, `triangulate::split`

use nalgebra::{Matrix2, Vector2};

use super::types::{GeomCfg, Orientation};

/// Raw cross product `(b − a) × (p − a)`; twice the signed area of `abp`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ap = p - a;
    ab.x * ap.y - ab.y * ap.x
}

#[inline]
fn perp_dot(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

#[inline]
fn classify(value: f64, eps: f64) -> Orientation {
    if value > eps {
        Orientation::CounterClockwise
    } else if value < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Side of the directed line `a → b` that `p` lies on.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>, cfg: GeomCfg) -> Orientation {
    classify(cross(a, b, p), cfg.eps_orient)
}

/// True iff `p1` and `p2` are not strictly on opposite sides of the line.
///
/// Boundary-inclusive: a point on the line counts as being on either side.
pub fn same_side(
    line_start: Vector2<f64>,
    line_end: Vector2<f64>,
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    let s1 = orientation(line_start, line_end, p1, cfg).sign();
    let s2 = orientation(line_start, line_end, p2, cfg).sign();
    s1 * s2 >= 0
}

/// Strict crossing test.
///
/// True only when each segment's endpoints lie strictly on opposite sides of
/// the other segment's line. Shared endpoints, T-junctions and collinear
/// overlaps all return false.
pub fn segments_properly_intersect(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    let a1_side = orientation(b1, b2, a1, cfg).sign();
    let a2_side = orientation(b1, b2, a2, cfg).sign();
    let b1_side = orientation(a1, a2, b1, cfg).sign();
    let b2_side = orientation(a1, a2, b2, cfg).sign();
    a1_side * a2_side < 0 && b1_side * b2_side < 0
}

#[inline]
fn in_bbox(p: Vector2<f64>, s1: Vector2<f64>, s2: Vector2<f64>, eps: f64) -> bool {
    p.x >= s1.x.min(s2.x) - eps
        && p.x <= s1.x.max(s2.x) + eps
        && p.y >= s1.y.min(s2.y) - eps
        && p.y <= s1.y.max(s2.y) + eps
}

/// Solve `a1 + t·(a2 − a1) = b1 + s·(b2 − b1)` for `(t, s)`.
#[inline]
fn solve_params(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
) -> Option<Vector2<f64>> {
    let m = Matrix2::from_columns(&[a2 - a1, b1 - b2]);
    m.lu().solve(&(b1 - a1))
}

/// Crossing point of segments A and B, if any.
///
/// Cases
/// - Parallel and collinear: the first endpoint of A inside B's bounding box.
///   This does not describe the full overlap range.
/// - Parallel, not collinear: `None`.
/// - Otherwise: only proper crossings (`segments_properly_intersect`) produce
///   a point, found from the 2×2 system of the two parametric lines.
pub fn segment_intersection_point(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
    cfg: GeomCfg,
) -> Option<Vector2<f64>> {
    let da = a2 - a1;
    let db = b2 - b1;
    if perp_dot(da, db).abs() <= cfg.eps_parallel {
        if perp_dot(a1 - b1, db).abs() > cfg.eps_orient {
            return None;
        }
        return [a1, a2]
            .into_iter()
            .find(|&p| in_bbox(p, b1, b2, cfg.eps_length));
    }
    if !segments_properly_intersect(a1, a2, b1, b2, cfg) {
        return None;
    }
    let ts = solve_params(a1, a2, b1, b2)?;
    Some(a1 + da * ts.x)
}

/// Crossing point of the infinite line through `l1, l2` with segment `s1 s2`.
///
/// A collinear segment reports `s1`; a parallel one reports `None`.
pub fn line_segment_intersection_point(
    l1: Vector2<f64>,
    l2: Vector2<f64>,
    s1: Vector2<f64>,
    s2: Vector2<f64>,
    cfg: GeomCfg,
) -> Option<Vector2<f64>> {
    let dl = l2 - l1;
    let ds = s2 - s1;
    if perp_dot(dl, ds).abs() <= cfg.eps_parallel {
        if perp_dot(s1 - l1, dl).abs() <= cfg.eps_orient {
            return Some(s1);
        }
        return None;
    }
    let ts = solve_params(l1, l2, s1, s2)?;
    let slack = cfg.eps_length / ds.norm().max(cfg.eps_length);
    if ts.y < -slack || ts.y > 1.0 + slack {
        return None;
    }
    Some(s1 + ds * ts.y)
}

/// True when `p` lies on the open segment `s1 s2` (endpoints excluded).
pub(crate) fn on_open_segment(
    p: Vector2<f64>,
    s1: Vector2<f64>,
    s2: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    if orientation(s1, s2, p, cfg) != Orientation::Collinear {
        return false;
    }
    let d = s2 - s1;
    let len2 = d.norm_squared();
    if len2 <= cfg.eps_length * cfg.eps_length {
        return false;
    }
    let t = (p - s1).dot(&d) / len2;
    let slack = cfg.eps_length / len2.sqrt();
    t > slack && t < 1.0 - slack
}
