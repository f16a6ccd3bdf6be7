//! Predicate bindings.

use crate::common::{geom_cfg, points_from_py, vec2, Pt};
use pyo3::prelude::*;
use polysplit::geom2;

#[pyfunction]
#[pyo3(signature = (points, p, eps=None, horizontal_edges="ignore"))]
pub fn point_in_polygon(
    points: Vec<Pt>,
    p: Pt,
    eps: Option<f64>,
    horizontal_edges: &str,
) -> PyResult<bool> {
    let cfg = geom_cfg(eps, horizontal_edges)?;
    Ok(geom2::point_in_polygon(&points_from_py(points), vec2(p), cfg))
}

#[pyfunction]
#[pyo3(signature = (p, s1, s2, eps=None))]
pub fn point_to_segment_distance(p: Pt, s1: Pt, s2: Pt, eps: Option<f64>) -> PyResult<f64> {
    let cfg = geom_cfg(eps, "ignore")?;
    Ok(geom2::point_to_segment_distance(vec2(p), vec2(s1), vec2(s2), cfg))
}

/// Crossing point of segments `a1 a2` and `b1 b2`, or `None`.
#[pyfunction]
#[pyo3(signature = (a1, a2, b1, b2, eps=None))]
pub fn segment_intersection_point(
    a1: Pt,
    a2: Pt,
    b1: Pt,
    b2: Pt,
    eps: Option<f64>,
) -> PyResult<Option<Pt>> {
    let cfg = geom_cfg(eps, "ignore")?;
    Ok(
        geom2::segment_intersection_point(vec2(a1), vec2(a2), vec2(b1), vec2(b2), cfg)
            .map(|q| (q.x, q.y)),
    )
}

/// `(edge index, distance)` of the boundary edge closest to `p`.
#[pyfunction]
#[pyo3(signature = (points, p, eps=None))]
pub fn nearest_edge(points: Vec<Pt>, p: Pt, eps: Option<f64>) -> PyResult<Option<(usize, f64)>> {
    let cfg = geom_cfg(eps, "ignore")?;
    Ok(geom2::nearest_edge(&points_from_py(points), vec2(p), cfg))
}

#[pyfunction]
pub fn signed_area(points: Vec<Pt>) -> f64 {
    geom2::signed_area(&points_from_py(points))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(point_in_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(point_to_segment_distance, m)?)?;
    m.add_function(wrap_pyfunction!(segment_intersection_point, m)?)?;
    m.add_function(wrap_pyfunction!(nearest_edge, m)?)?;
    m.add_function(wrap_pyfunction!(signed_area, m)?)?;
    Ok(())
}
