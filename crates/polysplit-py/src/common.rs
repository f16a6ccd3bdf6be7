use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use polysplit::geom2::{GeomCfg, HorizontalEdgePolicy};
use polysplit::triangulate::TriangulateError;

pub type Pt = (f64, f64);

#[inline]
pub fn vec2(p: Pt) -> Vector2<f64> {
    Vector2::new(p.0, p.1)
}

pub fn points_from_py(points: Vec<Pt>) -> Vec<Vector2<f64>> {
    points.into_iter().map(vec2).collect()
}

/// `eps` overrides every tolerance; `horizontal_edges` is `"ignore"` or
/// `"count_if_left"`.
pub fn geom_cfg(eps: Option<f64>, horizontal_edges: &str) -> PyResult<GeomCfg> {
    let policy = match horizontal_edges {
        "ignore" => HorizontalEdgePolicy::Ignore,
        "count_if_left" => HorizontalEdgePolicy::CountIfLeft,
        other => {
            return Err(PyValueError::new_err(format!(
                "unknown horizontal_edges policy {other:?}; expected \"ignore\" or \"count_if_left\""
            )))
        }
    };
    Ok(GeomCfg {
        horizontal_edges: policy,
        ..eps.map(GeomCfg::with_eps).unwrap_or_default()
    })
}

pub fn map_triangulate_err(err: TriangulateError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
