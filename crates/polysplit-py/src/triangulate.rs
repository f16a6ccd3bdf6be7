use crate::common::{geom_cfg, map_triangulate_err, points_from_py, Pt};
use pyo3::prelude::*;
use polysplit::triangulate::{triangulate_with, AnchorRetry, TriangulateCfg};

/// Triangulate a simple polygon; returns `len(points) - 2` index triples.
#[pyfunction]
#[pyo3(signature = (points, max_rotations=1, eps=None, horizontal_edges="ignore"))]
pub fn triangulate(
    py: Python<'_>,
    points: Vec<Pt>,
    max_rotations: usize,
    eps: Option<f64>,
    horizontal_edges: &str,
) -> PyResult<Vec<(usize, usize, usize)>> {
    let cfg = TriangulateCfg {
        geom: geom_cfg(eps, horizontal_edges)?,
        retry: AnchorRetry { max_rotations },
    };
    let pts = points_from_py(points);
    let tris = py
        .allow_threads(|| triangulate_with(&pts, cfg))
        .map_err(map_triangulate_err)?;
    Ok(tris
        .into_iter()
        .map(|t| {
            let [a, b, c] = t.indices();
            (a, b, c)
        })
        .collect())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(triangulate, m)?)?;
    Ok(())
}
