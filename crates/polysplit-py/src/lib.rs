//! PyO3 bindings for the `polysplit` triangulator and 2D predicates.
//!
//! Notes
//! - Points cross the boundary as `(x, y)` tuples; triangles come back as
//!   `(i, j, k)` index tuples into the caller's point list.
//! - Every failure is raised as `ValueError` with the Rust error message.

use pyo3::prelude::*;

mod common;
mod geom;
mod triangulate;

#[pymodule]
fn polysplit_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", polysplit::VERSION)?;
    geom::register(m)?;
    triangulate::register(m)?;
    Ok(())
}
