//! Recursive divide-and-conquer fill.

use nalgebra::Vector2;

use crate::geom2::cross;

use super::split::split_section;
use super::types::{Triangle, TriangulateCfg, TriangulateError};

/// Triangulate a simple polygon with the default configuration.
///
/// Returns exactly `points.len() - 2` triangles on success.
pub fn triangulate(points: &[Vector2<f64>]) -> Result<Vec<Triangle>, TriangulateError> {
    triangulate_with(points, TriangulateCfg::default())
}

/// Triangulate a simple polygon (no repeated closing vertex).
pub fn triangulate_with(
    points: &[Vector2<f64>],
    cfg: TriangulateCfg,
) -> Result<Vec<Triangle>, TriangulateError> {
    if points.len() < 3 {
        return Err(TriangulateError::TooFewVertices {
            section: (0..points.len()).collect(),
        });
    }
    let section: Vec<usize> = (0..points.len()).collect();
    let mut out = Vec::with_capacity(points.len() - 2);
    fill_triangles(points, &section, cfg, &mut out)?;
    tracing::debug!(vertices = points.len(), triangles = out.len(), "triangulated");
    Ok(out)
}

/// Append the triangulation of `section` (indices into `verts`) to `out`.
///
/// Validates the section first; on error `out` is left untouched.
pub fn fill_triangles(
    verts: &[Vector2<f64>],
    section: &[usize],
    cfg: TriangulateCfg,
    out: &mut Vec<Triangle>,
) -> Result<(), TriangulateError> {
    for &index in section {
        let p = verts.get(index).ok_or(TriangulateError::IndexOutOfRange {
            index,
            len: verts.len(),
        })?;
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(TriangulateError::NonFiniteVertex { index });
        }
    }
    if section.len() < 3 {
        return Err(TriangulateError::TooFewVertices {
            section: section.to_vec(),
        });
    }
    let mut runner = FillRunner {
        verts,
        cfg,
        out: Vec::with_capacity(section.len() - 2),
    };
    runner.fill(section)?;
    out.append(&mut runner.out);
    Ok(())
}

/// Recursion context: shared read-only vertices plus the private output buffer.
struct FillRunner<'a> {
    verts: &'a [Vector2<f64>],
    cfg: TriangulateCfg,
    out: Vec<Triangle>,
}

impl FillRunner<'_> {
    fn fill(&mut self, section: &[usize]) -> Result<(), TriangulateError> {
        match section.len() {
            0..=2 => Ok(()),
            3 => {
                self.out
                    .push(Triangle::new(section[0], section[1], section[2]));
                Ok(())
            }
            4 => {
                self.fill_quad(section);
                Ok(())
            }
            _ => self.fill_split(section),
        }
    }

    /// Use diagonal 0–2 when it separates vertices 1 and 3, else 1–3.
    fn fill_quad(&mut self, s: &[usize]) {
        let verts = self.verts;
        let v = |i: usize| verts[s[i]];
        let c1 = cross(v(0), v(2), v(1));
        let c3 = cross(v(0), v(2), v(3));
        let o = if c1 * c3 >= 0.0 { 1 } else { 0 };
        self.out
            .push(Triangle::new(s[o], s[(o + 1) % 4], s[(o + 2) % 4]));
        self.out
            .push(Triangle::new(s[(o + 2) % 4], s[(o + 3) % 4], s[o]));
    }

    fn fill_split(&mut self, section: &[usize]) -> Result<(), TriangulateError> {
        let geom = self.cfg.geom;
        let mut anchored = section.to_vec();
        let mut found = split_section(self.verts, &anchored, geom);
        let mut rotations = 0;
        while found.is_none() && rotations < self.cfg.retry.max_rotations {
            anchored.rotate_left(1);
            rotations += 1;
            tracing::debug!(
                anchor = anchored[0],
                rotations,
                "no diagonal from anchor; rotating section"
            );
            found = split_section(self.verts, &anchored, geom);
        }
        let Some(center) = found else {
            tracing::warn!(
                section = ?section,
                rotations,
                "diagonal search exhausted"
            );
            return Err(TriangulateError::NoDiagonal {
                section: section.to_vec(),
                rotations,
            });
        };
        tracing::debug!(
            from = anchored[0],
            to = anchored[center],
            len = anchored.len(),
            "split"
        );
        let first: Vec<usize> = anchored[..=center].to_vec();
        let mut second: Vec<usize> = anchored[center..].to_vec();
        second.push(anchored[0]);
        self.fill(&first)?;
        self.fill(&second)
    }
}
