//! Data types and configuration for the triangulator.

use thiserror::Error;

use crate::geom2::GeomCfg;

/// Ordered triple of vertex-buffer indices.
///
/// Winding follows the input order of the polygon; it is not normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self([a, b, c])
    }
    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }
}

/// Flat index buffer (three entries per triangle), as consumed by mesh builders.
pub fn flatten_indices(triangles: &[Triangle]) -> Vec<u32> {
    triangles
        .iter()
        .flat_map(|t| t.0.iter().map(|&i| i as u32))
        .collect()
}

/// Recovery policy when no diagonal leaves the current fan anchor.
///
/// Each retry rotates the section by one position (the anchor moves to the
/// end) and searches again from the new anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorRetry {
    pub max_rotations: usize,
}

impl Default for AnchorRetry {
    fn default() -> Self {
        Self { max_rotations: 1 }
    }
}

/// Triangulator configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriangulateCfg {
    pub geom: GeomCfg,
    pub retry: AnchorRetry,
}

/// Fatal input-contract violations. A run that fails returns no triangles.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TriangulateError {
    #[error("polygon needs at least 3 vertices, got section {section:?}")]
    TooFewVertices { section: Vec<usize> },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
    #[error("section index {index} is out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
    /// The diagonal search was exhausted from every allowed anchor; the
    /// section is most likely self-intersecting.
    #[error("no interior diagonal found after {rotations} anchor rotation(s); section {section:?}")]
    NoDiagonal {
        section: Vec<usize>,
        rotations: usize,
    },
}
