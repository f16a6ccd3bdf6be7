//! Recursive visibility-guided triangulation of simple polygons.
//!
//! Purpose
//! - Split a simple polygon along an interior diagonal from its fan anchor
//!   (section index 0), recurse on both halves, and emit index triangles.
//!   Terminal cases: triangles are emitted as-is, quadrilaterals pick the
//!   diagonal that separates the other two vertices.
//!
//! Search and recovery
//! - The split candidate starts at the middle of the section (balanced halves)
//!   and widens outwards. When the anchor sees no diagonal the section is
//!   rotated under the `AnchorRetry` policy; exhaustion is an error carrying
//!   the offending section, never a partial result.
//!
//! Complexity
//! - About O(n log n) diagonal tests on typical inputs, each O(section size);
//!   inputs that reject many candidates before a split degrade to O(n²).
//!
//! Code cross-refs: `geom2::{segments_properly_intersect, point_in_polygon, cross}`

mod fill;
mod split;
mod types;

pub use fill::{fill_triangles, triangulate, triangulate_with};
pub use split::{is_connect_ok, split_section};
pub use types::{flatten_indices, AnchorRetry, Triangle, TriangulateCfg, TriangulateError};

#[cfg(test)]
mod tests;
