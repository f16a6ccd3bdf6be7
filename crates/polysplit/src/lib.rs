//! Polygon triangulation and 2D geometric predicates.
//!
//! Layout
//! - `geom2`: stateless predicates (orientation, segment crossing,
//!   containment, distance), whole-polygon helpers and a random sampler.
//! - `triangulate`: recursive diagonal-splitting triangulation of simple
//!   polygons into index triangles.
//!
//! API Policy
//! - Pre-1.0. Items reachable from `api` and `prelude` are the supported
//!   surface; module internals may move between minor versions.

pub mod api;
pub mod geom2;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::GeomCfg;
pub use nalgebra::Vector2 as Vec2;
pub use triangulate::{triangulate, Triangle, TriangulateError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{
        point_in_polygon, point_to_segment_distance, segment_intersection_point,
        segments_properly_intersect, GeomCfg, HorizontalEdgePolicy, Orientation,
    };
    pub use crate::triangulate::{
        triangulate, triangulate_with, AnchorRetry, Triangle, TriangulateCfg, TriangulateError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
