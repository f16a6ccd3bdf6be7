//! 2D geometric primitives.
//!
//! Purpose
//! - Stateless predicates over `nalgebra::Vector2<f64>`: orientation, same-side,
//!   strict segment crossing, intersection points, ray-parity containment and
//!   point-to-segment distance.
//! - Whole-polygon helpers (area, centroid, nearest edge, boundary crossings)
//!   and a reproducible random polygon sampler.
//!
//! Numerics
//! - Every zero test goes through an explicit epsilon in `GeomCfg`, passed by
//!   value. Degenerate configurations take a documented branch; none of these
//!   functions fail.
//!
//! Code cross-refs: `triangulate` (the only in-crate consumer)

mod containment;
mod distance;
pub mod polygon;
mod predicates;
pub mod rand;
mod types;

pub use containment::{is_ray_segment_cross, point_in_polygon};
pub use distance::point_to_segment_distance;
pub use polygon::{
    area, area_centroid, edge_crossings, edges, nearest_edge, segment_meets_polygon, signed_area,
    triangle_area,
};
pub use predicates::{
    cross, line_segment_intersection_point, orientation, same_side, segment_intersection_point,
    segments_properly_intersect,
};
pub use types::{EdgeCrossing, GeomCfg, HorizontalEdgePolicy, Orientation};

pub(crate) use containment::point_in_indexed_polygon;
pub(crate) use predicates::on_open_segment;
