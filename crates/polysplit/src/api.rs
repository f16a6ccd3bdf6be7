//! Curated flat API used by the CLI and the Python bindings.
//!
//! Prefer these re-exports over reaching into module internals; names here
//! are disambiguated where two modules would otherwise clash.

// 2D predicates
pub use crate::geom2::{
    cross, is_ray_segment_cross, line_segment_intersection_point, orientation,
    point_in_polygon, point_to_segment_distance, same_side, segment_intersection_point,
    segments_properly_intersect, EdgeCrossing, GeomCfg, HorizontalEdgePolicy, Orientation,
};
// Whole-polygon helpers
pub use crate::geom2::{
    area as polygon_area, area_centroid, edge_crossings, edges as polygon_edges, nearest_edge,
    segment_meets_polygon, signed_area, triangle_area,
};
// Random polygons
pub use crate::geom2::rand::{
    draw_star_polygon, RadialCfg, ReplayToken as PolygonReplay, VertexCount,
};
// Triangulation
pub use crate::triangulate::{
    fill_triangles, flatten_indices, is_connect_ok, split_section, triangulate, triangulate_with,
    AnchorRetry, Triangle, TriangulateCfg, TriangulateError,
};
