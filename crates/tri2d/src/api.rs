//! Curated surface for callers that want the stages one by one.
//!
//! The `Triangulator` facade covers the common paths; these re-exports are for
//! tools that inspect intermediate loops (hull, merged polygon, bridges).

// Kernel
pub use crate::kernel::{
    angle_between, is_sliver, orientation, point_in_triangle, segments_cross, signed_area,
    squared_distance, Aabb2, GeomCfg, Orientation, Point2,
};
// Loops
pub use crate::polygon::{Polygon, Vertex, Winding};
// Stages
pub use crate::earclip::ear_clip;
pub use crate::holes::{merge_holes, resolve_visible_vertex, Bridge, MergedPolygon, Visible};
pub use crate::hull::{convex_hull, hull_of_vertices, HullStrategy};
pub use crate::incremental::{incremental_insert, IncrementalMesh};
pub use crate::split::split_insert;
// Facade
pub use crate::cfg::TriCfg;
pub use crate::error::{Diagnostic, Stage, TriError};
pub use crate::triangulate::{Triangulation, Triangulator};
// Generators
pub use crate::rand::{
    draw_polygon_with_holes, draw_star_polygon, random_points, HolesCfg, PolygonWithHoles,
    ReplayToken, StarCfg, VertexCount,
};
