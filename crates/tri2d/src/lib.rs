//! Planar triangulation: convex hulls, hole merging, and ear clipping.
//!
//! Pipeline
//! - `hull`: gift wrapping over an unordered point set (CCW, collinear
//!   boundary points kept).
//! - `holes`: each hole is bridged into the outer loop through a visible
//!   vertex, leaving one loop with zero-area seams.
//! - `earclip`: clips ears off a simple loop until one triangle is left.
//! - `triangulate`: the `Triangulator` facade chaining the stages over a
//!   shared vertex buffer; `split` keeps scattered interior points as vertices
//!   and `incremental` sweeps them in x order instead.
//!
//! Conventions
//! - Every fallible call returns `Result<_, TriError>`; non-fatal findings are
//!   returned as `Diagnostic` values. The crate itself only emits `tracing`
//!   debug events with counts.
//! - Tolerances live in `GeomCfg` (see `kernel`).

pub mod api;
pub mod cfg;
pub mod earclip;
pub mod error;
pub mod holes;
pub mod hull;
pub mod incremental;
pub mod kernel;
pub mod polygon;
pub mod rand;
pub mod split;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::TriCfg;
pub use error::{Diagnostic, Stage, TriError};
pub use kernel::{GeomCfg, Orientation, Point2};
pub use triangulate::{Triangulation, Triangulator};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::TriCfg;
    pub use crate::error::{Diagnostic, TriError};
    pub use crate::hull::HullStrategy;
    pub use crate::kernel::{GeomCfg, Orientation, Point2};
    pub use crate::polygon::{Polygon, Vertex, Winding};
    pub use crate::rand::{
        draw_polygon_with_holes, draw_star_polygon, random_points, HolesCfg, PolygonWithHoles,
        ReplayToken, StarCfg, VertexCount,
    };
    pub use crate::triangulate::{Triangulation, Triangulator};
}
