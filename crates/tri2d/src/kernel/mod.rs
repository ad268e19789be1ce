//! Geometry kernel: points, tolerances, and the orientation predicate.
//!
//! Purpose
//! - Provide the single place where epsilon policy lives. Every geometric
//!   decision made by the hull, visibility, merge, and ear-clipping stages
//!   routes through `orientation` (or helpers built on it), so a tolerance
//!   change is made and tested once.
//!
//! Conventions
//! - `Point2` is `nalgebra::Vector2<f64>`; points and vectors share the type.
//! - `orientation(a, b, c)` classifies `c` against the directed line `a → b`;
//!   `Left` means counterclockwise.
//! - Every epsilon in `GeomCfg` is a length, so one configuration works for
//!   inputs of any scale above it.
//!
//! Code cross-refs: `types::{GeomCfg, Orientation, Aabb2}`, `predicates::*`

mod predicates;
mod types;

pub use predicates::{
    angle_between, cross, horizontal_ray_hit, is_sliver, on_segment, orientation,
    point_in_triangle, segments_cross, signed_area, squared_distance,
};
pub use types::{Aabb2, GeomCfg, Orientation, Point2};

#[cfg(test)]
mod tests;
