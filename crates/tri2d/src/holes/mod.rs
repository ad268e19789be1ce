//! Hole merging: visibility bridges from each hole into the outer loop.
//!
//! Purpose
//! - Fold every hole into the outer boundary so ear clipping sees a single
//!   simple loop. Each hole is joined by a zero-area seam: the hole's extremal
//!   vertex `h` and a visible outer vertex `v` each appear twice.
//!
//! Layout
//! - `visibility.rs`: ray cast plus reflex-vertex correction (`Visible`).
//! - `merge.rs`: ordering, rotation, and splicing (`merge_holes`).
//!
//! Code cross-refs: `polygon::Polygon`, `kernel::{orientation, angle_between}`

mod merge;
mod visibility;

pub use merge::{merge_holes, Bridge, MergedPolygon};
pub use visibility::{resolve_visible_vertex, Visible};

#[cfg(test)]
mod tests;
