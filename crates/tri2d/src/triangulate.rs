//! Pipeline entry points: hull → hole merge → ear clipping.
//!
//! Purpose
//! - One `Triangulator` value carries the configuration; every call builds its
//!   own working polygons and buffers, so a triangulator can be shared across
//!   threads and calls never observe each other.
//! - Output is all-or-nothing: the first stage error is returned unchanged.
//!
//! Vertex buffer
//! - Point inputs: the buffer is the input slice; triangle indices refer to it.
//!   Three point modes: hull only, triangle splitting, and the x-ordered sweep.
//! - Polygon inputs: the outer loop followed by each hole in order. Bridge
//!   duplicates share an index, so the buffer holds no extra vertices.

use crate::cfg::TriCfg;
use crate::earclip::ear_clip;
use crate::error::{Diagnostic, TriError};
use crate::holes::{self, MergedPolygon};
use crate::hull;
use crate::incremental::incremental_insert;
use crate::kernel::{is_sliver, signed_area, Aabb2, Point2};
use crate::polygon::{Polygon, Vertex};
use crate::split::split_insert;

/// Triangles over a shared vertex buffer, plus the intermediate loops.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangulation {
    pub vertices: Vec<Point2>,
    /// CCW index triples into `vertices`.
    pub triangles: Vec<[usize; 3]>,
    /// Hull loop (ids) when the input was a point set.
    pub hull: Option<Vec<usize>>,
    /// Loop handed to ear clipping (ids), seams included.
    pub merged: Vec<usize>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Triangulation {
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangle_points(&self, t: usize) -> [Point2; 3] {
        self.triangles[t].map(|i| self.vertices[i])
    }

    /// Signed area of triangle `t` (positive for CCW).
    pub fn triangle_area(&self, t: usize) -> f64 {
        signed_area(self.triangle_points(t))
    }

    /// Sum of signed triangle areas.
    pub fn area(&self) -> f64 {
        (0..self.triangles.len()).map(|t| self.triangle_area(t)).sum()
    }

    pub fn centroids(&self) -> impl Iterator<Item = Point2> + '_ {
        (0..self.triangles.len()).map(|t| {
            let [a, b, c] = self.triangle_points(t);
            (a + b + c) / 3.0
        })
    }
}

/// Triangulation context; cheap to copy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Triangulator {
    cfg: TriCfg,
}

impl Triangulator {
    pub fn new(cfg: TriCfg) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &TriCfg {
        &self.cfg
    }

    /// CCW hull of an unordered point set; ids index `points`.
    pub fn convex_hull(&self, points: &[Point2]) -> Result<Polygon, TriError> {
        hull::convex_hull(points, &self.cfg)
    }

    /// Triangulate the convex hull of `points`. Interior points are not used.
    pub fn triangulate_points(&self, points: &[Point2]) -> Result<Triangulation, TriError> {
        let hull = self.convex_hull(points)?;
        let triangles = ear_clip(&hull, &self.cfg)?;
        let ids = hull.ids();
        let mut out = Triangulation {
            vertices: points.to_vec(),
            triangles,
            hull: Some(ids.clone()),
            merged: ids,
            diagnostics: Vec::new(),
        };
        self.note_degenerate(&mut out);
        tracing::debug!(points = points.len(), triangles = out.len(), "triangulated hull");
        Ok(out)
    }

    /// Triangulate `points` keeping every point as a vertex (triangle splitting).
    pub fn triangulate_points_with_interior(
        &self,
        points: &[Point2],
    ) -> Result<Triangulation, TriError> {
        let hull = self.convex_hull(points)?;
        let (triangles, diagnostics) = split_insert(points, &hull, &self.cfg)?;
        let ids = hull.ids();
        let mut out = Triangulation {
            vertices: points.to_vec(),
            triangles,
            hull: Some(ids.clone()),
            merged: ids,
            diagnostics,
        };
        self.note_degenerate(&mut out);
        Ok(out)
    }

    /// Triangulate `points` by an x-ordered sweep; every point is a vertex.
    pub fn triangulate_points_incremental(
        &self,
        points: &[Point2],
    ) -> Result<Triangulation, TriError> {
        let mesh = incremental_insert(points, &self.cfg)?;
        let mut out = Triangulation {
            vertices: points.to_vec(),
            triangles: mesh.triangles,
            hull: Some(mesh.hull.clone()),
            merged: mesh.hull,
            diagnostics: mesh.diagnostics,
        };
        self.note_degenerate(&mut out);
        Ok(out)
    }

    /// Triangulate a simple polygon given as an ordered loop (either winding).
    pub fn triangulate_polygon(&self, outer: &[Point2]) -> Result<Triangulation, TriError> {
        self.triangulate_polygon_with_holes(outer, &[])
    }

    /// Triangulate `outer` minus `holes`.
    pub fn triangulate_polygon_with_holes(
        &self,
        outer: &[Point2],
        holes: &[Vec<Point2>],
    ) -> Result<Triangulation, TriError> {
        let merged = self.merge_holes(outer, holes)?;
        let triangles = ear_clip(&merged.polygon, &self.cfg)?;
        let mut vertices = outer.to_vec();
        for hole in holes {
            vertices.extend_from_slice(hole);
        }
        let mut out = Triangulation {
            vertices,
            triangles,
            hull: None,
            merged: merged.polygon.ids(),
            diagnostics: merged.diagnostics,
        };
        self.note_degenerate(&mut out);
        tracing::debug!(
            outer = outer.len(),
            holes = holes.len(),
            bridges = merged.bridges.len(),
            triangles = out.len(),
            "triangulated polygon"
        );
        Ok(out)
    }

    /// Validate `outer` and splice `holes` into it. Hole `j` gets ids
    /// starting at `outer.len() + Σ_{i<j} holes[i].len()`.
    pub fn merge_holes(
        &self,
        outer: &[Point2],
        holes: &[Vec<Point2>],
    ) -> Result<MergedPolygon, TriError> {
        let outer_poly = Polygon::from_points(outer, 0)?;
        let eps = self.cfg.geom.eps_spread;
        let bounds = Aabb2::from_points(outer_poly.points()).ok_or(
            TriError::InsufficientPoints {
                got: outer.len(),
                need: 3,
            },
        )?;
        let thickness = outer_poly.signed_area().abs() / bounds.width().max(bounds.height());
        if bounds.is_degenerate(eps) || thickness <= eps {
            return Err(TriError::DegenerateSpread {
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        let mut next_id = outer.len();
        let loops: Vec<Vec<Vertex>> = holes
            .iter()
            .map(|hole| {
                let first = next_id;
                next_id += hole.len();
                hole.iter()
                    .enumerate()
                    .map(|(k, &p)| Vertex::new(first + k, p))
                    .collect()
            })
            .collect();
        holes::merge_holes(outer_poly, loops, &self.cfg.geom)
    }

    fn note_degenerate(&self, out: &mut Triangulation) {
        let eps = self.cfg.geom.eps_orient;
        let count = (0..out.len())
            .filter(|&t| {
                let [a, b, c] = out.triangle_points(t);
                is_sliver(a, b, c, eps)
            })
            .count();
        if count > 0 {
            out.diagnostics.push(Diagnostic::DegenerateTriangles { count });
        }
    }
}
