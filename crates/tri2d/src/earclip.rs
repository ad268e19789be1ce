//! Ear-clipping triangulation of a simple polygon.
//!
//! Model
//! - The loop lives in a fixed arena with `prev`/`next` index arrays, so a clip
//!   is O(1) relinking. Each vertex carries a cached `Corner` class; after a
//!   clip only the two former neighbors are reclassified.
//! - A vertex is an ear when it is clippable (`Convex`, or `Flat` unless
//!   collinear points are treated as concave) and no non-convex vertex lies in
//!   its triangle. Vertices sharing a corner's position (bridge duplicates) do
//!   not block.
//! - The scan resumes at the clipped vertex's successor. A full ring without an
//!   ear means the input was not simple.
//!
//! Output: `N − 2` triangles of vertex ids, CCW (zero-area for collinear clips).

use crate::cfg::TriCfg;
use crate::error::{Stage, TriError};
use crate::kernel::{point_in_triangle, GeomCfg, Orientation};
use crate::polygon::{Polygon, Vertex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Corner {
    Convex,
    Flat,
    Reflex,
}

struct Ring<'a> {
    verts: &'a [Vertex],
    prev: Vec<usize>,
    next: Vec<usize>,
    corner: Vec<Corner>,
    alive: usize,
}

impl<'a> Ring<'a> {
    fn new(verts: &'a [Vertex], geom: &GeomCfg) -> Self {
        let n = verts.len();
        let mut ring = Self {
            verts,
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            next: (0..n).map(|i| (i + 1) % n).collect(),
            corner: vec![Corner::Convex; n],
            alive: n,
        };
        for i in 0..n {
            ring.classify(i, geom);
        }
        ring
    }

    fn classify(&mut self, i: usize, geom: &GeomCfg) {
        let a = self.verts[self.prev[i]].p;
        let b = self.verts[i].p;
        let c = self.verts[self.next[i]].p;
        self.corner[i] = match geom.orient(a, b, c) {
            Orientation::Left => Corner::Convex,
            Orientation::On => Corner::Flat,
            Orientation::Right => Corner::Reflex,
        };
    }

    fn is_ear(&self, i: usize, cfg: &TriCfg) -> bool {
        match self.corner[i] {
            Corner::Reflex => return false,
            Corner::Flat if cfg.collinear_concave => return false,
            _ => {}
        }
        let (p, n) = (self.prev[i], self.next[i]);
        let (a, b, c) = (self.verts[p].p, self.verts[i].p, self.verts[n].p);
        let mut k = self.next[n];
        while k != p {
            if self.corner[k] != Corner::Convex {
                let q = self.verts[k].p;
                if q != a
                    && q != b
                    && q != c
                    && point_in_triangle(q, a, b, c, cfg.geom.eps_orient)
                {
                    return false;
                }
            }
            k = self.next[k];
        }
        true
    }

    fn find_ear(&self, start: usize, cfg: &TriCfg) -> Result<usize, TriError> {
        let mut i = start;
        for _ in 0..self.alive {
            if self.is_ear(i, cfg) {
                return Ok(i);
            }
            i = self.next[i];
        }
        Err(TriError::NonSimplePolygon {
            remaining: self.alive,
        })
    }

    fn unlink(&mut self, i: usize) {
        let (p, n) = (self.prev[i], self.next[i]);
        self.next[p] = n;
        self.prev[n] = p;
        self.alive -= 1;
    }

    fn triangle(&self, i: usize) -> [usize; 3] {
        [
            self.verts[self.prev[i]].id,
            self.verts[i].id,
            self.verts[self.next[i]].id,
        ]
    }
}

/// Triangulate a simple polygon; the loop is read as CCW (reversed if needed).
pub fn ear_clip(poly: &Polygon, cfg: &TriCfg) -> Result<Vec<[usize; 3]>, TriError> {
    let mut poly = poly.clone();
    poly.make_ccw();
    let n = poly.len();
    if n < 3 {
        return Err(TriError::InsufficientPoints { got: n, need: 3 });
    }
    let mut ring = Ring::new(poly.vertices(), &cfg.geom);
    let mut triangles = Vec::with_capacity(n - 2);
    let limit = cfg.clip_limit(n);
    let mut cursor = 0usize;
    let mut clips = 0usize;
    while ring.alive > 3 {
        if clips >= limit {
            return Err(TriError::IterationLimitExceeded {
                stage: Stage::EarClip,
                limit,
            });
        }
        let ear = ring.find_ear(cursor, cfg)?;
        triangles.push(ring.triangle(ear));
        let (p, nx) = (ring.prev[ear], ring.next[ear]);
        ring.unlink(ear);
        ring.classify(p, &cfg.geom);
        ring.classify(nx, &cfg.geom);
        cursor = nx;
        clips += 1;
    }
    triangles.push(ring.triangle(ring.next[cursor]));
    Ok(triangles)
}
