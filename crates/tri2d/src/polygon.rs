//! Ordered vertex loop with an extremal-vertex cache.
//!
//! Purpose
//! - Hold one boundary loop (outer, hole, or the merged result) as an ordered
//!   sequence of `Vertex` values. A vertex carries its `id` (index into the
//!   shared vertex buffer of one pipeline call) so bridge duplicates created
//!   by hole merging still refer to a single output vertex.
//! - Answer "where is the max-x vertex" and "where does id `k` occur" in O(1)
//!   after an O(n) rebuild. Every mutation (`splice_after`, `rotate_to`,
//!   `reverse`) rebuilds the cache of the modified loop only.
//!
//! Invariants
//! - At least three vertices.
//! - No two consecutive entries share a position (checked on construction).
//! - `extremal` is the first position holding the maximum x, tie-broken by
//!   maximum y.

use std::collections::HashMap;

use crate::error::TriError;
use crate::kernel::{signed_area, Point2};

/// A loop entry: position plus the id of the output vertex it maps to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub id: usize,
    pub p: Point2,
}

impl Vertex {
    #[inline]
    pub fn new(id: usize, p: Point2) -> Self {
        Self { id, p }
    }
}

/// Loop direction derived from the signed area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Ccw,
    Cw,
}

#[derive(Clone, Debug)]
pub struct Polygon {
    verts: Vec<Vertex>,
    extremal: usize,
    positions: HashMap<usize, Vec<usize>>,
}

impl Polygon {
    /// Build from vertices, dropping consecutive duplicates (including a
    /// closing copy of the first vertex).
    pub fn new(verts: Vec<Vertex>) -> Result<Self, TriError> {
        let mut cleaned: Vec<Vertex> = Vec::with_capacity(verts.len());
        for v in verts {
            if cleaned.last().map_or(true, |last| last.p != v.p) {
                cleaned.push(v);
            }
        }
        while cleaned.len() > 1 && cleaned[0].p == cleaned[cleaned.len() - 1].p {
            cleaned.pop();
        }
        if cleaned.len() < 3 {
            return Err(TriError::InsufficientPoints {
                got: cleaned.len(),
                need: 3,
            });
        }
        let mut poly = Self {
            verts: cleaned,
            extremal: 0,
            positions: HashMap::new(),
        };
        poly.rebuild_cache();
        Ok(poly)
    }

    /// Loop over `points` with ids `first_id, first_id + 1, ...`.
    pub fn from_points(points: &[Point2], first_id: usize) -> Result<Self, TriError> {
        Self::new(
            points
                .iter()
                .enumerate()
                .map(|(k, &p)| Vertex::new(first_id + k, p))
                .collect(),
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false: construction rejects loops under three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.verts
    }

    /// Vertex at `pos`, wrapping around the loop.
    #[inline]
    pub fn vertex(&self, pos: usize) -> Vertex {
        self.verts[pos % self.verts.len()]
    }

    #[inline]
    pub fn prev_pos(&self, pos: usize) -> usize {
        (pos + self.verts.len() - 1) % self.verts.len()
    }

    #[inline]
    pub fn next_pos(&self, pos: usize) -> usize {
        (pos + 1) % self.verts.len()
    }

    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.verts.iter().map(|v| v.p)
    }

    pub fn ids(&self) -> Vec<usize> {
        self.verts.iter().map(|v| v.id).collect()
    }

    /// Max-x vertex (tie-break max-y).
    #[inline]
    pub fn extremal(&self) -> Vertex {
        self.verts[self.extremal]
    }

    #[inline]
    pub fn extremal_pos(&self) -> usize {
        self.extremal
    }

    /// All positions holding vertex `id`, ascending. Bridge vertices occur twice.
    pub fn positions_of(&self, id: usize) -> &[usize] {
        self.positions.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First position holding vertex `id`.
    pub fn position_of(&self, id: usize) -> Option<usize> {
        self.positions_of(id).first().copied()
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(self.points())
    }

    /// Zero-area loops report `Ccw`.
    pub fn winding(&self) -> Winding {
        if self.signed_area() < 0.0 {
            Winding::Cw
        } else {
            Winding::Ccw
        }
    }

    pub fn reverse(&mut self) {
        self.verts.reverse();
        self.rebuild_cache();
    }

    pub fn make_ccw(&mut self) {
        if self.winding() == Winding::Cw {
            self.reverse();
        }
    }

    pub fn make_cw(&mut self) {
        if self.winding() == Winding::Ccw {
            self.reverse();
        }
    }

    /// Rotate so that the vertex at `pos` becomes position 0.
    pub fn rotate_to(&mut self, pos: usize) {
        let pos = pos % self.verts.len();
        if pos != 0 {
            self.verts.rotate_left(pos);
            self.rebuild_cache();
        }
    }

    /// Insert `seq` immediately after position `pos`.
    pub fn splice_after<I: IntoIterator<Item = Vertex>>(&mut self, pos: usize, seq: I) {
        let at = pos % self.verts.len() + 1;
        self.verts.splice(at..at, seq);
        self.rebuild_cache();
    }

    /// Even-odd test; points on the boundary may go either way.
    pub fn contains_point(&self, q: Point2) -> bool {
        let n = self.verts.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.verts[i].p;
            let b = self.verts[j].p;
            if (a.y > q.y) != (b.y > q.y) {
                let x = a.x + (q.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if q.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    fn rebuild_cache(&mut self) {
        self.positions.clear();
        let mut best = 0usize;
        for (pos, v) in self.verts.iter().enumerate() {
            self.positions.entry(v.id).or_default().push(pos);
            let b = self.verts[best].p;
            if v.p.x > b.x || (v.p.x == b.x && v.p.y > b.y) {
                best = pos;
            }
        }
        self.extremal = best;
    }
}
