//! Visible outer vertex for a hole's extremal vertex.
//!
//! Model
//! - Cast a ray from `h` in +x to just past the outer loop's max x and keep the
//!   nearest crossing edge (ties keep the lower edge index).
//! - Default candidate: the crossing edge's larger-x endpoint, or the endpoint
//!   itself when the ray passes exactly through it.
//! - Correction: strictly reflex outer vertices with `x >= h.x` lying in the
//!   triangle `(h, crossing, candidate)` may occlude the candidate. The one
//!   with the smallest angle to the ray wins, ties (within `eps_angle`) go to
//!   the nearer vertex. A residual tie keeps the first in loop order.
//! - Bridge vertices appear twice in a merged loop; among the occurrences of
//!   the winner, the one whose interior wedge contains `h` is returned.
//!
//! Precondition: the outer loop is CCW.

use crate::kernel::{
    angle_between, horizontal_ray_hit, point_in_triangle, squared_distance, GeomCfg, Orientation,
    Point2,
};
use crate::polygon::{Polygon, Vertex};

/// Resolved connection target on the outer loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visible {
    /// Position of the visible vertex in the outer loop.
    pub pos: usize,
    pub vertex: Vertex,
    /// Index of the nearest crossing edge (`pos(edge) → pos(edge + 1)`).
    pub edge: usize,
    /// Where the ray meets that edge.
    pub crossing: Point2,
}

/// Find a vertex of `outer` connectable to `h` without crossing an edge.
///
/// `None` when the ray meets no edge (the hole is not inside `outer`).
pub fn resolve_visible_vertex(outer: &Polygon, h: Point2, geom: &GeomCfg) -> Option<Visible> {
    let (edge, crossing) = closest_crossing_edge(outer, h)?;
    let a_pos = edge;
    let b_pos = outer.next_pos(edge);
    let (a, b) = (outer.vertex(a_pos), outer.vertex(b_pos));
    let touch = geom.eps_orient * geom.eps_orient;

    let mut pos = if squared_distance(crossing, a.p) <= touch {
        a_pos
    } else if squared_distance(crossing, b.p) <= touch {
        b_pos
    } else if b.p.x > a.p.x {
        b_pos
    } else {
        a_pos
    };

    let candidate = outer.vertex(pos).p;
    if geom.orient(h, crossing, candidate) != Orientation::On {
        if let Some(better) = occluding_reflex(outer, h, crossing, candidate, geom) {
            pos = better;
        }
    }

    let pos = wedge_occurrence(outer, pos, h, geom);
    Some(Visible {
        pos,
        vertex: outer.vertex(pos),
        edge,
        crossing,
    })
}

/// Nearest edge hit by the +x ray from `h`.
fn closest_crossing_edge(outer: &Polygon, h: Point2) -> Option<(usize, Point2)> {
    let end_x = outer.extremal().p.x + 1.0;
    let mut best: Option<(usize, Point2, f64)> = None;
    for i in 0..outer.len() {
        let a = outer.vertex(i).p;
        let b = outer.vertex(i + 1).p;
        if a.x < h.x && b.x < h.x {
            continue;
        }
        let Some(hit) = horizontal_ray_hit(h, end_x, a, b) else {
            continue;
        };
        let d = squared_distance(h, hit);
        if best.map_or(true, |(_, _, bd)| d < bd) {
            best = Some((i, hit, d));
        }
    }
    best.map(|(i, hit, _)| (i, hit))
}

/// Strictly reflex positions of a CCW loop with `x >= min_x`. Collinear
/// vertices are not reflex here.
fn reflex_positions(outer: &Polygon, min_x: f64, geom: &GeomCfg) -> Vec<usize> {
    (0..outer.len())
        .filter(|&pos| {
            let v = outer.vertex(pos).p;
            v.x >= min_x
                && geom
                    .orient(
                        outer.vertex(outer.prev_pos(pos)).p,
                        v,
                        outer.vertex(outer.next_pos(pos)).p,
                    )
                    .is_right()
        })
        .collect()
}

fn occluding_reflex(
    outer: &Polygon,
    h: Point2,
    crossing: Point2,
    candidate: Point2,
    geom: &GeomCfg,
) -> Option<usize> {
    let ray = crossing - h;
    let mut best: Option<(usize, f64, f64)> = None;
    for pos in reflex_positions(outer, h.x, geom) {
        let v = outer.vertex(pos).p;
        if !point_in_triangle(v, h, crossing, candidate, geom.eps_orient) {
            continue;
        }
        let angle = angle_between(ray, v - h);
        let dist = squared_distance(v, h);
        let better = match best {
            None => true,
            Some((_, best_angle, best_dist)) => {
                if (angle - best_angle).abs() <= geom.eps_angle {
                    dist < best_dist
                } else {
                    angle < best_angle
                }
            }
        };
        if better {
            best = Some((pos, angle, dist));
        }
    }
    best.map(|(pos, _, _)| pos)
}

/// Keep `pos` if its interior wedge contains `h`, otherwise switch to another
/// occurrence of the same vertex whose wedge does.
fn wedge_occurrence(outer: &Polygon, pos: usize, h: Point2, geom: &GeomCfg) -> usize {
    let occurrences = outer.positions_of(outer.vertex(pos).id);
    if occurrences.len() <= 1 || locally_inside(outer, pos, h, geom) {
        return pos;
    }
    occurrences
        .iter()
        .copied()
        .find(|&k| locally_inside(outer, k, h, geom))
        .unwrap_or(pos)
}

/// `q` lies in the interior wedge at position `pos` of a CCW loop.
fn locally_inside(outer: &Polygon, pos: usize, q: Point2, geom: &GeomCfg) -> bool {
    let prev = outer.vertex(outer.prev_pos(pos)).p;
    let v = outer.vertex(pos).p;
    let next = outer.vertex(outer.next_pos(pos)).p;
    if geom.orient(prev, v, next).is_right() {
        geom.orient(v, next, q).is_left() || geom.orient(prev, v, q).is_left()
    } else {
        !geom.orient(v, next, q).is_right() && !geom.orient(prev, v, q).is_right()
    }
}
