//! Orientation predicate and the small set of primitives built on it.
//!
//! Every function here is pure and allocation-free. Inclusive tests (`On`
//! counts as inside) are the default; callers that need strict behavior
//! compare against `Orientation` directly.

use super::types::{Orientation, Point2};

/// Twice the signed area of triangle `(a, b, c)`; positive when CCW.
#[inline]
pub fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Classify `c` against the directed line `a → b`.
///
/// `eps` is a distance: `c` is `On` when it lies within `eps` of the line
/// (`|cross| <= eps * |b - a|`), so the result does not depend on the scale
/// of the input.
#[inline]
pub fn orientation(a: Point2, b: Point2, c: Point2, eps: f64) -> Orientation {
    let d = cross(a, b, c);
    let tol = eps * (b - a).norm();
    if d > tol {
        Orientation::Left
    } else if d < -tol {
        Orientation::Right
    } else {
        Orientation::On
    }
}

/// Triangle `(a, b, c)` is thinner than `eps`: some vertex lies within `eps`
/// of the line through the longest side.
pub fn is_sliver(a: Point2, b: Point2, c: Point2, eps: f64) -> bool {
    let sides = [(a, b, c), (b, c, a), (c, a, b)];
    let (u, v, w) = sides
        .into_iter()
        .max_by(|x, y| squared_distance(x.0, x.1).total_cmp(&squared_distance(y.0, y.1)))
        .unwrap_or((a, b, c));
    orientation(u, v, w, eps).is_on()
}

#[inline]
pub fn squared_distance(p: Point2, q: Point2) -> f64 {
    (p - q).norm_squared()
}

/// Unsigned angle between `u` and `v` in `[0, π]`.
///
/// The normalized dot product is clamped to `[-1, 1]` before `acos` so that
/// round-off never produces NaN. Zero vectors yield `0.0`.
pub fn angle_between(u: Point2, v: Point2) -> f64 {
    let nu = u.norm();
    let nv = v.norm();
    if nu == 0.0 || nv == 0.0 {
        return 0.0;
    }
    (u.dot(&v) / (nu * nv)).clamp(-1.0, 1.0).acos()
}

/// Shoelace area of a closed loop; positive for CCW.
pub fn signed_area<I: IntoIterator<Item = Point2>>(loop_points: I) -> f64 {
    let pts: Vec<Point2> = loop_points.into_iter().collect();
    if pts.len() < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..pts.len() {
        let p = pts[i];
        let q = pts[(i + 1) % pts.len()];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// `p` lies on the closed segment `a–b` (collinear within `eps` and inside its bounds).
pub fn on_segment(p: Point2, a: Point2, b: Point2, eps: f64) -> bool {
    if !orientation(a, b, p, eps).is_on() {
        return false;
    }
    p.x >= a.x.min(b.x) - eps
        && p.x <= a.x.max(b.x) + eps
        && p.y >= a.y.min(b.y) - eps
        && p.y <= a.y.max(b.y) + eps
}

/// Inclusive point-in-triangle test for either winding.
///
/// A degenerate (collinear) triangle contains exactly the points of its
/// three sides.
pub fn point_in_triangle(p: Point2, a: Point2, b: Point2, c: Point2, eps: f64) -> bool {
    if orientation(a, b, c, eps).is_on() {
        return on_segment(p, a, b, eps) || on_segment(p, b, c, eps) || on_segment(p, c, a, eps);
    }
    let sides = [
        orientation(a, b, p, eps),
        orientation(b, c, p, eps),
        orientation(c, a, p, eps),
    ];
    let any_left = sides.iter().any(|s| s.is_left());
    let any_right = sides.iter().any(|s| s.is_right());
    !(any_left && any_right)
}

/// Proper crossing of segments `p1–p2` and `q1–q2` (interiors intersect in a
/// single point; touching at endpoints or collinear overlap does not count).
pub fn segments_cross(p1: Point2, p2: Point2, q1: Point2, q2: Point2, eps: f64) -> bool {
    let o1 = orientation(p1, p2, q1, eps);
    let o2 = orientation(p1, p2, q2, eps);
    let o3 = orientation(q1, q2, p1, eps);
    let o4 = orientation(q1, q2, p2, eps);
    let opposite = |s: Orientation, t: Orientation| {
        (s.is_left() && t.is_right()) || (s.is_right() && t.is_left())
    };
    opposite(o1, o2) && opposite(o3, o4)
}

/// Intersection of the horizontal segment from `origin` to `(end_x, origin.y)`
/// with segment `a–b`.
///
/// Horizontal edges are ignored; their endpoints are reported through the
/// adjacent non-horizontal edges instead.
pub fn horizontal_ray_hit(origin: Point2, end_x: f64, a: Point2, b: Point2) -> Option<Point2> {
    if a.y == b.y {
        return None;
    }
    let y = origin.y;
    if y < a.y.min(b.y) || y > a.y.max(b.y) {
        return None;
    }
    let x = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
    if !x.is_finite() || x < origin.x || x > end_x {
        return None;
    }
    Some(Point2::new(x, y))
}
