//! Incremental (sweep) triangulation of scattered points.
//!
//! Model
//! - Points are visited in `(x, y)` order, so every new point lies outside
//!   the hull of the points already placed.
//! - The leading collinear run is fanned from the first point off its line.
//! - Each later point is joined to every hull edge it sees strictly from the
//!   outside; the seen chain of the hull loop is replaced by the point.
//! - Coincident points, and points that see no edge after rounding, are
//!   skipped with `InteriorPointSkipped`.
//!
//! With `n` points placed and `h` vertices on the final hull (collinear ones
//! included) the mesh has `2n − h − 2` triangles, all CCW.

use crate::cfg::TriCfg;
use crate::error::{Diagnostic, TriError};
use crate::kernel::{orientation, squared_distance, Aabb2, Point2};

/// Output of `incremental_insert`; ids index the input slice.
#[derive(Clone, Debug, PartialEq)]
pub struct IncrementalMesh {
    pub triangles: Vec<[usize; 3]>,
    /// Final hull loop, CCW, starting at the min-x (then min-y) point.
    pub hull: Vec<usize>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Triangulate `points` by sweeping them in `(x, y)` order.
pub fn incremental_insert(points: &[Point2], cfg: &TriCfg) -> Result<IncrementalMesh, TriError> {
    let n = points.len();
    if n < 3 {
        return Err(TriError::InsufficientPoints { got: n, need: 3 });
    }
    let geom = &cfg.geom;
    let bounds = Aabb2::from_points(points.iter().copied())
        .ok_or(TriError::InsufficientPoints { got: 0, need: 3 })?;
    let degenerate = TriError::DegenerateSpread {
        width: bounds.width(),
        height: bounds.height(),
    };
    if bounds.is_degenerate(geom.eps_spread) {
        return Err(degenerate);
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        points[i]
            .x
            .total_cmp(&points[j].x)
            .then(points[i].y.total_cmp(&points[j].y))
    });
    let touch = geom.eps_orient * geom.eps_orient;
    let mut diagnostics = Vec::new();

    // Leading collinear run, closed by the first point off its line.
    let mut rest = order.into_iter();
    let mut run: Vec<usize> = Vec::new();
    let mut apex = None;
    for i in rest.by_ref() {
        if let Some(&last) = run.last() {
            if squared_distance(points[last], points[i]) <= touch {
                diagnostics.push(Diagnostic::InteriorPointSkipped { index: i });
                continue;
            }
        }
        if run.len() >= 2 {
            let line = (points[run[0]], points[run[run.len() - 1]]);
            if !orientation(line.0, line.1, points[i], geom.eps_spread).is_on() {
                apex = Some(i);
                break;
            }
        }
        run.push(i);
    }
    let apex = apex.ok_or(degenerate)?;
    let first = run[0];
    let apex_left = geom
        .orient(points[first], points[run[run.len() - 1]], points[apex])
        .is_left();

    let mut triangles = Vec::with_capacity(2 * n);
    let mut hull: Vec<usize> = if apex_left {
        triangles.extend(run.windows(2).map(|w| [w[0], w[1], apex]));
        run.clone()
    } else {
        triangles.extend(run.windows(2).map(|w| [w[1], w[0], apex]));
        run.iter().rev().copied().collect()
    };
    hull.push(apex);

    let mut prev = apex;
    for i in rest {
        let q = points[i];
        if squared_distance(points[prev], q) <= touch {
            diagnostics.push(Diagnostic::InteriorPointSkipped { index: i });
            continue;
        }
        let m = hull.len();
        let sees: Vec<bool> = (0..m)
            .map(|e| {
                geom.orient(points[hull[e]], points[hull[(e + 1) % m]], q)
                    .is_right()
            })
            .collect();
        let Some(start) = (0..m).find(|&e| sees[e] && !sees[(e + m - 1) % m]) else {
            diagnostics.push(Diagnostic::InteriorPointSkipped { index: i });
            continue;
        };
        let count = (0..m).take_while(|&k| sees[(start + k) % m]).count();
        hull.rotate_left(start);
        triangles.extend((0..count).map(|k| [hull[k + 1], hull[k], i]));
        hull.splice(1..count, [i]);
        prev = i;
    }

    if let Some(pos) = hull.iter().position(|&id| id == first) {
        hull.rotate_left(pos);
    }
    tracing::debug!(
        points = n,
        hull = hull.len(),
        skipped = diagnostics.len(),
        triangles = triangles.len(),
        "incremental triangulation"
    );
    Ok(IncrementalMesh {
        triangles,
        hull,
        diagnostics,
    })
}
