//! Convex hull by gift wrapping (Jarvis march).
//!
//! Model
//! - Start at the min-x vertex (tie-break min-y); it is always on the hull.
//! - From the current hull vertex, pick the candidate that no other remaining
//!   point lies to the right of (the most clockwise turn), then collect every
//!   point lying `On` that supporting line ahead of the current vertex and
//!   append them in increasing distance. Accepted points leave the working set;
//!   the start vertex stays in it so the walk can close.
//! - Output is CCW, collinear boundary points included, no duplicates.
//!
//! Strategy
//! - `Deterministic` seeds the candidate scan with the first remaining point.
//! - `Seeded` seeds it with a point drawn from a seeded RNG. The corrected
//!   result is the same; the variant exists for reproducing runs of tools
//!   that used a random first pick.
//!
//! Code cross-refs: `kernel::{orientation, Aabb2}`, `polygon::Polygon`, `cfg::TriCfg`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::TriCfg;
use crate::error::{Stage, TriError};
use crate::kernel::{orientation, squared_distance, Aabb2, GeomCfg, Orientation, Point2};
use crate::polygon::{Polygon, Vertex};

/// How the candidate scan picks its first guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HullStrategy {
    #[default]
    Deterministic,
    Seeded {
        seed: u64,
    },
}

enum CandidatePicker {
    First,
    Seeded(StdRng),
}

impl CandidatePicker {
    fn new(strategy: HullStrategy) -> Self {
        match strategy {
            HullStrategy::Deterministic => CandidatePicker::First,
            HullStrategy::Seeded { seed } => CandidatePicker::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            CandidatePicker::First => Some(0),
            CandidatePicker::Seeded(rng) => Some(rng.gen_range(0..len)),
        }
    }
}

/// Convex hull of `points`; vertex ids are indices into `points`.
pub fn convex_hull(points: &[Point2], cfg: &TriCfg) -> Result<Polygon, TriError> {
    let verts = points
        .iter()
        .enumerate()
        .map(|(id, &p)| Vertex::new(id, p))
        .collect();
    hull_of_vertices(verts, cfg)
}

/// Gift wrapping over an explicit working set.
pub fn hull_of_vertices(mut remaining: Vec<Vertex>, cfg: &TriCfg) -> Result<Polygon, TriError> {
    let n = remaining.len();
    if n < 3 {
        return Err(TriError::InsufficientPoints { got: n, need: 3 });
    }
    let geom = &cfg.geom;
    let degenerate = |b: Aabb2| TriError::DegenerateSpread {
        width: b.width(),
        height: b.height(),
    };
    let bounds = Aabb2::from_points(remaining.iter().map(|v| v.p))
        .ok_or(TriError::InsufficientPoints { got: 0, need: 3 })?;
    if bounds.is_degenerate(geom.eps_spread) {
        return Err(degenerate(bounds));
    }
    let start = start_vertex(&remaining);
    if all_collinear(&remaining, start, geom) {
        return Err(degenerate(bounds));
    }

    let limit = cfg.hull_limit(n);
    let mut picker = CandidatePicker::new(cfg.hull_strategy);
    let mut hull = vec![start];
    let mut current = start;
    let mut steps = 0usize;
    loop {
        if steps >= limit {
            return Err(TriError::IterationLimitExceeded {
                stage: Stage::Hull,
                limit,
            });
        }
        steps += 1;

        let mut run = wrap_step(&remaining, current, &mut picker, geom)
            .ok_or_else(|| degenerate(bounds))?;
        if let Some(k) = run.iter().position(|v| v.id == start.id) {
            run.truncate(k + 1);
        }
        remaining.retain(|v| v.id == start.id || !run.iter().any(|r| r.id == v.id));
        current = run[run.len() - 1];
        hull.extend(run);

        if current.id == start.id {
            hull.pop();
            break;
        }
    }
    tracing::debug!(points = n, hull = hull.len(), steps, "convex hull");
    Polygon::new(hull)
}

/// Min-x vertex, tie-broken by min-y.
fn start_vertex(points: &[Vertex]) -> Vertex {
    let mut best = points[0];
    for v in &points[1..] {
        if v.p.x < best.p.x || (v.p.x == best.p.x && v.p.y < best.p.y) {
            best = *v;
        }
    }
    best
}

/// Every point lies within `eps_spread` of the line from `start` to the
/// farthest point.
fn all_collinear(points: &[Vertex], start: Vertex, geom: &GeomCfg) -> bool {
    let far = points
        .iter()
        .map(|v| v.p)
        .max_by(|a, b| {
            squared_distance(*a, start.p).total_cmp(&squared_distance(*b, start.p))
        })
        .unwrap_or(start.p);
    if squared_distance(far, start.p) <= geom.eps_spread * geom.eps_spread {
        return true;
    }
    points
        .iter()
        .all(|v| orientation(start.p, far, v.p, geom.eps_spread).is_on())
}

/// One wrapping step: the next hull vertex plus the collinear run leading to
/// it, sorted by distance from `current`.
fn wrap_step(
    remaining: &[Vertex],
    current: Vertex,
    picker: &mut CandidatePicker,
    geom: &GeomCfg,
) -> Option<Vec<Vertex>> {
    let candidates: Vec<Vertex> = remaining
        .iter()
        .copied()
        .filter(|v| v.id != current.id)
        .collect();
    let mut next = candidates[picker.pick(candidates.len())?];
    for &v in &candidates {
        if v.id != next.id && geom.orient(current.p, next.p, v.p) == Orientation::Right {
            next = v;
        }
    }
    let dir = next.p - current.p;
    let mut run: Vec<Vertex> = candidates
        .iter()
        .copied()
        .filter(|v| {
            v.id == next.id
                || (geom.orient(current.p, next.p, v.p).is_on() && (v.p - current.p).dot(&dir) > 0.0)
        })
        .collect();
    run.sort_by(|a, b| {
        squared_distance(a.p, current.p).total_cmp(&squared_distance(b.p, current.p))
    });
    Some(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn hull_points(points: &[Point2]) -> Vec<Point2> {
        convex_hull(points, &TriCfg::default())
            .unwrap()
            .points()
            .collect()
    }

    #[test]
    fn hull_of_triangle_starts_at_min_x() {
        let pts = [vector![1.0, 0.0], vector![0.0, 1.0], vector![0.0, 0.0]];
        assert_eq!(
            hull_points(&pts),
            vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]]
        );
    }

    #[test]
    fn interior_points_are_excluded() {
        let pts = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
            vector![0.5, 1.5],
        ];
        let hull = convex_hull(&pts, &TriCfg::default()).unwrap();
        assert_eq!(hull.ids(), vec![0, 1, 3, 4]);
        assert!((hull.signed_area() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_boundary_points_are_kept_in_order() {
        let pts = [
            vector![2.0, 0.0],
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
            vector![0.0, 1.0],
        ];
        let hull = hull_points(&pts);
        assert_eq!(
            hull,
            vec![
                vector![0.0, 0.0],
                vector![1.0, 0.0],
                vector![2.0, 0.0],
                vector![2.0, 2.0],
                vector![0.0, 2.0],
                vector![0.0, 1.0],
            ]
        );
    }

    #[test]
    fn degenerate_inputs_fail_with_kind() {
        let cfg = TriCfg::default();
        let line = [vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
        assert!(matches!(
            convex_hull(&line, &cfg),
            Err(TriError::DegenerateSpread { .. })
        ));
        let diagonal = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert!(matches!(
            convex_hull(&diagonal, &cfg),
            Err(TriError::DegenerateSpread { .. })
        ));
        assert!(matches!(
            convex_hull(&[vector![0.0, 0.0], vector![1.0, 1.0]], &cfg),
            Err(TriError::InsufficientPoints { got: 2, need: 3 })
        ));
    }

    #[test]
    fn seeded_strategy_matches_deterministic() {
        let pts: Vec<Point2> = (0..40)
            .map(|k| {
                let t = k as f64 * 0.7;
                vector![t.cos() * (1.0 + 0.3 * (3.0 * t).sin()), t.sin()]
            })
            .collect();
        let det = convex_hull(&pts, &TriCfg::default()).unwrap();
        for seed in [0u64, 7, 12345] {
            let cfg = TriCfg {
                hull_strategy: HullStrategy::Seeded { seed },
                ..TriCfg::default()
            };
            assert_eq!(convex_hull(&pts, &cfg).unwrap().ids(), det.ids());
        }
    }

    #[test]
    fn input_order_does_not_change_the_hull() {
        let pts = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
            vector![0.4, 0.6],
        ];
        let forward: Vec<Vertex> = pts
            .iter()
            .enumerate()
            .map(|(id, &p)| Vertex::new(id, p))
            .collect();
        let mut backward = forward.clone();
        backward.reverse();
        let cfg = TriCfg {
            iteration_slack: 0,
            ..TriCfg::default()
        };
        let a = hull_of_vertices(forward, &cfg).unwrap();
        let b = hull_of_vertices(backward, &cfg).unwrap();
        assert_eq!(a.ids(), vec![0, 1, 2, 3]);
        assert_eq!(a.ids(), b.ids());
    }

    #[test]
    fn small_scale_inputs_keep_their_hull() {
        let pts = [vector![0.0, 0.0], vector![1e-5, 0.0], vector![0.0, 1e-5]];
        let hull = convex_hull(&pts, &TriCfg::default()).unwrap();
        assert_eq!(hull.ids(), vec![0, 1, 2]);
        assert!((hull.signed_area() - 5e-11).abs() < 1e-20);

        // Collinear within eps_spread is still degenerate at any scale.
        let line = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0 + 1e-12]];
        assert!(matches!(
            convex_hull(&line, &TriCfg::default()),
            Err(TriError::DegenerateSpread { .. })
        ));
    }

    #[test]
    fn fixed_cap_stops_wrapping() {
        let pts = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        let capped = TriCfg {
            max_iterations: Some(2),
            ..TriCfg::default()
        };
        assert!(matches!(
            convex_hull(&pts, &capped),
            Err(TriError::IterationLimitExceeded {
                stage: Stage::Hull,
                limit: 2
            })
        ));
        let roomy = TriCfg {
            max_iterations: Some(3),
            ..TriCfg::default()
        };
        assert_eq!(convex_hull(&pts, &roomy).unwrap().ids(), vec![0, 1, 2]);
    }
}
