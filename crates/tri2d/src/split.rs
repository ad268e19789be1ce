//! Triangle splitting: keep every scattered point as a mesh vertex.
//!
//! Model
//! - Ear-clip the hull, then insert each remaining point in input order.
//! - A point strictly inside a triangle splits it three ways. A point on an
//!   edge splits that triangle and the neighbor sharing the edge two ways
//!   each (only one triangle on a hull edge).
//! - Points coincident with a mesh vertex or found in no triangle are skipped
//!   with `InteriorPointSkipped`.
//!
//! Each insertion keeps the covered area and CCW winding, so `k` inserted
//! points on an `h`-vertex hull give `h − 2 + 2k` triangles.

use std::collections::HashSet;

use crate::cfg::TriCfg;
use crate::earclip::ear_clip;
use crate::error::{Diagnostic, TriError};
use crate::kernel::{squared_distance, GeomCfg, Orientation, Point2};
use crate::polygon::Polygon;

enum Location {
    Inside(usize),
    /// Triangle index and the local edge `k → k + 1` the point lies on.
    OnEdge(usize, usize),
    Coincident,
    Outside,
}

/// Triangulate `points` with `hull` (ids into `points`) as the boundary.
pub fn split_insert(
    points: &[Point2],
    hull: &Polygon,
    cfg: &TriCfg,
) -> Result<(Vec<[usize; 3]>, Vec<Diagnostic>), TriError> {
    let mut triangles = ear_clip(hull, cfg)?;
    let on_hull: HashSet<usize> = hull.ids().into_iter().collect();
    let mut diagnostics = Vec::new();
    let mut inserted = 0usize;
    for (index, &q) in points.iter().enumerate() {
        if on_hull.contains(&index) {
            continue;
        }
        match locate(points, &triangles, q, &cfg.geom) {
            Location::Inside(t) => {
                let [a, b, c] = triangles[t];
                triangles[t] = [a, b, index];
                triangles.push([b, c, index]);
                triangles.push([c, a, index]);
                inserted += 1;
            }
            Location::OnEdge(t, k) => {
                split_edge(&mut triangles, t, k, index);
                inserted += 1;
            }
            Location::Coincident | Location::Outside => {
                diagnostics.push(Diagnostic::InteriorPointSkipped { index });
            }
        }
    }
    tracing::debug!(
        hull = hull.len(),
        inserted,
        skipped = diagnostics.len(),
        triangles = triangles.len(),
        "triangle splitting"
    );
    Ok((triangles, diagnostics))
}

fn locate(points: &[Point2], triangles: &[[usize; 3]], q: Point2, geom: &GeomCfg) -> Location {
    let touch = geom.eps_orient * geom.eps_orient;
    for (t, tri) in triangles.iter().enumerate() {
        let p = tri.map(|i| points[i]);
        if !geom.orient(p[0], p[1], p[2]).is_left() {
            continue;
        }
        let sides = [
            geom.orient(p[0], p[1], q),
            geom.orient(p[1], p[2], q),
            geom.orient(p[2], p[0], q),
        ];
        if sides.contains(&Orientation::Right) {
            continue;
        }
        if p.iter().any(|&v| squared_distance(v, q) <= touch) {
            return Location::Coincident;
        }
        let on: Vec<usize> = (0..3).filter(|&k| sides[k].is_on()).collect();
        return match on.as_slice() {
            [] => Location::Inside(t),
            [k] => Location::OnEdge(t, *k),
            _ => Location::Coincident,
        };
    }
    Location::Outside
}

/// Split triangle `t` at point `q` on its local edge `k`, plus the triangle
/// across that edge if there is one.
fn split_edge(triangles: &mut Vec<[usize; 3]>, t: usize, k: usize, q: usize) {
    let tri = triangles[t];
    let (a, b, c) = (tri[k], tri[(k + 1) % 3], tri[(k + 2) % 3]);
    triangles[t] = [a, q, c];
    triangles.push([q, b, c]);

    let across = triangles.iter().enumerate().find_map(|(s, other)| {
        (0..3)
            .find(|&j| other[j] == b && other[(j + 1) % 3] == a)
            .map(|j| (s, other[(j + 2) % 3]))
    });
    if let Some((s, d)) = across {
        triangles[s] = [b, q, d];
        triangles.push([q, a, d]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::convex_hull;
    use crate::kernel::signed_area;
    use nalgebra::vector;

    fn total_area(points: &[Point2], tris: &[[usize; 3]]) -> f64 {
        tris.iter()
            .map(|t| signed_area(t.iter().map(|&i| points[i])))
            .sum()
    }

    fn run(points: &[Point2]) -> (Vec<[usize; 3]>, Vec<Diagnostic>) {
        let cfg = TriCfg::default();
        let hull = convex_hull(points, &cfg).unwrap();
        split_insert(points, &hull, &cfg).unwrap()
    }

    #[test]
    fn interior_point_splits_three_ways() {
        let pts = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![0.0, 4.0],
            vector![1.0, 1.0],
        ];
        let (tris, diags) = run(&pts);
        assert!(diags.is_empty());
        assert_eq!(tris.len(), 3);
        assert!((total_area(&pts, &tris) - 8.0).abs() < 1e-12);
        assert!(tris.iter().all(|t| t.contains(&3)));
        for t in &tris {
            assert!(signed_area(t.iter().map(|&i| pts[i])) > 0.0);
        }
    }

    #[test]
    fn point_on_shared_edge_splits_both_neighbors() {
        // The square is clipped along the (1,0)-(0,1) diagonal; (0.5, 0.5) sits on it.
        let pts = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
            vector![0.5, 0.5],
        ];
        let (tris, diags) = run(&pts);
        assert!(diags.is_empty());
        assert_eq!(tris.len(), 4);
        assert!((total_area(&pts, &tris) - 1.0).abs() < 1e-12);
        assert_eq!(tris.iter().filter(|t| t.contains(&4)).count(), 4);
        for t in &tris {
            assert!(signed_area(t.iter().map(|&i| pts[i])) > 0.0);
        }
    }

    #[test]
    fn duplicate_point_is_skipped() {
        let pts = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![0.0, 2.0],
            vector![0.5, 0.5],
            vector![0.5, 0.5],
        ];
        let (tris, diags) = run(&pts);
        assert_eq!(tris.len(), 3);
        assert_eq!(diags, vec![Diagnostic::InteriorPointSkipped { index: 4 }]);
    }

    #[test]
    fn many_points_keep_count_and_area() {
        let mut pts = vec![
            vector![0.0, 0.0],
            vector![3.0, 0.0],
            vector![3.0, 3.0],
            vector![0.0, 3.0],
        ];
        for i in 0..3 {
            for j in 0..3 {
                pts.push(vector![0.7 + 0.8 * i as f64, 0.55 + 0.85 * j as f64]);
            }
        }
        let (tris, diags) = run(&pts);
        assert!(diags.is_empty());
        assert_eq!(tris.len(), 4 - 2 + 2 * 9);
        assert!((total_area(&pts, &tris) - 9.0).abs() < 1e-9);
    }
}
