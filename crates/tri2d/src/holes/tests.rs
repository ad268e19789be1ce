use nalgebra::vector;

use super::*;
use crate::error::{Diagnostic, TriError};
use crate::kernel::{segments_cross, GeomCfg, Point2};
use crate::polygon::{Polygon, Vertex};

fn loop_of(points: &[Point2], first_id: usize) -> Vec<Vertex> {
    points
        .iter()
        .enumerate()
        .map(|(k, &p)| Vertex::new(first_id + k, p))
        .collect()
}

fn edges(points: &[Point2]) -> Vec<(Point2, Point2)> {
    (0..points.len())
        .map(|i| (points[i], points[(i + 1) % points.len()]))
        .collect()
}

fn square(x0: f64, y0: f64, side: f64) -> Vec<Point2> {
    vec![
        vector![x0, y0],
        vector![x0 + side, y0],
        vector![x0 + side, y0 + side],
        vector![x0, y0 + side],
    ]
}

#[test]
fn single_hole_adds_h_plus_two_vertices() {
    let outer_pts = square(0.0, 0.0, 4.0);
    let hole_pts = square(1.0, 1.0, 1.0);
    let outer = Polygon::from_points(&outer_pts, 0).unwrap();
    let merged = merge_holes(outer, vec![loop_of(&hole_pts, 4)], &GeomCfg::default()).unwrap();

    assert_eq!(merged.polygon.len(), 4 + 4 + 2);
    assert!(merged.diagnostics.is_empty());
    // Bridge edges cancel; the area is outer minus hole.
    assert!((merged.polygon.signed_area() - 15.0).abs() < 1e-12);
    assert_eq!(
        merged.bridges,
        vec![Bridge {
            hole: 0,
            from: 6,
            to: 1
        }]
    );
    // Both ends of the bridge occur twice.
    assert_eq!(merged.polygon.positions_of(6).len(), 2);
    assert_eq!(merged.polygon.positions_of(1).len(), 2);
}

#[test]
fn reflex_vertex_occluding_the_candidate_wins() {
    // A spike from the bottom edge pokes into the triangle (h, crossing, (10, 0)).
    let outer_pts = vec![
        vector![0.0, 0.0],
        vector![3.0, 0.0],
        vector![4.0, 4.0],
        vector![5.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ];
    let outer = Polygon::from_points(&outer_pts, 0).unwrap();
    let h = vector![2.0, 5.0];
    let visible = resolve_visible_vertex(&outer, h, &GeomCfg::default()).unwrap();
    assert_eq!(visible.edge, 4);
    assert_eq!(visible.crossing, vector![10.0, 5.0]);
    assert_eq!(visible.vertex.p, vector![4.0, 4.0]);
    assert_eq!(visible.vertex.id, 2);

    let hole = loop_of(&[vector![1.0, 4.0], vector![2.0, 5.0], vector![1.0, 6.0]], 7);
    let merged = merge_holes(outer, vec![hole], &GeomCfg::default()).unwrap();
    assert_eq!(merged.polygon.len(), 7 + 3 + 2);
    assert_eq!(merged.bridges[0].to, 2);
    for (a, b) in edges(&outer_pts) {
        assert!(!segments_cross(h, vector![4.0, 4.0], a, b, 1e-9));
    }
}

#[test]
fn ray_through_a_vertex_connects_to_it() {
    let outer_pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![6.0, 2.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ];
    let outer = Polygon::from_points(&outer_pts, 0).unwrap();
    let visible = resolve_visible_vertex(&outer, vector![2.0, 2.0], &GeomCfg::default()).unwrap();
    assert_eq!(visible.vertex.id, 2);
    assert_eq!(visible.crossing, vector![6.0, 2.0]);
}

#[test]
fn holes_merge_right_to_left_without_crossings() {
    let outer_pts = square(0.0, 0.0, 10.0);
    let left = square(1.0, 1.0, 1.0);
    let right = square(6.0, 6.0, 1.0);
    let outer = Polygon::from_points(&outer_pts, 0).unwrap();
    let merged = merge_holes(
        outer,
        vec![loop_of(&left, 4), loop_of(&right, 8)],
        &GeomCfg::default(),
    )
    .unwrap();

    assert_eq!(merged.polygon.len(), 4 + (4 + 2) + (4 + 2));
    assert!((merged.polygon.signed_area() - 98.0).abs() < 1e-9);
    let order: Vec<usize> = merged.bridges.iter().map(|b| b.hole).collect();
    assert_eq!(order, vec![1, 0]);

    let all_points: Vec<Point2> = outer_pts
        .iter()
        .chain(left.iter())
        .chain(right.iter())
        .copied()
        .collect();
    let mut boundary = edges(&outer_pts);
    boundary.extend(edges(&left));
    boundary.extend(edges(&right));
    let segs: Vec<(Point2, Point2)> = merged
        .bridges
        .iter()
        .map(|b| (all_points[b.from], all_points[b.to]))
        .collect();
    for &(p, q) in &segs {
        for &(a, b) in &boundary {
            assert!(!segments_cross(p, q, a, b, 1e-9));
        }
    }
    assert!(!segments_cross(segs[0].0, segs[0].1, segs[1].0, segs[1].1, 1e-9));
}

#[test]
fn short_holes_are_skipped_and_empty_lists_pass_through() {
    let outer_pts = square(0.0, 0.0, 4.0);
    let outer = Polygon::from_points(&outer_pts, 0).unwrap();
    let merged = merge_holes(outer.clone(), Vec::new(), &GeomCfg::default()).unwrap();
    assert_eq!(merged.polygon.ids(), outer.ids());
    assert!(merged.bridges.is_empty());

    let stub = loop_of(&[vector![1.0, 1.0], vector![2.0, 2.0]], 4);
    let merged = merge_holes(outer, vec![stub], &GeomCfg::default()).unwrap();
    assert_eq!(merged.polygon.len(), 4);
    assert_eq!(
        merged.diagnostics,
        vec![Diagnostic::HoleSkipped {
            hole: 0,
            vertices: 2
        }]
    );
}

#[test]
fn hole_outside_the_outer_loop_has_no_visible_vertex() {
    let outer = Polygon::from_points(&square(0.0, 0.0, 4.0), 0).unwrap();
    let stray = loop_of(&square(5.0, 1.0, 1.0), 4);
    assert_eq!(
        merge_holes(outer, vec![stray], &GeomCfg::default()).unwrap_err(),
        TriError::NoVisibleVertex { hole: 0 }
    );
}

#[test]
fn clockwise_outer_is_normalized() {
    let mut outer_pts = square(0.0, 0.0, 4.0);
    outer_pts.reverse();
    let outer = Polygon::from_points(&outer_pts, 0).unwrap();
    let merged = merge_holes(
        outer,
        vec![loop_of(&square(1.0, 1.0, 1.0), 4)],
        &GeomCfg::default(),
    )
    .unwrap();
    assert!((merged.polygon.signed_area() - 15.0).abs() < 1e-12);
}
