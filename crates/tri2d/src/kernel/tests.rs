use super::*;
use nalgebra::vector;

const EPS: f64 = 1e-9;

#[test]
fn orientation_classifies_three_sides() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert_eq!(orientation(a, b, vector![0.5, 1.0], EPS), Orientation::Left);
    assert_eq!(orientation(a, b, vector![0.5, -1.0], EPS), Orientation::Right);
    assert_eq!(orientation(a, b, vector![3.0, 0.0], EPS), Orientation::On);
    // Within eps of the line counts as On.
    assert_eq!(orientation(a, b, vector![0.5, 1e-12], EPS), Orientation::On);
}

#[test]
fn geom_cfg_orient_matches_free_function() {
    let cfg = GeomCfg::default();
    let (a, b, c) = (vector![0.0, 0.0], vector![2.0, 1.0], vector![1.0, 3.0]);
    assert_eq!(cfg.orient(a, b, c), orientation(a, b, c, cfg.eps_orient));
}

#[test]
fn angle_between_is_clamped_and_unsigned() {
    let u = vector![1.0, 0.0];
    assert!(angle_between(u, u).abs() < 1e-12);
    assert!((angle_between(u, vector![0.0, 2.0]) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((angle_between(u, vector![0.0, -2.0]) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((angle_between(u, vector![-3.0, 0.0]) - std::f64::consts::PI).abs() < 1e-12);
    // Parallel vectors with round-off never go NaN.
    let v = vector![0.1 + 0.2, 0.3 + 0.6];
    assert!(angle_between(v, v * 3.0).is_finite());
    assert_eq!(angle_between(u, vector![0.0, 0.0]), 0.0);
}

#[test]
fn signed_area_sign_tracks_winding() {
    let sq = [
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert!((signed_area(sq) - 1.0).abs() < 1e-12);
    let rev: Vec<_> = sq.iter().rev().copied().collect();
    assert!((signed_area(rev) + 1.0).abs() < 1e-12);
    assert_eq!(signed_area([vector![0.0, 0.0], vector![1.0, 1.0]]), 0.0);
}

#[test]
fn point_in_triangle_is_inclusive_for_both_windings() {
    let (a, b, c) = (vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]);
    for (x, y, inside) in [
        (0.5, 0.5, true),
        (1.0, 0.0, true),
        (1.0, 1.0, true),
        (0.0, 0.0, true),
        (1.5, 1.5, false),
        (-0.1, 0.5, false),
    ] {
        let p = vector![x, y];
        assert_eq!(point_in_triangle(p, a, b, c, EPS), inside, "ccw {p:?}");
        assert_eq!(point_in_triangle(p, a, c, b, EPS), inside, "cw {p:?}");
    }
}

#[test]
fn degenerate_triangle_contains_only_its_sides() {
    let (a, b, c) = (vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]);
    assert!(point_in_triangle(vector![1.5, 0.0], a, b, c, EPS));
    assert!(!point_in_triangle(vector![3.0, 0.0], a, b, c, EPS));
    assert!(!point_in_triangle(vector![1.0, 0.5], a, b, c, EPS));
}

#[test]
fn segments_cross_ignores_touching() {
    let o = vector![0.0, 0.0];
    let x = vector![2.0, 2.0];
    assert!(segments_cross(o, x, vector![0.0, 2.0], vector![2.0, 0.0], EPS));
    // Shared endpoint.
    assert!(!segments_cross(o, x, x, vector![3.0, 0.0], EPS));
    // T-junction touching the interior.
    assert!(!segments_cross(o, x, vector![1.0, 1.0], vector![2.0, 0.0], EPS));
    // Collinear overlap.
    assert!(!segments_cross(o, x, vector![1.0, 1.0], vector![3.0, 3.0], EPS));
    // Disjoint.
    assert!(!segments_cross(o, vector![1.0, 0.0], vector![0.0, 1.0], vector![1.0, 1.0], EPS));
}

#[test]
fn horizontal_ray_hits_and_misses() {
    let o = vector![0.0, 0.5];
    let hit = horizontal_ray_hit(o, 10.0, vector![2.0, 0.0], vector![4.0, 1.0]).unwrap();
    assert!((hit.x - 3.0).abs() < 1e-12 && (hit.y - 0.5).abs() < 1e-12);
    // Behind the origin.
    assert!(horizontal_ray_hit(o, 10.0, vector![-2.0, 0.0], vector![-1.0, 1.0]).is_none());
    // Beyond the ray end.
    assert!(horizontal_ray_hit(o, 1.0, vector![2.0, 0.0], vector![4.0, 1.0]).is_none());
    // Horizontal edge.
    assert!(horizontal_ray_hit(o, 10.0, vector![1.0, 0.5], vector![4.0, 0.5]).is_none());
    // Through an endpoint.
    let end = horizontal_ray_hit(o, 10.0, vector![5.0, 0.5], vector![5.0, 3.0]).unwrap();
    assert_eq!(end, vector![5.0, 0.5]);
}

#[test]
fn aabb_spread() {
    let b = Aabb2::from_points([vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 0.0]]).unwrap();
    assert_eq!(b.width(), 2.0);
    assert_eq!(b.height(), 0.0);
    assert!(b.is_degenerate(EPS));
    assert!(Aabb2::from_points(std::iter::empty()).is_none());
}

#[test]
fn orientation_tolerance_is_a_distance() {
    // Same shape at unit and 1e-5 scale classifies the same way.
    for scale in [1.0, 1e-5] {
        let a = vector![0.0, 0.0] * scale;
        let b = vector![1.0, 0.0] * scale;
        assert_eq!(orientation(a, b, vector![0.0, 1.0] * scale, EPS), Orientation::Left);
        assert_eq!(orientation(a, b, vector![0.0, -1.0] * scale, EPS), Orientation::Right);
    }
    // Offsets below eps stay On however long the base line is.
    let far = vector![1e6, 0.0];
    assert_eq!(orientation(vector![0.0, 0.0], far, vector![5.0, 1e-10], EPS), Orientation::On);
    assert_eq!(orientation(vector![0.0, 0.0], far, vector![5.0, 1e-6], EPS), Orientation::Left);
}

#[test]
fn slivers_are_measured_against_the_longest_side() {
    let (a, b) = (vector![0.0, 0.0], vector![2.0, 0.0]);
    assert!(is_sliver(a, b, vector![1.0, 1e-12], EPS));
    assert!(is_sliver(vector![1.0, 1e-12], a, b, EPS));
    assert!(!is_sliver(a, b, vector![1.0, 1e-6], EPS));
    let tiny = 1e-5;
    assert!(!is_sliver(a * tiny, b * tiny, vector![1.0, 1.0] * tiny, EPS));
}
