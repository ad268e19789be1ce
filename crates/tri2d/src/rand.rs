//! Seeded generators for triangulation inputs (replay tokens).
//!
//! Purpose
//! - Produce reproducible point clouds, star-shaped simple polygons, and
//!   polygons with nested disjoint holes for tests, benches, and the CLI.
//!
//! Model
//! - Star polygons: `n` equally spaced angles with bounded angular jitter,
//!   each at a jittered radius. Angles stay sorted, so the loop is simple and
//!   CCW around the origin.
//! - Holes: centered on a ring inside the outer loop's guaranteed-interior
//!   disc, sized so neighbors cannot touch. Returned CW.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `triangulate::Triangulator`

use std::f64::consts::PI;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kernel::Point2;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.45].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)` with `u∈[-radial_jitter, radial_jitter]`. Clamped to [0, 0.9].
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(16),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.4,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Polygon-with-holes sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct HolesCfg {
    pub outer: StarCfg,
    pub holes: usize,
    pub hole_vertices: VertexCount,
}
impl Default for HolesCfg {
    fn default() -> Self {
        Self {
            outer: StarCfg::default(),
            holes: 3,
            hole_vertices: VertexCount::Uniform { min: 3, max: 8 },
        }
    }
}

/// Outer loop (CCW) plus disjoint hole loops (CW) strictly inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonWithHoles {
    pub outer: Vec<Point2>,
    pub holes: Vec<Vec<Point2>>,
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// `count` points uniform in `[-half_extent, half_extent]²`.
pub fn random_points(count: usize, half_extent: f64, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let r = half_extent.abs().max(1e-9);
    (0..count)
        .map(|_| Vector2::new(rng.gen_range(-r..r), rng.gen_range(-r..r)))
        .collect()
}

/// Draw a star-shaped simple polygon around the origin, CCW.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    star_with(&mut rng, cfg, Vector2::zeros())
}

fn star_with<R: Rng>(rng: &mut R, cfg: StarCfg, center: Point2) -> Vec<Point2> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.45);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * PI
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Radius of a disc around the origin that every star polygon drawn from
/// `cfg` with `n` vertices contains: smallest radius times the cosine of half
/// the widest possible angular gap.
fn safe_radius(cfg: &StarCfg, n: usize) -> f64 {
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.45);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let gap = 2.0 * PI / (n as f64) * (1.0 + 2.0 * aj);
    let r_min = cfg.base_radius.max(1e-9) * (1.0 - rj);
    r_min * (0.5 * gap).cos().max(0.0)
}

/// Draw an outer star polygon with `cfg.holes` small star-shaped holes.
///
/// The outer loop gets at least 8 vertices so the interior disc used for hole
/// placement is not empty.
pub fn draw_polygon_with_holes(cfg: HolesCfg, tok: ReplayToken) -> PolygonWithHoles {
    let mut rng = tok.to_std_rng();
    let n = cfg.outer.vertex_count.sample(&mut rng).max(8);
    let outer_cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        ..cfg.outer
    };
    let outer = star_with(&mut rng, outer_cfg, Vector2::zeros());

    let k = cfg.holes;
    let r_safe = safe_radius(&outer_cfg, n);
    let ring = 0.5 * r_safe;
    let room = if k <= 1 {
        ring
    } else {
        ring * (PI / k as f64).sin()
    };
    let hole_cfg = StarCfg {
        vertex_count: cfg.hole_vertices,
        angle_jitter_frac: 0.3,
        radial_jitter: 0.25,
        base_radius: 0.6 * room,
        random_phase: true,
    };
    let phase = rng.gen::<f64>() * 2.0 * PI;
    let holes = (0..k)
        .map(|j| {
            let th = phase + 2.0 * PI * (j as f64) / (k as f64);
            let center = Vector2::new(th.cos() * ring, th.sin() * ring);
            let mut hole = star_with(&mut rng, hole_cfg, center);
            hole.reverse();
            hole
        })
        .collect();
    PolygonWithHoles { outer, holes }
}
