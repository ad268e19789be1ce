//! Basic 2D types and tolerances shared by every triangulation stage.
//!
//! - `GeomCfg`: centralizes epsilons for orientation, spread, and angle ties.
//! - `Orientation`: side of a directed line (`Left`/`On`/`Right`).
//! - `Aabb2`: axis-aligned bounds used for spread checks and ray lengths.

use nalgebra::Vector2;

use super::predicates::orientation;

/// Planar point (and vector) type used throughout the crate.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Points within this distance of a line classify as `On`.
    pub eps_orient: f64,
    /// Minimum bounding-box extent (per axis) and thickness for a
    /// non-degenerate input.
    pub eps_spread: f64,
    /// Angles closer than this (radians) count as tied.
    pub eps_angle: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_orient: 1e-9,
            eps_spread: 1e-9,
            eps_angle: 1e-9,
        }
    }
}

impl GeomCfg {
    /// `orientation(a, b, c, self.eps_orient)`.
    #[inline]
    pub fn orient(&self, a: Point2, b: Point2, c: Point2) -> Orientation {
        orientation(a, b, c, self.eps_orient)
    }
}

/// Side of the directed line `a → b` on which a query point lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    On,
    Right,
}

impl Orientation {
    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Orientation::Left)
    }
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, Orientation::On)
    }
    #[inline]
    pub fn is_right(self) -> bool {
        matches!(self, Orientation::Right)
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    /// Bounds of a point stream; `None` when the stream is empty.
    pub fn from_points<I: IntoIterator<Item = Point2>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Self {
            min: first,
            max: first,
        };
        for p in it {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    /// Spread check used by the hull builder and the polygon entry points.
    #[inline]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.width() < eps || self.height() < eps
    }
}
