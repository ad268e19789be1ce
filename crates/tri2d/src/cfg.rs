//! Pipeline configuration.
//!
//! Policy
//! - `geom` tolerances are absolute lengths; features smaller than them are
//!   treated as flat whatever the overall scale of the input.
//! - Iteration caps are derived from input size plus `iteration_slack`; they
//!   guard against numerical pathologies, never against legitimate work.
//! - `max_iterations` replaces the derived caps with one fixed bound, for
//!   callers that budget work per call.

use crate::hull::HullStrategy;
use crate::kernel::GeomCfg;

/// Configuration carried by a `Triangulator` and passed down to each stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriCfg {
    pub geom: GeomCfg,
    /// Treat collinear (180°) vertices as concave, so they are never clipped
    /// as zero-area ears.
    pub collinear_concave: bool,
    pub hull_strategy: HullStrategy,
    /// Added to every size-derived iteration cap.
    pub iteration_slack: usize,
    /// Fixed cap for every bounded loop; overrides the size-derived caps.
    pub max_iterations: Option<usize>,
}

impl Default for TriCfg {
    fn default() -> Self {
        Self {
            geom: GeomCfg::default(),
            collinear_concave: false,
            hull_strategy: HullStrategy::Deterministic,
            iteration_slack: 8,
            max_iterations: None,
        }
    }
}

impl TriCfg {
    /// Hull growth cap: each step accepts at least one point.
    #[inline]
    pub fn hull_limit(&self, points: usize) -> usize {
        self.max_iterations
            .unwrap_or(2 * points + self.iteration_slack)
    }

    /// Ear-clipping cap: each clip removes exactly one vertex.
    #[inline]
    pub fn clip_limit(&self, vertices: usize) -> usize {
        self.max_iterations
            .unwrap_or(vertices + self.iteration_slack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_cap_overrides_derived_caps() {
        let cfg = TriCfg::default();
        assert_eq!(cfg.hull_limit(10), 28);
        assert_eq!(cfg.clip_limit(10), 18);
        let capped = TriCfg {
            max_iterations: Some(3),
            ..TriCfg::default()
        };
        assert_eq!(capped.hull_limit(10), 3);
        assert_eq!(capped.clip_limit(10), 3);
    }
}
