//! Failure kinds and non-fatal diagnostics.
//!
//! Every fallible operation returns `Result<_, TriError>`; nothing panics or
//! logs on the caller's behalf. Conditions that do not stop the pipeline are
//! collected as `Diagnostic` values on the result so a caller can render them
//! however it likes.

use std::fmt;

/// Bounded loop that tripped its safety cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Hull,
    EarClip,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Hull => write!(f, "hull construction"),
            Stage::EarClip => write!(f, "ear clipping"),
        }
    }
}

/// Errors surfaced by the triangulation pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum TriError {
    /// Fewer points or vertices than the operation needs.
    InsufficientPoints { got: usize, need: usize },
    /// Input collapses to a line or a point (bounding box or area below eps).
    DegenerateSpread { width: f64, height: f64 },
    /// A hole's extremal vertex has no connectable outer vertex.
    NoVisibleVertex { hole: usize },
    /// No ear left among `remaining` vertices (self-intersecting input).
    NonSimplePolygon { remaining: usize },
    /// A bounded loop exceeded its cap.
    IterationLimitExceeded { stage: Stage, limit: usize },
}

impl fmt::Display for TriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriError::InsufficientPoints { got, need } => {
                write!(f, "insufficient points: got {got}, need at least {need}")
            }
            TriError::DegenerateSpread { width, height } => write!(
                f,
                "degenerate input spread ({width:e} x {height:e}); points are collinear or coincident"
            ),
            TriError::NoVisibleVertex { hole } => {
                write!(f, "hole {hole} has no visible vertex on the outer boundary")
            }
            TriError::NonSimplePolygon { remaining } => write!(
                f,
                "no ear found with {remaining} vertices remaining; polygon is not simple"
            ),
            TriError::IterationLimitExceeded { stage, limit } => {
                write!(f, "{stage} exceeded its iteration limit of {limit}")
            }
        }
    }
}

impl std::error::Error for TriError {}

/// Non-fatal findings reported alongside a successful result.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Hole loop with fewer than three usable vertices; not merged.
    HoleSkipped { hole: usize, vertices: usize },
    /// Scattered point that could not be inserted (outside the hull after
    /// rounding, or coincident with an existing vertex).
    InteriorPointSkipped { index: usize },
    /// Zero-area triangles emitted from collinear runs.
    DegenerateTriangles { count: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::HoleSkipped { hole, vertices } => {
                write!(f, "hole {hole} skipped ({vertices} vertices, need 3)")
            }
            Diagnostic::InteriorPointSkipped { index } => {
                write!(f, "point {index} skipped during triangle splitting")
            }
            Diagnostic::DegenerateTriangles { count } => {
                write!(f, "{count} zero-area triangles from collinear vertices")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let e = TriError::IterationLimitExceeded {
            stage: Stage::Hull,
            limit: 14,
        };
        assert_eq!(
            e.to_string(),
            "hull construction exceeded its iteration limit of 14"
        );
        let e = TriError::InsufficientPoints { got: 2, need: 3 };
        assert!(e.to_string().contains("got 2"));
        let d = Diagnostic::HoleSkipped {
            hole: 1,
            vertices: 2,
        };
        assert_eq!(d.to_string(), "hole 1 skipped (2 vertices, need 3)");
    }

    #[test]
    fn error_is_std_error() {
        fn takes(_: &dyn std::error::Error) {}
        takes(&TriError::NoVisibleVertex { hole: 0 });
    }
}
