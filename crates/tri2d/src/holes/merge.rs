use crate::error::{Diagnostic, TriError};
use crate::kernel::GeomCfg;
use crate::polygon::{Polygon, Vertex};

use super::visibility::resolve_visible_vertex;

/// One seam: hole `hole` joined from its extremal vertex `from` to outer vertex `to` (ids).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bridge {
    pub hole: usize,
    pub from: usize,
    pub to: usize,
}

/// Outer loop with every usable hole spliced in.
#[derive(Clone, Debug)]
pub struct MergedPolygon {
    pub polygon: Polygon,
    /// In merge order (descending extremal x).
    pub bridges: Vec<Bridge>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Splice `holes` into `outer`.
///
/// The outer loop is made CCW and every hole CW first. Holes with fewer than
/// three distinct vertices are skipped with a `HoleSkipped` diagnostic; an
/// empty hole list returns `outer` unchanged apart from winding. Holes are
/// merged right to left so a later ray never has to pass through an unmerged
/// hole. Hole indices in diagnostics and errors refer to positions in `holes`.
pub fn merge_holes(
    mut outer: Polygon,
    holes: Vec<Vec<Vertex>>,
    geom: &GeomCfg,
) -> Result<MergedPolygon, TriError> {
    outer.make_ccw();
    let mut diagnostics = Vec::new();
    let mut ordered: Vec<(usize, Polygon)> = Vec::with_capacity(holes.len());
    for (index, hole) in holes.into_iter().enumerate() {
        let count = hole.len();
        match Polygon::new(hole) {
            Ok(mut poly) => {
                poly.make_cw();
                ordered.push((index, poly));
            }
            Err(_) => diagnostics.push(Diagnostic::HoleSkipped {
                hole: index,
                vertices: count,
            }),
        }
    }
    ordered.sort_by(|(_, a), (_, b)| {
        let (ea, eb) = (a.extremal().p, b.extremal().p);
        eb.x.total_cmp(&ea.x).then(eb.y.total_cmp(&ea.y))
    });

    let expected = outer.len() + ordered.iter().map(|(_, h)| h.len() + 2).sum::<usize>();
    let mut bridges = Vec::with_capacity(ordered.len());
    for (index, mut hole) in ordered {
        let h = hole.extremal();
        hole.rotate_to(hole.extremal_pos());
        let visible = resolve_visible_vertex(&outer, h.p, geom)
            .ok_or(TriError::NoVisibleVertex { hole: index })?;

        let mut seam: Vec<Vertex> = hole.vertices().to_vec();
        seam.push(h);
        seam.push(visible.vertex);
        outer.splice_after(visible.pos, seam);
        bridges.push(Bridge {
            hole: index,
            from: h.id,
            to: visible.vertex.id,
        });
    }
    debug_assert_eq!(outer.len(), expected);
    tracing::debug!(
        holes = bridges.len(),
        skipped = diagnostics.len(),
        vertices = outer.len(),
        "merged holes"
    );
    Ok(MergedPolygon {
        polygon: outer,
        bridges,
        diagnostics,
    })
}
